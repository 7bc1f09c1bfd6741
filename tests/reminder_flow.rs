//! End-to-end reminder flow: settings location feeding a pass over the store.

use chrono::NaiveDate;
use tempfile::TempDir;

use tripwizard::models::{Coordinates, NotificationKind, Trip};
use tripwizard::reminders::{run_reminder_pass, ReminderContext};
use tripwizard::{Database, SettingsStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn stored_location_drives_a_proximity_reminder() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(dir.path().join("trips.db")).unwrap();
    let settings = SettingsStore::new(dir.path().join("settings.json")).unwrap();

    db.insert_trip(&Trip {
        id: 0,
        name: "Paris".into(),
        description: String::new(),
        latitude: 48.8566,
        longitude: 2.3522,
        radius_km: 105.0,
        // Far in the future so only the proximity side can fire.
        start: date(2030, 1, 1),
        end: date(2030, 1, 5),
        days_before_to_remind: 1,
        image_uri: String::new(),
    })
    .await
    .unwrap();

    settings
        .save_latest_user_location(Coordinates::new(48.8566, 2.3522))
        .unwrap();

    let context = ReminderContext {
        today: date(2024, 6, 1),
        fix: settings.latest_user_location(),
    };

    // Pass one creates the pair, pass two surfaces the proximity reminder.
    assert!(run_reminder_pass(&db, context).await.unwrap().is_empty());
    let messages = run_reminder_pass(&db, context).await.unwrap();
    assert_eq!(messages, ["Trip: Paris is close by (0.0 km)"]);

    let records = db.list_notifications().await.unwrap();
    let location = records
        .iter()
        .find(|n| n.kind == NotificationKind::Location)
        .unwrap();
    let time = records
        .iter()
        .find(|n| n.kind == NotificationKind::Time)
        .unwrap();
    assert!(location.shown_to_user);
    assert!(!time.shown_to_user);

    // Re-running with the same context stays quiet.
    assert!(run_reminder_pass(&db, context).await.unwrap().is_empty());
}
