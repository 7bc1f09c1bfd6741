//! Drives one reminder pass against the store.
//!
//! Reads a snapshot of trips and notification records, evaluates the pure
//! engine, then persists the outcome: creation pairs go through the
//! guarded check-and-create so concurrent passes cannot double-insert,
//! and latch updates are written back one record at a time. Persistence
//! is best-effort; a failed write is logged and the pass carries on.

use anyhow::Result;
use log::{info, warn};

use crate::db::Database;
use crate::reminders::engine::{run_pass, ReminderContext, ReminderOutcome};

/// Evaluate reminders for every stored trip and persist the results.
/// Returns the display messages for the caller to surface.
pub async fn run_reminder_pass(db: &Database, context: ReminderContext) -> Result<Vec<String>> {
    let trips = db.list_trips().await?;
    let notifications = db.list_notifications().await?;

    let ReminderOutcome {
        messages,
        to_create,
        to_update,
    } = run_pass(context, &trips, &notifications);

    let mut new_trip_ids: Vec<i64> = to_create.iter().map(|n| n.trip_id).collect();
    new_trip_ids.dedup();
    for trip_id in new_trip_ids {
        match db.create_notifications_for_new_trip(trip_id).await {
            Ok(created) if created.is_empty() => {
                // Another pass won the creation race; nothing to do.
            }
            Ok(_) => info!("Created notification pair for trip {trip_id}"),
            Err(err) => warn!("Failed to create notifications for trip {trip_id}: {err}"),
        }
    }

    for record in &to_update {
        if let Err(err) = db.update_notification(record).await {
            warn!(
                "Failed to persist shown latch for notification {}: {err}",
                record.id
            );
        }
    }

    if !messages.is_empty() {
        info!("Reminder pass produced {} message(s)", messages.len());
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationKind, Trip};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn trip(name: &str, start: NaiveDate) -> Trip {
        Trip {
            id: 0,
            name: name.into(),
            description: String::new(),
            latitude: 48.8566,
            longitude: 2.3522,
            radius_km: 105.0,
            start,
            end: start,
            days_before_to_remind: 3,
            image_uri: String::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn first_pass_creates_pair_second_pass_surfaces_once() {
        let dir = tempdir().unwrap();
        let db = Database::new(dir.path().join("trips.db")).unwrap();
        db.insert_trip(&trip("Paris", date(2024, 6, 10))).await.unwrap();

        let context = ReminderContext {
            today: date(2024, 6, 8),
            fix: None,
        };

        // First pass: creation only, no message yet.
        let messages = run_reminder_pass(&db, context).await.unwrap();
        assert!(messages.is_empty());
        let records = db.list_notifications().await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|n| !n.shown_to_user && n.unread));

        // Second pass: the pending Time record fires and latches.
        let messages = run_reminder_pass(&db, context).await.unwrap();
        assert_eq!(messages, ["Upcoming trip: Paris"]);
        let records = db.list_notifications().await.unwrap();
        let time_record = records
            .iter()
            .find(|n| n.kind == NotificationKind::Time)
            .unwrap();
        assert!(time_record.shown_to_user);
        assert!(time_record.unread);

        // Third pass: latched, nothing new.
        let messages = run_reminder_pass(&db, context).await.unwrap();
        assert!(messages.is_empty());
    }
}
