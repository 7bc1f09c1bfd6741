use anyhow::Result;
use chrono::Local;
use log::info;

use tripwizard::discover::template_trips;
use tripwizard::reminders::{run_reminder_pass, ReminderContext};
use tripwizard::{AppConfig, Database, SettingsStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let db = Database::new(config.db_path.clone())?;
    let settings = SettingsStore::new(config.settings_path.clone())?;

    let today = Local::now().date_naive();

    if std::env::args().nth(1).as_deref() == Some("seed") {
        for details in template_trips(today) {
            let trip_id = db.insert_trip_with_details(&details).await?;
            info!("Seeded discover trip '{}' as id {trip_id}", details.trip.name);
        }
        return Ok(());
    }

    let context = ReminderContext {
        today,
        fix: settings.latest_user_location(),
    };

    let messages = run_reminder_pass(&db, context).await?;
    for message in &messages {
        println!("{message}");
    }
    info!(
        "Reminder pass complete: {} message(s), {} unread notification(s)",
        messages.len(),
        db.list_unread_notifications().await?.len()
    );

    Ok(())
}
