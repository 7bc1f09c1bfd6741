use anyhow::Result;
use rusqlite::{params, Connection, Row};

use crate::db::{connection::Database, helpers::parse_notification_kind};
use crate::models::{Notification, NotificationKind};

pub(crate) fn row_to_notification(row: &Row) -> Result<Notification> {
    let kind: String = row.get("kind")?;

    Ok(Notification {
        id: row.get("id")?,
        trip_id: row.get("trip_id")?,
        kind: parse_notification_kind(&kind)?,
        shown_to_user: row.get("shown_to_user")?,
        unread: row.get("unread")?,
    })
}

fn insert_notification_row(conn: &Connection, notification: &Notification) -> Result<i64> {
    conn.execute(
        "INSERT INTO notifications (trip_id, kind, shown_to_user, unread)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            notification.trip_id,
            notification.kind.as_str(),
            notification.shown_to_user,
            notification.unread,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

impl Database {
    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, trip_id, kind, shown_to_user, unread
                 FROM notifications
                 ORDER BY id ASC",
            )?;
            let mut rows = stmt.query([])?;
            let mut notifications = Vec::new();
            while let Some(row) = rows.next()? {
                notifications.push(row_to_notification(row)?);
            }
            Ok(notifications)
        })
        .await
    }

    /// Unread records drive the notification badge.
    pub async fn list_unread_notifications(&self) -> Result<Vec<Notification>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, trip_id, kind, shown_to_user, unread
                 FROM notifications
                 WHERE unread = 1
                 ORDER BY id ASC",
            )?;
            let mut rows = stmt.query([])?;
            let mut notifications = Vec::new();
            while let Some(row) = rows.next()? {
                notifications.push(row_to_notification(row)?);
            }
            Ok(notifications)
        })
        .await
    }

    /// Check-and-create of a trip's Time/Location pair as one store task.
    /// Concurrent passes that both observe a trip without records cannot
    /// double-insert: the count check and the inserts run on the single
    /// worker thread inside one transaction. Returns the created pair, or
    /// an empty list if records already existed.
    pub async fn create_notifications_for_new_trip(
        &self,
        trip_id: i64,
    ) -> Result<Vec<Notification>> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            let existing: i64 = tx.query_row(
                "SELECT COUNT(*) FROM notifications WHERE trip_id = ?1",
                params![trip_id],
                |row| row.get(0),
            )?;
            if existing > 0 {
                return Ok(Vec::new());
            }

            let mut created = Vec::with_capacity(2);
            for kind in [NotificationKind::Time, NotificationKind::Location] {
                let mut record = Notification::pending(trip_id, kind);
                record.id = insert_notification_row(&tx, &record)?;
                created.push(record);
            }
            tx.commit()?;
            Ok(created)
        })
        .await
    }

    pub async fn insert_notifications(&self, notifications: Vec<Notification>) -> Result<()> {
        self.execute(move |conn| {
            for notification in &notifications {
                insert_notification_row(conn, notification)?;
            }
            Ok(())
        })
        .await
    }

    pub async fn update_notification(&self, notification: &Notification) -> Result<()> {
        let record = notification.clone();
        self.execute(move |conn| {
            conn.execute(
                "UPDATE notifications
                 SET shown_to_user = ?1,
                     unread = ?2
                 WHERE id = ?3",
                params![record.shown_to_user, record.unread, record.id],
            )?;
            Ok(())
        })
        .await
    }

    /// User acknowledgement: clears `unread`, leaves the shown latch alone.
    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "UPDATE notifications SET unread = 0 WHERE id = ?1",
                params![notification_id],
            )?;
            Ok(())
        })
        .await
    }
}
