use anyhow::Result;
use rusqlite::{params, Connection, Row};

use crate::db::{connection::Database, helpers::parse_label_kind};
use crate::models::Label;

pub(crate) fn row_to_label(row: &Row) -> Result<Label> {
    let kind: String = row.get("kind")?;

    Ok(Label {
        id: row.get("id")?,
        trip_id: row.get("trip_id")?,
        kind: parse_label_kind(&kind)?,
    })
}

pub(crate) fn insert_label_rows(conn: &Connection, labels: &[Label]) -> Result<()> {
    for label in labels {
        conn.execute(
            "INSERT INTO labels (trip_id, kind) VALUES (?1, ?2)",
            params![label.trip_id, label.kind.as_str()],
        )?;
    }
    Ok(())
}

pub(crate) fn labels_for_trip(conn: &Connection, trip_id: i64) -> Result<Vec<Label>> {
    let mut stmt = conn.prepare(
        "SELECT id, trip_id, kind
         FROM labels
         WHERE trip_id = ?1
         ORDER BY id ASC",
    )?;
    let mut rows = stmt.query(params![trip_id])?;
    let mut labels = Vec::new();
    while let Some(row) = rows.next()? {
        labels.push(row_to_label(row)?);
    }
    Ok(labels)
}

impl Database {
    pub async fn insert_labels(&self, labels: Vec<Label>) -> Result<()> {
        self.execute(move |conn| insert_label_rows(conn, &labels))
            .await
    }

    pub async fn delete_labels_for_trip(&self, trip_id: i64) -> Result<()> {
        self.execute(move |conn| {
            conn.execute("DELETE FROM labels WHERE trip_id = ?1", params![trip_id])?;
            Ok(())
        })
        .await
    }

    pub async fn list_labels_for_trip(&self, trip_id: i64) -> Result<Vec<Label>> {
        self.execute(move |conn| labels_for_trip(conn, trip_id))
            .await
    }
}
