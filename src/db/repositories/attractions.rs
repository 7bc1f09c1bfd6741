use anyhow::Result;
use rusqlite::{params, Connection, Row};

use crate::db::{
    connection::Database,
    helpers::{date_to_text, parse_date, parse_priority},
};
use crate::models::Attraction;

pub(crate) fn row_to_attraction(row: &Row) -> Result<Attraction> {
    let date: String = row.get("date")?;
    let priority: String = row.get("priority")?;

    Ok(Attraction {
        id: row.get("id")?,
        trip_id: row.get("trip_id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        date: parse_date(&date, "date")?,
        done: row.get("done")?,
        priority: parse_priority(&priority)?,
    })
}

pub(crate) fn insert_attraction_rows(conn: &Connection, attractions: &[Attraction]) -> Result<()> {
    for attraction in attractions {
        conn.execute(
            "INSERT INTO attractions (trip_id, name, description, date, done, priority)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                attraction.trip_id,
                attraction.name,
                attraction.description,
                date_to_text(attraction.date),
                attraction.done,
                attraction.priority.as_str(),
            ],
        )?;
    }
    Ok(())
}

pub(crate) fn attractions_for_trip(conn: &Connection, trip_id: i64) -> Result<Vec<Attraction>> {
    let mut stmt = conn.prepare(
        "SELECT id, trip_id, name, description, date, done, priority
         FROM attractions
         WHERE trip_id = ?1
         ORDER BY id ASC",
    )?;
    let mut rows = stmt.query(params![trip_id])?;
    let mut attractions = Vec::new();
    while let Some(row) = rows.next()? {
        attractions.push(row_to_attraction(row)?);
    }
    Ok(attractions)
}

impl Database {
    pub async fn insert_attractions(&self, attractions: Vec<Attraction>) -> Result<()> {
        self.execute(move |conn| insert_attraction_rows(conn, &attractions))
            .await
    }

    pub async fn update_attraction(&self, attraction: &Attraction) -> Result<()> {
        let record = attraction.clone();
        self.execute(move |conn| {
            conn.execute(
                "UPDATE attractions
                 SET name = ?1,
                     description = ?2,
                     date = ?3,
                     done = ?4,
                     priority = ?5
                 WHERE id = ?6",
                params![
                    record.name,
                    record.description,
                    date_to_text(record.date),
                    record.done,
                    record.priority.as_str(),
                    record.id,
                ],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn delete_attraction(&self, attraction_id: i64) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "DELETE FROM attractions WHERE id = ?1",
                params![attraction_id],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn list_attractions_for_trip(&self, trip_id: i64) -> Result<Vec<Attraction>> {
        self.execute(move |conn| attractions_for_trip(conn, trip_id))
            .await
    }
}
