use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::{
    connection::Database,
    helpers::{date_to_text, parse_date},
    repositories::{attractions::insert_attraction_rows, labels::insert_label_rows},
};
use crate::models::{Attraction, Label, LabelKind, Trip, TripDetails};

pub(crate) fn row_to_trip(row: &Row) -> Result<Trip> {
    let start: String = row.get("start_date")?;
    let end: String = row.get("end_date")?;

    Ok(Trip {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        radius_km: row.get("radius_km")?,
        start: parse_date(&start, "start_date")?,
        end: parse_date(&end, "end_date")?,
        days_before_to_remind: row.get("days_before_to_remind")?,
        image_uri: row.get("image_uri")?,
    })
}

fn insert_trip_row(conn: &Connection, trip: &Trip) -> Result<i64> {
    conn.execute(
        "INSERT INTO trips (name, description, latitude, longitude, radius_km, start_date, end_date, days_before_to_remind, image_uri)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            trip.name,
            trip.description,
            trip.latitude,
            trip.longitude,
            trip.radius_km,
            date_to_text(trip.start),
            date_to_text(trip.end),
            trip.days_before_to_remind,
            trip.image_uri,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

impl Database {
    /// Insert a trip on its own. The stored id is returned; the id on the
    /// passed value is ignored.
    pub async fn insert_trip(&self, trip: &Trip) -> Result<i64> {
        let record = trip.clone();
        self.execute(move |conn| insert_trip_row(conn, &record)).await
    }

    /// Insert a trip and its labels in one transaction.
    pub async fn insert_trip_with_labels(
        &self,
        trip: &Trip,
        kinds: Vec<LabelKind>,
    ) -> Result<i64> {
        let record = trip.clone();
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            let trip_id = insert_trip_row(&tx, &record)?;
            let labels: Vec<Label> = kinds
                .iter()
                .map(|kind| Label {
                    id: 0,
                    trip_id,
                    kind: *kind,
                })
                .collect();
            insert_label_rows(&tx, &labels)?;
            tx.commit()?;
            Ok(trip_id)
        })
        .await
    }

    /// Insert a trip together with its attractions and labels, rebinding the
    /// children to the freshly assigned trip id. Used when copying a
    /// discover template into the store.
    pub async fn insert_trip_with_details(&self, details: &TripDetails) -> Result<i64> {
        let record = details.clone();
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            let trip_id = insert_trip_row(&tx, &record.trip)?;

            let labels: Vec<Label> = record
                .labels
                .iter()
                .map(|label| Label { trip_id, ..label.clone() })
                .collect();
            insert_label_rows(&tx, &labels)?;

            let attractions: Vec<Attraction> = record
                .attractions
                .iter()
                .map(|attraction| Attraction {
                    trip_id,
                    ..attraction.clone()
                })
                .collect();
            insert_attraction_rows(&tx, &attractions)?;

            tx.commit()?;
            Ok(trip_id)
        })
        .await
    }

    pub async fn update_trip(&self, trip: &Trip) -> Result<()> {
        let record = trip.clone();
        self.execute(move |conn| {
            conn.execute(
                "UPDATE trips
                 SET name = ?1,
                     description = ?2,
                     latitude = ?3,
                     longitude = ?4,
                     radius_km = ?5,
                     start_date = ?6,
                     end_date = ?7,
                     days_before_to_remind = ?8,
                     image_uri = ?9
                 WHERE id = ?10",
                params![
                    record.name,
                    record.description,
                    record.latitude,
                    record.longitude,
                    record.radius_km,
                    date_to_text(record.start),
                    date_to_text(record.end),
                    record.days_before_to_remind,
                    record.image_uri,
                    record.id,
                ],
            )?;
            Ok(())
        })
        .await
    }

    /// Update a trip and replace its label set in one transaction.
    pub async fn update_trip_with_labels(
        &self,
        trip: &Trip,
        kinds: Vec<LabelKind>,
    ) -> Result<()> {
        let record = trip.clone();
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "UPDATE trips
                 SET name = ?1,
                     description = ?2,
                     latitude = ?3,
                     longitude = ?4,
                     radius_km = ?5,
                     start_date = ?6,
                     end_date = ?7,
                     days_before_to_remind = ?8,
                     image_uri = ?9
                 WHERE id = ?10",
                params![
                    record.name,
                    record.description,
                    record.latitude,
                    record.longitude,
                    record.radius_km,
                    date_to_text(record.start),
                    date_to_text(record.end),
                    record.days_before_to_remind,
                    record.image_uri,
                    record.id,
                ],
            )?;
            tx.execute("DELETE FROM labels WHERE trip_id = ?1", params![record.id])?;
            let labels: Vec<Label> = kinds
                .iter()
                .map(|kind| Label {
                    id: 0,
                    trip_id: record.id,
                    kind: *kind,
                })
                .collect();
            insert_label_rows(&tx, &labels)?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    pub async fn get_trip(&self, trip_id: i64) -> Result<Option<Trip>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, latitude, longitude, radius_km, start_date, end_date, days_before_to_remind, image_uri
                 FROM trips
                 WHERE id = ?1",
            )?;
            let mut rows = stmt.query(params![trip_id])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_trip(row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    pub async fn list_trips(&self) -> Result<Vec<Trip>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, latitude, longitude, radius_km, start_date, end_date, days_before_to_remind, image_uri
                 FROM trips
                 ORDER BY id ASC",
            )?;
            let mut rows = stmt.query([])?;
            let mut trips = Vec::new();
            while let Some(row) = rows.next()? {
                trips.push(row_to_trip(row)?);
            }
            Ok(trips)
        })
        .await
    }

    /// All trips with their attractions and labels, in id order.
    pub async fn list_trips_with_details(&self) -> Result<Vec<TripDetails>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, latitude, longitude, radius_km, start_date, end_date, days_before_to_remind, image_uri
                 FROM trips
                 ORDER BY id ASC",
            )?;
            let mut rows = stmt.query([])?;
            let mut trips = Vec::new();
            while let Some(row) = rows.next()? {
                trips.push(row_to_trip(row)?);
            }

            let mut details = Vec::with_capacity(trips.len());
            for trip in trips {
                let attractions =
                    crate::db::repositories::attractions::attractions_for_trip(conn, trip.id)?;
                let labels = crate::db::repositories::labels::labels_for_trip(conn, trip.id)?;
                details.push(TripDetails {
                    trip,
                    attractions,
                    labels,
                });
            }
            Ok(details)
        })
        .await
    }

    /// Delete a trip and its dependent rows. Labels, attractions, and
    /// notification records go first; the schema has no declarative
    /// cascades. Notification cleanup is deliberate: without it the rows
    /// would be orphaned forever.
    pub async fn delete_trip(&self, trip_id: i64) -> Result<()> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM labels WHERE trip_id = ?1", params![trip_id])?;
            tx.execute(
                "DELETE FROM attractions WHERE trip_id = ?1",
                params![trip_id],
            )?;
            tx.execute(
                "DELETE FROM notifications WHERE trip_id = ?1",
                params![trip_id],
            )?;
            tx.execute("DELETE FROM trips WHERE id = ?1", params![trip_id])?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    /// Newest trip by id, if any.
    pub async fn get_newest_trip(&self) -> Result<Option<Trip>> {
        self.execute(|conn| {
            conn.query_row(
                "SELECT id, name, description, latitude, longitude, radius_km, start_date, end_date, days_before_to_remind, image_uri
                 FROM trips
                 ORDER BY id DESC
                 LIMIT 1",
                [],
                |row| Ok(row_to_trip(row)),
            )
            .optional()?
            .transpose()
        })
        .await
    }
}
