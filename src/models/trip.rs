//! Trip data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Attraction, Coordinates, Label};

/// A planned journey with a target location, date range, and reminder
/// configuration. `radius_km` is the proximity threshold in kilometers,
/// compared directly against great-circle distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days_before_to_remind: i64,
    pub image_uri: String,
}

impl Trip {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A trip together with its attractions and labels, as read from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub trip: Trip,
    pub attractions: Vec<Attraction>,
    pub labels: Vec<Label>,
}
