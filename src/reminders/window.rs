//! Per-trip reminder predicates.
//!
//! Both predicates report only "active now"; turning that into a
//! shown-exactly-once event is the engine's job.

use chrono::{Duration, NaiveDate};

use crate::models::{Coordinates, Trip};
use crate::reminders::geo::distance_km;

/// True iff `today` falls inside the time-based reminder window
/// `[start - days_before_to_remind, start]`, inclusive on both ends.
/// The window closes at the start date even for multi-day trips.
pub fn time_reminder_active(trip: &Trip, today: NaiveDate) -> bool {
    let reminder_start = trip.start - Duration::days(trip.days_before_to_remind);
    today >= reminder_start && today <= trip.start
}

/// Distance from `fix` to the trip's target when it is within the trip's
/// proximity radius, `None` otherwise. Radius and distance are both
/// kilometers.
pub fn proximity_hit(trip: &Trip, fix: Coordinates) -> Option<f64> {
    let distance = distance_km(fix, trip.coordinates());
    (distance <= trip.radius_km).then_some(distance)
}
