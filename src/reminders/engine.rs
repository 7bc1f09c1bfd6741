//! Reminder evaluation pass: deduplicated, shown-exactly-once reminders.
//!
//! Each pass works on a consistent snapshot of trips and notifications and
//! is idempotent: a record that has latched `shown_to_user` never produces
//! another message, and creation pairs emitted here are not visible to the
//! same pass's predicate steps, so creating records alone never emits a
//! message.

use chrono::NaiveDate;

use crate::models::{Coordinates, Notification, NotificationKind, Trip};
use crate::reminders::window::{proximity_hit, time_reminder_active};

/// Snapshot inputs for one evaluation pass. Pass-by-value, no hidden state.
#[derive(Debug, Clone, Copy)]
pub struct ReminderContext {
    pub today: NaiveDate,
    pub fix: Option<Coordinates>,
}

/// Result of one pass: messages to surface, pairs to insert for trips seen
/// for the first time, and records whose `shown_to_user` latch flipped.
#[derive(Debug, Default)]
pub struct ReminderOutcome {
    pub messages: Vec<String>,
    pub to_create: Vec<Notification>,
    pub to_update: Vec<Notification>,
}

impl ReminderOutcome {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.to_create.is_empty() && self.to_update.is_empty()
    }
}

/// Evaluate every trip against the context and the existing notification
/// records. Performs no persistence; the caller applies `to_create` and
/// `to_update` to the store.
pub fn run_pass(
    context: ReminderContext,
    trips: &[Trip],
    notifications: &[Notification],
) -> ReminderOutcome {
    let mut outcome = ReminderOutcome::default();

    // Trips observed with no record of any kind get their Time/Location
    // pair. The new records are deliberately not consulted below: a trip's
    // first pass only creates, it never surfaces.
    for trip in trips {
        if !notifications.iter().any(|n| n.trip_id == trip.id) {
            outcome
                .to_create
                .push(Notification::pending(trip.id, NotificationKind::Time));
            outcome
                .to_create
                .push(Notification::pending(trip.id, NotificationKind::Location));
        }
    }

    for trip in trips {
        if !time_reminder_active(trip, context.today) {
            continue;
        }
        let pending = notifications.iter().find(|n| {
            n.trip_id == trip.id && n.kind == NotificationKind::Time && !n.shown_to_user
        });
        if let Some(record) = pending {
            outcome.messages.push(time_message(trip, context.today));
            outcome.to_update.push(Notification {
                shown_to_user: true,
                ..record.clone()
            });
        }
    }

    if let Some(fix) = context.fix {
        for trip in trips {
            let Some(distance) = proximity_hit(trip, fix) else {
                continue;
            };
            let pending = notifications.iter().find(|n| {
                n.trip_id == trip.id && n.kind == NotificationKind::Location && !n.shown_to_user
            });
            if let Some(record) = pending {
                outcome.messages.push(location_message(trip, distance));
                outcome.to_update.push(Notification {
                    shown_to_user: true,
                    ..record.clone()
                });
            }
        }
    }

    outcome
}

fn time_message(trip: &Trip, today: NaiveDate) -> String {
    if today >= trip.start {
        if trip.name.is_empty() {
            format!("Trip: {} is currently active", trip.id)
        } else {
            format!("Trip: {} is currently active", trip.name)
        }
    } else if trip.name.is_empty() {
        format!("Upcoming trip: {}", trip.id)
    } else {
        format!("Upcoming trip: {}", trip.name)
    }
}

fn location_message(trip: &Trip, distance_km: f64) -> String {
    if trip.name.is_empty() {
        format!("Trip: {} is close by ({:.1} km)", trip.id, distance_km)
    } else {
        format!("Trip: {} is close by ({:.1} km)", trip.name, distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn trip(id: i64, name: &str, start: NaiveDate, days_before: i64) -> Trip {
        Trip {
            id,
            name: name.into(),
            description: String::new(),
            latitude: 48.8566,
            longitude: 2.3522,
            radius_km: 105.0,
            start,
            end: start + Duration::days(4),
            days_before_to_remind: days_before,
            image_uri: String::new(),
        }
    }

    fn records_for(trip_id: i64, base_id: i64) -> Vec<Notification> {
        vec![
            Notification {
                id: base_id,
                ..Notification::pending(trip_id, NotificationKind::Time)
            },
            Notification {
                id: base_id + 1,
                ..Notification::pending(trip_id, NotificationKind::Location)
            },
        ]
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context(today: NaiveDate) -> ReminderContext {
        ReminderContext { today, fix: None }
    }

    #[test]
    fn new_trip_gets_exactly_one_pair_and_no_message() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let outcome = run_pass(context(date(2024, 6, 8)), &trips, &[]);

        assert_eq!(outcome.to_create.len(), 2);
        let kinds: Vec<_> = outcome.to_create.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, [NotificationKind::Time, NotificationKind::Location]);
        for record in &outcome.to_create {
            assert_eq!(record.trip_id, 1);
            assert!(!record.shown_to_user);
            assert!(record.unread);
        }
        // Creation alone surfaces nothing, even inside the time window.
        assert!(outcome.messages.is_empty());
        assert!(outcome.to_update.is_empty());
    }

    #[test]
    fn trip_with_any_existing_record_gets_no_new_pair() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let records = records_for(1, 10);
        let outcome = run_pass(context(date(2024, 1, 1)), &trips, &records);
        assert!(outcome.to_create.is_empty());
    }

    #[test]
    fn upcoming_message_inside_the_window() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let records = records_for(1, 10);
        let outcome = run_pass(context(date(2024, 6, 8)), &trips, &records);

        assert_eq!(outcome.messages, ["Upcoming trip: Paris"]);
        assert_eq!(outcome.to_update.len(), 1);
        let updated = &outcome.to_update[0];
        assert_eq!(updated.id, 10);
        assert!(updated.shown_to_user);
        assert!(updated.unread, "latch must not touch unread");
    }

    #[test]
    fn active_message_on_the_start_date() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let records = records_for(1, 10);
        let outcome = run_pass(context(date(2024, 6, 10)), &trips, &records);
        assert_eq!(outcome.messages, ["Trip: Paris is currently active"]);
    }

    #[test]
    fn window_closed_after_start_date() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let records = records_for(1, 10);
        let outcome = run_pass(context(date(2024, 6, 11)), &trips, &records);
        assert!(outcome.is_empty());
    }

    #[test]
    fn empty_name_falls_back_to_id() {
        let trips = vec![trip(7, "", date(2024, 6, 10), 3)];
        let records = records_for(7, 10);
        let outcome = run_pass(context(date(2024, 6, 8)), &trips, &records);
        assert_eq!(outcome.messages, ["Upcoming trip: 7"]);
    }

    #[test]
    fn latched_time_record_is_never_re_emitted() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let mut records = records_for(1, 10);

        let first = run_pass(context(date(2024, 6, 8)), &trips, &records);
        assert_eq!(first.messages.len(), 1);
        records[0] = first.to_update[0].clone();

        // Same snapshot shape, latch applied: nothing new.
        let second = run_pass(context(date(2024, 6, 8)), &trips, &records);
        assert!(second.is_empty());
        // Later days inside the window stay quiet too.
        let third = run_pass(context(date(2024, 6, 10)), &trips, &records);
        assert!(third.is_empty());
    }

    #[test]
    fn proximity_message_includes_distance_to_one_decimal() {
        let trips = vec![trip(1, "Paris", date(2024, 9, 1), 3)];
        let records = records_for(1, 10);
        let ctx = ReminderContext {
            today: date(2024, 6, 1),
            fix: Some(Coordinates::new(48.8566, 2.3522)),
        };
        let outcome = run_pass(ctx, &trips, &records);

        assert_eq!(outcome.messages, ["Trip: Paris is close by (0.0 km)"]);
        let updated = &outcome.to_update[0];
        assert_eq!(updated.kind, NotificationKind::Location);
        assert!(updated.shown_to_user);
    }

    #[test]
    fn no_fix_means_no_proximity_events() {
        let trips = vec![trip(1, "Paris", date(2024, 9, 1), 3)];
        let records = records_for(1, 10);
        let outcome = run_pass(context(date(2024, 6, 1)), &trips, &records);
        assert!(outcome.messages.is_empty());
    }

    #[test]
    fn fix_outside_radius_stays_quiet() {
        let trips = vec![trip(1, "Paris", date(2024, 9, 1), 3)];
        let records = records_for(1, 10);
        let ctx = ReminderContext {
            today: date(2024, 6, 1),
            // New York is nowhere near a 105 km radius around Paris.
            fix: Some(Coordinates::new(40.7128, -74.006)),
        };
        let outcome = run_pass(ctx, &trips, &records);
        assert!(outcome.is_empty());
    }

    #[test]
    fn latched_location_record_is_never_re_emitted() {
        let trips = vec![trip(1, "Paris", date(2024, 9, 1), 3)];
        let mut records = records_for(1, 10);
        let ctx = ReminderContext {
            today: date(2024, 6, 1),
            fix: Some(Coordinates::new(48.8566, 2.3522)),
        };

        let first = run_pass(ctx, &trips, &records);
        assert_eq!(first.messages.len(), 1);
        records[1] = first.to_update[0].clone();

        let second = run_pass(ctx, &trips, &records);
        assert!(second.is_empty());
    }

    #[test]
    fn both_kinds_can_fire_in_one_pass() {
        let trips = vec![trip(1, "Paris", date(2024, 6, 10), 3)];
        let records = records_for(1, 10);
        let ctx = ReminderContext {
            today: date(2024, 6, 9),
            fix: Some(Coordinates::new(48.8566, 2.3522)),
        };
        let outcome = run_pass(ctx, &trips, &records);

        assert_eq!(
            outcome.messages,
            ["Upcoming trip: Paris", "Trip: Paris is close by (0.0 km)"]
        );
        assert_eq!(outcome.to_update.len(), 2);
    }

    #[test]
    fn independent_trips_are_evaluated_independently() {
        let trips = vec![
            trip(1, "Paris", date(2024, 6, 10), 3),
            trip(2, "Berlin", date(2024, 7, 1), 1),
        ];
        let mut records = records_for(1, 10);
        records.extend(records_for(2, 20));

        let outcome = run_pass(context(date(2024, 6, 8)), &trips, &records);
        assert_eq!(outcome.messages, ["Upcoming trip: Paris"]);
        assert_eq!(outcome.to_update.len(), 1);
        assert_eq!(outcome.to_update[0].trip_id, 1);
    }
}
