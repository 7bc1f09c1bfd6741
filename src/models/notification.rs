//! Notification data models.
//!
//! One Time and one Location record exist per trip. `shown_to_user` is a
//! latch: it moves false -> true the first time the matching reminder
//! predicate fires and never resets. `unread` starts true and is cleared
//! only by an explicit user acknowledgement.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    Time,
    Location,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Time => "Time",
            NotificationKind::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub trip_id: i64,
    pub kind: NotificationKind,
    pub shown_to_user: bool,
    pub unread: bool,
}

impl Notification {
    /// A fresh pending record for a trip, before the store assigns an id.
    pub fn pending(trip_id: i64, kind: NotificationKind) -> Self {
        Self {
            id: 0,
            trip_id,
            kind,
            shown_to_user: false,
            unread: true,
        }
    }
}
