//! Label data models.

use serde::{Deserialize, Serialize};

/// Fixed vocabulary of trip labels. The display text is also the persisted
/// form, so `as_str` and `db::helpers::parse_label_kind` must stay in sync.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LabelKind {
    Active,
    Kids,
    Beach,
    City,
    Culture,
}

impl LabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Active => "Active",
            LabelKind::Kids => "Kid-Friendly",
            LabelKind::Beach => "Beach",
            LabelKind::City => "City Break",
            LabelKind::Culture => "Cultural",
        }
    }
}

/// A tag categorizing a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: i64,
    pub trip_id: i64,
    pub kind: LabelKind,
}
