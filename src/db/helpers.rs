use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::{LabelKind, NotificationKind, Priority};

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| anyhow!("failed to parse {field} '{value}': {err}"))
}

pub fn date_to_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_priority(value: &str) -> Result<Priority> {
    match value {
        "High" => Ok(Priority::High),
        "Medium" => Ok(Priority::Medium),
        "Low" => Ok(Priority::Low),
        other => Err(anyhow!("unknown priority '{other}'")),
    }
}

pub fn parse_label_kind(value: &str) -> Result<LabelKind> {
    match value {
        "Active" => Ok(LabelKind::Active),
        "Kid-Friendly" => Ok(LabelKind::Kids),
        "Beach" => Ok(LabelKind::Beach),
        "City Break" => Ok(LabelKind::City),
        "Cultural" => Ok(LabelKind::Culture),
        other => Err(anyhow!("unknown label kind '{other}'")),
    }
}

pub fn parse_notification_kind(value: &str) -> Result<NotificationKind> {
    match value {
        "Time" => Ok(NotificationKind::Time),
        "Location" => Ok(NotificationKind::Location),
        other => Err(anyhow!("unknown notification kind '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_kinds_round_trip_through_their_text() {
        for kind in [
            LabelKind::Active,
            LabelKind::Kids,
            LabelKind::Beach,
            LabelKind::City,
            LabelKind::Culture,
        ] {
            assert_eq!(parse_label_kind(kind.as_str()).unwrap(), kind);
        }
        assert!(parse_label_kind("Mountains").is_err());
    }

    #[test]
    fn dates_round_trip_through_iso_text() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(parse_date(&date_to_text(date), "start_date").unwrap(), date);
        assert!(parse_date("10/06/2024", "start_date").is_err());
    }
}
