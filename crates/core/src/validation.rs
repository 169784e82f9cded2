//! Field-level validation shared by the record input types.
//!
//! Handlers run validation before any persistence call, so the store only
//! ever sees fully-formed records.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::types::Timestamp;

/// Why a record payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent or `null`.
    #[error("`{0}` is required")]
    Missing(&'static str),

    /// A required text field was present but empty.
    #[error("`{0}` must not be empty")]
    Empty(&'static str),

    /// A budget month not in `YYYY-MM` form.
    #[error("`month` must be in YYYY-MM form, got '{0}'")]
    InvalidMonth(String),
}

/// Require a non-empty text field.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing(field)),
        Some(v) if v.is_empty() => Err(ValidationError::Empty(field)),
        Some(v) => Ok(v),
    }
}

/// Require a numeric field. Any finite or signed value is accepted.
pub fn require_number(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    value.ok_or(ValidationError::Missing(field))
}

/// Deserialize an optional timestamp given either as RFC 3339 or as a bare
/// `YYYY-MM-DD` date, taken as midnight in the server's local timezone so it
/// lands in the same month the analytics buckets by. Empty strings count as
/// absent.
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_flexible_date(s, &Local)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Parse RFC 3339, or a bare `YYYY-MM-DD` as midnight in `tz`.
pub fn parse_flexible_date<Tz: TimeZone>(s: &str, tz: &Tz) -> Result<Timestamp, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}', expected RFC 3339 or YYYY-MM-DD"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date '{s}'"))?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| format!("midnight on '{s}' does not exist locally"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[derive(Debug, Deserialize)]
    struct DateField {
        #[serde(default, deserialize_with = "deserialize_flexible_date")]
        date: Option<Timestamp>,
    }

    fn parse_field(json: &str) -> Result<Option<Timestamp>, serde_json::Error> {
        serde_json::from_str::<DateField>(json).map(|p| p.date)
    }

    #[test]
    fn require_text_rejects_missing_and_empty() {
        assert_eq!(
            require_text("description", None),
            Err(ValidationError::Missing("description"))
        );
        assert_eq!(
            require_text("description", Some(String::new())),
            Err(ValidationError::Empty("description"))
        );
        assert_eq!(require_text("description", Some("Lunch".into())).unwrap(), "Lunch");
    }

    #[test]
    fn require_number_accepts_negative_and_zero() {
        assert_eq!(require_number("amount", Some(-3.5)).unwrap(), -3.5);
        assert_eq!(require_number("amount", Some(0.0)).unwrap(), 0.0);
        assert_eq!(require_number("amount", None), Err(ValidationError::Missing("amount")));
    }

    #[test]
    fn date_accepts_rfc3339() {
        let d = parse_field(r#"{"date":"2024-03-05T10:30:00+02:00"}"#).unwrap().unwrap();
        assert_eq!(d.to_rfc3339(), "2024-03-05T08:30:00+00:00");
    }

    #[test]
    fn date_accepts_bare_day_as_local_midnight() {
        let d = parse_field(r#"{"date":"2024-03-05"}"#).unwrap().unwrap();
        let local = d.with_timezone(&Local);
        assert_eq!(local.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-05 00:00:00");
    }

    #[test]
    fn bare_day_west_of_utc_is_that_zones_midnight() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let d = parse_flexible_date("2024-05-01", &new_york).unwrap();
        assert_eq!(d.to_rfc3339(), "2024-05-01T05:00:00+00:00");
    }

    #[test]
    fn date_absent_null_or_empty_is_none() {
        assert!(parse_field("{}").unwrap().is_none());
        assert!(parse_field(r#"{"date":null}"#).unwrap().is_none());
        assert!(parse_field(r#"{"date":""}"#).unwrap().is_none());
    }

    #[test]
    fn date_garbage_is_an_error() {
        let err = parse_field(r#"{"date":"yesterday"}"#).unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(ValidationError::Missing("amount").to_string(), "`amount` is required");
        assert_eq!(
            ValidationError::InvalidMonth("2024-13".into()).to_string(),
            "`month` must be in YYYY-MM form, got '2024-13'"
        );
    }
}
