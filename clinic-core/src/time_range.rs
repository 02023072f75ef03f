//! Working schedule ranges and their hidden-field encoding.

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// One drag-selected block of availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeRange {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }
}

/// Decode the hidden field payload.
///
/// Blank input is an empty schedule; anything that is not a JSON list of
/// `{start, end}` objects is an error.
pub fn parse_schedule(raw: &str) -> anyhow::Result<Vec<TimeRange>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

/// Encode ranges for the hidden field, e.g.
/// `[{"start":"2024-01-01T09:00:00","end":"2024-01-01T10:00:00"}]`.
pub fn serialize_schedule(ranges: &[TimeRange]) -> String {
    serde_json::to_string(ranges).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(Timestamp::parse(start).unwrap(), Timestamp::parse(end).unwrap())
    }

    #[test]
    fn serializes_compact_start_end_objects() {
        let ranges = vec![range("2024-01-01T09:00:00", "2024-01-01T10:00:00")];
        assert_eq!(
            serialize_schedule(&ranges),
            r#"[{"start":"2024-01-01T09:00:00","end":"2024-01-01T10:00:00"}]"#
        );
        assert_eq!(serialize_schedule(&[]), "[]");
    }

    #[test]
    fn round_trip_preserves_order() {
        let ranges = vec![
            range("2024-01-03T08:00:00", "2024-01-03T09:00:00"),
            range("2024-01-01T09:00:00", "2024-01-01T10:00:00"),
            range("2024-01-03T08:00:00", "2024-01-03T09:00:00"),
        ];
        let decoded = parse_schedule(&serialize_schedule(&ranges)).unwrap();
        assert_eq!(decoded, ranges);
    }

    #[test]
    fn blank_is_empty_schedule() {
        assert!(parse_schedule("").unwrap().is_empty());
        assert!(parse_schedule("   ").unwrap().is_empty());
        assert!(parse_schedule("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_payloads_are_errors() {
        assert!(parse_schedule("[{\"start\":").is_err());
        assert!(parse_schedule(r#"{"start":"2024-01-01T09:00:00","end":"2024-01-01T10:00:00"}"#).is_err());
        assert!(parse_schedule(r#"[{"start":"2024-01-01T09:00:00"}]"#).is_err());
        assert!(parse_schedule("null").is_err());
    }
}
