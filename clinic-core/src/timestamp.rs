use crate::error::FormError;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical output layout, e.g. `2024-01-02T13:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Tried in order before falling back to RFC 3339.
const NAIVE_LAYOUTS: [&str; 3] = [TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A wall-clock calendar timestamp.
///
/// The calendar widget and the server both talk in local wall time, so any
/// UTC offset present on input is dropped and the local reading kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Parse `YYYY-MM-DDTHH:MM[:SS[.fff]]` or an RFC 3339 string with offset.
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        let trimmed = raw.trim();
        for layout in NAIVE_LAYOUTS {
            if let Ok(at) = NaiveDateTime::parse_from_str(trimmed, layout) {
                return Ok(Self(at));
            }
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|at| Self(at.naive_local()))
            .map_err(|_| FormError::BadTimestamp(raw.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
