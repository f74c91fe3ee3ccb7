use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// Server timestamp.
///
/// The API emits both offset-aware RFC 3339 values (`sentAt`) and local date-times
/// without an offset (`createdAt`); the latter are taken as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn parse(raw: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Ok(Self(dt.with_timezone(&Utc))),
            Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Self(naive.and_utc())),
        }
    }

    /// Medium date, e.g. `12 Mar 2025`.
    pub fn date(&self) -> String {
        self.0.format("%d %b %Y").to_string()
    }

    /// Medium date with short time, e.g. `12 Mar 2025, 14:05`.
    pub fn date_time(&self) -> String {
        self.0.format("%d %b %Y, %H:%M").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Timestamp::parse(&raw).map_err(D::Error::custom)
    }
}
