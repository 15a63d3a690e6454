//! Serde glue for YANG JSON encoding quirks (RFC 7951).

use chrono::{DateTime, FixedOffset};
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
use std::{fmt::Display, str::FromStr};

/// 64-bit integers travel as JSON strings; older firmware sends plain
/// numbers. Accept both, emit strings.
pub mod counter {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Num(T),
        Str(String),
    }

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr + Deserialize<'de>,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Option::<Repr<T>>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Num(n)) => Ok(Some(n)),
            Some(Repr::Str(s)) => s.trim().parse().map(Some).map_err(D::Error::custom),
        }
    }
}

/// Parse a YANG `date-and-time` leaf.
///
/// The controller reports "never" as the Unix epoch; that maps to `None`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_rfc3339(value.trim()).ok()?;
    if parsed.timestamp() == 0 {
        None
    } else {
        Some(parsed)
    }
}
