//! Serde adapter writing absent minute counts as `-`.
//!
//! Use with `#[serde(with = "sentinel")]` on `Option<u32>` fields.

use serde::{Deserialize, Deserializer, Serializer};

/// The absent-value marker.
pub const ABSENT: &str = "-";

/// Serializes `None` as `"-"` and `Some(n)` as the number.
pub fn serialize<S: Serializer>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(minutes) => serializer.serialize_u32(*minutes),
        None => serializer.serialize_str(ABSENT),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MinutesOrMarker {
    Minutes(u32),
    Marker(String),
}

/// Accepts a number, `"-"`, or `null`.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    match Option::<MinutesOrMarker>::deserialize(deserializer)? {
        Some(MinutesOrMarker::Minutes(minutes)) => Ok(Some(minutes)),
        Some(MinutesOrMarker::Marker(marker)) if marker == ABSENT => Ok(None),
        Some(MinutesOrMarker::Marker(other)) => Err(serde::de::Error::custom(format!(
            "expected minutes or '{}', found '{}'",
            ABSENT, other
        ))),
        None => Ok(None),
    }
}
