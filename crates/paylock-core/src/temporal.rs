//! # Temporal Types
//!
//! UTC-only timestamp type for the escrow engine. All timestamps are
//! stored in UTC; the hold-interval gate compares wall-clock reads, so
//! ambiguity from local time zones is not acceptable anywhere in the
//! ledger. Local time conversion is a presentation concern for hosting
//! layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp.
///
/// Serializes through chrono's RFC 3339 form. The canonical string form
/// truncates to whole seconds, which is the engine's working precision —
/// the hold interval is counted in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Whole seconds elapsed from `earlier` to `self`.
    ///
    /// Negative when `self` precedes `earlier`; callers comparing against
    /// an interval treat that the same as "not yet elapsed".
    pub fn seconds_since(&self, earlier: &Timestamp) -> i64 {
        self.0.signed_duration_since(earlier.0).num_seconds()
    }

    /// The timestamp as an ISO 8601 string with `Z` suffix, truncated to
    /// seconds.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn canonical_string_truncates_to_seconds() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.to_canonical_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn seconds_since_measures_elapsed() {
        let start = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 8, 0, 0, 0).unwrap());
        assert_eq!(later.seconds_since(&start), 604_800);
        assert_eq!(start.seconds_since(&later), -604_800);
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn display_matches_canonical_string() {
        let ts = Timestamp::now();
        assert_eq!(ts.to_string(), ts.to_canonical_string());
    }

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
