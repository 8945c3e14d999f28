//! UTC timestamp value object.
//!
//! Access-expiry fields on subscription and purchase records are the main
//! consumer; the interesting question is always "has this lapsed yet".

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC, serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// True once this moment has passed. Expiry checks compare against
    /// the wall clock at call time.
    pub fn is_past(&self) -> bool {
        self.0 < Utc::now()
    }

    /// Shifts by whole days; negative values go backwards.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn yesterday_is_past_tomorrow_is_not() {
        assert!(Timestamp::now().add_days(-1).is_past());
        assert!(!Timestamp::now().add_days(1).is_past());
    }

    #[test]
    fn add_days_shifts_in_both_directions() {
        let base = Timestamp::now();
        assert!(base.add_days(-7) < base);
        assert!(base.add_days(7) > base);
        assert_eq!(base.add_days(3).add_days(-3), base);
    }

    #[test]
    fn deserializes_backend_rfc3339_strings() {
        let ts: Timestamp = serde_json::from_str("\"2026-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2026);
        assert!(ts.is_past());
    }
}
