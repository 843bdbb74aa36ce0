//! Common data types used throughout the application

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::MS_PER_MINUTE;

/// One closed browsing session, as reported by the browser-side tracker.
///
/// Events are written once by the event store and never mutated. The
/// `domain` is stored exactly as reported; case or scheme differences
/// produce distinct domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Site identifier, e.g. a hostname string.
    pub domain: String,
    /// Session close time, milliseconds since the Unix epoch.
    pub close_ts_ms: i64,
    /// Milliseconds the user was actively engaged during the session.
    pub active_duration_ms: i64,
}

impl ActivityEvent {
    /// Get the close time as a local-timezone DateTime.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn close_time_local(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.close_ts_ms).map(|dt| dt.with_timezone(&Local))
    }

    /// Get the local calendar date the session closed on.
    pub fn date_local(&self) -> Option<NaiveDate> {
        self.close_time_local().map(|dt| dt.date_naive())
    }

    /// Active duration converted to minutes.
    pub fn active_minutes(&self) -> f64 {
        self.active_duration_ms as f64 / MS_PER_MINUTE
    }
}

/// Inbound ingestion payload from the tracker.
///
/// All fields are optional on the wire. Absent fields are persisted as
/// empty string / zero rather than rejected; validation is the reporting
/// tracker's contract, not the store's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub close_time: Option<i64>,
    #[serde(default)]
    pub active_duration: Option<i64>,
}

impl EventPayload {
    /// Convert the payload into a storable event, defaulting absent fields.
    pub fn into_event(self) -> ActivityEvent {
        ActivityEvent {
            domain: self.domain.unwrap_or_default(),
            close_ts_ms: self.close_time.unwrap_or_default(),
            active_duration_ms: self.active_duration.unwrap_or_default(),
        }
    }
}

/// Total active minutes for one calendar day of the report window.
///
/// Derived and ephemeral; recomputed on every report request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub day: NaiveDate,
    /// Minutes, rounded to two decimal places.
    pub total_minutes: f64,
}

/// Cumulative active minutes for one domain across the report window.
///
/// Derived and ephemeral. `total_minutes` stays unrounded here; rounding
/// is applied at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainUsage {
    pub domain: String,
    pub total_minutes: f64,
}

/// The full weekly report: 7-entry daily series plus ranked domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Per-day totals in chronological order, zero-filled.
    pub daily: Vec<DailyUsage>,
    /// All observed domains, descending by total minutes.
    pub domains: Vec<DomainUsage>,
}

/// Round a minutes value to two decimal places for display.
pub fn round_minutes(minutes: f64) -> f64 {
    (minutes * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_absent_fields() {
        let payload = EventPayload { domain: None, close_time: None, active_duration: None };
        let event = payload.into_event();
        assert_eq!(event.domain, "");
        assert_eq!(event.close_ts_ms, 0);
        assert_eq!(event.active_duration_ms, 0);
    }

    #[test]
    fn payload_deserializes_tracker_field_names() {
        let json = r#"{"domain":"news.ycombinator.com","closeTime":1717750800000,"activeDuration":120000}"#;
        let payload: EventPayload = serde_json::from_str(json).unwrap();
        let event = payload.into_event();
        assert_eq!(event.domain, "news.ycombinator.com");
        assert_eq!(event.close_ts_ms, 1_717_750_800_000);
        assert_eq!(event.active_duration_ms, 120_000);
    }

    #[test]
    fn active_minutes_converts_milliseconds() {
        let event = ActivityEvent {
            domain: "a.com".into(),
            close_ts_ms: 0,
            active_duration_ms: 90_000,
        };
        assert!((event.active_minutes() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn round_minutes_two_decimals() {
        assert_eq!(round_minutes(2.346), 2.35);
        assert_eq!(round_minutes(0.004), 0.0);
        assert_eq!(round_minutes(0.0), 0.0);
    }
}
