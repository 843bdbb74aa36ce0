//! Trailing report window resolution.
//!
//! Every report covers the same canonical window: the 7 calendar days
//! ending today, in the process-local timezone, bounded at calendar-day
//! boundaries rather than a rolling 168-hour span. The resolved window is
//! independent of the time of day the report is requested.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tabtally_domain::constants::REPORT_WINDOW_DAYS;

/// The resolved 7-day report window.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportWindow {
    start: DateTime<Local>,
    end: DateTime<Local>,
    days: Vec<NaiveDate>,
}

impl ReportWindow {
    /// Resolve the window for the given "now".
    ///
    /// Pure function of `now` and the local timezone; calling it twice with
    /// the same input yields the same window.
    pub fn resolve(now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let window_start = today - Duration::days(REPORT_WINDOW_DAYS as i64 - 1);

        let days: Vec<NaiveDate> =
            (0..REPORT_WINDOW_DAYS as i64).map(|offset| window_start + Duration::days(offset)).collect();

        let start = to_local(window_start.and_time(NaiveTime::MIN));
        // End of day = start of tomorrow minus one microsecond.
        let end = to_local((today + Duration::days(1)).and_time(NaiveTime::MIN) - Duration::microseconds(1));

        Self { start, end, days }
    }

    /// Inclusive lower bound of the window (00:00:00.000 on the first day).
    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    /// Inclusive upper bound of the window (end of today).
    pub fn end(&self) -> DateTime<Local> {
        self.end
    }

    /// The 7 calendar days the window spans, ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Lower bound as epoch milliseconds, for the store range query.
    pub fn start_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// Upper bound as epoch milliseconds, for the store range query.
    pub fn end_ms(&self) -> i64 {
        self.end.timestamp_millis()
    }
}

/// Attach the local timezone to a naive datetime without panicking.
fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Local midnight skipped by a DST transition: fall back to the UTC
        // reading of the same naive datetime.
        LocalResult::None => Local.from_utc_datetime(&naive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 7, 10, 0, 0).single().expect("valid local datetime")
    }

    #[test]
    fn resolve_is_deterministic() {
        let now = local_now();
        assert_eq!(ReportWindow::resolve(now), ReportWindow::resolve(now));
    }

    #[test]
    fn window_spans_seven_ascending_days_ending_today() {
        let window = ReportWindow::resolve(local_now());
        let days = window.days();

        assert_eq!(days.len(), REPORT_WINDOW_DAYS);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(days[6], NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn bounds_cover_the_full_first_and_last_day() {
        let window = ReportWindow::resolve(local_now());

        assert_eq!(window.start().date_naive(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(window.start().time(), NaiveTime::MIN);
        assert_eq!(window.end().date_naive(), NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        assert!(window.start_ms() < window.end_ms());

        // A moment late on the last day is still inside the bounds.
        let late = Local
            .with_ymd_and_hms(2024, 6, 7, 23, 59, 59)
            .single()
            .expect("valid local datetime")
            .timestamp_millis();
        assert!(late <= window.end_ms());
    }

    #[test]
    fn time_of_day_does_not_change_the_window() {
        let morning = Local.with_ymd_and_hms(2024, 6, 7, 0, 5, 0).single().unwrap();
        let evening = Local.with_ymd_and_hms(2024, 6, 7, 23, 55, 0).single().unwrap();
        assert_eq!(ReportWindow::resolve(morning), ReportWindow::resolve(evening));
    }
}
