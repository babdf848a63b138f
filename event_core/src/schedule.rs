//! # Schedule Helpers
//!
//! Derives the event duration from the four date/time text fields. Inputs
//! are the strings native date and time pickers produce: `YYYY-MM-DD` and
//! `HH:MM` (seconds optional).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::state::WizardState;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Length of the event, or `None` when a field is missing or unparseable,
/// or the end is before the start. An empty end date means the event ends
/// on its start date.
pub fn compute_duration(
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
) -> Option<Duration> {
    let start_day = parse_date(start_date)?;
    let end_day = if end_date.trim().is_empty() {
        start_day
    } else {
        parse_date(end_date)?
    };

    let start = NaiveDateTime::new(start_day, parse_time(start_time)?);
    let end = NaiveDateTime::new(end_day, parse_time(end_time)?);

    let duration = end - start;
    (duration >= Duration::zero()).then_some(duration)
}

/// Compact human form: "1d 3h", "2h 30m", "45m", "0m"
pub fn format_duration(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{}{}", n, unit))
        .collect();

    if parts.is_empty() {
        "0m".to_string()
    } else {
        parts.join(" ")
    }
}

impl WizardState {
    /// Duration implied by the schedule fields, formatted for the duration field
    pub fn computed_duration(&self) -> Option<String> {
        compute_duration(&self.start_date, &self.start_time, &self.end_date, &self.end_time)
            .map(format_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EventPatch;

    #[test]
    fn test_same_day_event() {
        let d = compute_duration("2025-09-01", "09:00", "", "11:30").unwrap();
        assert_eq!(d, Duration::minutes(150));
        assert_eq!(format_duration(d), "2h 30m");
    }

    #[test]
    fn test_multi_day_event() {
        let d = compute_duration("2025-09-01", "09:00", "2025-09-02", "12:00").unwrap();
        assert_eq!(format_duration(d), "1d 3h");
    }

    #[test]
    fn test_seconds_accepted() {
        let d = compute_duration("2025-09-01", "09:00:00", "2025-09-01", "09:45:00").unwrap();
        assert_eq!(format_duration(d), "45m");
    }

    #[test]
    fn test_end_before_start() {
        assert!(compute_duration("2025-09-02", "09:00", "2025-09-01", "10:00").is_none());
    }

    #[test]
    fn test_unparseable_fields() {
        assert!(compute_duration("", "09:00", "", "10:00").is_none());
        assert!(compute_duration("2025-09-01", "9am", "", "10:00").is_none());
        assert!(compute_duration("2025-09-01", "09:00", "tomorrow", "10:00").is_none());
    }

    #[test]
    fn test_zero_length() {
        let d = compute_duration("2025-09-01", "09:00", "2025-09-01", "09:00").unwrap();
        assert_eq!(format_duration(d), "0m");
    }

    #[test]
    fn test_computed_duration_on_state() {
        let state = WizardState::default().merge(&EventPatch {
            start_date: Some("2025-09-01".into()),
            start_time: Some("13:00".into()),
            end_time: Some("14:15".into()),
            ..EventPatch::default()
        });
        assert_eq!(state.computed_duration().as_deref(), Some("1h 15m"));
        assert_eq!(WizardState::default().computed_duration(), None);
    }
}
