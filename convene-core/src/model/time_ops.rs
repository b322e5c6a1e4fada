//! conversions between the fractional hours used by flight records and the
//! chrono instants used by the search.
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// fractional hours as a millisecond-precision [`Duration`].
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * MILLIS_PER_HOUR).round() as i64)
}

pub fn duration_to_hours(duration: &Duration) -> f64 {
    duration.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// midnight UTC at the beginning of the given date.
pub fn start_of_day(date: &NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::default()).and_utc()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hours_round_trip_through_duration() {
        let duration = hours_to_duration(2.5);
        assert_eq!(duration, Duration::minutes(150));
        assert_eq!(duration_to_hours(&duration), 2.5);
    }

    #[test]
    fn test_start_of_day_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("test invariant failed: bad date");
        let midnight = start_of_day(&date);
        assert_eq!(midnight.to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }
}
