use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::{time_ops, Location};

/// position of a leg in the [`crate::index::FlightIndex`] arena.
pub type LegId = usize;

/// a validated, scheduled flight leg. read-only once loaded.
///
/// `co2_tonnes` is the whole-aircraft estimate. it is additive per itinerary
/// use and is never divided by seats or multiplied by passengers here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlightLeg {
    pub id: LegId,
    pub origin: Location,
    pub destination: Location,
    pub departure_date: NaiveDate,
    pub duration_hours: f64,
    pub co2_tonnes: f64,
}

impl FlightLeg {
    pub fn duration(&self) -> Duration {
        time_ops::hours_to_duration(self.duration_hours)
    }

    /// departure instant for a traveller who is ready at `ready`. a leg can be
    /// boarded at any time on its scheduled date, so this is the later of
    /// midnight on that date and `ready`, or None once the date has passed.
    pub fn board(&self, ready: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        if ready.date_naive() > self.departure_date {
            return None;
        }
        let day_start = time_ops::start_of_day(&self.departure_date);
        Some(std::cmp::max(day_start, *ready))
    }

    /// None when the leg cannot be boarded or its arrival is not representable.
    pub fn arrival_after(&self, ready: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.board(ready)?.checked_add_signed(self.duration())
    }

    /// latest instant this leg can depart and still land by `deadline`, capped
    /// to the end of its scheduled date. None if even a midnight departure
    /// lands too late.
    pub fn latest_departure(&self, deadline: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        let day_start = time_ops::start_of_day(&self.departure_date);
        let day_end = day_start + Duration::days(1) - Duration::milliseconds(1);
        let latest = std::cmp::min(deadline.checked_sub_signed(self.duration())?, day_end);
        if latest < day_start {
            None
        } else {
            Some(latest)
        }
    }
}

impl Display for FlightLeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}->{} on {} ({}h, {}t)",
            self.origin, self.destination, self.departure_date, self.duration_hours, self.co2_tonnes
        )
    }
}

#[cfg(test)]
mod test {
    use super::FlightLeg;
    use crate::model::{date_codec::iso8601, Location};
    use chrono::NaiveDate;

    fn mock_leg(date: &str, duration_hours: f64) -> FlightLeg {
        FlightLeg {
            id: 0,
            origin: Location::from("BOM"),
            destination: Location::from("SIN"),
            departure_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .expect("test invariant failed: bad date"),
            duration_hours,
            co2_tonnes: 40.0,
        }
    }

    #[test]
    fn test_board_waits_for_scheduled_date() {
        let leg = mock_leg("2024-03-02", 5.5);
        let ready = iso8601::parse_utc("2024-03-01T09:00:00Z").expect("test invariant failed");
        let departure = leg.board(&ready).expect("leg should be boardable");
        assert_eq!(iso8601::format_utc(&departure), "2024-03-02T00:00:00Z");
        let arrival = leg.arrival_after(&ready).expect("leg should be boardable");
        assert_eq!(iso8601::format_utc(&arrival), "2024-03-02T05:30:00Z");
    }

    #[test]
    fn test_board_same_day_departs_when_ready() {
        let leg = mock_leg("2024-03-01", 2.0);
        let ready = iso8601::parse_utc("2024-03-01T09:00:00Z").expect("test invariant failed");
        assert_eq!(leg.board(&ready), Some(ready));
    }

    #[test]
    fn test_board_rejects_past_date() {
        let leg = mock_leg("2024-02-29", 2.0);
        let ready = iso8601::parse_utc("2024-03-01T00:00:00Z").expect("test invariant failed");
        assert_eq!(leg.board(&ready), None);
    }

    #[test]
    fn test_unrepresentable_arrival_is_unboardable() {
        let leg = mock_leg("2024-03-01", 1.0e10);
        let ready = iso8601::parse_utc("2024-03-01T00:00:00Z").expect("test invariant failed");
        assert_eq!(leg.arrival_after(&ready), None);
        assert_eq!(leg.latest_departure(&ready), None);
    }

    #[test]
    fn test_latest_departure_respects_deadline_and_day() {
        let leg = mock_leg("2024-03-02", 5.0);
        let late = iso8601::parse_utc("2024-03-10T00:00:00Z").expect("test invariant failed");
        let capped = leg.latest_departure(&late).expect("should depart");
        assert_eq!(capped.date_naive(), leg.departure_date);

        let tight = iso8601::parse_utc("2024-03-02T08:00:00Z").expect("test invariant failed");
        let latest = leg.latest_departure(&tight).expect("should depart");
        assert_eq!(iso8601::format_utc(&latest), "2024-03-02T03:00:00Z");

        let impossible =
            iso8601::parse_utc("2024-03-02T04:00:00Z").expect("test invariant failed");
        assert_eq!(leg.latest_departure(&impossible), None);
    }
}
