use chrono::{DateTime, Duration, Utc};

use crate::{
    error::EngineError,
    model::{FlightLeg, LegId, Location},
};

/// departure of the first leg and arrival of the last, as flown by a
/// traveller who is ready at some instant and observes a minimum connection
/// time between legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelSchedule {
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
}

/// an ordered path of flight legs borrowed from the flight index. totals are
/// the exact sums of the legs and are fixed at construction.
///
/// an itinerary without legs is a "stay": the attendee group is already at
/// the host location.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'a> {
    origin: Location,
    legs: Vec<&'a FlightLeg>,
    total_duration_hours: f64,
    total_co2_tonnes: f64,
}

impl<'a> Itinerary<'a> {
    /// builds an itinerary, confirming each leg departs from where the
    /// previous one landed.
    pub fn new(origin: Location, legs: Vec<&'a FlightLeg>) -> Result<Itinerary<'a>, EngineError> {
        let mut at = &origin;
        for leg in legs.iter() {
            if leg.origin != *at {
                return Err(EngineError::InternalError(format!(
                    "itinerary leg {} departs from {} but the path is at {}",
                    leg.id, leg.origin, at
                )));
            }
            at = &leg.destination;
        }
        let total_duration_hours = legs.iter().map(|leg| leg.duration_hours).sum();
        let total_co2_tonnes = legs.iter().map(|leg| leg.co2_tonnes).sum();
        Ok(Itinerary {
            origin,
            legs,
            total_duration_hours,
            total_co2_tonnes,
        })
    }

    pub fn stay(location: Location) -> Itinerary<'a> {
        Itinerary {
            origin: location,
            legs: vec![],
            total_duration_hours: 0.0,
            total_co2_tonnes: 0.0,
        }
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    pub fn destination(&self) -> &Location {
        self.legs
            .last()
            .map(|leg| &leg.destination)
            .unwrap_or(&self.origin)
    }

    pub fn legs(&self) -> &[&'a FlightLeg] {
        &self.legs
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    pub fn is_stay(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn total_duration_hours(&self) -> f64 {
        self.total_duration_hours
    }

    pub fn total_co2_tonnes(&self) -> f64 {
        self.total_co2_tonnes
    }

    pub fn leg_ids(&self) -> Vec<LegId> {
        self.legs.iter().map(|leg| leg.id).collect()
    }

    /// every location visited, origin first.
    pub fn stops(&self) -> Vec<&Location> {
        std::iter::once(&self.origin)
            .chain(self.legs.iter().map(|leg| &leg.destination))
            .collect()
    }

    /// flies the itinerary forward from `ready`. None if some leg's
    /// scheduled date has already passed by the time the traveller reaches it,
    /// or if an arrival falls outside the representable calendar.
    pub fn schedule(&self, ready: DateTime<Utc>, min_connection: Duration) -> Option<TravelSchedule> {
        let mut cursor = ready;
        let mut departure: Option<DateTime<Utc>> = None;
        let mut arrival = ready;
        for leg in self.legs.iter() {
            let boarded = leg.board(&cursor)?;
            departure.get_or_insert(boarded);
            arrival = boarded.checked_add_signed(leg.duration())?;
            cursor = arrival.checked_add_signed(min_connection)?;
        }
        Some(TravelSchedule {
            departure: departure.unwrap_or(arrival),
            arrival,
        })
    }
}

#[cfg(test)]
mod test {
    use super::Itinerary;
    use crate::model::{date_codec::iso8601, FlightLeg, Location};
    use chrono::{Duration, NaiveDate};

    fn mock_leg(id: usize, origin: &str, destination: &str, date: &str, hours: f64, co2: f64) -> FlightLeg {
        FlightLeg {
            id,
            origin: Location::from(origin),
            destination: Location::from(destination),
            departure_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .expect("test invariant failed: bad date"),
            duration_hours: hours,
            co2_tonnes: co2,
        }
    }

    #[test]
    fn test_totals_are_sums_of_legs() {
        let a = mock_leg(0, "BOM", "DXB", "2024-03-01", 3.25, 30.5);
        let b = mock_leg(1, "DXB", "SIN", "2024-03-01", 7.0, 61.25);
        let itinerary = Itinerary::new(Location::from("BOM"), vec![&a, &b])
            .expect("legs should connect");
        assert_eq!(itinerary.total_duration_hours(), 10.25);
        assert_eq!(itinerary.total_co2_tonnes(), 91.75);
        assert_eq!(itinerary.leg_ids(), vec![0, 1]);
        let stops = itinerary.stops().iter().map(|s| s.as_str()).collect::<Vec<_>>();
        assert_eq!(stops, vec!["BOM", "DXB", "SIN"]);
        assert_eq!(itinerary.destination().as_str(), "SIN");
    }

    #[test]
    fn test_disconnected_legs_rejected() {
        let a = mock_leg(0, "BOM", "DXB", "2024-03-01", 3.0, 30.0);
        let b = mock_leg(1, "DOH", "SIN", "2024-03-02", 7.0, 60.0);
        assert!(Itinerary::new(Location::from("BOM"), vec![&a, &b]).is_err());
    }

    #[test]
    fn test_schedule_honours_connection_time() {
        let a = mock_leg(0, "BOM", "DXB", "2024-03-01", 3.0, 30.0);
        let b = mock_leg(1, "DXB", "SIN", "2024-03-01", 7.0, 60.0);
        let itinerary = Itinerary::new(Location::from("BOM"), vec![&a, &b])
            .expect("legs should connect");
        let ready = iso8601::parse_utc("2024-03-01T08:00:00Z").expect("test invariant failed");
        let schedule = itinerary
            .schedule(ready, Duration::hours(1))
            .expect("same-day connection should be possible");
        assert_eq!(iso8601::format_utc(&schedule.departure), "2024-03-01T08:00:00Z");
        assert_eq!(iso8601::format_utc(&schedule.arrival), "2024-03-01T19:00:00Z");

        // a late start pushes the connection past the second leg's date
        let late = iso8601::parse_utc("2024-03-01T21:00:00Z").expect("test invariant failed");
        assert_eq!(itinerary.schedule(late, Duration::hours(1)), None);
    }

    #[test]
    fn test_stay_has_no_travel() {
        let stay = Itinerary::stay(Location::from("HKG"));
        assert!(stay.is_stay());
        assert_eq!(stay.total_duration_hours(), 0.0);
        assert_eq!(stay.destination().as_str(), "HKG");
        let ready = iso8601::parse_utc("2024-03-01T08:00:00Z").expect("test invariant failed");
        let schedule = stay
            .schedule(ready, Duration::hours(1))
            .expect("stay is always schedulable");
        assert_eq!(schedule.arrival, ready);
    }
}
