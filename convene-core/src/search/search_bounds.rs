use chrono::{DateTime, Duration, Utc};

use crate::{
    error::EngineError,
    model::{time_ops, AvailabilityWindow, EventDuration, TravelSchedule},
    search::SearchConfig,
};

/// time limits every itinerary must respect. the return trip is assumed to
/// mirror the outbound duration, so an itinerary is admissible when
/// `arrival + event + duration <= window.end`; landing home at the end of the
/// half-open window is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    pub earliest_departure: DateTime<Utc>,
    /// latest arrival that still leaves room for the event.
    pub arrival_deadline: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub event_duration: Duration,
    pub min_connection: Duration,
}

impl SearchBounds {
    pub fn new(
        window: &AvailabilityWindow,
        event: &EventDuration,
        config: &SearchConfig,
    ) -> Result<SearchBounds, EngineError> {
        config.validate()?;
        let event_duration = event.to_duration();
        let arrival_deadline = window.latest_start(&event_duration)?;
        Ok(SearchBounds {
            earliest_departure: window.start,
            arrival_deadline,
            window_end: window.end,
            event_duration,
            min_connection: config.min_connection(),
        })
    }

    /// whether a traveller arriving at `arrival` after `duration_hours` of
    /// flying can still attend and fly home inside the window.
    pub fn admits_arrival(&self, arrival: &DateTime<Utc>, duration_hours: f64) -> bool {
        arrival
            .checked_add_signed(time_ops::hours_to_duration(duration_hours))
            .is_some_and(|home| home <= self.arrival_deadline)
    }

    pub fn admits(&self, schedule: &TravelSchedule, duration_hours: f64) -> bool {
        schedule.departure >= self.earliest_departure
            && self.admits_arrival(&schedule.arrival, duration_hours)
    }
}
