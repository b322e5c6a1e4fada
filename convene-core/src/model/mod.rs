mod attendee_group;
mod availability_window;
pub mod date_codec;
mod event_duration;
mod flight_leg;
mod itinerary;
mod location;
mod scenario;
pub mod time_ops;

pub use attendee_group::AttendeeGroup;
pub use availability_window::AvailabilityWindow;
pub use event_duration::EventDuration;
pub use flight_leg::{FlightLeg, LegId};
pub use itinerary::{Itinerary, TravelSchedule};
pub use location::Location;
pub use scenario::{Scenario, ScenarioPayload};
