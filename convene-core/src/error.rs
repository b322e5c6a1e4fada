use itertools::Itertools;

use crate::model::Location;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("no itinerary from '{origin}' to host '{host}' within the search bounds")]
    InfeasibleAttendeeRoute { origin: Location, host: Location },
    #[error("no feasible host: all {evaluated} candidate(s) leave at least one attendee group without a route ({})", infeasible.iter().join(", "))]
    NoFeasibleHost {
        evaluated: usize,
        infeasible: Vec<Location>,
    },
    #[error("invalid weight configuration: {0}")]
    InvalidWeightConfiguration(String),
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
    #[error("invalid search configuration: {0}")]
    InvalidSearchConfiguration(String),
    #[error("flight index contains no usable legs")]
    EmptyFlightIndex,
    #[error("{0}")]
    InternalError(String),
}
