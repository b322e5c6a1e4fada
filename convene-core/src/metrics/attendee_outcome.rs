use crate::{
    error::EngineError,
    model::{AttendeeGroup, Itinerary},
};

/// the itinerary chosen for one attendee group to one host, or why there is
/// none.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeOutcome<'a> {
    pub group: AttendeeGroup,
    pub route: Result<Itinerary<'a>, EngineError>,
}

impl<'a> AttendeeOutcome<'a> {
    pub fn new(group: AttendeeGroup, route: Result<Itinerary<'a>, EngineError>) -> Self {
        Self { group, route }
    }

    pub fn itinerary(&self) -> Option<&Itinerary<'a>> {
        self.route.as_ref().ok()
    }

    pub fn is_feasible(&self) -> bool {
        self.route.is_ok()
    }
}
