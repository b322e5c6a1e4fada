use crate::{
    metrics::{aggregation_ops, AttendeeOutcome, HostMetrics},
    model::Location,
    search::SearchBounds,
};

/// a location under evaluation as the meeting site, with the chosen route for
/// every attendee group. metrics are derived from the outcomes once, at
/// construction, and cannot be changed independently of them.
#[derive(Debug, Clone, PartialEq)]
pub struct HostCandidate<'a> {
    location: Location,
    outcomes: Vec<AttendeeOutcome<'a>>,
    metrics: HostMetrics,
}

impl<'a> HostCandidate<'a> {
    pub fn new(
        location: Location,
        outcomes: Vec<AttendeeOutcome<'a>>,
        bounds: &SearchBounds,
        round_trip: bool,
    ) -> HostCandidate<'a> {
        let metrics = aggregation_ops::aggregate(&outcomes, bounds, round_trip);
        HostCandidate {
            location,
            outcomes,
            metrics,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn outcomes(&self) -> &[AttendeeOutcome<'a>] {
        &self.outcomes
    }

    pub fn metrics(&self) -> &HostMetrics {
        &self.metrics
    }

    pub fn is_eligible(&self) -> bool {
        self.metrics.is_eligible()
    }

    #[cfg(test)]
    pub(crate) fn with_metrics(location: Location, metrics: HostMetrics) -> HostCandidate<'a> {
        HostCandidate {
            location,
            outcomes: vec![],
            metrics,
        }
    }
}
