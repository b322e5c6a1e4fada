use serde::Serialize;
use std::collections::BTreeMap;

use crate::{metrics::EventSchedule, model::Location};

/// aggregate travel statistics for one host. hours and emissions are per
/// group and already doubled for round trips when that option is set.
/// only feasible groups contribute.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct HostMetrics {
    /// Σ group emissions × headcount
    pub total_co2_tonnes: f64,
    /// headcount-weighted
    pub average_travel_hours: f64,
    /// one value per group
    pub median_travel_hours: f64,
    pub max_travel_hours: f64,
    pub min_travel_hours: f64,
    /// gini over per-group hours, one value per group
    pub fairness_score: f64,
    pub attendee_travel_hours: BTreeMap<Location, f64>,
    /// group emissions × headcount
    pub attendee_travel_co2: BTreeMap<Location, f64>,
    pub infeasible_groups: Vec<Location>,
    /// None when no group can travel or the shared event would overrun the
    /// availability window.
    pub event_schedule: Option<EventSchedule>,
}

impl HostMetrics {
    /// every group has a route and the shared event fits the window.
    pub fn is_eligible(&self) -> bool {
        self.infeasible_groups.is_empty() && self.event_schedule.is_some()
    }

    /// some groups have no route but the rest can still meet.
    pub fn is_partially_eligible(&self) -> bool {
        !self.attendee_travel_hours.is_empty() && self.event_schedule.is_some()
    }
}
