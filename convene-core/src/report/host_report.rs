use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    model::Location,
    report::{
        report_ops::{round, FIGURE_PLACES, SCORE_PLACES},
        ItineraryReport, TimeSpan,
    },
    scoring::{HostMetric, RankedHost},
    solver::Co2Unit,
};

/// one ranked host as presented to callers. emissions are in the configured
/// unit, hours and emissions are rounded to 2 places and scores to 4.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostReport {
    pub event_location: Location,
    pub total_co2: f64,
    pub average_travel_hours: f64,
    pub median_travel_hours: f64,
    pub max_travel_hours: f64,
    pub min_travel_hours: f64,
    pub fairness_score: f64,
    pub attendee_travel_hours: BTreeMap<Location, f64>,
    pub attendee_travel_co2: BTreeMap<Location, f64>,
    pub composite_score: f64,
    pub score_breakdown: BTreeMap<HostMetric, f64>,
    pub event_dates: Option<TimeSpan>,
    pub event_span: Option<TimeSpan>,
    pub infeasible_groups: Vec<Location>,
    pub itineraries: BTreeMap<Location, ItineraryReport>,
}

impl HostReport {
    pub fn new(host: &RankedHost<'_>, unit: Co2Unit) -> HostReport {
        let metrics = host.candidate.metrics();
        let figure = |v: f64| round(v, FIGURE_PLACES);
        let score = |v: f64| round(v, SCORE_PLACES);
        let co2 = |v: f64| round(unit.convert_tonnes(v), FIGURE_PLACES);
        let schedule = metrics.event_schedule.as_ref();
        HostReport {
            event_location: host.candidate.location().clone(),
            total_co2: co2(metrics.total_co2_tonnes),
            average_travel_hours: figure(metrics.average_travel_hours),
            median_travel_hours: figure(metrics.median_travel_hours),
            max_travel_hours: figure(metrics.max_travel_hours),
            min_travel_hours: figure(metrics.min_travel_hours),
            fairness_score: score(metrics.fairness_score),
            attendee_travel_hours: metrics
                .attendee_travel_hours
                .iter()
                .map(|(l, h)| (l.clone(), figure(*h)))
                .collect(),
            attendee_travel_co2: metrics
                .attendee_travel_co2
                .iter()
                .map(|(l, c)| (l.clone(), co2(*c)))
                .collect(),
            composite_score: score(host.score.composite),
            score_breakdown: host
                .score
                .components
                .iter()
                .map(|(m, c)| (*m, score(*c)))
                .collect(),
            event_dates: schedule.map(|s| TimeSpan {
                start: s.start,
                end: s.end,
            }),
            event_span: schedule.map(|s| TimeSpan {
                start: s.span_start,
                end: s.span_end,
            }),
            infeasible_groups: metrics.infeasible_groups.clone(),
            itineraries: host
                .candidate
                .outcomes()
                .iter()
                .filter_map(|o| {
                    o.itinerary()
                        .map(|i| (o.group.location.clone(), ItineraryReport::new(i, unit)))
                })
                .collect(),
        }
    }
}
