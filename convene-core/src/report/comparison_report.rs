use serde::Serialize;

use crate::report::{
    report_ops::{round, FIGURE_PLACES, SCORE_PLACES},
    HostReport,
};

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TravelTimeRange {
    pub min_avg: f64,
    pub max_avg: f64,
    pub avg_avg: f64,
}

/// spread of the headline metrics over every ranked host.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ComparisonReport {
    pub cities_evaluated: usize,
    pub co2_range: ValueRange,
    pub travel_time_range: TravelTimeRange,
    pub fairness_range: ValueRange,
}

impl ComparisonReport {
    pub fn new(hosts: &[HostReport]) -> ComparisonReport {
        let co2 = value_range(hosts.iter().map(|h| h.total_co2), FIGURE_PLACES);
        let hours = value_range(hosts.iter().map(|h| h.average_travel_hours), FIGURE_PLACES);
        let fairness = value_range(hosts.iter().map(|h| h.fairness_score), SCORE_PLACES);
        ComparisonReport {
            cities_evaluated: hosts.len(),
            co2_range: co2,
            travel_time_range: TravelTimeRange {
                min_avg: hours.min,
                max_avg: hours.max,
                avg_avg: hours.avg,
            },
            fairness_range: fairness,
        }
    }
}

fn value_range(values: impl Iterator<Item = f64>, places: i32) -> ValueRange {
    let values = values.collect::<Vec<_>>();
    if values.is_empty() {
        return ValueRange::default();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    ValueRange {
        min: round(min, places),
        max: round(max, places),
        avg: round(avg, places),
    }
}
