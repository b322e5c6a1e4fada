use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::{error::EngineError, metrics::HostMetrics};

/// a per-host metric the scorer can weight. lower is always better.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HostMetric {
    TotalCo2,
    AverageTravelHours,
    MedianTravelHours,
    MaxTravelHours,
    MinTravelHours,
    GiniTravelHours,
}

impl HostMetric {
    pub const ALL: [HostMetric; 6] = [
        HostMetric::TotalCo2,
        HostMetric::AverageTravelHours,
        HostMetric::MedianTravelHours,
        HostMetric::MaxTravelHours,
        HostMetric::MinTravelHours,
        HostMetric::GiniTravelHours,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            HostMetric::TotalCo2 => "total_co2",
            HostMetric::AverageTravelHours => "average_travel_hours",
            HostMetric::MedianTravelHours => "median_travel_hours",
            HostMetric::MaxTravelHours => "max_travel_hours",
            HostMetric::MinTravelHours => "min_travel_hours",
            HostMetric::GiniTravelHours => "gini_travel_hours",
        }
    }

    pub fn value(&self, metrics: &HostMetrics) -> f64 {
        match self {
            HostMetric::TotalCo2 => metrics.total_co2_tonnes,
            HostMetric::AverageTravelHours => metrics.average_travel_hours,
            HostMetric::MedianTravelHours => metrics.median_travel_hours,
            HostMetric::MaxTravelHours => metrics.max_travel_hours,
            HostMetric::MinTravelHours => metrics.min_travel_hours,
            HostMetric::GiniTravelHours => metrics.fairness_score,
        }
    }
}

impl FromStr for HostMetric {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        HostMetric::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| {
                let known = HostMetric::ALL.iter().map(|m| m.key()).collect::<Vec<_>>();
                EngineError::InvalidWeightConfiguration(format!(
                    "unknown host metric '{s}', expected one of [{}]",
                    known.join(", ")
                ))
            })
    }
}

impl Display for HostMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
