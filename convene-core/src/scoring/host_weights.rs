use std::collections::BTreeMap;

use crate::{error::EngineError, scoring::HostMetric};

/// validated weights for the composite host score. zero-weight metrics are
/// dropped, at least one positive weight remains.
#[derive(Debug, Clone, PartialEq)]
pub struct HostWeights(BTreeMap<HostMetric, f64>);

impl HostWeights {
    pub fn new(weights: BTreeMap<HostMetric, f64>) -> Result<HostWeights, EngineError> {
        if let Some((metric, weight)) = weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(EngineError::InvalidWeightConfiguration(format!(
                "host weight for '{metric}' must be a non-negative number, found {weight}"
            )));
        }
        let positive = weights
            .into_iter()
            .filter(|(_, w)| *w > 0.0)
            .collect::<BTreeMap<_, _>>();
        if positive.is_empty() {
            return Err(EngineError::InvalidWeightConfiguration(String::from(
                "at least one host weight must be positive",
            )));
        }
        Ok(HostWeights(positive))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HostMetric, &f64)> {
        self.0.iter()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

impl Default for HostWeights {
    /// equal weight on emissions, fairness and the worst-off group.
    fn default() -> Self {
        HostWeights(BTreeMap::from([
            (HostMetric::TotalCo2, 1.0),
            (HostMetric::GiniTravelHours, 1.0),
            (HostMetric::MaxTravelHours, 1.0),
        ]))
    }
}

impl TryFrom<&BTreeMap<String, f64>> for HostWeights {
    type Error = EngineError;

    /// keys are metric names such as `total_co2`. an empty map means the
    /// default weights.
    fn try_from(value: &BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(HostWeights::default());
        }
        let weights = value
            .iter()
            .map(|(key, weight)| key.parse::<HostMetric>().map(|m| (m, *weight)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        HostWeights::new(weights)
    }
}
