use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    error::EngineError, pareto::RoutePreference, scoring::HostWeights, search::SearchConfig,
    solver::Co2Unit,
};

/// every tuning knob for one run. all sections are optional when
/// deserialized and fall back to their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub route_preference: RoutePreference,
    /// metric key to weight, see [`crate::scoring::HostMetric`]. empty means
    /// equal weights over total_co2, gini_travel_hours and max_travel_hours.
    #[serde(default)]
    pub host_weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub alternatives: usize,
    #[serde(default)]
    pub allow_partial_hosts: bool,
    #[serde(default)]
    pub round_trip: bool,
    #[serde(default)]
    pub co2_unit: Co2Unit,
    /// worker threads for host evaluation
    #[serde(default = "EngineConfig::default_parallelism")]
    pub parallelism: usize,
}

impl EngineConfig {
    fn default_parallelism() -> usize {
        1
    }

    /// checks every section and returns the parsed host weights. called
    /// before any search begins.
    pub fn validate(&self) -> Result<HostWeights, EngineError> {
        self.search.validate()?;
        self.route_preference.validate()?;
        if self.parallelism == 0 {
            return Err(EngineError::InvalidSearchConfiguration(String::from(
                "parallelism must be at least 1",
            )));
        }
        HostWeights::try_from(&self.host_weights)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            route_preference: RoutePreference::default(),
            host_weights: BTreeMap::new(),
            alternatives: 0,
            allow_partial_hosts: false,
            round_trip: false,
            co2_unit: Co2Unit::default(),
            parallelism: EngineConfig::default_parallelism(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::EngineConfig;
    use crate::error::EngineError;
    use crate::solver::Co2Unit;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"route_preference": {"emission_weight": 0.9}, "co2_unit": "kilograms"}"#,
        )
        .expect("test invariant failed: config should deserialize");
        assert_eq!(config.route_preference.duration_weight, 0.6);
        assert_eq!(config.route_preference.emission_weight, 0.9);
        assert_eq!(config.search.max_half_depth, 2);
        assert_eq!(config.co2_unit, Co2Unit::Kilograms);
        assert_eq!(config.parallelism, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_runs_every_section() {
        let mut config = EngineConfig::default();
        config.host_weights.insert(String::from("total_co2"), -1.0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidWeightConfiguration(_))
        ));
        let mut config = EngineConfig::default();
        config.search.min_connection_hours = -2.0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidSearchConfiguration(_))
        ));
    }
}
