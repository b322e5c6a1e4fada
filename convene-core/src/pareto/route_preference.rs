use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// how an attendee group trades flight time against emissions when picking
/// one itinerary off the pareto frontier. weights need not sum to one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RoutePreference {
    #[serde(default = "RoutePreference::default_duration_weight")]
    pub duration_weight: f64,
    #[serde(default = "RoutePreference::default_emission_weight")]
    pub emission_weight: f64,
}

impl RoutePreference {
    pub fn new(duration_weight: f64, emission_weight: f64) -> Result<RoutePreference, EngineError> {
        let preference = RoutePreference {
            duration_weight,
            emission_weight,
        };
        preference.validate()?;
        Ok(preference)
    }

    fn default_duration_weight() -> f64 {
        0.6
    }

    fn default_emission_weight() -> f64 {
        0.4
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, weight) in [
            ("duration_weight", self.duration_weight),
            ("emission_weight", self.emission_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EngineError::InvalidWeightConfiguration(format!(
                    "{name} must be a non-negative number, found {weight}"
                )));
            }
        }
        if self.duration_weight == 0.0 && self.emission_weight == 0.0 {
            return Err(EngineError::InvalidWeightConfiguration(String::from(
                "duration_weight and emission_weight cannot both be zero",
            )));
        }
        Ok(())
    }
}

impl Default for RoutePreference {
    fn default() -> Self {
        Self {
            duration_weight: RoutePreference::default_duration_weight(),
            emission_weight: RoutePreference::default_emission_weight(),
        }
    }
}
