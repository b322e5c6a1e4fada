use serde::{Deserialize, Serialize};

use crate::{error::EngineError, model::time_ops};
use chrono::Duration;

/// longest layover that may be required between two legs.
pub const MAX_CONNECTION_HOURS: f64 = 24.0 * 7.0;

/// bounds on the itinerary search.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// legs grown from each end. itineraries have at most twice this many legs.
    #[serde(default = "SearchConfig::default_max_half_depth")]
    pub max_half_depth: usize,
    #[serde(default = "SearchConfig::default_min_connection_hours")]
    pub min_connection_hours: f64,
}

impl SearchConfig {
    fn default_max_half_depth() -> usize {
        2
    }

    fn default_min_connection_hours() -> f64 {
        1.0
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_half_depth == 0 {
            return Err(EngineError::InvalidSearchConfiguration(String::from(
                "max_half_depth must be at least 1",
            )));
        }
        if !self.min_connection_hours.is_finite()
            || self.min_connection_hours < 0.0
            || self.min_connection_hours > MAX_CONNECTION_HOURS
        {
            return Err(EngineError::InvalidSearchConfiguration(format!(
                "min_connection_hours must be between 0 and {MAX_CONNECTION_HOURS}, found {}",
                self.min_connection_hours
            )));
        }
        Ok(())
    }

    pub fn min_connection(&self) -> Duration {
        time_ops::hours_to_duration(self.min_connection_hours)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_half_depth: SearchConfig::default_max_half_depth(),
            min_connection_hours: SearchConfig::default_min_connection_hours(),
        }
    }
}
