use chrono::Duration;
use serde::{Deserialize, Serialize};

/// the contiguous block the event occupies at the host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDuration {
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub hours: u32,
}

impl EventDuration {
    pub fn new(days: u32, hours: u32) -> Self {
        Self { days, hours }
    }

    pub fn to_duration(&self) -> Duration {
        Duration::days(i64::from(self.days)) + Duration::hours(i64::from(self.hours))
    }
}
