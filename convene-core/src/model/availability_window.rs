use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::EngineError, model::date_codec::iso8601};

/// half-open interval `[start, end)` available for travel and the event. a
/// trip occupies `[depart, land)`, so landing exactly at `end` still fits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    #[serde(
        deserialize_with = "iso8601::deserialize_utc",
        serialize_with = "iso8601::serialize_utc"
    )]
    pub start: DateTime<Utc>,
    #[serde(
        deserialize_with = "iso8601::deserialize_utc",
        serialize_with = "iso8601::serialize_utc"
    )]
    pub end: DateTime<Utc>,
}

impl AvailabilityWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, EngineError> {
        if end <= start {
            return Err(EngineError::InvalidScenario(format!(
                "availability window end {} must be after start {}",
                iso8601::format_utc(&end),
                iso8601::format_utc(&start)
            )));
        }
        Ok(Self { start, end })
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    /// latest instant an event of the given length may start and still end
    /// inside the window.
    pub fn latest_start(&self, event: &Duration) -> Result<DateTime<Utc>, EngineError> {
        match self.end.checked_sub_signed(*event) {
            Some(latest) if latest >= self.start => Ok(latest),
            _ => Err(EngineError::InvalidScenario(String::from(
                "event duration does not fit within availability window",
            ))),
        }
    }
}
