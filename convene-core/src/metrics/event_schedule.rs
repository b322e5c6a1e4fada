use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::date_codec::iso8601;

/// when the shared event runs at a host, and the overall span from the first
/// arrival to the last return home.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    #[serde(serialize_with = "iso8601::serialize_utc")]
    pub start: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize_utc")]
    pub end: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize_utc")]
    pub span_start: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize_utc")]
    pub span_end: DateTime<Utc>,
}

impl EventSchedule {
    pub fn fits_before(&self, window_end: &DateTime<Utc>) -> bool {
        self.end <= *window_end && self.span_end <= *window_end
    }
}
