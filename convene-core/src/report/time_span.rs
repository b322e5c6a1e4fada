use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::date_codec::iso8601;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    #[serde(serialize_with = "iso8601::serialize_utc")]
    pub start: DateTime<Utc>,
    #[serde(serialize_with = "iso8601::serialize_utc")]
    pub end: DateTime<Utc>,
}
