use serde::{Deserialize, Serialize};

use crate::model::Location;

/// all travellers originating from one location. metrics are computed once
/// per group and weighted by headcount, never per individual.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AttendeeGroup {
    pub location: Location,
    pub headcount: u32,
}

impl AttendeeGroup {
    pub fn new(location: Location, headcount: u32) -> Self {
        Self {
            location,
            headcount,
        }
    }
}
