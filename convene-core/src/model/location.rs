use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an airport or city code. the same type names attendee origins, host
/// candidates and flight endpoints. ordering is ordinal over the code's
/// bytes so rankings never depend on locale.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(code: &str) -> Location {
        Location(code.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Location::new(value)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
