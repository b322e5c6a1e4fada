use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Display;

/// headline numbers for a loaded flight index.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct IndexSummary {
    pub locations: usize,
    pub legs: usize,
    pub routes: usize,
    pub skipped: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl IndexSummary {
    pub const HEADER: &'static str = "locations,legs,routes,skipped,first_date,last_date";
}

impl Display for IndexSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let first = self.first_date.map(|d| d.to_string()).unwrap_or_default();
        let last = self.last_date.map(|d| d.to_string()).unwrap_or_default();
        write!(
            f,
            "{},{},{},{},{},{}",
            self.locations, self.legs, self.routes, self.skipped, first, last
        )
    }
}
