use chrono::{DateTime, Utc};

/// which end of the itinerary a frontier grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// from the origin. node instants are arrival times, earlier is better.
    Forward,
    /// from the destination. node instants are latest permissible departure
    /// times, later is better.
    Backward,
}

impl Direction {
    /// whether instant `a` is at least as good as instant `b`.
    pub fn no_worse(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
        match self {
            Direction::Forward => a <= b,
            Direction::Backward => a >= b,
        }
    }
}
