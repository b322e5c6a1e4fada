use crate::{metrics::HostCandidate, scoring::ScoreBreakdown};

#[derive(Debug, Clone, PartialEq)]
pub struct RankedHost<'a> {
    pub candidate: HostCandidate<'a>,
    pub score: ScoreBreakdown,
}

impl RankedHost<'_> {
    pub fn composite_score(&self) -> f64 {
        self.score.composite
    }
}
