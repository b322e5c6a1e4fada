use crate::{error::EngineError, scoring::RankedHost};

/// outcome of a run: the best host plus every other ranked host, best
/// first. only the first `alternatives` runners-up are reported as
/// alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a> {
    winner: RankedHost<'a>,
    runners_up: Vec<RankedHost<'a>>,
    alternatives: usize,
}

impl<'a> Solution<'a> {
    pub fn new(ranked: Vec<RankedHost<'a>>, alternatives: usize) -> Result<Solution<'a>, EngineError> {
        let mut ranked = ranked.into_iter();
        let winner = ranked.next().ok_or_else(|| {
            EngineError::InternalError(String::from("cannot build a solution from an empty ranking"))
        })?;
        Ok(Solution {
            winner,
            runners_up: ranked.collect(),
            alternatives,
        })
    }

    pub fn winner(&self) -> &RankedHost<'a> {
        &self.winner
    }

    pub fn alternatives(&self) -> &[RankedHost<'a>] {
        let n = self.alternatives.min(self.runners_up.len());
        &self.runners_up[..n]
    }

    /// every ranked host, winner first.
    pub fn ranked(&self) -> impl Iterator<Item = &RankedHost<'a>> {
        std::iter::once(&self.winner).chain(self.runners_up.iter())
    }

    pub fn ranked_count(&self) -> usize {
        self.runners_up.len() + 1
    }
}
