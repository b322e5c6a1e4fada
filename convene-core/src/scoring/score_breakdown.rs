use serde::Serialize;
use std::collections::BTreeMap;

use crate::scoring::HostMetric;

/// composite score and the weighted, normalized contribution of each metric.
/// `composite` is the sum of components divided by the total weight.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub composite: f64,
    pub components: BTreeMap<HostMetric, f64>,
}
