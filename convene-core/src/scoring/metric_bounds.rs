use std::collections::BTreeMap;

use crate::{metrics::HostCandidate, scoring::HostMetric};

/// per-metric min and max over the host candidates being ranked together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricBounds(BTreeMap<HostMetric, (f64, f64)>);

impl MetricBounds {
    pub fn over(candidates: &[&HostCandidate<'_>]) -> MetricBounds {
        let mut bounds = BTreeMap::new();
        for metric in HostMetric::ALL {
            let values = candidates.iter().map(|c| metric.value(c.metrics()));
            let range = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });
            if let Some(range) = range {
                bounds.insert(metric, range);
            }
        }
        MetricBounds(bounds)
    }

    /// min-max scaling into [0, 1]. 0 when every candidate shares the value.
    pub fn normalize(&self, metric: &HostMetric, value: f64) -> f64 {
        match self.0.get(metric) {
            Some((lo, hi)) if hi > lo => (value - lo) / (hi - lo),
            _ => 0.0,
        }
    }
}
