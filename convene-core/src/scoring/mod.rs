mod host_metric;
mod host_scorer;
mod host_weights;
mod metric_bounds;
mod ranked_host;
mod score_breakdown;

pub use host_metric::HostMetric;
pub use host_scorer::HostScorer;
pub use host_weights::HostWeights;
pub use metric_bounds::MetricBounds;
pub use ranked_host::RankedHost;
pub use score_breakdown::ScoreBreakdown;
