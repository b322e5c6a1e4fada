mod attendee_outcome;
mod event_schedule;
mod host_candidate;
mod host_metrics;

pub mod aggregation_ops;
pub mod stats_ops;

pub use attendee_outcome::AttendeeOutcome;
pub use event_schedule::EventSchedule;
pub use host_candidate::HostCandidate;
pub use host_metrics::HostMetrics;
