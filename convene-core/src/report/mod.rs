mod comparison_report;
mod host_report;
mod itinerary_report;
mod solution_report;
mod time_span;

pub mod report_ops;

pub use comparison_report::{ComparisonReport, TravelTimeRange, ValueRange};
pub use host_report::HostReport;
pub use itinerary_report::{ItineraryReport, LegReport};
pub use solution_report::SolutionReport;
pub use time_span::TimeSpan;
