pub mod error;
pub mod index;
pub mod metrics;
pub mod model;
pub mod pareto;
pub mod report;
pub mod scoring;
pub mod search;
pub mod solver;

pub use error::EngineError;
