mod co2_unit;
mod engine_config;
mod solution;

pub mod solver_ops;

pub use co2_unit::Co2Unit;
pub use engine_config::EngineConfig;
pub use solution::Solution;
pub use solver_ops::solve;
