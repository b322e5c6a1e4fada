mod app_error;
mod convene_app;
mod operation;

pub mod config_ops;
pub mod flight_csv;
pub mod scenario_file;

pub use app_error::AppError;
pub use convene_app::ConveneApp;
pub use operation::ConveneOperation;
