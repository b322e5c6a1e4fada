/// a flight record that could not become a [`crate::model::FlightLeg`]. the
/// record is skipped and counted, the load continues.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("flight record is missing required field '{0}'")]
    MissingField(&'static str),
    #[error("flight duration must be a positive number of hours, found {0}")]
    InvalidDuration(f64),
    #[error("flight emissions must be a non-negative number of tonnes, found {0}")]
    InvalidEmissions(f64),
    #[error("failed to parse departure date '{value}': {message}")]
    InvalidDate { value: String, message: String },
    #[error("invalid flight endpoints: {0}")]
    InvalidLocation(String),
    #[error("unreadable flight record: {0}")]
    Unreadable(String),
}
