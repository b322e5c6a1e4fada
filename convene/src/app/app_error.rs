use convene_core::EngineError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    EngineError(#[from] EngineError),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed reading '{filepath}': {source}")]
    CsvError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failed parsing '{filepath}': {source}")]
    JsonError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failure accessing '{filepath}': {source}")]
    IoError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
