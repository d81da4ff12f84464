use thiserror::Error;

pub type Result<T> = std::result::Result<T, CycleError>;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Invalid value {value:?} for {command}")]
    InvalidValue { command: String, value: String },
}
