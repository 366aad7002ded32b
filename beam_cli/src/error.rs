use beam_core::BeamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Beam(#[from] BeamError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Argument error: {0}")]
    Argument(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, CliError>;
