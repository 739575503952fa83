//! Module errors

use thiserror::Error;

/// Represents the different types of errors raised while talking to the activity service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ActivityError {
    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),

    /// The request failed or the service answered with an error status.
    #[error("failed to fetch data: {0}")]
    FetchData(String),

    /// The service answered with a body of unexpected shape.
    #[error("incorrect data format: {0}")]
    IncorrectDataFormat(String),

    /// The fallback label table is inconsistent.
    #[error("invalid activity bands: {0}")]
    InvalidBands(String),
}
