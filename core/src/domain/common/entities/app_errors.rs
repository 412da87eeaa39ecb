use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Height cannot be zero.")]
    InvalidHeight,

    /// Transport, status or response-format failure of the text-generation service.
    #[error("Error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
