#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("HTTP error: status {status}")]
    HttpError { status: u16 },

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
