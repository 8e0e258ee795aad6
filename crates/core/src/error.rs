use thiserror::Error;

pub type TrackingResult<T> = Result<T, TrackingError>;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl TrackingError {
    pub fn missing(rule: impl Into<String>) -> Self {
        Self::MissingRequiredField(rule.into())
    }

    pub fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidArgument(what.into())
    }
}
