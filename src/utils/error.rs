use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Trivia lookup failed: {message}")]
    TriviaLookupError { message: String },
}

impl ServiceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ServiceError::HttpClientError(_) | ServiceError::TriviaLookupError { .. } => {
                "Check network connectivity and the trivia endpoint"
            }
            ServiceError::IoError(_) => "Check that the address is free and files are readable",
            ServiceError::ConfigValidationError { .. }
            | ServiceError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
