use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lookup service answered with HTTP status {status}")]
    LookupStatus { status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FormError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::Http(_) | FormError::LookupStatus { .. } => {
                "Could not reach the postal-code service".to_string()
            }
            FormError::IoError(e) => format!("File access failed: {}", e),
            FormError::ConfigError { .. }
            | FormError::ConfigValidationError { .. }
            | FormError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormError::Http(_) | FormError::LookupStatus { .. } => {
                "Check your network connection and the lookup.base_url setting"
            }
            FormError::IoError(_) => "Check that the file exists and is readable",
            _ => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
