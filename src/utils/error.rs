use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrlError { url: String, reason: String },

    #[error("Response for '{epithet}' is missing field '{field}'")]
    MissingFieldError { field: String, epithet: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    pub fn missing_field(field: &str, epithet: &str) -> Self {
        CheckError::MissingFieldError {
            field: field.to_string(),
            epithet: epithet.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
