use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Persistence read error: {0}")]
    PersistenceReadError(String),

    #[error("Persistence write error: {0}")]
    PersistenceWriteError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::PersistenceWriteError(err.to_string())
    }
}

impl AppError {
    /// Human-readable message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::FetchError(msg)
            | AppError::PersistenceReadError(msg)
            | AppError::PersistenceWriteError(msg)
            | AppError::SerializationError(msg)
            | AppError::ConfigError(msg)
            | AppError::InvalidInput(msg) => msg,
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_tagged_message() {
        let err = AppError::FetchError("Failed to fetch shows".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "FetchError");
        assert_eq!(json["message"], "Failed to fetch shows");
    }

    #[test]
    fn test_message_strips_prefix() {
        let err = AppError::PersistenceWriteError("Failed to save favorites".to_string());
        assert_eq!(err.to_string(), "Persistence write error: Failed to save favorites");
        assert_eq!(err.message(), "Failed to save favorites");
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: AppError = serde_json::from_str::<Vec<u32>>("not json").unwrap_err().into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
