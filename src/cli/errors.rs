use thiserror::Error;

/// Domain-specific errors for CLI operations
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("{what} not found: {id}")]
    NotFound { what: String, id: String },

    #[error("Query rejected by safety screen: {query}")]
    UnsafeQuery { query: String },

    #[error("Storage operation failed: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CliError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(what: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            what: what.into(),
            id: id.into(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::Storage {
                message: "File not found".to_string(),
            },
            std::io::ErrorKind::PermissionDenied => Self::Storage {
                message: "Permission denied".to_string(),
            },
            _ => Self::Storage {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput {
            message: format!("JSON error: {}", err),
        }
    }
}
