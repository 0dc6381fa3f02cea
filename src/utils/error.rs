use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Property not found: {application}/{profile}/{label}:{key}")]
    PropertyNotFound {
        application: String,
        profile: String,
        label: String,
        key: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

pub type Result<T> = std::result::Result<T, PropertiesError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    NotFound,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a command that failed with this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0, // 警告，但成功
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PropertiesError {
    pub fn not_found(id: &crate::domain::model::PropertyId) -> Self {
        PropertiesError::PropertyNotFound {
            application: id.application.clone(),
            profile: id.profile.clone(),
            label: id.label.clone(),
            key: id.key.clone(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PropertiesError::ConfigError { .. }
            | PropertiesError::ConfigValidationError { .. }
            | PropertiesError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PropertiesError::ValidationError { .. } => ErrorCategory::Validation,
            PropertiesError::PropertyNotFound { .. } => ErrorCategory::NotFound,
            PropertiesError::IoError(_) | PropertiesError::StorageError { .. } => {
                ErrorCategory::Storage
            }
            PropertiesError::SerializationError(_) | PropertiesError::CsvError(_) => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PropertiesError::InvalidConfigValueError { field, .. }
            | PropertiesError::ConfigValidationError { field, .. } => {
                format!("Check the value of '{}' in the configuration file", field)
            }
            PropertiesError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            PropertiesError::ValidationError { .. } => {
                "Application, profile, label and key must all be non-empty".to_string()
            }
            PropertiesError::PropertyNotFound { .. } => {
                "List the existing properties to check the application, profile and label"
                    .to_string()
            }
            PropertiesError::IoError(_) | PropertiesError::StorageError { .. } => {
                "Check that the data directory exists and is writable".to_string()
            }
            PropertiesError::SerializationError(_) | PropertiesError::CsvError(_) => {
                "Check the input file format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::NotFound => self.to_string(),
            ErrorCategory::Storage => format!("Could not access property storage: {}", self),
            ErrorCategory::Data => format!("Could not read or write data: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PropertyId;

    #[test]
    fn test_not_found_fails_the_command() {
        let err = PropertiesError::not_found(&PropertyId::new("svc", "dev", "main", "timeout"));
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.severity().exit_code(), 2);
        assert_eq!(err.to_string(), "Property not found: svc/dev/main:timeout");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: PropertiesError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
        assert!(err.user_friendly_message().contains("storage"));
    }

    #[test]
    fn test_invalid_config_suggestion_names_field() {
        let err = PropertiesError::InvalidConfigValueError {
            field: "storage.base_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("storage.base_path"));
    }
}
