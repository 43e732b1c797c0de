use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializationError(#[from] toml::ser::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input '{value}' for '{field}': {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Degenerate configuration '{field}': {reason}")]
    DegenerateConfigError { field: String, reason: String },

    #[error("{table} total mismatch: declared {declared}, line items sum to {computed}")]
    TotalMismatchError {
        table: String,
        declared: u64,
        computed: u64,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    DataIntegrity,
    Io,
    Serialization,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. }
            | DashboardError::DegenerateConfigError { .. } => ErrorCategory::Configuration,
            DashboardError::InvalidInputError { .. } => ErrorCategory::Input,
            DashboardError::TotalMismatchError { .. } => ErrorCategory::DataIntegrity,
            DashboardError::IoError(_) => ErrorCategory::Io,
            DashboardError::SerializationError(_)
            | DashboardError::TomlSerializationError(_)
            | DashboardError::CsvError(_) => ErrorCategory::Serialization,
            DashboardError::ZipError(_) | DashboardError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::DataIntegrity => ErrorSeverity::High,
            ErrorCategory::Serialization | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashboardError::InvalidInputError { field, .. } => {
                format!("Pass a non-negative whole number for '{}'", field)
            }
            DashboardError::DegenerateConfigError { field, .. } => {
                format!("Set '{}' to a value greater than zero in the data file", field)
            }
            DashboardError::TotalMismatchError { table, computed, .. } => format!(
                "Fix the {} line items or set its declared_total to {}",
                table, computed
            ),
            DashboardError::MissingConfigError { field } => {
                format!("Add the '{}' entry to the data file", field)
            }
            DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::ConfigError { .. } => {
                "Check the command-line flags and the TOML data file".to_string()
            }
            DashboardError::IoError(_) => {
                "Check that the paths exist and are readable/writable".to_string()
            }
            DashboardError::ZipError(_)
            | DashboardError::CsvError(_)
            | DashboardError::SerializationError(_)
            | DashboardError::TomlSerializationError(_)
            | DashboardError::ProcessingError { .. } => {
                "Re-run with --verbose and check the logs for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid dashboard configuration: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::DataIntegrity => format!("Reference data is inconsistent: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Serialization => format!("Could not encode the dashboard: {}", self),
            ErrorCategory::Processing => format!("Could not build the export: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_mismatch_is_data_integrity() {
        let err = DashboardError::TotalMismatchError {
            table: "running_cost".to_string(),
            declared: 10,
            computed: 12,
        };
        assert_eq!(err.category(), ErrorCategory::DataIntegrity);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("12"));
    }

    #[test]
    fn test_negative_input_is_medium_severity() {
        let err = DashboardError::InvalidInputError {
            field: "additional_provision".to_string(),
            value: "-5".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().starts_with("Invalid input"));
    }
}
