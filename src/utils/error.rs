use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Text decoding error: {0}")]
    DecodeError(#[from] std::string::FromUtf8Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, RiskError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RiskError::IoError(_) => ErrorSeverity::Critical,
            RiskError::SerializationError(_) => ErrorSeverity::Critical,
            RiskError::CsvError(_) | RiskError::DecodeError(_) => ErrorSeverity::High,
            RiskError::ConfigValidationError { .. }
            | RiskError::InvalidConfigValueError { .. }
            | RiskError::MissingConfigError { .. } => ErrorSeverity::High,
            RiskError::ProcessingError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RiskError::CsvError(e) => format!("The CSV file could not be parsed: {}", e),
            RiskError::IoError(e) => format!("File access failed: {}", e),
            RiskError::SerializationError(e) => format!("Report serialization failed: {}", e),
            RiskError::DecodeError(_) => "The input file is not valid UTF-8 text".to_string(),
            RiskError::ConfigValidationError { field, message } => {
                format!("Configuration problem with '{}': {}", field, message)
            }
            RiskError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            RiskError::MissingConfigError { field } => {
                format!("Required configuration field '{}' is missing", field)
            }
            RiskError::ProcessingError { message } => {
                format!("Analysis could not be completed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RiskError::CsvError(_) => "Check that the CSV file is well-formed and comma-separated",
            RiskError::IoError(_) => "Check the file paths and directory permissions",
            RiskError::SerializationError(_) => "Re-run the analysis; report this if it persists",
            RiskError::DecodeError(_) => "Re-save the meeting minutes as UTF-8 encoded text",
            RiskError::ConfigValidationError { .. }
            | RiskError::InvalidConfigValueError { .. }
            | RiskError::MissingConfigError { .. } => {
                "Review the command-line flags or the TOML configuration file"
            }
            RiskError::ProcessingError { .. } => "Verify the input document and try again",
        }
    }
}
