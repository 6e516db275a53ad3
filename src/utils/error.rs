use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Invalid input: {message}")]
    InvalidInputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SolverError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolverError::ConfigError { .. }
            | SolverError::ConfigValidationError { .. }
            | SolverError::InvalidConfigValueError { .. }
            | SolverError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SolverError::CsvError(_) | SolverError::InvalidInputError { .. } => {
                ErrorCategory::Input
            }
            SolverError::IoError(_) => ErrorCategory::Io,
            SolverError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重新執行可能就會成功 (檔案被鎖定等)
            SolverError::IoError(_) => ErrorSeverity::Medium,
            SolverError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SolverError::IoError(_) => {
                "Check that the file exists and that you have permission to access it".to_string()
            }
            SolverError::CsvError(_) => {
                "Values files must contain unsigned integers separated by commas or newlines"
                    .to_string()
            }
            SolverError::SerializationError(_) => {
                "This is likely a bug; re-run with --verbose and report the log".to_string()
            }
            SolverError::ConfigError { .. } | SolverError::ConfigValidationError { .. } => {
                "Review the configuration file syntax and field names".to_string()
            }
            SolverError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            SolverError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration or pass it on the command line", field)
            }
            SolverError::InvalidInputError { .. } => {
                "All values must be positive integers and their total must fit in 64 bits"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Io => format!("File access problem: {}", self),
            ErrorCategory::Output => format!("Could not produce the report: {}", self),
        }
    }

    /// 依嚴重程度決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_severity() {
        let err = SolverError::MissingConfigError {
            field: "problem.target".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("problem.target"));

        let io = SolverError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.exit_code(), 2);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = SolverError::InvalidInputError {
            message: "value at index 2 is zero".to_string(),
        };
        let msg = err.user_friendly_message();
        assert!(msg.starts_with("Input problem"));
        assert!(msg.contains("index 2"));
    }
}
