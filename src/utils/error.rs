use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Location lookup failed: {message}")]
    LocationError { message: String },

    #[error("Restaurant search failed: {message}")]
    SearchError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Location,
    Search,
    Network,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::LocationError { .. } => ErrorCategory::Location,
            FinderError::SearchError { .. } => ErrorCategory::Search,
            FinderError::ApiError(_) => ErrorCategory::Network,
            FinderError::ConfigError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FinderError::SerializationError(_) | FinderError::IoError(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FinderError::LocationError { .. }
            | FinderError::SearchError { .. }
            | FinderError::ApiError(_) => ErrorSeverity::High,
            FinderError::ConfigError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorSeverity::Medium,
            FinderError::SerializationError(_) | FinderError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Location => {
                "An error occurred while getting your location.".to_string()
            }
            ErrorCategory::Search => "Unable to find any pizza near you.".to_string(),
            ErrorCategory::Network => {
                "Could not reach the pizza service. Check your connection.".to_string()
            }
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Internal => format!("Unexpected error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Location => {
                "Pass --zip to search a known zip code directly".to_string()
            }
            ErrorCategory::Search => {
                "Try a different zip code, or check --search-endpoint".to_string()
            }
            ErrorCategory::Network => {
                "Verify the endpoint URLs and that you are online".to_string()
            }
            ErrorCategory::Configuration => {
                "Run with --help to see accepted flags and formats".to_string()
            }
            ErrorCategory::Internal => "Re-run with --verbose and report the log".to_string(),
        }
    }

    /// Process exit code per severity, matching the CLI contract.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_failures_are_high_severity() {
        let err = FinderError::LocationError {
            message: "no fix".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);

        let err = FinderError::SearchError {
            message: "no results".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Search);
        assert_eq!(err.user_friendly_message(), "Unable to find any pizza near you.");
    }

    #[test]
    fn config_failures_exit_with_code_two() {
        let err = FinderError::InvalidConfigValueError {
            field: "zip".to_string(),
            value: "abc".to_string(),
            reason: "not a 5-digit zip".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }
}
