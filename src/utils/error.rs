use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartyUpError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Service rejected the request: {message}")]
    ProtocolError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    Protocol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PartyUpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            // An undecodable body is the service talking nonsense, not the
            // network failing.
            PartyUpError::ApiError(e) if e.is_decode() => ErrorCategory::Protocol,
            PartyUpError::ApiError(_) => ErrorCategory::Transport,
            PartyUpError::SerializationError(_) | PartyUpError::ProtocolError { .. } => {
                ErrorCategory::Protocol
            }
            PartyUpError::MissingConfigError { .. }
            | PartyUpError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Transport | ErrorCategory::Protocol => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PartyUpError::ApiError(e) => format!("Could not reach Habitica: {}", e),
            PartyUpError::SerializationError(e) => {
                format!("Habitica returned a response we could not decode: {}", e)
            }
            PartyUpError::MissingConfigError { field } => {
                format!("Please provide {}", field)
            }
            PartyUpError::InvalidConfigValueError { field, value, reason } => {
                format!("The value '{}' for {} is invalid: {}", value, field, reason)
            }
            PartyUpError::ProtocolError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags; --api-user and --api-key are required".to_string()
            }
            ErrorCategory::Transport => {
                "Check your network connection and try again".to_string()
            }
            ErrorCategory::Protocol => {
                "Check your API user and key; the service refused the request".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PartyUpError>;
