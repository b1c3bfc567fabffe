//! CRM Errors
//!
//! Every failure is terminal for the single operation that hit it.

/// Common result type for CRM operations
pub type CrmResult<T> = Result<T, CrmError>;

/// Shown when a write fails without a server-provided message
pub const GENERIC_WRITE_FAILURE: &str = "Failed to add contact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrmError {
    /// The request never produced a response body
    Transport(String),
    /// The body was not the expected envelope
    Decode(String),
    /// The server answered `success: false`
    Rejected(Option<String>),
    /// Invalid configuration value
    Config(String),
}

impl CrmError {
    /// Message surfaced to the user when adding a contact fails.
    pub fn user_message(&self) -> String {
        match self {
            CrmError::Rejected(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            _ => GENERIC_WRITE_FAILURE.to_string(),
        }
    }
}

impl std::fmt::Display for CrmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrmError::Transport(msg) => write!(f, "Transport error: {}", msg),
            CrmError::Decode(msg) => write!(f, "Decode error: {}", msg),
            CrmError::Rejected(Some(msg)) => write!(f, "Rejected by server: {}", msg),
            CrmError::Rejected(None) => write!(f, "Rejected by server"),
            CrmError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for CrmError {}

impl From<reqwest::Error> for CrmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CrmError::Decode(e.to_string())
        } else {
            CrmError::Transport(e.to_string())
        }
    }
}
