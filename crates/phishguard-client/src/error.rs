//! Client-side failures of a classification request

/// Message rendered for every transport-level failure.
///
/// Raw transport detail goes to the log only.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Could not reach the analysis service. Please try again.";

/// Message rendered when submit is attempted with blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste an email to analyze.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("email text is empty")]
    EmptyInput,
    #[error("service returned HTTP {0}")]
    Status(u16),
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("unexpected response: {0}")]
    Malformed(String),
}

impl ClientError {
    /// Human-readable, non-leaking text for the results surface
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => TRANSPORT_FAILURE_MESSAGE,
        }
    }
}
