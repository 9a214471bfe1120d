//! Error types for deployer requests.

use thiserror::Error;

/// Result type alias for request construction.
pub type RequestResult<T> = Result<T, RequestError>;

/// Errors raised while constructing a deployer request.
///
/// Both kinds are produced at construction time only; accessors on a
/// constructed request never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A required argument is missing or blank.
    #[error("invalid argument: '{field}' {rule}")]
    InvalidArgument {
        field: &'static str,
        rule: &'static str,
    },

    /// An argument is present but outside its permitted range.
    #[error("invalid state: '{field}' {rule}")]
    InvalidState {
        field: &'static str,
        rule: &'static str,
    },
}

impl RequestError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            RequestError::InvalidArgument { field, .. }
            | RequestError::InvalidState { field, .. } => field,
        }
    }

    /// The rule the field violated.
    pub fn rule(&self) -> &'static str {
        match self {
            RequestError::InvalidArgument { rule, .. }
            | RequestError::InvalidState { rule, .. } => rule,
        }
    }
}
