use auth::PolicyViolation;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for DisplayName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for authentication and profile operations.
///
/// Every variant is a normal request outcome, recovered at the HTTP
/// boundary; nothing here crashes the process.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password does not meet the policy")]
    WeakPassword(Vec<PolicyViolation>),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing or malformed authorization")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    // Detail stays server-side; the HTTP layer logs it and sends a generic message
    #[error("Internal error: {0}")]
    Internal(String),
}
