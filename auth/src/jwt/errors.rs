use thiserror::Error;

/// Error type for bearer token operations.
///
/// Verification failures are deliberately collapsed into the single
/// `Invalid` variant: a caller cannot tell a bad signature from a malformed
/// token or an elapsed expiry, so rejected tokens leak nothing about why.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid or expired")]
    Invalid,
}
