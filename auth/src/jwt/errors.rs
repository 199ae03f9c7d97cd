use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures stay distinct here so logs and tests can tell an
/// expired token from a tampered one; the HTTP boundary collapses them all
/// into a single "invalid token" response.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token claims are invalid: {0}")]
    InvalidClaims(String),
}
