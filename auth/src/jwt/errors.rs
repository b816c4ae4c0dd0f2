use thiserror::Error;

/// Error type for token operations.
///
/// Every verification failure collapses into `InvalidToken`: a caller (or
/// an attacker probing the API) cannot tell a bad signature from a
/// malformed or expired token.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}
