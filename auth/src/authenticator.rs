use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Owns the hashing and token handling state for the process: the signing
/// secret and the token time-to-live are fixed at construction and
/// read-only afterwards.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl_hours` - Hours until an issued token expires
    pub fn new(jwt_secret: &[u8], token_ttl_hours: i64) -> Self {
        Self::with_hasher(jwt_secret, token_ttl_hours, PasswordHasher::new())
    }

    /// Create an authenticator with a custom-configured password hasher.
    pub fn with_hasher(
        jwt_secret: &[u8],
        token_ttl_hours: i64,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Whether `password` matches `stored_hash`.
    ///
    /// A malformed stored hash counts as a mismatch.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a signed token for the given subject, expiring after the
    /// configured time-to-live.
    ///
    /// # Errors
    /// * `SigningFailed` - Token generation failed
    pub fn generate_token(&self, subject: &str) -> Result<String, JwtError> {
        let claims = Claims::new(subject, self.token_ttl);
        self.jwt_handler.encode(&claims)
    }

    /// Validate a token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, format, or expiry check failed
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        let claims = self.jwt_handler.decode(token)?;
        Ok(claims.sub)
    }
}
