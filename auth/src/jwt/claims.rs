use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by access tokens.
///
/// Tokens are stateless: subject, issue time, and expiry are embedded at
/// issuance, and validity is fully determined by them plus the signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (authenticated entity identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `time_to_live` from now.
    pub fn new(subject: impl ToString, time_to_live: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + time_to_live).timestamp(),
        }
    }
}
