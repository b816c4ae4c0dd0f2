//! Adapters binding the auth crate's implementations to the domain's
//! capability ports.

use auth::Authenticator;

use crate::company::errors::CompanyError;
use crate::company::ports::CredentialHasher;
use crate::company::ports::TokenIssuer;

impl CredentialHasher for Authenticator {
    fn hash(&self, password: &str) -> Result<String, CompanyError> {
        self.hash_password(password)
            .map_err(|e| CompanyError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        self.verify_password(password, hash)
    }
}

impl TokenIssuer for Authenticator {
    fn issue(&self, subject: &str) -> Result<String, CompanyError> {
        self.generate_token(subject)
            .map_err(|e| CompanyError::Token(e.to_string()))
    }
}
