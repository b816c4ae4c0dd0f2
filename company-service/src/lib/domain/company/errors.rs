use thiserror::Error;

/// Error for CompanyId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TaxId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaxIdError {
    #[error("Tax id must have exactly {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Tax id must contain only digits")]
    NonNumeric,
}

/// Error for CompanyName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyNameError {
    #[error("Company name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Top-level error for all company-related operations
#[derive(Debug, Clone, Error)]
pub enum CompanyError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid company id: {0}")]
    InvalidCompanyId(#[from] CompanyIdError),

    #[error("Invalid tax id: {0}")]
    InvalidTaxId(#[from] TaxIdError),

    #[error("Invalid company name: {0}")]
    InvalidName(#[from] CompanyNameError),

    // Domain-level errors
    #[error("A company with tax id {0} is already registered")]
    AlreadyRegistered(String),

    // One message for an unknown tax id and a wrong password.
    #[error("Incorrect tax id or password")]
    InvalidCredentials,

    #[error("Company not found: {0}")]
    NotFound(String),

    #[error("Trial period has expired. Subscribe to a plan to continue")]
    TrialExpired,

    // Infrastructure errors
    #[error("Credential hashing failed: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
