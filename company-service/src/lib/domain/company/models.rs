use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::company::errors::CompanyIdError;
use crate::company::errors::CompanyNameError;
use crate::company::errors::TaxIdError;

/// Days a newly registered company may use the service before subscribing
/// to a plan.
pub const TRIAL_PERIOD_DAYS: i64 = 14;

/// Company aggregate entity.
///
/// Represents a registered business tenant. The password hash never leaves
/// this subsystem: API projections are built from the other fields only.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub tax_id: TaxId,
    pub legal_name: CompanyName,
    pub trade_name: CompanyName,
    pub password_hash: String,
    pub trial_ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Company unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub Uuid);

impl CompanyId {
    /// Generate a new random company ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a company ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CompanyIdError> {
        Uuid::parse_str(s)
            .map(CompanyId)
            .map_err(|e| CompanyIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// National registration number identifying a company.
///
/// Fixed format: exactly 14 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    const LENGTH: usize = 14;

    /// Create a new valid tax id.
    ///
    /// # Errors
    /// * `InvalidLength` - Not exactly 14 characters
    /// * `NonNumeric` - Contains a non-digit character
    pub fn new(tax_id: String) -> Result<Self, TaxIdError> {
        if tax_id.len() != Self::LENGTH {
            return Err(TaxIdError::InvalidLength {
                expected: Self::LENGTH,
                actual: tax_id.len(),
            });
        }

        if !tax_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(TaxIdError::NonNumeric);
        }

        Ok(Self(tax_id))
    }

    /// Get the tax id as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company name value type (legal or trade name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    const MIN_LENGTH: usize = 3;

    /// Create a new valid company name.
    ///
    /// # Errors
    /// * `TooShort` - Name shorter than 3 characters
    pub fn new(name: String) -> Result<Self, CompanyNameError> {
        if name.len() < Self::MIN_LENGTH {
            return Err(CompanyNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: name.len(),
            });
        }

        Ok(Self(name))
    }

    /// Get the name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new company with domain types
#[derive(Debug)]
pub struct RegisterCompanyCommand {
    pub tax_id: TaxId,
    pub legal_name: CompanyName,
    pub trade_name: CompanyName,
    pub password: String,
}

impl RegisterCompanyCommand {
    /// Construct a new register company command.
    ///
    /// # Arguments
    /// * `tax_id` - Validated tax id
    /// * `legal_name` - Validated legal name
    /// * `trade_name` - Validated trade name
    /// * `password` - Plain text password (will be hashed by the service)
    pub fn new(
        tax_id: TaxId,
        legal_name: CompanyName,
        trade_name: CompanyName,
        password: String,
    ) -> Self {
        Self {
            tax_id,
            legal_name,
            trade_name,
            password,
        }
    }
}

/// Result of a successful login: the company plus a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub company: Company,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_id_valid() {
        let tax_id = TaxId::new("12345678901234".to_string()).unwrap();
        assert_eq!(tax_id.as_str(), "12345678901234");
    }

    #[test]
    fn test_tax_id_wrong_length() {
        let result = TaxId::new("123".to_string());
        assert_eq!(
            result,
            Err(TaxIdError::InvalidLength {
                expected: 14,
                actual: 3
            })
        );
    }

    #[test]
    fn test_tax_id_non_numeric() {
        let result = TaxId::new("1234567890123a".to_string());
        assert_eq!(result, Err(TaxIdError::NonNumeric));
    }

    #[test]
    fn test_company_name_too_short() {
        let result = CompanyName::new("ab".to_string());
        assert_eq!(result, Err(CompanyNameError::TooShort { min: 3, actual: 2 }));
    }

    #[test]
    fn test_company_id_roundtrip() {
        let id = CompanyId::new();
        let parsed = CompanyId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_company_id_invalid_format() {
        let result = CompanyId::from_string("not-a-uuid");
        assert!(matches!(result, Err(CompanyIdError::InvalidFormat(_))));
    }
}
