use async_trait::async_trait;

use crate::company::errors::CompanyError;
use crate::company::models::AuthenticatedSession;
use crate::company::models::Company;
use crate::company::models::CompanyId;
use crate::company::models::RegisterCompanyCommand;
use crate::company::models::TaxId;

/// Port for company domain service operations.
#[async_trait]
pub trait CompanyServicePort: Send + Sync + 'static {
    /// Register a new company with a fresh trial window.
    ///
    /// # Errors
    /// * `AlreadyRegistered` - Tax id is already taken
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCompanyCommand) -> Result<Company, CompanyError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown tax id or wrong password, indistinguishably
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(
        &self,
        tax_id: &TaxId,
        password: &str,
    ) -> Result<AuthenticatedSession, CompanyError>;

    /// Retrieve the profile of an authenticated company.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn profile(&self, id: &CompanyId) -> Result<Company, CompanyError>;

    /// Check that the company exists and its trial window is still open.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `TrialExpired` - Trial window has closed
    /// * `DatabaseError` - Database operation failed
    async fn ensure_trial_active(&self, id: &CompanyId) -> Result<(), CompanyError>;
}

/// Persistence operations for the company aggregate.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    /// Persist a new company to storage.
    ///
    /// The store enforces tax id uniqueness; a violation surfaces as
    /// `AlreadyRegistered`.
    async fn create(&self, company: Company) -> Result<Company, CompanyError>;

    /// Retrieve a company by tax id (None if not found).
    async fn find_by_tax_id(&self, tax_id: &TaxId) -> Result<Option<Company>, CompanyError>;

    /// Retrieve a company by identifier (None if not found).
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError>;
}

/// One-way hashing of login secrets.
///
/// Abstract so the hashing algorithm can be upgraded without touching the
/// service.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a password for storage.
    fn hash(&self, password: &str) -> Result<String, CompanyError>;

    /// Whether `password` matches `hash`. A malformed stored hash counts
    /// as a mismatch.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Issues signed, expiring identity tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Issue a token binding `subject` for the configured time-to-live.
    fn issue(&self, subject: &str) -> Result<String, CompanyError>;
}
