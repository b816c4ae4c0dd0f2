use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;

use crate::company::errors::CompanyError;
use crate::company::models::AuthenticatedSession;
use crate::company::models::Company;
use crate::company::models::CompanyId;
use crate::company::models::RegisterCompanyCommand;
use crate::company::models::TaxId;
use crate::company::models::TRIAL_PERIOD_DAYS;
use crate::company::ports::CompanyRepository;
use crate::company::ports::CompanyServicePort;
use crate::company::ports::CredentialHasher;
use crate::company::ports::TokenIssuer;

/// Domain service implementation for company operations.
///
/// Concrete implementation of CompanyServicePort with dependency injection.
pub struct CompanyService<CR, CH, TI>
where
    CR: CompanyRepository,
    CH: CredentialHasher,
    TI: TokenIssuer,
{
    repository: Arc<CR>,
    hasher: Arc<CH>,
    tokens: Arc<TI>,
}

impl<CR, CH, TI> CompanyService<CR, CH, TI>
where
    CR: CompanyRepository,
    CH: CredentialHasher,
    TI: TokenIssuer,
{
    /// Create a new company service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Company persistence implementation
    /// * `hasher` - Credential hashing implementation
    /// * `tokens` - Token issuance implementation
    pub fn new(repository: Arc<CR>, hasher: Arc<CH>, tokens: Arc<TI>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<CR, CH, TI> CompanyServicePort for CompanyService<CR, CH, TI>
where
    CR: CompanyRepository,
    CH: CredentialHasher,
    TI: TokenIssuer,
{
    async fn register(&self, command: RegisterCompanyCommand) -> Result<Company, CompanyError> {
        if self
            .repository
            .find_by_tax_id(&command.tax_id)
            .await?
            .is_some()
        {
            return Err(CompanyError::AlreadyRegistered(command.tax_id.to_string()));
        }

        let password_hash = self.hasher.hash(&command.password)?;

        let created_at = Utc::now();
        let company = Company {
            id: CompanyId::new(),
            tax_id: command.tax_id,
            legal_name: command.legal_name,
            trade_name: command.trade_name,
            password_hash,
            trial_ends_at: created_at + Duration::days(TRIAL_PERIOD_DAYS),
            created_at,
        };

        let created = self.repository.create(company).await?;

        tracing::info!(company_id = %created.id, "Company registered");

        Ok(created)
    }

    async fn authenticate(
        &self,
        tax_id: &TaxId,
        password: &str,
    ) -> Result<AuthenticatedSession, CompanyError> {
        // Unknown tax id and wrong password collapse into the same error.
        let company = self
            .repository
            .find_by_tax_id(tax_id)
            .await?
            .ok_or(CompanyError::InvalidCredentials)?;

        if !self.hasher.verify(password, &company.password_hash) {
            return Err(CompanyError::InvalidCredentials);
        }

        let token = self.tokens.issue(&company.id.to_string())?;

        Ok(AuthenticatedSession { company, token })
    }

    async fn profile(&self, id: &CompanyId) -> Result<Company, CompanyError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id.to_string()))
    }

    async fn ensure_trial_active(&self, id: &CompanyId) -> Result<(), CompanyError> {
        let company = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id.to_string()))?;

        // Access is denied only strictly after the deadline.
        if Utc::now() > company.trial_ends_at {
            return Err(CompanyError::TrialExpired);
        }

        Ok(())
    }
}
