use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;
use company_service::company::errors::CompanyError;
use company_service::company::models::Company;
use company_service::company::models::CompanyId;
use company_service::company::models::TaxId;
use company_service::company::ports::CompanyRepository;
use company_service::domain::company::service::CompanyService;
use company_service::inbound::http::router::create_router;
use uuid::Uuid;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub companies: Arc<InMemoryCompanyRepository>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let companies = Arc::new(InMemoryCompanyRepository::new());
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, 24));

        let company_service = Arc::new(CompanyService::new(
            Arc::clone(&companies),
            Arc::clone(&authenticator),
            Arc::clone(&authenticator),
        ));

        let router = create_router(company_service, Arc::clone(&authenticator));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            companies,
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}

/// In-memory company store mirroring the Postgres adapter's contract,
/// including tax id uniqueness.
pub struct InMemoryCompanyRepository {
    companies: RwLock<HashMap<Uuid, Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self {
            companies: RwLock::new(HashMap::new()),
        }
    }

    /// Rewrite a stored company's trial deadline (simulates clock advance).
    pub fn set_trial_ends_at(&self, id: &CompanyId, trial_ends_at: DateTime<Utc>) {
        let mut companies = self.companies.write().unwrap();
        if let Some(company) = companies.get_mut(&id.0) {
            company.trial_ends_at = trial_ends_at;
        }
    }

    /// Remove a stored company (simulates deletion while a token is live).
    pub fn remove(&self, id: &CompanyId) {
        self.companies.write().unwrap().remove(&id.0);
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        let mut companies = self.companies.write().unwrap();

        if companies.values().any(|c| c.tax_id == company.tax_id) {
            return Err(CompanyError::AlreadyRegistered(company.tax_id.to_string()));
        }

        companies.insert(company.id.0, company.clone());
        Ok(company)
    }

    async fn find_by_tax_id(&self, tax_id: &TaxId) -> Result<Option<Company>, CompanyError> {
        let companies = self.companies.read().unwrap();
        Ok(companies.values().find(|c| &c.tax_id == tax_id).cloned())
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        let companies = self.companies.read().unwrap();
        Ok(companies.get(&id.0).cloned())
    }
}
