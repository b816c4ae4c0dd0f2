use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::company::errors::CompanyError;
use crate::company::models::Company;
use crate::company::models::CompanyId;
use crate::company::models::CompanyName;
use crate::company::models::TaxId;
use crate::company::ports::CompanyRepository;

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    tax_id: String,
    legal_name: String,
    trade_name: String,
    password_hash: String,
    trial_ends_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl CompanyRow {
    fn try_into_company(self) -> Result<Company, CompanyError> {
        Ok(Company {
            id: CompanyId(self.id),
            tax_id: TaxId::new(self.tax_id)?,
            legal_name: CompanyName::new(self.legal_name)?,
            trade_name: CompanyName::new(self.trade_name)?,
            password_hash: self.password_hash,
            trial_ends_at: self.trial_ends_at,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        sqlx::query(
            r#"
            INSERT INTO companies (id, tax_id, legal_name, trade_name, password_hash, trial_ends_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(company.id.0)
        .bind(company.tax_id.as_str())
        .bind(company.legal_name.as_str())
        .bind(company.trade_name.as_str())
        .bind(&company.password_hash)
        .bind(company.trial_ends_at)
        .bind(company.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CompanyError::AlreadyRegistered(company.tax_id.to_string());
                }
            }
            CompanyError::DatabaseError(e.to_string())
        })?;

        Ok(company)
    }

    async fn find_by_tax_id(&self, tax_id: &TaxId) -> Result<Option<Company>, CompanyError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, tax_id, legal_name, trade_name, password_hash, trial_ends_at, created_at
            FROM companies
            WHERE tax_id = $1
            "#,
        )
        .bind(tax_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        row.map(CompanyRow::try_into_company).transpose()
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, tax_id, legal_name, trade_name, password_hash, trial_ends_at, created_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        row.map(CompanyRow::try_into_company).transpose()
    }
}
