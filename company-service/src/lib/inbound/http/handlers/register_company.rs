use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::company::errors::CompanyNameError;
use crate::company::errors::TaxIdError;
use crate::company::models::Company;
use crate::company::models::CompanyName;
use crate::company::models::RegisterCompanyCommand;
use crate::company::models::TaxId;
use crate::inbound::http::router::AppState;

pub async fn register_company(
    State(state): State<AppState>,
    Json(body): Json<RegisterCompanyRequest>,
) -> Result<ApiSuccess<RegisterCompanyResponseData>, ApiError> {
    state
        .company_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::CREATED, company.into()))
}

/// HTTP request body for registering a company (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterCompanyRequest {
    tax_id: String,
    legal_name: String,
    trade_name: String,
    password: String,
}

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Error)]
enum ParseRegisterCompanyRequestError {
    #[error("Invalid tax id: {0}")]
    TaxId(#[from] TaxIdError),

    #[error("Invalid company name: {0}")]
    Name(#[from] CompanyNameError),

    #[error("Password must have at least 6 characters")]
    PasswordTooShort,
}

impl RegisterCompanyRequest {
    fn try_into_command(self) -> Result<RegisterCompanyCommand, ParseRegisterCompanyRequestError> {
        let tax_id = TaxId::new(self.tax_id)?;
        let legal_name = CompanyName::new(self.legal_name)?;
        let trade_name = CompanyName::new(self.trade_name)?;

        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ParseRegisterCompanyRequestError::PasswordTooShort);
        }

        Ok(RegisterCompanyCommand::new(
            tax_id,
            legal_name,
            trade_name,
            self.password,
        ))
    }
}

impl From<ParseRegisterCompanyRequestError> for ApiError {
    fn from(err: ParseRegisterCompanyRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Public projection of a company. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterCompanyResponseData {
    pub id: String,
    pub tax_id: String,
    pub legal_name: String,
    pub trade_name: String,
    pub trial_ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<&Company> for RegisterCompanyResponseData {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            tax_id: company.tax_id.as_str().to_string(),
            legal_name: company.legal_name.as_str().to_string(),
            trade_name: company.trade_name.as_str().to_string(),
            trial_ends_at: company.trial_ends_at,
            created_at: company.created_at,
        }
    }
}
