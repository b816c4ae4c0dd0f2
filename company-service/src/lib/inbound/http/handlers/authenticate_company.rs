use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::company::errors::CompanyError;
use crate::company::models::Company;
use crate::company::models::TaxId;
use crate::inbound::http::router::AppState;

pub async fn authenticate_company(
    State(state): State<AppState>,
    Json(body): Json<AuthenticateCompanyRequest>,
) -> Result<ApiSuccess<AuthenticateCompanyResponseData>, ApiError> {
    // A syntactically invalid tax id cannot belong to any account; it gets
    // the same response as an unknown tax id or a wrong password.
    let tax_id = TaxId::new(body.tax_id)
        .map_err(|_| ApiError::from(CompanyError::InvalidCredentials))?;

    let session = state
        .company_service
        .authenticate(&tax_id, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateCompanyResponseData {
            company: (&session.company).into(),
            token: session.token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateCompanyRequest {
    tax_id: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticateCompanyResponseData {
    pub company: SessionCompanyData,
    pub token: String,
}

/// Minimal projection returned at login: id and trade name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCompanyData {
    pub id: String,
    pub trade_name: String,
}

impl From<&Company> for SessionCompanyData {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            trade_name: company.trade_name.as_str().to_string(),
        }
    }
}
