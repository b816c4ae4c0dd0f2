use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::company::models::Company;
use crate::inbound::http::middleware::AuthenticatedCompany;
use crate::inbound::http::router::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedCompany>,
) -> Result<ApiSuccess<GetProfileResponseData>, ApiError> {
    state
        .company_service
        .profile(&authenticated.company_id)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::OK, company.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetProfileResponseData {
    pub id: String,
    pub tax_id: String,
    pub legal_name: String,
    pub trade_name: String,
    pub trial_ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<&Company> for GetProfileResponseData {
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
