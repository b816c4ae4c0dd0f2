use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::company::models::CompanyId;
use crate::inbound::http::router::AppState;

/// Identity bound to the request once its bearer token has been verified.
///
/// Written exactly once by [`require_authentication`], read by
/// [`check_trial`] and downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedCompany {
    pub company_id: CompanyId,
}

/// Middleware that verifies the bearer token and binds the company
/// identity to the request.
///
/// All token failures produce the same 401: the response never reveals
/// whether the token was malformed, forged, or expired.
pub async fn require_authentication(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let subject = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid authorization token".to_string()).into_response()
    })?;

    let company_id = CompanyId::from_string(&subject).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a company id");
        ApiError::Unauthorized("Invalid authorization token".to_string()).into_response()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedCompany { company_id });

    Ok(next.run(req).await)
}

/// Middleware that rejects requests from companies whose trial window has
/// closed.
///
/// Must be composed after [`require_authentication`]: it reads the
/// identity bound by that layer. A missing identity is a composition bug
/// and surfaces as a 500, never as a client error.
pub async fn check_trial(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let authenticated = req
        .extensions()
        .get::<AuthenticatedCompany>()
        .cloned()
        .ok_or_else(|| {
            ApiError::InternalServerError(
                "check_trial composed without require_authentication".to_string(),
            )
            .into_response()
        })?;

    state
        .company_service
        .ensure_trial_active(&authenticated.company_id)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req.headers().get(AUTHORIZATION).ok_or_else(|| {
        ApiError::Unauthorized("Missing authorization token".to_string()).into_response()
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid authorization token".to_string()).into_response()
    })?;

    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response()
    })?;

    Ok(token)
}
