use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate_company::authenticate_company;
use super::handlers::get_profile::get_profile;
use super::handlers::register_company::register_company;
use super::middleware::check_trial;
use super::middleware::require_authentication;
use crate::company::ports::CompanyServicePort;

#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<dyn CompanyServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    company_service: Arc<dyn CompanyServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        company_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(health))
        .route("/companies", post(register_company))
        .route("/companies/sessions", post(authenticate_company));

    // Layers run outermost-last-added: the authentication gate is added
    // after the trial gate so it always runs first.
    let protected_routes = Router::new()
        .route("/companies/profile", get(get_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), check_trial))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authentication,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "message": "Company registration API - online" }))
}
