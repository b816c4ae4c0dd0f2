mod common;

use auth::Authenticator;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use company_service::company::models::CompanyId;
use reqwest::StatusCode;
use serde_json::json;

/// Register a company and return the response body (asserts 201).
async fn register(app: &TestApp, tax_id: &str, password: &str) -> serde_json::Value {
    let response = app
        .post("/companies")
        .json(&json!({
            "tax_id": tax_id,
            "legal_name": "Acme Holdings Ltd",
            "trade_name": "Acme",
            "password": password
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

/// Register and log in, returning (company id, token).
async fn register_and_login(app: &TestApp, tax_id: &str, password: &str) -> (CompanyId, String) {
    let body = register(app, tax_id, password).await;
    let company_id = CompanyId::from_string(body["id"].as_str().unwrap()).unwrap();

    let response = app
        .post("/companies/sessions")
        .json(&json!({ "tax_id": tax_id, "password": password }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    (company_id, body["token"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_register_company_success() {
    let app = TestApp::spawn().await;

    let body = register(&app, "12345678901234", "pass_word!").await;

    assert_eq!(body["tax_id"], "12345678901234");
    assert_eq!(body["legal_name"], "Acme Holdings Ltd");
    assert_eq!(body["trade_name"], "Acme");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["trial_ends_at"].is_string());
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_company_trial_window_is_fourteen_days() {
    let app = TestApp::spawn().await;

    let body = register(&app, "12345678901234", "pass_word!").await;

    let created_at: DateTime<Utc> = body["created_at"].as_str().unwrap().parse().unwrap();
    let trial_ends_at: DateTime<Utc> = body["trial_ends_at"].as_str().unwrap().parse().unwrap();

    assert_eq!(trial_ends_at - created_at, Duration::days(14));
}

#[tokio::test]
async fn test_register_company_duplicate_tax_id() {
    let app = TestApp::spawn().await;

    register(&app, "12345678901234", "pass_word!").await;

    let response = app
        .post("/companies")
        .json(&json!({
            "tax_id": "12345678901234",
            "legal_name": "Other Holdings Ltd",
            "trade_name": "Other",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already registered"));
}

#[tokio::test]
async fn test_register_company_invalid_tax_id_length() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/companies")
        .json(&json!({
            "tax_id": "123",
            "legal_name": "Acme Holdings Ltd",
            "trade_name": "Acme",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("14 digits"));
}

#[tokio::test]
async fn test_register_company_non_numeric_tax_id() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/companies")
        .json(&json!({
            "tax_id": "1234567890123a",
            "legal_name": "Acme Holdings Ltd",
            "trade_name": "Acme",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("only digits"));
}

#[tokio::test]
async fn test_register_company_short_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/companies")
        .json(&json!({
            "tax_id": "12345678901234",
            "legal_name": "Ab",
            "trade_name": "Acme",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_register_company_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/companies")
        .json(&json!({
            "tax_id": "12345678901234",
            "legal_name": "Acme Holdings Ltd",
            "trade_name": "Acme",
            "password": "abc"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("at least 6 characters"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let registered = register(&app, "12345678901234", "pass_word!").await;

    let response = app
        .post("/companies/sessions")
        .json(&json!({ "tax_id": "12345678901234", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["company"]["id"], registered["id"]);
    assert_eq!(body["company"]["trade_name"], "Acme");
    assert!(body["company"].get("password_hash").is_none());
    assert!(body["company"].get("tax_id").is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    register(&app, "12345678901234", "pass_word!").await;

    // Unknown tax id
    let unknown = app
        .post("/companies/sessions")
        .json(&json!({ "tax_id": "99999999999999", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown_body: serde_json::Value = unknown.json().await.expect("Failed to parse response");

    // Known tax id, wrong password
    let wrong = app
        .post("/companies/sessions")
        .json(&json!({ "tax_id": "12345678901234", "password": "wrong_password" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong_body: serde_json::Value = wrong.json().await.expect("Failed to parse response");

    // Malformed tax id
    let malformed = app
        .post("/companies/sessions")
        .json(&json!({ "tax_id": "oops", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(malformed.status(), StatusCode::UNAUTHORIZED);
    let malformed_body: serde_json::Value =
        malformed.json().await.expect("Failed to parse response");

    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body, malformed_body);
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/companies/profile")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("Missing"));
}

#[tokio::test]
async fn test_profile_malformed_authorization_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/companies/profile")
        .header("Authorization", "Token abcdef")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_invalid_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/companies/profile", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_token_signed_with_other_secret() {
    let app = TestApp::spawn().await;

    let (company_id, _) = register_and_login(&app, "12345678901234", "pass_word!").await;

    let other = Authenticator::new(b"another-secret-key-at-least-32-bytes!!", 24);
    let forged = other.generate_token(&company_id.to_string()).unwrap();

    let response = app
        .get_authenticated("/companies/profile", &forged)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_token_with_foreign_subject() {
    let app = TestApp::spawn().await;

    // Correctly signed, but the subject is not a company id.
    let token = app.authenticator.generate_token("not-a-company-id").unwrap();

    let response = app
        .get_authenticated("/companies/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_success() {
    let app = TestApp::spawn().await;

    let (company_id, token) = register_and_login(&app, "12345678901234", "pass_word!").await;

    let response = app
        .get_authenticated("/companies/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], company_id.to_string());
    assert_eq!(body["tax_id"], "12345678901234");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_profile_trial_expired() {
    let app = TestApp::spawn().await;

    let (company_id, token) = register_and_login(&app, "12345678901234", "pass_word!").await;

    app.companies
        .set_trial_ends_at(&company_id, Utc::now() - Duration::days(1));

    let response = app
        .get_authenticated("/companies/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("expired"));
}

#[tokio::test]
async fn test_profile_company_deleted_behind_valid_token() {
    let app = TestApp::spawn().await;

    let (company_id, token) = register_and_login(&app, "12345678901234", "pass_word!").await;

    app.companies.remove(&company_id);

    let response = app
        .get_authenticated("/companies/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_login_profile_lifecycle() {
    let app = TestApp::spawn().await;

    let (company_id, token) = register_and_login(&app, "12345678901234", "abcdef").await;

    // Within the trial window the profile is reachable.
    let response = app
        .get_authenticated("/companies/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Fifteen days later the trial has lapsed: same token, access denied.
    app.companies
        .set_trial_ends_at(&company_id, Utc::now() - Duration::days(1));

    let response = app
        .get_authenticated("/companies/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
