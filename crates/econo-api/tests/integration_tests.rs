//! # Integration Tests for econo-api
//!
//! Drives the assembled router end to end: public endpoints, token issuance,
//! the auth gate in front of the product routes, fallbacks and static assets.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use econo_api::state::{AppConfig, AppState};
use econo_auth::{SigningSecret, TokenIssuer};

const SECRET: &str = "secret";

/// Helper: config pointing at this crate's bundled views and static files.
fn test_config() -> AppConfig {
    let mut config = AppConfig::with_secret(SigningSecret::new(SECRET).unwrap());
    config.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static").into();
    config.views_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/views").into();
    config
}

fn test_app() -> axum::Router {
    econo_api::app(AppState::from_config(test_config()))
}

/// Helper: send a request, optionally with a bearer token.
async fn send(
    method: Method,
    uri: &str,
    token: Option<&str>,
) -> axum::http::Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    test_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn content_type(response: &axum::http::Response<Body>) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

/// Helper: obtain a token through the public endpoint.
async fn fetch_token() -> String {
    let response = send(Method::GET, "/get-token", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_string(response).await
}

fn flip_first_signature_char(token: &str) -> String {
    let (head, sig) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = sig.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{head}.{}", chars.into_iter().collect::<String>())
}

// -- Public endpoints ---------------------------------------------------------

#[tokio::test]
async fn test_status_is_public() {
    let response = send(Method::GET, "/status", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "API is up and running");
}

#[tokio::test]
async fn test_get_token_returns_compact_jwt() {
    let token = fetch_token().await;
    assert_eq!(token.split('.').count(), 3);
    assert!(token.split('.').all(|segment| !segment.is_empty()));
}

#[tokio::test]
async fn test_get_token_ignores_credentials() {
    let response = send(Method::GET, "/get-token", Some("garbage")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_index_page_served() {
    let response = send(Method::GET, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    assert!(body_string(response).await.contains("EconoGopher"));
}

#[tokio::test]
async fn test_static_file_served_without_prefix() {
    let response = send(Method::GET, "/static/app.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/css"));
}

#[tokio::test]
async fn test_missing_static_file_is_404() {
    let response = send(Method::GET, "/static/missing.css", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_token_with_unrepresentable_expiry_is_500() {
    let mut config = test_config();
    config.token_ttl = Duration::hours(3_000_000_000);
    let response = econo_api::app(AppState::from_config(config))
        .oneshot(Request::builder().uri("/get-token").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Internal Server Error");
}

// -- Protected endpoints ------------------------------------------------------

#[tokio::test]
async fn test_products_with_issued_token() {
    let token = fetch_token().await;
    let response = send(Method::GET, "/products", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 7);
    assert_eq!(products[0]["Id"], 1);
    assert_eq!(products[0]["Name"], "Scatterplot");
    assert_eq!(products[0]["Slug"], "scatter-plot");
    assert_eq!(products[0]["Description"], "basic usage of scatterplots");
    assert_eq!(products[2]["Id"], 3);
    assert_eq!(products[3]["Id"], 3);
}

#[tokio::test]
async fn test_products_without_token_is_401() {
    let response = send(Method::GET, "/products", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}

#[tokio::test]
async fn test_products_with_tampered_signature_is_401() {
    let token = flip_first_signature_char(&fetch_token().await);
    let response = send(Method::GET, "/products", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}

#[tokio::test]
async fn test_products_with_expired_token_is_401() {
    let issuer = TokenIssuer::new(&SigningSecret::new(SECRET).unwrap(), Duration::hours(24));
    let token = issuer.issue_at(Utc::now() - Duration::hours(25)).unwrap();
    let response = send(Method::GET, "/products", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_products_with_foreign_secret_is_401() {
    let secret = SigningSecret::new("not-the-secret").unwrap();
    let issuer = TokenIssuer::new(&secret, Duration::hours(1));
    let token = issuer.issue().unwrap();
    let response = send(Method::GET, "/products", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_products_with_unsigned_token_is_401() {
    // {"alg":"none"} . {"admin":true,"name":"John Doe","exp":9999999999} . <empty>
    let token = "eyJhbGciOiJub25lIn0.\
                 eyJhZG1pbiI6dHJ1ZSwibmFtZSI6IkpvaG4gRG9lIiwiZXhwIjo5OTk5OTk5OTk5fQ.";
    let response = send(Method::GET, "/products", Some(token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_products_with_garbage_claims_is_401() {
    let token = fetch_token().await;
    let (header, rest) = token.split_once('.').unwrap();
    let (_, signature) = rest.split_once('.').unwrap();
    let forged = format!("{header}.!!!not-base64!!!.{signature}");
    let response = send(Method::GET, "/products", Some(&forged)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}

#[tokio::test]
async fn test_feedback_for_known_product() {
    let token = fetch_token().await;
    let response = send(Method::POST, "/products/box-plot/feedback", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["Id"], 2);
    assert_eq!(body["Slug"], "box-plot");
}

#[tokio::test]
async fn test_feedback_for_unknown_product() {
    let token = fetch_token().await;
    let response = send(Method::POST, "/products/unknown/feedback", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Product Not Found");
}

#[tokio::test]
async fn test_feedback_without_token_is_401() {
    let response = send(Method::POST, "/products/box-plot/feedback", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Unauthorized");
}

// -- Fallbacks ----------------------------------------------------------------

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = send(Method::GET, "/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Not Found");
}

#[tokio::test]
async fn test_wrong_method_on_protected_route_is_405_without_auth() {
    let response = send(Method::GET, "/products/box-plot/feedback", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_string(response).await, "Method Not Allowed");
}

#[tokio::test]
async fn test_wrong_method_on_static_mount_is_405() {
    let response = send(Method::POST, "/static/app.css", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_string(response).await, "Method Not Allowed");
}

#[tokio::test]
async fn test_wrong_method_on_public_route_is_405() {
    let response = send(Method::POST, "/status", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// -- Concurrency --------------------------------------------------------------

#[tokio::test]
async fn test_concurrent_requests_share_state() {
    let app = test_app();
    let token = fetch_token().await;
    let mut handles = Vec::new();
    for i in 0..16 {
        let app = app.clone();
        let auth = format!("Bearer {token}");
        handles.push(tokio::spawn(async move {
            let uri = if i % 2 == 0 { "/products" } else { "/status" };
            let request = Request::builder()
                .uri(uri)
                .header(header::AUTHORIZATION, auth)
                .body(Body::empty())
                .unwrap();
            app.oneshot(request).await.unwrap().status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
}
