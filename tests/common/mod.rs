#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use base64::Engine;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use jobseeker_api::auth::UserDirectory;
use jobseeker_api::config::AppConfig;
use jobseeker_api::store::MemoryJobStore;
use jobseeker_api::{app, AppState};

/// Seed users from the development preset.
pub const MILES: (&str, &str) = ("miles1", "password123");
pub const SEARCHER: (&str, &str) = ("job-searcher", "no-jobs-posted");

/// Router wired with the development config and a fresh in-memory store.
pub fn test_app() -> Router {
    test_app_with_store(Arc::new(MemoryJobStore::new()))
}

pub fn test_app_with_store(store: Arc<MemoryJobStore>) -> Router {
    let config = AppConfig::development();
    let users = UserDirectory::from_config(&config.security).expect("hash seed users");

    app(AppState {
        store,
        users: Arc::new(users),
        config: Arc::new(config),
    })
}

pub fn basic(credentials: (&str, &str)) -> String {
    let raw = format!("{}:{}", credentials.0, credentials.1);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(raw)
    )
}

pub fn request(
    method: &str,
    uri: &str,
    auth: Option<(&str, &str)>,
    body: Option<Value>,
) -> Request<Body> {
    request_with_content_type(method, uri, auth, body, "application/json")
}

/// PATCH requests carry the RFC 6902 media type.
pub fn patch_request(uri: &str, auth: Option<(&str, &str)>, body: Value) -> Request<Body> {
    request_with_content_type("PATCH", uri, auth, Some(body), "application/json-patch+json")
}

fn request_with_content_type(
    method: &str,
    uri: &str,
    auth: Option<(&str, &str)>,
    body: Option<Value>,
    content_type: &str,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(credentials) = auth {
        builder = builder.header(header::AUTHORIZATION, basic(credentials));
    }

    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(serde_json::to_vec(&value).expect("serialize body")))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("infallible service")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes()
        .to_vec()
}

/// A valid creation payload.
pub fn job_body(title: &str, pay: u32) -> Value {
    json!({
        "title": title,
        "company": "Initech",
        "postDate": "2026-01-15",
        "closeDate": "2026-03-01",
        "location": "Toronto",
        "duration": 0,
        "employmentType": "Full-time",
        "monthlyPay": pay,
        "applicationLink": "https://initech.example.com/careers"
    })
}
