pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::UserDirectory;
use crate::config::AppConfig;
use crate::store::JobStore;

/// Shared application state injected into every handler: the storage
/// collaborator, the credential directory and the startup configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
    pub users: Arc<UserDirectory>,
    pub config: Arc<AppConfig>,
}

pub fn app(state: AppState) -> Router {
    use handlers::jobs;

    let resource = Router::new()
        .route("/jobseeker", get(jobs::jobs_get).post(jobs::jobs_post))
        .route(
            "/jobseeker/:id",
            get(jobs::job_get)
                .put(jobs::job_put)
                .patch(jobs::job_patch)
                .delete(jobs::job_delete),
        );

    // Basic auth covers the resource routes when the configured patterns say
    // so; / and /health stay public.
    let resource = if state.config.security.protects("/jobseeker") {
        resource.route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::basic_auth_middleware,
        ))
    } else {
        resource
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(resource)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Jobseeker API",
        "version": version,
        "description": "Job board REST backend",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "jobseeker": "/jobseeker[/:id] (basic auth)",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
