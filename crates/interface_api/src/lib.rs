//! HTTP API Layer
//!
//! This crate provides the REST API for the Osprey e-filing service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for e-filing and health
//! - **Middleware**: Request tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Flat `{success, error}` failure responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, EngineConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_efiling::{EfilingEngine, EngineConfig, FilingStore};

use crate::handlers::{efiling, health};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FilingStore>,
    pub engine: Arc<EfilingEngine>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Filing store shared by the engine and the readiness check
/// * `engine_config` - Timing and failure-injection settings for the filing runner
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn FilingStore>, engine_config: EngineConfig) -> Router {
    let engine = Arc::new(EfilingEngine::with_config(Arc::clone(&store), engine_config));
    let state = AppState { store, engine };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // E-filing routes
    let efiling_routes = Router::new().route("/", post(efiling::submit_filing));

    let api_routes = Router::new()
        .nest("/efiling", efiling_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
