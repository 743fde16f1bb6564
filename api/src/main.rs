//! Talent feed API server
//!
//! Serves a static talent dataset over HTTP with localized display names and
//! a configurable response encoding.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod encoding;
mod error;
mod handlers;
mod i18n;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use app::TalentService;
use config::Config;
use encoding::EncodingMode;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub talents: Arc<TalentService>,
    pub encoding: EncodingMode,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state.
fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/talents", get(handlers::get_talents))
        .route("/api/talents/:id/check", post(handlers::check_talent))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,talentfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting talent feed API...");

    let config = Config::from_env();

    let talents =
        TalentService::from_file(&config.talents_path).expect("Failed to load talent dataset");
    tracing::info!(path = %config.talents_path, "Talent dataset loaded");

    let state = AppState {
        talents: Arc::new(talents),
        encoding: config.encoding,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, router(state)).await.unwrap();
}
