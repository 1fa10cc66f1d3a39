//! HTTP façade over the deck manager and meaning resolver.
//!
//! Thin by design: every handler locks the shared deck, performs one deck
//! or resolver operation, and serializes the result. Domain failure modes
//! arrive here already flattened to strings; the only HTTP-level error is
//! drawing from an empty pool, which maps to 400 so the dashboard can
//! prompt the user to shuffle.
//!
//! ## Routes
//!
//! - `POST /api/shuffle`, `POST /api/draw`, `POST /api/reset`
//! - `GET /api/status`, `GET /api/health`
//! - `/assets/*` card images and meaning documents
//! - everything else falls back to the dashboard directory

mod routes;

use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::deck::DeckManager;
use crate::meaning::MeaningResolver;

/// Shared per-process state.
///
/// The draw pool is a critical section: axum serves requests concurrently,
/// and a pop from the pool must not race another draw or shuffle. Document
/// reads deliberately happen outside the lock.
pub struct AppState {
    deck: Mutex<DeckManager>,
    resolver: MeaningResolver,
}

impl AppState {
    /// Build state from configuration.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            deck: Mutex::new(DeckManager::new(config.policy, config.rng())),
            resolver: MeaningResolver::new(&config.assets_dir),
        }
    }
}

/// Build the service router for the given configuration.
#[must_use]
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::from_config(config));

    let api = Router::new()
        .route("/shuffle", post(routes::shuffle))
        .route("/draw", post(routes::draw))
        .route("/reset", post(routes::reset))
        .route("/status", get(routes::status))
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(cors_layer(config));

    Router::new()
        .nest("/api", api)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback_service(ServeDir::new(&config.frontend_dir))
}

/// CORS policy for the API routes: configured origins, GET/POST, JSON.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in &config.allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(origin = %origin, "ignoring malformed CORS origin"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
