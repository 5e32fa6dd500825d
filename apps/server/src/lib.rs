//! # toolrent-server
//!
//! Server-rendered HTML front end for the tool catalog, rental ledger and
//! association commission report.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP request                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TraceLayer (http_request span: method, uri)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Router ──► routes::{tools, rentals, reports, health}                  │
//! │       │            │                                                    │
//! │       │            ├──► AppState.db (toolrent-db)                      │
//! │       │            └──► views (askama)                                 │
//! │       ▼                                                                 │
//! │  Html / Redirect / Json, or ApiError rendered as an error page         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod views;

use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use toolrent_db::Database;

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::tools::index))
        .route("/tools", post(routes::tools::create_tool))
        .route("/tools/new", get(routes::tools::new_tool_form))
        .route(
            "/rent/{id}",
            get(routes::rentals::rent_form).post(routes::rentals::create_rental),
        )
        .route("/rentals", get(routes::rentals::list_rentals))
        .route("/association", get(routes::reports::association))
        .route("/health", get(routes::health::health_check))
        .fallback(routes::not_found)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
