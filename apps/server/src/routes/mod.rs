//! # Routes
//!
//! ```text
//! GET  /              tools::index
//! GET  /tools/new     tools::new_tool_form
//! POST /tools         tools::create_tool
//! GET  /rent/{id}     rentals::rent_form
//! POST /rent/{id}     rentals::create_rental
//! GET  /rentals       rentals::list_rentals
//! GET  /association   reports::association
//! GET  /health        health::health_check
//! ```

pub mod health;
pub mod rentals;
pub mod reports;
pub mod tools;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("Page", uri.path())
}
