//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses
//! - `export.rs`: CSV download of the item list

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use stockroom_infra::InventoryService;

pub mod dto;
pub mod errors;
pub mod export;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(service: Arc<InventoryService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(service))
}
