use super::handlers::*;
use super::templates::PageRenderer;
use crate::ingestion::types::DocumentRegistry;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;

pub const ENDPOINT_HOME: &str = "/";
pub const ENDPOINT_EXAMPLE: &str = "/example";
pub const ENDPOINT_READ: &str = "/read";
pub const ENDPOINT_BREATHE: &str = "/breathe";
pub const ENDPOINT_HEALTH: &str = "/health";
pub const ENDPOINT_DOCUMENTS: &str = "/api/documents";

/// Route table with a one-line description, for the startup banner.
pub const ENDPOINTS: &[(&str, &str)] = &[
    (ENDPOINT_HOME, "Home page"),
    (ENDPOINT_EXAMPLE, "Example page"),
    (ENDPOINT_READ, "Reader"),
    (ENDPOINT_BREATHE, "Breathe"),
    (ENDPOINT_HEALTH, "Health check"),
    (ENDPOINT_DOCUMENTS, "All documents as JSON"),
    ("/api/documents/*file", "One document as JSON"),
];

/// Builds the HTTP router over an already loaded registry.
pub fn build_router(registry: Arc<DocumentRegistry>, pages: Arc<PageRenderer>) -> Router {
    Router::new()
        .route(ENDPOINT_HOME, get(handle_home))
        .route(ENDPOINT_EXAMPLE, get(handle_example))
        .route(ENDPOINT_READ, get(handle_read))
        .route(ENDPOINT_BREATHE, get(handle_breathe))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_DOCUMENTS, get(handle_list_documents))
        .route("/api/documents/*file", get(handle_get_document))
        .layer(Extension(registry))
        .layer(Extension(pages))
}
