use super::templates::{Page, PageRenderer};
use super::types::{ErrorResponse, HealthResponse};
use crate::ingestion::types::{Document, DocumentRegistry};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Extension, Json};
use std::sync::Arc;

type PageResult = Result<Html<String>, (StatusCode, String)>;

fn render_failed(err: handlebars::RenderError) -> (StatusCode, String) {
    tracing::error!("Failed to render template: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Failed to render template".to_string(),
    )
}

pub async fn handle_home(Extension(pages): Extension<Arc<PageRenderer>>) -> PageResult {
    pages.render(Page::Home).map(Html).map_err(render_failed)
}

pub async fn handle_example(Extension(pages): Extension<Arc<PageRenderer>>) -> PageResult {
    pages.render(Page::Example).map(Html).map_err(render_failed)
}

pub async fn handle_breathe() -> &'static str {
    "In progress..."
}

pub async fn handle_read(
    Extension(registry): Extension<Arc<DocumentRegistry>>,
    Extension(pages): Extension<Arc<PageRenderer>>,
) -> PageResult {
    let documents_json = serde_json::to_string(registry.as_ref()).map_err(|err| {
        tracing::error!("Failed to serialize documents: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to prepare data".to_string(),
        )
    })?;

    pages
        .render_read(&documents_json)
        .map(Html)
        .map_err(render_failed)
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub async fn handle_list_documents(
    Extension(registry): Extension<Arc<DocumentRegistry>>,
) -> Json<Arc<DocumentRegistry>> {
    Json(registry)
}

pub async fn handle_get_document(
    Path(file): Path<String>,
    Extension(registry): Extension<Arc<DocumentRegistry>>,
) -> Result<Json<Document>, (StatusCode, Json<ErrorResponse>)> {
    match registry.get(&file) {
        Some(document) => Ok(Json(document.clone())),
        None => {
            tracing::debug!("Document not found: {}", file);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("document not found")),
            ))
        }
    }
}
