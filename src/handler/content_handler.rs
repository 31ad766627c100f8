use std::sync::Arc;

use axum::{extract::{Path, State}, response::IntoResponse, Json};
use tracing::debug;

use crate::content::ContentStore;
use crate::util::error::HandlerError;

pub async fn list_services_handler(State(store): State<Arc<ContentStore>>) -> impl IntoResponse {
    Json(store.services.clone())
}

pub async fn get_service_handler(
    State(store): State<Arc<ContentStore>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    debug!("Looking up service {}", slug);
    store
        .service(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| HandlerError::not_found(format!("Service not found: {}", slug)))
}

pub async fn list_blog_handler(State(store): State<Arc<ContentStore>>) -> impl IntoResponse {
    Json(store.blog.clone())
}

// Slides and per-item offsets for the portfolio lightbox
pub async fn portfolio_gallery_handler(State(store): State<Arc<ContentStore>>) -> impl IntoResponse {
    Json(store.gallery.clone())
}
