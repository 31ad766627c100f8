use axum::{Router, routing::get};
use crate::content::ContentStore;
use crate::handler::content_handler::{
    get_service_handler,
    list_blog_handler,
    list_services_handler,
    portfolio_gallery_handler,
};
use std::sync::Arc;

/// Read-only content endpoints
pub fn content_router(store: Arc<ContentStore>) -> Router {
    Router::new()
        .route("/api/services", get(list_services_handler))
        .route("/api/services/{*slug}", get(get_service_handler))
        .route("/api/blog", get(list_blog_handler))
        .route("/api/portfolio/gallery", get(portfolio_gallery_handler))
        .with_state(store)
}
