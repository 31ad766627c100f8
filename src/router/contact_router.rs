use axum::{Router, routing::post};
use crate::handler::contact_handler::submit_contact_handler;
use crate::service::contact_service::ContactService;
use std::sync::Arc;

pub fn contact_router(service: Arc<dyn ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact_handler))
        .with_state(service)
}
