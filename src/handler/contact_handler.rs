use std::sync::Arc;

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use tracing::{debug, error, info};

use crate::dto::contact_dto::{ContactForm, ContactResponse};
use crate::service::contact_service::ContactService;
use crate::util::error::HandlerError;

/// Contact form decoded from either `multipart/form-data` or
/// `application/x-www-form-urlencoded`. An unreadable body is a server
/// fault, not a validation error.
#[derive(Debug)]
pub struct ContactFormBody(pub ContactForm);

impl<S> FromRequest<S> for ContactFormBody
where
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            let mut multipart = Multipart::from_request(req, state).await.map_err(|e| {
                error!("[contact] Invalid multipart request: {}", e);
                HandlerError::internal()
            })?;
            let mut fields = Vec::new();
            while let Some(field) = multipart.next_field().await.map_err(|e| {
                error!("[contact] Error getting next field: {}", e);
                HandlerError::internal()
            })? {
                let name = field.name().map(|s| s.to_string()).unwrap_or_default();
                let value = field.text().await.map_err(|e| {
                    error!("[contact] Failed to read field {}: {}", name, e);
                    HandlerError::internal()
                })?;
                debug!("[contact] Received field: {}", name);
                fields.push((name, value));
            }
            fields
        } else {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| {
                    error!("[contact] Invalid form body: {}", e);
                    HandlerError::internal()
                })?;
            fields
        };

        Ok(ContactFormBody(ContactForm::from_fields(fields)))
    }
}

pub async fn submit_contact_handler(
    State(service): State<Arc<dyn ContactService>>,
    ContactFormBody(form): ContactFormBody,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[submit_contact_handler] Handler called");

    let outcome = service.submit(form).await?;
    info!(
        submission_id = outcome.submission_id,
        notification = ?outcome.notification,
        "[submit_contact_handler] Submission accepted"
    );

    Ok((StatusCode::OK, Json(ContactResponse::confirmed())))
}
