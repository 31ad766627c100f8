#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use tower::ServiceExt; // for .oneshot()

use wrp_backend::app::app::build_router;
use wrp_backend::config::{ContactConfig, DatabaseConfig};
use wrp_backend::content::ContentStore;
use wrp_backend::model::contact_submission::{ContactSubmission, NewContactSubmission};
use wrp_backend::repository::contact_repo::{ContactRepository, SqliteContactRepository};
use wrp_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use wrp_backend::service::contact_service::{ContactService, ContactServiceImpl};
use wrp_backend::service::notification_service::ContactNotifier;
use wrp_backend::util::email::{EmailError, EmailMessage, EmailSender};

/// Keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingSender {
    pub fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Simulates an unreachable SMTP relay.
pub struct FailingSender;

#[async_trait]
impl EmailSender for FailingSender {
    async fn send_email(&self, _message: EmailMessage) -> Result<(), EmailError> {
        Err(EmailError::SmtpError("connection refused".to_string()))
    }
}

/// Simulates a storage outage.
pub struct FailingRepository;

#[async_trait]
impl ContactRepository for FailingRepository {
    async fn create(&self, _submission: &NewContactSubmission) -> RepositoryResult<i64> {
        Err(RepositoryError::database("disk I/O error"))
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<ContactSubmission> {
        Err(RepositoryError::not_found(format!("no row {id}")))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(0)
    }
}

pub async fn memory_repo() -> Arc<SqliteContactRepository> {
    Arc::new(
        SqliteContactRepository::new(&DatabaseConfig::from_test_env())
            .await
            .expect("in-memory repository"),
    )
}

pub fn notifier_with(sender: Arc<dyn EmailSender>) -> Arc<ContactNotifier> {
    Arc::new(ContactNotifier::new(sender, ContactConfig::from_test_env()))
}

pub fn contact_service(
    repo: Arc<dyn ContactRepository>,
    notifier: Arc<ContactNotifier>,
) -> Arc<dyn ContactService> {
    Arc::new(ContactServiceImpl::new(repo, notifier))
}

pub fn app_with(repo: Arc<dyn ContactRepository>, sender: Arc<dyn EmailSender>) -> Router {
    build_router(contact_service(repo, notifier_with(sender)), Arc::new(ContentStore::default()))
}

pub fn form_request(pairs: &[(&str, &str)]) -> Request<Body> {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencode(v)))
        .collect::<Vec<_>>()
        .join("&");
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn multipart_request(pairs: &[(&str, &str)]) -> Request<Body> {
    let boundary = "X-BOUNDARY";
    let mut body = Vec::new();
    for (name, value) in pairs {
        body.extend(
            format!("--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n", boundary, name, value)
                .as_bytes(),
        );
    }
    body.extend(format!("--{}--\r\n", boundary).as_bytes());
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", format!("multipart/form-data; boundary={}", boundary))
        .body(Body::from(body))
        .unwrap()
}

fn urlencode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => (b as char).to_string(),
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

/// Send one request and decode the JSON response.
pub async fn send(app: &Router, req: Request<Body>) -> (axum::http::StatusCode, Option<String>, serde_json::Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body_bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
    (status, content_type, json)
}

pub const VALID_FORM: &[(&str, &str)] = &[
    ("name", "Ali"),
    ("email", "ali@example.com"),
    ("phone", ""),
    ("vehicle", ""),
    ("service", ""),
    ("message", "Hi"),
];
