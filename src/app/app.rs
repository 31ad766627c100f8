use axum::{Router, routing::get};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{AppConfig, ContactConfig, ContentConfig, DatabaseConfig, EmailConfig};
use crate::content::{ContentError, ContentStore};
use crate::repository::contact_repo::SqliteContactRepository;
use crate::repository::repository_error::RepositoryError;
use crate::router::contact_router::contact_router;
use crate::router::content_router::content_router;
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::service::notification_service::ContactNotifier;
use crate::util::email::{EmailSender, SmtpEmailService};

/// Startup failures; the process exits on any of these.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub contact_service: Arc<dyn ContactService>,
    pub content: Arc<ContentStore>,
}

impl App {
    pub async fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env();
        let database_config = DatabaseConfig::from_env()?;
        let contact_config = ContactConfig::from_env()?;
        let content_config = ContentConfig::from_env();

        let contact_repo = Arc::new(SqliteContactRepository::new(&database_config).await?);
        let notifier = Arc::new(Self::build_notifier(contact_config));
        let contact_service: Arc<dyn ContactService> = Arc::new(ContactServiceImpl::new(contact_repo, notifier));

        let content = Arc::new(ContentStore::load(&content_config)?);

        let router = build_router(contact_service.clone(), content.clone());
        Ok(App { config, router, contact_service, content })
    }

    /// Mail is optional: without a usable SMTP configuration submissions are
    /// still stored, only the notification is skipped.
    fn build_notifier(contact_config: ContactConfig) -> ContactNotifier {
        let email_config = match EmailConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Email notifications disabled: {e}");
                return ContactNotifier::disabled(contact_config);
            }
        };
        match SmtpEmailService::new(email_config) {
            Ok(service) => {
                let sender: Arc<dyn EmailSender> = Arc::new(service);
                ContactNotifier::new(sender, contact_config)
            }
            Err(e) => {
                warn!("Email notifications disabled: {e}");
                ContactNotifier::disabled(contact_config)
            }
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Full route table: contact intake, read-only content, health check.
pub fn build_router(contact_service: Arc<dyn ContactService>, content: Arc<ContentStore>) -> Router {
    Router::new()
        .merge(contact_router(contact_service))
        .merge(content_router(content))
        .route("/health", get(|| async { "OK" }))
}
