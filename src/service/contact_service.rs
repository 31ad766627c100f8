use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::contact_dto::ContactForm;
use crate::repository::contact_repo::ContactRepository;
use crate::service::notification_service::{ContactNotifier, NotificationStatus};
use crate::util::error::ServiceError;

/// Result of an accepted submission. The row is committed before the
/// notification is attempted, so `notification` never undoes `submission_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub submission_id: i64,
    pub notification: NotificationStatus,
}

#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate, persist, then notify.
    async fn submit(&self, form: ContactForm) -> Result<SubmissionOutcome, ServiceError>;
}

pub struct ContactServiceImpl {
    pub contact_repo: Arc<dyn ContactRepository>,
    pub notifier: Arc<ContactNotifier>,
}

impl ContactServiceImpl {
    pub fn new(contact_repo: Arc<dyn ContactRepository>, notifier: Arc<ContactNotifier>) -> Self {
        ContactServiceImpl { contact_repo, notifier }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, form))]
    async fn submit(&self, form: ContactForm) -> Result<SubmissionOutcome, ServiceError> {
        let submission = form.into_submission().map_err(|msg| {
            warn!("Rejected contact submission: {}", msg);
            ServiceError::InvalidInput(msg)
        })?;

        let submitted_at = Utc::now();
        let submission_id = self.contact_repo.create(&submission).await?;
        info!(submission_id, "Contact submission persisted");

        let notification = self.notifier.notify(&submission, submitted_at).await;
        if let NotificationStatus::Failed(reason) = &notification {
            warn!(submission_id, "Submission stored but notification failed: {}", reason);
        }

        Ok(SubmissionOutcome { submission_id, notification })
    }
}
