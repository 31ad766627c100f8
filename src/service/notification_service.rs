use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{error, info, warn};

use crate::config::ContactConfig;
use crate::model::contact_submission::NewContactSubmission;
use crate::util::email::{EmailMessage, EmailSender};

/// Gulf Standard Time. The UAE observes no daylight saving, so a fixed
/// offset is exact.
const BUSINESS_UTC_OFFSET_SECS: i32 = 4 * 3600;
const BUSINESS_TZ_LABEL: &str = "GST";

/// What happened to the notification for one submission. Never affects the
/// response sent to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Sent,
    Failed(String),
    Disabled,
}

/// Subject line for a submission:
///
/// | service | vehicle | subject                                      |
/// |---------|---------|----------------------------------------------|
/// | yes     | yes     | `Request for {service} for {vehicle} from {name}` |
/// | yes     | no      | `Request for {service} from {name}`          |
/// | no      | yes     | `New Inquiry: {vehicle} - {name}`            |
/// | no      | no      | `New Contact from {name}`                    |
pub fn notification_subject(service: Option<&str>, vehicle: Option<&str>, name: &str) -> String {
    match (service, vehicle) {
        (Some(service), Some(vehicle)) => format!("Request for {} for {} from {}", service, vehicle, name),
        (Some(service), None) => format!("Request for {} from {}", service, name),
        (None, Some(vehicle)) => format!("New Inquiry: {} - {}", vehicle, name),
        (None, None) => format!("New Contact from {}", name),
    }
}

pub fn business_time_zone() -> FixedOffset {
    FixedOffset::east_opt(BUSINESS_UTC_OFFSET_SECS).expect("offset is within one day")
}

/// `10/18/2026, 7:05:09 PM (GST)`
pub fn format_business_time(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&business_time_zone());
    format!("{} ({})", local.format("%-m/%-d/%Y, %-I:%M:%S %p"), BUSINESS_TZ_LABEL)
}

fn escape(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape, then turn line breaks into `<br>`
fn message_to_html(message: &str) -> String {
    escape(message).replace("\r\n", "\n").replace('\n', "<br>")
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub fn render_html_body(submission: &NewContactSubmission, submitted_at: &str) -> String {
    let row = |label: &str, value: &str| {
        format!(
            "<tr><td style=\"padding:8px;border:1px solid #ddd;font-weight:bold;\">{}</td>\
             <td style=\"padding:8px;border:1px solid #ddd;\">{}</td></tr>",
            label,
            escape(value)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>New Contact Form Submission</title></head>
<body style="font-family: Arial, sans-serif; color: #333;">
    <h2>New Contact Form Submission</h2>
    <table style="border-collapse: collapse; width: 100%; max-width: 600px;">
        {name}
        {email}
        {phone}
        {vehicle}
        {service}
    </table>
    <h3>Message</h3>
    <p>{message}</p>
    <p style="color: #888; font-size: 12px;">Submitted: {submitted_at}</p>
</body>
</html>"#,
        name = row("Name", &submission.name),
        email = row("Email", &submission.email),
        phone = row("Phone", or_dash(submission.phone.as_deref())),
        vehicle = row("Vehicle", or_dash(submission.vehicle.as_deref())),
        service = row("Service", or_dash(submission.service.as_deref())),
        message = message_to_html(&submission.message),
        submitted_at = escape(submitted_at),
    )
}

pub fn render_text_body(submission: &NewContactSubmission, submitted_at: &str) -> String {
    format!(
        "New Contact Form Submission\n\n\
         Name: {}\nEmail: {}\nPhone: {}\nVehicle: {}\nService: {}\n\n\
         Message:\n{}\n\nSubmitted: {}\n",
        submission.name,
        submission.email,
        or_dash(submission.phone.as_deref()),
        or_dash(submission.vehicle.as_deref()),
        or_dash(submission.service.as_deref()),
        submission.message,
        submitted_at,
    )
}

/// Sends the "new contact" email to the business inbox.
pub struct ContactNotifier {
    sender: Option<Arc<dyn EmailSender>>,
    config: ContactConfig,
}

impl ContactNotifier {
    pub fn new(sender: Arc<dyn EmailSender>, config: ContactConfig) -> Self {
        ContactNotifier { sender: Some(sender), config }
    }

    /// Notifier with no mail relay; every notification is skipped.
    pub fn disabled(config: ContactConfig) -> Self {
        ContactNotifier { sender: None, config }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub fn compose(&self, submission: &NewContactSubmission, submitted_at: DateTime<Utc>) -> EmailMessage {
        let subject = notification_subject(
            submission.service.as_deref(),
            submission.vehicle.as_deref(),
            &submission.name,
        );
        let timestamp = format_business_time(submitted_at);

        EmailMessage::new(self.config.sender(), self.config.to_email.clone(), subject)
            .with_reply_to(submission.email.clone())
            .with_text_body(render_text_body(submission, &timestamp))
            .with_html_body(render_html_body(submission, &timestamp))
    }

    /// Best-effort delivery. Failures are logged and reported, never raised.
    pub async fn notify(&self, submission: &NewContactSubmission, submitted_at: DateTime<Utc>) -> NotificationStatus {
        let Some(sender) = &self.sender else {
            warn!("Email notifications disabled, skipping contact notification");
            return NotificationStatus::Disabled;
        };

        let message = self.compose(submission, submitted_at);
        match sender.send_email(message).await {
            Ok(()) => {
                info!("Contact notification sent");
                NotificationStatus::Sent
            }
            Err(e) => {
                error!("Failed to send contact notification: {}", e);
                NotificationStatus::Failed(e.to_string())
            }
        }
    }
}
