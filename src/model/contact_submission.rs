use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A validated contact-form payload, ready to be stored.
///
/// Optional fields are `None` when the form left them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle: Option<String>,
    #[sqlx(rename = "service_interest")]
    pub service: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}
