use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::model::contact_submission::NewContactSubmission;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address";
pub const CONFIRMATION_MESSAGE: &str = "Thank you for your message! We will contact you shortly.";

/// Deliberately loose: something, `@`, something, `.`, something, no whitespace.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Raw contact form as posted by the browser. Absent fields read as empty.
#[derive(Debug, Clone, Default, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1), regex(path = *EMAIL_REGEX))]
    pub email: String,

    pub phone: String,

    pub vehicle: String,

    pub service: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactForm {
    /// Build a form from decoded field pairs in body order, ignoring unknown
    /// names. A repeated name keeps its first value.
    pub fn from_fields<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = HashMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(value);
        }
        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        ContactForm {
            name: take("name"),
            email: take("email"),
            phone: take("phone"),
            vehicle: take("vehicle"),
            service: take("service"),
            message: take("message"),
        }
    }

    /// Check the form and turn it into a storable submission.
    ///
    /// Missing required fields win over a malformed email, so an empty email
    /// reports the required-fields message.
    pub fn into_submission(self) -> Result<NewContactSubmission, String> {
        if let Err(errors) = self.validate() {
            return Err(validation_message(&errors).to_string());
        }
        Ok(NewContactSubmission {
            name: self.name,
            email: self.email,
            phone: non_empty(self.phone),
            vehicle: non_empty(self.vehicle),
            service: non_empty(self.service),
            message: self.message,
        })
    }
}

fn validation_message(errors: &ValidationErrors) -> &'static str {
    let missing = errors.field_errors().values().any(|field| {
        field.iter().any(|e| e.code == "length")
    });
    if missing {
        REQUIRED_FIELDS_MESSAGE
    } else {
        INVALID_EMAIL_MESSAGE
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// `{ "success": true, "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn confirmed() -> Self {
        ContactResponse { success: true, message: CONFIRMATION_MESSAGE.to_string() }
    }
}
