pub mod contact_handler;
pub mod content_handler;
