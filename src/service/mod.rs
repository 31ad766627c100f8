pub mod contact_service;
pub mod notification_service;
