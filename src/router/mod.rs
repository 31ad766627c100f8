pub mod contact_router;
pub mod content_router;
