pub mod email;
pub mod logger;
pub mod error;
