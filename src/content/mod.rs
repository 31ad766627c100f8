//! Structured content collections (services, blog, portfolio) loaded from
//! markdown files with YAML frontmatter and validated at startup.

pub mod error;
pub mod frontmatter;
pub mod schema;
pub mod loader;

pub use error::ContentError;
pub use loader::ContentStore;
pub use schema::{BlogEntry, ContentEntry, ServiceEntry};
