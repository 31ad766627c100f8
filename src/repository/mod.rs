pub mod repository_error;
pub mod contact_repo;
