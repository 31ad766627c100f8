use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Location of the structured content collections
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub content_dir: PathBuf,
}

impl ContentConfig {
    pub fn from_env() -> Self {
        let content_dir = env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
        debug!("Content directory: {}", content_dir);
        ContentConfig { content_dir: PathBuf::from(content_dir) }
    }

    pub fn services_dir(&self) -> PathBuf {
        self.content_dir.join("services")
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.content_dir.join("blog")
    }

    pub fn portfolio_file(&self) -> PathBuf {
        self.content_dir.join("portfolio.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        let config = ContentConfig { content_dir: PathBuf::from("/srv/site") };
        assert_eq!(config.services_dir(), PathBuf::from("/srv/site/services"));
        assert_eq!(config.blog_dir(), PathBuf::from("/srv/site/blog"));
        assert_eq!(config.portfolio_file(), PathBuf::from("/srv/site/portfolio.yaml"));
    }
}
