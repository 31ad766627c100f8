use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ContentConfig;
use crate::content::error::{ContentError, ContentResult};
use crate::content::frontmatter;
use crate::content::schema::{BlogEntry, ContentEntry, ServiceEntry};
use crate::gallery::{GalleryIndex, PortfolioItem};

const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Slug of a file relative to its collection root: `packages/gold.md` → `packages/gold`
fn slug_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

pub fn parse_entry<T: DeserializeOwned>(slug: String, source: &str, path: &Path) -> ContentResult<ContentEntry<T>> {
    let doc = frontmatter::split(source).map_err(|message| ContentError::Frontmatter {
        path: path.to_path_buf(),
        message,
    })?;
    let data = serde_yaml::from_str(doc.frontmatter).map_err(|source| ContentError::Schema {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ContentEntry { slug, data, body: doc.body.to_string() })
}

/// Load and validate every `*.md`/`*.mdx` file below `root`, sorted by slug.
/// A missing directory is an empty collection.
pub fn load_collection<T: DeserializeOwned>(root: &Path) -> ContentResult<Vec<ContentEntry<T>>> {
    if !root.is_dir() {
        warn!("Content collection {} not found, treating as empty", root.display());
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for dir_entry in WalkDir::new(root).follow_links(true) {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if !dir_entry.file_type().is_file() || !is_content_file(path) {
            continue;
        }
        let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entry = parse_entry(slug_for(root, path), &source, path)?;
        debug!(slug = %entry.slug, "Loaded content entry");
        entries.push(entry);
    }

    entries.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(entries)
}

/// Portfolio items from a YAML list. A missing file is an empty portfolio.
pub fn load_portfolio(path: &Path) -> ContentResult<Vec<PortfolioItem>> {
    if !path.is_file() {
        warn!("Portfolio file {} not found, using an empty portfolio", path.display());
        return Ok(Vec::new());
    }
    let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&source).map_err(|source| ContentError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Every content collection, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub services: Vec<ContentEntry<ServiceEntry>>,
    /// Newest first
    pub blog: Vec<ContentEntry<BlogEntry>>,
    pub portfolio: Vec<PortfolioItem>,
    pub gallery: GalleryIndex,
}

impl ContentStore {
    pub fn load(config: &ContentConfig) -> ContentResult<Self> {
        info!("Loading content from {}", config.content_dir.display());

        let services = load_collection::<ServiceEntry>(&config.services_dir())?;
        let mut blog = load_collection::<BlogEntry>(&config.blog_dir())?;
        blog.sort_by(|a, b| b.data.pub_date.cmp(&a.data.pub_date));
        let portfolio = load_portfolio(&config.portfolio_file())?;
        let gallery = GalleryIndex::build(&portfolio);

        info!(
            services = services.len(),
            posts = blog.len(),
            portfolio_items = portfolio.len(),
            slides = gallery.len(),
            "Content loaded"
        );
        Ok(ContentStore { services, blog, portfolio, gallery })
    }

    pub fn service(&self, slug: &str) -> Option<&ContentEntry<ServiceEntry>> {
        self.services.iter().find(|entry| entry.slug == slug)
    }
}
