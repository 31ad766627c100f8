use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::{body::Body, http::{Request, StatusCode}, Router};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt; // for .oneshot()

use wrp_backend::config::ContentConfig;
use wrp_backend::content::{ContentError, ContentStore};
use wrp_backend::router::content_router::content_router;

const PPF: &str = r#"---
title: Paint Protection Film
subtitle: Invisible armour for your paint
description: Self-healing urethane film
heroImage: /images/services/ppf.jpg
price: 4500
packages:
  - name: Front
    price: 4500
    features: [Bumper, Bonnet, Mirrors]
  - name: Full Body
    price: 12000
    badge: BEST VALUE
    features: [Every painted panel]
faqs:
  - question: Will it yellow?
    answer: No, the film is UV stable.
---

Our installers cut every panel by hand.
"#;

const TINT: &str = r#"---
title: Window Tinting
subtitle: Heat rejection
description: Ceramic tint
heroImage: /images/services/tint.jpg
faqs: []
---
Body
"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "services/ppf.md", PPF);
    write(root, "services/tint.mdx", TINT);
    write(root, "services/notes.txt", "ignored");
    write(root, "blog/old.md", "---\ntitle: Old\ndescription: d\npubDate: Jul 08 2022\n---\nold");
    write(root, "blog/new.md", "---\ntitle: New\ndescription: d\npubDate: 2024-03-01\n---\nnew");
    write(
        root,
        "portfolio.yaml",
        "- title: Porsche 911 GT3\n  subtitle: Full PPF\n  gallery: [gt3-1.jpg, gt3-2.jpg]\n\
         - title: G63\n  subtitle: Ceramic\n  gallery: [g63-1.jpg]\n",
    );
    dir
}

fn config(dir: &TempDir) -> ContentConfig {
    ContentConfig { content_dir: dir.path().to_path_buf() }
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
}

#[test]
fn test_store_loads_all_collections() {
    let dir = site();
    let store = ContentStore::load(&config(&dir)).unwrap();

    let slugs: Vec<&str> = store.services.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["ppf", "tint"]);

    let ppf = store.service("ppf").unwrap();
    assert_eq!(ppf.data.packages.as_ref().unwrap()[1].badge.as_deref(), Some("BEST VALUE"));
    assert_eq!(ppf.body, "Our installers cut every panel by hand.\n");

    let titles: Vec<&str> = store.blog.iter().map(|b| b.data.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);

    assert_eq!(store.portfolio.len(), 2);
    assert_eq!(store.gallery.slides.len(), 3);
    assert_eq!(store.gallery.offsets, vec![0, 2]);
}

#[test]
fn test_missing_faqs_fails_with_file_name() {
    let dir = site();
    write(dir.path(), "services/broken.md", "---\ntitle: t\nsubtitle: s\ndescription: d\nheroImage: h\n---\n");

    let err = ContentStore::load(&config(&dir)).unwrap_err();

    assert!(matches!(err, ContentError::Schema { .. }));
    let message = err.to_string();
    assert!(message.contains("broken.md"), "{message}");
    assert!(message.contains("faqs"), "{message}");
}

#[test]
fn test_unclosed_frontmatter_fails() {
    let dir = site();
    write(dir.path(), "blog/draft.md", "---\ntitle: Draft\n");
    let err = ContentStore::load(&config(&dir)).unwrap_err();
    assert!(matches!(err, ContentError::Frontmatter { .. }));
}

#[test]
fn test_empty_site() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::load(&config(&dir)).unwrap();
    assert!(store.services.is_empty());
    assert!(store.blog.is_empty());
    assert!(store.gallery.is_empty());
}

#[tokio::test]
async fn test_content_endpoints() {
    let dir = site();
    let app = content_router(Arc::new(ContentStore::load(&config(&dir)).unwrap()));

    let (status, services) = get_json(&app, "/api/services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(services.as_array().unwrap().len(), 2);
    assert_eq!(services[0]["heroImage"], "/images/services/ppf.jpg");

    let (status, ppf) = get_json(&app, "/api/services/ppf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ppf["title"], "Paint Protection Film");
    assert_eq!(ppf["faqs"][0]["question"], "Will it yellow?");

    let (status, missing) = get_json(&app, "/api/services/wrap").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["success"], false);

    let (status, blog) = get_json(&app, "/api/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(blog[0]["title"], "New");

    let (status, gallery) = get_json(&app, "/api/portfolio/gallery").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gallery["offsets"], serde_json::json!([0, 2]));
    assert_eq!(gallery["slides"][2]["src"], "g63-1.jpg");
    assert_eq!(gallery["slides"][2]["title"], "G63");
    assert_eq!(gallery["slides"][2]["description"], "Ceramic");
}
