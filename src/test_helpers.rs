//! Shared test utilities for the postshelf test suite.
//!
//! Provides fixture builders for content roots on disk and for in-memory
//! [`ContentRecord`]s, plus small extractors over a scanned [`Corpus`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = content_root();
//! write_post(tmp.path(), "hello.md", &post_source("Hello", "2024-01-01", Some("go")));
//! let corpus = scan(tmp.path()).unwrap();
//! assert_eq!(titles(&corpus), vec!["Hello"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::{BLOG_DIR, Corpus};
use crate::types::{ContentRecord, Fields, Frontmatter, ImageSharp, Thumbnail};

// =========================================================================
// On-disk fixtures
// =========================================================================

/// An empty content root with the blog directory already created.
pub fn content_root() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join(BLOG_DIR)).unwrap();
    tmp
}

/// Write a file below `<root>/posts/blog/`, creating parent directories.
pub fn write_post(root: &Path, relative: &str, content: &str) {
    let path = root.join(BLOG_DIR).join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Markdown source with a minimal frontmatter block.
pub fn post_source(title: &str, created_at: &str, category: Option<&str>) -> String {
    let mut front = format!("title = \"{title}\"\ncreatedAt = \"{created_at}\"\n");
    if let Some(category) = category {
        front.push_str(&format!("category = \"{category}\"\n"));
    }
    format!("+++\n{front}+++\n\nBody of {title}.\n")
}

/// Markdown source whose frontmatter references a thumbnail.
pub fn post_with_thumbnail(title: &str, thumbnail: &str) -> String {
    format!(
        "+++\ntitle = \"{title}\"\ncreatedAt = 2024-01-01\nthumbnail = \"{thumbnail}\"\nalt = \"cover of {title}\"\n+++\n"
    )
}

// =========================================================================
// In-memory records
// =========================================================================

/// A record with the given id, category and creation date.
///
/// Title, slug and description are derived from the id.
pub fn record(id: &str, category: Option<&str>, created_at: &str) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        frontmatter: Frontmatter {
            title: format!("Post {id}"),
            desc: Some(format!("About {id}")),
            created_at: created_at.to_string(),
            category: category.map(str::to_string),
            thumbnail: None,
            alt: None,
        },
        fields: Fields {
            slug: format!("/{id}/"),
        },
    }
}

/// A record with a thumbnail; `image_id` of `None` models a non-raster file.
pub fn record_with_thumbnail(id: &str, image_id: Option<&str>) -> ContentRecord {
    let mut rec = record(id, Some("media"), "2024-01-01");
    rec.frontmatter.thumbnail = Some(Thumbnail {
        child_image_sharp: image_id.map(|i| ImageSharp { id: i.to_string() }),
        base: format!("{id}.png"),
    });
    rec.frontmatter.alt = Some(format!("cover of {id}"));
    rec
}

// =========================================================================
// Corpus extractors
// =========================================================================

/// Titles of all records, in corpus order.
pub fn titles(corpus: &Corpus) -> Vec<&str> {
    corpus
        .edges
        .iter()
        .map(|r| r.frontmatter.title.as_str())
        .collect()
}
