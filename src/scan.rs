//! Corpus scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the blog directory, validates every
//! post's frontmatter and produces the [`Corpus`] the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site metadata (optional)
//! ├── static/                      # Copied verbatim to the output root
//! └── posts/blog/                  # The corpus
//!     ├── 010-hello-world.md       # → /hello-world/
//!     └── rust/
//!         └── lifetimes/
//!             ├── index.md         # → /rust/lifetimes/
//!             └── cover.png        # thumbnail = "./cover.png"
//! ```
//!
//! Only files below `posts/blog/` are part of the corpus. Anything else in
//! the content root is ignored by this stage.
//!
//! ## Frontmatter
//!
//! Every post opens with a TOML block fenced by `+++` lines:
//!
//! ```text
//! +++
//! title = "Hello, world"
//! createdAt = 2024-03-01
//! category = "backend-go"
//! desc = "First post"
//! thumbnail = "./cover.png"
//! alt = "A gopher"
//! +++
//!
//! Markdown body...
//! ```
//!
//! `title` and `createdAt` are required. Unknown keys are ignored so writers
//! can keep their own bookkeeping fields.
//!
//! ## Output
//!
//! The [`Corpus`] holds the records sorted newest first and capped at
//! [`CORPUS_LIMIT`], the per-category counts, the thumbnail asset table and
//! the markdown bodies. Presence of `fields` and `frontmatter` on every
//! record is guaranteed here, once, so later stages never check.

use crate::config::{self, SiteMetadata};
use crate::naming::post_slug;
use crate::types::{CategoryGroup, ContentRecord, Fields, Frontmatter, ImageSharp, Thumbnail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content root does not exist: {0}")]
    MissingRoot(PathBuf),
    #[error("No +++ frontmatter block in {0}")]
    MissingFrontmatter(PathBuf),
    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Empty title in {0}")]
    EmptyTitle(PathBuf),
    #[error("Invalid createdAt '{value}' in {path}")]
    InvalidDate { path: PathBuf, value: String },
    #[error("Duplicate slug {slug}: {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("Thumbnail {thumbnail} referenced by {post} does not exist")]
    MissingThumbnail { post: PathBuf, thumbnail: PathBuf },
    #[error("Thumbnail {thumbnail} referenced by {post} is outside the content root")]
    ThumbnailOutsideRoot { post: PathBuf, thumbnail: PathBuf },
}

/// Directory below the content root holding the corpus.
pub const BLOG_DIR: &str = "posts/blog";

/// Maximum number of records kept in the corpus.
pub const CORPUS_LIMIT: usize = 2000;

const FRONTMATTER_DELIMITER: &str = "+++";

/// Raster formats that get a publishable card thumbnail.
const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif", "tif", "tiff"];

/// Manifest output from the scan stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
    pub total_count: usize,
    /// Records, newest first.
    pub edges: Vec<ContentRecord>,
    /// Distinct categories with counts, sorted by name.
    pub group: Vec<CategoryGroup>,
    /// Thumbnail image id → source path relative to the content root.
    pub thumbnails: BTreeMap<String, String>,
    /// Record id → source document.
    pub documents: BTreeMap<String, Document>,
    pub config: SiteMetadata,
}

/// Where a record came from and what it says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Source path relative to the content root.
    pub source: String,
    /// Markdown body with the frontmatter removed.
    pub body: String,
}

/// Frontmatter as written by the author, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrontmatter {
    #[serde(default)]
    title: String,
    created_at: toml::Value,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    alt: Option<String>,
}

/// A validated post waiting to be sorted.
struct ScannedPost {
    record: ContentRecord,
    created: DateTime<FixedOffset>,
    document: Document,
    thumbnail_source: Option<String>,
}

pub fn scan(root: &Path) -> Result<Corpus, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let config = config::load_config(root)?;
    let canonical_root = root.canonicalize()?;

    let mut posts = Vec::new();
    let mut seen_slugs: HashMap<String, PathBuf> = HashMap::new();
    for path in collect_post_files(&root.join(BLOG_DIR))? {
        let post = parse_post(&path, root, &canonical_root)?;
        if let Some(first) = seen_slugs.insert(post.record.fields.slug.clone(), path.clone()) {
            return Err(ScanError::DuplicateSlug {
                slug: post.record.fields.slug,
                first,
                second: path,
            });
        }
        posts.push(post);
    }

    // Compares instants. Stable: ties keep file-name order
    posts.sort_by(|a, b| b.created.cmp(&a.created));
    posts.truncate(CORPUS_LIMIT);

    let group = group_categories(posts.iter().map(|p| &p.record));

    let mut edges = Vec::with_capacity(posts.len());
    let mut thumbnails = BTreeMap::new();
    let mut documents = BTreeMap::new();
    for post in posts {
        if let (Some(source), Some(sharp)) = (
            post.thumbnail_source,
            post.record
                .frontmatter
                .thumbnail
                .as_ref()
                .and_then(|t| t.child_image_sharp.as_ref()),
        ) {
            thumbnails.insert(sharp.id.clone(), source);
        }
        documents.insert(post.record.id.clone(), post.document);
        edges.push(post.record);
    }

    Ok(Corpus {
        total_count: edges.len(),
        edges,
        group,
        thumbnails,
        documents,
        config,
    })
}

/// All markdown files below the blog directory, in file-name order.
///
/// A missing blog directory is an empty corpus, not an error.
fn collect_post_files(blog_root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !blog_root.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(blog_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), &["md"]) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|e| extensions.contains(&e.as_str()))
}

fn parse_post(path: &Path, root: &Path, canonical_root: &Path) -> Result<ScannedPost, ScanError> {
    let content = fs::read_to_string(path)?;
    let (front, body) = split_frontmatter(&content)
        .ok_or_else(|| ScanError::MissingFrontmatter(path.to_path_buf()))?;
    let raw: RawFrontmatter = toml::from_str(front).map_err(|source| ScanError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;

    let title = raw.title.trim().to_string();
    if title.is_empty() {
        return Err(ScanError::EmptyTitle(path.to_path_buf()));
    }

    let created = parse_created_at(&raw.created_at).ok_or_else(|| ScanError::InvalidDate {
        path: path.to_path_buf(),
        value: raw.created_at.to_string(),
    })?;

    let rel_to_root = path.strip_prefix(root).unwrap_or(path);
    let rel_to_blog = rel_to_root.strip_prefix(BLOG_DIR).unwrap_or(rel_to_root);
    let source = to_slash(rel_to_root);

    let (thumbnail, thumbnail_source) = match non_empty(raw.thumbnail) {
        Some(reference) => {
            let (thumb, source) = resolve_thumbnail(path, &reference, canonical_root)?;
            (Some(thumb), source)
        }
        None => (None, None),
    };

    let record = ContentRecord {
        id: short_hash(&source),
        frontmatter: Frontmatter {
            title,
            desc: non_empty(raw.desc),
            created_at: created.format("%Y-%m-%d").to_string(),
            category: non_empty(raw.category),
            thumbnail,
            alt: non_empty(raw.alt),
        },
        fields: Fields {
            slug: post_slug(rel_to_blog),
        },
    };

    Ok(ScannedPost {
        record,
        created,
        document: Document {
            source,
            body: body.to_string(),
        },
        thumbnail_source,
    })
}

/// Split `+++`-fenced frontmatter from the body.
///
/// The opening fence must be the first line; the closing fence is the next
/// line consisting of `+++` alone.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let (opening, rest) = content.split_once('\n')?;
    if opening.trim_end() != FRONTMATTER_DELIMITER {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Accepts TOML dates/datetimes and their string spellings.
///
/// Values without an offset are taken as UTC.
fn parse_created_at(value: &toml::Value) -> Option<DateTime<FixedOffset>> {
    let text = match value {
        toml::Value::String(s) => s.trim().to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        _ => return None,
    };
    parse_date_text(&text)
}

fn parse_date_text(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    let naive = match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0)?,
        Err(_) => ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())?,
    };
    Some(naive.and_utc().fixed_offset())
}

/// Resolve a thumbnail reference relative to the post that names it.
///
/// Returns the record's thumbnail and, for raster images, the source path
/// to publish.
fn resolve_thumbnail(
    post: &Path,
    reference: &str,
    canonical_root: &Path,
) -> Result<(Thumbnail, Option<String>), ScanError> {
    let candidate = post
        .parent()
        .map(|dir| dir.join(reference))
        .unwrap_or_else(|| PathBuf::from(reference));
    if !candidate.is_file() {
        return Err(ScanError::MissingThumbnail {
            post: post.to_path_buf(),
            thumbnail: candidate,
        });
    }
    let canonical = candidate.canonicalize()?;
    let rel = canonical
        .strip_prefix(canonical_root)
        .map_err(|_| ScanError::ThumbnailOutsideRoot {
            post: post.to_path_buf(),
            thumbnail: candidate.clone(),
        })?;

    let base = canonical
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !has_extension(&canonical, RASTER_EXTENSIONS) {
        return Ok((
            Thumbnail {
                child_image_sharp: None,
                base,
            },
            None,
        ));
    }

    let source = to_slash(rel);
    let thumbnail = Thumbnail {
        child_image_sharp: Some(ImageSharp {
            id: short_hash(&source),
        }),
        base,
    };
    Ok((thumbnail, Some(source)))
}

/// Distinct categories with counts, sorted by name.
fn group_categories<'a>(records: impl Iterator<Item = &'a ContentRecord>) -> Vec<CategoryGroup> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        if let Some(category) = record.frontmatter.category.as_deref() {
            *counts.entry(category).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(name, count)| CategoryGroup {
            field_value: name.to_string(),
            total_count: count,
        })
        .collect()
}

/// First 16 hex chars of the SHA-256 of `input`.
fn short_hash(input: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(input.as_bytes()));
    digest[..16].to_string()
}

/// Render a relative path with `/` separators regardless of platform.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn scan_sorts_newest_first() {
        let tmp = content_root();
        write_post(tmp.path(), "old.md", &post_source("Old", "2023-01-01", Some("go")));
        write_post(tmp.path(), "new.md", &post_source("New", "2024-06-01", Some("go")));
        write_post(tmp.path(), "mid.md", &post_source("Mid", "2023-09-10", None));

        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(titles(&corpus), vec!["New", "Mid", "Old"]);
        assert_eq!(corpus.total_count, 3);
    }

    #[test]
    fn scan_formats_created_at() {
        let tmp = content_root();
        write_post(
            tmp.path(),
            "a.md",
            "+++\ntitle = \"A\"\ncreatedAt = 2024-03-01T09:30:00Z\n+++\nbody",
        );
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(corpus.edges[0].frontmatter.created_at, "2024-03-01");
    }

    #[test]
    fn scan_accepts_string_dates() {
        let tmp = content_root();
        write_post(
            tmp.path(),
            "a.md",
            "+++\ntitle = \"A\"\ncreatedAt = \"2024-03-01 10:00:00\"\n+++\n",
        );
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(corpus.edges[0].frontmatter.created_at, "2024-03-01");
    }

    #[test]
    fn scan_groups_categories() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_source("A", "2024-01-01", Some("go")));
        write_post(tmp.path(), "b.md", &post_source("B", "2024-01-02", Some("rust")));
        write_post(tmp.path(), "c.md", &post_source("C", "2024-01-03", Some("go")));
        write_post(tmp.path(), "d.md", &post_source("D", "2024-01-04", None));

        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(
            corpus.group,
            vec![
                CategoryGroup {
                    field_value: "go".to_string(),
                    total_count: 2
                },
                CategoryGroup {
                    field_value: "rust".to_string(),
                    total_count: 1
                },
            ]
        );
    }

    #[test]
    fn scan_strips_order_prefix_from_slugs() {
        let tmp = content_root();
        write_post(
            tmp.path(),
            "010-rust/002-lifetimes/index.md",
            &post_source("Lifetimes", "2024-01-01", None),
        );
        write_post(
            tmp.path(),
            "001-hello.md",
            &post_source("Hello", "2024-01-02", None),
        );
        let corpus = scan(tmp.path()).unwrap();
        let slugs: Vec<&str> = corpus.edges.iter().map(|r| r.fields.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/hello/", "/rust/lifetimes/"]);
    }

    #[test]
    fn scan_ignores_files_outside_blog_dir() {
        let tmp = content_root();
        std::fs::write(tmp.path().join("about.md"), "# About").unwrap();
        write_post(tmp.path(), "a.md", &post_source("A", "2024-01-01", None));
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(corpus.edges.len(), 1);
    }

    #[test]
    fn scan_skips_hidden_entries() {
        let tmp = content_root();
        write_post(tmp.path(), ".draft.md", "not frontmatter");
        write_post(tmp.path(), ".wip/x.md", "not frontmatter");
        write_post(tmp.path(), "a.md", &post_source("A", "2024-01-01", None));
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(titles(&corpus), vec!["A"]);
    }

    #[test]
    fn scan_without_blog_dir_is_empty() {
        let tmp = tempfile::TempDir::new().unwrap();
        let corpus = scan(tmp.path()).unwrap();
        assert!(corpus.edges.is_empty());
        assert!(corpus.group.is_empty());
    }

    #[test]
    fn scan_missing_root_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = scan(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::MissingRoot(_))));
    }

    #[test]
    fn scan_caps_corpus_size() {
        let tmp = content_root();
        for i in 0..(CORPUS_LIMIT + 5) {
            let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Days::new(i as u64);
            write_post(
                tmp.path(),
                &format!("p{i:05}.md"),
                &post_source(&format!("P{i}"), &day.format("%Y-%m-%d").to_string(), None),
            );
        }
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(corpus.edges.len(), CORPUS_LIMIT);
        assert_eq!(corpus.total_count, CORPUS_LIMIT);
        // The oldest five fell off
        assert_eq!(corpus.edges.last().unwrap().frontmatter.title, "P5");
    }

    #[test]
    fn scan_rejects_missing_frontmatter() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", "# Just markdown");
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MissingFrontmatter(_))
        ));
    }

    #[test]
    fn scan_rejects_unclosed_frontmatter() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", "+++\ntitle = \"A\"\n");
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MissingFrontmatter(_))
        ));
    }

    #[test]
    fn scan_rejects_missing_created_at() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", "+++\ntitle = \"A\"\n+++\n");
        assert!(matches!(scan(tmp.path()), Err(ScanError::Frontmatter { .. })));
    }

    #[test]
    fn scan_rejects_bad_date() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_source("A", "yesterday", None));
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::InvalidDate { .. }));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn scan_rejects_empty_title() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_source("  ", "2024-01-01", None));
        assert!(matches!(scan(tmp.path()), Err(ScanError::EmptyTitle(_))));
    }

    #[test]
    fn scan_rejects_duplicate_slugs() {
        let tmp = content_root();
        write_post(tmp.path(), "010-hello.md", &post_source("A", "2024-01-01", None));
        write_post(tmp.path(), "020-hello.md", &post_source("B", "2024-01-02", None));
        let err = scan(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::DuplicateSlug { ref slug, .. } if slug == "/hello/"));
    }

    #[test]
    fn scan_registers_raster_thumbnail() {
        let tmp = content_root();
        write_post(
            tmp.path(),
            "hello/index.md",
            &post_with_thumbnail("Hello", "./cover.png"),
        );
        write_post(tmp.path(), "hello/cover.png", "png bytes");

        let corpus = scan(tmp.path()).unwrap();
        let thumb = corpus.edges[0].frontmatter.thumbnail.as_ref().unwrap();
        assert_eq!(thumb.base, "cover.png");
        let id = &thumb.child_image_sharp.as_ref().unwrap().id;
        assert_eq!(
            corpus.thumbnails.get(id).map(String::as_str),
            Some("posts/blog/hello/cover.png")
        );
    }

    #[test]
    fn scan_vector_thumbnail_has_no_image_sharp() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_with_thumbnail("A", "logo.svg"));
        write_post(tmp.path(), "logo.svg", "<svg/>");

        let corpus = scan(tmp.path()).unwrap();
        let thumb = corpus.edges[0].frontmatter.thumbnail.as_ref().unwrap();
        assert_eq!(thumb.base, "logo.svg");
        assert!(thumb.child_image_sharp.is_none());
        assert!(corpus.thumbnails.is_empty());
    }

    #[test]
    fn scan_rejects_missing_thumbnail() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_with_thumbnail("A", "gone.png"));
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MissingThumbnail { .. })
        ));
    }

    #[test]
    fn scan_keeps_body_without_frontmatter() {
        let tmp = content_root();
        write_post(
            tmp.path(),
            "a.md",
            "+++\ntitle = \"A\"\ncreatedAt = 2024-01-01\n+++\n# Heading\n",
        );
        let corpus = scan(tmp.path()).unwrap();
        let doc = &corpus.documents[&corpus.edges[0].id];
        assert_eq!(doc.body, "# Heading\n");
        assert_eq!(doc.source, "posts/blog/a.md");
    }

    #[test]
    fn record_ids_are_unique_and_stable() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_source("A", "2024-01-01", None));
        write_post(tmp.path(), "b.md", &post_source("B", "2024-01-02", None));
        let first = scan(tmp.path()).unwrap();
        let second = scan(tmp.path()).unwrap();
        assert_ne!(first.edges[0].id, first.edges[1].id);
        assert_eq!(first.edges, second.edges);
    }

    #[test]
    fn split_frontmatter_handles_crlf() {
        let (front, body) = split_frontmatter("+++\r\ntitle = \"A\"\r\n+++\r\nbody").unwrap();
        assert_eq!(front, "title = \"A\"\r\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn split_frontmatter_allows_trailing_space_on_fences() {
        let (front, body) = split_frontmatter("+++ \ntitle = \"A\"\n+++\t\nbody").unwrap();
        assert_eq!(front, "title = \"A\"\n");
        assert_eq!(body, "body");
        assert!(split_frontmatter("+++x\ntitle = \"A\"\n+++\n").is_none());
    }

    #[test]
    fn scan_accepts_opening_fence_with_trailing_space() {
        let tmp = content_root();
        write_post(
            tmp.path(),
            "a.md",
            "+++  \ntitle = \"A\"\ncreatedAt = 2024-01-01\n+++\nbody",
        );
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(titles(&corpus), vec!["A"]);
    }

    #[test]
    fn scan_orders_offset_datetimes_by_instant() {
        let tmp = content_root();
        // 2024-02-29T16:00Z, later on the wall clock but earlier in time
        write_post(
            tmp.path(),
            "seoul.md",
            "+++\ntitle = \"Seoul\"\ncreatedAt = 2024-03-01T01:00:00+09:00\n+++\n",
        );
        write_post(
            tmp.path(),
            "utc.md",
            "+++\ntitle = \"Utc\"\ncreatedAt = 2024-03-01T00:00:00Z\n+++\n",
        );
        let corpus = scan(tmp.path()).unwrap();
        assert_eq!(titles(&corpus), vec!["Utc", "Seoul"]);
        // Displayed date stays in the author's offset
        assert_eq!(corpus.edges[1].frontmatter.created_at, "2024-03-01");
    }

    #[test]
    fn naive_datetimes_are_utc() {
        let naive = parse_date_text("2024-03-01 00:30:00").unwrap();
        let offset = parse_date_text("2024-03-01T09:00:00+09:00").unwrap();
        assert!(naive > offset);
    }

    #[test]
    fn parse_date_text_variants() {
        assert!(parse_date_text("2024-01-01").is_some());
        assert!(parse_date_text("2024-01-01T10:00:00+09:00").is_some());
        assert!(parse_date_text("2024-01-01T10:00:00").is_some());
        assert!(parse_date_text("2024-01-01 10:00:00").is_some());
        assert!(parse_date_text("01/02/2024").is_none());
    }
}
