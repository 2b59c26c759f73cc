//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scanned corpus and renders the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): category filter and the full post grid
//! - **Category pages** (`/category/{slug}/index.html`): the grid filtered to
//!   posts whose category contains the category name
//! - **Post pages** (`/{post slug}/index.html`): rendered markdown body with
//!   the comment thread underneath
//!
//! Listing pages are built from [`assemble`] and [`resolve_title`]; each page
//! recomputes its list from the corpus, nothing is shared between pages.
//!
//! ## Output Structure
//!
//! ```text
//! public/
//! ├── index.html
//! ├── icon.png                   # Favicon (if configured)
//! ├── category/
//! │   └── backend-go/index.html
//! ├── thumbnails/
//! │   └── 3f1c9a0b5d2e7781.png   # Card thumbnails, named by image id
//! ├── hello-world/index.html
//! └── ...                        # Everything from content/static/
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. Markdown
//! bodies go through pulldown-cmark.

use crate::analytics;
use crate::assemble::{DisplayPost, assemble, resolve_title};
use crate::config::SiteMetadata;
use crate::naming::category_slug;
use crate::scan::Corpus;
use crate::seo::{self, SeoProps};
use crate::types::{CategoryGroup, ContentRecord};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing asset: {0}")]
    MissingAsset(PathBuf),
    #[error("Categories '{first}' and '{second}' both map to /category/{slug}/")]
    CategoryCollision {
        slug: String,
        first: String,
        second: String,
    },
    #[error("Category '{0}' has no characters usable in a URL")]
    UnroutableCategory(String),
    #[error("Post slug {0} collides with a generated page")]
    ReservedSlug(String),
}

/// Kind of page written by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Category,
    Post,
}

/// One written page, for CLI reporting.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub kind: PageKind,
    pub title: String,
    /// Output path relative to the output directory.
    pub path: String,
    /// Number of posts listed (listing pages only).
    pub post_count: Option<usize>,
}

/// Everything the generate stage wrote.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub pages: Vec<GeneratedPage>,
    pub thumbnails: usize,
}

const CSS: &str = include_str!("../static/style.css");

/// Directory holding category listing pages.
const CATEGORY_DIR: &str = "category";
/// Directory holding published card thumbnails.
const THUMBNAIL_DIR: &str = "thumbnails";
/// Content-root directory copied verbatim to the output root.
const STATIC_DIR: &str = "static";

/// Read a corpus manifest from disk and render it.
pub fn generate(
    corpus_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let content = fs::read_to_string(corpus_path)?;
    let corpus: Corpus = serde_json::from_str(&content)?;
    render_site(&corpus, source_root, output_dir)
}

/// Render every page of the site for `corpus` into `output_dir`.
pub fn render_site(
    corpus: &Corpus,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    let site = &corpus.config;
    let categories = route_categories(&corpus.group)?;
    check_post_slugs(&corpus.edges)?;

    fs::create_dir_all(output_dir)?;
    let mut summary = GenerateSummary::default();

    let static_dir = source_root.join(STATIC_DIR);
    if static_dir.is_dir() {
        copy_dir_recursive(&static_dir, output_dir)?;
    }
    if !site.favicon.is_empty() {
        let favicon = source_root.join(&site.favicon);
        if !favicon.is_file() {
            return Err(GenerateError::MissingAsset(favicon));
        }
        fs::copy(&favicon, output_dir.join(seo::favicon_name(&site.favicon)))?;
    }
    summary.thumbnails = copy_thumbnails(corpus, source_root, output_dir)?;

    let thumbs = ThumbnailUrls::new(corpus);

    // Home
    let home_posts = assemble(&corpus.edges, None);
    let home = render_listing(site, "/", corpus, None, &home_posts, &thumbs);
    fs::write(output_dir.join("index.html"), home.into_string())?;
    summary.pages.push(GeneratedPage {
        kind: PageKind::Home,
        title: resolve_title(None, site),
        path: "index.html".to_string(),
        post_count: Some(home_posts.len()),
    });

    // Categories
    for (group, slug) in &categories {
        let posts = assemble(&corpus.edges, Some(group.field_value.as_str()));
        let page = render_listing(
            site,
            &format!("/{CATEGORY_DIR}/{slug}/"),
            corpus,
            Some(group.field_value.as_str()),
            &posts,
            &thumbs,
        );
        let rel = format!("{CATEGORY_DIR}/{slug}/index.html");
        write_page(output_dir, &rel, page)?;
        summary.pages.push(GeneratedPage {
            kind: PageKind::Category,
            title: resolve_title(Some(group.field_value.as_str()), site),
            path: rel,
            post_count: Some(posts.len()),
        });
    }

    // Posts
    for record in &corpus.edges {
        let body = corpus
            .documents
            .get(&record.id)
            .map(|d| d.body.as_str())
            .unwrap_or_default();
        let page = render_post_page(site, record, body, &thumbs);
        let rel = format!("{}index.html", record.fields.slug.trim_start_matches('/'));
        write_page(output_dir, &rel, page)?;
        summary.pages.push(GeneratedPage {
            kind: PageKind::Post,
            title: record.frontmatter.title.clone(),
            path: rel,
            post_count: None,
        });
    }

    Ok(summary)
}

fn write_page(output_dir: &Path, rel: &str, page: Markup) -> std::io::Result<()> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, page.into_string())
}

/// Pair each category with its URL slug, rejecting collisions.
fn route_categories(groups: &[CategoryGroup]) -> Result<Vec<(&CategoryGroup, String)>, GenerateError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut routed = Vec::with_capacity(groups.len());
    for group in groups {
        let slug = category_slug(&group.field_value);
        if slug.is_empty() {
            return Err(GenerateError::UnroutableCategory(group.field_value.clone()));
        }
        if let Some(first) = seen.insert(slug.clone(), &group.field_value) {
            return Err(GenerateError::CategoryCollision {
                slug,
                first: first.to_string(),
                second: group.field_value.clone(),
            });
        }
        routed.push((group, slug));
    }
    Ok(routed)
}

/// Post pages must not overwrite the home page or generated directories.
fn check_post_slugs(records: &[ContentRecord]) -> Result<(), GenerateError> {
    for record in records {
        let slug = &record.fields.slug;
        let first = slug.trim_matches('/').split('/').next().unwrap_or_default();
        if first.is_empty() || first == CATEGORY_DIR || first == THUMBNAIL_DIR {
            return Err(GenerateError::ReservedSlug(slug.clone()));
        }
    }
    Ok(())
}

fn copy_thumbnails(
    corpus: &Corpus,
    source_root: &Path,
    output_dir: &Path,
) -> Result<usize, GenerateError> {
    if corpus.thumbnails.is_empty() {
        return Ok(0);
    }
    let thumb_dir = output_dir.join(THUMBNAIL_DIR);
    fs::create_dir_all(&thumb_dir)?;
    for (id, source) in &corpus.thumbnails {
        let src = source_root.join(source);
        if !src.is_file() {
            return Err(GenerateError::MissingAsset(src));
        }
        fs::copy(&src, thumb_dir.join(thumbnail_file_name(id, source)))?;
    }
    Ok(corpus.thumbnails.len())
}

/// Site path of a category listing page.
fn category_path(category: &str) -> String {
    format!("/{CATEGORY_DIR}/{}/", category_slug(category))
}

fn thumbnail_file_name(id: &str, source: &str) -> String {
    match Path::new(source).extension() {
        Some(ext) => format!("{}.{}", id, ext.to_string_lossy().to_lowercase()),
        None => id.to_string(),
    }
}

/// Maps image ids to their published URLs.
struct ThumbnailUrls<'a> {
    sources: &'a BTreeMap<String, String>,
}

impl<'a> ThumbnailUrls<'a> {
    fn new(corpus: &'a Corpus) -> Self {
        Self {
            sources: &corpus.thumbnails,
        }
    }

    fn url(&self, id: &str) -> Option<String> {
        self.sources
            .get(id)
            .map(|source| format!("/{THUMBNAIL_DIR}/{}", thumbnail_file_name(id, source)))
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure for the page at site path `path`
fn base_document(
    site: &SiteMetadata,
    path: &str,
    seo_props: &SeoProps,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(seo::html_lang(site)) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (seo::render_head(site, seo_props, seo::canonical_link(site, path)))
                style { (PreEscaped(CSS)) }
            }
            body {
                (analytics::render())
                (site_header(site))
                (content)
                (site_footer(site))
            }
        }
    }
}

fn site_header(site: &SiteMetadata) -> Markup {
    html! {
        header.site-header {
            a.site-title href=(seo::site_href(site, "/")) { (site.title) }
        }
    }
}

fn site_footer(site: &SiteMetadata) -> Markup {
    html! {
        footer.site-footer {
            @if !site.author.is_empty() {
                span { "© " (site.author) }
            }
            @if !site.links.github.is_empty() {
                a href=(site.links.github) target="_blank" rel="noopener" { "GitHub" }
            }
        }
    }
}

/// Category navigation: "All" plus one entry per category, with counts.
pub fn render_category_filter(
    site: &SiteMetadata,
    groups: &[CategoryGroup],
    total_count: usize,
    selected: Option<&str>,
) -> Markup {
    let all_current = selected.is_none_or(str::is_empty);
    html! {
        nav.category-filter {
            ul {
                li class=[all_current.then_some("current")] {
                    a href=(seo::site_href(site, "/")) { "All " span.count { "(" (total_count) ")" } }
                }
                @for group in groups {
                    @let current = selected == Some(group.field_value.as_str());
                    li class=[current.then_some("current")] {
                        a href=(seo::site_href(site, &category_path(&group.field_value))) {
                            (group.field_value) " "
                            span.count { "(" (group.total_count) ")" }
                        }
                    }
                }
            }
        }
    }
}

/// Grid of post summary cards.
fn render_post_grid(site: &SiteMetadata, posts: &[DisplayPost], thumbs: &ThumbnailUrls) -> Markup {
    html! {
        @if posts.is_empty() {
            p.empty { "No posts yet." }
        } @else {
            ul.post-grid {
                @for post in posts {
                    li.post-card {
                        a href=(seo::site_href(site, &post.slug)) {
                            @if let Some(src) = post.thumbnail.as_deref().and_then(|id| thumbs.url(id)) {
                                img src=(seo::site_href(site, &src)) alt=(post.alt.as_deref().unwrap_or(&post.title)) loading="lazy";
                            }
                            div.post-card-body {
                                @if let Some(category) = &post.category {
                                    span.post-category { (category) }
                                }
                                h3 { (post.title) }
                                @if let Some(desc) = &post.desc {
                                    p.post-desc { (desc) }
                                }
                                time datetime=(post.created_at) { (post.created_at) }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page (no selector) or a category page.
fn render_listing(
    site: &SiteMetadata,
    path: &str,
    corpus: &Corpus,
    selector: Option<&str>,
    posts: &[DisplayPost],
    thumbs: &ThumbnailUrls,
) -> Markup {
    let heading = resolve_title(selector, site);
    let seo_title = if selector.is_some_and(|s| !s.is_empty()) {
        heading.as_str()
    } else {
        "Home"
    };

    let content = html! {
        main.listing-page {
            div.content {
                (render_category_filter(site, &corpus.group, corpus.total_count, selector))
                h2.post-title { (heading) }
                (render_post_grid(site, posts, thumbs))
            }
        }
    };

    base_document(
        site,
        path,
        &SeoProps {
            title: seo_title,
            ..SeoProps::default()
        },
        content,
    )
}

/// Renders a single post with its markdown body.
fn render_post_page(
    site: &SiteMetadata,
    record: &ContentRecord,
    body: &str,
    thumbs: &ThumbnailUrls,
) -> Markup {
    let fm = &record.frontmatter;
    let thumbnail = fm
        .thumbnail
        .as_ref()
        .and_then(|t| t.child_image_sharp.as_ref())
        .and_then(|sharp| thumbs.url(&sharp.id));

    let mut body_html = String::new();
    md_html::push_html(&mut body_html, Parser::new_ext(body, Options::all()));

    let content = html! {
        main.post-page {
            article.post {
                header.post-header {
                    @if let Some(category) = &fm.category {
                        a.post-category href=(seo::site_href(site, &category_path(category))) {
                            (category)
                        }
                    }
                    h1 { (fm.title) }
                    time datetime=(fm.created_at) { (fm.created_at) }
                }
                @if let Some(src) = &thumbnail {
                    img.post-cover src=(seo::site_href(site, src)) alt=(fm.alt.as_deref().unwrap_or(&fm.title));
                }
                div.post-body {
                    (PreEscaped(body_html))
                }
            }
            (analytics::render_comments(&site.utterances))
        }
    };

    base_document(
        site,
        &record.fields.slug,
        &SeoProps {
            title: &fm.title,
            desc: fm.desc.as_deref(),
            image: thumbnail.as_deref(),
        },
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
