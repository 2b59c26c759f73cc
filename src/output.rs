//! CLI output formatting for all pipeline stages.
//!
//! Output is **information-centric, not file-centric**: each entity leads
//! with its positional index and title, with source and output paths as
//! indented context lines. This reads as a content inventory while still
//! letting users trace a line back to a file.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Posts
//! 001 Hello, world (2024-03-01)
//!     Source: posts/blog/hello/index.md
//!     Category: backend-go
//!
//! Categories
//! 001 backend-go (1 post)
//!
//! Config
//!     config.toml
//!     static/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html (2 posts)
//!
//! Categories
//! 001 backend-go → category/backend-go/index.html (1 post)
//!
//! Posts
//! 001 Hello, world → hello/index.html
//!
//! Generated 1 category page, 2 post pages, 1 thumbnail
//! ```
//!
//! ## List
//!
//! ```text
//! backend-go
//! 001 Hello, world (2024-03-01) /hello/
//!     First post
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::assemble::DisplayPost;
use crate::generate::{GenerateSummary, PageKind};
use crate::scan::Corpus;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `"1 post"`, `"3 posts"`, `"2 pages"`, ...
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format an entity header: positional index + title, with optional post count.
///
/// ```text
/// 001 backend-go (2 posts)
/// 002 Hello, world
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({})", format_index(index), title, plural(n, "post")),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered corpus.
pub fn format_scan_output(corpus: &Corpus, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];

    for (i, record) in corpus.edges.iter().enumerate() {
        let fm = &record.frontmatter;
        lines.push(format!(
            "{} ({})",
            entity_header(i + 1, &fm.title, None),
            fm.created_at
        ));
        if let Some(doc) = corpus.documents.get(&record.id) {
            lines.push(format!("{}Source: {}", indent(1), doc.source));
        }
        if let Some(category) = &fm.category {
            lines.push(format!("{}Category: {}", indent(1), category));
        }
        if let Some(thumb) = &fm.thumbnail {
            let note = if thumb.child_image_sharp.is_some() {
                ""
            } else {
                " (not published)"
            };
            lines.push(format!("{}Thumbnail: {}{}", indent(1), thumb.base, note));
        }
    }

    if !corpus.group.is_empty() {
        lines.push(String::new());
        lines.push("Categories".to_string());
        for (i, group) in corpus.group.iter().enumerate() {
            lines.push(entity_header(
                i + 1,
                &group.field_value,
                Some(group.total_count),
            ));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join("static").is_dir() {
        lines.push(format!("{}static/", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(corpus: &Corpus, source_root: &Path) {
    for line in format_scan_output(corpus, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output showing written pages.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let of_kind = |kind: PageKind| summary.pages.iter().filter(move |p| p.kind == kind);

    for page in of_kind(PageKind::Home) {
        let count = page.post_count.unwrap_or_default();
        lines.push(format!(
            "Home \u{2192} {} ({})",
            page.path,
            plural(count, "post")
        ));
    }

    let categories: Vec<_> = of_kind(PageKind::Category).collect();
    if !categories.is_empty() {
        lines.push(String::new());
        lines.push("Categories".to_string());
        for (i, page) in categories.iter().enumerate() {
            lines.push(format!(
                "{} \u{2192} {} ({})",
                entity_header(i + 1, &page.title, None),
                page.path,
                plural(page.post_count.unwrap_or_default(), "post")
            ));
        }
    }

    let posts: Vec<_> = of_kind(PageKind::Post).collect();
    if !posts.is_empty() {
        lines.push(String::new());
        lines.push("Posts".to_string());
        for (i, page) in posts.iter().enumerate() {
            lines.push(format!(
                "{} \u{2192} {}",
                entity_header(i + 1, &page.title, None),
                page.path
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(categories.len(), "category page"),
        plural(posts.len(), "post page"),
        plural(summary.thumbnails, "thumbnail")
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// List output
// ============================================================================

/// Format an assembled post listing under its heading.
pub fn format_post_list(heading: &str, posts: &[DisplayPost]) -> Vec<String> {
    let mut lines = vec![heading.to_string()];
    if posts.is_empty() {
        lines.push(format!("{}(no posts)", indent(1)));
        return lines;
    }
    for (i, post) in posts.iter().enumerate() {
        lines.push(format!(
            "{} ({}) {}",
            entity_header(i + 1, &post.title, None),
            post.created_at,
            post.slug
        ));
        if let Some(desc) = &post.desc {
            lines.push(format!("{}{}", indent(1), truncate_desc(desc.trim(), 60)));
        }
    }
    lines
}

/// Print an assembled post listing to stdout.
pub fn print_post_list(heading: &str, posts: &[DisplayPost]) {
    for line in format_post_list(heading, posts) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use crate::generate::GeneratedPage;
    use crate::scan::scan;
    use crate::test_helpers::*;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn entity_header_with_count() {
        assert_eq!(entity_header(1, "go", Some(1)), "001 go (1 post)");
        assert_eq!(entity_header(2, "rust", Some(3)), "002 rust (3 posts)");
    }

    #[test]
    fn entity_header_without_count() {
        assert_eq!(entity_header(2, "Hello", None), "002 Hello");
    }

    #[test]
    fn truncate_desc_short_and_exact() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
        let text = "a".repeat(40);
        assert_eq!(truncate_desc(&text, 40), text);
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_counts_characters() {
        assert_eq!(truncate_desc("개발 블로그", 2), "개발...");
    }

    #[test]
    fn scan_output_lists_posts_and_categories() {
        let tmp = content_root();
        write_post(tmp.path(), "a.md", &post_source("Alpha", "2024-01-02", Some("go")));
        write_post(tmp.path(), "b.md", &post_source("Beta", "2024-01-01", None));
        let corpus = scan(tmp.path()).unwrap();

        let lines = format_scan_output(&corpus, tmp.path());
        assert_eq!(lines[0], "Posts");
        assert_eq!(lines[1], "001 Alpha (2024-01-02)");
        assert_eq!(lines[2], "    Source: posts/blog/a.md");
        assert_eq!(lines[3], "    Category: go");
        assert_eq!(lines[4], "002 Beta (2024-01-01)");
        assert!(lines.contains(&"Categories".to_string()));
        assert!(lines.contains(&"001 go (1 post)".to_string()));
    }

    #[test]
    fn generate_output_groups_pages() {
        let summary = GenerateSummary {
            pages: vec![
                GeneratedPage {
                    kind: PageKind::Home,
                    title: "All Posts".to_string(),
                    path: "index.html".to_string(),
                    post_count: Some(2),
                },
                GeneratedPage {
                    kind: PageKind::Category,
                    title: "go".to_string(),
                    path: "category/go/index.html".to_string(),
                    post_count: Some(1),
                },
                GeneratedPage {
                    kind: PageKind::Post,
                    title: "Alpha".to_string(),
                    path: "alpha/index.html".to_string(),
                    post_count: None,
                },
            ],
            thumbnails: 0,
        };
        let lines = format_generate_output(&summary);
        assert_eq!(lines[0], "Home \u{2192} index.html (2 posts)");
        assert!(lines.contains(&"001 go \u{2192} category/go/index.html (1 post)".to_string()));
        assert!(lines.contains(&"001 Alpha \u{2192} alpha/index.html".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 1 category page, 1 post page, 0 thumbnails"
        );
    }

    #[test]
    fn post_list_shows_heading_and_entries() {
        let c = vec![record("a", Some("go"), "2024-01-01")];
        let posts = assemble(&c, None);
        let lines = format_post_list("All Posts", &posts);
        assert_eq!(lines[0], "All Posts");
        assert_eq!(lines[1], "001 Post a (2024-01-01) /a/");
        assert_eq!(lines[2], "    About a");
    }

    #[test]
    fn post_list_empty() {
        let lines = format_post_list("python", &[]);
        assert_eq!(lines, vec!["python", "    (no posts)"]);
    }
}
