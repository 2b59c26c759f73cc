//! URL naming for posts and categories.
//!
//! Post files and directories may carry an optional numeric ordering prefix
//! (`NNN-`), which keeps a writer's drafts in order on disk but never leaks
//! into URLs:
//!
//! - `posts/blog/010-hello-world.md` → `/hello-world/`
//! - `posts/blog/rust/002-lifetimes/index.md` → `/rust/lifetimes/`
//! - `posts/blog/notes.md` → `/notes/`
//!
//! Category names are free text (`"backend go"`, `"개발"`), so category pages
//! get a separate path-safe slug via [`category_slug`].

use std::path::Path;

/// Strip a leading `NNN-` ordering prefix from a file or directory name.
///
/// - `"010-hello-world"` → `"hello-world"`
/// - `"hello-world"` → `"hello-world"`
/// - `"2024"` → `"2024"` (a bare number is a name, not a prefix)
/// - `"010-"` → `"010-"` (nothing would remain)
pub fn strip_order_prefix(name: &str) -> &str {
    if let Some((prefix, rest)) = name.split_once('-')
        && !prefix.is_empty()
        && prefix.chars().all(|c| c.is_ascii_digit())
        && !rest.is_empty()
    {
        return rest;
    }
    name
}

/// Build the URL slug of a post from its path relative to the blog root.
///
/// The extension is dropped, `index` files collapse onto their directory and
/// every component loses its ordering prefix. The result is wrapped in
/// slashes. A root-level `index.md` maps to `/`.
pub fn post_slug(relative: &Path) -> String {
    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .map(|c| strip_order_prefix(&c.as_os_str().to_string_lossy()).to_string())
        .collect();

    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if !stem.eq_ignore_ascii_case("index") {
        parts.push(strip_order_prefix(&stem).to_string());
    }

    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Path-safe slug for a category listing page.
///
/// Lowercases, keeps alphanumerics (including non-ASCII letters), turns every
/// other run of characters into a single dash and trims dashes at the ends.
pub fn category_slug(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    let mut pending_dash = false;
    for c in category.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_numeric_prefix() {
        assert_eq!(strip_order_prefix("010-hello-world"), "hello-world");
        assert_eq!(strip_order_prefix("000-first"), "first");
    }

    #[test]
    fn keeps_unprefixed_names() {
        assert_eq!(strip_order_prefix("hello-world"), "hello-world");
        assert_eq!(strip_order_prefix("wip-drafts"), "wip-drafts");
    }

    #[test]
    fn bare_number_is_a_name() {
        assert_eq!(strip_order_prefix("2024"), "2024");
        assert_eq!(strip_order_prefix("010-"), "010-");
    }

    #[test]
    fn slug_from_flat_file() {
        assert_eq!(post_slug(Path::new("010-hello-world.md")), "/hello-world/");
        assert_eq!(post_slug(Path::new("notes.md")), "/notes/");
    }

    #[test]
    fn slug_from_index_file_uses_directory() {
        assert_eq!(
            post_slug(Path::new("rust/002-lifetimes/index.md")),
            "/rust/lifetimes/"
        );
        assert_eq!(post_slug(Path::new("index.md")), "/");
    }

    #[test]
    fn category_slug_handles_spaces_and_case() {
        assert_eq!(category_slug("Backend Go"), "backend-go");
        assert_eq!(category_slug("  C++ / Systems "), "c-systems");
    }

    #[test]
    fn category_slug_keeps_non_ascii_letters() {
        assert_eq!(category_slug("개발 일지"), "개발-일지");
    }
}
