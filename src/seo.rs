//! Document head metadata: title, description, Open Graph and Twitter tags.
//!
//! Every page passes its own [`SeoProps`]; anything it leaves out falls back
//! to the site metadata. The rules:
//!
//! | Output            | Source                                              |
//! |-------------------|-----------------------------------------------------|
//! | `<html lang>`     | `site.lang`, else `"en"`                            |
//! | `<title>`         | `"{page title} \| {site.title}"`                    |
//! | description       | page `desc` if non-empty, else `site.description`   |
//! | image URL         | page image or [`DEFAULT_OG_IMAGE`], joined onto `site_url` when set |
//!
//! Paths handed to this module are site paths (`/hello/`). [`site_href`]
//! turns one into a link that works under the deployment prefix, and
//! [`absolute_url`] into a full URL.

use crate::config::SiteMetadata;
use maud::{Markup, html};

/// `<html lang>` used when the site does not configure one.
pub const DEFAULT_LANG: &str = "en";

/// Image path used for link previews when a page has no image of its own.
pub const DEFAULT_OG_IMAGE: &str = "/og-default.png";

/// Per-page overrides.
#[derive(Debug, Clone, Default)]
pub struct SeoProps<'a> {
    pub title: &'a str,
    pub desc: Option<&'a str>,
    pub image: Option<&'a str>,
}

/// Language tag for the `<html>` element.
pub fn html_lang(site: &SiteMetadata) -> &str {
    site.lang
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANG)
}

/// Full document title: `"{title} | {site title}"`.
pub fn page_title(site: &SiteMetadata, title: &str) -> String {
    format!("{} | {}", title, site.title)
}

/// Page description, falling back to the site description, then `""`.
pub fn description<'a>(site: &'a SiteMetadata, desc: Option<&'a str>) -> &'a str {
    desc.filter(|d| !d.is_empty())
        .or(site.description.as_deref())
        .unwrap_or("")
}

/// Link to a site path, prefixed with the deployment path of `site_url`.
pub fn site_href(site: &SiteMetadata, path: &str) -> String {
    format!("{}{}", site.base_path(), path)
}

/// `path` joined onto a non-empty `site_url` with exactly one `/`, or the
/// path unchanged when there is no `site_url`.
pub fn absolute_url(site: &SiteMetadata, path: &str) -> String {
    match site.site_url.as_deref().filter(|u| !u.is_empty()) {
        Some(base) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        None => path.to_string(),
    }
}

/// Absolute (when possible) URL of the link-preview image.
pub fn og_image_url(site: &SiteMetadata, image: Option<&str>) -> String {
    let image = image.filter(|i| !i.is_empty()).unwrap_or(DEFAULT_OG_IMAGE);
    absolute_url(site, image)
}

/// `<link rel="canonical">` for a site path. Empty without a `site_url`.
pub fn canonical_link(site: &SiteMetadata, path: &str) -> Markup {
    html! {
        @if site.site_url.as_deref().is_some_and(|u| !u.is_empty()) {
            link rel="canonical" href=(absolute_url(site, path));
        }
    }
}

/// Render the SEO part of `<head>`, followed by page-specific `extra_head`.
pub fn render_head(site: &SiteMetadata, props: &SeoProps, extra_head: Markup) -> Markup {
    let description = description(site, props.desc);
    let image = og_image_url(site, props.image);

    html! {
        title { (page_title(site, props.title)) }
        meta name="description" content=(description);
        meta property="og:title" content=(props.title);
        meta property="og:description" content=(description);
        meta property="og:type" content="website";
        meta name="twitter:card" content="summary";
        meta name="twitter:creator" content=(site.author);
        meta name="twitter:title" content=(props.title);
        meta name="twitter:description" content=(description);
        meta property="image" content=(image);
        meta property="og:image" content=(image);
        meta property="twitter:image" content=(image);
        @if !site.favicon.is_empty() {
            link rel="icon" href=(site_href(site, &format!("/{}", favicon_name(&site.favicon))));
        }
        (extra_head)
    }
}

/// File name the favicon is published under at the output root.
pub fn favicon_name(favicon: &str) -> &str {
    favicon.rsplit(['/', '\\']).next().unwrap_or(favicon)
}
