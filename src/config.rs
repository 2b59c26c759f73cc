//! Site metadata module.
//!
//! Handles loading, validating, and publishing the site-wide `config.toml`.
//! The file lives in the content root and describes the blog itself: its
//! title, author, canonical URL, language, comment backend and favicon.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Site metadata (overrides stock defaults)
//! ├── static/
//! └── posts/blog/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Blog"             # Page title suffix, header text
//! description = ""              # Fallback meta description
//! author = ""                   # twitter:creator, footer attribution
//! site_url = ""                 # Deployment URL; its path prefixes every link
//! lang = "en"                   # <html lang>, "en" when unset
//! utterances = ""               # owner/repo backing the comment threads
//! favicon = ""                  # Path relative to the content root
//! post_title = "All Posts"      # Listing heading when no category is selected
//!
//! [links]
//! github = ""                   # Profile link in the footer
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Process-Wide Access
//!
//! Metadata is loaded once at start-up and never mutated. [`install`] publishes
//! the loaded record; [`site_metadata`] reads it from anywhere. Reading before
//! anything was installed yields the stock defaults, so the accessor is total.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Site metadata was already installed")]
    AlreadyInstalled,
}

/// Site-wide metadata loaded from `config.toml`.
///
/// `description`, `site_url` and `lang` stay optional here: every consumer
/// picks its own fallback (`""` for descriptions, `"en"` for the language).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMetadata {
    /// Site title, appended to every page title.
    pub title: String,
    /// Fallback meta description for pages that have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Attribution string.
    pub author: String,
    /// Deployment URL, e.g. `https://example.github.io/blog/`. Its path part
    /// prefixes every internal link (see [`SiteMetadata::base_path`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// HTML language tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// `owner/repo` of the GitHub repository storing comment threads.
    pub utterances: String,
    /// External profile links.
    pub links: Links,
    /// Favicon path relative to the content root.
    pub favicon: String,
    /// Listing heading shown when no category is selected.
    pub post_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Links {
    pub github: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: None,
            author: String::new(),
            site_url: None,
            lang: None,
            utterances: String::new(),
            links: Links::default(),
            favicon: String::new(),
            post_title: "All Posts".to_string(),
        }
    }
}

impl SiteMetadata {
    /// Path part of `site_url` without the trailing slash.
    ///
    /// `https://example.github.io/blog/` gives `"/blog"`; a site served from
    /// the domain root, or one without `site_url`, gives `""`.
    pub fn base_path(&self) -> &str {
        let Some(url) = self.site_url.as_deref() else {
            return "";
        };
        let after_scheme = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        match after_scheme.find('/') {
            Some(idx) => after_scheme[idx..].trim_end_matches('/'),
            None => "",
        }
    }

    /// Validate that values are usable for rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if let Some(url) = self.site_url.as_deref().filter(|u| !u.is_empty())
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(format!(
                "site_url must start with http:// or https://, got '{url}'"
            )));
        }
        if !self.favicon.is_empty() {
            let path = Path::new(&self.favicon);
            if path.is_absolute() || path.components().any(|c| c == Component::ParentDir) {
                return Err(ConfigError::Validation(format!(
                    "favicon must be a path inside the content root, got '{}'",
                    self.favicon
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Process-wide metadata
// =============================================================================

static SITE_METADATA: OnceLock<SiteMetadata> = OnceLock::new();

/// Publish the site metadata for the rest of the process.
///
/// Can be called once; later calls fail with [`ConfigError::AlreadyInstalled`].
pub fn install(metadata: SiteMetadata) -> Result<(), ConfigError> {
    SITE_METADATA
        .set(metadata)
        .map_err(|_| ConfigError::AlreadyInstalled)
}

/// The current site metadata.
pub fn site_metadata() -> &'static SiteMetadata {
    SITE_METADATA.get_or_init(SiteMetadata::default)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default metadata as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteMetadata::default()).expect("default metadata must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from the content root as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load site metadata from `config.toml` in the content root.
///
/// User values are merged on top of the stock defaults, unknown keys are
/// rejected, and the result is validated.
pub fn load_config(root: &Path) -> Result<SiteMetadata, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let metadata: SiteMetadata = merged.try_into()?;
    metadata.validate()?;
    Ok(metadata)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# postshelf site configuration
# ============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Site title. Every page title renders as "<page> | <title>".
title = "My Blog"

# Fallback meta description for pages without their own `desc`.
# description = ""

# Attribution string, also used as twitter:creator.
author = ""

# Deployment URL. When set, Open Graph image URLs become absolute and a
# path part (here "/blog") prefixes every link between pages.
# site_url = "https://example.github.io/blog/"

# <html lang> attribute. Pages use "en" when unset.
# lang = "en"

# GitHub repository (owner/repo) storing utterances comment threads.
# Leave empty to disable comments on post pages.
utterances = ""

# Favicon path, relative to the content root.
favicon = ""

# Heading of the post listing when no category is selected.
post_title = "All Posts"

[links]
# Profile link shown in the footer.
github = ""
"##
}
