//! Shared types used across pipeline stages.
//!
//! These types are serialized to `corpus.json` between the scan and generate
//! stages and must be identical on both sides. Field names are camelCase on
//! the wire (`createdAt`, `childImageSharp`) so the manifest reads like the
//! frontmatter authors write.

use serde::{Deserialize, Serialize};

/// One source document (blog post).
///
/// `fields` and `frontmatter` are always present: the scanner rejects posts
/// that cannot fill them, so consumers never need to check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Opaque identifier, unique across the corpus.
    pub id: String,
    pub frontmatter: Frontmatter,
    pub fields: Fields,
}

/// Validated post frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Creation date formatted as `YYYY-MM-DD`.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A thumbnail reference.
///
/// `child_image_sharp` is present only for raster images the generator can
/// publish as a card thumbnail; vector or animated files keep just `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_image_sharp: Option<ImageSharp>,
    /// File name of the referenced image.
    pub base: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSharp {
    pub id: String,
}

/// Derived routing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fields {
    /// URL path of the post, e.g. `/dev/hello-world/`.
    pub slug: String,
}

/// A distinct category with the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub field_value: String,
    pub total_count: usize,
}
