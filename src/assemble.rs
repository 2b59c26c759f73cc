//! Content assembly: turning the corpus into the posts a listing displays.
//!
//! The corpus arrives already sorted (newest first) and capped by the
//! scanner. Assembly only filters by category and projects each surviving
//! record into a [`DisplayPost`]; it never reorders.
//!
//! ```text
//! corpus ──filter(category contains selector)──▶ project ──▶ Vec<DisplayPost>
//! ```
//!
//! Every call rebuilds the full list from its inputs. A page that changes its
//! selector simply calls [`assemble`] again and throws the previous list away.

use crate::config::SiteMetadata;
use crate::types::ContentRecord;
use serde::Serialize;

/// The projected shape of a post needed to render a summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Image id of the card thumbnail, if the post has a publishable one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl From<&ContentRecord> for DisplayPost {
    fn from(record: &ContentRecord) -> Self {
        let fm = &record.frontmatter;
        Self {
            id: record.id.clone(),
            slug: record.fields.slug.clone(),
            title: fm.title.clone(),
            desc: fm.desc.clone(),
            created_at: fm.created_at.clone(),
            category: fm.category.clone(),
            thumbnail: fm
                .thumbnail
                .as_ref()
                .and_then(|t| t.child_image_sharp.as_ref())
                .map(|sharp| sharp.id.clone()),
            alt: fm.alt.clone(),
        }
    }
}

/// Normalize a selector: empty strings mean "no filter".
fn active(selector: Option<&str>) -> Option<&str> {
    selector.filter(|s| !s.is_empty())
}

/// Build the display list for `corpus` under an optional category selector.
///
/// With a selector, a record survives when its category contains the
/// selector as a case-sensitive substring; records without a category never
/// match. Input order is preserved.
pub fn assemble(corpus: &[ContentRecord], selector: Option<&str>) -> Vec<DisplayPost> {
    let selector = active(selector);
    corpus
        .iter()
        .filter(|record| match selector {
            None => true,
            Some(s) => record
                .frontmatter
                .category
                .as_deref()
                .is_some_and(|category| category.contains(s)),
        })
        .map(DisplayPost::from)
        .collect()
}

/// Heading shown above a post listing.
///
/// The selected category, or the site's default listing title.
pub fn resolve_title(selector: Option<&str>, metadata: &SiteMetadata) -> String {
    match active(selector) {
        Some(s) => s.to_string(),
        None => metadata.post_title.clone(),
    }
}
