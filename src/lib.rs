//! # postshelf
//!
//! A small static blog generator. Posts are markdown files with a TOML
//! frontmatter block; the site is a home page listing every post, one listing
//! page per category, and one page per post.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  corpus.json   (filesystem → sorted, validated records)
//! 2. Generate  corpus    →  public/       (final HTML site)
//! ```
//!
//! The corpus manifest is human-readable JSON, so the output of stage 1 can be
//! inspected before any HTML is written. Everything between the two stages is
//! a pure function over that manifest.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Site metadata: `config.toml` loading, validation, the process-wide instance |
//! | [`scan`] | Stage 1: walks `posts/blog/`, parses frontmatter, sorts, caps and groups the corpus |
//! | [`assemble`] | Filters the corpus by category and projects records to display posts |
//! | [`generate`] | Stage 2: renders home, category and post pages using Maud |
//! | [`seo`] | `<head>` metadata: title template, description and Open Graph tags |
//! | [`analytics`] | Tag manager iframe and the utterances comment thread |
//! | [`types`] | Records shared between stages (`ContentRecord`, `CategoryGroup`) |
//! | [`naming`] | Slug derivation for posts and categories |
//! | [`output`] | CLI output formatting for each stage |
//!
//! # Design Decisions
//!
//! ## Listings Are Recomputed, Never Patched
//!
//! [`assemble::assemble`] takes the whole corpus and the active category and
//! returns a fresh list every time. No listing state survives between calls,
//! so a page can never show posts left over from a previous selection.
//!
//! ## Validation at Ingestion
//!
//! Every record in the corpus is guaranteed a title, a parseable creation
//! date, a slug and, if it names a thumbnail, an existing file. These checks
//! happen once in [`scan`]; later stages rely on the types instead of
//! re-checking.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup is
//! a build error and every interpolated value is escaped. There is no template
//! directory to ship next to the binary.
//!
//! ## Ordering Prefixes
//!
//! Post files and directories may carry an `NNN-` prefix to keep the source tree
//! tidy. The prefix never reaches a URL: `001-hello/index.md` is served at
//! `/hello/`. Listing order comes from `createdAt` alone.

pub mod analytics;
pub mod assemble;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod seo;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
