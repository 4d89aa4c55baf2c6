#![deny(missing_docs)]
//! Texflow core: document body extraction, markup rewriting, and paragraphs.

/// Top-level LaTeX-to-HTML conversion.
pub mod convert;
/// Document region extraction and skip-section elision.
pub mod document;
/// Shared error type for retrieval and rendering plumbing.
pub mod error;
/// Paragraph segmentation and wrapping.
pub mod paragraph;
/// Ordered markup rewrite rules.
pub mod rewrite;
/// "Last updated" stamp parsing.
pub mod timestamp;

pub use convert::convert;
pub use document::{elide_section, extract_document_body};
pub use error::TexflowError;
pub use paragraph::{split_paragraphs, wrap_paragraphs};
pub use rewrite::{Rewrite, RewritePipeline};
pub use timestamp::{LastUpdated, extract_year, parse_last_updated};
