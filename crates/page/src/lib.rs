#![deny(missing_docs)]
//! Texflow page engine: content sources, display surfaces, math rendering,
//! and load orchestration.

/// Page loading orchestration.
pub mod loader;
/// Math renderer interface and delimiter configuration.
pub mod math;
/// Content sources for named resources.
pub mod source;
/// Display surfaces addressed by target keys.
pub mod surface;
/// Readiness polling for the external math renderer.
pub mod wait;

pub use loader::{
    DocumentRequest, LOAD_FALLBACK, LoadStatus, PARSE_FALLBACK, TimestampRequest, load_document,
    load_last_updated,
};
pub use math::{DelimiterPair, MathConfig, MathRenderer};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{ContentSource, FileSource, StaticSource};
pub use surface::{Content, MemoryPage, Surface};
pub use wait::{WaitOptions, wait_until};
