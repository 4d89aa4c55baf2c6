//! Page loading: fetch, convert, inject, and typeset.
//!
//! These functions are the error boundary of the crate: every failure path
//! ends in a fixed fallback fragment or a logged skip, and nothing beyond
//! the returned [`LoadStatus`] reaches the caller.

use texflow_core::{convert, parse_last_updated};

use crate::math::MathRenderer;
use crate::source::ContentSource;
use crate::surface::Surface;
use crate::wait::{WaitOptions, wait_until};

/// Fallback fragment injected when no document body could be extracted.
pub const PARSE_FALLBACK: &str = "<p>Could not parse content.</p>";
/// Fallback fragment injected when the resource could not be retrieved.
pub const LOAD_FALLBACK: &str = "<p>Could not load content.</p>";

/// A request to render one LaTeX document into one page target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    /// Resource name of the LaTeX source.
    pub resource: String,
    /// Target key receiving the converted fragment.
    pub target: String,
    /// Optional heading name elided from the output.
    pub skip_section: Option<String>,
}

impl DocumentRequest {
    /// Builds a request with no skip-section.
    pub fn new(resource: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            target: target.into(),
            skip_section: None,
        }
    }

    /// Sets the heading elided from the output.
    pub fn skip_section(mut self, name: impl Into<String>) -> Self {
        self.skip_section = Some(name.into());
        self
    }
}

/// A request to display the "last updated" stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampRequest {
    /// Resource name of the plain-text stamp.
    pub resource: String,
    /// Target key receiving the trimmed stamp text.
    pub text_target: String,
    /// Optional target key receiving the extracted 4-digit year.
    pub year_target: Option<String>,
}

impl TimestampRequest {
    /// Builds a request with no year target.
    pub fn new(resource: impl Into<String>, text_target: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            text_target: text_target.into(),
            year_target: None,
        }
    }

    /// Sets the target receiving the extracted year.
    pub fn year_target(mut self, key: impl Into<String>) -> Self {
        self.year_target = Some(key.into());
        self
    }
}

/// How a load request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Content injected; math typeset where requested.
    Rendered,
    /// Content injected, but the math renderer never became ready.
    MathPending,
    /// No document body was found; the parse fallback was injected.
    ParseFallback,
    /// Retrieval failed.
    LoadFallback,
}

/// Loads a LaTeX resource, converts it, and renders it into the page target.
///
/// On retrieval failure the error is logged and [`LOAD_FALLBACK`] is
/// injected. When the source has no document region (or converts to an
/// empty fragment) [`PARSE_FALLBACK`] is injected. Otherwise the fragment
/// is injected, the renderer readiness poll runs, and the target is typeset
/// exactly once. A readiness timeout leaves the injected content in place
/// and reports [`LoadStatus::MathPending`].
pub async fn load_document<S, P, M>(
    source: &S,
    page: &mut P,
    renderer: &mut M,
    request: &DocumentRequest,
    wait: &WaitOptions,
) -> LoadStatus
where
    S: ContentSource,
    P: Surface,
    M: MathRenderer,
{
    let tex = match source.fetch(&request.resource).await {
        Ok(tex) => tex,
        Err(err) => {
            log::error!("fetch error for {}: {err}", request.resource);
            page.set_html(&request.target, LOAD_FALLBACK);
            return LoadStatus::LoadFallback;
        }
    };

    match convert(&tex, request.skip_section.as_deref()) {
        Some(html) if !html.is_empty() => {
            page.set_html(&request.target, &html);
            match wait_until(|| renderer.is_ready(), wait).await {
                Ok(()) => {
                    renderer.typeset(&request.target);
                    LoadStatus::Rendered
                }
                Err(err) => {
                    log::warn!("skipping typeset for {}: {err}", request.target);
                    LoadStatus::MathPending
                }
            }
        }
        _ => {
            page.set_html(&request.target, PARSE_FALLBACK);
            LoadStatus::ParseFallback
        }
    }
}

/// Loads the "last updated" stamp and displays it.
///
/// The trimmed stamp text goes to the text target. The year target is
/// written only when the request names one and the stamp contains a
/// standalone `20xx` year; otherwise it is left untouched. Retrieval
/// failure is logged and injects nothing.
pub async fn load_last_updated<S, P>(
    source: &S,
    page: &mut P,
    request: &TimestampRequest,
) -> LoadStatus
where
    S: ContentSource,
    P: Surface,
{
    let raw = match source.fetch(&request.resource).await {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("fetch error for {}: {err}", request.resource);
            return LoadStatus::LoadFallback;
        }
    };

    let stamp = parse_last_updated(&raw);
    page.set_text(&request.text_target, &stamp.text);
    if let (Some(key), Some(year)) = (request.year_target.as_deref(), stamp.year.as_deref()) {
        page.set_text(key, year);
    }
    LoadStatus::Rendered
}
