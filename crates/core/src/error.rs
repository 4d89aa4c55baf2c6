//! Shared error type for retrieval and rendering plumbing.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while retrieving resources or driving the math renderer.
///
/// Conversion itself never fails with an error: a source without a document
/// region simply yields no fragment. These variants cover the surrounding
/// plumbing, where transport failures are stringified at the boundary.
#[derive(Debug, Error)]
pub enum TexflowError {
    /// IO error while reading a local resource.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The source has no resource under the requested name.
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    /// Transport-level retrieval failure.
    #[error("fetch error: {0}")]
    Fetch(String),
    /// The math renderer did not become ready within the bounded wait.
    #[error("math renderer not ready after {0:?}")]
    RendererUnavailable(Duration),
}
