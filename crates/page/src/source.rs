//! Content sources: asynchronous retrieval of named resources.

use std::collections::HashMap;
use std::path::PathBuf;

use texflow_core::TexflowError;

/// Asynchronous retrieval of the full text of a named resource.
///
/// A source either yields the complete text or fails; callers decide how a
/// failure surfaces (the loader turns it into a fixed fallback fragment).
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    /// Fetches the resource, yielding its full text.
    async fn fetch(&self, name: &str) -> Result<String, TexflowError>;
}

/// In-memory source backed by a name-to-content map.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: HashMap<String, String>,
}

impl StaticSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named resource, replacing any previous content.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(name.into(), content.into());
    }
}

impl ContentSource for StaticSource {
    async fn fetch(&self, name: &str) -> Result<String, TexflowError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| TexflowError::UnknownResource(name.to_string()))
    }
}

/// Directory-rooted source reading resources from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Creates a source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FileSource {
    async fn fetch(&self, name: &str) -> Result<String, TexflowError> {
        Ok(tokio::fs::read_to_string(self.root.join(name)).await?)
    }
}

/// HTTP-backed source resolving resource names against a base URL.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Creates a source resolving names against the given base URL.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), name)
    }
}

#[cfg(feature = "http")]
impl ContentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<String, TexflowError> {
        let response = self
            .client
            .get(self.url_for(name))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| TexflowError::Fetch(err.to_string()))?;
        response
            .text()
            .await
            .map_err(|err| TexflowError::Fetch(err.to_string()))
    }
}
