//! Math renderer interface and delimiter configuration.
//!
//! The converter never touches math markup; typesetting is delegated to an
//! external library that loads out of band. The delimiter configuration is
//! handed to that library exactly once, before the first render, and is
//! immutable afterwards.

use serde::{Serialize, Serializer};

/// An opening/closing delimiter pair recognized by the math renderer.
///
/// Serializes as a two-element array, the shape renderer init configs use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPair {
    /// Opening marker.
    pub open: String,
    /// Closing marker.
    pub close: String,
}

impl DelimiterPair {
    /// Builds a pair from opening and closing markers.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Serialize for DelimiterPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.open, &self.close).serialize(serializer)
    }
}

/// Delimiter configuration for the external math renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathConfig {
    /// Inline math delimiters.
    #[serde(rename = "inlineMath")]
    pub inline: Vec<DelimiterPair>,
    /// Display math delimiters.
    #[serde(rename = "displayMath")]
    pub display: Vec<DelimiterPair>,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            inline: vec![
                DelimiterPair::new("$", "$"),
                DelimiterPair::new("\\(", "\\)"),
            ],
            display: vec![
                DelimiterPair::new("$$", "$$"),
                DelimiterPair::new("\\[", "\\]"),
            ],
        }
    }
}

impl MathConfig {
    /// Serializes the renderer init value, namespaced under `tex`.
    pub fn to_init_json(&self) -> serde_json::Value {
        serde_json::json!({ "tex": self })
    }
}

/// The external math typesetting library.
///
/// Implementations wrap whatever the page embeds; readiness is a plain
/// presence check that never distinguishes "still loading" from "failed to
/// load".
pub trait MathRenderer {
    /// Whether the library has finished loading and can typeset.
    fn is_ready(&self) -> bool;
    /// Typesets math inside the target previously injected under `key`.
    fn typeset(&mut self, key: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes_to_renderer_shape() {
        let json = MathConfig::default().to_init_json();
        assert_eq!(
            json,
            serde_json::json!({
                "tex": {
                    "inlineMath": [["$", "$"], ["\\(", "\\)"]],
                    "displayMath": [["$$", "$$"], ["\\[", "\\]"]],
                }
            })
        );
    }

    #[test]
    fn custom_delimiters_round_through_serialization() {
        let config = MathConfig {
            inline: vec![DelimiterPair::new("@", "@")],
            display: vec![],
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["inlineMath"], serde_json::json!([["@", "@"]]));
    }
}
