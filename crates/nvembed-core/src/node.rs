//! The semantic embed node.

use std::fmt;

use crate::{Attrs, Ratio};

/// How an embed is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizingMode {
    /// Explicit pixel width/height.
    Fixed,
    /// Responsive box sized by aspect ratio.
    #[default]
    Auto,
}

impl SizingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizingMode::Fixed => "fixed",
            SizingMode::Auto => "auto",
        }
    }

    /// Parse the serialized form. Anything other than exactly `fixed`
    /// or `auto` yields `None`; import paths default that to `Auto`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fixed" => Some(SizingMode::Fixed),
            "auto" => Some(SizingMode::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for SizingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The external viewer service rendering a linked document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Provider {
    Google,
    Microsoft,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Microsoft => "microsoft",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "google" => Some(Provider::Google),
            "microsoft" => Some(Provider::Microsoft),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The semantic model of one embedded document or iframe.
///
/// `src` always holds the original source URL; the viewer/embeddable
/// URL is derived at render time and never stored. Exactly one of the
/// sizing pairs is authoritative, selected by `sizing`; the other pair
/// is still carried for round-trip and UI convenience.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmbedNode {
    /// Original source URL, absolute or site-relative.
    pub src: String,
    /// Which sizing pair is authoritative.
    pub sizing: SizingMode,
    /// Pixel width, used when `sizing` is `Fixed`. Range (0, 9999].
    pub width: u32,
    /// Pixel height, used when `sizing` is `Fixed`. Range (0, 9999].
    pub height: u32,
    /// Aspect ratio, used when `sizing` is `Auto`.
    pub ratio: Ratio,
    /// Viewer service; present only in the document-viewer flavor.
    pub provider: Option<Provider>,
    /// Passthrough display/security attributes.
    pub extra: Attrs,
}

impl EmbedNode {
    /// Create a node with the given source URL and flavor-independent
    /// placeholder sizing. Callers fill in the rest.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            sizing: SizingMode::Auto,
            width: 560,
            height: 315,
            ratio: Ratio::new(16, 9),
            provider: None,
            extra: Attrs::new(),
        }
    }

    pub fn sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn ratio(mut self, ratio: Ratio) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }
}
