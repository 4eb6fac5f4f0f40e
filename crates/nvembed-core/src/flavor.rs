//! Flavor configuration.
//!
//! The document-viewer and generic-iframe variants share one engine;
//! everything that differs between them lives here.

use crate::{Attrs, Ratio};

/// Which variant of the embed engine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Flavor {
    /// Externally-hosted documents rendered through the Google Docs or
    /// Office web viewer. Carries a provider and rewrites `src` into
    /// the viewer form on downcast.
    DocumentViewer,
    /// Generic iframe-able media. No provider, `src` mirrored as-is.
    GenericIframe,
}

/// Upper bound (inclusive) for pixel dimensions.
pub const MAX_DIMENSION: u32 = 9999;

/// Parse a pixel dimension attribute. Valid range is (0, 9999];
/// anything else (including unparsable input) is `None` and callers
/// fall back to the flavor default.
pub fn parse_dimension(raw: &str) -> Option<u32> {
    let value: u32 = raw.trim().parse().ok()?;
    if value == 0 || value > MAX_DIMENSION {
        return None;
    }
    Some(value)
}

/// Configuration for one engine instance.
#[derive(Debug, Clone)]
pub struct FlavorConfig {
    pub flavor: Flavor,
    /// Defaults substituted for out-of-range imported dimensions.
    pub default_width: u32,
    pub default_height: u32,
    /// Default substituted for malformed imported ratios.
    pub default_ratio: Ratio,
    /// Marker class on the outer wrapper tag.
    pub outer_class: String,
    /// Marker class on the structural inner tag.
    pub inner_class: String,
    /// Marker class on the primary display tag.
    pub element_class: String,
    /// Class added to the outer tag in auto sizing mode.
    pub responsive_class: String,
    /// Prefix for the mirrored `data-*` attributes on the outer tag.
    pub data_prefix: String,
    /// Marker class of the prior-version wrapper (document-viewer only).
    pub legacy_class: String,
    /// Padding-percentage attribute on the legacy wrapper.
    pub legacy_padding_attr: String,
    /// Human-readable label for the editing-view widget.
    pub widget_label: String,
    /// Configured passthrough attributes, applied to every inserted or
    /// imported node. These always overwrite values recovered from
    /// source markup: operators keep central control of sandboxing and
    /// permissions regardless of pasted content.
    pub default_attributes: Attrs,
}

impl FlavorConfig {
    /// Configuration for the document-viewer variant.
    pub fn document_viewer() -> Self {
        Self {
            flavor: Flavor::DocumentViewer,
            default_width: 710,
            default_height: 920,
            default_ratio: Ratio::new(1, 2),
            outer_class: "nvck-docs".into(),
            inner_class: "nvck-docs-inner".into(),
            element_class: "nvck-docs-element".into(),
            responsive_class: "nvck-docs-responsive".into(),
            data_prefix: "data-docs-".into(),
            legacy_class: "nv-docs".into(),
            legacy_padding_attr: "data-p".into(),
            widget_label: "document embed widget".into(),
            default_attributes: Attrs::new(),
        }
    }

    /// Configuration for the generic-iframe variant.
    pub fn generic_iframe() -> Self {
        Self {
            flavor: Flavor::GenericIframe,
            default_width: 560,
            default_height: 315,
            default_ratio: Ratio::new(16, 9),
            widget_label: "iframe embed widget".into(),
            ..Self::document_viewer()
        }
    }

    /// Whether this flavor carries a provider field.
    pub fn has_provider(&self) -> bool {
        self.flavor == Flavor::DocumentViewer
    }

    /// Set the configured default passthrough attributes.
    pub fn with_default_attributes(mut self, attributes: Attrs) -> Self {
        self.default_attributes = attributes;
        self
    }

    /// The mirrored data attribute name for a model key, e.g.
    /// `data-docs-ratio`.
    pub fn data_attr(&self, key: &str) -> String {
        format!("{}{}", self.data_prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_bounds() {
        assert_eq!(parse_dimension("560"), Some(560));
        assert_eq!(parse_dimension("9999"), Some(9999));
        assert_eq!(parse_dimension("1"), Some(1));
        assert_eq!(parse_dimension("0"), None);
        assert_eq!(parse_dimension("10000"), None);
        assert_eq!(parse_dimension("-5"), None);
        assert_eq!(parse_dimension("12.5"), None);
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("abc"), None);
    }

    #[test]
    fn test_flavor_defaults() {
        let docs = FlavorConfig::document_viewer();
        assert_eq!((docs.default_width, docs.default_height), (710, 920));
        assert_eq!(docs.default_ratio, Ratio::new(1, 2));
        assert!(docs.has_provider());

        let iframe = FlavorConfig::generic_iframe();
        assert_eq!((iframe.default_width, iframe.default_height), (560, 315));
        assert_eq!(iframe.default_ratio, Ratio::new(16, 9));
        assert!(!iframe.has_provider());
        assert_eq!(iframe.outer_class, "nvck-docs");
    }

    #[test]
    fn test_data_attr_naming() {
        let config = FlavorConfig::document_viewer();
        assert_eq!(config.data_attr("ratio"), "data-docs-ratio");
    }
}
