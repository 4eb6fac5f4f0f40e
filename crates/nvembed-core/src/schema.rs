//! Attribute schema for the embed node.
//!
//! Declares which attribute names are legal on the node and where each
//! one lands in the wrapper markup: the outer wrapper tag (mirrored as
//! a `data-*` attribute) or the primary display tag.

use crate::{Flavor, FlavorConfig};

/// Sizing and identity attributes mirrored onto the outer wrapper.
const OUTER_ATTRIBUTES: &[&str] = &["type", "width", "height", "ratio", "provider"];

/// Passthrough attributes set verbatim on the primary display tag.
const PRIMARY_ATTRIBUTES: &[&str] = &[
    "src",
    "allow",
    "allowfullscreen",
    "frameborder",
    "referrerpolicy",
    "sandbox",
    "srcdoc",
];

/// Where a model attribute is written during downcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrTarget {
    /// Mirrored on the outer wrapper as `data-<prefix><key>`.
    Outer,
    /// Set directly on the primary display tag.
    Primary,
}

/// The set of attributes legal on an embed node for one flavor.
#[derive(Debug, Clone)]
pub struct EmbedSchema {
    has_provider: bool,
}

impl EmbedSchema {
    pub fn for_flavor(config: &FlavorConfig) -> Self {
        Self {
            has_provider: config.flavor == Flavor::DocumentViewer,
        }
    }

    /// Whether the attribute name is declared on the embed node.
    pub fn check_attribute(&self, name: &str) -> bool {
        if name == "provider" {
            return self.has_provider;
        }
        OUTER_ATTRIBUTES.contains(&name) || PRIMARY_ATTRIBUTES.contains(&name)
    }

    /// Markup placement of a legal attribute.
    pub fn target(&self, name: &str) -> Option<AttrTarget> {
        if !self.check_attribute(name) {
            return None;
        }
        if OUTER_ATTRIBUTES.contains(&name) {
            Some(AttrTarget::Outer)
        } else {
            Some(AttrTarget::Primary)
        }
    }

    /// Passthrough attribute names read off an imported display tag.
    pub fn passthrough_attributes(&self) -> &'static [&'static str] {
        &[
            "allow",
            "allowfullscreen",
            "frameborder",
            "referrerpolicy",
            "sandbox",
            "srcdoc",
        ]
    }

    /// All legal attribute names, in sync-dispatch order: provider
    /// strictly before src, so the src rewrite sees a current provider.
    pub fn synced_attributes(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.has_provider {
            keys.push("provider");
        }
        keys.extend_from_slice(&["src", "width", "height", "ratio", "type"]);
        keys.extend(
            PRIMARY_ATTRIBUTES
                .iter()
                .copied()
                .filter(|k| *k != "src"),
        );
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_legality_per_flavor() {
        let docs = EmbedSchema::for_flavor(&FlavorConfig::document_viewer());
        assert!(docs.check_attribute("provider"));

        let iframe = EmbedSchema::for_flavor(&FlavorConfig::generic_iframe());
        assert!(!iframe.check_attribute("provider"));
        assert!(iframe.check_attribute("src"));
    }

    #[test]
    fn test_unknown_attributes_rejected() {
        let schema = EmbedSchema::for_flavor(&FlavorConfig::generic_iframe());
        assert!(!schema.check_attribute("onclick"));
        assert!(!schema.check_attribute("style"));
    }

    #[test]
    fn test_targets() {
        let schema = EmbedSchema::for_flavor(&FlavorConfig::document_viewer());
        assert_eq!(schema.target("ratio"), Some(AttrTarget::Outer));
        assert_eq!(schema.target("provider"), Some(AttrTarget::Outer));
        assert_eq!(schema.target("src"), Some(AttrTarget::Primary));
        assert_eq!(schema.target("sandbox"), Some(AttrTarget::Primary));
        assert_eq!(schema.target("bogus"), None);
    }

    #[test]
    fn test_provider_synced_before_src() {
        let schema = EmbedSchema::for_flavor(&FlavorConfig::document_viewer());
        let keys = schema.synced_attributes();
        let provider = keys.iter().position(|k| *k == "provider").unwrap();
        let src = keys.iter().position(|k| *k == "src").unwrap();
        assert!(provider < src);
    }
}
