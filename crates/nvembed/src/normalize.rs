//! Fragment normalization: rewrite every recognized embed in an HTML
//! fragment into the canonical structure, leaving foreign markup
//! untouched. Legacy wrappers and pasted iframes come out as the
//! current wire format, so stored content converges on one shape.

use nvembed_core::{ClaimSet, FlavorConfig, ParseError, ViewElement, ViewNode};
use nvembed_read_html::{parse_fragment, upcast_element};
use nvembed_write_html::{DowncastMode, downcast, emit_nodes};

/// Re-serialize `input` with every recognized embed replaced by its
/// canonical data downcast.
pub fn normalize_fragment(input: &str, config: &FlavorConfig) -> Result<String, ParseError> {
    let nodes = parse_fragment(input)?;
    let mut claims = ClaimSet::new();
    let mut ancestors = Vec::new();
    let rewritten: Vec<ViewNode> = nodes
        .iter()
        .map(|node| rewrite(node, &mut ancestors, &mut claims, config))
        .collect();
    Ok(emit_nodes(&rewritten))
}

fn rewrite<'a>(
    node: &'a ViewNode,
    ancestors: &mut Vec<&'a ViewElement>,
    claims: &mut ClaimSet,
    config: &FlavorConfig,
) -> ViewNode {
    let ViewNode::Element(element) = node else {
        return node.clone();
    };
    if let Some(embed) = upcast_element(element, ancestors, claims, config) {
        return ViewNode::Element(downcast(&embed, config, DowncastMode::Data));
    }
    ancestors.push(element);
    let mut copy = element.clone();
    copy.children = element
        .children
        .iter()
        .map(|child| rewrite(child, ancestors, claims, config))
        .collect();
    ancestors.pop();
    ViewNode::Element(copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_wrapper_becomes_canonical() {
        let config = FlavorConfig::document_viewer();
        let input = r#"<div class="nv-docs" data-p="0"><iframe src="https://docs.google.com/viewer?url=https%3A%2F%2Fexample.com%2Fr.pdf&embedded=true" width="640" height="480"></iframe></div>"#;
        let output = normalize_fragment(input, &config).unwrap();
        assert!(output.contains(r#"class="nvck-docs""#));
        assert!(output.contains(r#"data-docs-type="fixed""#));
        assert!(output.contains(r#"data-docs-provider="google""#));
        assert!(!output.contains("nv-docs\""));
        assert!(!output.contains("data-p="));
    }

    #[test]
    fn test_bare_iframe_becomes_canonical() {
        let config = FlavorConfig::generic_iframe();
        let input = r#"<p>intro</p><iframe src="/v" width="560" height="315"></iframe>"#;
        let output = normalize_fragment(input, &config).unwrap();
        assert!(output.contains("<p>intro</p>"));
        // Bare iframes import as auto sizing, so the canonical outer
        // tag carries the responsive class as well.
        assert!(output.contains(r#"class="nvck-docs nvck-docs-responsive""#));
        assert!(output.contains(r#"class="nvck-docs-inner""#));
        assert!(output.contains(r#"data-docs-type="auto""#));
        assert!(output.contains(r#"data-docs-ratio="16:9""#));
    }

    #[test]
    fn test_foreign_markup_untouched() {
        let config = FlavorConfig::generic_iframe();
        let input = r#"<div class="card"><span>no embeds here</span></div>"#;
        let output = normalize_fragment(input, &config).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_canonical_input_stays_canonical() {
        let config = FlavorConfig::generic_iframe();
        let input = r#"<div class="nvck-docs" data-docs-type="auto" data-docs-ratio="4:3"><div class="nvck-docs-inner"><iframe class="nvck-docs-element" src="/v"></iframe></div></div>"#;
        let once = normalize_fragment(input, &config).unwrap();
        let twice = normalize_fragment(&once, &config).unwrap();
        assert_eq!(once, twice);
        assert!(once.contains(r#"data-docs-ratio="4:3""#));
    }
}
