//! Upcast: markup to the embed model.
//!
//! Recognizes three markup shapes, in fixed precedence: the canonical
//! three-tag wrapper structure, the prior major version's single-level
//! wrapper (document-viewer flavor), and a bare pasted iframe (generic
//! flavor). Anything else is not an error, just unclaimed markup.

mod converters;
mod html5ever_backend;

pub use converters::*;
pub use html5ever_backend::parse_fragment;

use nvembed_core::{ClaimSet, EmbedNode, FlavorConfig, ParseError, ViewElement, ViewNode};

/// Parse an HTML fragment and upcast every recognized embed in it.
pub fn parse(input: &str, config: &FlavorConfig) -> Result<Vec<EmbedNode>, ParseError> {
    let nodes = parse_fragment(input)?;
    Ok(find_embeds(&nodes, config))
}

/// Upcast every recognized embed in an already-parsed view tree.
///
/// Each fragment is offered to the converters in precedence order; the
/// first to claim it wins and its subtree is not revisited.
pub fn find_embeds(nodes: &[ViewNode], config: &FlavorConfig) -> Vec<EmbedNode> {
    let mut claims = ClaimSet::new();
    let mut embeds = Vec::new();
    let mut ancestors = Vec::new();
    for node in nodes {
        walk(node, &mut ancestors, &mut claims, config, &mut embeds);
    }
    embeds
}

fn walk<'a>(
    node: &'a ViewNode,
    ancestors: &mut Vec<&'a ViewElement>,
    claims: &mut ClaimSet,
    config: &FlavorConfig,
    embeds: &mut Vec<EmbedNode>,
) {
    let ViewNode::Element(element) = node else {
        return;
    };
    if let Some(embed) = upcast_element(element, ancestors, claims, config) {
        embeds.push(embed);
        return;
    }
    ancestors.push(element);
    for child in &element.children {
        walk(child, ancestors, claims, config, embeds);
    }
    ancestors.pop();
}
