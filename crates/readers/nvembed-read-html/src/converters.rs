//! The three upcast converters.
//!
//! Tried in fixed precedence: canonical three-tag structure, then the
//! prior-version wrapper, then a bare display tag. Whichever converter
//! recognizes a fragment claims it, so later converters only ever see
//! unclaimed markup. A converter that declines must leave the fragment
//! untouched for more generic handling downstream.

use nvembed_core::{
    Attrs, ClaimSet, EmbedNode, EmbedSchema, FlavorConfig, Provider, Ratio, SizingMode,
    ViewElement, infer_provider, parse_dimension, recover_original_url,
};
use tracing::{debug, trace};

/// Try all converters against one element, in precedence order.
pub fn upcast_element(
    element: &ViewElement,
    ancestors: &[&ViewElement],
    claims: &mut ClaimSet,
    config: &FlavorConfig,
) -> Option<EmbedNode> {
    upcast_structure(element, claims, config)
        .or_else(|| upcast_legacy(element, claims, config))
        .or_else(|| upcast_bare(element, ancestors, claims, config))
}

/// Canonical structure parser: outer wrapper div containing the
/// structural inner div containing the marked display iframe.
pub fn upcast_structure(
    element: &ViewElement,
    claims: &mut ClaimSet,
    config: &FlavorConfig,
) -> Option<EmbedNode> {
    if element.tag != "div" || !element.has_class(&config.outer_class) {
        return None;
    }
    let inner = element
        .find_descendant(&|el| el.tag == "div" && el.has_class(&config.inner_class))?;
    let primary = element
        .find_descendant(&|el| el.tag == "iframe" && el.has_class(&config.element_class))?;

    if claims.is_claimed(element) || claims.is_claimed(inner) || claims.is_claimed(primary) {
        return None;
    }
    claims.claim(element);
    claims.claim(inner);
    claims.claim(primary);

    let width = element
        .attr(&config.data_attr("width"))
        .and_then(parse_dimension)
        .unwrap_or(config.default_width);
    let height = element
        .attr(&config.data_attr("height"))
        .and_then(parse_dimension)
        .unwrap_or(config.default_height);
    let sizing = element
        .attr(&config.data_attr("type"))
        .and_then(SizingMode::parse)
        .unwrap_or(SizingMode::Auto);
    let ratio = element
        .attr(&config.data_attr("ratio"))
        .and_then(|raw| raw.parse::<Ratio>().ok())
        .unwrap_or(config.default_ratio);

    let raw_src = primary.attr("src").unwrap_or_default();
    let (src, provider) = resolve_source(raw_src, config, |raw| {
        element
            .attr(&config.data_attr("provider"))
            .and_then(Provider::parse)
            .unwrap_or_else(|| infer_provider(raw))
    });

    let mut node = EmbedNode::new(src)
        .sizing(sizing)
        .dimensions(width, height)
        .ratio(ratio);
    node.provider = provider;
    node.extra = collect_passthrough(primary, config);

    Some(node)
}

/// Legacy-structure parser (document-viewer flavor only): a single
/// wrapper tag with the prior version's marker class and a
/// padding-percentage attribute, around a bare iframe.
pub fn upcast_legacy(
    element: &ViewElement,
    claims: &mut ClaimSet,
    config: &FlavorConfig,
) -> Option<EmbedNode> {
    if !config.has_provider() {
        return None;
    }
    if !element.has_class(&config.legacy_class) {
        return None;
    }
    let raw_padding = element.attr(&config.legacy_padding_attr)?;
    let iframe = element.find_descendant(&|el| el.tag == "iframe")?;

    // An out-of-range percentage rejects the whole match: the markup
    // stays unclaimed and falls through as foreign content.
    let padding: f64 = match raw_padding.trim().parse() {
        Ok(p) => p,
        Err(_) => {
            trace!(raw = raw_padding, "legacy wrapper with unparsable padding, declining");
            return None;
        }
    };
    if !padding.is_finite() || !(0.0..=10000.0).contains(&padding) {
        trace!(padding, "legacy wrapper padding out of range, declining");
        return None;
    }

    if claims.is_claimed(element) || claims.is_claimed(iframe) {
        return None;
    }
    claims.claim(element);
    claims.claim(iframe);

    let width = iframe
        .attr("width")
        .and_then(parse_dimension)
        .unwrap_or(config.default_width);
    let height = iframe
        .attr("height")
        .and_then(parse_dimension)
        .unwrap_or(config.default_height);

    let (sizing, ratio) = if padding > 0.0 {
        (SizingMode::Auto, Ratio::nearest_for_percentage(padding))
    } else {
        (SizingMode::Fixed, Ratio::reduce(width, height))
    };

    let raw_src = iframe.attr("src").unwrap_or_default();
    let (src, provider) = resolve_source(raw_src, config, infer_provider);

    debug!(
        src,
        provider = provider.map(|p| p.as_str()),
        sizing = sizing.as_str(),
        %ratio,
        width,
        height,
        "imported legacy document embed"
    );

    let mut node = EmbedNode::new(src)
        .sizing(sizing)
        .dimensions(width, height)
        .ratio(ratio);
    node.provider = provider;
    node.extra = collect_passthrough(iframe, config);

    Some(node)
}

/// Bare-tag parser (generic-iframe flavor only): a standalone iframe
/// pasted from elsewhere. Skips iframes sitting at exactly the
/// inner-then-outer ancestor shape, which are canonical markup being
/// visited redundantly.
pub fn upcast_bare(
    element: &ViewElement,
    ancestors: &[&ViewElement],
    claims: &mut ClaimSet,
    config: &FlavorConfig,
) -> Option<EmbedNode> {
    if config.has_provider() {
        return None;
    }
    if element.tag != "iframe" {
        return None;
    }
    if is_inside_structure(ancestors, config) {
        return None;
    }
    if !claims.claim(element) {
        return None;
    }

    let width = element
        .attr("width")
        .and_then(parse_dimension)
        .unwrap_or(config.default_width);
    let height = element
        .attr("height")
        .and_then(parse_dimension)
        .unwrap_or(config.default_height);

    // The pasted src is preserved exactly; provider normalization only
    // happens on explicit insertion.
    let mut node = EmbedNode::new(element.attr("src").unwrap_or_default())
        .sizing(SizingMode::Auto)
        .dimensions(width, height)
        .ratio(Ratio::reduce(width, height));
    node.extra = collect_passthrough(element, config);

    Some(node)
}

/// Walk up exactly two ancestor levels looking for the
/// inner-class-then-outer-class pattern.
fn is_inside_structure(ancestors: &[&ViewElement], config: &FlavorConfig) -> bool {
    let mut up = ancestors.iter().rev();
    let Some(parent) = up.next() else {
        return false;
    };
    if parent.tag != "div" || !parent.has_class(&config.inner_class) {
        return false;
    }
    let Some(grandparent) = up.next() else {
        return false;
    };
    grandparent.tag == "div" && grandparent.has_class(&config.outer_class)
}

/// Resolve the model src (always the original URL) and provider from
/// the raw markup src.
fn resolve_source(
    raw_src: &str,
    config: &FlavorConfig,
    pick_provider: impl FnOnce(&str) -> Provider,
) -> (String, Option<Provider>) {
    if !config.has_provider() {
        return (raw_src.to_string(), None);
    }
    let recovered = recover_original_url(raw_src);
    let src = if recovered.is_empty() {
        raw_src.to_string()
    } else {
        recovered
    };
    (src, Some(pick_provider(raw_src)))
}

/// Read the passthrough attributes off a display tag, then overlay the
/// configured defaults. Configuration always wins for these keys:
/// operators centrally control sandboxing and permissions regardless
/// of what was pasted.
fn collect_passthrough(primary: &ViewElement, config: &FlavorConfig) -> Attrs {
    let schema = EmbedSchema::for_flavor(config);
    let mut extra = Attrs::new();
    for key in schema.passthrough_attributes() {
        if let Some(value) = primary.attr(key) {
            // A valueless markup attribute is a boolean one.
            if value.is_empty() {
                extra.set(*key, true);
            } else {
                extra.set(*key, value);
            }
        }
    }
    extra.overlay(&config.default_attributes);
    extra
}
