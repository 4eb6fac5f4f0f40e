//! Structural writers and the attribute-sync converter.

use nvembed_core::{
    AttrValue, EmbedNode, EmbedSchema, FlavorConfig, Provider, SizingMode, ViewElement,
    derive_embed_url,
};

/// Which view a downcast produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DowncastMode {
    /// Persisted/exported markup.
    Data,
    /// Live editing view: the data markup plus the widget marking that
    /// makes the structure an atomic, non-text-editable unit.
    Editing,
}

/// Build the bare three-tag skeleton. No attributes are pre-filled;
/// they all arrive through [`sync_attribute`].
pub fn create_structure(config: &FlavorConfig) -> ViewElement {
    ViewElement::new("div")
        .with_class(&config.outer_class)
        .with_child(
            ViewElement::new("div")
                .with_class(&config.inner_class)
                .with_child(ViewElement::new("iframe").with_class(&config.element_class)),
        )
}

/// Convert an embed node to its wrapper markup.
///
/// Fires the attribute-sync converter once per attribute in schema
/// order, which keeps the provider current before the src rewrite
/// consults it.
pub fn downcast(node: &EmbedNode, config: &FlavorConfig, mode: DowncastMode) -> ViewElement {
    let mut structure = create_structure(config);

    if mode == DowncastMode::Editing {
        to_widget(&mut structure, &config.widget_label);
    }

    let schema = EmbedSchema::for_flavor(config);
    for key in schema.synced_attributes() {
        sync_attribute(node, key, &mut structure, config);
    }

    structure
}

/// Mark the outer tag as an atomic interactive widget with a
/// human-readable label.
fn to_widget(outer: &mut ViewElement, label: &str) {
    outer.set_attr("contenteditable", "false");
    outer.set_attr("aria-label", label);
}

/// Mirror one model attribute onto the markup structure.
///
/// Each attribute updates exactly one markup location, except `type`,
/// whose sizing branch and `data-*` mirroring branch are independent
/// effects and both run.
pub fn sync_attribute(
    node: &EmbedNode,
    key: &str,
    structure: &mut ViewElement,
    config: &FlavorConfig,
) {
    if key == "type" {
        sync_sizing(node, structure, config);
    }

    match key {
        "type" => {
            let value = node.sizing.as_str().to_string();
            structure.set_attr(config.data_attr("type"), value);
        }
        "width" => {
            structure.set_attr(config.data_attr("width"), node.width.to_string());
        }
        "height" => {
            structure.set_attr(config.data_attr("height"), node.height.to_string());
        }
        "ratio" => {
            structure.set_attr(config.data_attr("ratio"), node.ratio.to_string());
        }
        "provider" => {
            if let Some(provider) = node.provider {
                structure.set_attr(config.data_attr("provider"), provider.as_str());
            }
        }
        "src" => {
            let src = render_src(node, config);
            if let Some(primary) = find_primary_mut(structure, config) {
                primary.set_attr("src", src);
            }
        }
        other => {
            let Some(value) = node.extra.get(other) else {
                return;
            };
            if let Some(primary) = find_primary_mut(structure, config) {
                match value.as_markup() {
                    Some(rendered) => primary.set_attr(other, rendered),
                    None => {
                        primary.remove_attr(other);
                    }
                }
            }
        }
    }
}

/// The sizing branch of a `type` change: fixed mode pins pixel
/// dimensions on the primary tag, auto mode turns the outer tag into a
/// responsive padding box.
fn sync_sizing(node: &EmbedNode, structure: &mut ViewElement, config: &FlavorConfig) {
    match node.sizing {
        SizingMode::Fixed => {
            let width = node.width.to_string();
            let height = node.height.to_string();
            if let Some(primary) = find_primary_mut(structure, config) {
                primary.set_attr("width", width);
                primary.set_attr("height", height);
            }
            structure.remove_class(&config.responsive_class);
            structure.remove_style("padding-bottom");
        }
        SizingMode::Auto => {
            structure.add_class(&config.responsive_class);
            let padding = format!("{:.2}%", node.ratio.padding_percentage());
            structure.set_style("padding-bottom", &padding);
        }
    }
}

/// The src written to the primary tag: the document-viewer flavor
/// derives the provider's embeddable URL, the generic flavor mirrors
/// the model value unchanged.
fn render_src(node: &EmbedNode, config: &FlavorConfig) -> String {
    if config.has_provider() {
        let provider = node.provider.unwrap_or(Provider::Google);
        derive_embed_url(&node.src, provider)
    } else {
        node.src.clone()
    }
}

fn find_primary_mut<'a>(
    element: &'a mut ViewElement,
    config: &FlavorConfig,
) -> Option<&'a mut ViewElement> {
    if element.tag == "iframe" && element.has_class(&config.element_class) {
        return Some(element);
    }
    for child in element.children.iter_mut() {
        if let nvembed_core::ViewNode::Element(el) = child
            && let Some(found) = find_primary_mut(el, config)
        {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit;
    use nvembed_core::{Attrs, Ratio};

    fn auto_node() -> EmbedNode {
        EmbedNode::new("https://www.youtube.com/embed/dQw4w9WgXcQ")
            .sizing(SizingMode::Auto)
            .dimensions(560, 315)
            .ratio(Ratio::new(16, 9))
    }

    #[test]
    fn test_skeleton_has_three_levels_and_no_data() {
        let config = FlavorConfig::generic_iframe();
        let outer = create_structure(&config);

        assert!(outer.has_class("nvck-docs"));
        let inner = outer.child_elements().next().unwrap();
        assert!(inner.has_class("nvck-docs-inner"));
        let primary = inner.child_elements().next().unwrap();
        assert_eq!(primary.tag, "iframe");
        assert!(primary.has_class("nvck-docs-element"));
        assert!(primary.attr("src").is_none());
        assert!(outer.attr("data-docs-type").is_none());
    }

    #[test]
    fn test_auto_downcast_sets_responsive_padding() {
        let config = FlavorConfig::generic_iframe();
        let view = downcast(&auto_node(), &config, DowncastMode::Data);

        assert!(view.has_class("nvck-docs-responsive"));
        assert_eq!(view.style("padding-bottom").as_deref(), Some("56.25%"));
        assert_eq!(view.attr("data-docs-type"), Some("auto"));
        assert_eq!(view.attr("data-docs-ratio"), Some("16:9"));
        assert_eq!(view.attr("data-docs-width"), Some("560"));
        assert_eq!(view.attr("data-docs-height"), Some("315"));
    }

    #[test]
    fn test_fixed_downcast_pins_dimensions() {
        let config = FlavorConfig::generic_iframe();
        let node = auto_node().sizing(SizingMode::Fixed).dimensions(640, 480);
        let view = downcast(&node, &config, DowncastMode::Data);

        assert!(!view.has_class("nvck-docs-responsive"));
        assert_eq!(view.style("padding-bottom"), None);
        let primary = view.find_descendant(&|el| el.tag == "iframe").unwrap();
        assert_eq!(primary.attr("width"), Some("640"));
        assert_eq!(primary.attr("height"), Some("480"));
    }

    #[test]
    fn test_generic_src_is_not_rewritten() {
        let config = FlavorConfig::generic_iframe();
        let view = downcast(&auto_node(), &config, DowncastMode::Data);
        let primary = view.find_descendant(&|el| el.tag == "iframe").unwrap();
        assert_eq!(
            primary.attr("src"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_document_viewer_src_goes_through_viewer() {
        let config = FlavorConfig::document_viewer();
        let node = EmbedNode::new("https://example.com/report.pdf")
            .provider(Provider::Microsoft)
            .ratio(Ratio::new(1, 2));
        let view = downcast(&node, &config, DowncastMode::Data);

        assert_eq!(view.attr("data-docs-provider"), Some("microsoft"));
        let primary = view.find_descendant(&|el| el.tag == "iframe").unwrap();
        let src = primary.attr("src").unwrap();
        assert!(src.starts_with("https://view.officeapps.live.com/op/embed.aspx?src="));
        // The original URL never lands on the markup in plain form.
        assert_ne!(src, "https://example.com/report.pdf");
    }

    #[test]
    fn test_passthrough_attributes_land_on_primary() {
        let config = FlavorConfig::generic_iframe();
        let mut node = auto_node();
        node.extra = Attrs::new()
            .with("sandbox", "allow-scripts")
            .with("allowfullscreen", true)
            .with("frameborder", "0");
        let view = downcast(&node, &config, DowncastMode::Data);

        let primary = view.find_descendant(&|el| el.tag == "iframe").unwrap();
        assert_eq!(primary.attr("sandbox"), Some("allow-scripts"));
        assert_eq!(primary.attr("allowfullscreen"), Some(""));
        assert_eq!(primary.attr("frameborder"), Some("0"));
        assert!(view.attr("sandbox").is_none());
    }

    #[test]
    fn test_editing_mode_marks_widget() {
        let config = FlavorConfig::generic_iframe();
        let data = downcast(&auto_node(), &config, DowncastMode::Data);
        let editing = downcast(&auto_node(), &config, DowncastMode::Editing);

        assert!(data.attr("contenteditable").is_none());
        assert_eq!(editing.attr("contenteditable"), Some("false"));
        assert_eq!(editing.attr("aria-label"), Some("iframe embed widget"));
    }

    #[test]
    fn test_type_flip_updates_in_place() {
        let config = FlavorConfig::generic_iframe();
        let mut node = auto_node();
        let mut view = downcast(&node, &config, DowncastMode::Data);

        node.sizing = SizingMode::Fixed;
        sync_attribute(&node, "type", &mut view, &config);

        assert!(!view.has_class("nvck-docs-responsive"));
        assert_eq!(view.style("padding-bottom"), None);
        assert_eq!(view.attr("data-docs-type"), Some("fixed"));

        node.sizing = SizingMode::Auto;
        sync_attribute(&node, "type", &mut view, &config);
        assert!(view.has_class("nvck-docs-responsive"));
        assert_eq!(view.style("padding-bottom").as_deref(), Some("56.25%"));
    }

    #[test]
    fn test_emitted_wire_format() {
        let config = FlavorConfig::generic_iframe();
        let html = emit(&downcast(&auto_node(), &config, DowncastMode::Data));

        assert!(html.starts_with("<div class=\"nvck-docs nvck-docs-responsive\""));
        assert!(html.contains("data-docs-type=\"auto\""));
        assert!(html.contains("data-docs-ratio=\"16:9\""));
        assert!(html.contains("style=\"padding-bottom: 56.25%\""));
        assert!(html.contains("<div class=\"nvck-docs-inner\">"));
        assert!(html.contains("<iframe class=\"nvck-docs-element\""));
        assert!(html.contains("src=\"https://www.youtube.com/embed/dQw4w9WgXcQ\""));
        assert!(html.ends_with("</iframe></div></div>"));
    }
}
