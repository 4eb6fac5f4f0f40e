//! Downcast: embed model to wrapper markup.
//!
//! Builds the canonical three-tag structure (outer wrapper, structural
//! inner, primary display tag) and mirrors model attributes onto it.
//! Two rendering modes share all of the attribute logic: the data form
//! persisted with a document, and the editing form shown live in an
//! editor, which additionally marks the structure as a non-editable
//! widget.

mod structure;

pub use structure::*;

use nvembed_core::{ViewElement, ViewNode};

/// Serialize a view element to an HTML string.
pub fn emit(element: &ViewElement) -> String {
    let mut output = String::new();
    emit_element(element, &mut output);
    output
}

/// Serialize a sequence of view nodes to an HTML string.
pub fn emit_nodes(nodes: &[ViewNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        emit_node(node, &mut output);
    }
    output
}

fn emit_node(node: &ViewNode, output: &mut String) {
    match node {
        ViewNode::Element(element) => emit_element(element, output),
        ViewNode::Text(text) => output.push_str(&escape_html(text)),
    }
}

fn emit_element(element: &ViewElement, output: &mut String) {
    output.push('<');
    output.push_str(&element.tag);

    // Class leads for readability; everything else in map order.
    if let Some(class) = element.attr("class") {
        output.push_str(" class=\"");
        output.push_str(&escape_attr(class));
        output.push('"');
    }
    for (name, value) in &element.attrs {
        if name == "class" {
            continue;
        }
        output.push(' ');
        output.push_str(name);
        if !value.is_empty() {
            output.push_str("=\"");
            output.push_str(&escape_attr(value));
            output.push('"');
        }
    }

    if is_void_element(&element.tag) {
        output.push('>');
        return;
    }

    output.push('>');
    for child in &element.children {
        emit_node(child, output);
    }
    output.push_str("</");
    output.push_str(&element.tag);
    output.push('>');
}

fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Escape text content.
fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute values.
fn escape_attr(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
