//! HTML fragment parsing using html5ever.
//!
//! Produces the owned view tree the upcast converters match against.
//! Every element gets a stable id so the claim set can track which
//! fragments a converter has already consumed.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use nvembed_core::{ParseError, ViewElement, ViewNode};

/// Parse an HTML fragment into view nodes.
///
/// html5ever always builds a full document around the input; the
/// fragment is whatever ended up in `<body>`.
pub fn parse_fragment(input: &str) -> Result<Vec<ViewNode>, ParseError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .map_err(|e| ParseError::Invalid(format!("HTML parse error: {e:?}")))?;

    let body = find_body(&dom.document)
        .ok_or_else(|| ParseError::Invalid("no body in parsed document".into()))?;

    let mut next_id = 1;
    Ok(convert_children(&body, &mut next_id))
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data
        && name.local.as_ref() == "body"
    {
        return Some(handle.clone());
    }
    for child in handle.children.borrow().iter() {
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

fn convert_children(handle: &Handle, next_id: &mut usize) -> Vec<ViewNode> {
    let mut nodes = Vec::new();
    for child in handle.children.borrow().iter() {
        if let Some(node) = convert_node(child, next_id) {
            nodes.push(node);
        }
    }
    nodes
}

fn convert_node(handle: &Handle, next_id: &mut usize) -> Option<ViewNode> {
    match &handle.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() {
                return None;
            }
            Some(ViewNode::Text(text))
        }
        NodeData::Element { name, attrs, .. } => {
            let mut element = ViewElement::new(name.local.as_ref()).with_id(*next_id);
            *next_id += 1;
            for attr in attrs.borrow().iter() {
                element.set_attr(attr.name.local.as_ref(), attr.value.as_ref());
            }
            element.children = convert_children(handle, next_id);
            Some(ViewNode::Element(element))
        }
        NodeData::Comment { .. }
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. }
        | NodeData::Document => None,
    }
}
