//! Owned markup view tree.
//!
//! A deliberately small stand-in for a browser DOM: enough structure
//! for the upcast converters to match against and for the downcast
//! converters to build. Class and style manipulation goes through
//! helpers so foreign classes and styles on imported markup survive.

use std::collections::{BTreeMap, HashSet};

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element(ViewElement),
    Text(String),
}

/// An element in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewElement {
    /// Stable id assigned at parse time, used by [`ClaimSet`].
    /// Elements built for downcast keep the default 0.
    pub id: usize,
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes, including `class` and `style` as raw strings.
    pub attrs: BTreeMap<String, String>,
    /// Child nodes.
    pub children: Vec<ViewNode>,
}

impl ViewElement {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: 0,
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the parse-time id.
    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Builder-style attribute set.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style class add.
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: ViewElement) -> Self {
        self.children.push(ViewNode::Element(child));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let classes = match self.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", classes);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let remaining: Vec<&str> = existing
            .split_whitespace()
            .filter(|part| *part != class)
            .collect();
        if remaining.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", remaining.join(" "));
        }
    }

    /// Read one declaration out of the `style` attribute.
    pub fn style(&self, name: &str) -> Option<String> {
        let style = self.attr("style")?;
        style
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .find(|(prop, _)| prop.trim() == name)
            .map(|(_, value)| value.trim().to_string())
    }

    /// Set one declaration in the `style` attribute, preserving any
    /// foreign declarations already present.
    pub fn set_style(&mut self, name: &str, value: &str) {
        let mut declarations = self.style_declarations();
        match declarations.iter_mut().find(|(prop, _)| prop == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => declarations.push((name.to_string(), value.to_string())),
        }
        self.write_style(declarations);
    }

    /// Remove one declaration from the `style` attribute.
    pub fn remove_style(&mut self, name: &str) {
        let declarations: Vec<_> = self
            .style_declarations()
            .into_iter()
            .filter(|(prop, _)| prop != name)
            .collect();
        if declarations.is_empty() {
            self.remove_attr("style");
        } else {
            self.write_style(declarations);
        }
    }

    fn style_declarations(&self) -> Vec<(String, String)> {
        self.attr("style")
            .map(|style| {
                style
                    .split(';')
                    .filter_map(|d| d.split_once(':'))
                    .map(|(p, v)| (p.trim().to_string(), v.trim().to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn write_style(&mut self, declarations: Vec<(String, String)>) {
        let style = declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attr("style", style);
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &ViewElement> {
        self.children.iter().filter_map(|child| match child {
            ViewNode::Element(el) => Some(el),
            ViewNode::Text(_) => None,
        })
    }

    /// First descendant element (depth-first, self excluded) matching
    /// the predicate.
    pub fn find_descendant(&self, pred: &impl Fn(&ViewElement) -> bool) -> Option<&ViewElement> {
        for child in self.child_elements() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(pred) {
                return Some(found);
            }
        }
        None
    }
}

/// Visited-set guard preventing two converters from processing the
/// same markup fragment.
///
/// The first converter to claim an element's id wins; later converters
/// must treat a failed claim as "already processed" and decline.
#[derive(Debug, Default)]
pub struct ClaimSet {
    claimed: HashSet<usize>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an element. Returns `false` if it was already claimed.
    pub fn claim(&mut self, element: &ViewElement) -> bool {
        self.claimed.insert(element.id)
    }

    pub fn is_claimed(&self, element: &ViewElement) -> bool {
        self.claimed.contains(&element.id)
    }
}
