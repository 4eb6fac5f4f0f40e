//! Passthrough attribute collection.
//!
//! Display/security attributes (`allow`, `sandbox`, `srcdoc`, ...) are
//! carried verbatim between configuration, the embed node and the
//! rendered tag. The engine never interprets their values.

use std::collections::BTreeMap;

/// An ordered collection of passthrough attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attrs(BTreeMap<String, AttrValue>);

/// A passthrough attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    String(String),
    Bool(bool),
}

impl AttrValue {
    /// Render the value the way it lands on a markup tag. Boolean
    /// attributes collapse to presence (`true`) or absence (`false`).
    pub fn as_markup(&self) -> Option<String> {
        match self {
            AttrValue::String(s) => Some(s.clone()),
            AttrValue::Bool(true) => Some(String::new()),
            AttrValue::Bool(false) => None,
        }
    }
}

impl Attrs {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get an attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Get a string attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AttrValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Check if an attribute exists.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove an attribute and return its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.remove(key)
    }

    /// Retain only attributes whose key satisfies the predicate.
    pub fn retain(&mut self, mut f: impl FnMut(&str) -> bool) {
        self.0.retain(|k, _| f(k));
    }

    /// Copy every entry of `other` into `self`, overwriting on clash.
    pub fn overlay(&mut self, other: &Attrs) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Iterate over attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.0.iter()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_overwrites() {
        let mut base = Attrs::new().with("sandbox", "allow-scripts");
        let config = Attrs::new()
            .with("sandbox", "allow-same-origin")
            .with("allowfullscreen", true);
        base.overlay(&config);

        assert_eq!(base.get_str("sandbox"), Some("allow-same-origin"));
        assert_eq!(base.get("allowfullscreen"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_bool_markup_rendering() {
        assert_eq!(AttrValue::Bool(true).as_markup(), Some(String::new()));
        assert_eq!(AttrValue::Bool(false).as_markup(), None);
        assert_eq!(
            AttrValue::String("x".into()).as_markup(),
            Some("x".to_string())
        );
    }
}
