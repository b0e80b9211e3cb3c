//! Entities: classname plus key/value attributes, owning brushes.

use brushforge_brush::Brush;
use serde::{Deserialize, Serialize};

/// A named scene object with string attributes and attached brushes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    keyvalues: Vec<(String, String)>,
    brushes: Vec<Brush>,
}

impl Entity {
    /// Create an entity of the given archetype (`classname`).
    pub fn new(classname: &str) -> Self {
        Self {
            keyvalues: vec![("classname".to_string(), classname.to_string())],
            brushes: Vec::new(),
        }
    }

    /// The entity's classname.
    pub fn classname(&self) -> &str {
        self.key_value("classname").unwrap_or_default()
    }

    /// Set an attribute, replacing any previous value for `key`.
    pub fn set_key_value(&mut self, key: &str, value: &str) {
        match self.keyvalues.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.keyvalues.push((key.to_string(), value.to_string())),
        }
    }

    /// Look up an attribute.
    pub fn key_value(&self, key: &str) -> Option<&str> {
        self.keyvalues
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order.
    pub fn key_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keyvalues.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Attach a brush; the entity takes ownership.
    pub fn attach_brush(&mut self, brush: Brush) {
        self.brushes.push(brush);
    }

    /// Attached brushes.
    pub fn brushes(&self) -> &[Brush] {
        &self.brushes
    }
}
