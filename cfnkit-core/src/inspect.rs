//! Inspect - Tree inspection hook

use std::collections::BTreeMap;

/// Receives attributes disclosed by resources during inspection
pub trait TreeInspector {
    fn add_attribute(&mut self, key: &str, value: serde_json::Value);
}

/// Inspector that keeps every disclosed attribute
#[derive(Debug, Clone, Default)]
pub struct AttributeCollector {
    attributes: BTreeMap<String, serde_json::Value>,
}

impl AttributeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }
}

impl TreeInspector for AttributeCollector {
    fn add_attribute(&mut self, key: &str, value: serde_json::Value) {
        self.attributes.insert(key.to_string(), value);
    }
}
