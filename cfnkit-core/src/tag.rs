//! Tag - Resource tags and the tag manager
//!
//! Taggable resources seed a [`TagManager`] from the `tags` property of their
//! props. Tags can then be added or removed on the resource, and the manager
//! renders them back into the property map, sorted by key.

use std::collections::BTreeMap;
use std::fmt;

use crate::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use crate::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use crate::value::Value;

/// A CloudFormation `{ "Key": ..., "Value": ... }` tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfnTag {
    key: String,
    value: String,
}

impl CfnTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl PropertyRecord for CfnTag {
    const TYPE_NAME: &'static str = "CfnTag";

    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .attribute(
                AttributeSchema::new("key", AttributeType::String)
                    .required()
                    .with_provider_name("Key"),
            )
            .attribute(
                AttributeSchema::new("value", AttributeType::String)
                    .required()
                    .with_provider_name("Value"),
            )
    }

    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("key", "Key", &self.key);
        map.insert("value", "Value", &self.value);
        map
    }

    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            key: map.required(Self::TYPE_NAME, "key")?,
            value: map.required(Self::TYPE_NAME, "value")?,
        })
    }
}

impl PropertyValue for CfnTag {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}

impl fmt::Display for CfnTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}

/// How a resource type expects its tags to be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    /// List of `{Key, Value}` records
    Standard,
    /// Plain string-to-string map
    Map,
}

/// Tags attached to a single resource
#[derive(Debug, Clone, PartialEq)]
pub struct TagManager {
    tag_type: TagType,
    resource_type: String,
    tags: BTreeMap<String, String>,
}

impl TagManager {
    /// Property key the tags are rendered under
    pub const TAGS_KEY: &'static str = "tags";
    pub const TAGS_CFN_KEY: &'static str = "Tags";

    pub fn new(
        tag_type: TagType,
        resource_type: impl Into<String>,
        initial: Option<&[CfnTag]>,
    ) -> Self {
        let tags = initial
            .unwrap_or_default()
            .iter()
            .map(|t| (t.key.clone(), t.value.clone()))
            .collect();
        Self {
            tag_type,
            resource_type: resource_type.into(),
            tags,
        }
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Add or overwrite a tag
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        log::debug!("{}: set tag '{}'", self.resource_type, key);
        self.tags.insert(key, value.into());
    }

    pub fn remove_tag(&mut self, key: &str) -> Option<String> {
        self.tags.remove(key)
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn tag_values(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Rendered tags, or `None` when there are none
    pub fn render_tags(&self) -> Option<Value> {
        if self.tags.is_empty() {
            return None;
        }
        let rendered = match self.tag_type {
            TagType::Standard => Value::List(
                self.tags
                    .iter()
                    .map(|(k, v)| CfnTag::new(k.clone(), v.clone()).to_value())
                    .collect(),
            ),
            TagType::Map => Value::Map(
                self.tags
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
        };
        Some(rendered)
    }

    /// Replace the `tags` property of `map` with the managed tags
    pub fn apply(&self, map: &mut PropertyMap) {
        match self.render_tags() {
            Some(rendered) => {
                map.set(Self::TAGS_KEY, Self::TAGS_CFN_KEY, rendered);
            }
            None => {
                map.remove(Self::TAGS_KEY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &Value) -> Vec<String> {
        let Value::List(items) = value else {
            panic!("Expected List");
        };
        items
            .iter()
            .map(|item| CfnTag::from_value(item).unwrap().key().to_string())
            .collect()
    }

    #[test]
    fn seeded_from_initial_tags() {
        let initial = vec![CfnTag::new("team", "iot"), CfnTag::new("env", "dev")];
        let manager = TagManager::new(TagType::Standard, "AWS::IoT::Authorizer", Some(&initial));

        assert!(manager.has_tags());
        assert_eq!(manager.tag_values().get("env"), Some(&"dev".to_string()));
    }

    #[test]
    fn renders_sorted_by_key() {
        let initial = vec![CfnTag::new("team", "iot"), CfnTag::new("env", "dev")];
        let manager = TagManager::new(TagType::Standard, "AWS::IoT::Authorizer", Some(&initial));

        let rendered = manager.render_tags().unwrap();
        assert_eq!(keys(&rendered), vec!["env", "team"]);
    }

    #[test]
    fn set_overrides_and_remove_drops() {
        let initial = vec![CfnTag::new("env", "dev")];
        let mut manager =
            TagManager::new(TagType::Standard, "AWS::IoT::TopicRule", Some(&initial));

        manager.set_tag("env", "prod");
        manager.set_tag("owner", "platform");
        assert_eq!(manager.tag_values().get("env"), Some(&"prod".to_string()));

        assert_eq!(manager.remove_tag("owner"), Some("platform".to_string()));
        assert_eq!(manager.remove_tag("owner"), None);
        assert_eq!(manager.tag_values().len(), 1);
    }

    #[test]
    fn map_tags_render_as_map() {
        let mut manager = TagManager::new(TagType::Map, "AWS::Example::Thing", None);
        manager.set_tag("env", "dev");

        let rendered = manager.render_tags().unwrap();
        let Value::Map(map) = rendered else {
            panic!("Expected Map");
        };
        assert_eq!(map.get("env"), Some(&Value::from("dev")));
    }

    #[test]
    fn apply_replaces_or_removes_tags_property() {
        let mut map = PropertyMap::new();
        map.insert("name", "Name", &"env".to_string());
        map.insert("tags", "Tags", &vec![CfnTag::new("stale", "x")]);

        let mut manager = TagManager::new(TagType::Standard, "AWS::Cloud9::EnvironmentEC2", None);
        manager.apply(&mut map);
        assert!(!map.contains_key("tags"));

        manager.set_tag("env", "dev");
        manager.apply(&mut map);
        assert_eq!(keys(map.get("tags").unwrap()), vec!["env"]);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["name", "tags"]);
    }

    #[test]
    fn tag_representation() {
        assert_eq!(
            CfnTag::new("env", "dev").to_string(),
            "CfnTag(key=\"env\", value=\"dev\")"
        );
    }
}
