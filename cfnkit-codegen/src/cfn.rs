//! CloudFormation registry schema input

use std::collections::BTreeMap;

use serde::Deserialize;

/// CloudFormation Resource Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnSchema {
    pub type_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub definitions: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    pub tagging: Option<CfnTagging>,
}

impl CfnSchema {
    /// Top-level read-only property names (`/properties/Arn` -> `Arn`)
    pub fn read_only_names(&self) -> Vec<&str> {
        self.read_only_properties
            .iter()
            .filter_map(|p| p.strip_prefix("/properties/"))
            .filter(|p| !p.contains('/'))
            .collect()
    }

    pub fn is_taggable(&self) -> bool {
        self.tagging.as_ref().map(|t| t.taggable).unwrap_or(false)
    }
}

/// CloudFormation Tagging metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnTagging {
    #[serde(default)]
    pub taggable: bool,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    /// The type, when exactly one is declared
    pub fn single(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) if v.len() == 1 => v.first().map(String::as_str),
            TypeValue::Multiple(_) => None,
        }
    }
}

/// A property or definition in a resource schema
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnProperty {
    #[serde(rename = "type")]
    pub prop_type: Option<TypeValue>,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    pub items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    pub properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    pub required: Vec<String>,
    pub pattern_properties: Option<BTreeMap<String, CfnProperty>>,
}

impl CfnProperty {
    /// Object with declared properties, emitted as its own record
    pub fn is_record(&self) -> bool {
        self.properties.is_some()
            && matches!(
                self.prop_type.as_ref().and_then(TypeValue::single),
                None | Some("object")
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_schema() {
        let schema: CfnSchema = serde_json::from_str(
            r##"{
                "typeName": "AWS::IoT::Policy",
                "description": "Resource Type definition for AWS::IoT::Policy",
                "properties": {
                    "PolicyName": {"type": "string"},
                    "PolicyDocument": {"type": ["object", "string"]},
                    "Arn": {"type": "string"}
                },
                "required": ["PolicyDocument"],
                "readOnlyProperties": ["/properties/Arn", "/properties/Nested/Id"],
                "tagging": {"taggable": false}
            }"##,
        )
        .unwrap();

        assert_eq!(schema.type_name, "AWS::IoT::Policy");
        assert_eq!(schema.read_only_names(), vec!["Arn"]);
        assert!(!schema.is_taggable());
        assert!(schema.definitions.is_empty());
        let document = &schema.properties["PolicyDocument"];
        assert!(document.prop_type.as_ref().unwrap().single().is_none());
    }

    #[test]
    fn record_detection() {
        let record: CfnProperty = serde_json::from_str(
            r#"{"type": "object", "properties": {"Enabled": {"type": "boolean"}}}"#,
        )
        .unwrap();
        assert!(record.is_record());

        let untyped: CfnProperty =
            serde_json::from_str(r#"{"properties": {"Enabled": {"type": "boolean"}}}"#).unwrap();
        assert!(untyped.is_record());

        let free_form: CfnProperty = serde_json::from_str(r#"{"type": "object"}"#).unwrap();
        assert!(!free_form.is_record());
    }

    #[test]
    fn missing_tagging_is_not_taggable() {
        let schema: CfnSchema =
            serde_json::from_str(r#"{"typeName": "AWS::IoT::Thing", "properties": {}}"#).unwrap();
        assert!(!schema.is_taggable());
    }
}
