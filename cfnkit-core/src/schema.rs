//! Schema - Declared shape of property records
//!
//! Every generated record exposes a [`RecordSchema`] listing its attributes
//! in declaration order, enabling validation of untyped property maps.

use std::fmt;

use crate::record::PropertyMap;
use crate::value::Value;

/// Attribute type
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Floating point or integer number
    Number,
    /// Boolean
    Bool,
    /// Free-form JSON document (e.g., an IAM policy)
    Json,
    /// String restricted to a set of allowed values
    Enum(Vec<String>),
    /// Nested property record, identified by its type name
    Record(String),
    /// List
    List(Box<AttributeType>),
    /// String-keyed map
    Map(Box<AttributeType>),
}

impl AttributeType {
    pub fn enumeration(values: &[&str]) -> Self {
        AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
    }

    pub fn record(type_name: impl Into<String>) -> Self {
        AttributeType::Record(type_name.into())
    }

    pub fn list(inner: AttributeType) -> Self {
        AttributeType::List(Box::new(inner))
    }

    pub fn map(inner: AttributeType) -> Self {
        AttributeType::Map(Box::new(inner))
    }

    /// Check if a value conforms to this type
    ///
    /// Nested records are checked by type name only; their own fields are
    /// validated by their own schema.
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        match (self, value) {
            // Intrinsics resolve to strings at deploy time
            (AttributeType::String | AttributeType::Enum(_), v) if v.is_intrinsic() => Ok(()),
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            (AttributeType::Number, Value::Int(_) | Value::Float(_)) => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Json, Value::Record(_)) => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
            (AttributeType::Json, _) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::Record(expected), Value::Record(record)) => {
                if record.type_name() == expected {
                    Ok(())
                } else {
                    Err(TypeError::RecordTypeMismatch {
                        expected: expected.clone(),
                        got: record.type_name().to_string(),
                    })
                }
            }

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Number => "Number".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Json => "Json".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Record(name) => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Record type mismatch: expected {expected}, got {got}")]
    RecordTypeMismatch { expected: String, got: String },

    #[error("Invalid {type_name}: {message}")]
    InvalidRecord { type_name: String, message: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Attribute '{name}': {inner}")]
    AttributeError { name: String, inner: Box<TypeError> },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },
}

/// Attribute schema
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub description: Option<String>,
    /// CloudFormation property name (e.g., "CACertificatePem")
    pub provider_name: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            description: None,
            provider_name: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    /// CloudFormation name, falling back to the attribute name
    pub fn cfn_name(&self) -> &str {
        self.provider_name.as_deref().unwrap_or(&self.name)
    }
}

/// Record schema
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub type_name: String,
    /// Attributes in declaration order
    pub attributes: Vec<AttributeSchema>,
    pub description: Option<String>,
}

impl RecordSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: Vec::new(),
            description: None,
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.retain(|a| a.name != schema.name);
        self.attributes.push(schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.iter().filter(|a| a.required)
    }

    /// Validate a property map, collecting every error
    pub fn validate(&self, properties: &PropertyMap) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        for schema in self.required_attributes() {
            if !properties.contains_key(&schema.name) {
                errors.push(TypeError::MissingRequired {
                    name: schema.name.clone(),
                });
            }
        }

        for property in properties.iter() {
            match self.get(&property.key) {
                Some(schema) => {
                    if let Err(e) = schema.attr_type.validate(&property.value) {
                        errors.push(TypeError::AttributeError {
                            name: property.key.clone(),
                            inner: Box::new(e),
                        });
                    }
                }
                None => errors.push(TypeError::UnknownAttribute {
                    name: property.key.clone(),
                }),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordValue;

    #[test]
    fn validate_string_type() {
        let t = AttributeType::String;
        assert!(t.validate(&Value::String("hello".to_string())).is_ok());
        assert!(t.validate(&Value::Ref("Policy".to_string())).is_ok());
        assert!(t.validate(&Value::Int(42)).is_err());
    }

    #[test]
    fn validate_number_accepts_int() {
        let t = AttributeType::Number;
        assert!(t.validate(&Value::Int(3)).is_ok());
        assert!(t.validate(&Value::Float(0.5)).is_ok());
        assert!(AttributeType::Int.validate(&Value::Float(0.5)).is_err());
    }

    #[test]
    fn validate_enum_type() {
        let t = AttributeType::enumeration(&["ACTIVE", "INACTIVE"]);
        assert!(t.validate(&Value::from("ACTIVE")).is_ok());
        let err = t.validate(&Value::from("active")).unwrap_err();
        assert!(err.to_string().contains("ACTIVE, INACTIVE"));
    }

    #[test]
    fn validate_record_type_by_name() {
        let t = AttributeType::record("RepositoryProperty");
        let same = Value::Record(RecordValue::new("RepositoryProperty", PropertyMap::new()));
        let other = Value::Record(RecordValue::new("CfnTag", PropertyMap::new()));
        assert!(t.validate(&same).is_ok());
        assert!(matches!(
            t.validate(&other),
            Err(TypeError::RecordTypeMismatch { .. })
        ));
    }

    #[test]
    fn validate_json_rejects_records() {
        let t = AttributeType::Json;
        assert!(t.validate(&Value::Map(Default::default())).is_ok());
        assert!(
            t.validate(&Value::Record(RecordValue::new("CfnTag", PropertyMap::new())))
                .is_err()
        );
    }

    #[test]
    fn validate_list_reports_index() {
        let t = AttributeType::list(AttributeType::Int);
        let err = t
            .validate(&Value::List(vec![Value::Int(1), Value::from("x")]))
            .unwrap_err();
        assert!(matches!(err, TypeError::ListItemError { index: 1, .. }));
    }

    #[test]
    fn validate_record_schema() {
        let schema = RecordSchema::new("CfnThingPrincipalAttachmentProps")
            .attribute(AttributeSchema::new("principal", AttributeType::String).required())
            .attribute(AttributeSchema::new("thing_name", AttributeType::String).required());

        let mut props = PropertyMap::new();
        props.set("principal", "Principal", Value::from("arn:aws:iot:cert/1"));
        props.set("thing_name", "ThingName", Value::from("sensor"));

        assert!(schema.validate(&props).is_ok());
    }

    #[test]
    fn missing_required_attributes_are_all_reported() {
        let schema = RecordSchema::new("CfnThingPrincipalAttachmentProps")
            .attribute(AttributeSchema::new("principal", AttributeType::String).required())
            .attribute(AttributeSchema::new("thing_name", AttributeType::String).required());

        let errors = schema.validate(&PropertyMap::new()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                TypeError::MissingRequired {
                    name: "principal".to_string()
                },
                TypeError::MissingRequired {
                    name: "thing_name".to_string()
                },
            ]
        );
    }

    #[test]
    fn unknown_attributes_are_reported() {
        let schema = RecordSchema::new("CfnPolicyProps")
            .attribute(AttributeSchema::new("policy_name", AttributeType::String));

        let mut props = PropertyMap::new();
        props.set("policy_nmae", "PolicyNmae", Value::from("p"));

        let errors = schema.validate(&props).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::UnknownAttribute {
                name: "policy_nmae".to_string()
            }]
        );
    }

    #[test]
    fn attribute_declaration_order_is_kept() {
        let schema = RecordSchema::new("r")
            .attribute(AttributeSchema::new("b", AttributeType::String))
            .attribute(AttributeSchema::new("a", AttributeType::String));
        let names: Vec<_> = schema.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn cfn_name_falls_back_to_name() {
        let plain = AttributeSchema::new("status", AttributeType::String);
        assert_eq!(plain.cfn_name(), "status");
        let named = plain.with_provider_name("Status");
        assert_eq!(named.cfn_name(), "Status");
    }
}
