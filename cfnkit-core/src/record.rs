//! Record - The property record primitive
//!
//! Generated property types keep their fields as plain Rust fields and
//! convert to and from a [`PropertyMap`], the ordered key/value view used
//! for representation, validation and rendering. Optional fields that were
//! never supplied are not stored at all, which keeps "absent" distinct from
//! "explicitly empty".

use std::collections::BTreeMap;
use std::fmt;

use crate::schema::{RecordSchema, TypeError};
use crate::value::Value;

/// Error raised while building or reading a record
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("Required property '{field}' is missing from {record}")]
    MissingRequired { record: String, field: String },

    #[error("Invalid property '{field}' in {record}: {source}")]
    InvalidProperty {
        record: String,
        field: String,
        source: TypeError,
    },
}

impl RecordError {
    pub fn missing(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingRequired {
            record: record.into(),
            field: field.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequired { field, .. } | Self::InvalidProperty { field, .. } => field,
        }
    }
}

/// A single stored property
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Field name (e.g., "ca_certificate_pem")
    pub key: String,
    /// CloudFormation property name (e.g., "CACertificatePem")
    pub cfn_key: String,
    pub value: Value,
}

/// Ordered associative container of present properties
///
/// Entries keep insertion order; replacing an existing key keeps its
/// position. Equality ignores order, like comparing two dictionaries.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: Vec<Property>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field unconditionally
    pub fn insert<T: PropertyValue>(&mut self, key: &str, cfn_key: &str, value: &T) {
        self.set(key, cfn_key, value.to_value());
    }

    /// Store a field only when a value was supplied
    pub fn insert_opt<T: PropertyValue>(&mut self, key: &str, cfn_key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.insert(key, cfn_key, value);
        }
    }

    /// Set a raw value, returning the previous one
    pub fn set(&mut self, key: &str, cfn_key: &str, value: Value) -> Option<Value> {
        if let Some(existing) = self.entries.iter_mut().find(|p| p.key == key) {
            existing.cfn_key = cfn_key.to_string();
            return Some(std::mem::replace(&mut existing.value, value));
        }
        self.entries.push(Property {
            key: key.to_string(),
            cfn_key: cfn_key.to_string(),
            value,
        });
        None
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|p| p.key == key)?;
        Some(self.entries.remove(pos).value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.key.as_str())
    }

    /// Typed lookup of a required field
    pub fn required<T: PropertyValue>(&self, record: &str, key: &str) -> Result<T, RecordError> {
        self.optional(record, key)?
            .ok_or_else(|| RecordError::missing(record, key))
    }

    /// Typed lookup of an optional field; absent keys yield `None`
    pub fn optional<T: PropertyValue>(
        &self,
        record: &str,
        key: &str,
    ) -> Result<Option<T>, RecordError> {
        self.get(key)
            .map(|value| {
                T::from_value(value).map_err(|source| RecordError::InvalidProperty {
                    record: record.to_string(),
                    field: key.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

impl PartialEq for PropertyMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|p| other.get(&p.key) == Some(&p.value))
    }
}

/// A record reduced to its type name and stored properties
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    type_name: String,
    properties: PropertyMap,
}

impl RecordValue {
    pub fn new(type_name: impl Into<String>, properties: PropertyMap) -> Self {
        Self {
            type_name: type_name.into(),
            properties,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

/// Renders as `TypeName(key=value, ...)` in stored order
impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.type_name)?;
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", property.key, property.value)?;
        }
        write!(f, ")")
    }
}

/// Conversion between typed fields and [`Value`]
pub trait PropertyValue: Sized {
    fn to_value(&self) -> Value;
    fn from_value(value: &Value) -> Result<Self, TypeError>;
}

fn mismatch(expected: &str, got: &Value) -> TypeError {
    TypeError::TypeMismatch {
        expected: expected.to_string(),
        got: got.type_name(),
    }
}

impl PropertyValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch("String", other)),
        }
    }
}

impl PropertyValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(mismatch("Int", other)),
        }
    }
}

impl PropertyValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            other => Err(mismatch("Number", other)),
        }
    }
}

impl PropertyValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("Bool", other)),
        }
    }
}

/// JSON-typed fields hold a [`Value`] as-is
impl PropertyValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        Ok(value.clone())
    }
}

impl<T: PropertyValue> PropertyValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(PropertyValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    T::from_value(item).map_err(|e| TypeError::ListItemError {
                        index,
                        inner: Box::new(e),
                    })
                })
                .collect(),
            other => Err(mismatch("List", other)),
        }
    }
}

impl<T: PropertyValue> PropertyValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &Value) -> Result<Self, TypeError> {
        match value {
            Value::Map(map) => map
                .iter()
                .map(|(k, v)| {
                    T::from_value(v)
                        .map(|v| (k.clone(), v))
                        .map_err(|e| TypeError::MapValueError {
                            key: k.clone(),
                            inner: Box::new(e),
                        })
                })
                .collect(),
            other => Err(mismatch("Map", other)),
        }
    }
}

/// A schema-typed, immutable property record
pub trait PropertyRecord: Clone + fmt::Debug + PartialEq {
    /// Declared type name, used in representation and record equality
    const TYPE_NAME: &'static str;

    fn schema() -> RecordSchema;

    /// Present fields in declaration order
    fn to_properties(&self) -> PropertyMap;

    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError>;

    fn to_record(&self) -> RecordValue {
        RecordValue::new(Self::TYPE_NAME, self.to_properties())
    }

    /// Check the stored fields against the schema (enum values, shapes)
    fn validate(&self) -> Result<(), Vec<TypeError>> {
        Self::schema().validate(&self.to_properties())
    }
}

/// [`PropertyValue::to_value`] for records
pub fn record_to_value<R: PropertyRecord>(record: &R) -> Value {
    Value::Record(record.to_record())
}

/// [`PropertyValue::from_value`] for records
pub fn record_from_value<R: PropertyRecord>(value: &Value) -> Result<R, TypeError> {
    match value {
        Value::Record(record) if record.type_name() == R::TYPE_NAME => {
            R::from_properties(record.properties()).map_err(|e| TypeError::InvalidRecord {
                type_name: R::TYPE_NAME.to_string(),
                message: e.to_string(),
            })
        }
        Value::Record(record) => Err(TypeError::RecordTypeMismatch {
            expected: R::TYPE_NAME.to_string(),
            got: record.type_name().to_string(),
        }),
        other => Err(mismatch(R::TYPE_NAME, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};

    #[derive(Debug, Clone, PartialEq)]
    struct Endpoint {
        address: String,
        port: Option<i64>,
    }

    impl PropertyRecord for Endpoint {
        const TYPE_NAME: &'static str = "Endpoint";

        fn schema() -> RecordSchema {
            RecordSchema::new(Self::TYPE_NAME)
                .attribute(
                    AttributeSchema::new("address", AttributeType::String)
                        .required()
                        .with_provider_name("Address"),
                )
                .attribute(
                    AttributeSchema::new("port", AttributeType::Int).with_provider_name("Port"),
                )
        }

        fn to_properties(&self) -> PropertyMap {
            let mut map = PropertyMap::new();
            map.insert("address", "Address", &self.address);
            map.insert_opt("port", "Port", self.port.as_ref());
            map
        }

        fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
            Ok(Self {
                address: map.required(Self::TYPE_NAME, "address")?,
                port: map.optional(Self::TYPE_NAME, "port")?,
            })
        }
    }

    #[test]
    fn absent_optional_is_not_stored() {
        let endpoint = Endpoint {
            address: "localhost".to_string(),
            port: None,
        };
        let map = endpoint.to_properties();
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("port"));
    }

    #[test]
    fn required_lookup_names_missing_field() {
        let err = Endpoint::from_properties(&PropertyMap::new()).unwrap_err();
        assert_eq!(err, RecordError::missing("Endpoint", "address"));
        assert_eq!(err.field(), "address");
        assert_eq!(
            err.to_string(),
            "Required property 'address' is missing from Endpoint"
        );
    }

    #[test]
    fn optional_lookup_rejects_wrong_shape() {
        let mut map = PropertyMap::new();
        map.set("address", "Address", Value::from("localhost"));
        map.set("port", "Port", Value::from("80"));

        let err = Endpoint::from_properties(&map).unwrap_err();
        assert!(matches!(err, RecordError::InvalidProperty { ref field, .. } if field == "port"));
    }

    #[test]
    fn record_round_trip_through_value() {
        let endpoint = Endpoint {
            address: "localhost".to_string(),
            port: Some(8080),
        };
        let value = record_to_value(&endpoint);
        let back: Endpoint = record_from_value(&value).unwrap();
        assert_eq!(back, endpoint);
    }

    #[test]
    fn record_from_value_checks_type_name() {
        let value = Value::Record(RecordValue::new("Other", PropertyMap::new()));
        let err = record_from_value::<Endpoint>(&value).unwrap_err();
        assert!(matches!(err, TypeError::RecordTypeMismatch { .. }));
    }

    #[test]
    fn representation_lists_present_fields_in_order() {
        let endpoint = Endpoint {
            address: "localhost".to_string(),
            port: Some(80),
        };
        assert_eq!(
            endpoint.to_record().to_string(),
            "Endpoint(address=\"localhost\", port=80)"
        );

        let bare = Endpoint {
            address: "localhost".to_string(),
            port: None,
        };
        assert_eq!(bare.to_record().to_string(), "Endpoint(address=\"localhost\")");
    }

    #[test]
    fn set_replaces_in_place() {
        let mut map = PropertyMap::new();
        map.set("a", "A", Value::Int(1));
        map.set("b", "B", Value::Int(2));
        let previous = map.set("a", "A", Value::Int(3));

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn map_equality_ignores_order() {
        let mut left = PropertyMap::new();
        left.set("a", "A", Value::Int(1));
        left.set("b", "B", Value::Int(2));

        let mut right = PropertyMap::new();
        right.set("b", "B", Value::Int(2));
        right.set("a", "A", Value::Int(1));

        assert_eq!(left, right);
        right.set("b", "B", Value::Int(5));
        assert_ne!(left, right);
    }

    #[test]
    fn record_values_of_different_types_differ() {
        let mut props = PropertyMap::new();
        props.set("enabled", "Enabled", Value::Bool(true));

        let a = RecordValue::new("AuditCheckConfigurationProperty", props.clone());
        let b = RecordValue::new("AuditNotificationTargetProperty", props);
        assert_ne!(a, b);
    }

    #[test]
    fn validate_uses_schema() {
        let endpoint = Endpoint {
            address: "localhost".to_string(),
            port: Some(443),
        };
        assert!(endpoint.validate().is_ok());
    }

    #[test]
    fn list_from_value_reports_index() {
        let value = Value::List(vec![Value::from("a"), Value::Int(1)]);
        let err = Vec::<String>::from_value(&value).unwrap_err();
        assert!(matches!(err, TypeError::ListItemError { index: 1, .. }));
    }

    #[test]
    fn number_accepts_integers() {
        assert_eq!(f64::from_value(&Value::Int(2)).unwrap(), 2.0);
        assert!(i64::from_value(&Value::Float(2.5)).is_err());
    }
}
