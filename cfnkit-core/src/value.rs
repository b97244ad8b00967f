//! Value - Dynamic representation of property values

use std::collections::BTreeMap;
use std::fmt;

use crate::record::RecordValue;
use crate::schema::TypeError;

/// Property value as stored in a [`crate::record::PropertyMap`]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    /// String-keyed map, ordered by key
    Map(BTreeMap<String, Value>),
    /// Nested property record
    Record(RecordValue),
    /// Reference to another resource (`Ref`)
    Ref(String),
    /// Attribute of another resource (`Fn::GetAtt`)
    GetAtt {
        logical_id: String,
        attribute: String,
    },
}

impl Value {
    pub fn type_name(&self) -> String {
        match self {
            Value::String(_) => "String".to_string(),
            Value::Int(_) => "Int".to_string(),
            Value::Float(_) => "Number".to_string(),
            Value::Bool(_) => "Bool".to_string(),
            Value::List(_) => "List".to_string(),
            Value::Map(_) => "Map".to_string(),
            Value::Record(record) => format!("Record({})", record.type_name()),
            Value::Ref(logical_id) => format!("Ref({})", logical_id),
            Value::GetAtt {
                logical_id,
                attribute,
            } => format!("GetAtt({}.{})", logical_id, attribute),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Ref` and `Fn::GetAtt` values, which only resolve at deploy time
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Ref(_) | Value::GetAtt { .. })
    }

    /// Logical ids named by `Ref` and `Fn::GetAtt` anywhere inside this value
    pub fn referenced_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_references(&mut ids);
        ids
    }

    fn collect_references<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            Value::Ref(logical_id) | Value::GetAtt { logical_id, .. } => {
                ids.push(logical_id.as_str())
            }
            Value::List(items) => items.iter().for_each(|v| v.collect_references(ids)),
            Value::Map(map) => map.values().for_each(|v| v.collect_references(ids)),
            Value::Record(record) => record
                .properties()
                .iter()
                .for_each(|p| p.value.collect_references(ids)),
            Value::String(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_) => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{:?}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Record(record) => write!(f, "{}", record),
            Value::Ref(logical_id) => write!(f, "Ref({})", logical_id),
            Value::GetAtt {
                logical_id,
                attribute,
            } => write!(f, "GetAtt({}.{})", logical_id, attribute),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// JSON documents (policy documents and the like) convert into values.
/// CloudFormation has no use for `null`, so it is rejected.
impl TryFrom<serde_json::Value> for Value {
    type Error = TypeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Null => Err(TypeError::TypeMismatch {
                expected: "JSON value".to_string(),
                got: "null".to_string(),
            }),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Int(i)),
                None => n.as_f64().map(Value::Float).ok_or_else(|| TypeError::TypeMismatch {
                    expected: "Number".to_string(),
                    got: n.to_string(),
                }),
            },
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Value::Map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_quotes_strings() {
        assert_eq!(Value::from("ACTIVE").to_string(), "\"ACTIVE\"");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn display_list_and_map() {
        let list = Value::List(vec![Value::Int(1), Value::from("a")]);
        assert_eq!(list.to_string(), "[1, \"a\"]");

        let map = Value::Map(BTreeMap::from([
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(1)),
        ]));
        assert_eq!(map.to_string(), "{\"a\": 1, \"b\": 2}");
    }

    #[test]
    fn json_document_converts() {
        let doc = json!({
            "Version": "2012-10-17",
            "Statement": [{"Effect": "Allow", "Action": ["iot:Connect"], "Priority": 1}]
        });
        let value = Value::try_from(doc).unwrap();

        let Value::Map(map) = value else {
            panic!("Expected Map");
        };
        assert_eq!(map.get("Version"), Some(&Value::from("2012-10-17")));
        let Some(Value::List(statements)) = map.get("Statement") else {
            panic!("Expected statement list");
        };
        let Value::Map(statement) = &statements[0] else {
            panic!("Expected statement map");
        };
        assert_eq!(statement.get("Priority"), Some(&Value::Int(1)));
    }

    #[test]
    fn json_null_is_rejected() {
        assert!(Value::try_from(json!({"Key": null})).is_err());
    }

    #[test]
    fn intrinsic_values() {
        assert!(Value::Ref("Thing".to_string()).is_intrinsic());
        assert!(
            Value::GetAtt {
                logical_id: "Thing".to_string(),
                attribute: "Arn".to_string()
            }
            .is_intrinsic()
        );
        assert!(!Value::from("Thing").is_intrinsic());
    }

    #[test]
    fn referenced_ids_walk_nested_values() {
        let mut props = crate::record::PropertyMap::new();
        props.set(
            "principal",
            "Principal",
            Value::GetAtt {
                logical_id: "Cert".to_string(),
                attribute: "Arn".to_string(),
            },
        );
        let value = Value::List(vec![
            Value::Ref("Thing".to_string()),
            Value::Map([("policy".to_string(), Value::Ref("Policy".to_string()))].into()),
            Value::Record(RecordValue::new("AttachmentProperty", props)),
            Value::from("Literal"),
        ]);

        assert_eq!(value.referenced_ids(), vec!["Thing", "Policy", "Cert"]);
        assert!(Value::Int(3).referenced_ids().is_empty());
    }
}
