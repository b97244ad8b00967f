//! Render - Turn property maps into CloudFormation JSON
//!
//! Rendering is a hook: resources hand their property map to a [`Renderer`],
//! which decides how it is serialized. [`JsonRenderer`] produces the
//! CloudFormation template shape.

use crate::record::PropertyMap;
use crate::value::Value;

/// Converts a property map into template JSON
///
/// Non-finite floats have no JSON form. [`JsonRenderer`] writes them as
/// `null` and logs a warning.
pub trait Renderer {
    fn render_properties(&self, properties: &PropertyMap) -> serde_json::Value;

    fn render_value(&self, value: &Value) -> serde_json::Value;
}

/// Renders CloudFormation property names and intrinsic functions
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_value(&self, value: &Value) -> serde_json::Value {
        match value {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(n) => match serde_json::Number::from_f64(*n) {
                Some(number) => serde_json::Value::Number(number),
                None => {
                    log::warn!("Non-finite number {} rendered as null", n);
                    serde_json::Value::Null
                }
            },
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(|v| self.render_value(v)).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), self.render_value(v)))
                    .collect(),
            ),
            Value::Record(record) => self.render_properties(record.properties()),
            Value::Ref(logical_id) => serde_json::json!({ "Ref": logical_id }),
            Value::GetAtt {
                logical_id,
                attribute,
            } => serde_json::json!({ "Fn::GetAtt": [logical_id, attribute] }),
        }
    }

    fn render_properties(&self, properties: &PropertyMap) -> serde_json::Value {
        serde_json::Value::Object(
            properties
                .iter()
                .map(|p| (p.cfn_key.clone(), self.render_value(&p.value)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordValue;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn renders_cfn_keys() {
        let mut props = PropertyMap::new();
        props.set("ca_certificate_pem", "CACertificatePem", Value::from("PEM"));
        props.set("status", "Status", Value::from("ACTIVE"));

        assert_eq!(
            JsonRenderer.render_properties(&props),
            json!({"CACertificatePem": "PEM", "Status": "ACTIVE"})
        );
    }

    #[test]
    fn renders_nested_records_and_maps() {
        let mut repository = PropertyMap::new();
        repository.set("path_component", "PathComponent", Value::from("/app"));

        let mut props = PropertyMap::new();
        props.set(
            "repositories",
            "Repositories",
            Value::List(vec![Value::Record(RecordValue::new(
                "RepositoryProperty",
                repository,
            ))]),
        );
        props.set(
            "attributes",
            "Attributes",
            Value::Map(BTreeMap::from([("model".to_string(), Value::from("x1"))])),
        );

        assert_eq!(
            JsonRenderer.render_properties(&props),
            json!({
                "Repositories": [{"PathComponent": "/app"}],
                "Attributes": {"model": "x1"}
            })
        );
    }

    #[test]
    fn renders_intrinsics() {
        let renderer = JsonRenderer;
        assert_eq!(
            renderer.render_value(&Value::Ref("Policy".to_string())),
            json!({"Ref": "Policy"})
        );
        assert_eq!(
            renderer.render_value(&Value::GetAtt {
                logical_id: "Certificate".to_string(),
                attribute: "Arn".to_string(),
            }),
            json!({"Fn::GetAtt": ["Certificate", "Arn"]})
        );
    }

    #[test]
    fn renders_numbers() {
        let renderer = JsonRenderer;
        assert_eq!(renderer.render_value(&Value::Int(30)), json!(30));
        assert_eq!(renderer.render_value(&Value::Float(0.5)), json!(0.5));
    }

    #[test]
    fn renders_non_finite_numbers_as_null() {
        let mut props = PropertyMap::new();
        props.set("ratio", "Ratio", Value::Float(f64::NAN));
        props.set(
            "limits",
            "Limits",
            Value::List(vec![
                Value::Float(f64::INFINITY),
                Value::Float(f64::NEG_INFINITY),
                Value::Float(1.5),
            ]),
        );

        assert_eq!(
            JsonRenderer.render_properties(&props),
            json!({"Ratio": null, "Limits": [null, null, 1.5]})
        );
    }
}
