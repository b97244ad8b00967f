//! Resource - Scopes, resource identity and the element trait

use std::collections::BTreeSet;
use std::fmt;

use crate::inspect::TreeInspector;
use crate::record::PropertyMap;
use crate::render::{JsonRenderer, Renderer};
use crate::schema::{RecordSchema, TypeError};
use crate::value::Value;

pub const INSPECT_TYPE_KEY: &str = "aws:cdk:cloudformation:type";
pub const INSPECT_PROPS_KEY: &str = "aws:cdk:cloudformation:props";

/// Construct path token (e.g., `Stack/Device`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    path: Vec<String>,
}

impl Scope {
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            path: vec![id.into()],
        }
    }

    pub fn child(&self, id: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(id.into());
        Self { path }
    }

    /// Slash-separated node path
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Last segment of the path
    pub fn id(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Whether this scope is `other` or nested below it
    pub fn is_within(&self, other: &Scope) -> bool {
        self.path.starts_with(&other.path)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Identity shared by every resource: where it lives and what it is
#[derive(Debug, Clone, PartialEq)]
pub struct CfnResource {
    node: Scope,
    logical_id: String,
    type_name: String,
    depends_on: BTreeSet<String>,
}

impl CfnResource {
    pub fn new(scope: &Scope, id: &str, type_name: impl Into<String>) -> Self {
        Self {
            node: scope.child(id),
            logical_id: id.to_string(),
            type_name: type_name.into(),
            depends_on: BTreeSet::new(),
        }
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn cfn_resource_type(&self) -> &str {
        &self.type_name
    }

    /// Scope of the resource node itself
    pub fn scope(&self) -> &Scope {
        &self.node
    }

    pub fn node_path(&self) -> String {
        self.node.path()
    }

    /// `{"Ref": logical_id}`
    pub fn reference(&self) -> Value {
        Value::Ref(self.logical_id.clone())
    }

    /// `{"Fn::GetAtt": [logical_id, attribute]}`
    pub fn get_att(&self, attribute: &str) -> Value {
        Value::GetAtt {
            logical_id: self.logical_id.clone(),
            attribute: attribute.to_string(),
        }
    }

    pub fn add_depends_on(&mut self, target: &CfnResource) {
        self.depends_on.insert(target.logical_id.clone());
    }

    pub fn depends_on(&self) -> &BTreeSet<String> {
        &self.depends_on
    }
}

/// A resource that can be registered in a stack
pub trait CfnElement: fmt::Debug {
    fn resource(&self) -> &CfnResource;

    fn resource_mut(&mut self) -> &mut CfnResource;

    /// Schema of the resource properties
    fn schema(&self) -> RecordSchema;

    /// Present properties, with managed tags applied
    fn cfn_properties(&self) -> PropertyMap;

    fn render_properties(&self, renderer: &dyn Renderer) -> serde_json::Value {
        renderer.render_properties(&self.cfn_properties())
    }

    fn validate(&self) -> Result<(), Vec<TypeError>> {
        self.schema().validate(&self.cfn_properties())
    }

    fn inspect(&self, inspector: &mut dyn TreeInspector) {
        inspector.add_attribute(
            INSPECT_TYPE_KEY,
            serde_json::Value::String(self.resource().cfn_resource_type().to_string()),
        );
        inspector.add_attribute(INSPECT_PROPS_KEY, self.render_properties(&JsonRenderer));
    }
}

/// Untyped resource: a type name and a raw property map
///
/// Properties are read and written through the low-level
/// [`property`](Self::property) / [`set_property`](Self::set_property) pair.
/// No schema is attached, so [`CfnElement::validate`] always passes; use a
/// resource type registry to check it against a known schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResource {
    resource: CfnResource,
    properties: PropertyMap,
}

impl RawResource {
    pub fn new(scope: &Scope, id: &str, type_name: impl Into<String>) -> Self {
        Self {
            resource: CfnResource::new(scope, id, type_name),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_property(mut self, key: &str, cfn_key: &str, value: impl Into<Value>) -> Self {
        self.set_property(key, cfn_key, value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: &str, cfn_key: &str, value: impl Into<Value>) {
        self.properties.set(key, cfn_key, value.into());
    }

    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

impl CfnElement for RawResource {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }

    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }

    fn schema(&self) -> RecordSchema {
        RecordSchema::new(self.resource.cfn_resource_type())
    }

    fn cfn_properties(&self) -> PropertyMap {
        self.properties.clone()
    }

    fn validate(&self) -> Result<(), Vec<TypeError>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::AttributeCollector;
    use serde_json::json;

    #[test]
    fn scope_paths() {
        let stack = Scope::root("Stack");
        let device = stack.child("Device");

        assert_eq!(device.path(), "Stack/Device");
        assert_eq!(device.id(), "Device");
        assert!(device.is_within(&stack));
        assert!(!stack.is_within(&device));
        assert!(!device.is_within(&Scope::root("Other")));
    }

    #[test]
    fn resource_identity_and_references() {
        let stack = Scope::root("Stack");
        let resource = CfnResource::new(&stack, "Sensor", "AWS::IoT::Thing");

        assert_eq!(resource.logical_id(), "Sensor");
        assert_eq!(resource.node_path(), "Stack/Sensor");
        assert_eq!(resource.cfn_resource_type(), "AWS::IoT::Thing");
        assert_eq!(resource.reference(), Value::Ref("Sensor".to_string()));
        assert_eq!(
            resource.get_att("Arn"),
            Value::GetAtt {
                logical_id: "Sensor".to_string(),
                attribute: "Arn".to_string(),
            }
        );
    }

    #[test]
    fn depends_on_is_a_set() {
        let stack = Scope::root("Stack");
        let policy = CfnResource::new(&stack, "Policy", "AWS::IoT::Policy");
        let mut attachment =
            CfnResource::new(&stack, "Attachment", "AWS::IoT::PolicyPrincipalAttachment");

        attachment.add_depends_on(&policy);
        attachment.add_depends_on(&policy);
        assert_eq!(attachment.depends_on().len(), 1);
        assert!(attachment.depends_on().contains("Policy"));
    }

    #[test]
    fn raw_resource_property_access() {
        let stack = Scope::root("Stack");
        let mut raw = RawResource::new(&stack, "Thing", "AWS::IoT::Thing")
            .with_property("thing_name", "ThingName", "sensor-1");

        assert_eq!(raw.property("thing_name"), Some(&Value::from("sensor-1")));
        assert_eq!(raw.property("attribute_payload"), None);

        raw.set_property("thing_name", "ThingName", "sensor-2");
        assert_eq!(raw.property("thing_name"), Some(&Value::from("sensor-2")));
        assert_eq!(raw.remove_property("thing_name"), Some(Value::from("sensor-2")));
        assert!(raw.properties().is_empty());
    }

    #[test]
    fn inspect_discloses_type_and_props() {
        let stack = Scope::root("Stack");
        let raw = RawResource::new(&stack, "Thing", "AWS::IoT::Thing")
            .with_property("thing_name", "ThingName", "sensor-1");

        let mut collector = AttributeCollector::new();
        raw.inspect(&mut collector);

        assert_eq!(
            collector.get(INSPECT_TYPE_KEY),
            Some(&json!("AWS::IoT::Thing"))
        );
        assert_eq!(
            collector.get(INSPECT_PROPS_KEY),
            Some(&json!({"ThingName": "sensor-1"}))
        );
    }
}
