//! Stack - Resource registration and template synthesis

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::render::Renderer;
use crate::resource::{CfnElement, Scope};
use crate::schema::TypeError;
use crate::value::Value;

/// Schema errors reported for a single resource
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub logical_id: String,
    pub errors: Vec<TypeError>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}: {}", self.logical_id, messages.join("; "))
    }
}

/// Errors raised while building or synthesizing a stack
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StackError {
    /// Logical ids must be non-empty and alphanumeric
    #[error("Invalid logical id '{0}': must be non-empty and alphanumeric")]
    InvalidLogicalId(String),

    #[error("Duplicate logical id: {0}")]
    DuplicateLogicalId(String),

    /// The resource was created under a different scope
    #[error("Resource '{path}' does not belong to stack '{stack}'")]
    ForeignScope { path: String, stack: String },

    #[error("Resource '{logical_id}' depends on unknown resource '{target}'")]
    UnknownDependency { logical_id: String, target: String },

    /// A `Ref` or `Fn::GetAtt` names a resource that is not in the stack
    #[error("'{referrer}' refers to unknown resource '{target}'")]
    UnknownReference { referrer: String, target: String },

    #[error("Validation failed: {}", format_failures(.failures))]
    Validation { failures: Vec<ValidationFailure> },

    #[error("Duplicate output: {0}")]
    DuplicateOutput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn format_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_valid_logical_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Fail on the first reference to a resource outside `known`
///
/// Pseudo parameters such as `AWS::Region` are not resources and pass.
fn check_references<'a>(
    referrer: &str,
    values: impl IntoIterator<Item = &'a Value>,
    known: &BTreeSet<&str>,
) -> Result<(), StackError> {
    for value in values {
        if let Some(target) = value
            .referenced_ids()
            .into_iter()
            .find(|id| !id.starts_with("AWS::") && !known.contains(id))
        {
            return Err(StackError::UnknownReference {
                referrer: referrer.to_string(),
                target: target.to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct TemplateDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    resources: BTreeMap<String, ResourceDocument>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    outputs: BTreeMap<String, OutputDocument>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResourceDocument {
    #[serde(rename = "Type")]
    resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    depends_on: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OutputDocument {
    value: serde_json::Value,
}

/// Registration tree root: owns resources keyed by logical id
#[derive(Debug)]
pub struct Stack {
    scope: Scope,
    description: Option<String>,
    elements: Vec<Box<dyn CfnElement>>,
    outputs: BTreeMap<String, Value>,
}

impl Stack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scope: Scope::root(name),
            description: None,
            elements: Vec::new(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Scope to create resources under
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Register a resource
    pub fn add<E: CfnElement + 'static>(&mut self, element: E) -> Result<(), StackError> {
        let resource = element.resource();
        let logical_id = resource.logical_id().to_string();

        if !is_valid_logical_id(&logical_id) {
            log::warn!("Rejected logical id '{}'", logical_id);
            return Err(StackError::InvalidLogicalId(logical_id));
        }
        if !resource.scope().is_within(&self.scope) {
            return Err(StackError::ForeignScope {
                path: resource.node_path(),
                stack: self.scope.path(),
            });
        }
        if self.get(&logical_id).is_some() {
            log::warn!("Rejected duplicate logical id '{}'", logical_id);
            return Err(StackError::DuplicateLogicalId(logical_id));
        }

        log::debug!(
            "Registered {} as {}",
            resource.cfn_resource_type(),
            resource.node_path()
        );
        self.elements.push(Box::new(element));
        Ok(())
    }

    pub fn get(&self, logical_id: &str) -> Option<&dyn CfnElement> {
        self.elements
            .iter()
            .find(|e| e.resource().logical_id() == logical_id)
            .map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Logical ids in registration order
    pub fn logical_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .map(|e| e.resource().logical_id())
            .collect()
    }

    pub fn add_output(&mut self, name: &str, value: impl Into<Value>) -> Result<(), StackError> {
        if !is_valid_logical_id(name) {
            return Err(StackError::InvalidLogicalId(name.to_string()));
        }
        if self.outputs.contains_key(name) {
            return Err(StackError::DuplicateOutput(name.to_string()));
        }
        self.outputs.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Check every resource against its schema, collecting all failures
    pub fn validate(&self) -> Result<(), StackError> {
        let failures: Vec<ValidationFailure> = self
            .elements
            .iter()
            .filter_map(|e| {
                e.validate().err().map(|errors| ValidationFailure {
                    logical_id: e.resource().logical_id().to_string(),
                    errors,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(StackError::Validation { failures })
        }
    }

    /// Produce the template document
    pub fn synthesize(&self, renderer: &dyn Renderer) -> Result<serde_json::Value, StackError> {
        let known: BTreeSet<&str> = self
            .elements
            .iter()
            .map(|e| e.resource().logical_id())
            .collect();

        let mut resources = BTreeMap::new();
        for element in &self.elements {
            let resource = element.resource();
            if let Some(target) = resource
                .depends_on()
                .iter()
                .find(|t| !known.contains(t.as_str()))
            {
                return Err(StackError::UnknownDependency {
                    logical_id: resource.logical_id().to_string(),
                    target: target.clone(),
                });
            }

            let properties = element.cfn_properties();
            check_references(
                resource.logical_id(),
                properties.iter().map(|p| &p.value),
                &known,
            )?;
            let rendered = if properties.is_empty() {
                None
            } else {
                Some(renderer.render_properties(&properties))
            };

            resources.insert(
                resource.logical_id().to_string(),
                ResourceDocument {
                    resource_type: resource.cfn_resource_type().to_string(),
                    properties: rendered,
                    depends_on: resource.depends_on().iter().cloned().collect(),
                },
            );
        }

        for (name, value) in &self.outputs {
            check_references(name, [value], &known)?;
        }
        let outputs = self
            .outputs
            .iter()
            .map(|(name, value)| {
                (
                    name.clone(),
                    OutputDocument {
                        value: renderer.render_value(value),
                    },
                )
            })
            .collect();

        let document = TemplateDocument {
            description: self.description.clone(),
            resources,
            outputs,
        };

        log::debug!(
            "Synthesized stack '{}' with {} resources",
            self.scope.path(),
            self.elements.len()
        );
        serde_json::to_value(&document).map_err(|e| StackError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PropertyMap;
    use crate::render::JsonRenderer;
    use crate::resource::{CfnResource, RawResource};
    use crate::schema::{AttributeSchema, AttributeType, RecordSchema};
    use serde_json::json;

    #[derive(Debug)]
    struct Policy {
        resource: CfnResource,
        document: Option<String>,
    }

    impl CfnElement for Policy {
        fn resource(&self) -> &CfnResource {
            &self.resource
        }

        fn resource_mut(&mut self) -> &mut CfnResource {
            &mut self.resource
        }

        fn schema(&self) -> RecordSchema {
            RecordSchema::new("PolicyProps").attribute(
                AttributeSchema::new("policy_document", AttributeType::String)
                    .required()
                    .with_provider_name("PolicyDocument"),
            )
        }

        fn cfn_properties(&self) -> PropertyMap {
            let mut map = PropertyMap::new();
            map.insert_opt("policy_document", "PolicyDocument", self.document.as_ref());
            map
        }
    }

    fn policy(stack: &Stack, id: &str, document: Option<&str>) -> Policy {
        Policy {
            resource: CfnResource::new(stack.scope(), id, "AWS::IoT::Policy"),
            document: document.map(str::to_string),
        }
    }

    #[test]
    fn rejects_malformed_logical_ids() {
        let mut stack = Stack::new("Stack");
        let err = stack
            .add(RawResource::new(stack.scope(), "my-thing", "AWS::IoT::Thing"))
            .unwrap_err();
        assert_eq!(err, StackError::InvalidLogicalId("my-thing".to_string()));

        let err = stack
            .add(RawResource::new(stack.scope(), "", "AWS::IoT::Thing"))
            .unwrap_err();
        assert!(matches!(err, StackError::InvalidLogicalId(_)));
        assert!(stack.is_empty());
    }

    #[test]
    fn rejects_duplicate_logical_ids() {
        let mut stack = Stack::new("Stack");
        stack
            .add(RawResource::new(stack.scope(), "Thing", "AWS::IoT::Thing"))
            .unwrap();
        let err = stack
            .add(RawResource::new(stack.scope(), "Thing", "AWS::IoT::Policy"))
            .unwrap_err();

        assert_eq!(err, StackError::DuplicateLogicalId("Thing".to_string()));
        assert_eq!(stack.logical_ids(), vec!["Thing"]);
    }

    #[test]
    fn rejects_resources_from_other_stacks() {
        let mut stack = Stack::new("Stack");
        let other = Scope::root("Other");
        let err = stack
            .add(RawResource::new(&other, "Thing", "AWS::IoT::Thing"))
            .unwrap_err();

        assert_eq!(
            err,
            StackError::ForeignScope {
                path: "Other/Thing".to_string(),
                stack: "Stack".to_string(),
            }
        );
    }

    #[test]
    fn synthesizes_template() {
        let mut stack = Stack::new("Stack").with_description("IoT fleet");
        let policy = policy(&stack, "Policy", Some("{}"));
        let policy_ref = policy.resource().reference();
        let mut thing = RawResource::new(stack.scope(), "Thing", "AWS::IoT::Thing");
        thing.resource_mut().add_depends_on(policy.resource());

        stack.add(policy).unwrap();
        stack.add(thing).unwrap();
        stack.add_output("PolicyName", policy_ref).unwrap();

        let template = stack.synthesize(&JsonRenderer).unwrap();
        assert_eq!(
            template,
            json!({
                "Description": "IoT fleet",
                "Resources": {
                    "Policy": {
                        "Type": "AWS::IoT::Policy",
                        "Properties": {"PolicyDocument": "{}"}
                    },
                    "Thing": {
                        "Type": "AWS::IoT::Thing",
                        "DependsOn": ["Policy"]
                    }
                },
                "Outputs": {
                    "PolicyName": {"Value": {"Ref": "Policy"}}
                }
            })
        );
    }

    #[test]
    fn minimal_template_has_only_resources() {
        let stack = Stack::new("Empty");
        assert_eq!(
            stack.synthesize(&JsonRenderer).unwrap(),
            json!({"Resources": {}})
        );
    }

    #[test]
    fn rejects_dangling_depends_on() {
        let mut stack = Stack::new("Stack");
        let orphan = policy(&stack, "Orphan", Some("{}"));
        let mut thing = RawResource::new(stack.scope(), "Thing", "AWS::IoT::Thing");
        thing.resource_mut().add_depends_on(orphan.resource());
        stack.add(thing).unwrap();

        let err = stack.synthesize(&JsonRenderer).unwrap_err();
        assert_eq!(
            err,
            StackError::UnknownDependency {
                logical_id: "Thing".to_string(),
                target: "Orphan".to_string(),
            }
        );
    }

    #[test]
    fn rejects_references_to_unknown_resources() {
        let mut stack = Stack::new("Stack");
        stack
            .add(
                RawResource::new(stack.scope(), "Attachment", "AWS::IoT::ThingPrincipalAttachment")
                    .with_property("thing_name", "ThingName", Value::Ref("Missing".to_string()))
                    .with_property("principal", "Principal", Value::Ref("AWS::AccountId".to_string())),
            )
            .unwrap();

        assert_eq!(
            stack.synthesize(&JsonRenderer).unwrap_err(),
            StackError::UnknownReference {
                referrer: "Attachment".to_string(),
                target: "Missing".to_string(),
            }
        );

        stack.add(policy(&stack, "Missing", Some("{}"))).unwrap();
        assert!(stack.synthesize(&JsonRenderer).is_ok());
    }

    #[test]
    fn rejects_outputs_referring_to_unknown_resources() {
        let mut stack = Stack::new("Stack");
        stack.add(policy(&stack, "Policy", Some("{}"))).unwrap();
        stack
            .add_output(
                "CertArn",
                Value::GetAtt {
                    logical_id: "Cert".to_string(),
                    attribute: "Arn".to_string(),
                },
            )
            .unwrap();

        assert_eq!(
            stack.synthesize(&JsonRenderer).unwrap_err(),
            StackError::UnknownReference {
                referrer: "CertArn".to_string(),
                target: "Cert".to_string(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_outputs() {
        let mut stack = Stack::new("Stack");
        stack.add_output("Arn", "arn:aws:iot:::thing/x").unwrap();
        assert_eq!(
            stack.add_output("Arn", "other").unwrap_err(),
            StackError::DuplicateOutput("Arn".to_string())
        );
    }

    #[test]
    fn validate_collects_every_failure() {
        let mut stack = Stack::new("Stack");
        stack.add(policy(&stack, "Good", Some("{}"))).unwrap();
        stack.add(policy(&stack, "Bad", None)).unwrap();
        stack.add(policy(&stack, "AlsoBad", None)).unwrap();

        let Err(StackError::Validation { failures }) = stack.validate() else {
            panic!("Expected validation failure");
        };
        let ids: Vec<&str> = failures.iter().map(|f| f.logical_id.as_str()).collect();
        assert_eq!(ids, vec!["Bad", "AlsoBad"]);
        assert!(matches!(
            failures[0].errors[0],
            TypeError::MissingRequired { .. }
        ));
    }
}
