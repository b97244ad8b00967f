//! AWS::IoT::Policy
//!
//! Resource Type definition for AWS::IoT::Policy
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::Policy
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
use cfnkit_core::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use cfnkit_core::resource::{CfnElement, CfnResource, Scope};
use cfnkit_core::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use cfnkit_core::value::Value;
use std::fmt;
use crate::ResourceTypeInfo;
/// Properties for defining a `AWS::IoT::Policy`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnPolicyProps {
    policy_document: Value,
    policy_name: Option<String>,
}
impl CfnPolicyProps {
    pub fn builder() -> CfnPolicyPropsBuilder {
        CfnPolicyPropsBuilder::default()
    }
    /// The JSON document that describes the policy.
    pub fn policy_document(&self) -> &Value {
        &self.policy_document
    }
    /// The policy name.
    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }
}
/// Builder for [`CfnPolicyProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnPolicyPropsBuilder {
    policy_document: Option<Value>,
    policy_name: Option<String>,
}
impl CfnPolicyPropsBuilder {
    pub fn policy_document(mut self, value: impl Into<Value>) -> Self {
        self.policy_document = Some(value.into());
        self
    }
    pub fn policy_name(mut self, value: impl Into<String>) -> Self {
        self.policy_name = Some(value.into());
        self
    }
    pub fn build(self) -> Result<CfnPolicyProps, RecordError> {
        Ok(CfnPolicyProps {
            policy_document: self
                .policy_document
                .ok_or_else(|| RecordError::missing(CfnPolicyProps::TYPE_NAME, "policy_document"))?,
            policy_name: self.policy_name,
        })
    }
}
impl PropertyRecord for CfnPolicyProps {
    const TYPE_NAME: &'static str = "CfnPolicyProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::IoT::Policy`")
            .attribute(
                AttributeSchema::new("policy_document", AttributeType::Json)
                    .required()
                    .with_description("The JSON document that describes the policy.")
                    .with_provider_name("PolicyDocument"),
            )
            .attribute(
                AttributeSchema::new("policy_name", AttributeType::String)
                    .with_description("The policy name.")
                    .with_provider_name("PolicyName"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("policy_document", "PolicyDocument", &self.policy_document);
        map.insert_opt("policy_name", "PolicyName", self.policy_name.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            policy_document: map.required(Self::TYPE_NAME, "policy_document")?,
            policy_name: map.optional(Self::TYPE_NAME, "policy_name")?,
        })
    }
}
impl PropertyValue for CfnPolicyProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnPolicyProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::Policy`
#[derive(Debug, Clone)]
pub struct CfnPolicy {
    resource: CfnResource,
    props: CfnPolicyProps,
}
impl CfnPolicy {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::Policy";
    pub fn new(scope: &Scope, id: &str, props: CfnPolicyProps) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            props,
        }
    }
    pub fn props(&self) -> &CfnPolicyProps {
        &self.props
    }
    /// `Fn::GetAtt` reference to `Arn`
    pub fn attr_arn(&self) -> Value {
        self.resource.get_att("Arn")
    }
    /// `Fn::GetAtt` reference to `Id`
    pub fn attr_id(&self) -> Value {
        self.resource.get_att("Id")
    }
    pub fn policy_document(&self) -> &Value {
        self.props.policy_document()
    }
    pub fn set_policy_document(&mut self, value: impl Into<Value>) {
        self.props.policy_document = value.into();
    }
    pub fn policy_name(&self) -> Option<&str> {
        self.props.policy_name()
    }
    pub fn set_policy_name(&mut self, value: Option<String>) {
        self.props.policy_name = value;
    }
}
impl CfnElement for CfnPolicy {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnPolicyProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        self.props.to_properties()
    }
}
/// Registry entry for `AWS::IoT::Policy`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnPolicy::CFN_RESOURCE_TYPE_NAME,
        taggable: false,
        schema: CfnPolicyProps::schema(),
    }
}
