//! AWS::IoT::PolicyPrincipalAttachment
//!
//! Attaches the specified policy to the specified principal (certificate or other credential).
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::PolicyPrincipalAttachment
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
/// Properties for defining a `AWS::IoT::PolicyPrincipalAttachment`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnPolicyPrincipalAttachmentProps {
    policy_name: String,
    principal: String,
}
impl CfnPolicyPrincipalAttachmentProps {
    pub fn builder() -> CfnPolicyPrincipalAttachmentPropsBuilder {
        CfnPolicyPrincipalAttachmentPropsBuilder::default()
    }
    /// The name of the AWS IoT policy.
    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }
    /// The principal, which can be a certificate ARN or an Amazon Cognito ID.
    pub fn principal(&self) -> &str {
        &self.principal
    }
}
/// Builder for [`CfnPolicyPrincipalAttachmentProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnPolicyPrincipalAttachmentPropsBuilder {
    policy_name: Option<String>,
    principal: Option<String>,
}
impl CfnPolicyPrincipalAttachmentPropsBuilder {
    pub fn policy_name(mut self, value: impl Into<String>) -> Self {
        self.policy_name = Some(value.into());
        self
    }
    pub fn principal(mut self, value: impl Into<String>) -> Self {
        self.principal = Some(value.into());
        self
    }
    pub fn build(self) -> Result<CfnPolicyPrincipalAttachmentProps, RecordError> {
        Ok(CfnPolicyPrincipalAttachmentProps {
            policy_name: self
                .policy_name
                .ok_or_else(|| RecordError::missing(CfnPolicyPrincipalAttachmentProps::TYPE_NAME, "policy_name"))?,
            principal: self
                .principal
                .ok_or_else(|| RecordError::missing(CfnPolicyPrincipalAttachmentProps::TYPE_NAME, "principal"))?,
        })
    }
}
impl PropertyRecord for CfnPolicyPrincipalAttachmentProps {
    const TYPE_NAME: &'static str = "CfnPolicyPrincipalAttachmentProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Properties for defining a `AWS::IoT::PolicyPrincipalAttachment`",
            )
            .attribute(
                AttributeSchema::new("policy_name", AttributeType::String)
                    .required()
                    .with_description("The name of the AWS IoT policy.")
                    .with_provider_name("PolicyName"),
            )
            .attribute(
                AttributeSchema::new("principal", AttributeType::String)
                    .required()
                    .with_description(
                        "The principal, which can be a certificate ARN or an Amazon Cognito ID.",
                    )
                    .with_provider_name("Principal"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("policy_name", "PolicyName", &self.policy_name);
        map.insert("principal", "Principal", &self.principal);
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            policy_name: map.required(Self::TYPE_NAME, "policy_name")?,
            principal: map.required(Self::TYPE_NAME, "principal")?,
        })
    }
}
impl PropertyValue for CfnPolicyPrincipalAttachmentProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnPolicyPrincipalAttachmentProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::PolicyPrincipalAttachment`
#[derive(Debug, Clone)]
pub struct CfnPolicyPrincipalAttachment {
    resource: CfnResource,
    props: CfnPolicyPrincipalAttachmentProps,
}
impl CfnPolicyPrincipalAttachment {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::PolicyPrincipalAttachment";
    pub fn new(
        scope: &Scope,
        id: &str,
        props: CfnPolicyPrincipalAttachmentProps,
    ) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            props,
        }
    }
    pub fn props(&self) -> &CfnPolicyPrincipalAttachmentProps {
        &self.props
    }
    /// `Fn::GetAtt` reference to `Id`
    pub fn attr_id(&self) -> Value {
        self.resource.get_att("Id")
    }
    pub fn policy_name(&self) -> &str {
        self.props.policy_name()
    }
    pub fn set_policy_name(&mut self, value: impl Into<String>) {
        self.props.policy_name = value.into();
    }
    pub fn principal(&self) -> &str {
        self.props.principal()
    }
    pub fn set_principal(&mut self, value: impl Into<String>) {
        self.props.principal = value.into();
    }
}
impl CfnElement for CfnPolicyPrincipalAttachment {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnPolicyPrincipalAttachmentProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        self.props.to_properties()
    }
}
/// Registry entry for `AWS::IoT::PolicyPrincipalAttachment`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnPolicyPrincipalAttachment::CFN_RESOURCE_TYPE_NAME,
        taggable: false,
        schema: CfnPolicyPrincipalAttachmentProps::schema(),
    }
}
