//! AWS::IoT::ThingPrincipalAttachment
//!
//! Attaches the specified principal to the specified thing.
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::ThingPrincipalAttachment
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
/// Properties for defining a `AWS::IoT::ThingPrincipalAttachment`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnThingPrincipalAttachmentProps {
    principal: String,
    thing_name: String,
}
impl CfnThingPrincipalAttachmentProps {
    pub fn builder() -> CfnThingPrincipalAttachmentPropsBuilder {
        CfnThingPrincipalAttachmentPropsBuilder::default()
    }
    /// The principal, which can be a certificate ARN or an Amazon Cognito ID.
    pub fn principal(&self) -> &str {
        &self.principal
    }
    /// The name of the AWS IoT thing.
    pub fn thing_name(&self) -> &str {
        &self.thing_name
    }
}
/// Builder for [`CfnThingPrincipalAttachmentProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnThingPrincipalAttachmentPropsBuilder {
    principal: Option<String>,
    thing_name: Option<String>,
}
impl CfnThingPrincipalAttachmentPropsBuilder {
    pub fn principal(mut self, value: impl Into<String>) -> Self {
        self.principal = Some(value.into());
        self
    }
    pub fn thing_name(mut self, value: impl Into<String>) -> Self {
        self.thing_name = Some(value.into());
        self
    }
    pub fn build(self) -> Result<CfnThingPrincipalAttachmentProps, RecordError> {
        Ok(CfnThingPrincipalAttachmentProps {
            principal: self
                .principal
                .ok_or_else(|| RecordError::missing(CfnThingPrincipalAttachmentProps::TYPE_NAME, "principal"))?,
            thing_name: self
                .thing_name
                .ok_or_else(|| RecordError::missing(CfnThingPrincipalAttachmentProps::TYPE_NAME, "thing_name"))?,
        })
    }
}
impl PropertyRecord for CfnThingPrincipalAttachmentProps {
    const TYPE_NAME: &'static str = "CfnThingPrincipalAttachmentProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Properties for defining a `AWS::IoT::ThingPrincipalAttachment`",
            )
            .attribute(
                AttributeSchema::new("principal", AttributeType::String)
                    .required()
                    .with_description(
                        "The principal, which can be a certificate ARN or an Amazon Cognito ID.",
                    )
                    .with_provider_name("Principal"),
            )
            .attribute(
                AttributeSchema::new("thing_name", AttributeType::String)
                    .required()
                    .with_description("The name of the AWS IoT thing.")
                    .with_provider_name("ThingName"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("principal", "Principal", &self.principal);
        map.insert("thing_name", "ThingName", &self.thing_name);
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            principal: map.required(Self::TYPE_NAME, "principal")?,
            thing_name: map.required(Self::TYPE_NAME, "thing_name")?,
        })
    }
}
impl PropertyValue for CfnThingPrincipalAttachmentProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnThingPrincipalAttachmentProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::ThingPrincipalAttachment`
#[derive(Debug, Clone)]
pub struct CfnThingPrincipalAttachment {
    resource: CfnResource,
    props: CfnThingPrincipalAttachmentProps,
}
impl CfnThingPrincipalAttachment {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::ThingPrincipalAttachment";
    pub fn new(
        scope: &Scope,
        id: &str,
        props: CfnThingPrincipalAttachmentProps,
    ) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            props,
        }
    }
    pub fn props(&self) -> &CfnThingPrincipalAttachmentProps {
        &self.props
    }
    /// `Fn::GetAtt` reference to `Id`
    pub fn attr_id(&self) -> Value {
        self.resource.get_att("Id")
    }
    pub fn principal(&self) -> &str {
        self.props.principal()
    }
    pub fn set_principal(&mut self, value: impl Into<String>) {
        self.props.principal = value.into();
    }
    pub fn thing_name(&self) -> &str {
        self.props.thing_name()
    }
    pub fn set_thing_name(&mut self, value: impl Into<String>) {
        self.props.thing_name = value.into();
    }
}
impl CfnElement for CfnThingPrincipalAttachment {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnThingPrincipalAttachmentProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        self.props.to_properties()
    }
}
/// Registry entry for `AWS::IoT::ThingPrincipalAttachment`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnThingPrincipalAttachment::CFN_RESOURCE_TYPE_NAME,
        taggable: false,
        schema: CfnThingPrincipalAttachmentProps::schema(),
    }
}
