//! AWS::IoT::Thing
//!
//! Resource Type definition for AWS::IoT::Thing
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::Thing
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
use cfnkit_core::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use cfnkit_core::resource::{CfnElement, CfnResource, Scope};
use cfnkit_core::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use cfnkit_core::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use crate::ResourceTypeInfo;
/// Properties for defining a `AWS::IoT::Thing`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnThingProps {
    attribute_payload: Option<AttributePayloadProperty>,
    thing_name: Option<String>,
}
impl CfnThingProps {
    pub fn builder() -> CfnThingPropsBuilder {
        CfnThingPropsBuilder::default()
    }
    /// A string that contains up to three key value pairs.
    pub fn attribute_payload(&self) -> Option<&AttributePayloadProperty> {
        self.attribute_payload.as_ref()
    }
    /// The name of the thing to update.
    pub fn thing_name(&self) -> Option<&str> {
        self.thing_name.as_deref()
    }
}
/// Builder for [`CfnThingProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnThingPropsBuilder {
    attribute_payload: Option<AttributePayloadProperty>,
    thing_name: Option<String>,
}
impl CfnThingPropsBuilder {
    pub fn attribute_payload(mut self, value: AttributePayloadProperty) -> Self {
        self.attribute_payload = Some(value);
        self
    }
    pub fn thing_name(mut self, value: impl Into<String>) -> Self {
        self.thing_name = Some(value.into());
        self
    }
    pub fn build(self) -> Result<CfnThingProps, RecordError> {
        Ok(CfnThingProps {
            attribute_payload: self.attribute_payload,
            thing_name: self.thing_name,
        })
    }
}
impl PropertyRecord for CfnThingProps {
    const TYPE_NAME: &'static str = "CfnThingProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::IoT::Thing`")
            .attribute(
                AttributeSchema::new(
                    "attribute_payload",
                    AttributeType::record("AttributePayloadProperty"),
                )
                    .with_description(
                        "A string that contains up to three key value pairs.",
                    )
                    .with_provider_name("AttributePayload"),
            )
            .attribute(
                AttributeSchema::new("thing_name", AttributeType::String)
                    .with_description("The name of the thing to update.")
                    .with_provider_name("ThingName"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt(
            "attribute_payload",
            "AttributePayload",
            self.attribute_payload.as_ref(),
        );
        map.insert_opt("thing_name", "ThingName", self.thing_name.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            attribute_payload: map.optional(Self::TYPE_NAME, "attribute_payload")?,
            thing_name: map.optional(Self::TYPE_NAME, "thing_name")?,
        })
    }
}
impl PropertyValue for CfnThingProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnThingProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
#[derive(Debug, Clone, PartialEq)]
pub struct AttributePayloadProperty {
    attributes: Option<BTreeMap<String, String>>,
}
impl AttributePayloadProperty {
    pub fn builder() -> AttributePayloadPropertyBuilder {
        AttributePayloadPropertyBuilder::default()
    }
    /// A JSON string containing up to three key-value pair in JSON format.
    pub fn attributes(&self) -> Option<&BTreeMap<String, String>> {
        self.attributes.as_ref()
    }
}
/// Builder for [`AttributePayloadProperty`]
#[derive(Debug, Clone, Default)]
pub struct AttributePayloadPropertyBuilder {
    attributes: Option<BTreeMap<String, String>>,
}
impl AttributePayloadPropertyBuilder {
    pub fn attributes(mut self, value: BTreeMap<String, String>) -> Self {
        self.attributes = Some(value);
        self
    }
    pub fn build(self) -> Result<AttributePayloadProperty, RecordError> {
        Ok(AttributePayloadProperty {
            attributes: self.attributes,
        })
    }
}
impl PropertyRecord for AttributePayloadProperty {
    const TYPE_NAME: &'static str = "AttributePayloadProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .attribute(
                AttributeSchema::new(
                    "attributes",
                    AttributeType::map(AttributeType::String),
                )
                    .with_description(
                        "A JSON string containing up to three key-value pair in JSON format.",
                    )
                    .with_provider_name("Attributes"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("attributes", "Attributes", self.attributes.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            attributes: map.optional(Self::TYPE_NAME, "attributes")?,
        })
    }
}
impl PropertyValue for AttributePayloadProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for AttributePayloadProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::Thing`
#[derive(Debug, Clone)]
pub struct CfnThing {
    resource: CfnResource,
    props: CfnThingProps,
}
impl CfnThing {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::Thing";
    pub fn new(scope: &Scope, id: &str, props: CfnThingProps) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            props,
        }
    }
    pub fn props(&self) -> &CfnThingProps {
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
    pub fn attribute_payload(&self) -> Option<&AttributePayloadProperty> {
        self.props.attribute_payload()
    }
    pub fn set_attribute_payload(&mut self, value: Option<AttributePayloadProperty>) {
        self.props.attribute_payload = value;
    }
    pub fn thing_name(&self) -> Option<&str> {
        self.props.thing_name()
    }
    pub fn set_thing_name(&mut self, value: Option<String>) {
        self.props.thing_name = value;
    }
}
impl CfnElement for CfnThing {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnThingProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        self.props.to_properties()
    }
}
/// Registry entry for `AWS::IoT::Thing`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnThing::CFN_RESOURCE_TYPE_NAME,
        taggable: false,
        schema: CfnThingProps::schema(),
    }
}
