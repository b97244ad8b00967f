//! AWS::Cloud9::EnvironmentEC2
//!
//! Resource Type definition for AWS::Cloud9::EnvironmentEC2
//!
//! Auto-generated from CloudFormation schema: AWS::Cloud9::EnvironmentEC2
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
use cfnkit_core::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use cfnkit_core::resource::{CfnElement, CfnResource, Scope};
use cfnkit_core::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use cfnkit_core::tag::{CfnTag, TagManager, TagType};
use cfnkit_core::value::Value;
use std::fmt;
use crate::ResourceTypeInfo;
/// Properties for defining a `AWS::Cloud9::EnvironmentEC2`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnEnvironmentEC2Props {
    instance_type: String,
    automatic_stop_time_minutes: Option<i64>,
    connection_type: Option<String>,
    description: Option<String>,
    image_id: Option<String>,
    name: Option<String>,
    owner_arn: Option<String>,
    repositories: Option<Vec<RepositoryProperty>>,
    subnet_id: Option<String>,
    tags: Option<Vec<CfnTag>>,
}
impl CfnEnvironmentEC2Props {
    pub fn builder() -> CfnEnvironmentEC2PropsBuilder {
        CfnEnvironmentEC2PropsBuilder::default()
    }
    /// The type of instance to connect to the environment (for example, t2.micro).
    pub fn instance_type(&self) -> &str {
        &self.instance_type
    }
    /// The number of minutes until the running instance is shut down after the environment was last used.
    pub fn automatic_stop_time_minutes(&self) -> Option<i64> {
        self.automatic_stop_time_minutes
    }
    /// The connection type used for connecting to an Amazon EC2 environment.
    pub fn connection_type(&self) -> Option<&str> {
        self.connection_type.as_deref()
    }
    /// The description of the environment to create.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    /// The identifier for the Amazon Machine Image (AMI) that's used to create the EC2 instance.
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }
    /// The name of the environment.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// The Amazon Resource Name (ARN) of the environment owner.
    pub fn owner_arn(&self) -> Option<&str> {
        self.owner_arn.as_deref()
    }
    /// Any AWS CodeCommit source code repositories to be cloned into the development environment.
    pub fn repositories(&self) -> Option<&[RepositoryProperty]> {
        self.repositories.as_deref()
    }
    /// The ID of the subnet in Amazon Virtual Private Cloud (Amazon VPC) that AWS Cloud9 will use to communicate with the Amazon EC2 instance.
    pub fn subnet_id(&self) -> Option<&str> {
        self.subnet_id.as_deref()
    }
    /// An array of key-value pairs that will be associated with the new AWS Cloud9 development environment.
    pub fn tags(&self) -> Option<&[CfnTag]> {
        self.tags.as_deref()
    }
}
/// Builder for [`CfnEnvironmentEC2Props`]
#[derive(Debug, Clone, Default)]
pub struct CfnEnvironmentEC2PropsBuilder {
    instance_type: Option<String>,
    automatic_stop_time_minutes: Option<i64>,
    connection_type: Option<String>,
    description: Option<String>,
    image_id: Option<String>,
    name: Option<String>,
    owner_arn: Option<String>,
    repositories: Option<Vec<RepositoryProperty>>,
    subnet_id: Option<String>,
    tags: Option<Vec<CfnTag>>,
}
impl CfnEnvironmentEC2PropsBuilder {
    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.instance_type = Some(value.into());
        self
    }
    pub fn automatic_stop_time_minutes(mut self, value: i64) -> Self {
        self.automatic_stop_time_minutes = Some(value);
        self
    }
    pub fn connection_type(mut self, value: impl Into<String>) -> Self {
        self.connection_type = Some(value.into());
        self
    }
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
    pub fn image_id(mut self, value: impl Into<String>) -> Self {
        self.image_id = Some(value.into());
        self
    }
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
    pub fn owner_arn(mut self, value: impl Into<String>) -> Self {
        self.owner_arn = Some(value.into());
        self
    }
    pub fn repositories(mut self, value: Vec<RepositoryProperty>) -> Self {
        self.repositories = Some(value);
        self
    }
    pub fn subnet_id(mut self, value: impl Into<String>) -> Self {
        self.subnet_id = Some(value.into());
        self
    }
    pub fn tags(mut self, value: Vec<CfnTag>) -> Self {
        self.tags = Some(value);
        self
    }
    pub fn build(self) -> Result<CfnEnvironmentEC2Props, RecordError> {
        Ok(CfnEnvironmentEC2Props {
            instance_type: self
                .instance_type
                .ok_or_else(|| RecordError::missing(CfnEnvironmentEC2Props::TYPE_NAME, "instance_type"))?,
            automatic_stop_time_minutes: self.automatic_stop_time_minutes,
            connection_type: self.connection_type,
            description: self.description,
            image_id: self.image_id,
            name: self.name,
            owner_arn: self.owner_arn,
            repositories: self.repositories,
            subnet_id: self.subnet_id,
            tags: self.tags,
        })
    }
}
impl PropertyRecord for CfnEnvironmentEC2Props {
    const TYPE_NAME: &'static str = "CfnEnvironmentEC2Props";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::Cloud9::EnvironmentEC2`")
            .attribute(
                AttributeSchema::new("instance_type", AttributeType::String)
                    .required()
                    .with_description(
                        "The type of instance to connect to the environment (for example, t2.micro).",
                    )
                    .with_provider_name("InstanceType"),
            )
            .attribute(
                AttributeSchema::new("automatic_stop_time_minutes", AttributeType::Int)
                    .with_description(
                        "The number of minutes until the running instance is shut down after the environment was last used.",
                    )
                    .with_provider_name("AutomaticStopTimeMinutes"),
            )
            .attribute(
                AttributeSchema::new("connection_type", AttributeType::String)
                    .with_description(
                        "The connection type used for connecting to an Amazon EC2 environment.",
                    )
                    .with_provider_name("ConnectionType"),
            )
            .attribute(
                AttributeSchema::new("description", AttributeType::String)
                    .with_description("The description of the environment to create.")
                    .with_provider_name("Description"),
            )
            .attribute(
                AttributeSchema::new("image_id", AttributeType::String)
                    .with_description(
                        "The identifier for the Amazon Machine Image (AMI) that's used to create the EC2 instance.",
                    )
                    .with_provider_name("ImageId"),
            )
            .attribute(
                AttributeSchema::new("name", AttributeType::String)
                    .with_description("The name of the environment.")
                    .with_provider_name("Name"),
            )
            .attribute(
                AttributeSchema::new("owner_arn", AttributeType::String)
                    .with_description(
                        "The Amazon Resource Name (ARN) of the environment owner.",
                    )
                    .with_provider_name("OwnerArn"),
            )
            .attribute(
                AttributeSchema::new(
                    "repositories",
                    AttributeType::list(AttributeType::record("RepositoryProperty")),
                )
                    .with_description(
                        "Any AWS CodeCommit source code repositories to be cloned into the development environment.",
                    )
                    .with_provider_name("Repositories"),
            )
            .attribute(
                AttributeSchema::new("subnet_id", AttributeType::String)
                    .with_description(
                        "The ID of the subnet in Amazon Virtual Private Cloud (Amazon VPC) that AWS Cloud9 will use to communicate with the Amazon EC2 instance.",
                    )
                    .with_provider_name("SubnetId"),
            )
            .attribute(
                AttributeSchema::new(
                    "tags",
                    AttributeType::list(AttributeType::record("CfnTag")),
                )
                    .with_description(
                        "An array of key-value pairs that will be associated with the new AWS Cloud9 development environment.",
                    )
                    .with_provider_name("Tags"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("instance_type", "InstanceType", &self.instance_type);
        map.insert_opt(
            "automatic_stop_time_minutes",
            "AutomaticStopTimeMinutes",
            self.automatic_stop_time_minutes.as_ref(),
        );
        map.insert_opt(
            "connection_type",
            "ConnectionType",
            self.connection_type.as_ref(),
        );
        map.insert_opt("description", "Description", self.description.as_ref());
        map.insert_opt("image_id", "ImageId", self.image_id.as_ref());
        map.insert_opt("name", "Name", self.name.as_ref());
        map.insert_opt("owner_arn", "OwnerArn", self.owner_arn.as_ref());
        map.insert_opt("repositories", "Repositories", self.repositories.as_ref());
        map.insert_opt("subnet_id", "SubnetId", self.subnet_id.as_ref());
        map.insert_opt("tags", "Tags", self.tags.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            instance_type: map.required(Self::TYPE_NAME, "instance_type")?,
            automatic_stop_time_minutes: map.optional(Self::TYPE_NAME, "automatic_stop_time_minutes")?,
            connection_type: map.optional(Self::TYPE_NAME, "connection_type")?,
            description: map.optional(Self::TYPE_NAME, "description")?,
            image_id: map.optional(Self::TYPE_NAME, "image_id")?,
            name: map.optional(Self::TYPE_NAME, "name")?,
            owner_arn: map.optional(Self::TYPE_NAME, "owner_arn")?,
            repositories: map.optional(Self::TYPE_NAME, "repositories")?,
            subnet_id: map.optional(Self::TYPE_NAME, "subnet_id")?,
            tags: map.optional(Self::TYPE_NAME, "tags")?,
        })
    }
}
impl PropertyValue for CfnEnvironmentEC2Props {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnEnvironmentEC2Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryProperty {
    path_component: String,
    repository_url: String,
}
impl RepositoryProperty {
    pub fn builder() -> RepositoryPropertyBuilder {
        RepositoryPropertyBuilder::default()
    }
    /// The path within the development environment's default file system location to clone the AWS CodeCommit repository into.
    pub fn path_component(&self) -> &str {
        &self.path_component
    }
    /// The clone URL of the AWS CodeCommit repository to be cloned.
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }
}
/// Builder for [`RepositoryProperty`]
#[derive(Debug, Clone, Default)]
pub struct RepositoryPropertyBuilder {
    path_component: Option<String>,
    repository_url: Option<String>,
}
impl RepositoryPropertyBuilder {
    pub fn path_component(mut self, value: impl Into<String>) -> Self {
        self.path_component = Some(value.into());
        self
    }
    pub fn repository_url(mut self, value: impl Into<String>) -> Self {
        self.repository_url = Some(value.into());
        self
    }
    pub fn build(self) -> Result<RepositoryProperty, RecordError> {
        Ok(RepositoryProperty {
            path_component: self
                .path_component
                .ok_or_else(|| RecordError::missing(RepositoryProperty::TYPE_NAME, "path_component"))?,
            repository_url: self
                .repository_url
                .ok_or_else(|| RecordError::missing(RepositoryProperty::TYPE_NAME, "repository_url"))?,
        })
    }
}
impl PropertyRecord for RepositoryProperty {
    const TYPE_NAME: &'static str = "RepositoryProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .attribute(
                AttributeSchema::new("path_component", AttributeType::String)
                    .required()
                    .with_description(
                        "The path within the development environment's default file system location to clone the AWS CodeCommit repository into.",
                    )
                    .with_provider_name("PathComponent"),
            )
            .attribute(
                AttributeSchema::new("repository_url", AttributeType::String)
                    .required()
                    .with_description(
                        "The clone URL of the AWS CodeCommit repository to be cloned.",
                    )
                    .with_provider_name("RepositoryUrl"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("path_component", "PathComponent", &self.path_component);
        map.insert("repository_url", "RepositoryUrl", &self.repository_url);
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            path_component: map.required(Self::TYPE_NAME, "path_component")?,
            repository_url: map.required(Self::TYPE_NAME, "repository_url")?,
        })
    }
}
impl PropertyValue for RepositoryProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for RepositoryProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::Cloud9::EnvironmentEC2`
#[derive(Debug, Clone)]
pub struct CfnEnvironmentEC2 {
    resource: CfnResource,
    props: CfnEnvironmentEC2Props,
    tags: TagManager,
}
impl CfnEnvironmentEC2 {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::Cloud9::EnvironmentEC2";
    pub fn new(scope: &Scope, id: &str, props: CfnEnvironmentEC2Props) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            tags: TagManager::new(
                TagType::Standard,
                Self::CFN_RESOURCE_TYPE_NAME,
                props.tags.as_deref(),
            ),
            props,
        }
    }
    pub fn props(&self) -> &CfnEnvironmentEC2Props {
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
    pub fn instance_type(&self) -> &str {
        self.props.instance_type()
    }
    pub fn set_instance_type(&mut self, value: impl Into<String>) {
        self.props.instance_type = value.into();
    }
    pub fn automatic_stop_time_minutes(&self) -> Option<i64> {
        self.props.automatic_stop_time_minutes()
    }
    pub fn set_automatic_stop_time_minutes(&mut self, value: Option<i64>) {
        self.props.automatic_stop_time_minutes = value;
    }
    pub fn connection_type(&self) -> Option<&str> {
        self.props.connection_type()
    }
    pub fn set_connection_type(&mut self, value: Option<String>) {
        self.props.connection_type = value;
    }
    pub fn description(&self) -> Option<&str> {
        self.props.description()
    }
    pub fn set_description(&mut self, value: Option<String>) {
        self.props.description = value;
    }
    pub fn image_id(&self) -> Option<&str> {
        self.props.image_id()
    }
    pub fn set_image_id(&mut self, value: Option<String>) {
        self.props.image_id = value;
    }
    pub fn name(&self) -> Option<&str> {
        self.props.name()
    }
    pub fn set_name(&mut self, value: Option<String>) {
        self.props.name = value;
    }
    pub fn owner_arn(&self) -> Option<&str> {
        self.props.owner_arn()
    }
    pub fn set_owner_arn(&mut self, value: Option<String>) {
        self.props.owner_arn = value;
    }
    pub fn repositories(&self) -> Option<&[RepositoryProperty]> {
        self.props.repositories()
    }
    pub fn set_repositories(&mut self, value: Option<Vec<RepositoryProperty>>) {
        self.props.repositories = value;
    }
    pub fn subnet_id(&self) -> Option<&str> {
        self.props.subnet_id()
    }
    pub fn set_subnet_id(&mut self, value: Option<String>) {
        self.props.subnet_id = value;
    }
    pub fn tags(&self) -> &TagManager {
        &self.tags
    }
    pub fn tags_mut(&mut self) -> &mut TagManager {
        &mut self.tags
    }
}
impl CfnElement for CfnEnvironmentEC2 {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnEnvironmentEC2Props::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        let mut map = self.props.to_properties();
        self.tags.apply(&mut map);
        map
    }
}
/// Registry entry for `AWS::Cloud9::EnvironmentEC2`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnEnvironmentEC2::CFN_RESOURCE_TYPE_NAME,
        taggable: true,
        schema: CfnEnvironmentEC2Props::schema(),
    }
}
