//! AWS::IoT::Authorizer
//!
//! Creates an authorizer.
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::Authorizer
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
use cfnkit_core::record::{
    PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value,
};
use cfnkit_core::resource::{CfnElement, CfnResource, Scope};
use cfnkit_core::schema::{AttributeSchema, AttributeType, RecordSchema, TypeError};
use cfnkit_core::tag::{CfnTag, TagManager, TagType};
use cfnkit_core::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use crate::ResourceTypeInfo;
/// Properties for defining a `AWS::IoT::Authorizer`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnAuthorizerProps {
    authorizer_function_arn: String,
    authorizer_name: Option<String>,
    enable_caching_for_http: Option<bool>,
    signing_disabled: Option<bool>,
    status: Option<String>,
    tags: Option<Vec<CfnTag>>,
    token_key_name: Option<String>,
    token_signing_public_keys: Option<BTreeMap<String, String>>,
}
impl CfnAuthorizerProps {
    pub fn builder() -> CfnAuthorizerPropsBuilder {
        CfnAuthorizerPropsBuilder::default()
    }
    /// The authorizer's Lambda function ARN.
    pub fn authorizer_function_arn(&self) -> &str {
        &self.authorizer_function_arn
    }
    /// The authorizer name.
    pub fn authorizer_name(&self) -> Option<&str> {
        self.authorizer_name.as_deref()
    }
    /// When true, the result from the authorizer's Lambda function is cached for clients that use persistent HTTP connections.
    pub fn enable_caching_for_http(&self) -> Option<bool> {
        self.enable_caching_for_http
    }
    /// Specifies whether AWS IoT validates the token signature in an authorization request.
    pub fn signing_disabled(&self) -> Option<bool> {
        self.signing_disabled
    }
    /// The status of the authorizer.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
    /// Metadata which can be used to manage the custom authorizer.
    pub fn tags(&self) -> Option<&[CfnTag]> {
        self.tags.as_deref()
    }
    /// The key used to extract the token from the HTTP headers.
    pub fn token_key_name(&self) -> Option<&str> {
        self.token_key_name.as_deref()
    }
    /// The public keys used to validate the token signature returned by your custom authentication service.
    pub fn token_signing_public_keys(&self) -> Option<&BTreeMap<String, String>> {
        self.token_signing_public_keys.as_ref()
    }
}
/// Builder for [`CfnAuthorizerProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnAuthorizerPropsBuilder {
    authorizer_function_arn: Option<String>,
    authorizer_name: Option<String>,
    enable_caching_for_http: Option<bool>,
    signing_disabled: Option<bool>,
    status: Option<String>,
    tags: Option<Vec<CfnTag>>,
    token_key_name: Option<String>,
    token_signing_public_keys: Option<BTreeMap<String, String>>,
}
impl CfnAuthorizerPropsBuilder {
    pub fn authorizer_function_arn(mut self, value: impl Into<String>) -> Self {
        self.authorizer_function_arn = Some(value.into());
        self
    }
    pub fn authorizer_name(mut self, value: impl Into<String>) -> Self {
        self.authorizer_name = Some(value.into());
        self
    }
    pub fn enable_caching_for_http(mut self, value: bool) -> Self {
        self.enable_caching_for_http = Some(value);
        self
    }
    pub fn signing_disabled(mut self, value: bool) -> Self {
        self.signing_disabled = Some(value);
        self
    }
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
    pub fn tags(mut self, value: Vec<CfnTag>) -> Self {
        self.tags = Some(value);
        self
    }
    pub fn token_key_name(mut self, value: impl Into<String>) -> Self {
        self.token_key_name = Some(value.into());
        self
    }
    pub fn token_signing_public_keys(mut self, value: BTreeMap<String, String>) -> Self {
        self.token_signing_public_keys = Some(value);
        self
    }
    pub fn build(self) -> Result<CfnAuthorizerProps, RecordError> {
        Ok(CfnAuthorizerProps {
            authorizer_function_arn: self
                .authorizer_function_arn
                .ok_or_else(|| RecordError::missing(CfnAuthorizerProps::TYPE_NAME, "authorizer_function_arn"))?,
            authorizer_name: self.authorizer_name,
            enable_caching_for_http: self.enable_caching_for_http,
            signing_disabled: self.signing_disabled,
            status: self.status,
            tags: self.tags,
            token_key_name: self.token_key_name,
            token_signing_public_keys: self.token_signing_public_keys,
        })
    }
}
impl PropertyRecord for CfnAuthorizerProps {
    const TYPE_NAME: &'static str = "CfnAuthorizerProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::IoT::Authorizer`")
            .attribute(
                AttributeSchema::new("authorizer_function_arn", AttributeType::String)
                    .required()
                    .with_description("The authorizer's Lambda function ARN.")
                    .with_provider_name("AuthorizerFunctionArn"),
            )
            .attribute(
                AttributeSchema::new("authorizer_name", AttributeType::String)
                    .with_description("The authorizer name.")
                    .with_provider_name("AuthorizerName"),
            )
            .attribute(
                AttributeSchema::new("enable_caching_for_http", AttributeType::Bool)
                    .with_description(
                        "When true, the result from the authorizer's Lambda function is cached for clients that use persistent HTTP connections.",
                    )
                    .with_provider_name("EnableCachingForHttp"),
            )
            .attribute(
                AttributeSchema::new("signing_disabled", AttributeType::Bool)
                    .with_description(
                        "Specifies whether AWS IoT validates the token signature in an authorization request.",
                    )
                    .with_provider_name("SigningDisabled"),
            )
            .attribute(
                AttributeSchema::new(
                    "status",
                    AttributeType::enumeration(&["ACTIVE", "INACTIVE"]),
                )
                    .with_description("The status of the authorizer.")
                    .with_provider_name("Status"),
            )
            .attribute(
                AttributeSchema::new(
                    "tags",
                    AttributeType::list(AttributeType::record("CfnTag")),
                )
                    .with_description(
                        "Metadata which can be used to manage the custom authorizer.",
                    )
                    .with_provider_name("Tags"),
            )
            .attribute(
                AttributeSchema::new("token_key_name", AttributeType::String)
                    .with_description(
                        "The key used to extract the token from the HTTP headers.",
                    )
                    .with_provider_name("TokenKeyName"),
            )
            .attribute(
                AttributeSchema::new(
                    "token_signing_public_keys",
                    AttributeType::map(AttributeType::String),
                )
                    .with_description(
                        "The public keys used to validate the token signature returned by your custom authentication service.",
                    )
                    .with_provider_name("TokenSigningPublicKeys"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert(
            "authorizer_function_arn",
            "AuthorizerFunctionArn",
            &self.authorizer_function_arn,
        );
        map.insert_opt(
            "authorizer_name",
            "AuthorizerName",
            self.authorizer_name.as_ref(),
        );
        map.insert_opt(
            "enable_caching_for_http",
            "EnableCachingForHttp",
            self.enable_caching_for_http.as_ref(),
        );
        map.insert_opt(
            "signing_disabled",
            "SigningDisabled",
            self.signing_disabled.as_ref(),
        );
        map.insert_opt("status", "Status", self.status.as_ref());
        map.insert_opt("tags", "Tags", self.tags.as_ref());
        map.insert_opt("token_key_name", "TokenKeyName", self.token_key_name.as_ref());
        map.insert_opt(
            "token_signing_public_keys",
            "TokenSigningPublicKeys",
            self.token_signing_public_keys.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            authorizer_function_arn: map.required(Self::TYPE_NAME, "authorizer_function_arn")?,
            authorizer_name: map.optional(Self::TYPE_NAME, "authorizer_name")?,
            enable_caching_for_http: map.optional(Self::TYPE_NAME, "enable_caching_for_http")?,
            signing_disabled: map.optional(Self::TYPE_NAME, "signing_disabled")?,
            status: map.optional(Self::TYPE_NAME, "status")?,
            tags: map.optional(Self::TYPE_NAME, "tags")?,
            token_key_name: map.optional(Self::TYPE_NAME, "token_key_name")?,
            token_signing_public_keys: map.optional(Self::TYPE_NAME, "token_signing_public_keys")?,
        })
    }
}
impl PropertyValue for CfnAuthorizerProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnAuthorizerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::Authorizer`
#[derive(Debug, Clone)]
pub struct CfnAuthorizer {
    resource: CfnResource,
    props: CfnAuthorizerProps,
    tags: TagManager,
}
impl CfnAuthorizer {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::Authorizer";
    pub fn new(scope: &Scope, id: &str, props: CfnAuthorizerProps) -> Self {
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
    pub fn props(&self) -> &CfnAuthorizerProps {
        &self.props
    }
    /// `Fn::GetAtt` reference to `Arn`
    pub fn attr_arn(&self) -> Value {
        self.resource.get_att("Arn")
    }
    pub fn authorizer_function_arn(&self) -> &str {
        self.props.authorizer_function_arn()
    }
    pub fn set_authorizer_function_arn(&mut self, value: impl Into<String>) {
        self.props.authorizer_function_arn = value.into();
    }
    pub fn authorizer_name(&self) -> Option<&str> {
        self.props.authorizer_name()
    }
    pub fn set_authorizer_name(&mut self, value: Option<String>) {
        self.props.authorizer_name = value;
    }
    pub fn enable_caching_for_http(&self) -> Option<bool> {
        self.props.enable_caching_for_http()
    }
    pub fn set_enable_caching_for_http(&mut self, value: Option<bool>) {
        self.props.enable_caching_for_http = value;
    }
    pub fn signing_disabled(&self) -> Option<bool> {
        self.props.signing_disabled()
    }
    pub fn set_signing_disabled(&mut self, value: Option<bool>) {
        self.props.signing_disabled = value;
    }
    pub fn status(&self) -> Option<&str> {
        self.props.status()
    }
    pub fn set_status(&mut self, value: Option<String>) {
        self.props.status = value;
    }
    pub fn token_key_name(&self) -> Option<&str> {
        self.props.token_key_name()
    }
    pub fn set_token_key_name(&mut self, value: Option<String>) {
        self.props.token_key_name = value;
    }
    pub fn token_signing_public_keys(&self) -> Option<&BTreeMap<String, String>> {
        self.props.token_signing_public_keys()
    }
    pub fn set_token_signing_public_keys(
        &mut self,
        value: Option<BTreeMap<String, String>>,
    ) {
        self.props.token_signing_public_keys = value;
    }
    pub fn tags(&self) -> &TagManager {
        &self.tags
    }
    pub fn tags_mut(&mut self) -> &mut TagManager {
        &mut self.tags
    }
}
impl CfnElement for CfnAuthorizer {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnAuthorizerProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        let mut map = self.props.to_properties();
        self.tags.apply(&mut map);
        map
    }
}
/// Registry entry for `AWS::IoT::Authorizer`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnAuthorizer::CFN_RESOURCE_TYPE_NAME,
        taggable: true,
        schema: CfnAuthorizerProps::schema(),
    }
}
