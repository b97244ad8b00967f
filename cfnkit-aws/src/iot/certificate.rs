//! AWS::IoT::Certificate
//!
//! Use the AWS::IoT::Certificate resource to declare an AWS IoT X.509 certificate.
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::Certificate
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
/// Properties for defining a `AWS::IoT::Certificate`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnCertificateProps {
    status: String,
    ca_certificate_pem: Option<String>,
    certificate_mode: Option<String>,
    certificate_pem: Option<String>,
    certificate_signing_request: Option<String>,
}
impl CfnCertificateProps {
    pub fn builder() -> CfnCertificatePropsBuilder {
        CfnCertificatePropsBuilder::default()
    }
    /// The status of the certificate.
    pub fn status(&self) -> &str {
        &self.status
    }
    /// The CA certificate used to sign the device certificate being registered.
    pub fn ca_certificate_pem(&self) -> Option<&str> {
        self.ca_certificate_pem.as_deref()
    }
    /// Specifies which mode of certificate registration to use with this resource.
    pub fn certificate_mode(&self) -> Option<&str> {
        self.certificate_mode.as_deref()
    }
    /// The certificate data in PEM format.
    pub fn certificate_pem(&self) -> Option<&str> {
        self.certificate_pem.as_deref()
    }
    /// The certificate signing request (CSR).
    pub fn certificate_signing_request(&self) -> Option<&str> {
        self.certificate_signing_request.as_deref()
    }
}
/// Builder for [`CfnCertificateProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnCertificatePropsBuilder {
    status: Option<String>,
    ca_certificate_pem: Option<String>,
    certificate_mode: Option<String>,
    certificate_pem: Option<String>,
    certificate_signing_request: Option<String>,
}
impl CfnCertificatePropsBuilder {
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
    pub fn ca_certificate_pem(mut self, value: impl Into<String>) -> Self {
        self.ca_certificate_pem = Some(value.into());
        self
    }
    pub fn certificate_mode(mut self, value: impl Into<String>) -> Self {
        self.certificate_mode = Some(value.into());
        self
    }
    pub fn certificate_pem(mut self, value: impl Into<String>) -> Self {
        self.certificate_pem = Some(value.into());
        self
    }
    pub fn certificate_signing_request(mut self, value: impl Into<String>) -> Self {
        self.certificate_signing_request = Some(value.into());
        self
    }
    pub fn build(self) -> Result<CfnCertificateProps, RecordError> {
        Ok(CfnCertificateProps {
            status: self
                .status
                .ok_or_else(|| RecordError::missing(CfnCertificateProps::TYPE_NAME, "status"))?,
            ca_certificate_pem: self.ca_certificate_pem,
            certificate_mode: self.certificate_mode,
            certificate_pem: self.certificate_pem,
            certificate_signing_request: self.certificate_signing_request,
        })
    }
}
impl PropertyRecord for CfnCertificateProps {
    const TYPE_NAME: &'static str = "CfnCertificateProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("Properties for defining a `AWS::IoT::Certificate`")
            .attribute(
                AttributeSchema::new(
                    "status",
                    AttributeType::enumeration(&["ACTIVE", "INACTIVE", "REVOKED", "PENDING_TRANSFER", "PENDING_ACTIVATION"]),
                )
                    .required()
                    .with_description("The status of the certificate.")
                    .with_provider_name("Status"),
            )
            .attribute(
                AttributeSchema::new("ca_certificate_pem", AttributeType::String)
                    .with_description(
                        "The CA certificate used to sign the device certificate being registered.",
                    )
                    .with_provider_name("CACertificatePem"),
            )
            .attribute(
                AttributeSchema::new(
                    "certificate_mode",
                    AttributeType::enumeration(&["DEFAULT", "SNI_ONLY"]),
                )
                    .with_description(
                        "Specifies which mode of certificate registration to use with this resource.",
                    )
                    .with_provider_name("CertificateMode"),
            )
            .attribute(
                AttributeSchema::new("certificate_pem", AttributeType::String)
                    .with_description("The certificate data in PEM format.")
                    .with_provider_name("CertificatePem"),
            )
            .attribute(
                AttributeSchema::new(
                    "certificate_signing_request",
                    AttributeType::String,
                )
                    .with_description("The certificate signing request (CSR).")
                    .with_provider_name("CertificateSigningRequest"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("status", "Status", &self.status);
        map.insert_opt(
            "ca_certificate_pem",
            "CACertificatePem",
            self.ca_certificate_pem.as_ref(),
        );
        map.insert_opt(
            "certificate_mode",
            "CertificateMode",
            self.certificate_mode.as_ref(),
        );
        map.insert_opt(
            "certificate_pem",
            "CertificatePem",
            self.certificate_pem.as_ref(),
        );
        map.insert_opt(
            "certificate_signing_request",
            "CertificateSigningRequest",
            self.certificate_signing_request.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            status: map.required(Self::TYPE_NAME, "status")?,
            ca_certificate_pem: map.optional(Self::TYPE_NAME, "ca_certificate_pem")?,
            certificate_mode: map.optional(Self::TYPE_NAME, "certificate_mode")?,
            certificate_pem: map.optional(Self::TYPE_NAME, "certificate_pem")?,
            certificate_signing_request: map.optional(Self::TYPE_NAME, "certificate_signing_request")?,
        })
    }
}
impl PropertyValue for CfnCertificateProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnCertificateProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::Certificate`
#[derive(Debug, Clone)]
pub struct CfnCertificate {
    resource: CfnResource,
    props: CfnCertificateProps,
}
impl CfnCertificate {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::Certificate";
    pub fn new(scope: &Scope, id: &str, props: CfnCertificateProps) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            props,
        }
    }
    pub fn props(&self) -> &CfnCertificateProps {
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
    pub fn status(&self) -> &str {
        self.props.status()
    }
    pub fn set_status(&mut self, value: impl Into<String>) {
        self.props.status = value.into();
    }
    pub fn ca_certificate_pem(&self) -> Option<&str> {
        self.props.ca_certificate_pem()
    }
    pub fn set_ca_certificate_pem(&mut self, value: Option<String>) {
        self.props.ca_certificate_pem = value;
    }
    pub fn certificate_mode(&self) -> Option<&str> {
        self.props.certificate_mode()
    }
    pub fn set_certificate_mode(&mut self, value: Option<String>) {
        self.props.certificate_mode = value;
    }
    pub fn certificate_pem(&self) -> Option<&str> {
        self.props.certificate_pem()
    }
    pub fn set_certificate_pem(&mut self, value: Option<String>) {
        self.props.certificate_pem = value;
    }
    pub fn certificate_signing_request(&self) -> Option<&str> {
        self.props.certificate_signing_request()
    }
    pub fn set_certificate_signing_request(&mut self, value: Option<String>) {
        self.props.certificate_signing_request = value;
    }
}
impl CfnElement for CfnCertificate {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnCertificateProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        self.props.to_properties()
    }
}
/// Registry entry for `AWS::IoT::Certificate`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnCertificate::CFN_RESOURCE_TYPE_NAME,
        taggable: false,
        schema: CfnCertificateProps::schema(),
    }
}
