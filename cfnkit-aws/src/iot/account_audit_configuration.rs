//! AWS::IoT::AccountAuditConfiguration
//!
//! Configures the Device Defender audit settings for this account.
//!
//! Auto-generated from CloudFormation schema: AWS::IoT::AccountAuditConfiguration
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
/// Properties for defining a `AWS::IoT::AccountAuditConfiguration`
#[derive(Debug, Clone, PartialEq)]
pub struct CfnAccountAuditConfigurationProps {
    account_id: String,
    audit_check_configurations: AuditCheckConfigurationsProperty,
    role_arn: String,
    audit_notification_target_configurations: Option<AuditNotificationTargetConfigurationsProperty>,
}
impl CfnAccountAuditConfigurationProps {
    pub fn builder() -> CfnAccountAuditConfigurationPropsBuilder {
        CfnAccountAuditConfigurationPropsBuilder::default()
    }
    /// Your 12-digit account ID (used as the primary identifier for the CloudFormation resource).
    pub fn account_id(&self) -> &str {
        &self.account_id
    }
    /// `AuditCheckConfigurations`
    pub fn audit_check_configurations(&self) -> &AuditCheckConfigurationsProperty {
        &self.audit_check_configurations
    }
    /// The ARN of the role that grants permission to AWS IoT to access information about your devices, policies, certificates and other items as required when performing an audit.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }
    /// `AuditNotificationTargetConfigurations`
    pub fn audit_notification_target_configurations(
        &self,
    ) -> Option<&AuditNotificationTargetConfigurationsProperty> {
        self.audit_notification_target_configurations.as_ref()
    }
}
/// Builder for [`CfnAccountAuditConfigurationProps`]
#[derive(Debug, Clone, Default)]
pub struct CfnAccountAuditConfigurationPropsBuilder {
    account_id: Option<String>,
    audit_check_configurations: Option<AuditCheckConfigurationsProperty>,
    role_arn: Option<String>,
    audit_notification_target_configurations: Option<AuditNotificationTargetConfigurationsProperty>,
}
impl CfnAccountAuditConfigurationPropsBuilder {
    pub fn account_id(mut self, value: impl Into<String>) -> Self {
        self.account_id = Some(value.into());
        self
    }
    pub fn audit_check_configurations(
        mut self,
        value: AuditCheckConfigurationsProperty,
    ) -> Self {
        self.audit_check_configurations = Some(value);
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn audit_notification_target_configurations(
        mut self,
        value: AuditNotificationTargetConfigurationsProperty,
    ) -> Self {
        self.audit_notification_target_configurations = Some(value);
        self
    }
    pub fn build(self) -> Result<CfnAccountAuditConfigurationProps, RecordError> {
        Ok(CfnAccountAuditConfigurationProps {
            account_id: self
                .account_id
                .ok_or_else(|| RecordError::missing(CfnAccountAuditConfigurationProps::TYPE_NAME, "account_id"))?,
            audit_check_configurations: self
                .audit_check_configurations
                .ok_or_else(|| RecordError::missing(CfnAccountAuditConfigurationProps::TYPE_NAME, "audit_check_configurations"))?,
            role_arn: self
                .role_arn
                .ok_or_else(|| RecordError::missing(CfnAccountAuditConfigurationProps::TYPE_NAME, "role_arn"))?,
            audit_notification_target_configurations: self.audit_notification_target_configurations,
        })
    }
}
impl PropertyRecord for CfnAccountAuditConfigurationProps {
    const TYPE_NAME: &'static str = "CfnAccountAuditConfigurationProps";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Properties for defining a `AWS::IoT::AccountAuditConfiguration`",
            )
            .attribute(
                AttributeSchema::new("account_id", AttributeType::String)
                    .required()
                    .with_description(
                        "Your 12-digit account ID (used as the primary identifier for the CloudFormation resource).",
                    )
                    .with_provider_name("AccountId"),
            )
            .attribute(
                AttributeSchema::new(
                    "audit_check_configurations",
                    AttributeType::record("AuditCheckConfigurationsProperty"),
                )
                    .required()
                    .with_provider_name("AuditCheckConfigurations"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .required()
                    .with_description(
                        "The ARN of the role that grants permission to AWS IoT to access information about your devices, policies, certificates and other items as required when performing an audit.",
                    )
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new(
                    "audit_notification_target_configurations",
                    AttributeType::record("AuditNotificationTargetConfigurationsProperty"),
                )
                    .with_provider_name("AuditNotificationTargetConfigurations"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert("account_id", "AccountId", &self.account_id);
        map.insert(
            "audit_check_configurations",
            "AuditCheckConfigurations",
            &self.audit_check_configurations,
        );
        map.insert("role_arn", "RoleArn", &self.role_arn);
        map.insert_opt(
            "audit_notification_target_configurations",
            "AuditNotificationTargetConfigurations",
            self.audit_notification_target_configurations.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            account_id: map.required(Self::TYPE_NAME, "account_id")?,
            audit_check_configurations: map.required(Self::TYPE_NAME, "audit_check_configurations")?,
            role_arn: map.required(Self::TYPE_NAME, "role_arn")?,
            audit_notification_target_configurations: map.optional(Self::TYPE_NAME, "audit_notification_target_configurations")?,
        })
    }
}
impl PropertyValue for CfnAccountAuditConfigurationProps {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for CfnAccountAuditConfigurationProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// The configuration for a specific audit check.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditCheckConfigurationProperty {
    enabled: Option<bool>,
}
impl AuditCheckConfigurationProperty {
    pub fn builder() -> AuditCheckConfigurationPropertyBuilder {
        AuditCheckConfigurationPropertyBuilder::default()
    }
    /// True if the check is enabled.
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }
}
/// Builder for [`AuditCheckConfigurationProperty`]
#[derive(Debug, Clone, Default)]
pub struct AuditCheckConfigurationPropertyBuilder {
    enabled: Option<bool>,
}
impl AuditCheckConfigurationPropertyBuilder {
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }
    pub fn build(self) -> Result<AuditCheckConfigurationProperty, RecordError> {
        Ok(AuditCheckConfigurationProperty {
            enabled: self.enabled,
        })
    }
}
impl PropertyRecord for AuditCheckConfigurationProperty {
    const TYPE_NAME: &'static str = "AuditCheckConfigurationProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description("The configuration for a specific audit check.")
            .attribute(
                AttributeSchema::new("enabled", AttributeType::Bool)
                    .with_description("True if the check is enabled.")
                    .with_provider_name("Enabled"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("enabled", "Enabled", self.enabled.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            enabled: map.optional(Self::TYPE_NAME, "enabled")?,
        })
    }
}
impl PropertyValue for AuditCheckConfigurationProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for AuditCheckConfigurationProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Specifies which audit checks are enabled and disabled for this account.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditCheckConfigurationsProperty {
    authenticated_cognito_role_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
    ca_certificate_expiring_check: Option<AuditCheckConfigurationProperty>,
    ca_certificate_key_quality_check: Option<AuditCheckConfigurationProperty>,
    conflicting_client_ids_check: Option<AuditCheckConfigurationProperty>,
    device_certificate_expiring_check: Option<AuditCheckConfigurationProperty>,
    device_certificate_key_quality_check: Option<AuditCheckConfigurationProperty>,
    device_certificate_shared_check: Option<AuditCheckConfigurationProperty>,
    iot_policy_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
    iot_role_alias_allows_access_to_unused_services_check: Option<AuditCheckConfigurationProperty>,
    iot_role_alias_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
    logging_disabled_check: Option<AuditCheckConfigurationProperty>,
    revoked_ca_certificate_still_active_check: Option<AuditCheckConfigurationProperty>,
    revoked_device_certificate_still_active_check: Option<AuditCheckConfigurationProperty>,
    unauthenticated_cognito_role_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
}
impl AuditCheckConfigurationsProperty {
    pub fn builder() -> AuditCheckConfigurationsPropertyBuilder {
        AuditCheckConfigurationsPropertyBuilder::default()
    }
    /// `AuthenticatedCognitoRoleOverlyPermissiveCheck`
    pub fn authenticated_cognito_role_overly_permissive_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.authenticated_cognito_role_overly_permissive_check.as_ref()
    }
    /// `CaCertificateExpiringCheck`
    pub fn ca_certificate_expiring_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.ca_certificate_expiring_check.as_ref()
    }
    /// `CaCertificateKeyQualityCheck`
    pub fn ca_certificate_key_quality_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.ca_certificate_key_quality_check.as_ref()
    }
    /// `ConflictingClientIdsCheck`
    pub fn conflicting_client_ids_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.conflicting_client_ids_check.as_ref()
    }
    /// `DeviceCertificateExpiringCheck`
    pub fn device_certificate_expiring_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.device_certificate_expiring_check.as_ref()
    }
    /// `DeviceCertificateKeyQualityCheck`
    pub fn device_certificate_key_quality_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.device_certificate_key_quality_check.as_ref()
    }
    /// `DeviceCertificateSharedCheck`
    pub fn device_certificate_shared_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.device_certificate_shared_check.as_ref()
    }
    /// `IotPolicyOverlyPermissiveCheck`
    pub fn iot_policy_overly_permissive_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.iot_policy_overly_permissive_check.as_ref()
    }
    /// `IotRoleAliasAllowsAccessToUnusedServicesCheck`
    pub fn iot_role_alias_allows_access_to_unused_services_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.iot_role_alias_allows_access_to_unused_services_check.as_ref()
    }
    /// `IotRoleAliasOverlyPermissiveCheck`
    pub fn iot_role_alias_overly_permissive_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.iot_role_alias_overly_permissive_check.as_ref()
    }
    /// `LoggingDisabledCheck`
    pub fn logging_disabled_check(&self) -> Option<&AuditCheckConfigurationProperty> {
        self.logging_disabled_check.as_ref()
    }
    /// `RevokedCaCertificateStillActiveCheck`
    pub fn revoked_ca_certificate_still_active_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.revoked_ca_certificate_still_active_check.as_ref()
    }
    /// `RevokedDeviceCertificateStillActiveCheck`
    pub fn revoked_device_certificate_still_active_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.revoked_device_certificate_still_active_check.as_ref()
    }
    /// `UnauthenticatedCognitoRoleOverlyPermissiveCheck`
    pub fn unauthenticated_cognito_role_overly_permissive_check(
        &self,
    ) -> Option<&AuditCheckConfigurationProperty> {
        self.unauthenticated_cognito_role_overly_permissive_check.as_ref()
    }
}
/// Builder for [`AuditCheckConfigurationsProperty`]
#[derive(Debug, Clone, Default)]
pub struct AuditCheckConfigurationsPropertyBuilder {
    authenticated_cognito_role_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
    ca_certificate_expiring_check: Option<AuditCheckConfigurationProperty>,
    ca_certificate_key_quality_check: Option<AuditCheckConfigurationProperty>,
    conflicting_client_ids_check: Option<AuditCheckConfigurationProperty>,
    device_certificate_expiring_check: Option<AuditCheckConfigurationProperty>,
    device_certificate_key_quality_check: Option<AuditCheckConfigurationProperty>,
    device_certificate_shared_check: Option<AuditCheckConfigurationProperty>,
    iot_policy_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
    iot_role_alias_allows_access_to_unused_services_check: Option<AuditCheckConfigurationProperty>,
    iot_role_alias_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
    logging_disabled_check: Option<AuditCheckConfigurationProperty>,
    revoked_ca_certificate_still_active_check: Option<AuditCheckConfigurationProperty>,
    revoked_device_certificate_still_active_check: Option<AuditCheckConfigurationProperty>,
    unauthenticated_cognito_role_overly_permissive_check: Option<AuditCheckConfigurationProperty>,
}
impl AuditCheckConfigurationsPropertyBuilder {
    pub fn authenticated_cognito_role_overly_permissive_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.authenticated_cognito_role_overly_permissive_check = Some(value);
        self
    }
    pub fn ca_certificate_expiring_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.ca_certificate_expiring_check = Some(value);
        self
    }
    pub fn ca_certificate_key_quality_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.ca_certificate_key_quality_check = Some(value);
        self
    }
    pub fn conflicting_client_ids_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.conflicting_client_ids_check = Some(value);
        self
    }
    pub fn device_certificate_expiring_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.device_certificate_expiring_check = Some(value);
        self
    }
    pub fn device_certificate_key_quality_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.device_certificate_key_quality_check = Some(value);
        self
    }
    pub fn device_certificate_shared_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.device_certificate_shared_check = Some(value);
        self
    }
    pub fn iot_policy_overly_permissive_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.iot_policy_overly_permissive_check = Some(value);
        self
    }
    pub fn iot_role_alias_allows_access_to_unused_services_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.iot_role_alias_allows_access_to_unused_services_check = Some(value);
        self
    }
    pub fn iot_role_alias_overly_permissive_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.iot_role_alias_overly_permissive_check = Some(value);
        self
    }
    pub fn logging_disabled_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.logging_disabled_check = Some(value);
        self
    }
    pub fn revoked_ca_certificate_still_active_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.revoked_ca_certificate_still_active_check = Some(value);
        self
    }
    pub fn revoked_device_certificate_still_active_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.revoked_device_certificate_still_active_check = Some(value);
        self
    }
    pub fn unauthenticated_cognito_role_overly_permissive_check(
        mut self,
        value: AuditCheckConfigurationProperty,
    ) -> Self {
        self.unauthenticated_cognito_role_overly_permissive_check = Some(value);
        self
    }
    pub fn build(self) -> Result<AuditCheckConfigurationsProperty, RecordError> {
        Ok(AuditCheckConfigurationsProperty {
            authenticated_cognito_role_overly_permissive_check: self.authenticated_cognito_role_overly_permissive_check,
            ca_certificate_expiring_check: self.ca_certificate_expiring_check,
            ca_certificate_key_quality_check: self.ca_certificate_key_quality_check,
            conflicting_client_ids_check: self.conflicting_client_ids_check,
            device_certificate_expiring_check: self.device_certificate_expiring_check,
            device_certificate_key_quality_check: self.device_certificate_key_quality_check,
            device_certificate_shared_check: self.device_certificate_shared_check,
            iot_policy_overly_permissive_check: self.iot_policy_overly_permissive_check,
            iot_role_alias_allows_access_to_unused_services_check: self.iot_role_alias_allows_access_to_unused_services_check,
            iot_role_alias_overly_permissive_check: self.iot_role_alias_overly_permissive_check,
            logging_disabled_check: self.logging_disabled_check,
            revoked_ca_certificate_still_active_check: self.revoked_ca_certificate_still_active_check,
            revoked_device_certificate_still_active_check: self.revoked_device_certificate_still_active_check,
            unauthenticated_cognito_role_overly_permissive_check: self.unauthenticated_cognito_role_overly_permissive_check,
        })
    }
}
impl PropertyRecord for AuditCheckConfigurationsProperty {
    const TYPE_NAME: &'static str = "AuditCheckConfigurationsProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Specifies which audit checks are enabled and disabled for this account.",
            )
            .attribute(
                AttributeSchema::new(
                    "authenticated_cognito_role_overly_permissive_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("AuthenticatedCognitoRoleOverlyPermissiveCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "ca_certificate_expiring_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("CaCertificateExpiringCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "ca_certificate_key_quality_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("CaCertificateKeyQualityCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "conflicting_client_ids_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("ConflictingClientIdsCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "device_certificate_expiring_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("DeviceCertificateExpiringCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "device_certificate_key_quality_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("DeviceCertificateKeyQualityCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "device_certificate_shared_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("DeviceCertificateSharedCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "iot_policy_overly_permissive_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("IotPolicyOverlyPermissiveCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "iot_role_alias_allows_access_to_unused_services_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("IotRoleAliasAllowsAccessToUnusedServicesCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "iot_role_alias_overly_permissive_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("IotRoleAliasOverlyPermissiveCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "logging_disabled_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("LoggingDisabledCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "revoked_ca_certificate_still_active_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("RevokedCaCertificateStillActiveCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "revoked_device_certificate_still_active_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("RevokedDeviceCertificateStillActiveCheck"),
            )
            .attribute(
                AttributeSchema::new(
                    "unauthenticated_cognito_role_overly_permissive_check",
                    AttributeType::record("AuditCheckConfigurationProperty"),
                )
                    .with_provider_name("UnauthenticatedCognitoRoleOverlyPermissiveCheck"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt(
            "authenticated_cognito_role_overly_permissive_check",
            "AuthenticatedCognitoRoleOverlyPermissiveCheck",
            self.authenticated_cognito_role_overly_permissive_check.as_ref(),
        );
        map.insert_opt(
            "ca_certificate_expiring_check",
            "CaCertificateExpiringCheck",
            self.ca_certificate_expiring_check.as_ref(),
        );
        map.insert_opt(
            "ca_certificate_key_quality_check",
            "CaCertificateKeyQualityCheck",
            self.ca_certificate_key_quality_check.as_ref(),
        );
        map.insert_opt(
            "conflicting_client_ids_check",
            "ConflictingClientIdsCheck",
            self.conflicting_client_ids_check.as_ref(),
        );
        map.insert_opt(
            "device_certificate_expiring_check",
            "DeviceCertificateExpiringCheck",
            self.device_certificate_expiring_check.as_ref(),
        );
        map.insert_opt(
            "device_certificate_key_quality_check",
            "DeviceCertificateKeyQualityCheck",
            self.device_certificate_key_quality_check.as_ref(),
        );
        map.insert_opt(
            "device_certificate_shared_check",
            "DeviceCertificateSharedCheck",
            self.device_certificate_shared_check.as_ref(),
        );
        map.insert_opt(
            "iot_policy_overly_permissive_check",
            "IotPolicyOverlyPermissiveCheck",
            self.iot_policy_overly_permissive_check.as_ref(),
        );
        map.insert_opt(
            "iot_role_alias_allows_access_to_unused_services_check",
            "IotRoleAliasAllowsAccessToUnusedServicesCheck",
            self.iot_role_alias_allows_access_to_unused_services_check.as_ref(),
        );
        map.insert_opt(
            "iot_role_alias_overly_permissive_check",
            "IotRoleAliasOverlyPermissiveCheck",
            self.iot_role_alias_overly_permissive_check.as_ref(),
        );
        map.insert_opt(
            "logging_disabled_check",
            "LoggingDisabledCheck",
            self.logging_disabled_check.as_ref(),
        );
        map.insert_opt(
            "revoked_ca_certificate_still_active_check",
            "RevokedCaCertificateStillActiveCheck",
            self.revoked_ca_certificate_still_active_check.as_ref(),
        );
        map.insert_opt(
            "revoked_device_certificate_still_active_check",
            "RevokedDeviceCertificateStillActiveCheck",
            self.revoked_device_certificate_still_active_check.as_ref(),
        );
        map.insert_opt(
            "unauthenticated_cognito_role_overly_permissive_check",
            "UnauthenticatedCognitoRoleOverlyPermissiveCheck",
            self.unauthenticated_cognito_role_overly_permissive_check.as_ref(),
        );
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            authenticated_cognito_role_overly_permissive_check: map.optional(Self::TYPE_NAME, "authenticated_cognito_role_overly_permissive_check")?,
            ca_certificate_expiring_check: map.optional(Self::TYPE_NAME, "ca_certificate_expiring_check")?,
            ca_certificate_key_quality_check: map.optional(Self::TYPE_NAME, "ca_certificate_key_quality_check")?,
            conflicting_client_ids_check: map.optional(Self::TYPE_NAME, "conflicting_client_ids_check")?,
            device_certificate_expiring_check: map.optional(Self::TYPE_NAME, "device_certificate_expiring_check")?,
            device_certificate_key_quality_check: map.optional(Self::TYPE_NAME, "device_certificate_key_quality_check")?,
            device_certificate_shared_check: map.optional(Self::TYPE_NAME, "device_certificate_shared_check")?,
            iot_policy_overly_permissive_check: map.optional(Self::TYPE_NAME, "iot_policy_overly_permissive_check")?,
            iot_role_alias_allows_access_to_unused_services_check: map.optional(Self::TYPE_NAME, "iot_role_alias_allows_access_to_unused_services_check")?,
            iot_role_alias_overly_permissive_check: map.optional(Self::TYPE_NAME, "iot_role_alias_overly_permissive_check")?,
            logging_disabled_check: map.optional(Self::TYPE_NAME, "logging_disabled_check")?,
            revoked_ca_certificate_still_active_check: map.optional(Self::TYPE_NAME, "revoked_ca_certificate_still_active_check")?,
            revoked_device_certificate_still_active_check: map.optional(Self::TYPE_NAME, "revoked_device_certificate_still_active_check")?,
            unauthenticated_cognito_role_overly_permissive_check: map.optional(Self::TYPE_NAME, "unauthenticated_cognito_role_overly_permissive_check")?,
        })
    }
}
impl PropertyValue for AuditCheckConfigurationsProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for AuditCheckConfigurationsProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// Information about the targets to which audit notifications are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditNotificationTargetConfigurationsProperty {
    sns: Option<AuditNotificationTargetProperty>,
}
impl AuditNotificationTargetConfigurationsProperty {
    pub fn builder() -> AuditNotificationTargetConfigurationsPropertyBuilder {
        AuditNotificationTargetConfigurationsPropertyBuilder::default()
    }
    /// `Sns`
    pub fn sns(&self) -> Option<&AuditNotificationTargetProperty> {
        self.sns.as_ref()
    }
}
/// Builder for [`AuditNotificationTargetConfigurationsProperty`]
#[derive(Debug, Clone, Default)]
pub struct AuditNotificationTargetConfigurationsPropertyBuilder {
    sns: Option<AuditNotificationTargetProperty>,
}
impl AuditNotificationTargetConfigurationsPropertyBuilder {
    pub fn sns(mut self, value: AuditNotificationTargetProperty) -> Self {
        self.sns = Some(value);
        self
    }
    pub fn build(self) -> Result<AuditNotificationTargetConfigurationsProperty, RecordError> {
        Ok(AuditNotificationTargetConfigurationsProperty {
            sns: self.sns,
        })
    }
}
impl PropertyRecord for AuditNotificationTargetConfigurationsProperty {
    const TYPE_NAME: &'static str = "AuditNotificationTargetConfigurationsProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .with_description(
                "Information about the targets to which audit notifications are sent.",
            )
            .attribute(
                AttributeSchema::new(
                    "sns",
                    AttributeType::record("AuditNotificationTargetProperty"),
                )
                    .with_provider_name("Sns"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("sns", "Sns", self.sns.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            sns: map.optional(Self::TYPE_NAME, "sns")?,
        })
    }
}
impl PropertyValue for AuditNotificationTargetConfigurationsProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for AuditNotificationTargetConfigurationsProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
#[derive(Debug, Clone, PartialEq)]
pub struct AuditNotificationTargetProperty {
    enabled: Option<bool>,
    role_arn: Option<String>,
    target_arn: Option<String>,
}
impl AuditNotificationTargetProperty {
    pub fn builder() -> AuditNotificationTargetPropertyBuilder {
        AuditNotificationTargetPropertyBuilder::default()
    }
    /// True if notifications to the target are enabled.
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }
    /// The ARN of the role that grants permission to send notifications to the target.
    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }
    /// The ARN of the target (SNS topic) to which audit notifications are sent.
    pub fn target_arn(&self) -> Option<&str> {
        self.target_arn.as_deref()
    }
}
/// Builder for [`AuditNotificationTargetProperty`]
#[derive(Debug, Clone, Default)]
pub struct AuditNotificationTargetPropertyBuilder {
    enabled: Option<bool>,
    role_arn: Option<String>,
    target_arn: Option<String>,
}
impl AuditNotificationTargetPropertyBuilder {
    pub fn enabled(mut self, value: bool) -> Self {
        self.enabled = Some(value);
        self
    }
    pub fn role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }
    pub fn target_arn(mut self, value: impl Into<String>) -> Self {
        self.target_arn = Some(value.into());
        self
    }
    pub fn build(self) -> Result<AuditNotificationTargetProperty, RecordError> {
        Ok(AuditNotificationTargetProperty {
            enabled: self.enabled,
            role_arn: self.role_arn,
            target_arn: self.target_arn,
        })
    }
}
impl PropertyRecord for AuditNotificationTargetProperty {
    const TYPE_NAME: &'static str = "AuditNotificationTargetProperty";
    fn schema() -> RecordSchema {
        RecordSchema::new(Self::TYPE_NAME)
            .attribute(
                AttributeSchema::new("enabled", AttributeType::Bool)
                    .with_description("True if notifications to the target are enabled.")
                    .with_provider_name("Enabled"),
            )
            .attribute(
                AttributeSchema::new("role_arn", AttributeType::String)
                    .with_description(
                        "The ARN of the role that grants permission to send notifications to the target.",
                    )
                    .with_provider_name("RoleArn"),
            )
            .attribute(
                AttributeSchema::new("target_arn", AttributeType::String)
                    .with_description(
                        "The ARN of the target (SNS topic) to which audit notifications are sent.",
                    )
                    .with_provider_name("TargetArn"),
            )
    }
    fn to_properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.insert_opt("enabled", "Enabled", self.enabled.as_ref());
        map.insert_opt("role_arn", "RoleArn", self.role_arn.as_ref());
        map.insert_opt("target_arn", "TargetArn", self.target_arn.as_ref());
        map
    }
    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {
        Ok(Self {
            enabled: map.optional(Self::TYPE_NAME, "enabled")?,
            role_arn: map.optional(Self::TYPE_NAME, "role_arn")?,
            target_arn: map.optional(Self::TYPE_NAME, "target_arn")?,
        })
    }
}
impl PropertyValue for AuditNotificationTargetProperty {
    fn to_value(&self) -> Value {
        record_to_value(self)
    }
    fn from_value(value: &Value) -> Result<Self, TypeError> {
        record_from_value(value)
    }
}
impl fmt::Display for AuditNotificationTargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
/// A CloudFormation `AWS::IoT::AccountAuditConfiguration`
#[derive(Debug, Clone)]
pub struct CfnAccountAuditConfiguration {
    resource: CfnResource,
    props: CfnAccountAuditConfigurationProps,
}
impl CfnAccountAuditConfiguration {
    pub const CFN_RESOURCE_TYPE_NAME: &'static str = "AWS::IoT::AccountAuditConfiguration";
    pub fn new(
        scope: &Scope,
        id: &str,
        props: CfnAccountAuditConfigurationProps,
    ) -> Self {
        Self {
            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),
            props,
        }
    }
    pub fn props(&self) -> &CfnAccountAuditConfigurationProps {
        &self.props
    }
    pub fn account_id(&self) -> &str {
        self.props.account_id()
    }
    pub fn set_account_id(&mut self, value: impl Into<String>) {
        self.props.account_id = value.into();
    }
    pub fn audit_check_configurations(&self) -> &AuditCheckConfigurationsProperty {
        self.props.audit_check_configurations()
    }
    pub fn set_audit_check_configurations(
        &mut self,
        value: AuditCheckConfigurationsProperty,
    ) {
        self.props.audit_check_configurations = value;
    }
    pub fn role_arn(&self) -> &str {
        self.props.role_arn()
    }
    pub fn set_role_arn(&mut self, value: impl Into<String>) {
        self.props.role_arn = value.into();
    }
    pub fn audit_notification_target_configurations(
        &self,
    ) -> Option<&AuditNotificationTargetConfigurationsProperty> {
        self.props.audit_notification_target_configurations()
    }
    pub fn set_audit_notification_target_configurations(
        &mut self,
        value: Option<AuditNotificationTargetConfigurationsProperty>,
    ) {
        self.props.audit_notification_target_configurations = value;
    }
}
impl CfnElement for CfnAccountAuditConfiguration {
    fn resource(&self) -> &CfnResource {
        &self.resource
    }
    fn resource_mut(&mut self) -> &mut CfnResource {
        &mut self.resource
    }
    fn schema(&self) -> RecordSchema {
        CfnAccountAuditConfigurationProps::schema()
    }
    fn cfn_properties(&self) -> PropertyMap {
        self.props.to_properties()
    }
}
/// Registry entry for `AWS::IoT::AccountAuditConfiguration`
pub fn resource_type() -> ResourceTypeInfo {
    ResourceTypeInfo {
        type_name: CfnAccountAuditConfiguration::CFN_RESOURCE_TYPE_NAME,
        taggable: false,
        schema: CfnAccountAuditConfigurationProps::schema(),
    }
}
