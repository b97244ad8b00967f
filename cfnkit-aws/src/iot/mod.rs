//! AWS::IoT resources
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
pub mod account_audit_configuration;
pub mod authorizer;
pub mod certificate;
pub mod policy;
pub mod policy_principal_attachment;
pub mod security_profile;
pub mod thing;
pub mod thing_principal_attachment;
pub mod topic_rule;
pub use account_audit_configuration::{
    CfnAccountAuditConfiguration, CfnAccountAuditConfigurationProps,
};
pub use authorizer::{CfnAuthorizer, CfnAuthorizerProps};
pub use certificate::{CfnCertificate, CfnCertificateProps};
pub use policy::{CfnPolicy, CfnPolicyProps};
pub use policy_principal_attachment::{
    CfnPolicyPrincipalAttachment, CfnPolicyPrincipalAttachmentProps,
};
pub use security_profile::{CfnSecurityProfile, CfnSecurityProfileProps};
pub use thing::{CfnThing, CfnThingProps};
pub use thing_principal_attachment::{
    CfnThingPrincipalAttachment, CfnThingPrincipalAttachmentProps,
};
pub use topic_rule::{CfnTopicRule, CfnTopicRuleProps};
use crate::ResourceTypeInfo;
/// Registry entries for every `AWS::IoT` resource
pub fn resource_types() -> Vec<ResourceTypeInfo> {
    vec![
        account_audit_configuration::resource_type(),
        authorizer::resource_type(),
        certificate::resource_type(),
        policy::resource_type(),
        policy_principal_attachment::resource_type(),
        security_profile::resource_type(),
        thing::resource_type(),
        thing_principal_attachment::resource_type(),
        topic_rule::resource_type()
    ]
}
