//! AWS::Cloud9 resources
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen
pub mod environment_ec2;
pub use environment_ec2::{CfnEnvironmentEC2, CfnEnvironmentEC2Props};
use crate::ResourceTypeInfo;
/// Registry entries for every `AWS::Cloud9` resource
pub fn resource_types() -> Vec<ResourceTypeInfo> {
    vec![environment_ec2::resource_type()]
}
