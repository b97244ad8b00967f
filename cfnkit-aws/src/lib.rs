//! cfnkit AWS Resources
//!
//! Typed CloudFormation records for the AWS IoT and Cloud9 resource types.
//!
//! ## Module Structure
//!
//! - `cloud9` - `AWS::Cloud9::*` resources
//! - `iot` - `AWS::IoT::*` resources
//!
//! Both modules are generated by `cfnkit-codegen` from the registry schemas
//! under `schemas/`. This file holds the resource type registry, which
//! checks untyped [`RawResource`]s against the generated schemas.

pub mod cloud9;
pub mod iot;

use std::collections::BTreeMap;

use cfnkit_core::resource::{CfnElement, RawResource};
use cfnkit_core::schema::{RecordSchema, TypeError};

/// A registered resource type
///
/// Combines the generated props schema with the CloudFormation metadata
/// needed to look it up and tag it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTypeInfo {
    /// CloudFormation type name (e.g., "AWS::IoT::Certificate")
    pub type_name: &'static str,
    /// Whether the resource carries a managed `Tags` property
    pub taggable: bool,
    /// Schema of the resource properties
    pub schema: RecordSchema,
}

/// Error raised when checking a raw resource against the registry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RawValidationError {
    #[error("Unknown resource type: {0}")]
    UnknownType(String),

    #[error("Invalid {type_name} '{logical_id}': {}", format_errors(.errors))]
    Invalid {
        type_name: String,
        logical_id: String,
        errors: Vec<TypeError>,
    },
}

fn format_errors(errors: &[TypeError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every registered resource type
pub fn resource_types() -> Vec<ResourceTypeInfo> {
    let mut types = cloud9::resource_types();
    types.extend(iot::resource_types());
    types
}

/// Props schemas keyed by CloudFormation type name
pub fn resource_schemas() -> BTreeMap<&'static str, RecordSchema> {
    resource_types()
        .into_iter()
        .map(|t| (t.type_name, t.schema))
        .collect()
}

pub fn find_resource_type(type_name: &str) -> Option<ResourceTypeInfo> {
    resource_types()
        .into_iter()
        .find(|t| t.type_name == type_name)
}

pub fn find_schema(type_name: &str) -> Option<RecordSchema> {
    find_resource_type(type_name).map(|t| t.schema)
}

/// Validate an untyped resource against the schema registered for its type
pub fn validate_raw(resource: &RawResource) -> Result<(), RawValidationError> {
    let type_name = resource.resource().cfn_resource_type();
    let schema = find_schema(type_name)
        .ok_or_else(|| RawValidationError::UnknownType(type_name.to_string()))?;

    schema.validate(resource.properties()).map_err(|errors| {
        log::debug!(
            "{} '{}' failed validation with {} error(s)",
            type_name,
            resource.resource().logical_id(),
            errors.len()
        );
        RawValidationError::Invalid {
            type_name: type_name.to_string(),
            logical_id: resource.resource().logical_id().to_string(),
            errors,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfnkit_core::inspect::AttributeCollector;
    use cfnkit_core::record::{PropertyMap, PropertyRecord, PropertyValue, RecordError};
    use cfnkit_core::render::JsonRenderer;
    use cfnkit_core::resource::{INSPECT_PROPS_KEY, INSPECT_TYPE_KEY, Scope};
    use cfnkit_core::stack::{Stack, StackError};
    use cfnkit_core::tag::CfnTag;
    use cfnkit_core::value::Value;
    use serde_json::json;

    use crate::cloud9::{CfnEnvironmentEC2, CfnEnvironmentEC2Props};
    use crate::cloud9::environment_ec2::RepositoryProperty;
    use crate::iot::account_audit_configuration::{
        AuditCheckConfigurationProperty, AuditCheckConfigurationsProperty,
        AuditNotificationTargetProperty,
    };
    use crate::iot::thing::AttributePayloadProperty;
    use crate::iot::{
        CfnAuthorizer, CfnAuthorizerProps, CfnCertificate, CfnCertificateProps, CfnPolicy,
        CfnPolicyProps, CfnThing, CfnThingPrincipalAttachment, CfnThingPrincipalAttachmentProps,
        CfnThingProps,
    };

    #[test]
    fn certificate_with_only_status() {
        let props = CfnCertificateProps::builder()
            .status("ACTIVE")
            .build()
            .unwrap();

        assert_eq!(props.status(), "ACTIVE");
        assert_eq!(props.ca_certificate_pem(), None);
        assert_eq!(props.certificate_mode(), None);
        assert_eq!(props.certificate_pem(), None);
        assert_eq!(props.certificate_signing_request(), None);
        assert_eq!(props.to_properties().len(), 1);
    }

    #[test]
    fn certificate_with_pem() {
        let props = CfnCertificateProps::builder()
            .status("ACTIVE")
            .certificate_pem("PEM...")
            .build()
            .unwrap();

        assert_eq!(props.status(), "ACTIVE");
        assert_eq!(props.certificate_pem(), Some("PEM..."));
        assert_eq!(props.ca_certificate_pem(), None);
        assert_eq!(props.certificate_mode(), None);
        assert_eq!(props.certificate_signing_request(), None);
    }

    #[test]
    fn missing_required_field_is_named() {
        let err = CfnCertificateProps::builder()
            .certificate_pem("PEM...")
            .build()
            .unwrap_err();
        assert_eq!(err, RecordError::missing("CfnCertificateProps", "status"));
        assert_eq!(err.field(), "status");

        // First missing field in declaration order
        let err = CfnThingPrincipalAttachmentProps::builder()
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "principal");

        let err = CfnThingPrincipalAttachmentProps::builder()
            .principal("arn:aws:iot:us-east-1:123456789012:cert/abc")
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "thing_name");
        assert_eq!(
            err.to_string(),
            "Required property 'thing_name' is missing from CfnThingPrincipalAttachmentProps"
        );
    }

    #[test]
    fn zero_argument_audit_check_configurations() {
        let a = AuditCheckConfigurationsProperty::builder().build().unwrap();
        let b = AuditCheckConfigurationsProperty::builder().build().unwrap();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "AuditCheckConfigurationsProperty()");
        assert!(a.to_properties().is_empty());
        assert_eq!(a.logging_disabled_check(), None);
    }

    #[test]
    fn nested_audit_check_is_rendered() {
        let enabled = AuditCheckConfigurationProperty::builder()
            .enabled(true)
            .build()
            .unwrap();
        let checks = AuditCheckConfigurationsProperty::builder()
            .logging_disabled_check(enabled.clone())
            .build()
            .unwrap();

        assert_eq!(checks.logging_disabled_check(), Some(&enabled));
        assert_eq!(
            checks.to_string(),
            "AuditCheckConfigurationsProperty(logging_disabled_check=AuditCheckConfigurationProperty(enabled=true))"
        );
    }

    #[test]
    fn absent_is_not_empty() {
        let absent = CfnThingProps::builder().build().unwrap();
        let empty = CfnThingProps::builder().thing_name("").build().unwrap();

        assert_eq!(absent.thing_name(), None);
        assert_eq!(empty.thing_name(), Some(""));
        assert_ne!(absent, empty);
        assert!(!absent.to_properties().contains_key("thing_name"));
        assert!(empty.to_properties().contains_key("thing_name"));

        let no_attributes = AttributePayloadProperty::builder()
            .attributes(Default::default())
            .build()
            .unwrap();
        assert_eq!(no_attributes.attributes().map(|a| a.len()), Some(0));
        assert_eq!(no_attributes.to_string(), "AttributePayloadProperty(attributes={})");
    }

    #[test]
    fn equality_is_structural() {
        let build = |mode: &str| {
            CfnCertificateProps::builder()
                .status("ACTIVE")
                .certificate_mode(mode)
                .build()
                .unwrap()
        };

        assert_eq!(build("DEFAULT"), build("DEFAULT"));
        assert_ne!(build("DEFAULT"), build("SNI_ONLY"));
        assert_ne!(
            build("DEFAULT"),
            CfnCertificateProps::builder().status("ACTIVE").build().unwrap()
        );
    }

    #[test]
    fn records_of_different_types_are_never_equal() {
        let check = AuditCheckConfigurationProperty::builder()
            .enabled(true)
            .build()
            .unwrap();
        let target = AuditNotificationTargetProperty::builder()
            .enabled(true)
            .build()
            .unwrap();

        assert_eq!(check.to_properties(), target.to_properties());
        assert_ne!(check.to_record(), target.to_record());
        assert_ne!(check.to_value(), target.to_value());
        assert!(AuditNotificationTargetProperty::from_value(&check.to_value()).is_err());
    }

    #[test]
    fn representation_is_stable() {
        let props = CfnCertificateProps::builder()
            .certificate_pem("PEM...")
            .status("ACTIVE")
            .ca_certificate_pem("CA")
            .build()
            .unwrap();
        let expected =
            r#"CfnCertificateProps(status="ACTIVE", ca_certificate_pem="CA", certificate_pem="PEM...")"#;

        assert_eq!(props.to_string(), expected);
        assert_eq!(props.to_string(), expected);
        assert_eq!(props.clone().to_string(), expected);
    }

    #[test]
    fn enum_values_are_checked_by_validate() {
        let props = CfnCertificateProps::builder()
            .status("ACTIVE")
            .build()
            .unwrap();
        assert!(props.validate().is_ok());

        let props = CfnCertificateProps::builder()
            .status("RETIRED")
            .build()
            .unwrap();
        let errors = props.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("RETIRED"));
    }

    #[test]
    fn wrapper_setters_replace_fields() {
        let scope = Scope::root("Stack");
        let props = CfnCertificateProps::builder()
            .status("ACTIVE")
            .build()
            .unwrap();
        let mut cert = CfnCertificate::new(&scope, "DeviceCert", props);

        cert.set_status("INACTIVE");
        cert.set_certificate_pem(Some("PEM...".to_string()));
        assert_eq!(cert.status(), "INACTIVE");
        assert_eq!(cert.certificate_pem(), Some("PEM..."));

        cert.set_certificate_pem(None);
        assert_eq!(cert.certificate_pem(), None);
        assert_eq!(cert.props().to_properties().len(), 1);

        assert_eq!(
            cert.attr_arn(),
            Value::GetAtt {
                logical_id: "DeviceCert".to_string(),
                attribute: "Arn".to_string(),
            }
        );
        assert_eq!(cert.resource().node_path(), "Stack/DeviceCert");
        assert_eq!(
            cert.resource().cfn_resource_type(),
            CfnCertificate::CFN_RESOURCE_TYPE_NAME
        );
    }

    #[test]
    fn tags_are_managed_on_the_wrapper() {
        let scope = Scope::root("Stack");
        let props = CfnEnvironmentEC2Props::builder()
            .instance_type("t3.small")
            .tags(vec![CfnTag::new("team", "iot"), CfnTag::new("env", "dev")])
            .build()
            .unwrap();
        let mut env = CfnEnvironmentEC2::new(&scope, "Ide", props);

        env.tags_mut().set_tag("env", "prod");
        env.tags_mut().set_tag("cost-center", "42");

        let rendered = env.render_properties(&JsonRenderer);
        assert_eq!(
            rendered["Tags"],
            json!([
                {"Key": "cost-center", "Value": "42"},
                {"Key": "env", "Value": "prod"},
                {"Key": "team", "Value": "iot"}
            ])
        );
        assert_eq!(rendered["InstanceType"], json!("t3.small"));

        // The props themselves are untouched
        assert_eq!(env.props().tags().map(|t| t.len()), Some(2));

        for key in ["cost-center", "env", "team"] {
            env.tags_mut().remove_tag(key);
        }
        assert!(!env.cfn_properties().contains_key("tags"));
    }

    #[test]
    fn inspect_discloses_type_and_props() {
        let scope = Scope::root("Stack");
        let props = CfnThingProps::builder().thing_name("sensor").build().unwrap();
        let thing = CfnThing::new(&scope, "Sensor", props);

        let mut collector = AttributeCollector::new();
        thing.inspect(&mut collector);

        assert_eq!(collector.get(INSPECT_TYPE_KEY), Some(&json!("AWS::IoT::Thing")));
        assert_eq!(
            collector.get(INSPECT_PROPS_KEY),
            Some(&json!({"ThingName": "sensor"}))
        );
    }

    #[test]
    fn stack_synthesizes_generated_resources() {
        let mut stack = Stack::new("Devices");
        let scope = stack.scope().clone();

        let thing = CfnThing::new(
            &scope,
            "Sensor",
            CfnThingProps::builder()
                .thing_name("sensor")
                .attribute_payload(
                    AttributePayloadProperty::builder()
                        .attributes([("floor".to_string(), "3".to_string())].into())
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        );
        let cert = CfnCertificate::new(
            &scope,
            "SensorCert",
            CfnCertificateProps::builder()
                .status("ACTIVE")
                .certificate_signing_request("CSR")
                .build()
                .unwrap(),
        );
        // Typed string fields hold literals; references go through the raw form
        let mut attachment = RawResource::new(
            &scope,
            "SensorAttachment",
            CfnThingPrincipalAttachment::CFN_RESOURCE_TYPE_NAME,
        )
        .with_property("principal", "Principal", cert.attr_arn())
        .with_property("thing_name", "ThingName", thing.resource().reference());
        attachment.resource_mut().add_depends_on(cert.resource());
        assert!(validate_raw(&attachment).is_ok());

        stack.add(thing).unwrap();
        stack.add(cert).unwrap();
        stack.add(attachment).unwrap();
        let cert_arn = stack.get("SensorCert").unwrap().resource().get_att("Arn");
        stack.add_output("CertificateArn", cert_arn).unwrap();

        assert!(stack.validate().is_ok());
        let template = stack.synthesize(&JsonRenderer).unwrap();
        assert_eq!(
            template,
            json!({
                "Resources": {
                    "Sensor": {
                        "Type": "AWS::IoT::Thing",
                        "Properties": {
                            "ThingName": "sensor",
                            "AttributePayload": {"Attributes": {"floor": "3"}}
                        }
                    },
                    "SensorCert": {
                        "Type": "AWS::IoT::Certificate",
                        "Properties": {
                            "Status": "ACTIVE",
                            "CertificateSigningRequest": "CSR"
                        }
                    },
                    "SensorAttachment": {
                        "Type": "AWS::IoT::ThingPrincipalAttachment",
                        "Properties": {
                            "Principal": {"Fn::GetAtt": ["SensorCert", "Arn"]},
                            "ThingName": {"Ref": "Sensor"}
                        },
                        "DependsOn": ["SensorCert"]
                    }
                },
                "Outputs": {
                    "CertificateArn": {"Value": {"Fn::GetAtt": ["SensorCert", "Arn"]}}
                }
            })
        );
    }

    #[test]
    fn stack_reports_invalid_generated_resources() {
        let mut stack = Stack::new("Devices");
        let scope = stack.scope().clone();
        let cert = CfnCertificate::new(
            &scope,
            "Cert",
            CfnCertificateProps::builder()
                .status("UNKNOWN")
                .build()
                .unwrap(),
        );
        stack.add(cert).unwrap();

        let Err(StackError::Validation { failures }) = stack.validate() else {
            panic!("Expected validation failure");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].logical_id, "Cert");
    }

    #[test]
    fn registry_lists_every_resource_type() {
        let names: Vec<&str> = resource_types().iter().map(|t| t.type_name).collect();
        assert_eq!(
            names,
            vec![
                "AWS::Cloud9::EnvironmentEC2",
                "AWS::IoT::AccountAuditConfiguration",
                "AWS::IoT::Authorizer",
                "AWS::IoT::Certificate",
                "AWS::IoT::Policy",
                "AWS::IoT::PolicyPrincipalAttachment",
                "AWS::IoT::SecurityProfile",
                "AWS::IoT::Thing",
                "AWS::IoT::ThingPrincipalAttachment",
                "AWS::IoT::TopicRule",
            ]
        );
        assert_eq!(resource_schemas().len(), names.len());

        let taggable: Vec<&str> = resource_types()
            .into_iter()
            .filter(|t| t.taggable)
            .map(|t| t.type_name)
            .collect();
        assert_eq!(
            taggable,
            vec![
                "AWS::Cloud9::EnvironmentEC2",
                "AWS::IoT::Authorizer",
                "AWS::IoT::SecurityProfile",
                "AWS::IoT::TopicRule",
            ]
        );
    }

    #[test]
    fn find_schema_by_type_name() {
        let schema = find_schema("AWS::IoT::Certificate").unwrap();
        let status = schema.get("status").unwrap();
        assert_eq!(status.cfn_name(), "Status");
        assert!(status.required);

        assert!(find_schema("AWS::IoT::Unknown").is_none());
        assert!(find_resource_type("AWS::IoT::Authorizer").unwrap().taggable);
    }

    #[test]
    fn validate_raw_against_registry() {
        let scope = Scope::root("Stack");
        let raw = RawResource::new(&scope, "Cert", "AWS::IoT::Certificate")
            .with_property("status", "Status", "ACTIVE")
            .with_property("certificate_pem", "CertificatePem", "PEM...");
        assert!(validate_raw(&raw).is_ok());
        assert_eq!(raw.property("status"), Some(&Value::from("ACTIVE")));

        let raw = RawResource::new(&scope, "Cert", "AWS::IoT::Certificate")
            .with_property("certificate_pem", "CertificatePem", 42i64)
            .with_property("colour", "Colour", "blue");
        let Err(RawValidationError::Invalid { errors, .. }) = validate_raw(&raw) else {
            panic!("Expected invalid resource");
        };
        assert_eq!(
            errors,
            vec![
                TypeError::MissingRequired {
                    name: "status".to_string()
                },
                TypeError::AttributeError {
                    name: "certificate_pem".to_string(),
                    inner: Box::new(TypeError::TypeMismatch {
                        expected: "String".to_string(),
                        got: "Int".to_string(),
                    }),
                },
                TypeError::UnknownAttribute {
                    name: "colour".to_string()
                },
            ]
        );

        let raw = RawResource::new(&scope, "Widget", "AWS::IoT::Widget");
        assert_eq!(
            validate_raw(&raw),
            Err(RawValidationError::UnknownType("AWS::IoT::Widget".to_string()))
        );
    }

    #[test]
    fn raw_properties_convert_to_typed_records() {
        let scope = Scope::root("Stack");
        let raw = RawResource::new(&scope, "Ide", "AWS::Cloud9::EnvironmentEC2")
            .with_property("instance_type", "InstanceType", "t3.small")
            .with_property("automatic_stop_time_minutes", "AutomaticStopTimeMinutes", 30i64);

        let props = CfnEnvironmentEC2Props::from_properties(raw.properties()).unwrap();
        assert_eq!(props.instance_type(), "t3.small");
        assert_eq!(props.automatic_stop_time_minutes(), Some(30));
        assert_eq!(props.repositories(), None);
    }

    #[test]
    fn nested_record_lists() {
        let repo = RepositoryProperty::builder()
            .path_component("/src")
            .repository_url("https://git-codecommit.us-east-1.amazonaws.com/v1/repos/app")
            .build()
            .unwrap();
        let props = CfnEnvironmentEC2Props::builder()
            .instance_type("t3.small")
            .repositories(vec![repo.clone()])
            .build()
            .unwrap();

        assert_eq!(props.repositories(), Some(&[repo][..]));
        let err = RepositoryProperty::builder().build().unwrap_err();
        assert_eq!(err.field(), "path_component");
    }

    #[test]
    fn json_documents_and_tag_seeding() {
        let document = Value::Map(
            [("Version".to_string(), Value::from("2012-10-17"))].into(),
        );
        let policy = CfnPolicyProps::builder()
            .policy_document(document.clone())
            .build()
            .unwrap();
        assert_eq!(policy.policy_document(), &document);
        let scope = Scope::root("Stack");
        let rendered = CfnPolicy::new(&scope, "Policy", policy).render_properties(&JsonRenderer);
        assert_eq!(rendered, json!({"PolicyDocument": {"Version": "2012-10-17"}}));

        let authorizer = CfnAuthorizer::new(
            &scope,
            "Authorizer",
            CfnAuthorizerProps::builder()
                .authorizer_function_arn("arn:aws:lambda:us-east-1:123456789012:function:auth")
                .tags(vec![CfnTag::new("owner", "iot")])
                .build()
                .unwrap(),
        );
        assert_eq!(authorizer.tags().tag_values().len(), 1);
        assert!(authorizer.validate().is_ok());
    }

    #[test]
    fn empty_properties_report_every_required_attribute() {
        let mut with_required = 0;
        for info in resource_types() {
            let required: Vec<&str> = info
                .schema
                .attributes
                .iter()
                .filter(|a| a.required)
                .map(|a| a.name.as_str())
                .collect();
            // Required attributes are declared before optional ones
            assert!(
                info.schema.attributes[..required.len()]
                    .iter()
                    .all(|a| a.required),
                "{}",
                info.type_name
            );

            match info.schema.validate(&PropertyMap::new()) {
                Ok(()) => assert!(required.is_empty(), "{}", info.type_name),
                Err(errors) => {
                    with_required += 1;
                    let missing: Vec<&str> = errors
                        .iter()
                        .map(|e| match e {
                            TypeError::MissingRequired { name } => name.as_str(),
                            other => panic!("{}: unexpected error {}", info.type_name, other),
                        })
                        .collect();
                    assert_eq!(missing, required, "{}", info.type_name);
                }
            }
        }
        assert!(with_required > 0);

        let thing = find_schema("AWS::IoT::Thing").unwrap();
        assert!(thing.validate(&PropertyMap::new()).is_ok());
        let attachment = find_schema("AWS::IoT::ThingPrincipalAttachment").unwrap();
        assert_eq!(
            attachment.validate(&PropertyMap::new()).unwrap_err(),
            vec![
                TypeError::MissingRequired {
                    name: "principal".to_string()
                },
                TypeError::MissingRequired {
                    name: "thing_name".to_string()
                },
            ]
        );
    }
}
