//! Emit - Rust source for resolved resource models
//!
//! Source is assembled as text and then parsed with `syn` and printed with
//! `prettyplease`, so malformed output is caught before it is written.

use anyhow::{Context, Result};

use crate::config::CodegenConfig;
use crate::model::{FieldModel, FieldType, RecordModel, ResourceModel};

/// Generate the formatted module for one resource
pub fn emit_resource(model: &ResourceModel, config: &CodegenConfig) -> Result<String> {
    let code = resource_source(model, config);
    format_source(&code)
        .with_context(|| format!("Generated code for {} does not parse", model.type_name))
}

/// Generate the formatted `mod.rs` for a service
pub fn emit_service_module(
    service_type: &str,
    models: &[&ResourceModel],
    config: &CodegenConfig,
) -> Result<String> {
    let mut modules: Vec<&ResourceModel> = models.to_vec();
    modules.sort_by(|a, b| a.module.cmp(&b.module));

    let mut code = format!(
        "//! {} resources\n//!\n//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen\n\n",
        service_type
    );
    for model in &modules {
        code.push_str(&format!("pub mod {};\n", model.module));
    }
    code.push('\n');
    for model in &modules {
        code.push_str(&format!(
            "pub use {}::{{{}, {}}};\n",
            model.module, model.wrapper, model.props.name
        ));
    }
    code.push_str(&format!("\nuse {};\n\n", config.registry_type));

    let entries = modules
        .iter()
        .map(|m| format!("{}::resource_type()", m.module))
        .collect::<Vec<_>>()
        .join(", ");
    code.push_str(&format!(
        "/// Registry entries for every `{}` resource\npub fn resource_types() -> Vec<{}> {{\n    vec![{}]\n}}\n",
        service_type,
        registry_name(config),
        entries
    ));

    format_source(&code)
        .with_context(|| format!("Generated module for {} does not parse", service_type))
}

/// Parse and pretty-print generated source
pub fn format_source(code: &str) -> Result<String> {
    let file = syn::parse_file(code).context("Failed to parse generated code")?;
    Ok(prettyplease::unparse(&file))
}

fn registry_name(config: &CodegenConfig) -> &str {
    config
        .registry_type
        .rsplit("::")
        .next()
        .unwrap_or(&config.registry_type)
}

fn resource_source(model: &ResourceModel, config: &CodegenConfig) -> String {
    let core = &config.core_crate;
    let mut code = String::new();

    code.push_str(&format!("//! {}\n//!\n", model.type_name));
    if let Some(desc) = &model.description {
        code.push_str(&format!("//! {}\n//!\n", desc));
    }
    code.push_str(&format!(
        "//! Auto-generated from CloudFormation schema: {}\n//!\n//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen\n\n",
        model.type_name
    ));

    code.push_str(&format!(
        "use {core}::record::{{PropertyMap, PropertyRecord, PropertyValue, RecordError, record_from_value, record_to_value}};\n"
    ));
    code.push_str(&format!(
        "use {core}::resource::{{CfnElement, CfnResource, Scope}};\n"
    ));
    let has_fields = std::iter::once(&model.props)
        .chain(&model.records)
        .any(|r| !r.fields.is_empty());
    let schema_imports = if has_fields {
        "AttributeSchema, AttributeType, RecordSchema, TypeError"
    } else {
        "RecordSchema, TypeError"
    };
    code.push_str(&format!("use {core}::schema::{{{schema_imports}}};\n"));

    let mut tag_imports = Vec::new();
    if model.props.uses_tag() || model.records.iter().any(RecordModel::uses_tag) {
        tag_imports.push("CfnTag");
    }
    if model.taggable {
        tag_imports.extend(["TagManager", "TagType"]);
    }
    if !tag_imports.is_empty() {
        code.push_str(&format!(
            "use {core}::tag::{{{}}};\n",
            tag_imports.join(", ")
        ));
    }
    code.push_str(&format!("use {core}::value::Value;\n"));
    if model.uses_map() {
        code.push_str("use std::collections::BTreeMap;\n");
    }
    code.push_str("use std::fmt;\n\n");
    code.push_str(&format!("use {};\n\n", config.registry_type));

    emit_record(&mut code, &model.props);
    for record in &model.records {
        emit_record(&mut code, record);
    }
    emit_wrapper(&mut code, model);

    code.push_str(&format!(
        r#"/// Registry entry for `{type_name}`
pub fn resource_type() -> {registry} {{
    {registry} {{
        type_name: {wrapper}::CFN_RESOURCE_TYPE_NAME,
        taggable: {taggable},
        schema: {props}::schema(),
    }}
}}
"#,
        type_name = model.type_name,
        registry = registry_name(config),
        wrapper = model.wrapper,
        taggable = model.taggable,
        props = model.props.name,
    ));

    code
}

fn push_doc(code: &mut String, text: &str) {
    code.push_str(&format!("/// {}\n", text));
}

/// Builder and setter parameter type
fn param_type(field_type: &FieldType) -> String {
    match field_type {
        FieldType::String | FieldType::Enum(_) => "impl Into<String>".to_string(),
        FieldType::Json => "impl Into<Value>".to_string(),
        t => t.rust_type(),
    }
}

fn param_conversion(field_type: &FieldType) -> &'static str {
    match field_type {
        FieldType::String | FieldType::Enum(_) | FieldType::Json => ".into()",
        _ => "",
    }
}

/// Accessor signature and body reading `self.<ident>`
fn accessor(field: &FieldModel) -> (String, String) {
    let t = &field.field_type;
    let ident = &field.ident;
    match (field.required, t.is_copy(), t.is_deref()) {
        (true, true, _) => (t.accessor_type(), format!("self.{ident}")),
        (true, false, _) => (t.accessor_type(), format!("&self.{ident}")),
        (false, true, _) => (format!("Option<{}>", t.accessor_type()), format!("self.{ident}")),
        (false, false, true) => (
            format!("Option<{}>", t.accessor_type()),
            format!("self.{ident}.as_deref()"),
        ),
        (false, false, false) => (
            format!("Option<{}>", t.accessor_type()),
            format!("self.{ident}.as_ref()"),
        ),
    }
}

fn stored_type(field: &FieldModel) -> String {
    if field.required {
        field.field_type.rust_type()
    } else {
        format!("Option<{}>", field.field_type.rust_type())
    }
}

fn emit_record(code: &mut String, record: &RecordModel) {
    let name = &record.name;

    // Struct
    if let Some(desc) = &record.description {
        push_doc(code, desc);
    }
    code.push_str(&format!(
        "#[derive(Debug, Clone, PartialEq)]\npub struct {name} {{\n"
    ));
    for field in &record.fields {
        code.push_str(&format!("    {}: {},\n", field.ident, stored_type(field)));
    }
    code.push_str("}\n\n");

    // Accessors
    code.push_str(&format!("impl {name} {{\n"));
    code.push_str(&format!(
        "    pub fn builder() -> {name}Builder {{\n        {name}Builder::default()\n    }}\n\n"
    ));
    for field in &record.fields {
        let (ret, body) = accessor(field);
        match &field.description {
            Some(desc) => push_doc(code, desc),
            None => push_doc(code, &format!("`{}`", field.cfn_name)),
        }
        code.push_str(&format!(
            "    pub fn {}(&self) -> {} {{\n        {}\n    }}\n\n",
            field.ident, ret, body
        ));
    }
    code.push_str("}\n\n");

    // Builder
    code.push_str(&format!(
        "/// Builder for [`{name}`]\n#[derive(Debug, Clone, Default)]\npub struct {name}Builder {{\n"
    ));
    for field in &record.fields {
        code.push_str(&format!(
            "    {}: Option<{}>,\n",
            field.ident,
            field.field_type.rust_type()
        ));
    }
    code.push_str("}\n\n");

    code.push_str(&format!("impl {name}Builder {{\n"));
    for field in &record.fields {
        code.push_str(&format!(
            "    pub fn {ident}(mut self, value: {param}) -> Self {{\n        self.{ident} = Some(value{conv});\n        self\n    }}\n\n",
            ident = field.ident,
            param = param_type(&field.field_type),
            conv = param_conversion(&field.field_type),
        ));
    }
    code.push_str(&format!(
        "    pub fn build(self) -> Result<{name}, RecordError> {{\n        Ok({name} {{\n"
    ));
    for field in &record.fields {
        if field.required {
            code.push_str(&format!(
                "            {ident}: self.{ident}.ok_or_else(|| RecordError::missing({name}::TYPE_NAME, {key:?}))?,\n",
                ident = field.ident,
                key = field.key,
            ));
        } else {
            code.push_str(&format!("            {0}: self.{0},\n", field.ident));
        }
    }
    code.push_str("        })\n    }\n}\n\n");

    // PropertyRecord
    code.push_str(&format!(
        "impl PropertyRecord for {name} {{\n    const TYPE_NAME: &'static str = {name:?};\n\n"
    ));
    code.push_str("    fn schema() -> RecordSchema {\n        RecordSchema::new(Self::TYPE_NAME)\n");
    if let Some(desc) = &record.description {
        code.push_str(&format!("            .with_description({:?})\n", desc));
    }
    for field in &record.fields {
        code.push_str(&format!(
            "            .attribute(\n                AttributeSchema::new({:?}, {})",
            field.key,
            field.field_type.attribute_type()
        ));
        if field.required {
            code.push_str("\n                    .required()");
        }
        if let Some(desc) = &field.description {
            code.push_str(&format!("\n                    .with_description({:?})", desc));
        }
        code.push_str(&format!(
            "\n                    .with_provider_name({:?}),\n            )\n",
            field.cfn_name
        ));
    }
    code.push_str("    }\n\n");

    if record.fields.is_empty() {
        code.push_str("    fn to_properties(&self) -> PropertyMap {\n        PropertyMap::new()\n    }\n\n");
        code.push_str(
            "    fn from_properties(_map: &PropertyMap) -> Result<Self, RecordError> {\n        Ok(Self {})\n    }\n}\n\n",
        );
    } else {
        code.push_str("    fn to_properties(&self) -> PropertyMap {\n        let mut map = PropertyMap::new();\n");
        for field in &record.fields {
            if field.required {
                code.push_str(&format!(
                    "        map.insert({:?}, {:?}, &self.{});\n",
                    field.key, field.cfn_name, field.ident
                ));
            } else {
                code.push_str(&format!(
                    "        map.insert_opt({:?}, {:?}, self.{}.as_ref());\n",
                    field.key, field.cfn_name, field.ident
                ));
            }
        }
        code.push_str("        map\n    }\n\n");

        code.push_str(
            "    fn from_properties(map: &PropertyMap) -> Result<Self, RecordError> {\n        Ok(Self {\n",
        );
        for field in &record.fields {
            let lookup = if field.required { "required" } else { "optional" };
            code.push_str(&format!(
                "            {}: map.{}(Self::TYPE_NAME, {:?})?,\n",
                field.ident, lookup, field.key
            ));
        }
        code.push_str("        })\n    }\n}\n\n");
    }

    // PropertyValue and Display
    code.push_str(&format!(
        r#"impl PropertyValue for {name} {{
    fn to_value(&self) -> Value {{
        record_to_value(self)
    }}

    fn from_value(value: &Value) -> Result<Self, TypeError> {{
        record_from_value(value)
    }}
}}

impl fmt::Display for {name} {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        fmt::Display::fmt(&self.to_record(), f)
    }}
}}

"#
    ));
}

fn emit_wrapper(code: &mut String, model: &ResourceModel) {
    let wrapper = &model.wrapper;
    let props = &model.props.name;

    push_doc(code, &format!("A CloudFormation `{}`", model.type_name));
    code.push_str(&format!(
        "#[derive(Debug, Clone)]\npub struct {wrapper} {{\n    resource: CfnResource,\n    props: {props},\n"
    ));
    if model.taggable {
        code.push_str("    tags: TagManager,\n");
    }
    code.push_str("}\n\n");

    code.push_str(&format!(
        "impl {wrapper} {{\n    pub const CFN_RESOURCE_TYPE_NAME: &'static str = {:?};\n\n",
        model.type_name
    ));

    code.push_str(&format!(
        "    pub fn new(scope: &Scope, id: &str, props: {props}) -> Self {{\n        Self {{\n            resource: CfnResource::new(scope, id, Self::CFN_RESOURCE_TYPE_NAME),\n"
    ));
    if model.taggable {
        let initial = match model.props.field("tags") {
            Some(field) if field.required => format!("Some(props.{}.as_slice())", field.ident),
            Some(field) => format!("props.{}.as_deref()", field.ident),
            None => "None".to_string(),
        };
        code.push_str(&format!(
            "            tags: TagManager::new(TagType::Standard, Self::CFN_RESOURCE_TYPE_NAME, {initial}),\n"
        ));
    }
    code.push_str("            props,\n        }\n    }\n\n");

    code.push_str(&format!(
        "    pub fn props(&self) -> &{props} {{\n        &self.props\n    }}\n\n"
    ));

    for attribute in &model.attributes {
        push_doc(code, &format!("`Fn::GetAtt` reference to `{}`", attribute.cfn_name));
        code.push_str(&format!(
            "    pub fn {}(&self) -> Value {{\n        self.resource.get_att({:?})\n    }}\n\n",
            attribute.method, attribute.cfn_name
        ));
    }

    for field in &model.props.fields {
        if model.taggable && field.key == "tags" {
            continue;
        }
        let (ret, _) = accessor(field);
        code.push_str(&format!(
            "    pub fn {ident}(&self) -> {ret} {{\n        self.props.{ident}()\n    }}\n\n",
            ident = field.ident,
        ));
        if field.required {
            code.push_str(&format!(
                "    pub fn set_{key}(&mut self, value: {param}) {{\n        self.props.{ident} = value{conv};\n    }}\n\n",
                key = field.key,
                ident = field.ident,
                param = param_type(&field.field_type),
                conv = param_conversion(&field.field_type),
            ));
        } else {
            code.push_str(&format!(
                "    pub fn set_{key}(&mut self, value: Option<{t}>) {{\n        self.props.{ident} = value;\n    }}\n\n",
                key = field.key,
                ident = field.ident,
                t = field.field_type.rust_type(),
            ));
        }
    }

    if model.taggable {
        code.push_str(
            "    pub fn tags(&self) -> &TagManager {\n        &self.tags\n    }\n\n    pub fn tags_mut(&mut self) -> &mut TagManager {\n        &mut self.tags\n    }\n",
        );
    }
    code.push_str("}\n\n");

    code.push_str(&format!(
        "impl CfnElement for {wrapper} {{\n    fn resource(&self) -> &CfnResource {{\n        &self.resource\n    }}\n\n    fn resource_mut(&mut self) -> &mut CfnResource {{\n        &mut self.resource\n    }}\n\n    fn schema(&self) -> RecordSchema {{\n        {props}::schema()\n    }}\n\n"
    ));
    if model.taggable {
        code.push_str(
            "    fn cfn_properties(&self) -> PropertyMap {\n        let mut map = self.props.to_properties();\n        self.tags.apply(&mut map);\n        map\n    }\n}\n\n",
        );
    } else {
        code.push_str(
            "    fn cfn_properties(&self) -> PropertyMap {\n        self.props.to_properties()\n    }\n}\n\n",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfn::CfnSchema;

    fn model(json: &str) -> ResourceModel {
        let schema: CfnSchema = serde_json::from_str(json).unwrap();
        ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap()
    }

    fn environment() -> ResourceModel {
        model(
            r##"{
                "typeName": "AWS::Cloud9::EnvironmentEC2",
                "description": "Resource Type definition for AWS::Cloud9::EnvironmentEC2",
                "definitions": {
                    "Repository": {
                        "type": "object",
                        "properties": {
                            "PathComponent": {"type": "string"},
                            "RepositoryUrl": {"type": "string"}
                        },
                        "required": ["PathComponent", "RepositoryUrl"]
                    },
                    "Tag": {
                        "type": "object",
                        "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}}
                    }
                },
                "properties": {
                    "AutomaticStopTimeMinutes": {"type": "integer"},
                    "InstanceType": {"type": "string", "description": "The instance type."},
                    "Repositories": {"type": "array", "items": {"$ref": "#/definitions/Repository"}},
                    "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
                    "Arn": {"type": "string"}
                },
                "required": ["InstanceType"],
                "readOnlyProperties": ["/properties/Arn"],
                "tagging": {"taggable": true}
            }"##,
        )
    }

    fn items(code: &str) -> Vec<syn::Item> {
        syn::parse_file(code).unwrap().items
    }

    fn struct_fields(code: &str, name: &str) -> Vec<String> {
        items(code)
            .into_iter()
            .find_map(|item| match item {
                syn::Item::Struct(s) if s.ident == name => Some(
                    s.fields
                        .iter()
                        .filter_map(|f| f.ident.as_ref().map(|i| i.to_string()))
                        .collect(),
                ),
                _ => None,
            })
            .unwrap()
    }

    fn impl_methods(code: &str, self_ty: &str, trait_name: Option<&str>) -> Vec<String> {
        let mut methods = Vec::new();
        for item in items(code) {
            let syn::Item::Impl(imp) = item else {
                continue;
            };
            let syn::Type::Path(path) = imp.self_ty.as_ref() else {
                continue;
            };
            if !path.path.is_ident(self_ty) {
                continue;
            }
            let implemented = imp
                .trait_
                .as_ref()
                .and_then(|(_, p, _)| p.segments.last())
                .map(|s| s.ident.to_string());
            if implemented.as_deref() != trait_name {
                continue;
            }
            for item in imp.items {
                if let syn::ImplItem::Fn(f) = item {
                    methods.push(f.sig.ident.to_string());
                }
            }
        }
        methods
    }

    #[test]
    fn emitted_resource_parses_and_declares_types() {
        let code = emit_resource(&environment(), &CodegenConfig::default()).unwrap();

        assert_eq!(
            struct_fields(&code, "CfnEnvironmentEC2Props"),
            vec!["instance_type", "automatic_stop_time_minutes", "repositories", "tags"]
        );
        assert_eq!(
            struct_fields(&code, "RepositoryProperty"),
            vec!["path_component", "repository_url"]
        );
        assert_eq!(
            struct_fields(&code, "CfnEnvironmentEC2"),
            vec!["resource", "props", "tags"]
        );
        assert!(code.contains("DO NOT EDIT MANUALLY"));
    }

    #[test]
    fn wrapper_exposes_attributes_accessors_and_tags() {
        let code = emit_resource(&environment(), &CodegenConfig::default()).unwrap();
        let methods = impl_methods(&code, "CfnEnvironmentEC2", None);

        for expected in [
            "new",
            "props",
            "attr_arn",
            "instance_type",
            "set_instance_type",
            "repositories",
            "set_repositories",
            "tags",
            "tags_mut",
        ] {
            assert!(methods.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!methods.contains(&"set_tags".to_string()));

        let element = impl_methods(&code, "CfnEnvironmentEC2", Some("CfnElement"));
        assert_eq!(
            element,
            vec!["resource", "resource_mut", "schema", "cfn_properties"]
        );
    }

    #[test]
    fn records_get_builders_and_trait_impls() {
        let code = emit_resource(&environment(), &CodegenConfig::default()).unwrap();

        assert_eq!(
            impl_methods(&code, "RepositoryPropertyBuilder", None),
            vec!["path_component", "repository_url", "build"]
        );
        assert_eq!(
            impl_methods(&code, "RepositoryProperty", Some("PropertyRecord")),
            vec!["schema", "to_properties", "from_properties"]
        );
        assert_eq!(
            impl_methods(&code, "RepositoryProperty", Some("PropertyValue")),
            vec!["to_value", "from_value"]
        );
        assert!(code.contains("RepositoryProperty::TYPE_NAME"));
        assert!(code.contains("AttributeType::list(AttributeType::record(\"CfnTag\"))"));
        assert!(code.contains(".with_description(\"The instance type.\")"));
    }

    #[test]
    fn empty_record_is_valid_rust() {
        let code = emit_resource(
            &model(r#"{"typeName": "AWS::IoT::Empty", "properties": {}}"#),
            &CodegenConfig::default(),
        )
        .unwrap();

        assert!(struct_fields(&code, "CfnEmptyProps").is_empty());
        assert!(!code.contains("AttributeSchema"));
        assert!(!code.contains("TagManager"));
        assert!(!code.contains("BTreeMap"));
    }

    #[test]
    fn uses_configured_core_crate() {
        let config = CodegenConfig {
            core_crate: "crate::core".to_string(),
            ..Default::default()
        };
        let code = emit_resource(&environment(), &config).unwrap();
        assert!(code.contains("use crate::core::record::"));
        assert!(!code.contains("cfnkit_core"));
    }

    #[test]
    fn service_module_lists_resources() {
        let thing = model(r#"{"typeName": "AWS::IoT::Thing", "properties": {}}"#);
        let policy = model(
            r#"{"typeName": "AWS::IoT::Policy", "properties": {"PolicyName": {"type": "string"}}}"#,
        );
        let code =
            emit_service_module("AWS::IoT", &[&thing, &policy], &CodegenConfig::default()).unwrap();

        let modules: Vec<String> = items(&code)
            .into_iter()
            .filter_map(|item| match item {
                syn::Item::Mod(m) => Some(m.ident.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(modules, vec!["policy", "thing"]);
        assert!(code.contains("pub use policy::{CfnPolicy, CfnPolicyProps};"));
        assert!(code.contains("pub fn resource_types() -> Vec<ResourceTypeInfo>"));
    }

    #[test]
    fn format_source_rejects_invalid_code() {
        assert!(format_source("pub struct {").is_err());
    }
}
