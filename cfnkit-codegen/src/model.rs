//! Model - Resource schemas resolved into records and typed fields
//!
//! A resource becomes a props record, one record per referenced object
//! definition (`<Definition>Property`) and a list of read-only attributes.
//! Fields are ordered required first, then optional, each group sorted by
//! CloudFormation name.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use anyhow::{Context, Result, bail};
use heck::{ToPascalCase, ToSnakeCase};
use regex::Regex;

use crate::cfn::{CfnProperty, CfnSchema};
use crate::config::CodegenConfig;

/// Aliased definitions deeper than this are treated as a cycle
const MAX_ALIAS_DEPTH: usize = 16;

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Method names already taken on generated records and wrappers
const RESERVED_METHODS: &[&str] = &[
    "build",
    "builder",
    "cfn_properties",
    "from_properties",
    "from_value",
    "inspect",
    "new",
    "props",
    "render_properties",
    "resource",
    "resource_mut",
    "schema",
    "tags_mut",
    "to_properties",
    "to_record",
    "to_value",
    "validate",
];

/// Rust-side type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    /// String restricted to the listed values
    Enum(Vec<String>),
    Integer,
    Number,
    Boolean,
    Json,
    Tag,
    /// Generated record, by Rust type name
    Record(String),
    List(Box<FieldType>),
    Map(Box<FieldType>),
}

impl FieldType {
    pub fn rust_type(&self) -> String {
        match self {
            FieldType::String | FieldType::Enum(_) => "String".to_string(),
            FieldType::Integer => "i64".to_string(),
            FieldType::Number => "f64".to_string(),
            FieldType::Boolean => "bool".to_string(),
            FieldType::Json => "Value".to_string(),
            FieldType::Tag => "CfnTag".to_string(),
            FieldType::Record(name) => name.clone(),
            FieldType::List(inner) => format!("Vec<{}>", inner.rust_type()),
            FieldType::Map(inner) => format!("BTreeMap<String, {}>", inner.rust_type()),
        }
    }

    /// Expression building the matching `AttributeType`
    pub fn attribute_type(&self) -> String {
        match self {
            FieldType::String => "AttributeType::String".to_string(),
            FieldType::Enum(values) => {
                let values = values
                    .iter()
                    .map(|v| format!("{:?}", v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("AttributeType::enumeration(&[{}])", values)
            }
            FieldType::Integer => "AttributeType::Int".to_string(),
            FieldType::Number => "AttributeType::Number".to_string(),
            FieldType::Boolean => "AttributeType::Bool".to_string(),
            FieldType::Json => "AttributeType::Json".to_string(),
            FieldType::Tag => "AttributeType::record(\"CfnTag\")".to_string(),
            FieldType::Record(name) => format!("AttributeType::record({:?})", name),
            FieldType::List(inner) => format!("AttributeType::list({})", inner.attribute_type()),
            FieldType::Map(inner) => format!("AttributeType::map({})", inner.attribute_type()),
        }
    }

    pub fn is_copy(&self) -> bool {
        matches!(
            self,
            FieldType::Integer | FieldType::Number | FieldType::Boolean
        )
    }

    /// Whether the type is `String` or `Vec<_>`, read through `Deref`
    pub fn is_deref(&self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::Enum(_) | FieldType::List(_)
        )
    }

    /// Borrowed form returned by accessors
    pub fn accessor_type(&self) -> String {
        match self {
            FieldType::String | FieldType::Enum(_) => "&str".to_string(),
            FieldType::List(inner) => format!("&[{}]", inner.rust_type()),
            t if t.is_copy() => t.rust_type(),
            t => format!("&{}", t.rust_type()),
        }
    }

    pub fn uses_map(&self) -> bool {
        match self {
            FieldType::Map(_) => true,
            FieldType::List(inner) => inner.uses_map(),
            _ => false,
        }
    }

    pub fn uses_tag(&self) -> bool {
        match self {
            FieldType::Tag => true,
            FieldType::List(inner) | FieldType::Map(inner) => inner.uses_tag(),
            _ => false,
        }
    }
}

/// A single record field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    /// Rust identifier (e.g., "type_")
    pub ident: String,
    /// Property map key (e.g., "type")
    pub key: String,
    /// CloudFormation property name (e.g., "Type")
    pub cfn_name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub description: Option<String>,
}

impl FieldModel {
    pub fn new(cfn_name: &str, field_type: FieldType, required: bool) -> Self {
        let key = cfn_name.to_snake_case();
        Self {
            ident: field_ident(&key),
            key,
            cfn_name: cfn_name.to_string(),
            field_type,
            required,
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

fn field_ident(key: &str) -> String {
    if RUST_KEYWORDS.contains(&key) || RESERVED_METHODS.contains(&key) {
        format!("{}_", key)
    } else {
        key.to_string()
    }
}

/// A generated record type
#[derive(Debug, Clone, PartialEq)]
pub struct RecordModel {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldModel>,
}

impl RecordModel {
    pub fn uses_map(&self) -> bool {
        self.fields.iter().any(|f| f.field_type.uses_map())
    }

    pub fn uses_tag(&self) -> bool {
        self.fields.iter().any(|f| f.field_type.uses_tag())
    }

    pub fn field(&self, key: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// A read-only attribute exposed as `attr_*`
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModel {
    pub method: String,
    pub cfn_name: String,
}

/// Everything generated for one resource type
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceModel {
    /// CloudFormation type (e.g., "AWS::IoT::Certificate")
    pub type_name: String,
    /// Service module (e.g., "iot")
    pub service: String,
    /// Resource module (e.g., "certificate")
    pub module: String,
    /// Wrapper type (e.g., "CfnCertificate")
    pub wrapper: String,
    pub description: Option<String>,
    pub props: RecordModel,
    /// Nested records, sorted by name
    pub records: Vec<RecordModel>,
    pub attributes: Vec<AttributeModel>,
    pub taggable: bool,
}

impl ResourceModel {
    pub fn from_schema(schema: &CfnSchema, config: &CodegenConfig) -> Result<Self> {
        let (service, resource) = split_type_name(&schema.type_name)?;
        let wrapper = format!("Cfn{}", resource);

        let read_only = schema.read_only_names();
        let mut resolver = Resolver::new(schema, config)?;

        let props = RecordModel {
            name: format!("{}Props", wrapper),
            description: Some(format!("Properties for defining a `{}`", schema.type_name)),
            fields: resolver
                .fields(&schema.properties, &schema.required, &read_only)
                .with_context(|| format!("Failed to resolve {}", schema.type_name))?,
        };

        let no_properties = BTreeMap::new();
        let mut records = Vec::new();
        while let Some(name) = resolver.pending.pop() {
            let definition = schema
                .definitions
                .get(&name)
                .with_context(|| format!("Unknown definition: {}", name))?;
            let properties = definition.properties.as_ref().unwrap_or(&no_properties);
            let fields = resolver
                .fields(properties, &definition.required, &[])
                .with_context(|| format!("Failed to resolve definition {}", name))?;
            records.push(RecordModel {
                name: record_name(&name),
                description: definition
                    .description
                    .as_deref()
                    .map(|d| config.clean_description(d)),
                fields,
            });
        }
        records.sort_by(|a, b| a.name.cmp(&b.name));

        let mut attributes: Vec<AttributeModel> = read_only
            .iter()
            .map(|name| AttributeModel {
                method: format!("attr_{}", name.to_snake_case()),
                cfn_name: name.to_string(),
            })
            .collect();
        attributes.sort_by(|a, b| a.cfn_name.cmp(&b.cfn_name));

        let taggable = schema.is_taggable()
            && props
                .field("tags")
                .is_some_and(|f| f.field_type == FieldType::List(Box::new(FieldType::Tag)));

        log::debug!(
            "Resolved {}: {} fields, {} nested records, {} attributes",
            schema.type_name,
            props.fields.len(),
            records.len(),
            attributes.len()
        );

        Ok(Self {
            type_name: schema.type_name.clone(),
            service,
            module: resource.to_snake_case(),
            wrapper,
            description: schema
                .description
                .as_deref()
                .map(|d| config.clean_description(d)),
            props,
            records,
            attributes,
            taggable,
        })
    }

    pub fn uses_map(&self) -> bool {
        self.props.uses_map() || self.records.iter().any(RecordModel::uses_map)
    }

    pub fn uses_tag(&self) -> bool {
        self.taggable || self.props.uses_tag() || self.records.iter().any(RecordModel::uses_tag)
    }
}

/// `AWS::IoT::Certificate` -> ("iot", "Certificate")
fn split_type_name(type_name: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = type_name.split("::").collect();
    let ident = Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").context("Invalid identifier pattern")?;
    if parts.len() != 3 || !parts.iter().all(|p| ident.is_match(p)) {
        bail!("Invalid type name format: {}", type_name);
    }
    Ok((parts[1].to_lowercase(), parts[2].to_string()))
}

/// Definition name -> record type name (`Repository` -> `RepositoryProperty`)
pub fn record_name(definition: &str) -> String {
    let is_ident = definition
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
        && definition.chars().all(|c| c.is_ascii_alphanumeric());
    if is_ident {
        format!("{}Property", definition)
    } else {
        format!("{}Property", definition.to_pascal_case())
    }
}

struct Resolver<'a> {
    schema: &'a CfnSchema,
    config: &'a CodegenConfig,
    ref_pattern: Regex,
    seen: BTreeSet<String>,
    pending: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn new(schema: &'a CfnSchema, config: &'a CodegenConfig) -> Result<Self> {
        Ok(Self {
            schema,
            config,
            ref_pattern: Regex::new(r"^#/definitions/([A-Za-z0-9_]+)$")
                .context("Invalid $ref pattern")?,
            seen: BTreeSet::new(),
            pending: Vec::new(),
        })
    }

    fn fields(
        &mut self,
        properties: &BTreeMap<String, CfnProperty>,
        required: &[String],
        skip: &[&str],
    ) -> Result<Vec<FieldModel>> {
        let mut fields = Vec::new();
        for (cfn_name, prop) in properties {
            if skip.contains(&cfn_name.as_str()) {
                continue;
            }
            let field_type = self
                .resolve(prop, 0)
                .with_context(|| format!("Failed to resolve property {}", cfn_name))?;
            let description = prop
                .description
                .as_deref()
                .map(|d| self.config.clean_description(d));
            fields.push(
                FieldModel::new(cfn_name, field_type, required.contains(cfn_name))
                    .with_description(description),
            );
        }
        // Stable: each group keeps the map's CloudFormation name order
        fields.sort_by_key(|f| !f.required);
        Ok(fields)
    }

    fn resolve(&mut self, prop: &CfnProperty, depth: usize) -> Result<FieldType> {
        if depth > MAX_ALIAS_DEPTH {
            bail!("Definition aliases nest too deeply");
        }
        if let Some(ref_path) = &prop.ref_path {
            return self.resolve_ref(ref_path, depth);
        }
        if let Some(values) = &prop.enum_values {
            return Ok(FieldType::Enum(values.clone()));
        }
        let Some(prop_type) = &prop.prop_type else {
            return Ok(FieldType::Json);
        };

        let field_type = match prop_type.single() {
            Some("string") => {
                if self.config.infer_enums_from_descriptions
                    && let Some(desc) = &prop.description
                    && let Some(values) = extract_enum_from_description(desc)
                {
                    FieldType::Enum(values)
                } else {
                    FieldType::String
                }
            }
            Some("integer") => FieldType::Integer,
            Some("number") => FieldType::Number,
            Some("boolean") => FieldType::Boolean,
            Some("array") => match &prop.items {
                Some(items) => FieldType::List(Box::new(self.resolve(items, depth)?)),
                None => FieldType::List(Box::new(FieldType::Json)),
            },
            Some("object") => match prop.pattern_properties.as_ref().and_then(|p| p.values().next())
            {
                Some(value) => FieldType::Map(Box::new(self.resolve(value, depth)?)),
                None => FieldType::Json,
            },
            _ => FieldType::Json,
        };
        Ok(field_type)
    }

    fn resolve_ref(&mut self, ref_path: &str, depth: usize) -> Result<FieldType> {
        let name = self
            .ref_pattern
            .captures(ref_path)
            .map(|caps| caps[1].to_string())
            .with_context(|| format!("Unsupported $ref: {}", ref_path))?;

        if name == self.config.tag_definition {
            return Ok(FieldType::Tag);
        }

        let schema = self.schema;
        let definition = schema
            .definitions
            .get(&name)
            .with_context(|| format!("Unknown definition: {}", name))?;

        if definition.is_record() {
            if self.seen.insert(name.clone()) {
                self.pending.push(name.clone());
            }
            return Ok(FieldType::Record(record_name(&name)));
        }
        self.resolve(definition, depth + 1)
    }
}

/// Check if a string looks like a property name (CamelCase or PascalCase)
/// rather than an enum value (lowercase, kebab-case, or UPPER_CASE)
fn looks_like_property_name(s: &str) -> bool {
    let Some(first_char) = s.chars().next() else {
        return false;
    };
    first_char.is_uppercase() && s.chars().any(|c| c.is_lowercase())
}

/// Extract enum values from description text.
/// CloudFormation marks allowed values with ``value`` (double backticks).
fn extract_enum_from_description(description: &str) -> Option<Vec<String>> {
    let re = Regex::new(r"``([^`]+)``").ok()?;
    let mut seen = HashSet::new();
    let values: Vec<String> = re
        .captures_iter(description)
        .map(|cap| cap[1].to_string())
        .filter(|v| !looks_like_property_name(v))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    // A single value is a mention, not an enum
    if values.len() >= 2 { Some(values) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CfnSchema {
        serde_json::from_str(json).unwrap()
    }

    fn certificate() -> CfnSchema {
        parse(
            r##"{
                "typeName": "AWS::IoT::Certificate",
                "properties": {
                    "CACertificatePem": {"type": "string"},
                    "CertificatePem": {"type": "string"},
                    "CertificateSigningRequest": {"type": "string"},
                    "CertificateMode": {"type": "string", "enum": ["DEFAULT", "SNI_ONLY"]},
                    "Status": {"type": "string", "enum": ["ACTIVE", "INACTIVE", "REVOKED"]},
                    "Id": {"type": "string"},
                    "Arn": {"type": "string"}
                },
                "required": ["Status"],
                "readOnlyProperties": ["/properties/Arn", "/properties/Id"]
            }"##,
        )
    }

    #[test]
    fn names_from_type_name() {
        let model = ResourceModel::from_schema(&certificate(), &CodegenConfig::default()).unwrap();
        assert_eq!(model.service, "iot");
        assert_eq!(model.module, "certificate");
        assert_eq!(model.wrapper, "CfnCertificate");
        assert_eq!(model.props.name, "CfnCertificateProps");
    }

    #[test]
    fn acronyms_keep_their_case_in_type_names() {
        let schema = parse(r#"{"typeName": "AWS::Cloud9::EnvironmentEC2", "properties": {}}"#);
        let model = ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap();
        assert_eq!(model.service, "cloud9");
        assert_eq!(model.module, "environment_ec2");
        assert_eq!(model.wrapper, "CfnEnvironmentEC2");
    }

    #[test]
    fn required_fields_first_then_sorted() {
        let model = ResourceModel::from_schema(&certificate(), &CodegenConfig::default()).unwrap();
        let keys: Vec<&str> = model.props.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "status",
                "ca_certificate_pem",
                "certificate_mode",
                "certificate_pem",
                "certificate_signing_request",
            ]
        );
        assert!(model.props.fields[0].required);
        assert!(model.props.fields[1..].iter().all(|f| !f.required));
    }

    #[test]
    fn read_only_properties_become_attributes() {
        let model = ResourceModel::from_schema(&certificate(), &CodegenConfig::default()).unwrap();
        assert!(model.props.field("arn").is_none());
        let methods: Vec<&str> = model.attributes.iter().map(|a| a.method.as_str()).collect();
        assert_eq!(methods, vec!["attr_arn", "attr_id"]);
    }

    #[test]
    fn enums_stay_strings() {
        let model = ResourceModel::from_schema(&certificate(), &CodegenConfig::default()).unwrap();
        let status = model.props.field("status").unwrap();
        assert_eq!(status.field_type.rust_type(), "String");
        assert_eq!(
            status.field_type.attribute_type(),
            "AttributeType::enumeration(&[\"ACTIVE\", \"INACTIVE\", \"REVOKED\"])"
        );
    }

    #[test]
    fn definitions_become_records_and_tags_map_to_cfn_tag() {
        let schema = parse(
            r##"{
                "typeName": "AWS::Cloud9::EnvironmentEC2",
                "definitions": {
                    "Repository": {
                        "type": "object",
                        "properties": {
                            "PathComponent": {"type": "string"},
                            "RepositoryUrl": {"type": "string"}
                        },
                        "required": ["RepositoryUrl", "PathComponent"]
                    },
                    "Tag": {
                        "type": "object",
                        "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}}
                    },
                    "Unused": {"type": "object", "properties": {"X": {"type": "string"}}}
                },
                "properties": {
                    "InstanceType": {"type": "string"},
                    "Repositories": {"type": "array", "items": {"$ref": "#/definitions/Repository"}},
                    "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}
                },
                "required": ["InstanceType"],
                "tagging": {"taggable": true}
            }"##,
        );
        let model = ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap();

        assert_eq!(model.records.len(), 1);
        assert_eq!(model.records[0].name, "RepositoryProperty");
        assert!(model.records[0].fields.iter().all(|f| f.required));

        let repositories = model.props.field("repositories").unwrap();
        assert_eq!(repositories.field_type.rust_type(), "Vec<RepositoryProperty>");
        let tags = model.props.field("tags").unwrap();
        assert_eq!(tags.field_type.rust_type(), "Vec<CfnTag>");
        assert!(model.taggable);
        assert!(model.uses_tag());
        assert!(!model.uses_map());
    }

    #[test]
    fn taggable_requires_standard_tag_list() {
        let schema = parse(
            r#"{
                "typeName": "AWS::IoT::Thing",
                "properties": {"ThingName": {"type": "string"}},
                "tagging": {"taggable": true}
            }"#,
        );
        let model = ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap();
        assert!(!model.taggable);
    }

    #[test]
    fn object_shapes() {
        let schema = parse(
            r##"{
                "typeName": "AWS::IoT::Thing",
                "definitions": {
                    "Name": {"type": "string"},
                    "AttributePayload": {
                        "type": "object",
                        "properties": {
                            "Attributes": {
                                "type": "object",
                                "patternProperties": {"[a-zA-Z0-9_.,@/:#-]+": {"type": "string"}}
                            }
                        }
                    }
                },
                "properties": {
                    "AttributePayload": {"$ref": "#/definitions/AttributePayload"},
                    "Document": {"type": "object"},
                    "Either": {"type": ["object", "string"]},
                    "Untyped": {},
                    "ThingName": {"$ref": "#/definitions/Name"}
                }
            }"##,
        );
        let model = ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap();

        let types: BTreeMap<&str, String> = model
            .props
            .fields
            .iter()
            .map(|f| (f.key.as_str(), f.field_type.rust_type()))
            .collect();
        assert_eq!(types["attribute_payload"], "AttributePayloadProperty");
        assert_eq!(types["document"], "Value");
        assert_eq!(types["either"], "Value");
        assert_eq!(types["untyped"], "Value");
        assert_eq!(types["thing_name"], "String");

        let payload = &model.records[0];
        assert_eq!(
            payload.fields[0].field_type.rust_type(),
            "BTreeMap<String, String>"
        );
        assert!(model.uses_map());
    }

    #[test]
    fn keywords_and_reserved_names_get_suffix() {
        let field = FieldModel::new("Type", FieldType::String, false);
        assert_eq!(field.ident, "type_");
        assert_eq!(field.key, "type");

        let field = FieldModel::new("Schema", FieldType::String, false);
        assert_eq!(field.ident, "schema_");

        let field = FieldModel::new("ThingName", FieldType::String, false);
        assert_eq!(field.ident, "thing_name");
    }

    #[test]
    fn unknown_definition_is_an_error() {
        let schema = parse(
            r##"{
                "typeName": "AWS::IoT::Thing",
                "properties": {"Payload": {"$ref": "#/definitions/Missing"}}
            }"##,
        );
        let err = ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown definition: Missing"));
    }

    #[test]
    fn invalid_type_name_is_an_error() {
        let schema = parse(r#"{"typeName": "AWS::IoT", "properties": {}}"#);
        assert!(ResourceModel::from_schema(&schema, &CodegenConfig::default()).is_err());
    }

    #[test]
    fn accessor_types() {
        assert_eq!(FieldType::String.accessor_type(), "&str");
        assert_eq!(FieldType::Integer.accessor_type(), "i64");
        assert_eq!(
            FieldType::List(Box::new(FieldType::Tag)).accessor_type(),
            "&[CfnTag]"
        );
        assert_eq!(
            FieldType::Record("RepositoryProperty".to_string()).accessor_type(),
            "&RepositoryProperty"
        );
        assert_eq!(FieldType::Json.accessor_type(), "&Value");
    }

    #[test]
    fn enum_inference_is_opt_in() {
        let schema = parse(
            r#"{
                "typeName": "AWS::Cloud9::EnvironmentEC2",
                "properties": {
                    "ConnectionType": {
                        "type": "string",
                        "description": "Either ``CONNECT_SSH`` or ``CONNECT_SSM``."
                    }
                }
            }"#,
        );

        let model = ResourceModel::from_schema(&schema, &CodegenConfig::default()).unwrap();
        assert_eq!(model.props.fields[0].field_type, FieldType::String);

        let config = CodegenConfig {
            infer_enums_from_descriptions: true,
            ..Default::default()
        };
        let model = ResourceModel::from_schema(&schema, &config).unwrap();
        assert_eq!(
            model.props.fields[0].field_type,
            FieldType::Enum(vec!["CONNECT_SSH".to_string(), "CONNECT_SSM".to_string()])
        );
    }

    #[test]
    fn test_looks_like_property_name() {
        assert!(looks_like_property_name("InstanceType"));
        assert!(looks_like_property_name("SubnetId"));

        assert!(!looks_like_property_name("ACTIVE"));
        assert!(!looks_like_property_name("t2.micro"));
        assert!(!looks_like_property_name(""));
    }

    #[test]
    fn test_extract_enum_from_description() {
        let description =
            "Use ``enabled`` or ``disabled``. When ``enabled`` is set, ``InstanceType`` applies.";
        assert_eq!(
            extract_enum_from_description(description),
            Some(vec!["enabled".to_string(), "disabled".to_string()])
        );
        assert_eq!(extract_enum_from_description("Set to ``true``."), None);
        assert_eq!(extract_enum_from_description("No values here."), None);
    }
}
