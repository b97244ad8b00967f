//! cfnkit Codegen
//!
//! Generates typed cfnkit property records, builders and resource wrappers
//! from CloudFormation registry schemas.
//!
//! A schema directory is generated into one directory per service:
//! `<service>/<resource>.rs` for every schema plus `<service>/mod.rs`
//! listing them.

pub mod cfn;
pub mod config;
pub mod emit;
pub mod model;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub use cfn::CfnSchema;
pub use config::CodegenConfig;
pub use model::ResourceModel;

/// A generated file, relative to the output directory
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// A generated file whose contents differ from what is on disk
#[derive(Debug, Clone, PartialEq)]
pub struct StaleFile {
    pub path: PathBuf,
    /// Current contents, empty when the file does not exist
    pub current: String,
    pub expected: String,
}

/// Parse a schema document and resolve it into a model
pub fn load_model(schema_json: &str, config: &CodegenConfig) -> Result<ResourceModel> {
    let schema: CfnSchema =
        serde_json::from_str(schema_json).context("Failed to parse CloudFormation schema")?;
    ResourceModel::from_schema(&schema, config)
}

/// Generate the module for a single schema document
pub fn generate_resource(schema_json: &str, config: &CodegenConfig) -> Result<String> {
    let model = load_model(schema_json, config)?;
    emit::emit_resource(&model, config)
}

/// Generate every resource module and service `mod.rs` for a schema directory
pub fn generate_directory(schemas_dir: &Path, config: &CodegenConfig) -> Result<Vec<GeneratedFile>> {
    let mut schema_files = Vec::new();
    let entries = fs::read_dir(schemas_dir)
        .with_context(|| format!("Failed to read directory {}", schemas_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            schema_files.push(path);
        }
    }
    schema_files.sort();

    // service -> (service type, models)
    let mut services: BTreeMap<String, (String, Vec<ResourceModel>)> = BTreeMap::new();
    for path in &schema_files {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let model =
            load_model(&json, config).with_context(|| format!("In {}", path.display()))?;
        log::info!("Loaded {} from {}", model.type_name, path.display());

        let service_type = model
            .type_name
            .rsplit_once("::")
            .map(|(prefix, _)| prefix.to_string())
            .unwrap_or_default();
        let entry = services
            .entry(model.service.clone())
            .or_insert_with(|| (service_type, Vec::new()));
        if entry.1.iter().any(|m| m.module == model.module) {
            bail!(
                "Duplicate module {}/{} ({})",
                model.service,
                model.module,
                model.type_name
            );
        }
        entry.1.push(model);
    }

    let mut files = Vec::new();
    for (service, (service_type, models)) in &services {
        for model in models {
            files.push(GeneratedFile {
                path: PathBuf::from(service).join(format!("{}.rs", model.module)),
                contents: emit::emit_resource(model, config)?,
            });
        }
        let refs: Vec<&ResourceModel> = models.iter().collect();
        files.push(GeneratedFile {
            path: PathBuf::from(service).join("mod.rs"),
            contents: emit::emit_service_module(service_type, &refs, config)?,
        });
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Write generated files below `out_dir`, creating service directories
pub fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = out_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.contents)
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
    }
    Ok(())
}

/// Compare generated files with the ones below `out_dir`
///
/// Rust sources that differ only in layout count as current.
pub fn check_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<Vec<StaleFile>> {
    let mut stale = Vec::new();
    for file in files {
        let path = out_dir.join(&file.path);
        let current = if path.exists() {
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?
        } else {
            String::new()
        };
        if current != file.contents && !same_source(&path, &current, &file.contents) {
            stale.push(StaleFile {
                path,
                current,
                expected: file.contents.clone(),
            });
        }
    }
    Ok(stale)
}

/// Whether two Rust sources print identically, ignoring layout
fn same_source(path: &Path, current: &str, expected: &str) -> bool {
    if path.extension().is_none_or(|ext| ext != "rs") {
        return false;
    }
    match (emit::format_source(current), emit::format_source(expected)) {
        (Ok(current), Ok(expected)) => current == expected,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THING: &str = r#"{
        "typeName": "AWS::IoT::Thing",
        "properties": {
            "ThingName": {"type": "string"},
            "Arn": {"type": "string"}
        },
        "readOnlyProperties": ["/properties/Arn"]
    }"#;

    const POLICY: &str = r#"{
        "typeName": "AWS::IoT::Policy",
        "properties": {
            "PolicyDocument": {"type": ["object", "string"]},
            "PolicyName": {"type": "string"}
        },
        "required": ["PolicyDocument"]
    }"#;

    const ENVIRONMENT: &str = r#"{
        "typeName": "AWS::Cloud9::EnvironmentEC2",
        "properties": {"InstanceType": {"type": "string"}},
        "required": ["InstanceType"]
    }"#;

    fn schemas_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("aws-iot-thing.json"), THING).unwrap();
        fs::write(dir.path().join("aws-iot-policy.json"), POLICY).unwrap();
        fs::write(dir.path().join("aws-cloud9-environmentec2.json"), ENVIRONMENT).unwrap();
        fs::write(dir.path().join("README.md"), "not a schema").unwrap();
        dir
    }

    #[test]
    fn generate_resource_from_json() {
        let code = generate_resource(THING, &CodegenConfig::default()).unwrap();
        assert!(code.contains("pub struct CfnThingProps"));
        assert!(code.contains("pub fn attr_arn(&self) -> Value"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = generate_resource("{", &CodegenConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse CloudFormation schema");
    }

    #[test]
    fn directory_generates_service_modules() {
        let dir = schemas_dir();
        let files = generate_directory(dir.path(), &CodegenConfig::default()).unwrap();

        let paths: Vec<String> = files
            .iter()
            .map(|f| f.path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            vec![
                "cloud9/environment_ec2.rs",
                "cloud9/mod.rs",
                "iot/mod.rs",
                "iot/policy.rs",
                "iot/thing.rs",
            ]
        );

        let iot_mod = &files[2].contents;
        assert!(iot_mod.contains("pub mod policy;"));
        assert!(iot_mod.contains("pub mod thing;"));
        assert!(iot_mod.contains("AWS::IoT"));
    }

    #[test]
    fn duplicate_modules_are_rejected() {
        let dir = schemas_dir();
        fs::write(dir.path().join("copy-of-thing.json"), THING).unwrap();

        let err = generate_directory(dir.path(), &CodegenConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Duplicate module iot/thing"));
    }

    #[test]
    fn written_files_pass_check() {
        let dir = schemas_dir();
        let out = tempfile::tempdir().unwrap();
        let files = generate_directory(dir.path(), &CodegenConfig::default()).unwrap();

        let stale = check_files(out.path(), &files).unwrap();
        assert_eq!(stale.len(), files.len());
        assert!(stale.iter().all(|s| s.current.is_empty()));

        write_files(out.path(), &files).unwrap();
        assert!(check_files(out.path(), &files).unwrap().is_empty());

        let thing = out.path().join("iot/thing.rs");
        fs::write(&thing, "// edited by hand\n").unwrap();
        let stale = check_files(out.path(), &files).unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].path, thing);
        assert_eq!(stale[0].current, "// edited by hand\n");
    }

    #[test]
    fn layout_changes_are_not_stale() {
        let dir = schemas_dir();
        let out = tempfile::tempdir().unwrap();
        let files = generate_directory(dir.path(), &CodegenConfig::default()).unwrap();
        write_files(out.path(), &files).unwrap();

        let thing = out.path().join("iot/thing.rs");
        let contents = fs::read_to_string(&thing).unwrap();
        fs::write(&thing, contents.replace('\n', "\n\n")).unwrap();
        assert!(check_files(out.path(), &files).unwrap().is_empty());

        fs::write(&thing, contents.replace("ThingName", "ThingLabel")).unwrap();
        let stale = check_files(out.path(), &files).unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].path, thing);
    }

    #[test]
    fn committed_aws_modules_are_current() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("cfnkit-aws");
        let files = generate_directory(&root.join("schemas"), &CodegenConfig::default()).unwrap();
        assert!(!files.is_empty());
        let stale = check_files(&root.join("src"), &files).unwrap();
        let paths: Vec<_> = stale.iter().map(|s| s.path.display().to_string()).collect();
        assert!(paths.is_empty(), "stale generated modules: {:?}", paths);
    }
}
