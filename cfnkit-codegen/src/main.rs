//! CloudFormation Schema to cfnkit Record Code Generator
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type --type RESOURCE \
//!     --type-name AWS::IoT::Thing --query 'Schema' --output text | \
//!     cfnkit-codegen
//!
//!   # Generate from file
//!   cfnkit-codegen --file aws-iot-thing.json --output thing.rs
//!
//!   # Regenerate a whole schema directory, or verify it is up to date
//!   cfnkit-codegen --schemas-dir cfnkit-aws/schemas --out-dir cfnkit-aws/src
//!   cfnkit-codegen --schemas-dir cfnkit-aws/schemas --out-dir cfnkit-aws/src --check

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use cfnkit_codegen::{CodegenConfig, GeneratedFile, StaleFile};

#[derive(Parser, Debug)]
#[command(name = "cfnkit-codegen")]
#[command(about = "Generate cfnkit property records from CloudFormation schemas")]
struct Args {
    /// Input schema file (reads from stdin if not specified)
    #[arg(long, conflicts_with = "schemas_dir")]
    file: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short, conflicts_with = "schemas_dir")]
    output: Option<PathBuf>,

    /// Directory of schema files to generate in one batch
    #[arg(long, requires = "out_dir")]
    schemas_dir: Option<PathBuf>,

    /// Output directory for batch generation
    #[arg(long, requires = "schemas_dir")]
    out_dir: Option<PathBuf>,

    /// Compare with the files on disk instead of writing them
    #[arg(long)]
    check: bool,

    /// Path of the core crate in generated code
    #[arg(long, default_value = "cfnkit_core")]
    core_crate: String,

    /// Infer enum values from ``value`` lists in descriptions
    #[arg(long)]
    infer_enums: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = CodegenConfig {
        core_crate: args.core_crate.clone(),
        infer_enums_from_descriptions: args.infer_enums,
        ..Default::default()
    };

    match (&args.schemas_dir, &args.out_dir) {
        (Some(schemas_dir), Some(out_dir)) => run_batch(schemas_dir, out_dir, args.check, &config),
        _ => run_single(args, &config),
    }
}

fn run_single(args: &Args, config: &CodegenConfig) -> Result<()> {
    // Read schema JSON
    let schema_json = if let Some(file_path) = &args.file {
        fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let code = cfnkit_codegen::generate_resource(&schema_json, config)?;

    match (&args.output, args.check) {
        (Some(output_path), true) => {
            let file = GeneratedFile {
                path: output_path.clone(),
                contents: code,
            };
            report_stale(&cfnkit_codegen::check_files(Path::new(""), &[file])?)
        }
        (Some(output_path), false) => {
            fs::write(output_path, &code)
                .with_context(|| format!("Failed to write to: {}", output_path.display()))?;
            eprintln!("{} {}", "Generated:".green(), output_path.display());
            Ok(())
        }
        (None, true) => bail!("--check requires --output or --schemas-dir"),
        (None, false) => {
            print!("{}", code);
            Ok(())
        }
    }
}

fn run_batch(schemas_dir: &Path, out_dir: &Path, check: bool, config: &CodegenConfig) -> Result<()> {
    let files = cfnkit_codegen::generate_directory(schemas_dir, config)?;

    if check {
        return report_stale(&cfnkit_codegen::check_files(out_dir, &files)?);
    }

    cfnkit_codegen::write_files(out_dir, &files)?;
    for file in &files {
        eprintln!("{} {}", "Generated:".green(), out_dir.join(&file.path).display());
    }
    println!(
        "{}",
        format!("Generated {} file(s).", files.len()).green().bold()
    );
    Ok(())
}

fn report_stale(stale: &[StaleFile]) -> Result<()> {
    if stale.is_empty() {
        println!("{}", "All generated files are up to date.".green());
        return Ok(());
    }

    for file in stale {
        print_diff(&file.path, &file.current, &file.expected);
    }
    println!("{}", "The following files are out of date:".yellow());
    for file in stale {
        println!("  {}", file.path.display());
    }
    bail!("{} generated file(s) are out of date", stale.len())
}

fn print_diff(file: &Path, current: &str, expected: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(current, expected);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}
