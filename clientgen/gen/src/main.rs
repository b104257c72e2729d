//! clientgen
//!
//! Generates a strongly-typed Rust GraphQL client from an introspection schema.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use clientgen::config::DEFAULT_CONFIG_FILE;
use clientgen::output::assemble_output;
use clientgen::{GenerationOutcome, GenerationReport, GeneratorConfig, GeneratorError};
use clientgen_schema::parse_schema;
use colored::Colorize;
use tracing::{Level, info};

/// clientgen - turns GraphQL introspection schemas into typed Rust clients
#[derive(Parser, Debug)]
#[command(name = "clientgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./clientgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Introspection schema JSON
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Output directory for generated code
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rust path the output directory is mounted at (e.g. crate::graphql)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Map a custom scalar to a Rust type (repeatable)
    #[arg(long = "scalar", value_name = "NAME=TYPE", value_parser = parse_scalar)]
    scalars: Vec<(String, String)>,

    /// Regenerate even if the schema is unchanged
    #[arg(long)]
    force: bool,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_scalar(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, target)) if !name.trim().is_empty() && !target.trim().is_empty() => {
            Ok((name.trim().to_string(), target.trim().to_string()))
        }
        _ => Err(format!("expected NAME=TYPE, got '{raw}'")),
    }
}

/// Loads the file configuration, then applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, GeneratorError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            GeneratorConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(schema) = &cli.schema {
        config.schema_path = schema.clone();
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    if let Some(namespace) = &cli.namespace {
        config.namespace = namespace.clone();
    }
    for (name, target) in &cli.scalars {
        config.custom_scalars.insert(name.clone(), target.clone());
    }
    if cli.force {
        config.skip_if_unchanged = false;
    }

    Ok(config)
}

/// Generates everything in memory and prints it.
fn dry_run(config: &GeneratorConfig) -> Result<(), GeneratorError> {
    let settings = config.validate()?;
    let source = fs::read_to_string(&config.schema_path).map_err(|e| GeneratorError::Read {
        path: config.schema_path.display().to_string(),
        source: e,
    })?;
    let model = parse_schema(&source)?;
    let artifacts = clientgen::generate_artifacts(&model, &settings)?;
    let files = assemble_output(&artifacts)?;

    for file in &files {
        let path = config.output_dir.join(&file.relative_path);
        println!("{}", format!("--- {} ---", path.display()).bold());
        println!("{}", file.contents);
    }

    println!(
        "{} {} artifacts, {} files (dry run, nothing written)",
        "Would generate".cyan().bold(),
        artifacts.len(),
        files.len()
    );
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    match report.outcome {
        GenerationOutcome::Skipped => {
            println!(
                "{} schema unchanged, {} left as is",
                "Skipped:".yellow().bold(),
                report.output_dir.display()
            );
        }
        GenerationOutcome::Success { artifact_count } => {
            println!(
                "{} {} artifacts written to {}",
                "Generated".green().bold(),
                artifact_count,
                report.output_dir.display()
            );
            for (group, count) in &report.per_group {
                println!("  {:<12} {}", group.to_string().dimmed(), count);
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = resolve_config(&cli).and_then(|config| {
        info!(
            schema = %config.schema_path.display(),
            output = %config.output_dir.display(),
            "Resolved configuration."
        );
        if cli.dry_run {
            dry_run(&config)
        } else {
            clientgen::run(&config).map(|report| print_summary(&report))
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
