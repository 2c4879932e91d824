use anyhow::Context;
use clap::{Parser, Subcommand};
use constitution_common::AttributeValue;
use constitution_kernel::WorldModel;
use constitution_tools::ModelInspector;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "constitution", about = "CLI tool for world model operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Load a world file and print its entities and rules
    Inspect {
        /// Path to the JSON world file
        path: PathBuf,
        /// Fail on load errors instead of falling back to an empty model
        #[arg(long)]
        strict: bool,
    },
    /// Check an attribute value for an entity (exit 0 when valid, 1 otherwise)
    Validate {
        /// Path to the JSON world file
        path: PathBuf,
        /// Entity name
        entity: String,
        /// Attribute key
        attribute: String,
        /// Candidate value, parsed as JSON; anything else is taken as a string.
        /// Negative numbers are accepted as-is; put `--` before other values
        /// starting with `-`.
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Fail on load errors instead of falling back to an empty model
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("constitution v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", constitution_common::crate_info());
            println!("kernel: {}", constitution_kernel::crate_info());
            println!("tools: {}", constitution_tools::crate_info());
        }
        Commands::Inspect { path, strict } => {
            let model = load(&path, strict)?;
            println!("{}", ModelInspector::summary(&model));
            for name in ModelInspector::list_entities(&model) {
                if let Some(info) = ModelInspector::inspect_entity(&model, &name) {
                    println!("  {info}");
                }
            }
            for rule in ModelInspector::list_rules(&model) {
                println!("  {rule}");
            }
        }
        Commands::Validate {
            path,
            entity,
            attribute,
            value,
            strict,
        } => {
            let model = load(&path, strict)?;
            let value = parse_value(&value);
            if model.validate_entity(&entity, &attribute, &value) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load(path: &Path, strict: bool) -> anyhow::Result<WorldModel> {
    tracing::debug!(path = %path.display(), strict, "loading world model");
    if strict {
        WorldModel::try_from_json(path)
            .with_context(|| format!("could not load world model from {}", path.display()))
    } else {
        Ok(WorldModel::from_json(path))
    }
}

fn parse_value(raw: &str) -> AttributeValue {
    serde_json::from_str(raw).unwrap_or_else(|_| AttributeValue::String(raw.to_string()))
}
