use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde_json::Value;
use std::path::PathBuf;

/// Swagger Example Generator - Generate example payloads from a Swagger 2.0 document
#[derive(Parser, Debug)]
#[command(name = "examples-from-openapi")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Swagger 2.0 document (JSON or YAML)
    #[arg(value_name = "SPEC_PATH")]
    pub spec_path: PathBuf,

    /// Which examples to generate
    #[arg(short = 'm', long = "mode", value_enum, default_value = "all")]
    pub mode: Mode,

    /// Output format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Include entries for body schemas without a usable $ref
    #[arg(long = "include-unknown-types")]
    pub include_unknown_types: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Generation modes
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// One example per named schema definition
    Schemas,
    /// One example per distinct request body
    Requests,
    /// One example per distinct response body
    Responses,
    /// All three, under `schemas`/`requests`/`responses` keys
    All,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate spec path exists
    if !args.spec_path.exists() {
        anyhow::bail!("Spec path does not exist: {}", args.spec_path.display());
    }

    // Validate spec path is a file
    if !args.spec_path.is_file() {
        anyhow::bail!("Spec path is not a file: {}", args.spec_path.display());
    }

    info!("Spec path: {}", args.spec_path.display());
    info!("Mode: {:?}", args.mode);
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }
    info!("Include unknown types: {}", args.include_unknown_types);

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::collector::{
        generate_request_examples, generate_response_examples, generate_schema_examples,
        CollectOptions,
    };
    use crate::loader::load_spec;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting example generation...");

    // Step 1: Load and parse the spec document
    info!("Loading spec: {}", args.spec_path.display());
    let spec = load_spec(&args.spec_path)?;

    info!(
        "Loaded '{}': {} definitions, {} paths",
        spec.info.title,
        spec.definitions.len(),
        spec.paths.len()
    );

    let options = CollectOptions {
        include_unknown_types: args.include_unknown_types,
    };

    // Step 2: Run the requested generation passes
    let output = match args.mode {
        Mode::Schemas => {
            info!("Generating schema examples...");
            serde_json::to_value(generate_schema_examples(&spec))?
        }
        Mode::Requests => {
            info!("Generating request body examples...");
            serde_json::to_value(generate_request_examples(&spec, &options))?
        }
        Mode::Responses => {
            info!("Generating response body examples...");
            serde_json::to_value(generate_response_examples(&spec, &options))?
        }
        Mode::All => {
            info!("Generating schema, request and response examples...");
            let schemas = generate_schema_examples(&spec);
            let requests = generate_request_examples(&spec, &options);
            let responses = generate_response_examples(&spec, &options);
            serde_json::json!({
                "schemas": schemas,
                "requests": requests,
                "responses": responses,
            })
        }
    };

    log_summary(&output, args.mode);

    // Step 3: Serialize to requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Json => serialize_json(&output)?,
        OutputFormat::Yaml => serialize_yaml(&output)?,
    };

    // Step 4: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!("Successfully wrote examples to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Generation complete!");

    Ok(())
}

fn log_summary(output: &Value, mode: Mode) {
    let count = |value: &Value| value.as_object().map(|map| map.len()).unwrap_or(0);

    info!("Summary:");
    match mode {
        Mode::All => {
            info!("  - Schema examples: {}", count(&output["schemas"]));
            info!("  - Request examples: {}", count(&output["requests"]));
            info!("  - Response examples: {}", count(&output["responses"]));
        }
        _ => info!("  - Examples generated: {}", count(output)),
    }
}
