//! Swagger Example Generator - Command-line tool for generating example payloads.
//!
//! This binary provides a command-line interface for generating concrete
//! example values from an OpenAPI/Swagger 2.0 document: one example per named
//! schema definition, per operation request body, and per operation response
//! body.
//!
//! # Usage
//!
//! ```bash
//! examples-from-openapi [OPTIONS] <SPEC_PATH>
//! ```
//!
//! # Examples
//!
//! Generate all examples as JSON:
//! ```bash
//! examples-from-openapi ./swagger.json -o examples.json
//! ```
//!
//! Generate only response body examples as YAML:
//! ```bash
//! examples-from-openapi ./swagger.json -m responses -f yaml
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! examples-from-openapi ./swagger.json -v
//! ```

mod cli;
mod collector;
mod error;
mod loader;
mod primitives;
mod refs;
mod serializer;
mod spec;
mod synthesizer;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger Example Generator starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Example generation completed successfully");

    Ok(())
}
