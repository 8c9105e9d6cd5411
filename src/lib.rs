//! Swagger Example Generator - Example payloads from OpenAPI/Swagger 2.0 documents.
//!
//! This library converts a Swagger 2.0 document into concrete example values:
//! one example per named schema definition, per operation request body, and
//! per operation response body. Consumers are documentation and UI tools that
//! need representative sample payloads without a live server.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`loader`] - Reads a spec file from disk and parses JSON or YAML
//! 2. [`spec`] - Typed model of the parts of a Swagger document examples need
//! 3. [`refs`] - Indexes named definitions and resolves `$ref` pointers
//! 4. [`primitives`] - Maps (type, format) pairs to literal example values
//! 5. [`synthesizer`] - Recursively turns any schema node into an example
//! 6. [`collector`] - Walks the spec and assembles keyed example maps
//! 7. [`serializer`] - Serializes results to YAML or JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use examples_from_openapi::{
//!     collector::{generate_response_examples, generate_schema_examples, CollectOptions},
//!     loader::load_spec,
//!     serializer::serialize_json,
//! };
//! use std::path::Path;
//!
//! // Load the spec document
//! let spec = load_spec(Path::new("./swagger.json")).unwrap();
//!
//! // One example per named schema definition
//! let schemas = generate_schema_examples(&spec);
//!
//! // One example per distinct response body
//! let options = CollectOptions { include_unknown_types: true };
//! let responses = generate_response_examples(&spec, &options);
//!
//! // Serialize to JSON
//! let json = serialize_json(&serde_json::to_value(schemas).unwrap()).unwrap();
//! println!("{}", json);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod collector;
pub mod error;
pub mod loader;
pub mod primitives;
pub mod refs;
pub mod serializer;
pub mod spec;
pub mod synthesizer;
