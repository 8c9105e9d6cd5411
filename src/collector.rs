//! The three generation passes over a spec.
//!
//! Each pass builds the refs lookup once, walks the relevant part of the
//! document and accumulates a keyed map of examples. Accumulator and
//! unknown-type counter are locals of the walk, so passes over independent
//! specs can run concurrently.

use crate::refs::{build_refs_lookup, RefsLookup};
use crate::spec::{Operation, Parameter, SchemaNode, SwaggerSpec};
use crate::synthesizer::{synthesize, SynthesisConfig};
use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;

/// Options for the request/response passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Also emit entries for schemas without a usable `$ref`, under
    /// `unknown_type_{N}` keys.
    pub include_unknown_types: bool,
}

/// Generated examples keyed by ref string (or `unknown_type_{N}`).
pub type ExampleMap = IndexMap<String, Value>;

/// One example per named schema definition, keyed by its ref string.
///
/// Definitions whose synthesis produces no value are skipped; the result
/// may therefore have fewer entries than the spec has definitions.
pub fn generate_schema_examples(spec: &SwaggerSpec) -> ExampleMap {
    let lookup = build_refs_lookup(spec);
    let config = SynthesisConfig::default();
    let mut examples = ExampleMap::new();

    for (reference, schema) in &lookup {
        match synthesize(schema, &lookup, &config) {
            Some(value) => {
                examples.insert(reference.clone(), value);
            }
            None => debug!("No example producible for definition '{}'", reference),
        }
    }

    examples
}

/// One example per distinct response body schema across all operations.
///
/// The key is the schema's own `$ref`, else the `$ref` of its array items,
/// else `unknown_type_{N}`. The first example per key wins; the unknown-type
/// counter advances once per keyless schema even when the entry is dropped
/// because `include_unknown_types` is off.
pub fn generate_response_examples(spec: &SwaggerSpec, options: &CollectOptions) -> ExampleMap {
    let lookup = build_refs_lookup(spec);
    let config = SynthesisConfig::default();
    let mut examples = ExampleMap::new();
    let mut unknown_type_counter: u32 = 0;

    for (path, item) in &spec.paths {
        for (method, operation) in item.operations() {
            for (status, response) in &operation.responses {
                let Some(schema) = &response.schema else {
                    continue;
                };

                debug!("Response body {} {} -> {}", method, path, status);

                let example = synthesize(schema, &lookup, &config);
                insert_keyed_example(
                    &mut examples,
                    schema,
                    example,
                    &mut unknown_type_counter,
                    options,
                );
            }
        }
    }

    examples
}

/// One example per distinct request body schema across all operations.
///
/// Keying, dedup and the unknown-type counter follow the response pass. An
/// operation contributes at most one body: the first parameter located in
/// `body`.
pub fn generate_request_examples(spec: &SwaggerSpec, options: &CollectOptions) -> ExampleMap {
    let lookup = build_refs_lookup(spec);
    let config = SynthesisConfig::default();
    let mut examples = ExampleMap::new();
    let mut unknown_type_counter: u32 = 0;

    for (path, item) in &spec.paths {
        for (method, operation) in item.operations() {
            let Some((parameter, example)) = body_example(operation, &lookup, &config) else {
                continue;
            };

            debug!(
                "Request body {} {} from parameter '{}'",
                method, path, parameter.name
            );

            // The parameter was selected for its body location, so the
            // schema is necessarily present here.
            let Some(schema) = &parameter.schema else {
                continue;
            };

            insert_keyed_example(
                &mut examples,
                schema,
                Some(example),
                &mut unknown_type_counter,
                options,
            );
        }
    }

    examples
}

/// Synthesizes the body example for one operation.
///
/// Scans the parameter list for the first `body` parameter and stops there.
/// A body schema that yields no value is logged and the operation is
/// treated as bodiless; the walk continues regardless.
fn body_example<'a>(
    operation: &'a Operation,
    lookup: &RefsLookup,
    config: &SynthesisConfig,
) -> Option<(&'a Parameter, Value)> {
    let parameter = operation
        .parameters
        .iter()
        .find(|p| p.location == "body")?;
    let schema = parameter.schema.as_ref()?;

    match synthesize(schema, lookup, config) {
        Some(value) => Some((parameter, value)),
        None => {
            warn!(
                "Error generating sample from schema: {}",
                serde_json::to_string(schema).unwrap_or_default()
            );
            None
        }
    }
}

/// The result key for a body schema: its own `$ref`, else its array items'
/// `$ref`, else a fresh `unknown_type_{N}` placeholder.
fn ref_for_schema(schema: &SchemaNode, unknown_type_counter: u32) -> String {
    if let Some(reference) = &schema.reference {
        return reference.clone();
    }

    if let Some(reference) = schema.items.as_ref().and_then(|items| items.reference.as_ref()) {
        return reference.clone();
    }

    format!("unknown_type_{}", unknown_type_counter)
}

/// Applies the shared keying, first-wins dedup and unknown-counter policy.
fn insert_keyed_example(
    examples: &mut ExampleMap,
    schema: &SchemaNode,
    example: Option<Value>,
    unknown_type_counter: &mut u32,
    options: &CollectOptions,
) {
    let key = ref_for_schema(schema, *unknown_type_counter);

    if examples.contains_key(&key) {
        return;
    }

    if key.starts_with("unknown_type_") {
        *unknown_type_counter += 1;

        if !options.include_unknown_types {
            return;
        }
    }

    match example {
        Some(value) => {
            examples.insert(key, value);
        }
        None => debug!("No example producible for '{}'", key),
    }
}
