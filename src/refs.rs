//! Reference lookup construction and `$ref` resolution.
//!
//! A Swagger 2.0 document names its reusable schemas under `definitions`;
//! every other part of the document points at them with `$ref` strings of
//! the form `#/definitions/{name}`. The lookup built here is created once
//! per generation pass and read-only afterwards.

use crate::spec::{SchemaNode, SwaggerSpec};
use indexmap::IndexMap;
use log::{debug, info};

/// Index from reference string (`#/definitions/Pet`) to its schema.
pub type RefsLookup = IndexMap<String, SchemaNode>;

/// Synthetic reference emitted by some Springfox-generated specs for a
/// wrapped string collection. It never appears under `definitions`, so it
/// is resolved to a built-in array-of-strings schema instead.
pub const STRING_COLLECTION_REF: &str = "#/definitions/Collection«string»";

/// Builds the refs lookup for a spec.
///
/// One entry per key under `definitions`, in declaration order. A spec
/// without definitions yields an empty lookup; that is not an error, the
/// generation passes simply produce fewer entries. Paths and operations are
/// never inspected here.
pub fn build_refs_lookup(spec: &SwaggerSpec) -> RefsLookup {
    info!(
        "Building refs lookup for Swagger spec '{}'...",
        spec.info.title
    );

    let mut lookup = RefsLookup::new();

    for (name, schema) in &spec.definitions {
        let reference = format!("#/definitions/{}", name);
        debug!("Indexed schema definition '{}'", reference);
        lookup.insert(reference, schema.clone());
    }

    if lookup.is_empty() {
        info!("Swagger spec contained no schema definitions");
    } else {
        info!("Found {} schema definitions in Swagger spec", lookup.len());
    }

    lookup
}

/// Resolves a node's `$ref` against the lookup.
///
/// Returns `None` when the node carries no `$ref` or the target is not in
/// the lookup. Callers treat `None` as "no example producible" for that
/// node, never as an error to surface.
pub fn resolve_ref(node: &SchemaNode, lookup: &RefsLookup) -> Option<SchemaNode> {
    let reference = node.reference.as_deref()?;

    if reference == STRING_COLLECTION_REF {
        return Some(string_collection_schema());
    }

    lookup.get(reference).cloned()
}

/// The built-in schema behind [`STRING_COLLECTION_REF`]: an array of strings.
fn string_collection_schema() -> SchemaNode {
    SchemaNode {
        schema_type: Some("array".to_string()),
        items: Some(Box::new(SchemaNode {
            schema_type: Some("string".to_string()),
            ..SchemaNode::default()
        })),
        ..SchemaNode::default()
    }
}
