//! Recursive example synthesis - the core of the crate.
//!
//! [`synthesize`] turns any schema node into a JSON-compatible example value,
//! or into "no value" (`None`, distinct from JSON `null`) when the node gives
//! nothing to work with. The priority order is a contract: `$ref` resolution
//! first, then a verbatim `example` override, then type inference (explicit
//! `type`, else `properties` implies object, else `items` implies array),
//! then shape-specific construction.

use crate::primitives;
use crate::refs::{resolve_ref, RefsLookup};
use crate::spec::{AdditionalProperties, SchemaNode};
use log::warn;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashSet;

/// Options controlling which properties appear in object examples.
///
/// Both filters default to off: `readOnly` and `writeOnly` properties are
/// skipped unless explicitly included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisConfig {
    /// Include properties marked `readOnly`.
    pub include_read_only: bool,
    /// Include properties marked `writeOnly`.
    pub include_write_only: bool,
}

/// The type category a node is synthesized as once refs are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Object,
    Array,
    File,
    Primitive,
}

/// Infers the shape of an already-resolved node.
///
/// An explicit `type` wins; without one, `properties` implies an object and
/// `items` implies an array. A node with none of these has no shape and
/// produces no value.
fn effective_shape(node: &SchemaNode) -> Option<Shape> {
    match node.schema_type.as_deref() {
        Some("object") => Some(Shape::Object),
        Some("array") => Some(Shape::Array),
        Some("file") => Some(Shape::File),
        Some(_) => Some(Shape::Primitive),
        None if node.properties.is_some() => Some(Shape::Object),
        None if node.items.is_some() => Some(Shape::Array),
        None => None,
    }
}

/// Synthesizes an example value for a schema node.
///
/// Returns `None` when no example can be produced: an unresolvable `$ref`,
/// a `file` schema, a node without type or structure, or a `$ref` chain
/// that loops back on itself. Never fails and never mutates its input.
pub fn synthesize(
    node: &SchemaNode,
    lookup: &RefsLookup,
    config: &SynthesisConfig,
) -> Option<Value> {
    let mut visited = HashSet::new();
    synthesize_node(node, lookup, config, &mut visited)
}

/// Resolves any `$ref` chain on the node, then dispatches on its shape.
///
/// `visited` holds the refs on the current recursion path; re-entering one
/// truncates the branch instead of recursing without bound. The set is
/// unwound on the way out so sibling uses of the same ref still resolve.
fn synthesize_node(
    node: &SchemaNode,
    lookup: &RefsLookup,
    config: &SynthesisConfig,
    visited: &mut HashSet<String>,
) -> Option<Value> {
    let mut entered: Vec<String> = Vec::new();
    let mut current = Cow::Borrowed(node);

    let result = loop {
        let Some(reference) = current.reference.clone() else {
            break synthesize_resolved(&current, lookup, config, visited);
        };

        if visited.contains(&reference) {
            warn!("Cyclic $ref chain at '{}'; truncating branch", reference);
            break None;
        }

        match resolve_ref(&current, lookup) {
            Some(resolved) => {
                visited.insert(reference.clone());
                entered.push(reference);
                current = Cow::Owned(resolved);
            }
            None => break None,
        }
    };

    for reference in entered {
        visited.remove(&reference);
    }

    result
}

/// Synthesizes a node whose refs are already resolved.
fn synthesize_resolved(
    node: &SchemaNode,
    lookup: &RefsLookup,
    config: &SynthesisConfig,
    visited: &mut HashSet<String>,
) -> Option<Value> {
    // An explicit example wins over everything, including falsy literals.
    if let Some(example) = &node.example {
        return Some(example.clone());
    }

    match effective_shape(node)? {
        Shape::Object => Some(synthesize_object(node, lookup, config, visited)),
        Shape::Array => Some(synthesize_array(node, lookup, config, visited)),
        shape => {
            if let Some(value) = enum_example(node) {
                return Some(value);
            }

            if shape == Shape::File {
                return None;
            }

            Some(primitives::generate(node))
        }
    }
}

/// Declared properties in declaration order, filtered by visibility, plus
/// the `additionalProp*` expansion.
fn synthesize_object(
    node: &SchemaNode,
    lookup: &RefsLookup,
    config: &SynthesisConfig,
    visited: &mut HashSet<String>,
) -> Value {
    let mut object = Map::new();

    if let Some(properties) = &node.properties {
        for (name, prop) in properties {
            if prop.read_only && !config.include_read_only {
                continue;
            }
            if prop.write_only && !config.include_write_only {
                continue;
            }

            if let Some(value) = synthesize_node(prop, lookup, config, visited) {
                object.insert(name.clone(), value);
            }
        }
    }

    match &node.additional_properties {
        Some(AdditionalProperties::Flag(true)) => {
            object.insert("additionalProp1".to_string(), Value::Object(Map::new()));
        }
        Some(AdditionalProperties::Schema(schema)) => {
            if let Some(value) = synthesize_node(schema, lookup, config, visited) {
                for i in 1..4 {
                    object.insert(format!("additionalProp{}", i), value.clone());
                }
            }
        }
        _ => {}
    }

    Value::Object(object)
}

/// A single-element array holding one synthesized item example. An item
/// schema that yields nothing contributes `null`, keeping the one-element
/// shape.
fn synthesize_array(
    node: &SchemaNode,
    lookup: &RefsLookup,
    config: &SynthesisConfig,
    visited: &mut HashSet<String>,
) -> Value {
    let item = node
        .items
        .as_deref()
        .and_then(|items| synthesize_node(items, lookup, config, visited))
        .unwrap_or(Value::Null);

    Value::Array(vec![item])
}

/// The declared `default`, else the first `enum` member. `None` when the
/// node has no enum or the enum list is empty.
fn enum_example(node: &SchemaNode) -> Option<Value> {
    let values = node.enum_values.as_ref()?;

    if let Some(default) = &node.default {
        return Some(default.clone());
    }

    values.first().cloned()
}
