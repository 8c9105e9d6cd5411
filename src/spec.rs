//! Typed model of an OpenAPI/Swagger 2.0 document.
//!
//! Only the parts of the document that example generation consumes are
//! modeled: the named schema definitions, the path/operation tree down to
//! response and body-parameter schemas, and the schema vocabulary itself.
//! Everything else in a Swagger document is ignored on deserialization.
//!
//! All maps are [`IndexMap`]s so that definitions and object properties keep
//! their declaration order from the source document; generated examples list
//! fields in the same order the spec declares them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Swagger 2.0 document, reduced to what example generation needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwaggerSpec {
    /// Document metadata; only the title is used, for diagnostics.
    #[serde(default)]
    pub info: Info,
    /// Named reusable schemas, keyed by definition name.
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaNode>,
    /// Path templates to their operation sets.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    /// Title of the API described by the spec.
    #[serde(default)]
    pub title: String,
}

/// One path template with its per-method operations.
///
/// Swagger 2.0 allows exactly these seven methods under a path item; other
/// keys (`parameters`, vendor extensions) are not operations and are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Iterates the populated operations in a fixed method order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("put", &self.put),
            ("post", &self.post),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
            ("patch", &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// One HTTP operation: its parameters and declared responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Declared parameters, in document order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Status code (or `default`) to response descriptor.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseEntry>,
}

/// One operation parameter. Only body parameters carry a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    /// Parameter location: `path`, `query`, `header`, `formData` or `body`.
    #[serde(rename = "in", default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaNode>,
}

/// One declared response; the schema, when present, describes the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaNode>,
}

/// A schema node: the structural description of a value's shape.
///
/// Immutable input to the synthesizer; the core never mutates a node. A
/// node carrying `$ref` is resolved before any other field is consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Declared type: `object`, `array`, `string`, `number`, `integer`,
    /// `boolean` or `file`. Absent type is inferred from structure.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Format qualifier for primitive types (e.g. `email`, `date-time`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Property name to schema, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// Element schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    /// Either a boolean toggle or a schema for undeclared properties.
    #[serde(
        rename = "additionalProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,
    /// Allowed literal values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    /// Declared default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Explicit example; when present it short-circuits synthesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Property is only sent by the server.
    #[serde(rename = "readOnly", default, skip_serializing_if = "is_false")]
    pub read_only: bool,
    /// Property is only sent by the client.
    #[serde(rename = "writeOnly", default, skip_serializing_if = "is_false")]
    pub write_only: bool,
    /// Pointer to a named definition, e.g. `#/definitions/Pet`.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !value
}

/// The two legal shapes of `additionalProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` allows arbitrary extra properties; `false` forbids them.
    Flag(bool),
    /// Extra properties must match this schema.
    Schema(Box<SchemaNode>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_minimal_spec() {
        let json = r#"{"swagger": "2.0", "info": {"title": "Test API", "version": "1.0"}}"#;
        let spec: SwaggerSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.info.title, "Test API");
        assert!(spec.definitions.is_empty());
        assert!(spec.paths.is_empty());
    }

    #[test]
    fn test_deserialize_definitions_keep_order() {
        let json = r#"{
            "definitions": {
                "Zebra": {"type": "string"},
                "Apple": {"type": "integer"},
                "Mango": {"type": "boolean"}
            }
        }"#;
        let spec: SwaggerSpec = serde_json::from_str(json).unwrap();

        let names: Vec<&String> = spec.definitions.keys().collect();
        assert_eq!(names, ["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_deserialize_schema_node() {
        let json = r##"{
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "tag": {"$ref": "#/definitions/Tag"},
                "secret": {"type": "string", "writeOnly": true}
            }
        }"##;
        let node: SchemaNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.schema_type.as_deref(), Some("object"));
        let props = node.properties.unwrap();
        assert_eq!(
            props["tag"].reference.as_deref(),
            Some("#/definitions/Tag")
        );
        assert!(props["secret"].write_only);
        assert!(!props["name"].read_only);
    }

    #[test]
    fn test_deserialize_additional_properties_flag() {
        let node: SchemaNode =
            serde_json::from_str(r#"{"type": "object", "additionalProperties": true}"#).unwrap();

        assert_eq!(
            node.additional_properties,
            Some(AdditionalProperties::Flag(true))
        );
    }

    #[test]
    fn test_deserialize_additional_properties_schema() {
        let node: SchemaNode = serde_json::from_str(
            r#"{"type": "object", "additionalProperties": {"type": "integer"}}"#,
        )
        .unwrap();

        match node.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => {
                assert_eq!(schema.schema_type.as_deref(), Some("integer"));
            }
            other => panic!("expected schema form, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_example_preserves_falsy_literals() {
        let node: SchemaNode =
            serde_json::from_str(r#"{"type": "integer", "example": 0}"#).unwrap();
        assert_eq!(node.example, Some(Value::from(0)));

        let node: SchemaNode =
            serde_json::from_str(r#"{"type": "boolean", "example": false}"#).unwrap();
        assert_eq!(node.example, Some(Value::from(false)));

        let node: SchemaNode = serde_json::from_str(r#"{"type": "string", "example": ""}"#).unwrap();
        assert_eq!(node.example, Some(Value::from("")));
    }

    #[test]
    fn test_path_item_operation_order() {
        let json = r#"{
            "post": {"responses": {}},
            "get": {"responses": {}}
        }"#;
        let item: PathItem = serde_json::from_str(json).unwrap();

        let methods: Vec<&str> = item.operations().map(|(m, _)| m).collect();
        assert_eq!(methods, ["get", "post"]);
    }

    #[test]
    fn test_path_level_parameters_are_not_operations() {
        // A path item may carry a `parameters` array; it must not be
        // mistaken for an operation.
        let json = r#"{
            "parameters": [{"name": "id", "in": "path"}],
            "get": {"responses": {"200": {"schema": {"type": "string"}}}}
        }"#;
        let item: PathItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.operations().count(), 1);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r##"{
            "swagger": "2.0",
            "host": "example.com",
            "basePath": "/v2",
            "schemes": ["https"],
            "paths": {
                "/pets": {
                    "get": {
                        "summary": "List pets",
                        "operationId": "listPets",
                        "produces": ["application/json"],
                        "responses": {
                            "200": {
                                "description": "ok",
                                "schema": {"$ref": "#/definitions/Pet"}
                            }
                        }
                    }
                }
            }
        }"##;
        let spec: SwaggerSpec = serde_json::from_str(json).unwrap();

        let item = &spec.paths["/pets"];
        let op = item.get.as_ref().unwrap();
        let schema = op.responses["200"].schema.as_ref().unwrap();
        assert_eq!(schema.reference.as_deref(), Some("#/definitions/Pet"));
    }
}
