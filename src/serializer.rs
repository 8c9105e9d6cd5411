//! Serialization module for writing generated example maps to YAML or JSON.
//!
//! This module provides functions to serialize generation results into
//! standard formats and write them to files or return them as strings.

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serializes a generation result to YAML format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(value: &Value) -> Result<String> {
    debug!("Serializing examples to YAML");
    serde_yaml::to_string(value).context("Failed to serialize examples to YAML")
}

/// Serializes a generation result to JSON format with pretty printing.
///
/// The output is formatted with indentation for readability, making it
/// suitable for human review and version control.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(value: &Value) -> Result<String> {
    debug!("Serializing examples to JSON");
    serde_json::to_string_pretty(value).context("Failed to serialize examples to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!(
        "Successfully wrote {} bytes to {}",
        content.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn example_map() -> Value {
        json!({
            "#/definitions/Pet": {"name": "string", "age": 0},
            "#/definitions/Tag": "string"
        })
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&example_map()).unwrap();

        assert!(yaml.contains("'#/definitions/Pet':"));
        assert!(yaml.contains("name: string"));
        assert!(yaml.contains("age: 0"));
    }

    #[test]
    fn test_serialize_json_is_pretty_and_valid() {
        let json = serialize_json(&example_map()).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("  "));

        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["#/definitions/Pet"]["age"], 0);
    }

    #[test]
    fn test_serialize_json_preserves_key_order() {
        let json = serialize_json(&example_map()).unwrap();

        let pet = json.find("#/definitions/Pet").unwrap();
        let tag = json.find("#/definitions/Tag").unwrap();
        assert!(pet < tag);
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("examples.json");

        write_to_file("test content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir
            .path()
            .join("subdir")
            .join("nested")
            .join("examples.yaml");

        write_to_file("test content", &file_path).unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("examples.json");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }
}
