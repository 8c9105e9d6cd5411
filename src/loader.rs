//! Loads Swagger 2.0 documents from disk.
//!
//! Accepts both JSON and YAML. The format is chosen by file extension;
//! anything that is not `.json` goes through the YAML parser, which accepts
//! JSON content as well.

use crate::error::{Error, Result};
use crate::spec::SwaggerSpec;
use log::debug;
use std::fs;
use std::path::Path;

/// Reads and parses a spec file into the typed model.
///
/// # Errors
///
/// Returns [`Error::IoError`] if the file cannot be read and
/// [`Error::ParseError`] if its content is not a well-formed document.
pub fn load_spec(path: &Path) -> Result<SwaggerSpec> {
    debug!("Loading Swagger spec from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let spec = parse_spec(&content, path)?;

    debug!(
        "Loaded spec '{}' with {} definitions and {} paths",
        spec.info.title,
        spec.definitions.len(),
        spec.paths.len()
    );

    Ok(spec)
}

fn parse_spec(content: &str, path: &Path) -> Result<SwaggerSpec> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(content).map_err(|e| Error::ParseError {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    } else {
        serde_yaml::from_str(content).map_err(|e| Error::ParseError {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper function to create a temporary file with content
    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let file_path = dir.path().join(name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    #[test]
    fn test_load_json_spec() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(
            &temp_dir,
            "spec.json",
            r#"{
                "swagger": "2.0",
                "info": {"title": "Test API", "version": "1.0"},
                "definitions": {"Pet": {"type": "object"}}
            }"#,
        );

        let spec = load_spec(&path).unwrap();

        assert_eq!(spec.info.title, "Test API");
        assert_eq!(spec.definitions.len(), 1);
    }

    #[test]
    fn test_load_yaml_spec() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(
            &temp_dir,
            "spec.yaml",
            "swagger: '2.0'\ninfo:\n  title: Test API\ndefinitions:\n  Pet:\n    type: object\n",
        );

        let spec = load_spec(&path).unwrap();

        assert_eq!(spec.info.title, "Test API");
        assert!(spec.definitions.contains_key("Pet"));
    }

    #[test]
    fn test_json_and_yaml_parse_to_same_model() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = create_temp_file(
            &temp_dir,
            "spec.json",
            r#"{"info": {"title": "Same"}, "definitions": {"Tag": {"type": "string"}}}"#,
        );
        let yaml_path = create_temp_file(
            &temp_dir,
            "spec.yml",
            "info:\n  title: Same\ndefinitions:\n  Tag:\n    type: string\n",
        );

        let from_json = load_spec(&json_path).unwrap();
        let from_yaml = load_spec(&yaml_path).unwrap();

        assert_eq!(from_json.info.title, from_yaml.info.title);
        assert_eq!(
            from_json.definitions["Tag"],
            from_yaml.definitions["Tag"]
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_spec(Path::new("/nonexistent/spec.json"));

        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "bad.json", "{ not json");

        let result = load_spec(&path);

        match result {
            Err(Error::ParseError { file, .. }) => assert_eq!(file, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_file(&temp_dir, "bad.yaml", "definitions: [unclosed");

        assert!(matches!(
            load_spec(&path),
            Err(Error::ParseError { .. })
        ));
    }
}
