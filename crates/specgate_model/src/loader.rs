//! Loading spec documents from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::library::Document;

/// Loads spec documents from JSON or YAML files.
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load a spec document, dispatching on file extension.
    ///
    /// `.json` parses as JSON; `.yaml` and `.yml` parse as YAML. Any
    /// other extension is rejected.
    pub fn load(path: &Path) -> ModelResult<Document> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading spec document");

        match extension.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(ModelError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse a spec document from a JSON string.
    pub fn from_json(content: &str) -> ModelResult<Document> {
        let doc: Document = serde_json::from_str(content)?;
        Ok(doc)
    }

    /// Parse a spec document from a YAML string.
    pub fn from_yaml(content: &str) -> ModelResult<Document> {
        let doc: Document = serde_yaml::from_str(content)?;
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_json_document() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"library": {{"name": "demo", "version": "1.0.0"}}}}"#
        )
        .unwrap();

        let doc = DocumentLoader::load(file.path()).unwrap();
        assert_eq!(doc.library.name, "demo");
    }

    #[test]
    fn test_load_yaml_document() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "library:\n  name: demo\n  types:\n    - name: Parser\n").unwrap();

        let doc = DocumentLoader::load(file.path()).unwrap();
        assert_eq!(doc.library.types.len(), 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = DocumentLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentLoader::load(Path::new("/nonexistent/spec.json")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }
}
