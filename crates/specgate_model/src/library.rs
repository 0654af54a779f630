//! The top-level spec document and the library it describes.

use serde::{Deserialize, Serialize};

use crate::entity::{Feature, FunctionDef, Module, Principle, TypeDef};
use crate::workflow::Workflow;

/// The library described by a spec document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version requirement for the target runtime, e.g. `>=3.10`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_requires: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<Module>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub principles: Vec<Principle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<Workflow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_workflow: Option<String>,
}

impl Library {
    /// Find a declared type by name.
    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Find a declared function by name.
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Find a declared feature by id.
    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Find a declared workflow by name.
    pub fn workflow(&self, name: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.name == name)
    }

    /// The workflow governing an entity: its own override when set,
    /// otherwise the library default.
    pub fn resolve_workflow(&self, entity_workflow: Option<&str>) -> Option<&Workflow> {
        let name = entity_workflow.or(self.default_workflow.as_deref())?;
        self.workflow(name)
    }

    /// True if the named extension is enabled on this document.
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }
}

/// A complete spec document as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub library: Library,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_resolution_prefers_entity_override() {
        let lib: Library = serde_json::from_str(
            r#"{
                "name": "demo",
                "workflows": [{"name": "standard"}, {"name": "strict"}],
                "default_workflow": "standard"
            }"#,
        )
        .unwrap();

        assert_eq!(lib.resolve_workflow(None).unwrap().name, "standard");
        assert_eq!(lib.resolve_workflow(Some("strict")).unwrap().name, "strict");
        assert!(lib.resolve_workflow(Some("missing")).is_none());
    }

    #[test]
    fn test_extension_lookup() {
        let lib: Library = serde_json::from_str(
            r#"{"name": "demo", "extensions": ["lifecycle", "testing"]}"#,
        )
        .unwrap();
        assert!(lib.has_extension("lifecycle"));
        assert!(!lib.has_extension("versioning"));
    }
}
