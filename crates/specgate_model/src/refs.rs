//! Canonical cross-reference pointers.
//!
//! Every addressable unit in a spec document has exactly one canonical
//! pointer:
//!
//! - `#/types/<Name>`
//! - `#/types/<Name>/methods/<name>`
//! - `#/functions/<name>`
//! - `#/features/<id>`
//! - `#/modules/<path>`
//! - `#/principles/<id>`
//!
//! References into another library carry that library's name before the
//! `#` and are never checked against the local document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cross-reference pointer in canonical grammar.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CrossRef(String);

impl CrossRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the pointer crosses into another library (prefix before `#`).
    pub fn is_external(&self) -> bool {
        self.0.contains('#') && !self.0.starts_with('#')
    }

    /// True if the pointer addresses the local document.
    pub fn is_local(&self) -> bool {
        self.0.starts_with('#')
    }

    pub fn type_ref(name: &str) -> Self {
        Self(format!("#/types/{name}"))
    }

    pub fn method_ref(type_name: &str, method: &str) -> Self {
        Self(format!("#/types/{type_name}/methods/{method}"))
    }

    pub fn function_ref(name: &str) -> Self {
        Self(format!("#/functions/{name}"))
    }

    pub fn feature_ref(id: &str) -> Self {
        Self(format!("#/features/{id}"))
    }

    pub fn module_ref(path: &str) -> Self {
        Self(format!("#/modules/{path}"))
    }

    pub fn principle_ref(id: &str) -> Self {
        Self(format!("#/principles/{id}"))
    }
}

impl fmt::Display for CrossRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CrossRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CrossRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}
