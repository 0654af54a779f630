//! Typed evidence attached to entities.
//!
//! Evidence proves that a lifecycle gate's precondition holds. Each
//! built-in kind carries its required fields as non-optional struct
//! fields, so a document with, say, a `pr` entry missing its `url`
//! fails at load time rather than during a lint run. Custom evidence
//! defers field requirements to the workflow's declared
//! `EvidenceTypeSpec`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A typed artifact supporting an entity's maturity or lifecycle state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Evidence {
    /// A merged pull/merge request.
    Pr {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    /// A test file or directory.
    Tests {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    /// A design document.
    DesignDoc {
        reference: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    /// Published documentation.
    Docs {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    /// A recorded sign-off.
    Approval {
        reference: String,
        author: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    /// Benchmark results.
    Benchmark {
        reference: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        metrics: BTreeMap<String, serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    /// A migration guide for breaking changes.
    MigrationGuide {
        reference: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    /// A published deprecation notice.
    DeprecationNotice {
        reference: String,
        date: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// Evidence of a workflow-declared custom type.
    Custom {
        type_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
}

impl Evidence {
    /// The evidence kind used for gate matching.
    ///
    /// For custom evidence this is the declared `type_name`, not the
    /// literal `custom` tag.
    pub fn kind(&self) -> &str {
        match self {
            Evidence::Pr { .. } => "pr",
            Evidence::Tests { .. } => "tests",
            Evidence::DesignDoc { .. } => "design_doc",
            Evidence::Docs { .. } => "docs",
            Evidence::Approval { .. } => "approval",
            Evidence::Benchmark { .. } => "benchmark",
            Evidence::MigrationGuide { .. } => "migration_guide",
            Evidence::DeprecationNotice { .. } => "deprecation_notice",
            Evidence::Custom { type_name, .. } => type_name,
        }
    }

    /// The wire tag of this evidence entry.
    pub fn tag(&self) -> &'static str {
        match self {
            Evidence::Pr { .. } => "pr",
            Evidence::Tests { .. } => "tests",
            Evidence::DesignDoc { .. } => "design_doc",
            Evidence::Docs { .. } => "docs",
            Evidence::Approval { .. } => "approval",
            Evidence::Benchmark { .. } => "benchmark",
            Evidence::MigrationGuide { .. } => "migration_guide",
            Evidence::DeprecationNotice { .. } => "deprecation_notice",
            Evidence::Custom { .. } => "custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_evidence() {
        let ev: Evidence = serde_json::from_str(
            r#"{"type": "pr", "url": "https://github.com/x/y/pull/1"}"#,
        )
        .unwrap();
        assert_eq!(ev.kind(), "pr");
    }

    #[test]
    fn test_missing_required_field_is_a_load_error() {
        let result: Result<Evidence, _> =
            serde_json::from_str(r#"{"type": "approval", "reference": "REV-12"}"#);
        assert!(result.is_err()); // approval requires an author
    }

    #[test]
    fn test_custom_kind_uses_type_name() {
        let ev: Evidence = serde_json::from_str(
            r#"{"type": "custom", "type_name": "security_review", "reference": "SR-7"}"#,
        )
        .unwrap();
        assert_eq!(ev.kind(), "security_review");
        assert_eq!(ev.tag(), "custom");
    }
}
