//! Severities and the issue records rules emit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use specgate_model::CrossRef;

use crate::error::LintError;

/// Issue severity. Ordered most severe first, so `Error < Warning`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// True if this severity is at least as severe as `min`.
    pub fn at_least(self, min: Severity) -> bool {
        self <= min
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            other => Err(LintError::UnknownSeverity(other.to_string())),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Id of the rule that produced this issue.
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    /// JSONPath-style location in the document, e.g.
    /// `$.library.types[3].name`.
    pub path: String,
    /// Canonical pointer to the offending entity, when one exists.
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<CrossRef>,
    #[serde(default)]
    pub fix_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Issue {
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            path: path.into(),
            entity_ref: None,
            fix_available: false,
            suggested_fix: None,
        }
    }

    pub fn with_ref(mut self, entity_ref: CrossRef) -> Self {
        self.entity_ref = Some(entity_ref);
        self
    }

    pub fn with_fix(mut self, suggested: impl Into<String>) -> Self {
        self.fix_available = true;
        self.suggested_fix = Some(suggested.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert!(Severity::Error.at_least(Severity::Warning));
        assert!(!Severity::Info.at_least(Severity::Warning));
        assert!(Severity::Warning.at_least(Severity::Warning));
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_issue_serializes_ref_field() {
        let issue = Issue::new("X001", Severity::Error, "dangling", "$.library.types[0]")
            .with_ref(CrossRef::type_ref("A"));
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["ref"], "#/types/A");
        assert_eq!(json["severity"], "error");
    }
}
