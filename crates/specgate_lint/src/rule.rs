//! The rule trait and categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use specgate_model::Library;

use crate::config::LintConfig;
use crate::error::LintError;
use crate::issue::{Issue, Severity};

/// Categories grouping the built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    Structural,
    Naming,
    Completeness,
    Consistency,
    Maturity,
    Extension,
    Lifecycle,
    Version,
}

impl RuleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Structural => "structural",
            RuleCategory::Naming => "naming",
            RuleCategory::Completeness => "completeness",
            RuleCategory::Consistency => "consistency",
            RuleCategory::Maturity => "maturity",
            RuleCategory::Extension => "extension",
            RuleCategory::Lifecycle => "lifecycle",
            RuleCategory::Version => "version",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleCategory {
    type Err = LintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structural" => Ok(RuleCategory::Structural),
            "naming" => Ok(RuleCategory::Naming),
            "completeness" => Ok(RuleCategory::Completeness),
            "consistency" => Ok(RuleCategory::Consistency),
            "maturity" => Ok(RuleCategory::Maturity),
            "extension" => Ok(RuleCategory::Extension),
            "lifecycle" => Ok(RuleCategory::Lifecycle),
            "version" => Ok(RuleCategory::Version),
            other => Err(LintError::UnknownCategory(other.to_string())),
        }
    }
}

/// A lint rule.
///
/// Rules are pure functions of the document and configuration: they
/// never mutate either, and no rule may depend on another rule's
/// output.
pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn category(&self) -> RuleCategory;
    fn default_severity(&self) -> Severity;

    /// Check the library and return every issue found. Rules resolve
    /// their effective severity through `config.severity_for`.
    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue>;

    /// Produce a corrected copy of the library for a fixable issue.
    fn fix(&self, _library: &Library, _issue: &Issue) -> Option<Library> {
        None
    }
}
