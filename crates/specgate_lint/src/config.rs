//! Lint configuration: rule selection and severity overrides.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::issue::Severity;
use crate::rule::RuleCategory;

/// Per-rule override, either a bare severity string or a table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleOverride {
    Severity(Severity),
    Detailed {
        #[serde(default)]
        severity: Option<Severity>,
        #[serde(default)]
        enabled: Option<bool>,
    },
}

impl RuleOverride {
    fn severity(&self) -> Option<Severity> {
        match self {
            RuleOverride::Severity(s) => Some(*s),
            RuleOverride::Detailed { severity, .. } => *severity,
        }
    }

    fn enabled(&self) -> Option<bool> {
        match self {
            RuleOverride::Severity(_) => None,
            RuleOverride::Detailed { enabled, .. } => *enabled,
        }
    }
}

/// Rule selection and severity configuration, typically read from the
/// `[lint]` table of `specgate.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Rule ids or category names to enable. `"all"` enables everything.
    pub enable: Vec<String>,
    /// Rule ids or category names to disable. Disabling beats enabling.
    pub disable: Vec<String>,
    /// Per-rule overrides keyed by rule id.
    pub rules: BTreeMap<String, RuleOverride>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enable: vec!["all".to_string()],
            disable: Vec::new(),
            rules: BTreeMap::new(),
        }
    }
}

impl LintConfig {
    /// Whether a rule runs under this configuration.
    pub fn is_rule_enabled(&self, id: &str, category: RuleCategory) -> bool {
        let matches = |entry: &String| {
            entry == "all" || entry == id || entry == category.as_str()
        };

        if self.disable.iter().any(matches) {
            return false;
        }
        if let Some(enabled) = self.rules.get(id).and_then(|o| o.enabled()) {
            return enabled;
        }
        self.enable.iter().any(matches)
    }

    /// The effective severity for a rule: the configured override, or
    /// the rule's default.
    pub fn severity_for(&self, id: &str, default: Severity) -> Severity {
        self.rules
            .get(id)
            .and_then(|o| o.severity())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all() {
        let config = LintConfig::default();
        assert!(config.is_rule_enabled("S001", RuleCategory::Structural));
    }

    #[test]
    fn test_disable_beats_enable() {
        let config: LintConfig = serde_json::from_str(
            r#"{"enable": ["all"], "disable": ["S001"]}"#,
        )
        .unwrap();
        assert!(!config.is_rule_enabled("S001", RuleCategory::Structural));
        assert!(config.is_rule_enabled("S002", RuleCategory::Structural));
    }

    #[test]
    fn test_category_selection() {
        let config: LintConfig = serde_json::from_str(
            r#"{"enable": ["naming"], "disable": []}"#,
        )
        .unwrap();
        assert!(config.is_rule_enabled("N001", RuleCategory::Naming));
        assert!(!config.is_rule_enabled("S001", RuleCategory::Structural));
    }

    #[test]
    fn test_severity_override_bare_and_detailed() {
        let config: LintConfig = serde_json::from_str(
            r#"{"rules": {
                "S001": "warning",
                "S002": {"severity": "error"},
                "S003": {"enabled": false}
            }}"#,
        )
        .unwrap();
        assert_eq!(config.severity_for("S001", Severity::Error), Severity::Warning);
        assert_eq!(config.severity_for("S002", Severity::Warning), Severity::Error);
        assert_eq!(config.severity_for("S999", Severity::Info), Severity::Info);
        assert!(!config.is_rule_enabled("S003", RuleCategory::Structural));
    }
}
