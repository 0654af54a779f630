//! The lint runner: rule selection, execution, and filtering.

use serde::Serialize;
use tracing::debug;

use specgate_model::Library;

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::registry::RuleRegistry;
use crate::rule::RuleCategory;

/// Rule metadata as reported by `available_rules`.
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: RuleCategory,
    pub default_severity: Severity,
    pub enabled: bool,
}

/// Executes rules against a library.
pub struct LintRunner {
    registry: RuleRegistry,
    config: LintConfig,
}

impl LintRunner {
    /// A runner over the built-in rules.
    pub fn new(config: LintConfig) -> Self {
        Self::with_registry(RuleRegistry::builtin(), config)
    }

    pub fn with_registry(registry: RuleRegistry, config: LintConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run the selected rules and return their issues.
    ///
    /// `rule_ids` restricts the run to those ids; unknown ids are
    /// silently skipped. Rules disabled by configuration never run.
    /// `min_severity` drops issues less severe than the given level
    /// after execution.
    pub fn run(
        &self,
        library: &Library,
        rule_ids: Option<&[&str]>,
        min_severity: Option<Severity>,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();

        for rule in self.registry.all() {
            if let Some(ids) = rule_ids {
                if !ids.contains(&rule.id()) {
                    continue;
                }
            }
            if !self.config.is_rule_enabled(rule.id(), rule.category()) {
                continue;
            }
            let found = rule.check(library, &self.config);
            debug!(rule = rule.id(), issues = found.len(), "rule checked");
            issues.extend(found);
        }

        if let Some(min) = min_severity {
            issues.retain(|i| i.severity.at_least(min));
        }
        issues
    }

    /// Metadata for every registered rule, sorted by id.
    pub fn available_rules(&self) -> Vec<RuleInfo> {
        let mut rules: Vec<RuleInfo> = self
            .registry
            .all()
            .map(|rule| RuleInfo {
                id: rule.id(),
                name: rule.name(),
                description: rule.description(),
                category: rule.category(),
                default_severity: rule.default_severity(),
                enabled: self.config.is_rule_enabled(rule.id(), rule.category()),
            })
            .collect();
        rules.sort_by_key(|r| r.id);
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(json: &str) -> Library {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_unknown_rule_ids_are_skipped() {
        let runner = LintRunner::new(LintConfig::default());
        let lib = library(r#"{"name": "demo", "types": [{"name": "A", "module": "m"}]}"#);

        let issues = runner.run(&lib, Some(&["Z999"]), None);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_rule_selection_restricts_output() {
        let runner = LintRunner::new(LintConfig::default());
        // A has no description (S001) and no module (C003)
        let lib = library(r#"{"name": "demo", "types": [{"name": "A"}]}"#);

        let issues = runner.run(&lib, Some(&["S001"]), None);
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i.rule == "S001"));
    }

    #[test]
    fn test_min_severity_filters_after_execution() {
        let runner = LintRunner::new(LintConfig::default());
        let lib = library(
            r#"{"name": "demo",
                "features": [{"id": "a-feature", "steps": ["s"]}]}"#,
        );

        // C007 (no references) is info; gone at min warning
        let all = runner.run(&lib, None, None);
        assert!(all.iter().any(|i| i.rule == "C007"));
        let filtered = runner.run(&lib, None, Some(Severity::Warning));
        assert!(!filtered.iter().any(|i| i.rule == "C007"));
    }

    #[test]
    fn test_available_rules_sorted_with_enablement() {
        let config: LintConfig =
            serde_json::from_str(r#"{"enable": ["all"], "disable": ["naming"]}"#).unwrap();
        let runner = LintRunner::new(config);

        let rules = runner.available_rules();
        let ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

        let n001 = rules.iter().find(|r| r.id == "N001").unwrap();
        assert!(!n001.enabled);
        let s001 = rules.iter().find(|r| r.id == "S001").unwrap();
        assert!(s001.enabled);
    }
}
