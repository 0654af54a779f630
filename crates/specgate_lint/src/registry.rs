//! The rule registry.

use crate::rule::{Rule, RuleCategory};
use crate::rules;

/// An explicit, owned collection of rules.
///
/// Built as a value and passed where needed; there is no global
/// registry. `builtin()` yields the full shipped rule set, and callers
/// embedding the engine can register their own rules on top.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The registry of all built-in rules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in rules::builtin_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Register a rule. Re-registering an id replaces the previous rule
    /// in place, keeping its original position in execution order.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        match self.rules.iter().position(|r| r.id() == rule.id()) {
            Some(pos) => self.rules[pos] = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| r.id() == id).map(|r| r.as_ref())
    }

    /// All rules in registration order.
    pub fn all(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn by_category(&self, category: RuleCategory) -> Vec<&dyn Rule> {
        self.all().filter(|r| r.category() == category).collect()
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::issue::{Issue, Severity};
    use specgate_model::Library;

    struct Stub(&'static str, &'static str);

    impl Rule for Stub {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> &'static str {
            self.1
        }
        fn description(&self) -> &'static str {
            ""
        }
        fn category(&self) -> RuleCategory {
            RuleCategory::Structural
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _: &Library, _: &LintConfig) -> Vec<Issue> {
            Vec::new()
        }
    }

    #[test]
    fn test_builtin_registry_is_populated() {
        let registry = RuleRegistry::builtin();
        assert!(registry.get("S001").is_some());
        assert!(registry.get("M003").is_some());
        assert!(registry.get("V005").is_some());
        assert!(registry.get("Z999").is_none());
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(Stub("T001", "first")));
        registry.register(Box::new(Stub("T002", "second")));
        registry.register(Box::new(Stub("T001", "replaced")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("T001").unwrap().name(), "replaced");
        assert_eq!(registry.rule_ids(), vec!["T001", "T002"]);
    }
}
