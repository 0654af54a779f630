//! Structural rules: required descriptive content.

use specgate_model::{CrossRef, Library, TypeKind};

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::is_blank;

pub struct MissingTypeDescription;

impl Rule for MissingTypeDescription {
    fn id(&self) -> &'static str {
        "S001"
    }
    fn name(&self) -> &'static str {
        "missing-type-description"
    }
    fn description(&self) -> &'static str {
        "Every type must carry a docstring"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Structural
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .types
            .iter()
            .enumerate()
            .filter(|(_, t)| is_blank(&t.docstring))
            .map(|(i, t)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Type '{}' has no description", t.name),
                    format!("$.library.types[{i}]"),
                )
                .with_ref(CrossRef::type_ref(&t.name))
            })
            .collect()
    }
}

pub struct MissingMethodDescription;

impl Rule for MissingMethodDescription {
    fn id(&self) -> &'static str {
        "S002"
    }
    fn name(&self) -> &'static str {
        "missing-method-description"
    }
    fn description(&self) -> &'static str {
        "Every method must carry a description"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Structural
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();
        for (i, t) in library.types.iter().enumerate() {
            for (collection, j, m) in t.all_methods() {
                if is_blank(&m.description) {
                    issues.push(
                        Issue::new(
                            self.id(),
                            severity,
                            format!("Method '{}.{}' has no description", t.name, m.name),
                            format!("$.library.types[{i}].{collection}[{j}]"),
                        )
                        .with_ref(CrossRef::method_ref(&t.name, &m.name)),
                    );
                }
            }
        }
        issues
    }
}

pub struct MissingFunctionDescription;

impl Rule for MissingFunctionDescription {
    fn id(&self) -> &'static str {
        "S003"
    }
    fn name(&self) -> &'static str {
        "missing-function-description"
    }
    fn description(&self) -> &'static str {
        "Every function must carry a description"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Structural
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .functions
            .iter()
            .enumerate()
            .filter(|(_, f)| is_blank(&f.description))
            .map(|(i, f)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Function '{}' has no description", f.name),
                    format!("$.library.functions[{i}]"),
                )
                .with_ref(CrossRef::function_ref(&f.name))
            })
            .collect()
    }
}

pub struct EmptyType;

impl Rule for EmptyType {
    fn id(&self) -> &'static str {
        "S007"
    }
    fn name(&self) -> &'static str {
        "empty-type"
    }
    fn description(&self) -> &'static str {
        "A class-like type should declare members"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Structural
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .types
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                // enums and aliases have no member surface
                !matches!(t.kind, TypeKind::Enum | TypeKind::TypeAlias)
                    && t.all_methods().next().is_none()
                    && t.properties.is_empty()
            })
            .map(|(i, t)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Type '{}' declares no methods or properties", t.name),
                    format!("$.library.types[{i}]"),
                )
                .with_ref(CrossRef::type_ref(&t.name))
            })
            .collect()
    }
}
