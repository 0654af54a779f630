//! Completeness rules: content each entity kind is expected to carry.

use specgate_model::{CrossRef, Library, TypeKind};

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::is_blank;

pub struct FeatureNoSteps;

impl Rule for FeatureNoSteps {
    fn id(&self) -> &'static str {
        "C001"
    }
    fn name(&self) -> &'static str {
        "feature-no-steps"
    }
    fn description(&self) -> &'static str {
        "Features declare verification steps"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Completeness
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .features
            .iter()
            .enumerate()
            .filter(|(_, f)| f.steps.is_empty())
            .map(|(i, f)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Feature '{}' has no steps", f.id),
                    format!("$.library.features[{i}]"),
                )
                .with_ref(CrossRef::feature_ref(&f.id))
            })
            .collect()
    }
}

pub struct MethodNoSignature;

impl Rule for MethodNoSignature {
    fn id(&self) -> &'static str {
        "C002"
    }
    fn name(&self) -> &'static str {
        "method-no-signature"
    }
    fn description(&self) -> &'static str {
        "Methods declare their signature"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Completeness
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();
        for (i, t) in library.types.iter().enumerate() {
            for (collection, j, m) in t.all_methods() {
                if is_blank(&m.signature) {
                    issues.push(
                        Issue::new(
                            self.id(),
                            severity,
                            format!("Method '{}.{}' has no signature", t.name, m.name),
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

pub struct TypeNoModule;

impl Rule for TypeNoModule {
    fn id(&self) -> &'static str {
        "C003"
    }
    fn name(&self) -> &'static str {
        "type-no-module"
    }
    fn description(&self) -> &'static str {
        "Types declare their defining module"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Completeness
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
            .filter(|(_, t)| is_blank(&t.module))
            .map(|(i, t)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Type '{}' declares no module", t.name),
                    format!("$.library.types[{i}]"),
                )
                .with_ref(CrossRef::type_ref(&t.name))
            })
            .collect()
    }
}

pub struct EnumNoValues;

impl Rule for EnumNoValues {
    fn id(&self) -> &'static str {
        "C005"
    }
    fn name(&self) -> &'static str {
        "enum-no-values"
    }
    fn description(&self) -> &'static str {
        "Enum types declare their values"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Completeness
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
            .filter(|(_, t)| t.kind == TypeKind::Enum && t.values.is_empty())
            .map(|(i, t)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Enum '{}' declares no values", t.name),
                    format!("$.library.types[{i}]"),
                )
                .with_ref(CrossRef::type_ref(&t.name))
            })
            .collect()
    }
}

pub struct ProtocolNoMethods;

impl Rule for ProtocolNoMethods {
    fn id(&self) -> &'static str {
        "C006"
    }
    fn name(&self) -> &'static str {
        "protocol-no-methods"
    }
    fn description(&self) -> &'static str {
        "Protocol types declare the methods they require"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Completeness
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
            .filter(|(_, t)| t.kind == TypeKind::Protocol && t.all_methods().next().is_none())
            .map(|(i, t)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Protocol '{}' declares no methods", t.name),
                    format!("$.library.types[{i}]"),
                )
                .with_ref(CrossRef::type_ref(&t.name))
            })
            .collect()
    }
}

pub struct FeatureNoReferences;

impl Rule for FeatureNoReferences {
    fn id(&self) -> &'static str {
        "C007"
    }
    fn name(&self) -> &'static str {
        "feature-no-references"
    }
    fn description(&self) -> &'static str {
        "Features reference the entities they exercise"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Completeness
    }
    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .features
            .iter()
            .enumerate()
            .filter(|(_, f)| f.references.is_empty())
            .map(|(i, f)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Feature '{}' references no entities", f.id),
                    format!("$.library.features[{i}]"),
                )
                .with_ref(CrossRef::feature_ref(&f.id))
            })
            .collect()
    }
}
