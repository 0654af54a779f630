//! Extension rules, active only when the document opts in via
//! `extensions`.

use specgate_model::{FeatureStatus, Library, Maturity};

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::entity_views;

pub struct LifecycleTestingMismatch;

impl Rule for LifecycleTestingMismatch {
    fn id(&self) -> &'static str {
        "E001"
    }
    fn name(&self) -> &'static str {
        "lifecycle-testing-mismatch"
    }
    fn description(&self) -> &'static str {
        "Entities at tested maturity or beyond carry a test coverage reference"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Extension
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !library.has_extension("lifecycle") || !library.has_extension("testing") {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        entity_views(library)
            .into_iter()
            .filter(|v| {
                v.maturity.is_some_and(|m| m >= Maturity::Tested)
                    && v.test_coverage.map_or(true, |c| c.trim().is_empty())
            })
            .map(|v| {
                Issue::new(
                    self.id(),
                    severity,
                    format!(
                        "'{}' is at maturity '{}' but has no test coverage",
                        v.display_name,
                        v.maturity.map(|m| m.as_str()).unwrap_or_default()
                    ),
                    v.path,
                )
                .with_ref(v.entity_ref)
            })
            .collect()
    }
}

pub struct PlannedWithImplementationEvidence;

impl PlannedWithImplementationEvidence {
    const EARLY_STATES: [&'static str; 3] = ["idea", "drafted", "planned"];
    const IMPL_KINDS: [&'static str; 3] = ["pr", "tests", "benchmark"];
}

impl Rule for PlannedWithImplementationEvidence {
    fn id(&self) -> &'static str {
        "E002"
    }
    fn name(&self) -> &'static str {
        "planned-with-implementation-evidence"
    }
    fn description(&self) -> &'static str {
        "An entity still in planning should not carry implementation evidence"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Extension
    }
    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !library.has_extension("lifecycle") {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            let early = view.maturity.is_some_and(|m| m <= Maturity::Designed)
                || view
                    .lifecycle_state
                    .is_some_and(|s| Self::EARLY_STATES.contains(&s))
                || (view.maturity.is_none()
                    && view.lifecycle_state.is_none()
                    && view.feature_status == Some(FeatureStatus::Planned));
            if !early {
                continue;
            }
            let impl_evidence: Vec<&str> = view
                .evidence
                .iter()
                .map(|e| e.kind())
                .filter(|k| Self::IMPL_KINDS.contains(k))
                .collect();
            if impl_evidence.is_empty() {
                continue;
            }
            issues.push(
                Issue::new(
                    self.id(),
                    severity,
                    format!(
                        "'{}' is still planned but carries implementation evidence ({})",
                        view.display_name,
                        impl_evidence.join(", ")
                    ),
                    view.path,
                )
                .with_ref(view.entity_ref),
            );
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(json: &str) -> Library {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_e001_requires_both_extensions() {
        let body = r#""types": [{"name": "A", "maturity": "tested"}]"#;
        let without = library(&format!(
            r#"{{"name": "demo", "extensions": ["lifecycle"], {body}}}"#
        ));
        assert!(LifecycleTestingMismatch
            .check(&without, &LintConfig::default())
            .is_empty());

        let with = library(&format!(
            r#"{{"name": "demo", "extensions": ["lifecycle", "testing"], {body}}}"#
        ));
        assert_eq!(
            LifecycleTestingMismatch
                .check(&with, &LintConfig::default())
                .len(),
            1
        );
    }

    #[test]
    fn test_e001_satisfied_by_coverage() {
        let lib = library(
            r#"{"name": "demo", "extensions": ["lifecycle", "testing"],
                "types": [{"name": "A", "maturity": "released",
                           "test_coverage": "tests/test_a.py"}]}"#,
        );
        assert!(LifecycleTestingMismatch
            .check(&lib, &LintConfig::default())
            .is_empty());
    }

    #[test]
    fn test_e002_flags_early_entity_with_pr_evidence() {
        let lib = library(
            r#"{"name": "demo", "extensions": ["lifecycle"],
                "types": [{"name": "A", "maturity": "specified",
                           "evidence": [{"type": "pr", "url": "https://x/pr/1"}]}],
                "features": [{"id": "f", "status": "planned",
                              "evidence": [{"type": "design_doc", "reference": "DD-1"}]}]
            }"#,
        );
        let issues = PlannedWithImplementationEvidence.check(&lib, &LintConfig::default());
        // design_doc evidence is not implementation evidence
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("(pr)"));
    }
}
