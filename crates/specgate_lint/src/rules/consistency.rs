//! Consistency rules: cross-references and uniqueness.

use std::collections::BTreeMap;

use specgate_model::{CrossRef, FeatureStatus, Library};

use crate::config::LintConfig;
use crate::index::ReferenceIndex;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::entity_views;

pub struct DanglingReference;

impl DanglingReference {
    fn check_ref(
        &self,
        index: &ReferenceIndex,
        severity: Severity,
        pointer: &CrossRef,
        path: String,
        issues: &mut Vec<Issue>,
    ) {
        // references into other libraries are not resolvable here
        if pointer.is_external() || index.contains(pointer.as_str()) {
            return;
        }
        issues.push(
            Issue::new(
                self.id(),
                severity,
                format!("Reference '{pointer}' does not resolve"),
                path,
            )
            .with_ref(pointer.clone()),
        );
    }
}

impl Rule for DanglingReference {
    fn id(&self) -> &'static str {
        "X001"
    }
    fn name(&self) -> &'static str {
        "dangling-reference"
    }
    fn description(&self) -> &'static str {
        "Local references must resolve within the document"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Consistency
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let index = ReferenceIndex::build(library);
        let mut issues = Vec::new();

        for (i, f) in library.features.iter().enumerate() {
            for (j, r) in f.references.iter().enumerate() {
                self.check_ref(
                    &index,
                    severity,
                    r,
                    format!("$.library.features[{i}].references[{j}]"),
                    &mut issues,
                );
            }
        }
        for (i, t) in library.types.iter().enumerate() {
            for (j, r) in t.related.iter().enumerate() {
                self.check_ref(
                    &index,
                    severity,
                    r,
                    format!("$.library.types[{i}].related[{j}]"),
                    &mut issues,
                );
            }
        }
        for view in entity_views(library) {
            for (j, req) in view.requires.iter().enumerate() {
                self.check_ref(
                    &index,
                    severity,
                    &req.target,
                    format!("{}.requires[{j}]", view.path),
                    &mut issues,
                );
            }
        }
        for (i, m) in library.modules.iter().enumerate() {
            for (j, req) in m.requires.iter().enumerate() {
                self.check_ref(
                    &index,
                    severity,
                    &req.target,
                    format!("$.library.modules[{i}].requires[{j}]"),
                    &mut issues,
                );
            }
        }
        for (i, p) in library.principles.iter().enumerate() {
            for (j, req) in p.requires.iter().enumerate() {
                self.check_ref(
                    &index,
                    severity,
                    &req.target,
                    format!("$.library.principles[{i}].requires[{j}]"),
                    &mut issues,
                );
            }
        }

        issues
    }
}

pub struct DuplicateTypeName;

impl Rule for DuplicateTypeName {
    fn id(&self) -> &'static str {
        "X002"
    }
    fn name(&self) -> &'static str {
        "duplicate-type-name"
    }
    fn description(&self) -> &'static str {
        "Type names are unique within a document"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Consistency
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        let mut issues = Vec::new();

        for (i, t) in library.types.iter().enumerate() {
            match seen.get(t.name.as_str()) {
                Some(first) => issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "Duplicate type name '{}' (first declared at index {first})",
                            t.name
                        ),
                        format!("$.library.types[{i}]"),
                    )
                    .with_ref(CrossRef::type_ref(&t.name)),
                ),
                None => {
                    seen.insert(&t.name, i);
                }
            }
        }
        issues
    }
}

pub struct DuplicateFeatureId;

impl Rule for DuplicateFeatureId {
    fn id(&self) -> &'static str {
        "X003"
    }
    fn name(&self) -> &'static str {
        "duplicate-feature-id"
    }
    fn description(&self) -> &'static str {
        "Feature ids are unique within a document"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Consistency
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        let mut issues = Vec::new();

        for (i, f) in library.features.iter().enumerate() {
            match seen.get(f.id.as_str()) {
                Some(first) => issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "Duplicate feature id '{}' (first declared at index {first})",
                            f.id
                        ),
                        format!("$.library.features[{i}]"),
                    )
                    .with_ref(CrossRef::feature_ref(&f.id)),
                ),
                None => {
                    seen.insert(&f.id, i);
                }
            }
        }
        issues
    }
}

pub struct InvalidStatusTransition;

impl Rule for InvalidStatusTransition {
    fn id(&self) -> &'static str {
        "X006"
    }
    fn name(&self) -> &'static str {
        "invalid-status-transition"
    }
    fn description(&self) -> &'static str {
        "A tested feature must have verification steps"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Consistency
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
            .filter(|(_, f)| f.status == FeatureStatus::Tested && f.steps.is_empty())
            .map(|(i, f)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Feature '{}' is tested but declares no steps", f.id),
                    format!("$.library.features[{i}]"),
                )
                .with_ref(CrossRef::feature_ref(&f.id))
            })
            .collect()
    }
}
