//! Maturity rules: stage/status coherence and requirement checks.

use specgate_lifecycle::{collect_maturities, requirement_satisfied};
use specgate_model::{CrossRef, FeatureStatus, Library, Maturity};

use crate::config::LintConfig;
use crate::graph::RequirementGraph;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::entity_views;

/// The feature status each maturity stage implies.
fn expected_status(maturity: Maturity) -> FeatureStatus {
    match maturity {
        Maturity::Idea | Maturity::Specified | Maturity::Designed => FeatureStatus::Planned,
        Maturity::Implemented => FeatureStatus::Implemented,
        Maturity::Tested
        | Maturity::Documented
        | Maturity::Released
        | Maturity::Deprecated => FeatureStatus::Tested,
    }
}

pub struct MaturityStatusMismatch;

impl Rule for MaturityStatusMismatch {
    fn id(&self) -> &'static str {
        "M001"
    }
    fn name(&self) -> &'static str {
        "maturity-status-mismatch"
    }
    fn description(&self) -> &'static str {
        "A feature's status must agree with its maturity"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Maturity
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
            .filter_map(|(i, f)| {
                let maturity = f.maturity?;
                let expected = expected_status(maturity);
                if f.status == expected {
                    return None;
                }
                Some(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "Feature '{}' has maturity '{}' but status '{}' (expected '{}')",
                            f.id,
                            maturity,
                            f.status.as_str(),
                            expected.as_str()
                        ),
                        format!("$.library.features[{i}]"),
                    )
                    .with_ref(CrossRef::feature_ref(&f.id)),
                )
            })
            .collect()
    }
}

pub struct UnsatisfiedRequirement;

impl Rule for UnsatisfiedRequirement {
    fn id(&self) -> &'static str {
        "M002"
    }
    fn name(&self) -> &'static str {
        "unsatisfied-requirement"
    }
    fn description(&self) -> &'static str {
        "Required entities must have reached the declared maturity"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Maturity
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let maturities = collect_maturities(library);
        let mut issues = Vec::new();

        for view in entity_views(library) {
            for (j, req) in view.requires.iter().enumerate() {
                let (ok, reason) = requirement_satisfied(req, &maturities);
                if ok {
                    continue;
                }
                if let Some(reason) = reason {
                    issues.push(
                        Issue::new(
                            self.id(),
                            severity,
                            format!("'{}' {reason}", view.display_name),
                            format!("{}.requires[{j}]", view.path),
                        )
                        .with_ref(view.entity_ref.clone()),
                    );
                }
            }
        }
        issues
    }
}

pub struct CircularRequirement;

impl Rule for CircularRequirement {
    fn id(&self) -> &'static str {
        "M003"
    }
    fn name(&self) -> &'static str {
        "circular-requirement"
    }
    fn description(&self) -> &'static str {
        "Requirement dependencies must not form a cycle"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Maturity
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        let graph = RequirementGraph::build(library);

        match graph.find_cycle() {
            Some(cycle) => {
                let start = CrossRef::new(cycle[0].clone());
                vec![
                    Issue::new(
                        self.id(),
                        severity,
                        format!("Circular requirement dependency: {}", cycle.join(" -> ")),
                        "$.library",
                    )
                    .with_ref(start),
                ]
            }
            None => Vec::new(),
        }
    }
}
