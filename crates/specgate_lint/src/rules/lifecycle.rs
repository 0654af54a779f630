//! Lifecycle rules, active when the document enables the `lifecycle`
//! extension.

use specgate_lifecycle::{evidence_kinds, workflow_diagnostics};
use specgate_model::{Evidence, FeatureStatus, Library};

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::{entity_views, matches_pattern};

fn lifecycle_enabled(library: &Library) -> bool {
    library.has_extension("lifecycle")
}

pub struct InvalidLifecycleState;

impl Rule for InvalidLifecycleState {
    fn id(&self) -> &'static str {
        "L001"
    }
    fn name(&self) -> &'static str {
        "invalid-lifecycle-state"
    }
    fn description(&self) -> &'static str {
        "Lifecycle states must be declared by the governing workflow"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            let Some(state) = view.lifecycle_state else {
                continue;
            };
            let Some(workflow) = library.resolve_workflow(view.workflow) else {
                continue;
            };
            if workflow.states.is_empty() || workflow.state(state).is_some() {
                continue;
            }
            issues.push(
                Issue::new(
                    self.id(),
                    severity,
                    format!(
                        "'{}' is in state '{}', not declared by workflow '{}'",
                        view.display_name, state, workflow.name
                    ),
                    format!("{}.lifecycle_state", view.path),
                )
                .with_ref(view.entity_ref),
            );
        }
        issues
    }
}

pub struct MissingRequiredEvidence;

impl Rule for MissingRequiredEvidence {
    fn id(&self) -> &'static str {
        "L002"
    }
    fn name(&self) -> &'static str {
        "missing-required-evidence"
    }
    fn description(&self) -> &'static str {
        "Entities carry the evidence their current state requires"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            let Some(state_name) = view.lifecycle_state else {
                continue;
            };
            let Some(state) = library
                .resolve_workflow(view.workflow)
                .and_then(|w| w.state(state_name))
            else {
                continue;
            };
            let kinds = evidence_kinds(view.evidence);
            for required in &state.required_evidence {
                if kinds.contains(required.as_str()) {
                    continue;
                }
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' in state '{}' is missing required evidence '{}'",
                            view.display_name, state_name, required
                        ),
                        format!("{}.evidence", view.path),
                    )
                    .with_ref(view.entity_ref.clone()),
                );
            }
        }
        issues
    }
}

pub struct DanglingWorkflowReference;

impl Rule for DanglingWorkflowReference {
    fn id(&self) -> &'static str {
        "L003"
    }
    fn name(&self) -> &'static str {
        "dangling-workflow-reference"
    }
    fn description(&self) -> &'static str {
        "Workflow names must resolve to a declared workflow"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        if let Some(default) = &library.default_workflow {
            if library.workflow(default).is_none() {
                issues.push(Issue::new(
                    self.id(),
                    severity,
                    format!("default_workflow '{default}' is not declared"),
                    "$.library.default_workflow",
                ));
            }
        }
        for view in entity_views(library) {
            let Some(name) = view.workflow else { continue };
            if library.workflow(name).is_some() {
                continue;
            }
            issues.push(
                Issue::new(
                    self.id(),
                    severity,
                    format!(
                        "'{}' names workflow '{}', which is not declared",
                        view.display_name, name
                    ),
                    format!("{}.workflow", view.path),
                )
                .with_ref(view.entity_ref),
            );
        }
        issues
    }
}

pub struct LifecycleFeatureStatusMismatch;

impl Rule for LifecycleFeatureStatusMismatch {
    fn id(&self) -> &'static str {
        "L004"
    }
    fn name(&self) -> &'static str {
        "lifecycle-feature-status-mismatch"
    }
    fn description(&self) -> &'static str {
        "A feature past planning should have left its workflow's initial state"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .features
            .iter()
            .enumerate()
            .filter_map(|(i, f)| {
                let state = f.lifecycle_state.as_deref()?;
                let workflow = library.resolve_workflow(f.workflow.as_deref())?;
                let initial = workflow.initial_state.as_deref()?;
                if f.status == FeatureStatus::Planned || state != initial {
                    return None;
                }
                Some(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "Feature '{}' has status '{}' but is still in initial state '{}'",
                            f.id,
                            f.status.as_str(),
                            initial
                        ),
                        format!("$.library.features[{i}]"),
                    )
                    .with_ref(specgate_model::CrossRef::feature_ref(&f.id)),
                )
            })
            .collect()
    }
}

pub struct InvalidWorkflowDefinition;

impl Rule for InvalidWorkflowDefinition {
    fn id(&self) -> &'static str {
        "L005"
    }
    fn name(&self) -> &'static str {
        "invalid-workflow-definition"
    }
    fn description(&self) -> &'static str {
        "Workflow state graphs must be structurally valid"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for (i, workflow) in library.workflows.iter().enumerate() {
            for diagnostic in workflow_diagnostics(workflow) {
                // reachability findings never invalidate the workflow
                let level = if diagnostic.warning {
                    Severity::Warning
                } else {
                    severity
                };
                issues.push(Issue::new(
                    self.id(),
                    level,
                    diagnostic.message,
                    format!("$.library.workflows[{i}]"),
                ));
            }
        }
        issues
    }
}

pub struct InvalidEvidenceReference;

impl Rule for InvalidEvidenceReference {
    fn id(&self) -> &'static str {
        "L006"
    }
    fn name(&self) -> &'static str {
        "invalid-evidence-reference"
    }
    fn description(&self) -> &'static str {
        "Evidence URLs and references match their expected shape"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            let workflow = library.resolve_workflow(view.workflow);
            for (j, evidence) in view.evidence.iter().enumerate() {
                let mut fault = None;
                match evidence {
                    Evidence::Pr { url, .. } | Evidence::Docs { url, .. } => {
                        if !url.starts_with("http://") && !url.starts_with("https://") {
                            fault = Some(format!(
                                "evidence '{}' url '{}' is not a valid URL",
                                evidence.kind(),
                                url
                            ));
                        }
                    }
                    Evidence::Custom {
                        type_name,
                        reference,
                        url,
                        ..
                    } => {
                        if let Some(spec) =
                            workflow.and_then(|w| w.evidence_type(type_name))
                        {
                            if let (Some(pattern), Some(reference)) =
                                (&spec.reference_pattern, reference)
                            {
                                if !matches_pattern(pattern, reference) {
                                    fault = Some(format!(
                                        "evidence '{type_name}' reference '{reference}' \
                                         does not match pattern '{pattern}'"
                                    ));
                                }
                            }
                            if fault.is_none() {
                                if let (Some(pattern), Some(url)) = (&spec.url_pattern, url)
                                {
                                    if !matches_pattern(pattern, url) {
                                        fault = Some(format!(
                                            "evidence '{type_name}' url '{url}' does not \
                                             match pattern '{pattern}'"
                                        ));
                                    }
                                }
                            }
                        }
                    }
                    _ => {}
                }
                if let Some(message) = fault {
                    issues.push(
                        Issue::new(
                            self.id(),
                            severity,
                            format!("'{}': {message}", view.display_name),
                            format!("{}.evidence[{j}]", view.path),
                        )
                        .with_ref(view.entity_ref.clone()),
                    );
                }
            }
        }
        issues
    }
}

pub struct UndefinedCustomEvidenceType;

impl Rule for UndefinedCustomEvidenceType {
    fn id(&self) -> &'static str {
        "L007"
    }
    fn name(&self) -> &'static str {
        "undefined-custom-evidence-type"
    }
    fn description(&self) -> &'static str {
        "Custom evidence types must be declared by the governing workflow"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            let workflow = library.resolve_workflow(view.workflow);
            for (j, evidence) in view.evidence.iter().enumerate() {
                let Evidence::Custom { type_name, .. } = evidence else {
                    continue;
                };
                if workflow.is_some_and(|w| w.evidence_type(type_name).is_some()) {
                    continue;
                }
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' has custom evidence '{}', not declared by any workflow",
                            view.display_name, type_name
                        ),
                        format!("{}.evidence[{j}]", view.path),
                    )
                    .with_ref(view.entity_ref.clone()),
                );
            }
        }
        issues
    }
}

pub struct EvidenceMissingRequiredField;

impl EvidenceMissingRequiredField {
    fn has_field(evidence: &Evidence, field: &str) -> bool {
        let Evidence::Custom {
            reference,
            url,
            path,
            description,
            date,
            author,
            ..
        } = evidence
        else {
            return true;
        };
        match field {
            "reference" => reference.is_some(),
            "url" => url.is_some(),
            "path" => path.is_some(),
            "description" => description.is_some(),
            "date" => date.is_some(),
            "author" => author.is_some(),
            _ => true,
        }
    }
}

impl Rule for EvidenceMissingRequiredField {
    fn id(&self) -> &'static str {
        "L008"
    }
    fn name(&self) -> &'static str {
        "evidence-missing-required-field"
    }
    fn description(&self) -> &'static str {
        "Custom evidence carries the fields its declaration requires"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            let workflow = library.resolve_workflow(view.workflow);
            for (j, evidence) in view.evidence.iter().enumerate() {
                let Evidence::Custom { type_name, .. } = evidence else {
                    continue;
                };
                let Some(spec) = workflow.and_then(|w| w.evidence_type(type_name)) else {
                    continue;
                };
                let missing: Vec<&str> = spec
                    .required_fields
                    .iter()
                    .map(|f| f.as_str())
                    .filter(|f| !Self::has_field(evidence, f))
                    .collect();
                if missing.is_empty() {
                    continue;
                }
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' evidence '{}' is missing required field(s): {}",
                            view.display_name,
                            type_name,
                            missing.join(", ")
                        ),
                        format!("{}.evidence[{j}]", view.path),
                    )
                    .with_ref(view.entity_ref.clone()),
                );
            }
        }
        issues
    }
}

pub struct InvalidTestPathPattern;

impl InvalidTestPathPattern {
    fn looks_like_test_path(path: &str) -> bool {
        matches_pattern(r"(^|/)tests?/", path)
            || matches_pattern(r"(^|/)test_[^/]+$", path)
            || matches_pattern(r"_test\.[a-z]+$", path)
    }
}

impl Rule for InvalidTestPathPattern {
    fn id(&self) -> &'static str {
        "L009"
    }
    fn name(&self) -> &'static str {
        "invalid-test-path-pattern"
    }
    fn description(&self) -> &'static str {
        "Test evidence paths follow the conventional test layout"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Lifecycle
    }
    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if !lifecycle_enabled(library) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for view in entity_views(library) {
            for (j, evidence) in view.evidence.iter().enumerate() {
                let Evidence::Tests { path, .. } = evidence else {
                    continue;
                };
                if Self::looks_like_test_path(path) {
                    continue;
                }
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' test evidence path '{}' does not look like a test path",
                            view.display_name, path
                        ),
                        format!("{}.evidence[{j}]", view.path),
                    )
                    .with_ref(view.entity_ref.clone()),
                );
            }
        }
        issues
    }
}
