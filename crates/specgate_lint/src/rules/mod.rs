//! Built-in rules, grouped by category.

use specgate_model::{
    CrossRef, Evidence, FeatureStatus, Library, Maturity, Requirement,
};

use crate::rule::Rule;

pub mod completeness;
pub mod consistency;
pub mod extensions;
pub mod lifecycle;
pub mod maturity;
pub mod naming;
pub mod structural;
pub mod version;
pub mod versions;

/// All built-in rules, in registration (execution) order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(structural::MissingTypeDescription),
        Box::new(structural::MissingMethodDescription),
        Box::new(structural::MissingFunctionDescription),
        Box::new(structural::EmptyType),
        Box::new(naming::FeatureIdFormat),
        Box::new(naming::PrincipleIdFormat),
        Box::new(naming::TypeNamePascal),
        Box::new(naming::FunctionNameSnake),
        Box::new(naming::CategoryScreamingSnake),
        Box::new(completeness::FeatureNoSteps),
        Box::new(completeness::MethodNoSignature),
        Box::new(completeness::TypeNoModule),
        Box::new(completeness::EnumNoValues),
        Box::new(completeness::ProtocolNoMethods),
        Box::new(completeness::FeatureNoReferences),
        Box::new(consistency::DanglingReference),
        Box::new(consistency::DuplicateTypeName),
        Box::new(consistency::DuplicateFeatureId),
        Box::new(consistency::InvalidStatusTransition),
        Box::new(maturity::MaturityStatusMismatch),
        Box::new(maturity::UnsatisfiedRequirement),
        Box::new(maturity::CircularRequirement),
        Box::new(extensions::LifecycleTestingMismatch),
        Box::new(extensions::PlannedWithImplementationEvidence),
        Box::new(lifecycle::InvalidLifecycleState),
        Box::new(lifecycle::MissingRequiredEvidence),
        Box::new(lifecycle::DanglingWorkflowReference),
        Box::new(lifecycle::LifecycleFeatureStatusMismatch),
        Box::new(lifecycle::InvalidWorkflowDefinition),
        Box::new(lifecycle::InvalidEvidenceReference),
        Box::new(lifecycle::UndefinedCustomEvidenceType),
        Box::new(lifecycle::EvidenceMissingRequiredField),
        Box::new(lifecycle::InvalidTestPathPattern),
        Box::new(version::PythonAddedCompat),
        Box::new(version::SignatureVersionFeatures),
        Box::new(version::MissingPythonRequires),
        Box::new(version::GenericParamVersion),
        Box::new(version::ExceptionGroupVersion),
    ]
}

/// True for an absent or whitespace-only optional string.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Regex match with static patterns; an invalid pattern never matches.
pub(crate) fn matches_pattern(pattern: &str, value: &str) -> bool {
    regex::Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// A uniform view over the entities lifecycle and extension rules walk,
/// keeping the document path and canonical pointer together.
pub(crate) struct EntityView<'a> {
    pub path: String,
    pub entity_ref: CrossRef,
    pub display_name: String,
    pub maturity: Option<Maturity>,
    pub lifecycle_state: Option<&'a str>,
    pub workflow: Option<&'a str>,
    pub evidence: &'a [Evidence],
    pub requires: &'a [Requirement],
    pub test_coverage: Option<&'a str>,
    pub feature_status: Option<FeatureStatus>,
}

/// All entities that can carry lifecycle fields, in document order:
/// types with their nested methods, then functions, then features.
pub(crate) fn entity_views(library: &Library) -> Vec<EntityView<'_>> {
    let mut views = Vec::new();

    for (i, t) in library.types.iter().enumerate() {
        views.push(EntityView {
            path: format!("$.library.types[{i}]"),
            entity_ref: CrossRef::type_ref(&t.name),
            display_name: t.name.clone(),
            maturity: t.maturity,
            lifecycle_state: t.lifecycle_state.as_deref(),
            workflow: t.workflow.as_deref(),
            evidence: &t.evidence,
            requires: &t.requires,
            test_coverage: t.test_coverage.as_deref(),
            feature_status: None,
        });
        for (collection, j, m) in t.all_methods() {
            views.push(EntityView {
                path: format!("$.library.types[{i}].{collection}[{j}]"),
                entity_ref: CrossRef::method_ref(&t.name, &m.name),
                display_name: format!("{}.{}", t.name, m.name),
                maturity: m.maturity,
                lifecycle_state: m.lifecycle_state.as_deref(),
                workflow: m.workflow.as_deref(),
                evidence: &m.evidence,
                requires: &m.requires,
                test_coverage: None,
                feature_status: None,
            });
        }
    }
    for (i, f) in library.functions.iter().enumerate() {
        views.push(EntityView {
            path: format!("$.library.functions[{i}]"),
            entity_ref: CrossRef::function_ref(&f.name),
            display_name: f.name.clone(),
            maturity: f.maturity,
            lifecycle_state: f.lifecycle_state.as_deref(),
            workflow: f.workflow.as_deref(),
            evidence: &f.evidence,
            requires: &f.requires,
            test_coverage: None,
            feature_status: None,
        });
    }
    for (i, f) in library.features.iter().enumerate() {
        views.push(EntityView {
            path: format!("$.library.features[{i}]"),
            entity_ref: CrossRef::feature_ref(&f.id),
            display_name: f.id.clone(),
            maturity: f.maturity,
            lifecycle_state: f.lifecycle_state.as_deref(),
            workflow: f.workflow.as_deref(),
            evidence: &f.evidence,
            requires: &f.requires,
            test_coverage: f.test_coverage.as_deref(),
            feature_status: Some(f.status),
        });
    }

    views
}
