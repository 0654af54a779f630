//! Ready/blocked assessment across a library.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use specgate_model::{Library, Maturity, Workflow};

use crate::error::{LifecycleError, LifecycleResult};
use crate::gates::gate_statuses;
use crate::requirements::requirement_satisfied;
use crate::tracked::{collect_maturities, collect_tracked, TrackedEntity};

/// One entity's assessed position in its lifecycle.
#[derive(Debug, Clone, Serialize)]
pub struct EntityStatus {
    #[serde(flatten)]
    pub entity: TrackedEntity,
    /// The stage the entity would advance to, in maturity mode.
    pub next_maturity: Option<Maturity>,
    pub ready: bool,
    pub blocked_reasons: Vec<String>,
}

/// The full lifecycle assessment of a library.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleReport {
    pub entities: Vec<EntityStatus>,
    pub by_maturity: BTreeMap<String, usize>,
    pub by_kind: BTreeMap<String, usize>,
}

impl LifecycleReport {
    /// Assess every tracked entity.
    ///
    /// Fails when an entity or the library names a workflow that is not
    /// declared; the consistency rules report the same fault as a lint
    /// issue before this point in normal operation.
    pub fn assess(library: &Library) -> LifecycleResult<Self> {
        let tracked = collect_tracked(library);
        let maturities = collect_maturities(library);
        debug!(entities = tracked.len(), "assessing lifecycle");

        let mut entities = Vec::with_capacity(tracked.len());
        let mut by_maturity: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();

        for entity in tracked {
            let workflow = resolve_workflow(library, &entity)?;

            if let Some(maturity) = entity.maturity {
                *by_maturity.entry(maturity.as_str().to_string()).or_default() += 1;
            }
            *by_kind.entry(entity.kind.as_str().to_string()).or_default() += 1;

            let mut reasons = Vec::new();
            let mut next_maturity = None;

            match (entity.maturity, entity.lifecycle_state.as_deref()) {
                (Some(maturity), _) => {
                    match maturity.next() {
                        Some(next) => {
                            next_maturity = Some(next);
                            let gates = workflow
                                .and_then(|w| w.maturity_gate(maturity, next))
                                .map(|g| g.gates.as_slice())
                                .unwrap_or_default();
                            for status in gate_statuses(&entity.evidence, gates) {
                                if !status.satisfied {
                                    reasons.push(format!(
                                        "gate: {} not satisfied",
                                        status.gate_type
                                    ));
                                }
                            }
                        }
                        None => {
                            reasons.push(format!("maturity '{maturity}' is terminal"));
                        }
                    }
                }
                (None, Some(state)) => {
                    assess_legacy_state(&entity, state, workflow, &mut reasons);
                }
                (None, None) => {}
            }

            for requirement in &entity.requires {
                let (ok, reason) = requirement_satisfied(requirement, &maturities);
                if !ok {
                    if let Some(reason) = reason {
                        reasons.push(reason);
                    }
                }
            }

            let ready = reasons.is_empty();
            entities.push(EntityStatus {
                entity,
                next_maturity,
                ready,
                blocked_reasons: reasons,
            });
        }

        Ok(Self {
            entities,
            by_maturity,
            by_kind,
        })
    }

    /// Entities cleared to advance.
    pub fn ready(&self) -> impl Iterator<Item = &EntityStatus> {
        self.entities.iter().filter(|e| e.ready)
    }

    /// Entities with at least one blocking reason.
    pub fn blocked(&self) -> impl Iterator<Item = &EntityStatus> {
        self.entities.iter().filter(|e| !e.ready)
    }
}

fn resolve_workflow<'a>(
    library: &'a Library,
    entity: &TrackedEntity,
) -> LifecycleResult<Option<&'a Workflow>> {
    let Some(name) = entity
        .workflow
        .as_deref()
        .or(library.default_workflow.as_deref())
    else {
        return Ok(None);
    };
    library
        .workflow(name)
        .map(Some)
        .ok_or_else(|| LifecycleError::UnknownWorkflow(name.to_string()))
}

/// Legacy state mode: the entity advances along declared transitions.
/// It is ready when any outgoing transition has all its required gates
/// satisfied.
fn assess_legacy_state(
    entity: &TrackedEntity,
    state: &str,
    workflow: Option<&Workflow>,
    reasons: &mut Vec<String>,
) {
    let Some(workflow) = workflow else {
        reasons.push(format!("state '{state}' is not governed by any workflow"));
        return;
    };

    if workflow.state(state).is_some_and(|s| s.terminal) {
        reasons.push(format!("state '{state}' is terminal"));
        return;
    }

    let outgoing: Vec<_> = workflow
        .transitions
        .iter()
        .filter(|t| t.from_state == state)
        .collect();
    if outgoing.is_empty() {
        reasons.push(format!("state '{state}' has no outgoing transitions"));
        return;
    }

    let mut failing = Vec::new();
    for transition in &outgoing {
        let statuses = gate_statuses(&entity.evidence, &transition.gates);
        if statuses.iter().all(|s| s.satisfied) {
            return; // at least one transition is open
        }
        for status in statuses.into_iter().filter(|s| !s.satisfied) {
            let reason = format!("gate: {} not satisfied", status.gate_type);
            if !failing.contains(&reason) {
                failing.push(reason);
            }
        }
    }
    reasons.extend(failing);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(json: &str) -> Library {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_gated_transition_with_evidence_is_ready() {
        let lib = library(
            r#"{
                "name": "demo",
                "default_workflow": "standard",
                "workflows": [{
                    "name": "standard",
                    "maturity_gates": [
                        {"from_maturity": "implemented", "to_maturity": "tested",
                         "gates": [{"type": "tests_passing"}]}
                    ]
                }],
                "types": [{
                    "name": "Parser", "maturity": "implemented",
                    "evidence": [{"type": "tests", "path": "tests/test_parser.py"}]
                }]
            }"#,
        );

        let report = LifecycleReport::assess(&lib).unwrap();
        assert!(report.entities[0].ready);
        assert_eq!(report.entities[0].next_maturity, Some(Maturity::Tested));
    }

    #[test]
    fn test_missing_gate_evidence_blocks_with_reason() {
        let lib = library(
            r#"{
                "name": "demo",
                "default_workflow": "standard",
                "workflows": [{
                    "name": "standard",
                    "maturity_gates": [
                        {"from_maturity": "implemented", "to_maturity": "tested",
                         "gates": [{"type": "tests_passing"}]}
                    ]
                }],
                "types": [{"name": "Parser", "maturity": "implemented"}]
            }"#,
        );

        let report = LifecycleReport::assess(&lib).unwrap();
        let status = &report.entities[0];
        assert!(!status.ready);
        assert_eq!(status.blocked_reasons, vec!["gate: tests_passing not satisfied"]);
    }

    #[test]
    fn test_unsatisfied_requirement_blocks() {
        let lib = library(
            r##"{
                "name": "demo",
                "types": [
                    {"name": "A", "maturity": "implemented"},
                    {"name": "B", "maturity": "idea",
                     "requires": [{"ref": "#/types/A", "min_maturity": "tested"}]}
                ]
            }"##,
        );

        let report = LifecycleReport::assess(&lib).unwrap();
        let b = &report.entities[1];
        assert!(!b.ready);
        assert_eq!(
            b.blocked_reasons,
            vec!["requires '#/types/A' at 'tested' (currently: 'implemented')"]
        );
    }

    #[test]
    fn test_ungated_transition_is_unconditionally_ready() {
        let lib = library(
            r#"{"name": "demo", "types": [{"name": "A", "maturity": "idea"}]}"#,
        );
        let report = LifecycleReport::assess(&lib).unwrap();
        assert!(report.entities[0].ready);
    }

    #[test]
    fn test_terminal_maturity_is_blocked() {
        let lib = library(
            r#"{"name": "demo", "types": [{"name": "Old", "maturity": "deprecated"}]}"#,
        );
        let report = LifecycleReport::assess(&lib).unwrap();
        assert!(!report.entities[0].ready);
        assert_eq!(report.entities[0].next_maturity, None);
    }

    #[test]
    fn test_unknown_workflow_is_an_error() {
        let lib = library(
            r#"{
                "name": "demo",
                "types": [{"name": "A", "maturity": "idea", "workflow": "ghost"}]
            }"#,
        );
        assert!(matches!(
            LifecycleReport::assess(&lib),
            Err(LifecycleError::UnknownWorkflow(_))
        ));
    }

    #[test]
    fn test_legacy_state_transitions() {
        let lib = library(
            r#"{
                "name": "demo",
                "default_workflow": "review",
                "workflows": [{
                    "name": "review",
                    "states": [{"name": "draft"}, {"name": "approved", "terminal": true}],
                    "initial_state": "draft",
                    "transitions": [
                        {"from_state": "draft", "to_state": "approved",
                         "gates": [{"type": "approval"}]}
                    ]
                }],
                "types": [
                    {"name": "A", "lifecycle_state": "draft"},
                    {"name": "B", "lifecycle_state": "draft",
                     "evidence": [{"type": "approval", "reference": "REV-1", "author": "sam"}]}
                ]
            }"#,
        );

        let report = LifecycleReport::assess(&lib).unwrap();
        assert!(!report.entities[0].ready);
        assert_eq!(
            report.entities[0].blocked_reasons,
            vec!["gate: approval not satisfied"]
        );
        assert!(report.entities[1].ready);
    }

    #[test]
    fn test_progress_counts() {
        let lib = library(
            r#"{
                "name": "demo",
                "types": [{"name": "A", "maturity": "idea"},
                          {"name": "B", "maturity": "idea"}],
                "features": [{"id": "f", "maturity": "tested"}]
            }"#,
        );

        let report = LifecycleReport::assess(&lib).unwrap();
        assert_eq!(report.by_maturity.get("idea"), Some(&2));
        assert_eq!(report.by_maturity.get("tested"), Some(&1));
        assert_eq!(report.by_kind.get("type"), Some(&2));
        assert_eq!(report.by_kind.get("feature"), Some(&1));
    }
}
