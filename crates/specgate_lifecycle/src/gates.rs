//! Gate satisfaction against evidence.

use std::collections::BTreeSet;

use serde::Serialize;

use specgate_model::{Evidence, GateSpec};

/// Map a gate type to the evidence kind that satisfies it.
///
/// Unmapped gate types pass through unchanged, so a workflow can gate on
/// a custom evidence kind directly.
pub fn gate_evidence_kind(gate_type: &str) -> &str {
    match gate_type {
        "pr_merged" => "pr",
        "tests_passing" => "tests",
        "docs_updated" => "docs",
        other => other,
    }
}

/// The evidence kinds present on an entity.
pub fn evidence_kinds(evidence: &[Evidence]) -> BTreeSet<&str> {
    evidence.iter().map(|e| e.kind()).collect()
}

/// The evaluated status of one gate.
#[derive(Debug, Clone, Serialize)]
pub struct GateStatus {
    pub gate_type: String,
    pub required: bool,
    pub satisfied: bool,
}

/// Evaluate every gate of a transition against an entity's evidence.
///
/// An optional gate counts as satisfied even without matching evidence.
pub fn gate_statuses(evidence: &[Evidence], gates: &[GateSpec]) -> Vec<GateStatus> {
    let kinds = evidence_kinds(evidence);
    gates
        .iter()
        .map(|gate| {
            let present = kinds.contains(gate_evidence_kind(&gate.gate_type));
            GateStatus {
                gate_type: gate.gate_type.clone(),
                required: gate.required,
                satisfied: present || !gate.required,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(gate_type: &str, required: bool) -> GateSpec {
        GateSpec {
            gate_type: gate_type.to_string(),
            required,
            description: None,
        }
    }

    fn tests_evidence() -> Vec<Evidence> {
        vec![serde_json::from_str(r#"{"type": "tests", "path": "tests/test_x.py"}"#).unwrap()]
    }

    #[test]
    fn test_mapped_gate_type_matches_evidence() {
        let statuses = gate_statuses(&tests_evidence(), &[gate("tests_passing", true)]);
        assert!(statuses[0].satisfied);
    }

    #[test]
    fn test_required_gate_without_evidence_is_unsatisfied() {
        let statuses = gate_statuses(&[], &[gate("tests_passing", true)]);
        assert!(!statuses[0].satisfied);
    }

    #[test]
    fn test_optional_gate_is_always_satisfied() {
        let statuses = gate_statuses(&[], &[gate("pr_merged", false)]);
        assert!(statuses[0].satisfied);
    }

    #[test]
    fn test_custom_evidence_kind_passes_through() {
        let evidence: Vec<Evidence> = vec![serde_json::from_str(
            r#"{"type": "custom", "type_name": "security_review", "reference": "SR-1"}"#,
        )
        .unwrap()];
        let statuses = gate_statuses(&evidence, &[gate("security_review", true)]);
        assert!(statuses[0].satisfied);
    }
}
