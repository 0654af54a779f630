//! Workflow definitions: states, transitions, and maturity gates.
//!
//! A workflow can describe its state space two ways. Legacy workflows
//! declare free-form `states` with explicit `transitions`. Maturity
//! workflows leave `states` empty and attach `maturity_gates` to pairs
//! of the fixed eight-stage maturity order. The two modes coexist on
//! one definition.

use serde::{Deserialize, Serialize};

use crate::maturity::Maturity;

fn default_true() -> bool {
    true
}

/// A named, optionally-required precondition for a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Gate type, e.g. `pr_merged` or `tests_passing`.
    #[serde(rename = "type")]
    pub gate_type: String,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A free-form lifecycle state (legacy mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub terminal: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_evidence: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// A legacy state transition with optional gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from_state: String,
    pub to_state: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gates: Vec<GateSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Gates bound to a maturity-stage transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityGate {
    pub from_maturity: Maturity,
    pub to_maturity: Maturity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gates: Vec<GateSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A custom evidence type declared by a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceTypeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subset of {reference, url, path, author, date}.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_pattern: Option<String>,
}

/// A named workflow definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<StateSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maturity_gates: Vec<MaturityGate>,
    #[serde(default)]
    pub allow_skip: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_types: Vec<EvidenceTypeSpec>,
}

impl Workflow {
    /// Names of all declared legacy states.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|s| s.name.as_str())
    }

    /// Find the declared state with the given name.
    pub fn state(&self, name: &str) -> Option<&StateSpec> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Find the gate bundle for an exact maturity pair, if declared.
    pub fn maturity_gate(&self, from: Maturity, to: Maturity) -> Option<&MaturityGate> {
        self.maturity_gates
            .iter()
            .find(|g| g.from_maturity == from && g.to_maturity == to)
    }

    /// Find a declared custom evidence type by name.
    pub fn evidence_type(&self, name: &str) -> Option<&EvidenceTypeSpec> {
        self.evidence_types.iter().find(|e| e.name == name)
    }

    /// Valid `to_state` names from a legacy state.
    pub fn next_states(&self, from: &str) -> Vec<&str> {
        self.transitions
            .iter()
            .filter(|t| t.from_state == from)
            .map(|t| t.to_state.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_required_defaults_true() {
        let gate: GateSpec = serde_json::from_str(r#"{"type": "tests_passing"}"#).unwrap();
        assert!(gate.required);
    }

    #[test]
    fn test_maturity_gate_lookup() {
        let wf: Workflow = serde_json::from_str(
            r#"{
                "name": "standard",
                "maturity_gates": [
                    {"from_maturity": "implemented", "to_maturity": "tested",
                     "gates": [{"type": "tests_passing"}]}
                ]
            }"#,
        )
        .unwrap();

        assert!(wf.maturity_gate(Maturity::Implemented, Maturity::Tested).is_some());
        assert!(wf.maturity_gate(Maturity::Tested, Maturity::Documented).is_none());
    }
}
