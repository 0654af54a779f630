//! Structural validation of legacy workflow definitions.

use std::collections::BTreeSet;

use serde::Serialize;

use specgate_model::Workflow;

/// A structural finding on a workflow definition.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowDiagnostic {
    pub message: String,
    /// Warnings do not make the workflow invalid.
    pub warning: bool,
}

impl WorkflowDiagnostic {
    fn fault(message: String) -> Self {
        Self {
            message,
            warning: false,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            message,
            warning: true,
        }
    }
}

/// Validate a workflow's legacy state graph.
///
/// Faults: an `initial_state` or transition endpoint that is not a
/// declared state. Warning: an initial state from which no terminal
/// state is reachable. Workflows with no declared states (maturity-mode
/// only) produce no diagnostics.
pub fn workflow_diagnostics(workflow: &Workflow) -> Vec<WorkflowDiagnostic> {
    let mut diagnostics = Vec::new();
    if workflow.states.is_empty() {
        return diagnostics;
    }

    let declared: BTreeSet<&str> = workflow.state_names().collect();

    if let Some(initial) = &workflow.initial_state {
        if !declared.contains(initial.as_str()) {
            diagnostics.push(WorkflowDiagnostic::fault(format!(
                "workflow '{}': initial_state '{}' is not a declared state",
                workflow.name, initial
            )));
        }
    }

    for transition in &workflow.transitions {
        if !declared.contains(transition.from_state.as_str()) {
            diagnostics.push(WorkflowDiagnostic::fault(format!(
                "workflow '{}': transition from undeclared state '{}'",
                workflow.name, transition.from_state
            )));
        }
        if !declared.contains(transition.to_state.as_str()) {
            diagnostics.push(WorkflowDiagnostic::fault(format!(
                "workflow '{}': transition to undeclared state '{}'",
                workflow.name, transition.to_state
            )));
        }
    }

    if let Some(initial) = &workflow.initial_state {
        let has_terminal = workflow.states.iter().any(|s| s.terminal);
        if declared.contains(initial.as_str())
            && has_terminal
            && !can_reach_terminal(workflow, initial, &mut Vec::new())
        {
            diagnostics.push(WorkflowDiagnostic::warning(format!(
                "workflow '{}': no terminal state is reachable from initial state '{}'",
                workflow.name, initial
            )));
        }
    }

    diagnostics
}

/// DFS with a per-path visited list, so a state revisited on a sibling
/// branch is still explored.
fn can_reach_terminal(workflow: &Workflow, state: &str, path: &mut Vec<String>) -> bool {
    if workflow.state(state).is_some_and(|s| s.terminal) {
        return true;
    }
    if path.iter().any(|p| p == state) {
        return false;
    }

    path.push(state.to_string());
    let reachable = workflow
        .next_states(state)
        .into_iter()
        .any(|next| can_reach_terminal(workflow, next, &mut path.clone()));
    path.pop();
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow(json: &str) -> Workflow {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_undeclared_states_are_faults() {
        let wf = workflow(
            r#"{
                "name": "review",
                "states": [{"name": "draft"}, {"name": "done", "terminal": true}],
                "initial_state": "missing",
                "transitions": [{"from_state": "draft", "to_state": "approved"}]
            }"#,
        );

        let diagnostics = workflow_diagnostics(&wf);
        let faults: Vec<_> = diagnostics.iter().filter(|d| !d.warning).collect();
        assert_eq!(faults.len(), 2);
        assert!(faults[0].message.contains("initial_state 'missing'"));
        assert!(faults[1].message.contains("undeclared state 'approved'"));
    }

    #[test]
    fn test_unreachable_terminal_is_a_warning() {
        let wf = workflow(
            r#"{
                "name": "review",
                "states": [
                    {"name": "draft"}, {"name": "stuck"},
                    {"name": "done", "terminal": true}
                ],
                "initial_state": "draft",
                "transitions": [
                    {"from_state": "draft", "to_state": "stuck"},
                    {"from_state": "stuck", "to_state": "draft"}
                ]
            }"#,
        );

        let diagnostics = workflow_diagnostics(&wf);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].warning);
    }

    #[test]
    fn test_sibling_branches_do_not_false_positive() {
        // draft -> a -> b (dead end), draft -> b -> done: b is revisited
        // on a different path and must still be explored there.
        let wf = workflow(
            r#"{
                "name": "review",
                "states": [
                    {"name": "draft"}, {"name": "a"}, {"name": "b"},
                    {"name": "done", "terminal": true}
                ],
                "initial_state": "draft",
                "transitions": [
                    {"from_state": "draft", "to_state": "a"},
                    {"from_state": "a", "to_state": "b"},
                    {"from_state": "b", "to_state": "done"}
                ]
            }"#,
        );

        assert!(workflow_diagnostics(&wf).is_empty());
    }

    #[test]
    fn test_maturity_mode_workflow_is_silent() {
        let wf = workflow(r#"{"name": "standard", "maturity_gates": []}"#);
        assert!(workflow_diagnostics(&wf).is_empty());
    }
}
