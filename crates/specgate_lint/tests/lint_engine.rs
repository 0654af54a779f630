//! End-to-end engine tests over complete documents.

use specgate_lifecycle::LifecycleReport;
use specgate_lint::{LintConfig, LintRunner, RequirementGraph, Severity};
use specgate_model::{DocumentLoader, Library};

fn load(json: &str) -> Library {
    DocumentLoader::from_json(json).unwrap().library
}

fn runner() -> LintRunner {
    LintRunner::new(LintConfig::default())
}

#[test]
fn unsatisfied_maturity_requirement_is_reported() {
    let lib = load(
        r##"{"library": {
            "name": "demo",
            "types": [
                {"name": "A", "module": "m", "docstring": "d", "maturity": "implemented",
                 "properties": [{"name": "p"}]},
                {"name": "B", "module": "m", "docstring": "d", "maturity": "idea",
                 "properties": [{"name": "p"}],
                 "requires": [{"ref": "#/types/A", "min_maturity": "tested"}]}
            ]
        }}"##,
    );

    let issues = runner().run(&lib, Some(&["M002"]), None);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert!(issues[0]
        .message
        .contains("requires '#/types/A' at 'tested' (currently: 'implemented')"));
}

#[test]
fn requirement_cycle_is_reported_once() {
    let lib = load(
        r##"{"library": {
            "name": "demo",
            "types": [
                {"name": "A", "requires": [{"ref": "#/types/B"}]},
                {"name": "B", "requires": [{"ref": "#/types/A"}]}
            ]
        }}"##,
    );

    let cycle = RequirementGraph::build(&lib).find_cycle().unwrap();
    assert_eq!(cycle, vec!["#/types/A", "#/types/B", "#/types/A"]);

    let issues = runner().run(&lib, Some(&["M003"]), None);
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "Circular requirement dependency: #/types/A -> #/types/B -> #/types/A"
    );
}

#[test]
fn gate_evidence_controls_readiness() {
    let gated = r#"{"library": {
        "name": "demo",
        "default_workflow": "standard",
        "workflows": [{
            "name": "standard",
            "maturity_gates": [
                {"from_maturity": "implemented", "to_maturity": "tested",
                 "gates": [{"type": "tests_passing", "required": true}]}
            ]
        }],
        "types": [{"name": "X", "maturity": "implemented"EVIDENCE}]
    }}"#;

    let with_evidence = load(&gated.replace(
        "EVIDENCE",
        r#", "evidence": [{"type": "tests", "path": "tests/test_x.py"}]"#,
    ));
    let report = LifecycleReport::assess(&with_evidence).unwrap();
    assert!(report.entities[0].ready);

    let without_evidence = load(&gated.replace("EVIDENCE", ""));
    let report = LifecycleReport::assess(&without_evidence).unwrap();
    assert!(!report.entities[0].ready);
    assert_eq!(
        report.entities[0].blocked_reasons,
        vec!["gate: tests_passing not satisfied"]
    );
}

#[test]
fn duplicate_feature_cites_first_declaration() {
    let lib = load(
        r#"{"library": {
            "name": "demo",
            "features": [
                {"id": "dup"}, {"id": "a"}, {"id": "b"}, {"id": "dup"}
            ]
        }}"#,
    );

    let issues = runner().run(&lib, Some(&["X003"]), None);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "$.library.features[3]");
    assert!(issues[0].message.contains("first declared at index 0"));
}

#[test]
fn runs_are_idempotent() {
    let lib = load(
        r#"{"library": {
            "name": "demo",
            "extensions": ["lifecycle"],
            "types": [{"name": "badName"}],
            "features": [{"id": "NotKebab", "status": "tested"}]
        }}"#,
    );

    let r = runner();
    let first = r.run(&lib, None, None);
    let second = r.run(&lib, None, None);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn severity_filter_yields_subsets() {
    let lib = load(
        r#"{"library": {
            "name": "demo",
            "types": [{"name": "A"}],
            "features": [{"id": "f", "status": "tested"}]
        }}"#,
    );

    let r = runner();
    let all = r.run(&lib, None, None);
    let warnings = r.run(&lib, None, Some(Severity::Warning));
    let errors = r.run(&lib, None, Some(Severity::Error));

    assert!(warnings.len() < all.len());
    assert!(errors.len() < warnings.len() || warnings.is_empty());
    for issue in &warnings {
        assert!(all.contains(issue));
        assert!(issue.severity <= Severity::Warning);
    }
    for issue in &errors {
        assert!(warnings.contains(issue));
        assert_eq!(issue.severity, Severity::Error);
    }
}

#[test]
fn clean_document_produces_no_errors() {
    let lib = load(
        r##"{"library": {
            "name": "demo",
            "python_requires": ">=3.10",
            "types": [{
                "name": "Parser", "module": "demo.parse", "docstring": "Parses input.",
                "methods": [{"name": "parse",
                             "signature": "def parse(self, text: str) -> Node",
                             "description": "Parse one document."}]
            }],
            "functions": [{"name": "tokenize",
                           "signature": "def tokenize(text: str) -> list",
                           "description": "Split into tokens."}],
            "features": [{"id": "basic-parsing", "status": "tested",
                          "steps": ["parse a document"],
                          "references": ["#/types/Parser"]}]
        }}"##,
    );

    let issues = runner().run(&lib, None, Some(Severity::Error));
    assert!(issues.is_empty(), "unexpected errors: {issues:?}");
}

#[test]
fn yaml_documents_lint_identically() {
    let json = load(r#"{"library": {"name": "demo", "types": [{"name": "A"}]}}"#);
    let yaml = DocumentLoader::from_yaml("library:\n  name: demo\n  types:\n    - name: A\n")
        .unwrap()
        .library;

    let r = runner();
    assert_eq!(r.run(&json, None, None), r.run(&yaml, None, None));
}
