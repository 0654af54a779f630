//! Version rules: Python version compatibility of declared constructs.

use specgate_model::{CrossRef, GenericParam, GenericParamKind, Library, RaisesClause};

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::versions::{detect_type_features, parse_requires, parse_version, PyVersion};

fn format_version((major, minor): PyVersion) -> String {
    format!("{major}.{minor}")
}

/// Signatures in the document with their location and owner.
fn signatures(library: &Library) -> Vec<(String, CrossRef, String, &str)> {
    let mut out = Vec::new();
    for (i, t) in library.types.iter().enumerate() {
        for (collection, j, m) in t.all_methods() {
            if let Some(sig) = m.signature.as_deref() {
                out.push((
                    format!("$.library.types[{i}].{collection}[{j}].signature"),
                    CrossRef::method_ref(&t.name, &m.name),
                    format!("{}.{}", t.name, m.name),
                    sig,
                ));
            }
        }
    }
    for (i, f) in library.functions.iter().enumerate() {
        if let Some(sig) = f.signature.as_deref() {
            out.push((
                format!("$.library.functions[{i}].signature"),
                CrossRef::function_ref(&f.name),
                f.name.clone(),
                sig,
            ));
        }
    }
    out
}

pub struct PythonAddedCompat;

impl Rule for PythonAddedCompat {
    fn id(&self) -> &'static str {
        "V001"
    }
    fn name(&self) -> &'static str {
        "python-added-compat"
    }
    fn description(&self) -> &'static str {
        "python_added annotations below the python_requires floor are redundant"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Version
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let Some(floor) = library.python_requires.as_deref().and_then(parse_requires)
        else {
            return Vec::new();
        };
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        let mut check = |added: Option<&str>, path: String, entity_ref: CrossRef, name: &str| {
            let Some(added) = added.and_then(parse_version) else {
                return;
            };
            if added >= floor {
                return;
            }
            issues.push(
                Issue::new(
                    self.id(),
                    severity,
                    format!(
                        "'{}' declares python_added '{}', below the python_requires \
                         floor '{}'",
                        name,
                        format_version(added),
                        format_version(floor)
                    ),
                    path,
                )
                .with_ref(entity_ref),
            );
        };

        for (i, t) in library.types.iter().enumerate() {
            check(
                t.python_added.as_deref(),
                format!("$.library.types[{i}].python_added"),
                CrossRef::type_ref(&t.name),
                &t.name,
            );
            for (collection, j, m) in t.all_methods() {
                check(
                    m.python_added.as_deref(),
                    format!("$.library.types[{i}].{collection}[{j}].python_added"),
                    CrossRef::method_ref(&t.name, &m.name),
                    &format!("{}.{}", t.name, m.name),
                );
            }
        }
        for (i, f) in library.functions.iter().enumerate() {
            check(
                f.python_added.as_deref(),
                format!("$.library.functions[{i}].python_added"),
                CrossRef::function_ref(&f.name),
                &f.name,
            );
        }
        issues
    }
}

pub struct SignatureVersionFeatures;

impl Rule for SignatureVersionFeatures {
    fn id(&self) -> &'static str {
        "V002"
    }
    fn name(&self) -> &'static str {
        "signature-version-features"
    }
    fn description(&self) -> &'static str {
        "Signatures must not use typing features newer than python_requires"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Version
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let Some(floor) = library.python_requires.as_deref().and_then(parse_requires)
        else {
            return Vec::new();
        };
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for (path, entity_ref, name, signature) in signatures(library) {
            for (feature, needed) in detect_type_features(signature) {
                if needed <= floor {
                    continue;
                }
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' uses {} (Python {}) but python_requires is '>={}'",
                            name,
                            feature,
                            format_version(needed),
                            format_version(floor)
                        ),
                        path.clone(),
                    )
                    .with_ref(entity_ref.clone()),
                );
            }
        }
        issues
    }
}

pub struct MissingPythonRequires;

impl Rule for MissingPythonRequires {
    fn id(&self) -> &'static str {
        "V003"
    }
    fn name(&self) -> &'static str {
        "missing-python-requires"
    }
    fn description(&self) -> &'static str {
        "Libraries using versioned typing features declare python_requires"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Version
    }
    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        if library.python_requires.is_some() {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());

        let notable = signatures(library)
            .iter()
            .flat_map(|(_, _, _, sig)| detect_type_features(sig))
            .any(|(_, version)| version >= (3, 9));
        if !notable {
            return Vec::new();
        }
        vec![Issue::new(
            self.id(),
            severity,
            "Signatures use versioned typing features but the library declares no \
             python_requires",
            "$.library",
        )]
    }
}

pub struct GenericParamVersion;

impl GenericParamVersion {
    fn needed_version(param: &GenericParam) -> PyVersion {
        if let Some(added) = param.python_added.as_deref().and_then(parse_version) {
            return added;
        }
        // PEP 696 defaults postdate every param kind
        if param.default.is_some() {
            return (3, 13);
        }
        match param.kind {
            GenericParamKind::TypeVar => (3, 5),
            GenericParamKind::ParamSpec => (3, 10),
            GenericParamKind::TypeVarTuple => (3, 11),
        }
    }
}

impl Rule for GenericParamVersion {
    fn id(&self) -> &'static str {
        "V004"
    }
    fn name(&self) -> &'static str {
        "generic-param-version"
    }
    fn description(&self) -> &'static str {
        "Generic parameter kinds must be available at python_requires"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Version
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let Some(floor) = library.python_requires.as_deref().and_then(parse_requires)
        else {
            return Vec::new();
        };
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        let mut check = |params: &[GenericParam],
                         path: &str,
                         entity_ref: &CrossRef,
                         name: &str| {
            for (k, param) in params.iter().enumerate() {
                let needed = Self::needed_version(param);
                if needed <= floor {
                    continue;
                }
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' generic parameter '{}' needs Python {} but \
                             python_requires is '>={}'",
                            name,
                            param.name,
                            format_version(needed),
                            format_version(floor)
                        ),
                        format!("{path}.generic_params[{k}]"),
                    )
                    .with_ref(entity_ref.clone()),
                );
            }
        };

        for (i, t) in library.types.iter().enumerate() {
            check(
                &t.generic_params,
                &format!("$.library.types[{i}]"),
                &CrossRef::type_ref(&t.name),
                &t.name,
            );
            for (collection, j, m) in t.all_methods() {
                check(
                    &m.generic_params,
                    &format!("$.library.types[{i}].{collection}[{j}]"),
                    &CrossRef::method_ref(&t.name, &m.name),
                    &format!("{}.{}", t.name, m.name),
                );
            }
        }
        for (i, f) in library.functions.iter().enumerate() {
            check(
                &f.generic_params,
                &format!("$.library.functions[{i}]"),
                &CrossRef::function_ref(&f.name),
                &f.name,
            );
        }
        issues
    }
}

pub struct ExceptionGroupVersion;

impl ExceptionGroupVersion {
    fn uses_exception_group(raises: &[RaisesClause]) -> bool {
        raises
            .iter()
            .any(|r| r.exception_type.contains("ExceptionGroup"))
    }
}

impl Rule for ExceptionGroupVersion {
    fn id(&self) -> &'static str {
        "V005"
    }
    fn name(&self) -> &'static str {
        "exception-group-version"
    }
    fn description(&self) -> &'static str {
        "ExceptionGroup needs Python 3.11"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Version
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let Some(floor) = library.python_requires.as_deref().and_then(parse_requires)
        else {
            return Vec::new();
        };
        if floor >= (3, 11) {
            return Vec::new();
        }
        let severity = config.severity_for(self.id(), self.default_severity());
        let mut issues = Vec::new();

        for (i, t) in library.types.iter().enumerate() {
            for (collection, j, m) in t.all_methods() {
                if Self::uses_exception_group(&m.raises) {
                    issues.push(
                        Issue::new(
                            self.id(),
                            severity,
                            format!(
                                "'{}.{}' raises an ExceptionGroup, which needs Python \
                                 3.11 (python_requires is '>={}')",
                                t.name,
                                m.name,
                                format_version(floor)
                            ),
                            format!("$.library.types[{i}].{collection}[{j}].raises"),
                        )
                        .with_ref(CrossRef::method_ref(&t.name, &m.name)),
                    );
                }
            }
        }
        for (i, f) in library.functions.iter().enumerate() {
            if Self::uses_exception_group(&f.raises) {
                issues.push(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "'{}' raises an ExceptionGroup, which needs Python 3.11 \
                             (python_requires is '>={}')",
                            f.name,
                            format_version(floor)
                        ),
                        format!("$.library.functions[{i}].raises"),
                    )
                    .with_ref(CrossRef::function_ref(&f.name)),
                );
            }
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
    fn test_v001_flags_redundant_annotation() {
        let lib = library(
            r#"{"name": "demo", "python_requires": ">=3.10",
                "types": [{"name": "A", "python_added": "3.8"},
                          {"name": "B", "python_added": "3.12"}]}"#,
        );
        let issues = PythonAddedCompat.check(&lib, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'A'"));
    }

    #[test]
    fn test_v002_flags_newer_typing_features() {
        let lib = library(
            r#"{"name": "demo", "python_requires": ">=3.9",
                "functions": [
                    {"name": "f", "signature": "def f() -> Self"},
                    {"name": "g", "signature": "def g(x: Annotated[int, 'm']) -> None"}
                ]}"#,
        );
        let issues = SignatureVersionFeatures.check(&lib, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Self (Python 3.11)"));
    }

    #[test]
    fn test_v003_only_without_requires() {
        let lib = library(
            r#"{"name": "demo",
                "functions": [{"name": "f", "signature": "def f(x: int | None)"}]}"#,
        );
        assert_eq!(MissingPythonRequires.check(&lib, &LintConfig::default()).len(), 1);

        let with = library(
            r#"{"name": "demo", "python_requires": ">=3.10",
                "functions": [{"name": "f", "signature": "def f(x: int | None)"}]}"#,
        );
        assert!(MissingPythonRequires.check(&with, &LintConfig::default()).is_empty());
    }

    #[test]
    fn test_v004_kind_table_and_defaults() {
        let lib = library(
            r#"{"name": "demo", "python_requires": ">=3.10",
                "types": [{"name": "A", "generic_params": [
                    {"name": "P", "kind": "param_spec"},
                    {"name": "Ts", "kind": "type_var_tuple"},
                    {"name": "T", "kind": "type_var", "default": "int"}
                ]}]}"#,
        );
        let issues = GenericParamVersion.check(&lib, &LintConfig::default());
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("'Ts'"));
        assert!(issues[1].message.contains("'T'"));
    }

    #[test]
    fn test_v005_exception_group_floor() {
        let lib = library(
            r#"{"name": "demo", "python_requires": ">=3.9",
                "functions": [{"name": "f",
                    "raises": [{"type": "BaseExceptionGroup"}]}]}"#,
        );
        assert_eq!(ExceptionGroupVersion.check(&lib, &LintConfig::default()).len(), 1);

        let new_enough = library(
            r#"{"name": "demo", "python_requires": ">=3.11",
                "functions": [{"name": "f",
                    "raises": [{"type": "ExceptionGroup"}]}]}"#,
        );
        assert!(ExceptionGroupVersion.check(&new_enough, &LintConfig::default()).is_empty());
    }
}
