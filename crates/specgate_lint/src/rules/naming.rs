//! Naming rules: identifier casing conventions.

use specgate_model::{CrossRef, Library};

use crate::config::LintConfig;
use crate::issue::{Issue, Severity};
use crate::rule::{Rule, RuleCategory};
use crate::rules::matches_pattern;

pub(crate) fn is_kebab_case(s: &str) -> bool {
    matches_pattern(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$", s)
}

pub(crate) fn is_pascal_case(s: &str) -> bool {
    matches_pattern(r"^[A-Z][A-Za-z0-9]*$", s)
}

pub(crate) fn is_snake_case(s: &str) -> bool {
    matches_pattern(r"^[a-z_][a-z0-9_]*$", s)
}

pub(crate) fn is_screaming_snake_case(s: &str) -> bool {
    matches_pattern(r"^[A-Z][A-Z0-9_]*$", s)
}

/// Best-effort kebab-case rendering of an identifier.
pub(crate) fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '_' || c == ' ' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if c.is_ascii_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out.trim_matches('-').to_string()
}

pub struct FeatureIdFormat;

impl Rule for FeatureIdFormat {
    fn id(&self) -> &'static str {
        "N001"
    }
    fn name(&self) -> &'static str {
        "feature-id-format"
    }
    fn description(&self) -> &'static str {
        "Feature ids use kebab-case"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
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
            .filter(|(_, f)| !is_kebab_case(&f.id))
            .map(|(i, f)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Feature id '{}' is not kebab-case", f.id),
                    format!("$.library.features[{i}].id"),
                )
                .with_ref(CrossRef::feature_ref(&f.id))
                .with_fix(to_kebab_case(&f.id))
            })
            .collect()
    }

    fn fix(&self, library: &Library, issue: &Issue) -> Option<Library> {
        let suggested = issue.suggested_fix.as_deref()?;
        let current = issue
            .entity_ref
            .as_ref()?
            .as_str()
            .strip_prefix("#/features/")?
            .to_string();

        let mut fixed = library.clone();
        let feature = fixed.features.iter_mut().find(|f| f.id == current)?;
        feature.id = suggested.to_string();
        Some(fixed)
    }
}

pub struct PrincipleIdFormat;

impl Rule for PrincipleIdFormat {
    fn id(&self) -> &'static str {
        "N002"
    }
    fn name(&self) -> &'static str {
        "principle-id-format"
    }
    fn description(&self) -> &'static str {
        "Principle ids use kebab-case"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .principles
            .iter()
            .enumerate()
            .filter(|(_, p)| !is_kebab_case(&p.id))
            .map(|(i, p)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Principle id '{}' is not kebab-case", p.id),
                    format!("$.library.principles[{i}].id"),
                )
                .with_ref(CrossRef::principle_ref(&p.id))
                .with_fix(to_kebab_case(&p.id))
            })
            .collect()
    }

    fn fix(&self, library: &Library, issue: &Issue) -> Option<Library> {
        let suggested = issue.suggested_fix.as_deref()?;
        let current = issue
            .entity_ref
            .as_ref()?
            .as_str()
            .strip_prefix("#/principles/")?
            .to_string();

        let mut fixed = library.clone();
        let principle = fixed.principles.iter_mut().find(|p| p.id == current)?;
        principle.id = suggested.to_string();
        Some(fixed)
    }
}

pub struct TypeNamePascal;

impl Rule for TypeNamePascal {
    fn id(&self) -> &'static str {
        "N003"
    }
    fn name(&self) -> &'static str {
        "type-name-pascal"
    }
    fn description(&self) -> &'static str {
        "Type names use PascalCase"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .types
            .iter()
            .enumerate()
            .filter(|(_, t)| !is_pascal_case(&t.name))
            .map(|(i, t)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Type name '{}' is not PascalCase", t.name),
                    format!("$.library.types[{i}].name"),
                )
                .with_ref(CrossRef::type_ref(&t.name))
            })
            .collect()
    }
}

pub struct FunctionNameSnake;

impl Rule for FunctionNameSnake {
    fn id(&self) -> &'static str {
        "N004"
    }
    fn name(&self) -> &'static str {
        "function-name-snake"
    }
    fn description(&self) -> &'static str {
        "Function names use snake_case"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, library: &Library, config: &LintConfig) -> Vec<Issue> {
        let severity = config.severity_for(self.id(), self.default_severity());
        library
            .functions
            .iter()
            .enumerate()
            .filter(|(_, f)| {
                let dunder = f.name.starts_with("__") && f.name.ends_with("__");
                !dunder && !is_snake_case(&f.name)
            })
            .map(|(i, f)| {
                Issue::new(
                    self.id(),
                    severity,
                    format!("Function name '{}' is not snake_case", f.name),
                    format!("$.library.functions[{i}].name"),
                )
                .with_ref(CrossRef::function_ref(&f.name))
            })
            .collect()
    }
}

pub struct CategoryScreamingSnake;

impl Rule for CategoryScreamingSnake {
    fn id(&self) -> &'static str {
        "N006"
    }
    fn name(&self) -> &'static str {
        "category-screaming-snake"
    }
    fn description(&self) -> &'static str {
        "Feature categories use SCREAMING_SNAKE_CASE"
    }
    fn category(&self) -> RuleCategory {
        RuleCategory::Naming
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
                let category = f.category.as_deref()?;
                if is_screaming_snake_case(category) {
                    return None;
                }
                Some(
                    Issue::new(
                        self.id(),
                        severity,
                        format!(
                            "Feature '{}' category '{}' is not SCREAMING_SNAKE_CASE",
                            f.id, category
                        ),
                        format!("$.library.features[{i}].category"),
                    )
                    .with_ref(CrossRef::feature_ref(&f.id)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(json: &str) -> Library {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("UserAuth"), "user-auth");
        assert_eq!(to_kebab_case("user_auth"), "user-auth");
        assert_eq!(to_kebab_case("User Auth Flow"), "user-auth-flow");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_n001_suggests_fix() {
        let lib = library(r#"{"name": "demo", "features": [{"id": "UserAuth"}]}"#);
        let issues = FeatureIdFormat.check(&lib, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].fix_available);
        assert_eq!(issues[0].suggested_fix.as_deref(), Some("user-auth"));

        let fixed = FeatureIdFormat.fix(&lib, &issues[0]).unwrap();
        assert_eq!(fixed.features[0].id, "user-auth");
    }

    #[test]
    fn test_n004_exempts_dunder_names() {
        let lib = library(
            r#"{"name": "demo", "functions": [
                {"name": "__init__"}, {"name": "parseAll"}
            ]}"#,
        );
        let issues = FunctionNameSnake.check(&lib, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("parseAll"));
    }

    #[test]
    fn test_n006_checks_only_declared_categories() {
        let lib = library(
            r#"{"name": "demo", "features": [
                {"id": "a", "category": "AUTH_FLOWS"},
                {"id": "b", "category": "authFlows"},
                {"id": "c"}
            ]}"#,
        );
        let issues = CategoryScreamingSnake.check(&lib, &LintConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$.library.features[1].category");
    }
}
