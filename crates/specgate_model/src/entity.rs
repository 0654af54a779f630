//! Entity definitions: types, methods, functions, features, modules,
//! and principles.

use serde::{Deserialize, Serialize};

use crate::evidence::Evidence;
use crate::maturity::Maturity;
use crate::refs::CrossRef;

/// A declared dependency on another entity's existence or maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Canonical pointer to the required entity.
    #[serde(rename = "ref")]
    pub target: CrossRef,
    /// Minimum maturity the required entity must have reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Kind of type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Dataclass,
    Protocol,
    Enum,
    TypeAlias,
    Namedtuple,
}

/// Implementation status of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    #[default]
    Planned,
    Implemented,
    Tested,
}

impl FeatureStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureStatus::Planned => "planned",
            FeatureStatus::Implemented => "implemented",
            FeatureStatus::Tested => "tested",
        }
    }
}

/// Kind of generic type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericParamKind {
    #[default]
    TypeVar,
    ParamSpec,
    TypeVarTuple,
}

/// A generic type parameter on a type or function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericParam {
    pub name: String,
    #[serde(default)]
    pub kind: GenericParamKind,
    /// Default value (PEP 696).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_added: Option<String>,
}

/// An exception a callable may raise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaisesClause {
    #[serde(rename = "type")]
    pub exception_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

/// A property on a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_added: Option<String>,
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A constructor specification for a type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raises: Vec<RaisesClause>,
}

/// A method belonging to a type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raises: Vec<RaisesClause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<GenericParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(default, alias = "state_evidence", alias = "maturity_evidence", skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

/// A type definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_methods: Vec<Method>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_methods: Vec<Method>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    /// Enum values (only for `kind = enum`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EnumValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction: Option<Constructor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<GenericParam>,
    /// Related types or functions (cross-references).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<CrossRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_coverage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(default, alias = "state_evidence", alias = "maturity_evidence", skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

impl TypeDef {
    /// All methods across the three method collections, with the wire
    /// collection name each came from.
    pub fn all_methods(&self) -> impl Iterator<Item = (&'static str, usize, &Method)> {
        self.methods
            .iter()
            .enumerate()
            .map(|(i, m)| ("methods", i, m))
            .chain(
                self.class_methods
                    .iter()
                    .enumerate()
                    .map(|(i, m)| ("class_methods", i, m)),
            )
            .chain(
                self.static_methods
                    .iter()
                    .enumerate()
                    .map(|(i, m)| ("static_methods", i, m)),
            )
    }
}

/// A free function definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raises: Vec<RaisesClause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_params: Vec<GenericParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(default, alias = "state_evidence", alias = "maturity_evidence", skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

/// A behavioral specification with verification steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Feature category (SCREAMING_SNAKE_CASE).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: FeatureStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<CrossRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_coverage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
    #[serde(default, alias = "state_evidence", alias = "maturity_evidence", skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

/// A module of the documented library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

/// A guiding principle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Principle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Maturity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_evidence_alias() {
        let t: TypeDef = serde_json::from_str(
            r#"{
                "name": "Parser",
                "state_evidence": [{"type": "tests", "path": "tests/test_parser.py"}]
            }"#,
        )
        .unwrap();
        assert_eq!(t.evidence.len(), 1);
        assert_eq!(t.evidence[0].kind(), "tests");
    }

    #[test]
    fn test_requirement_wire_name() {
        let req: Requirement = serde_json::from_str(
            r##"{"ref": "#/types/Parser", "min_maturity": "tested"}"##,
        )
        .unwrap();
        assert_eq!(req.target.as_str(), "#/types/Parser");
        assert_eq!(req.min_maturity, Some(Maturity::Tested));
    }

    #[test]
    fn test_feature_status_defaults_planned() {
        let f: Feature = serde_json::from_str(r#"{"id": "user-auth"}"#).unwrap();
        assert_eq!(f.status, FeatureStatus::Planned);
    }
}
