//! Collecting lifecycle-tracked entities out of a library.

use std::collections::BTreeMap;

use serde::Serialize;

use specgate_model::{CrossRef, Evidence, Library, Maturity, Requirement};

/// The kind of entity being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Type,
    Function,
    Feature,
    Method,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Type => "type",
            EntityKind::Function => "function",
            EntityKind::Feature => "feature",
            EntityKind::Method => "method",
        }
    }
}

/// A flattened view of one entity's lifecycle-relevant fields.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedEntity {
    pub kind: EntityKind,
    pub name: String,
    #[serde(rename = "ref")]
    pub entity_ref: CrossRef,
    pub maturity: Option<Maturity>,
    pub lifecycle_state: Option<String>,
    pub workflow: Option<String>,
    #[serde(skip)]
    pub evidence: Vec<Evidence>,
    #[serde(skip)]
    pub requires: Vec<Requirement>,
}

impl TrackedEntity {
    fn is_tracked(&self) -> bool {
        self.maturity.is_some() || self.lifecycle_state.is_some()
    }
}

/// Collect every entity that participates in the lifecycle, in document
/// order: types, functions, features, then methods nested under types.
///
/// An entity participates when it declares a maturity or a legacy
/// lifecycle state.
pub fn collect_tracked(library: &Library) -> Vec<TrackedEntity> {
    let mut tracked = Vec::new();

    for t in &library.types {
        let entity = TrackedEntity {
            kind: EntityKind::Type,
            name: t.name.clone(),
            entity_ref: CrossRef::type_ref(&t.name),
            maturity: t.maturity,
            lifecycle_state: t.lifecycle_state.clone(),
            workflow: t.workflow.clone(),
            evidence: t.evidence.clone(),
            requires: t.requires.clone(),
        };
        if entity.is_tracked() {
            tracked.push(entity);
        }
    }

    for f in &library.functions {
        let entity = TrackedEntity {
            kind: EntityKind::Function,
            name: f.name.clone(),
            entity_ref: CrossRef::function_ref(&f.name),
            maturity: f.maturity,
            lifecycle_state: f.lifecycle_state.clone(),
            workflow: f.workflow.clone(),
            evidence: f.evidence.clone(),
            requires: f.requires.clone(),
        };
        if entity.is_tracked() {
            tracked.push(entity);
        }
    }

    for f in &library.features {
        let entity = TrackedEntity {
            kind: EntityKind::Feature,
            name: f.id.clone(),
            entity_ref: CrossRef::feature_ref(&f.id),
            maturity: f.maturity,
            lifecycle_state: f.lifecycle_state.clone(),
            workflow: f.workflow.clone(),
            evidence: f.evidence.clone(),
            requires: f.requires.clone(),
        };
        if entity.is_tracked() {
            tracked.push(entity);
        }
    }

    for t in &library.types {
        for (_, _, m) in t.all_methods() {
            let entity = TrackedEntity {
                kind: EntityKind::Method,
                name: format!("{}.{}", t.name, m.name),
                entity_ref: CrossRef::method_ref(&t.name, &m.name),
                maturity: m.maturity,
                lifecycle_state: m.lifecycle_state.clone(),
                workflow: m.workflow.clone(),
                evidence: m.evidence.clone(),
                requires: m.requires.clone(),
            };
            if entity.is_tracked() {
                tracked.push(entity);
            }
        }
    }

    tracked
}

/// Build the maturity index used for requirement resolution: canonical
/// pointer to declared maturity, over types, functions, and features.
pub fn collect_maturities(library: &Library) -> BTreeMap<String, Option<Maturity>> {
    let mut maturities = BTreeMap::new();

    for t in &library.types {
        maturities.insert(CrossRef::type_ref(&t.name).to_string(), t.maturity);
    }
    for f in &library.functions {
        maturities.insert(CrossRef::function_ref(&f.name).to_string(), f.maturity);
    }
    for f in &library.features {
        maturities.insert(CrossRef::feature_ref(&f.id).to_string(), f.maturity);
    }

    maturities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> Library {
        serde_json::from_str(
            r#"{
                "name": "demo",
                "types": [
                    {"name": "Parser", "maturity": "implemented",
                     "methods": [{"name": "parse", "maturity": "implemented"},
                                 {"name": "reset"}]},
                    {"name": "Token"}
                ],
                "functions": [{"name": "tokenize", "lifecycle_state": "review"}],
                "features": [{"id": "streaming", "maturity": "idea"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_collect_tracked_order_and_selection() {
        let tracked = collect_tracked(&sample_library());
        let refs: Vec<&str> = tracked.iter().map(|t| t.entity_ref.as_str()).collect();
        assert_eq!(
            refs,
            vec![
                "#/types/Parser",
                "#/functions/tokenize",
                "#/features/streaming",
                "#/types/Parser/methods/parse",
            ]
        );
    }

    #[test]
    fn test_collect_maturities_includes_untracked() {
        let maturities = collect_maturities(&sample_library());
        assert_eq!(
            maturities.get("#/types/Parser"),
            Some(&Some(Maturity::Implemented))
        );
        // declared but without a maturity: present with None
        assert_eq!(maturities.get("#/types/Token"), Some(&None));
        assert!(!maturities.contains_key("#/types/Parser/methods/parse"));
    }
}
