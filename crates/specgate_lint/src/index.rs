//! The reference index: every valid local pointer in a document.

use std::collections::BTreeSet;

use specgate_model::{CrossRef, Library};

/// The set of canonical pointers a document declares.
///
/// Built once per run; consistency rules and requirement resolution
/// test membership against it.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    refs: BTreeSet<String>,
}

impl ReferenceIndex {
    /// Build the index from a library: one pointer per type, per method
    /// of each type, per function, feature, module, and principle.
    pub fn build(library: &Library) -> Self {
        let mut refs = BTreeSet::new();

        for t in &library.types {
            refs.insert(CrossRef::type_ref(&t.name).to_string());
            for (_, _, m) in t.all_methods() {
                refs.insert(CrossRef::method_ref(&t.name, &m.name).to_string());
            }
        }
        for f in &library.functions {
            refs.insert(CrossRef::function_ref(&f.name).to_string());
        }
        for f in &library.features {
            refs.insert(CrossRef::feature_ref(&f.id).to_string());
        }
        for m in &library.modules {
            refs.insert(CrossRef::module_ref(&m.path).to_string());
        }
        for p in &library.principles {
            refs.insert(CrossRef::principle_ref(&p.id).to_string());
        }

        Self { refs }
    }

    /// True if the pointer resolves in this document.
    pub fn contains(&self, pointer: &str) -> bool {
        self.refs.contains(pointer)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.refs.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_all_entity_kinds() {
        let library: Library = serde_json::from_str(
            r#"{
                "name": "demo",
                "types": [{"name": "Parser",
                           "methods": [{"name": "parse"}],
                           "static_methods": [{"name": "default"}]}],
                "functions": [{"name": "tokenize"}],
                "features": [{"id": "streaming"}],
                "modules": [{"path": "core.io"}],
                "principles": [{"id": "fail-fast"}]
            }"#,
        )
        .unwrap();

        let index = ReferenceIndex::build(&library);
        for pointer in [
            "#/types/Parser",
            "#/types/Parser/methods/parse",
            "#/types/Parser/methods/default",
            "#/functions/tokenize",
            "#/features/streaming",
            "#/modules/core.io",
            "#/principles/fail-fast",
        ] {
            assert!(index.contains(pointer), "missing {pointer}");
        }
        assert!(!index.contains("#/types/Ghost"));
        assert_eq!(index.len(), 7);
    }
}
