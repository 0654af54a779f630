//! The requirement dependency graph and cycle detection.

use std::collections::{BTreeMap, BTreeSet};

use specgate_model::{CrossRef, Library, Requirement};

/// Directed graph of `requires` edges between entities.
///
/// Only entities with at least one outgoing requirement appear as keys;
/// an entity with none is absent, not an empty entry.
#[derive(Debug, Clone, Default)]
pub struct RequirementGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl RequirementGraph {
    /// Build the graph from every entity kind that can declare
    /// requirements, including methods nested under types.
    pub fn build(library: &Library) -> Self {
        let mut adjacency = BTreeMap::new();

        for t in &library.types {
            Self::add_edges(&mut adjacency, CrossRef::type_ref(&t.name), &t.requires);
            for (_, _, m) in t.all_methods() {
                Self::add_edges(
                    &mut adjacency,
                    CrossRef::method_ref(&t.name, &m.name),
                    &m.requires,
                );
            }
        }
        for f in &library.functions {
            Self::add_edges(&mut adjacency, CrossRef::function_ref(&f.name), &f.requires);
        }
        for f in &library.features {
            Self::add_edges(&mut adjacency, CrossRef::feature_ref(&f.id), &f.requires);
        }
        for m in &library.modules {
            Self::add_edges(&mut adjacency, CrossRef::module_ref(&m.path), &m.requires);
        }
        for p in &library.principles {
            Self::add_edges(&mut adjacency, CrossRef::principle_ref(&p.id), &p.requires);
        }

        Self { adjacency }
    }

    fn add_edges(
        adjacency: &mut BTreeMap<String, Vec<String>>,
        from: CrossRef,
        requires: &[Requirement],
    ) {
        if requires.is_empty() {
            return;
        }
        let edges = requires
            .iter()
            .map(|r| r.target.as_str().to_string())
            .collect();
        adjacency.insert(from.to_string(), edges);
    }

    /// Outgoing edges of a node, if it has any.
    pub fn edges(&self, node: &str) -> Option<&[String]> {
        self.adjacency.get(node).map(|v| v.as_slice())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|s| s.as_str())
    }

    /// Find the first cycle by depth-first traversal.
    ///
    /// The cycle is returned with its entry node repeated at both ends,
    /// e.g. `["#/types/A", "#/types/B", "#/types/A"]`. A graph with
    /// several independent cycles reports exactly one.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut visited = BTreeSet::new();
        let mut stack = Vec::new();

        for node in self.adjacency.keys() {
            if let Some(cycle) = self.visit(node, &mut visited, &mut stack) {
                return Some(cycle);
            }
        }
        None
    }

    fn visit(
        &self,
        node: &str,
        visited: &mut BTreeSet<String>,
        stack: &mut Vec<String>,
    ) -> Option<Vec<String>> {
        if let Some(pos) = stack.iter().position(|n| n == node) {
            let mut cycle: Vec<String> = stack[pos..].to_vec();
            cycle.push(node.to_string());
            return Some(cycle);
        }
        if visited.contains(node) {
            return None;
        }
        visited.insert(node.to_string());

        if let Some(edges) = self.adjacency.get(node) {
            stack.push(node.to_string());
            for next in edges {
                if let Some(cycle) = self.visit(next, visited, stack) {
                    return Some(cycle);
                }
            }
            stack.pop();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(json: &str) -> Library {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_entities_without_requirements_are_absent() {
        let lib = library(
            r##"{
                "name": "demo",
                "types": [
                    {"name": "A", "requires": [{"ref": "#/types/B"}]},
                    {"name": "B"}
                ]
            }"##,
        );
        let graph = RequirementGraph::build(&lib);
        assert!(graph.edges("#/types/A").is_some());
        assert!(graph.edges("#/types/B").is_none());
    }

    #[test]
    fn test_two_node_cycle() {
        let lib = library(
            r##"{
                "name": "demo",
                "types": [
                    {"name": "A", "requires": [{"ref": "#/types/B"}]},
                    {"name": "B", "requires": [{"ref": "#/types/A"}]}
                ]
            }"##,
        );
        let cycle = RequirementGraph::build(&lib).find_cycle().unwrap();
        assert_eq!(cycle, vec!["#/types/A", "#/types/B", "#/types/A"]);
    }

    #[test]
    fn test_self_cycle() {
        let lib = library(
            r##"{
                "name": "demo",
                "functions": [{"name": "f", "requires": [{"ref": "#/functions/f"}]}]
            }"##,
        );
        let cycle = RequirementGraph::build(&lib).find_cycle().unwrap();
        assert_eq!(cycle, vec!["#/functions/f", "#/functions/f"]);
    }

    #[test]
    fn test_acyclic_graph() {
        let lib = library(
            r##"{
                "name": "demo",
                "types": [
                    {"name": "A", "requires": [{"ref": "#/types/B"}, {"ref": "#/types/C"}]},
                    {"name": "B", "requires": [{"ref": "#/types/C"}]},
                    {"name": "C"}
                ]
            }"##,
        );
        assert!(RequirementGraph::build(&lib).find_cycle().is_none());
    }

    #[test]
    fn test_dangling_edge_target_is_harmless() {
        let lib = library(
            r##"{
                "name": "demo",
                "types": [{"name": "A", "requires": [{"ref": "#/types/Ghost"}]}]
            }"##,
        );
        assert!(RequirementGraph::build(&lib).find_cycle().is_none());
    }

    #[test]
    fn test_methods_participate() {
        let lib = library(
            r##"{
                "name": "demo",
                "types": [{
                    "name": "A",
                    "methods": [{"name": "go",
                                 "requires": [{"ref": "#/types/A/methods/go"}]}]
                }]
            }"##,
        );
        let cycle = RequirementGraph::build(&lib).find_cycle().unwrap();
        assert_eq!(
            cycle,
            vec!["#/types/A/methods/go", "#/types/A/methods/go"]
        );
    }
}
