//! Outcome assertion helpers for resolver tests.

use armature::{NodeId, NodeResolver, Resolution, SceneGraph};

/// Resolve a node query and assert it's unique. Returns the resolved node.
pub fn assert_unique(graph: &SceneGraph, query: &str) -> NodeId {
    match NodeResolver::new(graph).resolve(query) {
        Ok(Resolution::Unique(id)) => id,
        Ok(Resolution::NotFound) => {
            panic!("'{}' did not resolve to any node", query)
        }
        Ok(Resolution::Ambiguous(candidates)) => {
            panic!("'{}' is ambiguous: {:?}", query, candidates)
        }
        Err(error) => panic!("'{}' was rejected as invalid input: {}", query, error),
    }
}

/// Assert a node query matches nothing.
pub fn assert_not_found(graph: &SceneGraph, query: &str) {
    match NodeResolver::new(graph).resolve(query) {
        Ok(Resolution::NotFound) => (),
        Ok(Resolution::Unique(id)) => {
            panic!(
                "'{}' unexpectedly resolved to '{}'",
                query,
                graph.hierarchy_path(id).unwrap_or_default()
            )
        }
        Ok(Resolution::Ambiguous(candidates)) => {
            panic!("'{}' unexpectedly ambiguous: {:?}", query, candidates)
        }
        Err(error) => panic!("'{}' was rejected as invalid input: {}", query, error),
    }
}

/// Assert a node query is ambiguous. Returns the candidate listing.
pub fn assert_ambiguous(graph: &SceneGraph, query: &str) -> Vec<String> {
    match NodeResolver::new(graph).resolve(query) {
        Ok(Resolution::Ambiguous(candidates)) => candidates,
        Ok(Resolution::Unique(id)) => {
            panic!(
                "'{}' unexpectedly resolved uniquely to '{}'",
                query,
                graph.hierarchy_path(id).unwrap_or_default()
            )
        }
        Ok(Resolution::NotFound) => {
            panic!("'{}' unexpectedly matched nothing", query)
        }
        Err(error) => panic!("'{}' was rejected as invalid input: {}", query, error),
    }
}
