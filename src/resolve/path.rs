//! Node queries: bare-name search and structured-path search over the
//! searchable forest.
//!
//! A query is either a bare name (no separator), matched against every node
//! at every depth, or a structured path (`"World/Props/Crate"`), matched by
//! walking segments from the roots. Path matching is a breadth expansion:
//! at each segment the whole working set is replaced by all matching
//! children of all current nodes, so multiplicity survives to the end and
//! ambiguity is detected instead of hidden by a first-child descent.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::base::NodeId;
use crate::scene::{HIERARCHY_SEPARATOR, SceneGraph};

use super::candidates::{MAX_CANDIDATES, candidate_paths};
use super::outcome::{Resolution, ResolveError};

// ============================================================================
// MATCH SET
// ============================================================================

/// The deduplicated set of nodes matched by one query, in first-seen order.
///
/// First-seen order is scene creation order, then root order, then
/// depth-first order within a root. Identity dedup has already happened;
/// a node appears at most once however many routes reached it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    nodes: Vec<NodeId>,
}

impl MatchSet {
    fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first match in traversal order, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// The matches as a slice.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Iterate the matches.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Consume the set, yielding the matches.
    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}

// ============================================================================
// NODE RESOLVER
// ============================================================================

/// Resolves path-or-name queries against a scene graph.
///
/// A short-lived view: borrow the graph, run a query, drop it. Holds no
/// state across calls.
pub struct NodeResolver<'a> {
    graph: &'a SceneGraph,
}

impl<'a> NodeResolver<'a> {
    /// Create a resolver over the given graph.
    pub fn new(graph: &'a SceneGraph) -> Self {
        Self { graph }
    }

    /// Compute the full match set for a query.
    ///
    /// An empty or whitespace-only query yields an empty set. A query
    /// containing [`HIERARCHY_SEPARATOR`] is a structured path; anything
    /// else is a bare name matched at every depth. Comparison is exact,
    /// case-sensitive, and ordinal throughout.
    pub fn find(&self, query: &str) -> MatchSet {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return MatchSet::default();
        }
        if trimmed.contains(HIERARCHY_SEPARATOR) {
            self.find_by_path(trimmed)
        } else {
            self.find_by_name(trimmed)
        }
    }

    /// Resolve a query to a single node, or report why that is impossible.
    ///
    /// Cardinality 0 is [`Resolution::NotFound`], 1 is
    /// [`Resolution::Unique`], anything more is [`Resolution::Ambiguous`]
    /// with candidates built from the full match set. There is no implicit
    /// first-match selection.
    pub fn resolve(&self, query: &str) -> Result<Resolution<NodeId>, ResolveError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        let matches = self.find(trimmed);
        debug!(
            "[NODE_QUERY] '{}' matched {} node(s)",
            trimmed,
            matches.len()
        );
        Ok(match matches.as_slice() {
            [] => Resolution::NotFound,
            [only] => Resolution::Unique(*only),
            _ => Resolution::Ambiguous(candidate_paths(
                self.graph,
                matches.as_slice(),
                MAX_CANDIDATES,
            )),
        })
    }

    /// Bare-name search: every node at every depth, in traversal order.
    fn find_by_name(&self, name: &str) -> MatchSet {
        trace!("[NODE_QUERY] name search '{name}'");
        let mut seen = FxHashSet::default();
        let mut matches = Vec::new();
        let mut stack = Vec::new();

        for scene in self.graph.searchable_scenes() {
            for &root in self.graph.roots(scene) {
                stack.push(root);
                while let Some(id) = stack.pop() {
                    if self.graph.name(id) == Some(name) && seen.insert(id) {
                        matches.push(id);
                    }
                    for &child in self.graph.children(id).iter().rev() {
                        stack.push(child);
                    }
                }
            }
        }
        MatchSet::new(matches)
    }

    /// Structured-path search: segment-wise breadth expansion from the roots.
    fn find_by_path(&self, path: &str) -> MatchSet {
        let segments: Vec<&str> = path.split(HIERARCHY_SEPARATOR).collect();
        trace!(
            "[NODE_QUERY] path search '{path}' ({} segments)",
            segments.len()
        );

        let mut seen = FxHashSet::default();
        let mut matches = Vec::new();

        for scene in self.graph.searchable_scenes() {
            // Seed with every root matching the first segment, then expand
            // level by level. The working set is replaced wholesale at each
            // segment so every matching child of every current node stays in.
            let mut current: Vec<NodeId> = self
                .graph
                .roots(scene)
                .iter()
                .copied()
                .filter(|&root| self.graph.name(root) == Some(segments[0]))
                .collect();

            for segment in &segments[1..] {
                if current.is_empty() {
                    break;
                }
                let mut next = Vec::new();
                for &id in &current {
                    for &child in self.graph.children(id) {
                        if self.graph.name(child) == Some(*segment) {
                            next.push(child);
                        }
                    }
                }
                current = next;
            }

            for id in current {
                if seen.insert(id) {
                    matches.push(id);
                }
            }
        }
        MatchSet::new(matches)
    }
}
