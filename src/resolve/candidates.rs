use rustc_hash::FxHashSet;

use crate::base::NodeId;
use crate::scene::SceneGraph;

/// Maximum number of candidate strings attached to an ambiguous outcome.
pub const MAX_CANDIDATES: usize = 10;

/// Build the candidate listing for an ambiguous node match set.
///
/// One hierarchy path per node, root to node. Nodes without a resolvable
/// path are skipped, duplicate path strings collapse to one entry, the
/// result is ordinally sorted and then truncated to `max`. Truncation is
/// last so the listing is a stable prefix of the full sorted set no matter
/// how many matches there were.
///
/// Pure over the graph and independent of how the match set was produced;
/// every resolution family reports ambiguity through it.
pub fn candidate_paths(graph: &SceneGraph, nodes: &[NodeId], max: usize) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut paths = Vec::with_capacity(nodes.len().min(max));
    for &id in nodes {
        let Some(path) = graph.hierarchy_path(id) else {
            continue;
        };
        if path.is_empty() {
            continue;
        }
        if seen.insert(path.clone()) {
            paths.push(path);
        }
    }
    paths.sort_unstable();
    paths.truncate(max);
    paths
}
