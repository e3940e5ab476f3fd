//! Forest enumeration: which scenes a resolution call may search, and where
//! the host should place newly created nodes.

use tracing::trace;

use crate::base::{NodeId, SceneId};

use super::graph::SceneGraph;

impl SceneGraph {
    /// Whether a scene is currently searchable.
    ///
    /// Searchable means valid, loaded, and not the isolated authoring
    /// context.
    pub fn is_searchable(&self, id: SceneId) -> bool {
        if self.isolation == Some(id) {
            return false;
        }
        self.scene(id).is_some_and(|s| s.valid && s.loaded)
    }

    /// The ordered list of scenes a resolution call searches.
    ///
    /// Creation order, filtered to searchable scenes. An empty result means
    /// "nothing to search" and resolvers report not-found, never a fault.
    pub fn searchable_scenes(&self) -> Vec<SceneId> {
        let scenes: Vec<SceneId> = self
            .scenes()
            .map(|(id, _)| id)
            .filter(|&id| self.is_searchable(id))
            .collect();
        trace!(
            "[FOREST] {} of {} scenes searchable",
            scenes.len(),
            self.scene_count()
        );
        scenes
    }

    /// The scene a newly created node should be placed in.
    ///
    /// With an explicit parent, the parent's scene wins when it is valid and
    /// loaded; isolation does not disqualify it, since the host placed the
    /// parent there deliberately. Without one, the active scene is used when
    /// valid, loaded, and not the isolated authoring context, else the first
    /// searchable scene. `None` means the host has nowhere to put the node.
    pub fn placement_scene(&self, parent: Option<NodeId>) -> Option<SceneId> {
        if let Some(parent) = parent
            && let Some(node) = self.node(parent)
            && let Some(scene) = self.scene(node.scene())
            && scene.is_valid()
            && scene.is_loaded()
        {
            return Some(node.scene());
        }

        if let Some(active) = self.active
            && let Some(scene) = self.scene(active)
            && scene.is_valid()
            && scene.is_loaded()
            && self.isolation != Some(active)
        {
            return Some(active);
        }

        self.searchable_scenes().first().copied()
    }
}
