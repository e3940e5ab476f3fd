use smol_str::SmolStr;

use crate::base::{NodeId, SceneId};
use crate::registry::TypeDescriptor;

use super::node::{Component, Node};

/// Path separator in hierarchy queries and candidate listings.
pub const HIERARCHY_SEPARATOR: char = '/';

/// An independently rooted, addressable collection of nodes.
///
/// Only scenes that are both valid and loaded are searchable. Validity
/// models the host's "this handle still points at a real scene" state;
/// loadedness models whether its content is currently in memory.
#[derive(Debug, Clone)]
pub struct Scene {
    pub(super) name: SmolStr,
    pub(super) valid: bool,
    pub(super) loaded: bool,
    pub(super) roots: Vec<NodeId>,
}

impl Scene {
    /// The scene's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the host still considers this scene real.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Whether the scene's content is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Root nodes in host insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }
}

/// Arena-backed forest of scenes and nodes, owned and mutated by the host.
///
/// The resolver reads this graph transiently during a single call and holds
/// no references into it afterwards. Mutation is the host's job and is
/// assumed to be serialized with resolution on the host's main thread; the
/// graph does no internal locking.
///
/// Arena ids are never reused, so a [`NodeId`] kept across host mutations
/// either still names the same node or misses (accessors return `None`);
/// it can never silently name a different node.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    pub(super) scenes: Vec<Scene>,
    pub(super) nodes: Vec<Node>,
    pub(super) active: Option<SceneId>,
    pub(super) isolation: Option<SceneId>,
}

impl SceneGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // HOST MUTATION SURFACE
    // ========================================================================

    /// Add a scene, initially valid and loaded. The first scene added
    /// becomes the active scene.
    pub fn add_scene(&mut self, name: impl Into<SmolStr>) -> SceneId {
        let id = SceneId::new(self.scenes.len());
        self.scenes.push(Scene {
            name: name.into(),
            valid: true,
            loaded: true,
            roots: Vec::new(),
        });
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Mark a scene loaded or unloaded.
    pub fn set_loaded(&mut self, scene: SceneId, loaded: bool) {
        self.scenes[scene.index()].loaded = loaded;
    }

    /// Mark a scene valid or invalid.
    pub fn set_valid(&mut self, scene: SceneId, valid: bool) {
        self.scenes[scene.index()].valid = valid;
    }

    /// Designate the active scene, or clear the designation.
    pub fn set_active(&mut self, scene: Option<SceneId>) {
        self.active = scene;
    }

    /// Enter an isolated authoring context on the given scene.
    ///
    /// While set, the scene is excluded from every search, regardless of its
    /// valid/loaded state.
    pub fn enter_isolation(&mut self, scene: SceneId) {
        self.isolation = Some(scene);
    }

    /// Leave the isolated authoring context, if any.
    pub fn exit_isolation(&mut self) {
        self.isolation = None;
    }

    /// Create a root node in a scene.
    pub fn spawn_root(&mut self, scene: SceneId, name: impl Into<SmolStr>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(name.into(), scene, None));
        self.scenes[scene.index()].roots.push(id);
        id
    }

    /// Create a child under an existing node.
    pub fn spawn_child(&mut self, parent: NodeId, name: impl Into<SmolStr>) -> NodeId {
        let scene = self.nodes[parent.index()].scene;
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(name.into(), scene, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Attach a component of the given type to a node.
    pub fn attach(&mut self, node: NodeId, descriptor: TypeDescriptor) {
        self.nodes[node.index()]
            .components
            .push(Component::new(descriptor));
    }

    /// Rename a node.
    pub fn rename(&mut self, node: NodeId, name: impl Into<SmolStr>) {
        self.nodes[node.index()].name = name.into();
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    /// Look up a scene.
    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(id.index())
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// All scenes with their ids, in creation order.
    pub fn scenes(&self) -> impl Iterator<Item = (SceneId, &Scene)> {
        self.scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| (SceneId::new(i), scene))
    }

    /// The active scene designation, if any.
    pub fn active_scene(&self) -> Option<SceneId> {
        self.active
    }

    /// The isolated authoring context, if one is entered.
    pub fn isolation_scene(&self) -> Option<SceneId> {
        self.isolation
    }

    /// Root nodes of a scene, or an empty slice for a stale id.
    pub fn roots(&self, scene: SceneId) -> &[NodeId] {
        self.scene(scene).map(Scene::roots).unwrap_or(&[])
    }

    /// Direct children of a node, or an empty slice for a stale id.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(Node::children).unwrap_or(&[])
    }

    /// A node's display name, or `None` for a stale id.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(Node::name)
    }

    /// Total number of nodes ever created in this graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of scenes.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Root-to-node path with segments joined by [`HIERARCHY_SEPARATOR`].
    ///
    /// Walks parent links from the node up to its root. Returns `None` for a
    /// stale id; used for candidate reporting and for hosts that echo the
    /// path of a node they just created.
    pub fn hierarchy_path(&self, node: NodeId) -> Option<String> {
        let mut current = self.node(node)?;
        let mut segments = vec![current.name.as_str()];
        while let Some(parent) = current.parent {
            current = self.node(parent)?;
            segments.push(current.name.as_str());
        }
        segments.reverse();
        let mut path = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                path.push(HIERARCHY_SEPARATOR);
            }
            path.push_str(segment);
        }
        Some(path)
    }
}
