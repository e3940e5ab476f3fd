use smol_str::SmolStr;

use crate::base::{NodeId, SceneId};
use crate::registry::TypeDescriptor;

/// A typed facet attached to exactly one node.
///
/// Components carry no state of their own here; the host owns component
/// data. The resolver only ever asks "what type is this".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    descriptor: TypeDescriptor,
}

impl Component {
    /// Create a component of the given type.
    pub fn new(descriptor: TypeDescriptor) -> Self {
        Self { descriptor }
    }

    /// The component's type.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// The component type's short name.
    pub fn short_name(&self) -> &str {
        self.descriptor.short_name()
    }
}

/// An addressable entity in a scene.
///
/// Names are display labels, not keys: siblings may share one, and every
/// rule in the resolver that needs uniqueness keys on [`NodeId`] instead.
/// Children keep host insertion order, which the resolver treats as the
/// traversal order.
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) name: SmolStr,
    pub(super) scene: SceneId,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) components: Vec<Component>,
}

impl Node {
    pub(super) fn new(name: SmolStr, scene: SceneId, parent: Option<NodeId>) -> Self {
        Self {
            name,
            scene,
            parent,
            children: Vec::new(),
            components: Vec::new(),
        }
    }

    /// The node's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scene this node belongs to.
    pub fn scene(&self) -> SceneId {
        self.scene
    }

    /// The parent node, if this is not a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in host insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Attached components in attachment order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Whether a component of exactly this type is attached.
    pub fn has_component(&self, descriptor: &TypeDescriptor) -> bool {
        self.components.iter().any(|c| c.descriptor() == descriptor)
    }
}
