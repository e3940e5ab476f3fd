//! The addressable scene forest: scenes, nodes, and attached components.
//!
//! [`SceneGraph`] is the arena the external host populates and mutates;
//! resolvers in [`crate::resolve`] only ever read it. Forest-level queries
//! (which scenes are searchable, where to place new nodes) live in
//! `forest.rs` as a separate impl block on the graph.

mod forest;
mod graph;
mod node;

pub use graph::{HIERARCHY_SEPARATOR, Scene, SceneGraph};
pub use node::{Component, Node};
