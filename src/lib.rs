//! # armature-base
//!
//! Core library for scene hierarchy, component type, and sub-asset
//! reference resolution.
//!
//! An external visual-editing host owns a live scene/asset graph; callers
//! address nodes, component types, and asset sub-resources by
//! human-readable name or path. This crate turns such a reference into
//! either exactly one target or a bounded, reproducible candidate listing
//! for the caller to disambiguate with. It never mutates the graph and
//! never guesses among multiple matches.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → resolution engine (node queries, type lookup, sub-assets)
//!   ↓
//! scene     → scene/node/component graph, forest enumeration
//!   ↓
//! registry  → type descriptors, provider trait, process-wide cache
//! asset     → asset catalog and sub-asset bindings
//!   ↓
//! base      → primitives (arena id newtypes)
//! ```

// ============================================================================
// MODULES (dependency order: base → registry/asset → scene → resolve)
// ============================================================================

/// Foundation types: SceneId, NodeId, SubAssetId
pub mod base;

/// Type universe: descriptors, provider trait, registry, cache
pub mod registry;

/// Asset catalog: asset paths and bound sub-assets
pub mod asset;

/// Scene forest: scenes, nodes, components, searchability
pub mod scene;

/// Resolution engine: node queries, type lookup, sub-asset selection
pub mod resolve;

// Re-export foundation types
pub use base::{NodeId, SceneId, SubAssetId};

// Re-export the types most consumers touch
pub use asset::AssetCatalog;
pub use registry::{TypeCache, TypeDescriptor, TypeProvider, TypeRegistry};
pub use resolve::{
    MatchSet, NodeResolver, Resolution, ResolveError, SubAssetOutcome, SubAssetResolver,
    TypeResolver,
};
pub use scene::SceneGraph;
