//! Graph, registry, and catalog fixtures shared across test suites.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;

use armature::registry::{ProviderError, StaticTypeProvider, TypeProvider};
use armature::{AssetCatalog, SceneGraph, TypeDescriptor, TypeRegistry};

/// Descriptors every "engine" fixture registry starts from.
static ENGINE_TYPES: Lazy<Vec<TypeDescriptor>> = Lazy::new(|| {
    vec![
        TypeDescriptor::qualified("Engine.Physics.Collider"),
        TypeDescriptor::qualified("Engine.Physics.Rigidbody"),
        TypeDescriptor::qualified("Engine.Render.MeshRenderer"),
        TypeDescriptor::qualified("Engine.Render.Light"),
    ]
});

/// A registry with one engine module.
pub fn engine_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register(StaticTypeProvider::with_types(
        "engine.core",
        ENGINE_TYPES.clone(),
    ));
    registry
}

/// A registry where `Collider` is ambiguous across two modules.
pub fn colliding_registry() -> TypeRegistry {
    let mut registry = engine_registry();
    registry.register(StaticTypeProvider::with_types(
        "game.scripts",
        vec![
            TypeDescriptor::qualified("Game.Collider"),
            TypeDescriptor::qualified("Game.PlayerController"),
        ],
    ));
    registry
}

/// The forest most node-query tests use:
///
/// ```text
/// Main:  World
///          Props
///            Crate
///          Player
/// Side:  Crate
/// ```
pub fn prop_forest() -> SceneGraph {
    let mut graph = SceneGraph::new();
    let main = graph.add_scene("Main");
    let side = graph.add_scene("Side");
    let world = graph.spawn_root(main, "World");
    let props = graph.spawn_child(world, "Props");
    graph.spawn_child(props, "Crate");
    graph.spawn_child(world, "Player");
    graph.spawn_root(side, "Crate");
    graph
}

/// Catalog with one sliced sheet at `path`, listing every name in all three
/// sources the way hosts do: first name in the primary slot, every name in
/// the co-located list, every name again as a representation.
pub fn sprite_sheet(path: &str, names: &[&str]) -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    for (i, name) in names.iter().enumerate() {
        let id = catalog.add_sub_asset(*name);
        if i == 0 {
            catalog.set_primary(path, id);
        }
        catalog.add_colocated(path, id);
        catalog.add_representation(path, id);
    }
    catalog
}

/// Provider that counts enumeration calls, for cache idempotence tests.
pub struct CountingProvider {
    types: Vec<TypeDescriptor>,
    scans: Arc<AtomicUsize>,
}

impl CountingProvider {
    /// Returns the provider and a handle to its scan counter.
    pub fn new(types: Vec<TypeDescriptor>) -> (Self, Arc<AtomicUsize>) {
        let scans = Arc::new(AtomicUsize::new(0));
        (
            Self {
                types,
                scans: Arc::clone(&scans),
            },
            scans,
        )
    }
}

impl TypeProvider for CountingProvider {
    fn name(&self) -> &str {
        "counting"
    }

    fn lookup_qualified(&self, qualified: &str) -> Result<Option<TypeDescriptor>, ProviderError> {
        Ok(self
            .types
            .iter()
            .find(|d| d.qualified_name() == Some(qualified))
            .cloned())
    }

    fn descriptors(&self) -> Result<Vec<TypeDescriptor>, ProviderError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        Ok(self.types.clone())
    }
}

/// Provider that fails every call, for skip-and-continue tests.
pub struct FaultyProvider;

impl TypeProvider for FaultyProvider {
    fn name(&self) -> &str {
        "faulty"
    }

    fn lookup_qualified(&self, _qualified: &str) -> Result<Option<TypeDescriptor>, ProviderError> {
        Err(ProviderError::lookup("faulty", "metadata unavailable"))
    }

    fn descriptors(&self) -> Result<Vec<TypeDescriptor>, ProviderError> {
        Err(ProviderError::introspection("faulty", "metadata unavailable"))
    }
}
