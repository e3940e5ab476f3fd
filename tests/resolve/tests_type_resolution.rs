//! Component type resolution tests: the cache, the exact-qualified ladder,
//! the short-name scan, and the scoped-versus-global precedence.

use rstest::rstest;

use armature::registry::StaticTypeProvider;
use armature::resolve::{MAX_CANDIDATES, TYPE_SCAN_CAP};
use armature::{
    Resolution, ResolveError, SceneGraph, TypeCache, TypeDescriptor, TypeRegistry, TypeResolver,
};

use crate::helpers::fixtures::{
    CountingProvider, FaultyProvider, colliding_registry, engine_registry,
};

fn unique_qualified(outcome: Resolution<TypeDescriptor>) -> String {
    match outcome {
        Resolution::Unique(descriptor) => descriptor.display_name().to_string(),
        other => panic!("expected a unique type, got {:?}", other),
    }
}

// ============================================================================
// GLOBAL RESOLUTION
// ============================================================================

#[test]
fn test_short_name_resolves_when_unique_in_universe() {
    let registry = engine_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve_global("Rigidbody").unwrap();
    assert_eq!(unique_qualified(outcome), "Engine.Physics.Rigidbody");
}

#[test]
fn test_qualified_name_resolves_exactly() {
    let registry = colliding_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    // "Collider" alone is ambiguous here, but the qualified form is not.
    let outcome = resolver.resolve_global("Game.Collider").unwrap();
    assert_eq!(unique_qualified(outcome), "Game.Collider");
}

#[test]
fn test_short_name_collision_reports_sorted_candidates() {
    let registry = colliding_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve_global("Collider").unwrap();
    assert_eq!(
        outcome.candidates(),
        &["Engine.Physics.Collider".to_string(), "Game.Collider".to_string()]
    );
    // Ambiguity is never cached.
    assert!(cache.is_empty());
}

#[test]
fn test_wide_collision_is_capped_at_scan_and_listing() {
    // 32 matches fill the scan budget before the last-registered,
    // sorts-first type is reached; the listing is then cut to ten.
    let mut types: Vec<TypeDescriptor> = (0..TYPE_SCAN_CAP)
        .map(|i| TypeDescriptor::qualified(format!("Mod{i:02}.Widget")))
        .collect();
    types.push(TypeDescriptor::qualified("AAA.Widget"));
    let mut registry = TypeRegistry::new();
    registry.register(StaticTypeProvider::with_types("game.mods", types));
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve_global("Widget").unwrap();
    let expected: Vec<String> = (0..MAX_CANDIDATES)
        .map(|i| format!("Mod{i:02}.Widget"))
        .collect();
    assert_eq!(outcome.candidates(), expected.as_slice());
    assert!(!outcome.candidates().contains(&"AAA.Widget".to_string()));
    assert!(cache.is_empty());
}

#[test]
fn test_qualified_miss_never_falls_back_to_short_names() {
    let registry = colliding_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    // The short name "Collider" exists twice, but a qualifier means exact
    // lookup only.
    let outcome = resolver.resolve_global("Engine.Wrong.Collider").unwrap();
    assert!(outcome.is_not_found());
    assert!(cache.is_empty());
}

#[test]
fn test_unknown_short_name_is_not_found() {
    let registry = engine_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    assert!(resolver.resolve_global("Teleporter").unwrap().is_not_found());
    assert!(cache.is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_type_name_is_invalid_input(#[case] name: &str) {
    let registry = engine_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    assert_eq!(resolver.resolve_global(name), Err(ResolveError::EmptyQuery));
}

// ============================================================================
// CACHING
// ============================================================================

#[test]
fn test_successful_short_name_resolution_is_cached() {
    let (provider, scans) = CountingProvider::new(vec![TypeDescriptor::qualified(
        "Engine.Physics.Rigidbody",
    )]);
    let mut registry = TypeRegistry::new();
    registry.register(provider);
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let first = resolver.resolve_global("Rigidbody").unwrap();
    let second = resolver.resolve_global("Rigidbody").unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
    // The second call was served from the cache without re-scanning.
    assert_eq!(scans.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_clear_forces_a_fresh_scan() {
    let (provider, scans) = CountingProvider::new(vec![TypeDescriptor::qualified(
        "Engine.Physics.Rigidbody",
    )]);
    let mut registry = TypeRegistry::new();
    registry.register(provider);
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    resolver.resolve_global("Rigidbody").unwrap();
    cache.clear();
    resolver.resolve_global("Rigidbody").unwrap();

    assert_eq!(scans.load(std::sync::atomic::Ordering::SeqCst), 2);
}

#[test]
fn test_trimmed_queries_share_a_cache_key() {
    let registry = engine_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    resolver.resolve_global("  Rigidbody  ").unwrap();
    assert_eq!(cache.len(), 1);
    resolver.resolve_global("Rigidbody").unwrap();
    assert_eq!(cache.len(), 1);
}

// ============================================================================
// PROVIDER FAULTS
// ============================================================================

#[test]
fn test_faulty_provider_is_skipped_not_fatal() {
    let mut registry = TypeRegistry::new();
    registry.register(FaultyProvider);
    registry.register(StaticTypeProvider::with_types(
        "engine.core",
        vec![TypeDescriptor::qualified("Engine.Physics.Collider")],
    ));
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    // Both ladders pass through the faulty module first.
    let exact = resolver.resolve_global("Engine.Physics.Collider").unwrap();
    assert_eq!(unique_qualified(exact), "Engine.Physics.Collider");

    cache.clear();
    let scanned = resolver.resolve_global("Collider").unwrap();
    assert_eq!(unique_qualified(scanned), "Engine.Physics.Collider");
}

// ============================================================================
// SCOPED AND COMBINED RESOLUTION
// ============================================================================

fn graph_with_component(descriptor: TypeDescriptor) -> (SceneGraph, armature::NodeId) {
    let mut graph = SceneGraph::new();
    let scene = graph.add_scene("Main");
    let node = graph.spawn_root(scene, "Hero");
    graph.attach(node, descriptor);
    (graph, node)
}

#[test]
fn test_attached_type_beats_unrelated_global_type() {
    // The node carries Game.Foo; an unrelated Engine.Util.Foo also exists.
    let (graph, node) = graph_with_component(TypeDescriptor::qualified("Game.Foo"));
    let mut registry = engine_registry();
    registry.register(StaticTypeProvider::with_types(
        "engine.util",
        vec![TypeDescriptor::qualified("Engine.Util.Foo")],
    ));
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve(&graph, node, "Foo").unwrap();
    assert_eq!(unique_qualified(outcome), "Game.Foo");
}

#[test]
fn test_scoped_ambiguity_short_circuits_global_lookup() {
    // Two distinct attached types share the short name; the registry could
    // resolve it uniquely, but the scoped ambiguity is reported instead.
    let (mut graph, node) = graph_with_component(TypeDescriptor::qualified("Game.Collider"));
    graph.attach(node, TypeDescriptor::qualified("Mod.Collider"));
    let registry = engine_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve(&graph, node, "Collider").unwrap();
    assert_eq!(
        outcome.candidates(),
        &["Game.Collider".to_string(), "Mod.Collider".to_string()]
    );
}

#[test]
fn test_duplicate_components_of_one_type_stay_unique() {
    let (mut graph, node) = graph_with_component(TypeDescriptor::qualified("Game.Collider"));
    graph.attach(node, TypeDescriptor::qualified("Game.Collider"));
    let registry = TypeRegistry::new();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve_on_node(&graph, node, "Collider");
    assert_eq!(unique_qualified(outcome), "Game.Collider");
}

#[test]
fn test_qualified_query_skips_attached_components() {
    // The node carries Engine.Physics.Collider, but the caller asked for
    // the Game one by qualified name.
    let (graph, node) =
        graph_with_component(TypeDescriptor::qualified("Engine.Physics.Collider"));
    let registry = colliding_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve(&graph, node, "Game.Collider").unwrap();
    assert_eq!(unique_qualified(outcome), "Game.Collider");
}

#[test]
fn test_scoped_miss_falls_through_to_global() {
    let (graph, node) = graph_with_component(TypeDescriptor::qualified("Game.Foo"));
    let registry = engine_registry();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);

    let outcome = resolver.resolve(&graph, node, "MeshRenderer").unwrap();
    assert_eq!(unique_qualified(outcome), "Engine.Render.MeshRenderer");
}

#[test]
fn test_scoped_resolution_on_stale_node_is_not_found() {
    let registry = TypeRegistry::new();
    let cache = TypeCache::new();
    let resolver = TypeResolver::new(&registry, &cache);
    let graph = SceneGraph::new();

    let outcome = resolver.resolve_on_node(&graph, armature::NodeId::new(7), "Collider");
    assert!(outcome.is_not_found());
}
