//! Component type resolution: scoped to one node's attached components, or
//! global across the registered type providers.
//!
//! Global resolution follows a fixed ladder: cache hit, exact qualified
//! lookup, then (for unqualified queries only) a short-name scan over every
//! provider. Qualified queries that miss the exact lookup fail as not-found;
//! they never fall back to the scan, because writing a qualifier means the
//! caller intended an authoritative lookup. Only unique successes are
//! cached.

use tracing::{debug, trace, warn};

use crate::base::NodeId;
use crate::registry::{TYPE_QUALIFIER, TypeCache, TypeDescriptor, TypeRegistry};
use crate::scene::SceneGraph;

use super::candidates::MAX_CANDIDATES;
use super::outcome::{Resolution, ResolveError};

/// Upper bound on short-name matches collected during a global scan.
///
/// Two matches already prove ambiguity; the bound only keeps degenerate
/// universes (hundreds of same-named types) from being enumerated in full.
pub const TYPE_SCAN_CAP: usize = 32;

/// Resolves short or qualified type names against the registry, with the
/// process-wide cache, optionally scoped to one node's attached components.
///
/// A short-lived view like [`super::NodeResolver`]: borrow the registry and
/// cache, run a lookup, drop it.
pub struct TypeResolver<'a> {
    registry: &'a TypeRegistry,
    cache: &'a TypeCache,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver over the given registry and cache.
    pub fn new(registry: &'a TypeRegistry, cache: &'a TypeCache) -> Self {
        Self { registry, cache }
    }

    // ========================================================================
    // COMBINED ENTRY POINT
    // ========================================================================

    /// Resolve a type name in the context of a node.
    ///
    /// Unqualified names are tried against the node's attached component
    /// types first; a unique scoped hit wins outright and a scoped
    /// ambiguity is reported as-is rather than retried globally. Only a
    /// scoped miss falls through to [`Self::resolve_global`]. Qualified
    /// names skip the scoped tier entirely.
    pub fn resolve(
        &self,
        graph: &SceneGraph,
        node: NodeId,
        name: &str,
    ) -> Result<Resolution<TypeDescriptor>, ResolveError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        if !trimmed.contains(TYPE_QUALIFIER) {
            match self.resolve_on_node(graph, node, trimmed) {
                Resolution::NotFound => {}
                scoped => return Ok(scoped),
            }
        }
        self.resolve_global(trimmed)
    }

    // ========================================================================
    // SCOPED RESOLUTION
    // ========================================================================

    /// Resolve a short name against the component types attached to `node`.
    ///
    /// Collects every *distinct* attached type whose short name equals the
    /// query; two components of the same type count once. Qualified queries
    /// never match here (attached short names contain no qualifier), and a
    /// stale node id simply has no attached components.
    pub fn resolve_on_node(
        &self,
        graph: &SceneGraph,
        node: NodeId,
        short_name: &str,
    ) -> Resolution<TypeDescriptor> {
        let trimmed = short_name.trim();
        if trimmed.is_empty() {
            return Resolution::NotFound;
        }
        let Some(node) = graph.node(node) else {
            return Resolution::NotFound;
        };

        let mut matches: Vec<&TypeDescriptor> = Vec::new();
        for component in node.components() {
            let descriptor = component.descriptor();
            if descriptor.short_name() == trimmed && !matches.contains(&descriptor) {
                matches.push(descriptor);
            }
        }
        trace!(
            "[TYPE_RESOLVE] '{}' matched {} attached type(s) on '{}'",
            trimmed,
            matches.len(),
            node.name()
        );

        match matches.as_slice() {
            [] => Resolution::NotFound,
            [only] => Resolution::Unique((*only).clone()),
            _ => Resolution::Ambiguous(display_names(&matches)),
        }
    }

    // ========================================================================
    // GLOBAL RESOLUTION
    // ========================================================================

    /// Resolve a type name against every registered provider.
    ///
    /// Checks the cache first; on a miss, runs the uncached ladder and
    /// caches the result only when it is unique.
    pub fn resolve_global(&self, name: &str) -> Result<Resolution<TypeDescriptor>, ResolveError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        if let Some(descriptor) = self.cache.get(trimmed) {
            debug!("[TYPE_RESOLVE] cache hit for '{trimmed}'");
            return Ok(Resolution::Unique(descriptor));
        }

        let outcome = self.resolve_uncached(trimmed);
        if let Resolution::Unique(descriptor) = &outcome {
            self.cache.insert(trimmed, descriptor.clone());
        }
        Ok(outcome)
    }

    /// The uncached resolution ladder. The cache lock is never held here;
    /// provider calls can be arbitrarily slow.
    fn resolve_uncached(&self, trimmed: &str) -> Resolution<TypeDescriptor> {
        // Exact qualified lookup, first provider hit wins.
        for provider in self.registry.providers() {
            match provider.lookup_qualified(trimmed) {
                Ok(Some(descriptor)) => {
                    trace!(
                        "[TYPE_RESOLVE] exact hit for '{}' in module '{}'",
                        trimmed,
                        provider.name()
                    );
                    return Resolution::Unique(descriptor);
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(
                        "[TYPE_RESOLVE] module '{}' skipped during exact lookup: {error}",
                        provider.name()
                    );
                }
            }
        }

        // A qualifier means the caller wanted the exact lookup; a miss is
        // final.
        if trimmed.contains(TYPE_QUALIFIER) {
            debug!("[TYPE_RESOLVE] qualified name '{trimmed}' not found, no fallback");
            return Resolution::NotFound;
        }

        // Short-name scan across all providers, capped.
        let mut matches: Vec<TypeDescriptor> = Vec::new();
        'scan: for provider in self.registry.providers() {
            let descriptors = match provider.descriptors() {
                Ok(descriptors) => descriptors,
                Err(error) => {
                    warn!(
                        "[TYPE_RESOLVE] module '{}' skipped during scan: {error}",
                        provider.name()
                    );
                    continue;
                }
            };
            for descriptor in descriptors {
                if descriptor.short_name() == trimmed {
                    matches.push(descriptor);
                    if matches.len() >= TYPE_SCAN_CAP {
                        break 'scan;
                    }
                }
            }
        }
        debug!(
            "[TYPE_RESOLVE] scan for '{}' matched {} type(s)",
            trimmed,
            matches.len()
        );

        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches.swap_remove(0)),
            _ => {
                let refs: Vec<&TypeDescriptor> = matches.iter().collect();
                Resolution::Ambiguous(display_names(&refs))
            }
        }
    }
}

/// Candidate names for an ambiguous type outcome: display names, ordinally
/// sorted, capped.
fn display_names(matches: &[&TypeDescriptor]) -> Vec<String> {
    let mut names: Vec<String> = matches
        .iter()
        .map(|d| d.display_name().to_string())
        .collect();
    names.sort_unstable();
    names.truncate(MAX_CANDIDATES);
    names
}
