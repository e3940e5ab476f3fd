use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::descriptor::TypeDescriptor;

/// Process-wide cache of successful type resolutions.
///
/// Keys are trimmed query strings exactly as the caller resolved them, so
/// `"Collider"` and `"Engine.Physics.Collider"` cache independently. Only
/// unique successes are stored; not-found and ambiguous outcomes are
/// recomputed on every call because the provider set can change while the
/// host runs.
///
/// Entries are never invalidated automatically. A host that reloads its type
/// universe mid-session must call [`TypeCache::clear`]; a host that starts a
/// fresh process per session never needs to.
///
/// All access goes through one mutex. The lock guards only the map itself,
/// never a provider call, so a slow module scan cannot block other lookups.
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: Mutex<FxHashMap<String, TypeDescriptor>>,
}

impl TypeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously resolved descriptor by exact key.
    pub fn get(&self, key: &str) -> Option<TypeDescriptor> {
        self.entries.lock().get(key).cloned()
    }

    /// Record a successful resolution.
    pub fn insert(&self, key: impl Into<String>, descriptor: TypeDescriptor) {
        self.entries.lock().insert(key.into(), descriptor);
    }

    /// Drop every entry.
    ///
    /// This is the host-driven invalidation hook for module reloads.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let dropped = entries.len();
        entries.clear();
        debug!("[TYPE_CACHE] cleared {dropped} entries");
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
