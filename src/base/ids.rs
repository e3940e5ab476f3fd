/// Unique identifier for a scene in the graph arena.
/// Uses u32 for compact storage (supports ~4 billion scenes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneId(pub u32);

impl SceneId {
    /// Create a new SceneId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a node in the graph arena.
///
/// The arena index is the node's stable identity: it is never reused for the
/// lifetime of the graph, so match-set deduplication keys on it rather than
/// on the (non-unique) node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a sub-asset in the catalog arena.
///
/// Identity-distinct: two catalog source lists may carry the same id, and
/// merging deduplicates on it, never on the sub-asset's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubAssetId(pub u32);

impl SubAssetId {
    /// Create a new SubAssetId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
