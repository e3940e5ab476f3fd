use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::SubAssetId;

/// A named, identity-distinct resource bound to an asset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAsset {
    name: SmolStr,
}

impl SubAsset {
    /// The sub-asset's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The three per-path sources a host exposes sub-assets through.
///
/// They mirror the host's loaders and routinely overlap: the primary slot
/// and the co-located list usually both surface the primary resource.
/// Consumers merge them with identity dedup, never name dedup.
#[derive(Debug, Clone, Default)]
struct AssetEntry {
    primary: Option<SubAssetId>,
    colocated: Vec<SubAssetId>,
    representations: Vec<SubAssetId>,
}

/// Host-owned table of asset paths and the sub-assets bound to them.
///
/// Sub-assets are minted once into an arena and then bound to any number of
/// source lists; the arena index is the identity dedup key. Paths keep
/// insertion order for stable iteration.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    sub_assets: Vec<SubAsset>,
    entries: IndexMap<String, AssetEntry>,
}

impl AssetCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new sub-asset identity.
    pub fn add_sub_asset(&mut self, name: impl Into<SmolStr>) -> SubAssetId {
        let id = SubAssetId::new(self.sub_assets.len());
        self.sub_assets.push(SubAsset { name: name.into() });
        id
    }

    /// Bind a sub-asset as the primary resource of a path.
    pub fn set_primary(&mut self, path: impl Into<String>, id: SubAssetId) {
        self.entries.entry(path.into()).or_default().primary = Some(id);
    }

    /// Append a sub-asset to a path's co-located list.
    pub fn add_colocated(&mut self, path: impl Into<String>, id: SubAssetId) {
        self.entries
            .entry(path.into())
            .or_default()
            .colocated
            .push(id);
    }

    /// Append a sub-asset to a path's representation list.
    pub fn add_representation(&mut self, path: impl Into<String>, id: SubAssetId) {
        self.entries
            .entry(path.into())
            .or_default()
            .representations
            .push(id);
    }

    /// Look up a sub-asset by identity.
    pub fn sub_asset(&self, id: SubAssetId) -> Option<&SubAsset> {
        self.sub_assets.get(id.index())
    }

    /// A sub-asset's name, or `None` for a stale id.
    pub fn name(&self, id: SubAssetId) -> Option<&str> {
        self.sub_asset(id).map(SubAsset::name)
    }

    /// The primary resource bound to a path, if any.
    pub fn primary_at(&self, path: &str) -> Option<SubAssetId> {
        self.entries.get(path).and_then(|e| e.primary)
    }

    /// The co-located resources bound to a path, in binding order.
    pub fn colocated_at(&self, path: &str) -> &[SubAssetId] {
        self.entries
            .get(path)
            .map(|e| e.colocated.as_slice())
            .unwrap_or(&[])
    }

    /// The representation resources bound to a path, in binding order.
    pub fn representations_at(&self, path: &str) -> &[SubAssetId] {
        self.entries
            .get(path)
            .map(|e| e.representations.as_slice())
            .unwrap_or(&[])
    }

    /// All known asset paths, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of minted sub-assets.
    pub fn sub_asset_count(&self) -> usize {
        self.sub_assets.len()
    }
}
