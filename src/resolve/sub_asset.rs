//! Sub-asset resolution: merge a path's three enumeration sources, then
//! select by requested name or implicitly when only one thing exists.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::asset::AssetCatalog;
use crate::base::SubAssetId;

use super::outcome::{ResolveError, SubAssetOutcome};

/// Resolves sub-asset references against the host's asset catalog.
///
/// A short-lived view over the catalog, like the other resolvers.
pub struct SubAssetResolver<'a> {
    catalog: &'a AssetCatalog,
}

impl<'a> SubAssetResolver<'a> {
    /// Create a resolver over the given catalog.
    pub fn new(catalog: &'a AssetCatalog) -> Self {
        Self { catalog }
    }

    /// The merged sub-asset set bound to a path.
    ///
    /// Union of the primary slot, the co-located list, and the
    /// representation list, deduplicated by identity (two sources routinely
    /// surface the same resource) and sorted ordinally by name for
    /// deterministic reporting.
    pub fn collect(&self, asset_path: &str) -> Vec<SubAssetId> {
        let mut seen = FxHashSet::default();
        let mut merged = Vec::new();

        if let Some(id) = self.catalog.primary_at(asset_path)
            && seen.insert(id)
        {
            merged.push(id);
        }
        for &id in self.catalog.colocated_at(asset_path) {
            if seen.insert(id) {
                merged.push(id);
            }
        }
        for &id in self.catalog.representations_at(asset_path) {
            if seen.insert(id) {
                merged.push(id);
            }
        }

        merged.sort_by(|&a, &b| self.name_of(a).cmp(self.name_of(b)));
        trace!(
            "[SUB_ASSET] '{}' exposes {} sub-asset(s)",
            asset_path,
            merged.len()
        );
        merged
    }

    /// The names of the merged set, in the same sorted order as
    /// [`Self::collect`].
    pub fn names(&self, asset_path: &str) -> Vec<SmolStr> {
        self.collect(asset_path)
            .into_iter()
            .map(|id| SmolStr::new(self.name_of(id)))
            .collect()
    }

    /// Select one sub-asset at a path, by name or implicitly.
    ///
    /// With a requested name (non-empty after trimming), an exact ordinal
    /// match is tried over the whole merged set first, then a case-folded
    /// match (full folding, not ASCII-only); within each tier the first
    /// match in sorted order wins. With no requested name, a merged set of
    /// exactly one is selected implicitly; anything else needs the caller
    /// to pick.
    pub fn resolve(
        &self,
        asset_path: &str,
        requested: Option<&str>,
    ) -> Result<SubAssetOutcome, ResolveError> {
        let path = asset_path.trim();
        if path.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        let merged = self.collect(path);
        let requested = requested.map(str::trim).filter(|name| !name.is_empty());

        if let Some(want) = requested {
            if let Some(&id) = merged.iter().find(|&&id| self.name_of(id) == want) {
                debug!("[SUB_ASSET] '{want}' matched exactly at '{path}'");
                return Ok(SubAssetOutcome::Unique(id));
            }
            if let Some(&id) = merged
                .iter()
                .find(|&&id| eq_ignore_case(self.name_of(id), want))
            {
                debug!("[SUB_ASSET] '{want}' matched case-insensitively at '{path}'");
                return Ok(SubAssetOutcome::Unique(id));
            }
        } else if merged.len() == 1 {
            debug!("[SUB_ASSET] implicit single selection at '{path}'");
            return Ok(SubAssetOutcome::Unique(merged[0]));
        }

        let names: Vec<String> = merged
            .iter()
            .map(|&id| self.name_of(id).to_string())
            .collect();
        debug!(
            "[SUB_ASSET] no selection at '{}' (requested {:?}, {} available)",
            path,
            requested,
            names.len()
        );
        Ok(if merged.len() > 1 {
            SubAssetOutcome::NeedsDisambiguation { names }
        } else {
            SubAssetOutcome::NotFound { names }
        })
    }

    fn name_of(&self, id: SubAssetId) -> &str {
        self.catalog.name(id).unwrap_or("")
    }
}

/// Case equality under full lowercase folding: `IDLÉ_0` matches `Idlé_0`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
