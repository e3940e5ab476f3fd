//! The host's asset catalog: asset paths and their bound sub-assets.
//!
//! [`AssetCatalog`] models the three enumeration sources hosts expose for a
//! path (primary slot, co-located list, representation list). Merging and
//! name matching live in [`crate::resolve`].

mod catalog;

pub use catalog::{AssetCatalog, SubAsset};
