//! Foundation types for the Armature resolver.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SceneId`], [`NodeId`], [`SubAssetId`] - Arena identifiers
//!
//! Arena indices double as stable identities: every deduplication rule in the
//! resolver keys on an id, never on a display name.
//!
//! This module has NO dependencies on other armature modules.

mod ids;

pub use ids::{NodeId, SceneId, SubAssetId};
