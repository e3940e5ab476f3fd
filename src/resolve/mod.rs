//! The resolution engine: turn loosely specified references into one target
//! or a bounded candidate listing.
//!
//! Three resolution families share one outcome shape ([`Resolution`]) and
//! one candidate reporter:
//!
//! - [`NodeResolver`] - path-or-name queries over the scene forest
//! - [`TypeResolver`] - short/qualified type names, scoped or global
//! - [`SubAssetResolver`] - named sub-assets bound to an asset path
//!
//! None of them mutate anything, pick a "best guess", or panic on bad
//! input; empty queries are [`ResolveError::EmptyQuery`] and everything a
//! completed search can report is an ordinary outcome value.

mod candidates;
mod outcome;
mod path;
mod sub_asset;
mod types;

pub use candidates::{MAX_CANDIDATES, candidate_paths};
pub use outcome::{Resolution, ResolveError, SubAssetOutcome};
pub use path::{MatchSet, NodeResolver};
pub use sub_asset::SubAssetResolver;
pub use types::{TYPE_SCAN_CAP, TypeResolver};
