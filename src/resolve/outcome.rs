use thiserror::Error;

use crate::base::SubAssetId;

/// Outcome of a resolution: one target, nothing, or several candidates.
///
/// Ambiguity always carries the bounded, deduplicated, ordinally sorted
/// candidate listing and is never collapsed to a "best guess"; callers that
/// want one target must re-query with a more specific reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution<T> {
    /// Exactly one match.
    Unique(T),
    /// No matches.
    NotFound,
    /// More than one match, with human-readable candidates to pick from.
    Ambiguous(Vec<String>),
}

impl<T> Resolution<T> {
    /// The resolved value, if unique.
    pub fn value(&self) -> Option<&T> {
        match self {
            Resolution::Unique(value) => Some(value),
            _ => None,
        }
    }

    /// Consume the outcome, returning the value if unique.
    pub fn into_value(self) -> Option<T> {
        match self {
            Resolution::Unique(value) => Some(value),
            _ => None,
        }
    }

    /// Whether exactly one match was found.
    pub fn is_unique(&self) -> bool {
        matches!(self, Resolution::Unique(_))
    }

    /// Whether nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }

    /// Whether more than one match was found.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::Ambiguous(_))
    }

    /// Candidate listing for an ambiguous outcome, empty otherwise.
    pub fn candidates(&self) -> &[String] {
        match self {
            Resolution::Ambiguous(candidates) => candidates,
            _ => &[],
        }
    }

    /// Map the unique value, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Unique(value) => Resolution::Unique(f(value)),
            Resolution::NotFound => Resolution::NotFound,
            Resolution::Ambiguous(candidates) => Resolution::Ambiguous(candidates),
        }
    }
}

/// Outcome of sub-asset resolution against one asset path.
///
/// Both failure variants carry the full sorted name listing of the merged
/// set, so a caller can prompt for disambiguation without a second
/// enumeration pass. The variants are distinguished by cause: nothing to
/// pick from versus several things and no way to pick one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubAssetOutcome {
    /// Exactly one sub-asset selected, explicitly or implicitly.
    Unique(SubAssetId),
    /// Nothing matched; `names` lists what the path does expose (possibly
    /// nothing at all).
    NotFound { names: Vec<String> },
    /// Several sub-assets and no matching name to pick one; the caller must
    /// supply (or correct) a name.
    NeedsDisambiguation { names: Vec<String> },
}

impl SubAssetOutcome {
    /// The selected sub-asset, if unique.
    pub fn id(&self) -> Option<SubAssetId> {
        match self {
            SubAssetOutcome::Unique(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether exactly one sub-asset was selected.
    pub fn is_unique(&self) -> bool {
        matches!(self, SubAssetOutcome::Unique(_))
    }

    /// The name listing attached to a failure, empty on success.
    pub fn names(&self) -> &[String] {
        match self {
            SubAssetOutcome::NotFound { names } => names,
            SubAssetOutcome::NeedsDisambiguation { names } => names,
            SubAssetOutcome::Unique(_) => &[],
        }
    }
}

/// Invalid-input failures, detected before any search begins.
///
/// Everything a completed search can report (not-found, ambiguous) lives in
/// the outcome enums instead; this type never stands in for an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The query string was empty or whitespace-only.
    #[error("query must not be empty")]
    EmptyQuery,
}
