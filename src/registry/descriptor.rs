use std::fmt;

use smol_str::SmolStr;

/// Namespace separator in fully-qualified type names (e.g. `Engine.Physics.Collider`).
///
/// A query containing this character is treated as qualified: it is resolved
/// by exact lookup only and never falls back to a short-name scan.
pub const TYPE_QUALIFIER: char = '.';

/// Identifies a component-capable type in the host's loaded type universe.
///
/// Every descriptor has a short name (`Collider`); most also carry the
/// fully-qualified form (`Engine.Physics.Collider`). Hosts may load types
/// with no qualified name at all, so it stays optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDescriptor {
    short: SmolStr,
    qualified: Option<SmolStr>,
}

impl TypeDescriptor {
    /// Create a descriptor with a short name only.
    pub fn new(short: impl Into<SmolStr>) -> Self {
        Self {
            short: short.into(),
            qualified: None,
        }
    }

    /// Create a descriptor from a fully-qualified name.
    ///
    /// The short name is the final qualifier segment, so
    /// `TypeDescriptor::qualified("Engine.Physics.Collider")` has short name
    /// `Collider`. A name with no qualifier yields equal short and qualified
    /// forms.
    pub fn qualified(qualified: impl Into<SmolStr>) -> Self {
        let qualified = qualified.into();
        let short = qualified
            .rsplit(TYPE_QUALIFIER)
            .next()
            .unwrap_or(qualified.as_str());
        Self {
            short: SmolStr::new(short),
            qualified: Some(qualified),
        }
    }

    /// The short (unqualified) type name.
    pub fn short_name(&self) -> &str {
        &self.short
    }

    /// The fully-qualified name, when the host reported one.
    pub fn qualified_name(&self) -> Option<&str> {
        self.qualified.as_deref()
    }

    /// Name used in candidate listings: qualified when available, else short.
    pub fn display_name(&self) -> &str {
        self.qualified.as_deref().unwrap_or(&self.short)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
