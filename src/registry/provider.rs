use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use super::descriptor::TypeDescriptor;

/// Errors raised by type-providing modules.
///
/// These are unexpected faults, not misses: during a registry scan a failing
/// module is logged and skipped, never allowed to abort the scan or
/// masquerade as not-found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The module could not enumerate its types.
    #[error("module '{module}' failed type enumeration: {reason}")]
    Introspection { module: String, reason: String },

    /// The module failed while looking up a qualified name.
    #[error("module '{module}' failed qualified lookup: {reason}")]
    Lookup { module: String, reason: String },
}

impl ProviderError {
    /// Create an introspection error.
    pub fn introspection(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Introspection {
            module: module.into(),
            reason: reason.into(),
        }
    }

    /// Create a qualified-lookup error.
    pub fn lookup(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Lookup {
            module: module.into(),
            reason: reason.into(),
        }
    }
}

/// One type-providing module of the host's loaded type universe.
///
/// Implementations enumerate component-capable types only; anything a
/// provider returns is assumed attachable to a node. Providers must not
/// panic: failures are reported through [`ProviderError`] so the registry
/// scan can skip the module and continue.
pub trait TypeProvider {
    /// Module name, used in logs and fault reports.
    fn name(&self) -> &str;

    /// Exact lookup by fully-qualified name, as the module reports it.
    ///
    /// `Ok(None)` means the module does not contain the type; that is an
    /// ordinary miss, not a fault.
    fn lookup_qualified(&self, qualified: &str) -> Result<Option<TypeDescriptor>, ProviderError>;

    /// Enumerate every descriptor this module provides.
    fn descriptors(&self) -> Result<Vec<TypeDescriptor>, ProviderError>;
}

/// Provider backed by a fixed, in-memory descriptor list.
///
/// Covers static hosts and tests; dynamic hosts implement [`TypeProvider`]
/// over their own module metadata instead.
#[derive(Debug, Clone, Default)]
pub struct StaticTypeProvider {
    name: SmolStr,
    types: Vec<TypeDescriptor>,
}

impl StaticTypeProvider {
    /// Create an empty provider with the given module name.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Create a provider pre-populated with descriptors.
    pub fn with_types(name: impl Into<SmolStr>, types: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }

    /// Add a descriptor to this provider.
    pub fn add(&mut self, descriptor: TypeDescriptor) {
        self.types.push(descriptor);
    }
}

impl TypeProvider for StaticTypeProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup_qualified(&self, qualified: &str) -> Result<Option<TypeDescriptor>, ProviderError> {
        Ok(self
            .types
            .iter()
            .find(|d| d.qualified_name() == Some(qualified))
            .cloned())
    }

    fn descriptors(&self) -> Result<Vec<TypeDescriptor>, ProviderError> {
        Ok(self.types.clone())
    }
}

/// Ordered collection of the host's type-providing modules.
///
/// Registration order is scan order, and first-hit-wins rules in the type
/// resolver make it observable: register authoritative modules first. The
/// registry owns its providers and hands out the list for iteration; it has
/// no lookup logic of its own.
#[derive(Default)]
pub struct TypeRegistry {
    providers: Vec<Box<dyn TypeProvider>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider at the end of the scan order.
    pub fn register(&mut self, provider: impl TypeProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// The registered providers, in scan order.
    pub fn providers(&self) -> &[Box<dyn TypeProvider>] {
        &self.providers
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
