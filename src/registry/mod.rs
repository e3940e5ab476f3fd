//! The host's loaded type universe: descriptors, providers, and the cache.
//!
//! A [`TypeRegistry`] holds the type-providing modules ([`TypeProvider`]) the
//! host has loaded; each one enumerates component-capable [`TypeDescriptor`]s
//! and answers exact qualified-name lookups. The [`TypeCache`] memoizes
//! successful resolutions for the lifetime of the process.
//!
//! Resolution logic lives in [`crate::resolve`]; this module only models the
//! universe being searched.

mod cache;
mod descriptor;
mod provider;

pub use cache::TypeCache;
pub use descriptor::{TYPE_QUALIFIER, TypeDescriptor};
pub use provider::{ProviderError, StaticTypeProvider, TypeProvider, TypeRegistry};
