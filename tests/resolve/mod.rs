//! Resolution engine tests
//!
//! Tests for the three resolution families:
//! - Node queries (bare name and structured path)
//! - Component type lookup (scoped, global, combined)
//! - Sub-asset selection against an asset path

pub mod tests_type_resolution;
