//! Types library for the atomic-swap settlement engine
//!
//! This library provides the identifier and asset-identity definitions
//! shared across the settlement system, ensuring type safety between
//! swap ids, pool indices, asset indices, and ledger principals.
//!
//! # Version
//! v1.0.0 - Frozen type surface
//!
//! # Modules
//! - `ids`: Unique identifiers (SwapId, Address, AssetIndex, PoolIndex)
//! - `asset`: Structural asset-type identity (origin + module + name)

// Public modules
pub mod ids;
pub mod asset;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::asset::*;
    pub use crate::ids::*;
}
