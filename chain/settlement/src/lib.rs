//! Bookkeeping Core for Atomic-Swap Settlement
//!
//! This crate implements the state container of the cross-chain swap
//! engine: liquidity-pool ownership, per-asset funds custody, and the
//! posted/locked lifecycle records for in-flight swaps. Swap-id
//! cryptography, deadline computation, and transaction submission live
//! in the outward modules that call into this core.
//!
//! # Modules
//! - `errors`: Settlement-specific error types
//! - `events`: Settlement event taxonomy
//! - `security`: Access control and retired-swap tracking
//! - `funds`: Move-only custodied value
//! - `registry`: Asset identity, pool lookups, swap-metadata lifecycle
//! - `vault`: Per-asset pool and escrow balances
//! - `store`: Deployment root coupling registry and vaults
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod errors;
pub mod events;
pub mod security;
pub mod funds;
pub mod registry;
pub mod vault;
pub mod store;

/// Settlement ABI version — frozen after release
pub const SETTLEMENT_ABI_VERSION: &str = "1.0.0";
