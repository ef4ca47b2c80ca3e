//! Shared security primitives for the settlement core
//!
//! Access control for deployer-gated operations and one-time-use
//! tracking for resolved swap ids.

use std::collections::HashSet;
use types::ids::{Address, SwapId};

/// Deployer-scoped access control.
///
/// The registry and every vault are owned by a single root principal.
/// Privileged operations (asset registration, pool bookkeeping writes)
/// must be invoked by that principal.
#[derive(Debug, Clone)]
pub struct AccessControl {
    deployer: Address,
}

impl AccessControl {
    /// Create access control bound to the deploying principal.
    pub fn new(deployer: Address) -> Self {
        Self { deployer }
    }

    /// Check if a caller is the deployer.
    pub fn is_deployer(&self, caller: &Address) -> bool {
        *caller == self.deployer
    }

    /// Get the deployer principal.
    pub fn deployer(&self) -> &Address {
        &self.deployer
    }
}

/// One-time-use tracker for resolved swap ids.
///
/// Removing a posted or locked swap retires its id permanently. A
/// retired id can never be posted again, closing the replay window
/// that would otherwise exist after a record is destroyed.
#[derive(Debug, Clone, Default)]
pub struct RetiredSwaps {
    retired: HashSet<SwapId>,
}

impl RetiredSwaps {
    /// Create a new empty tracker.
    pub fn new() -> Self {
        Self {
            retired: HashSet::new(),
        }
    }

    /// Check if a swap id has been retired.
    pub fn is_retired(&self, swap_id: &SwapId) -> bool {
        self.retired.contains(swap_id)
    }

    /// Retire a swap id. Returns `false` if it was already retired.
    pub fn retire(&mut self, swap_id: SwapId) -> bool {
        self.retired.insert(swap_id)
    }

    /// Number of retired ids.
    pub fn count(&self) -> usize {
        self.retired.len()
    }
}
