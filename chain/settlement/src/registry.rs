//! Registry — asset identity, pool lookups, and swap-metadata lifecycle
//!
//! Single source of truth for the control plane:
//! - Asset registry (asset index -> structural identity, permanent)
//! - Pool ownership and pool authorization (read surface for the core,
//!   written by the pool-management collaborator)
//! - Posted and locked swap tables
//!
//! Every operation is synchronous and atomic: it validates first and
//! mutates only once all checks pass, so a failed call leaves no trace.

use std::collections::HashMap;

use types::asset::AssetIdentity;
use types::ids::{Address, AssetIndex, PoolIndex, SwapId};

use crate::errors::RegistryError;
use crate::events::{
    AssetRegistered, SettlementEvent, SwapLocked, SwapPostRemoved, SwapPosted, SwapUnlocked,
};
use crate::security::{AccessControl, RetiredSwaps};

/// Record of a swap that was posted and not yet resolved.
///
/// Existence of this record is the sole evidence the swap is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedSwap {
    /// Pool providing liquidity for the swap
    pub pool_index: PoolIndex,
    /// Depositor/initiator principal
    pub from_address: Address,
}

/// Record of a swap whose funds left the pool's available balance,
/// pending proof-of-completion or timeout-based reclaim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedSwap {
    pub pool_index: PoolIndex,
    /// Absolute expiry timestamp (epoch seconds)
    pub until: i64,
    pub recipient: Address,
}

/// Control-plane store for the settlement core.
#[derive(Debug)]
pub struct Registry {
    /// Asset index -> registered identity (permanent, no removal)
    assets: HashMap<AssetIndex, AssetIdentity>,
    /// Pool index -> owner principal
    pool_owners: HashMap<PoolIndex, Address>,
    /// Authorized principal -> pool index (reverse index)
    pool_of: HashMap<Address, PoolIndex>,
    /// In-flight posted swaps
    posted: HashMap<SwapId, PostedSwap>,
    /// In-flight locked swaps
    locked: HashMap<SwapId, LockedSwap>,
    /// Resolved swap ids, tombstoned against reposting
    retired: RetiredSwaps,
    /// Deployer-gated access control
    access_control: AccessControl,
    /// Emitted events log (append-only)
    events: Vec<SettlementEvent>,
}

impl Registry {
    /// Create the registry's tables, owned by the deploying principal.
    ///
    /// Construction is initialization; constructing a second registry
    /// for the same deployment replaces the first wholesale.
    pub(crate) fn new(deployer: Address) -> Self {
        Self {
            assets: HashMap::new(),
            pool_owners: HashMap::new(),
            pool_of: HashMap::new(),
            posted: HashMap::new(),
            locked: HashMap::new(),
            retired: RetiredSwaps::new(),
            access_control: AccessControl::new(deployer),
            events: Vec::new(),
        }
    }

    // ───────────────────────── Asset Registry ─────────────────────────

    /// Register an asset index. Deployer-only, at most once per index.
    pub(crate) fn register_asset(
        &mut self,
        caller: &Address,
        asset_index: AssetIndex,
        asset: AssetIdentity,
    ) -> Result<(), RegistryError> {
        if !self.access_control.is_deployer(caller) {
            return Err(RegistryError::NotAuthorized);
        }
        if self.assets.contains_key(&asset_index) {
            return Err(RegistryError::AlreadyRegistered { asset_index });
        }

        self.assets.insert(asset_index, asset.clone());
        self.events
            .push(SettlementEvent::AssetRegistered(AssetRegistered {
                asset_index,
                asset,
            }));
        Ok(())
    }

    /// Look up the registered identity for an asset index.
    pub fn asset_type_for_index(
        &self,
        asset_index: AssetIndex,
    ) -> Result<&AssetIdentity, RegistryError> {
        self.assets
            .get(&asset_index)
            .ok_or(RegistryError::AssetNotFound { asset_index })
    }

    /// Assert that `claimed` is exactly the identity registered for
    /// `asset_index`, comparing the full origin/module/name triple.
    ///
    /// This is the sole type-safety gate preventing a caller from moving
    /// the wrong asset against a pool registered for a different one.
    pub fn match_asset_type(
        &self,
        asset_index: AssetIndex,
        claimed: &AssetIdentity,
    ) -> Result<(), RegistryError> {
        let expected = self.asset_type_for_index(asset_index)?;
        if expected != claimed {
            return Err(RegistryError::TypeMismatch {
                asset_index,
                expected: expected.clone(),
                found: claimed.clone(),
            });
        }
        Ok(())
    }

    // ───────────────────────── Pool Lookups ─────────────────────────

    /// Record a pool's owner. Write surface for the pool-management
    /// collaborator; deployer-gated.
    pub(crate) fn record_pool_owner(
        &mut self,
        caller: &Address,
        pool_index: PoolIndex,
        owner: Address,
    ) -> Result<(), RegistryError> {
        if !self.access_control.is_deployer(caller) {
            return Err(RegistryError::NotAuthorized);
        }
        self.pool_owners.insert(pool_index, owner);
        Ok(())
    }

    /// Authorize an operating principal for a pool. Write surface for
    /// the pool-management collaborator; deployer-gated.
    pub(crate) fn authorize_for_pool(
        &mut self,
        caller: &Address,
        address: Address,
        pool_index: PoolIndex,
    ) -> Result<(), RegistryError> {
        if !self.access_control.is_deployer(caller) {
            return Err(RegistryError::NotAuthorized);
        }
        self.pool_of.insert(address, pool_index);
        Ok(())
    }

    /// Resolve a pool's owner principal.
    pub fn owner_of_pool(&self, pool_index: PoolIndex) -> Result<&Address, RegistryError> {
        self.pool_owners
            .get(&pool_index)
            .ok_or(RegistryError::PoolNotFound { pool_index })
    }

    /// Resolve which pool an operating principal may act for.
    pub fn pool_index_of(&self, address: &Address) -> Result<PoolIndex, RegistryError> {
        self.pool_of
            .get(address)
            .copied()
            .ok_or_else(|| RegistryError::PoolNotAuthorized {
                address: address.clone(),
            })
    }

    // ───────────────────────── Posted Swaps ─────────────────────────

    /// Insert a posted-swap record.
    ///
    /// Rejects an id that is currently posted, currently locked, or was
    /// ever resolved (retired). Swap-id construction is validated by the
    /// caller; no other validation happens here.
    pub(crate) fn add_posted_swap(
        &mut self,
        swap_id: SwapId,
        pool_index: PoolIndex,
        from_address: Address,
    ) -> Result<(), RegistryError> {
        if self.posted.contains_key(&swap_id)
            || self.locked.contains_key(&swap_id)
            || self.retired.is_retired(&swap_id)
        {
            return Err(RegistryError::SwapAlreadyExists { swap_id });
        }

        self.posted.insert(
            swap_id,
            PostedSwap {
                pool_index,
                from_address: from_address.clone(),
            },
        );
        self.events.push(SettlementEvent::SwapPosted(SwapPosted {
            swap_id,
            pool_index,
            from_address,
        }));
        Ok(())
    }

    /// Remove a posted-swap record, returning its fields and retiring
    /// the id against any repost.
    pub(crate) fn remove_posted_swap(
        &mut self,
        swap_id: SwapId,
    ) -> Result<(PoolIndex, Address), RegistryError> {
        let record = self
            .posted
            .remove(&swap_id)
            .ok_or(RegistryError::SwapNotFound { swap_id })?;

        self.retired.retire(swap_id);
        self.events
            .push(SettlementEvent::SwapPostRemoved(SwapPostRemoved {
                swap_id,
                pool_index: record.pool_index,
            }));
        Ok((record.pool_index, record.from_address))
    }

    /// Read a posted-swap record without consuming it.
    pub fn posted_swap(&self, swap_id: &SwapId) -> Option<&PostedSwap> {
        self.posted.get(swap_id)
    }

    // ───────────────────────── Locked Swaps ─────────────────────────

    /// Insert a locked-swap record.
    ///
    /// A posted record for the same id is the normal lifecycle and does
    /// not conflict; an existing locked record or a retired id does.
    pub(crate) fn add_locked_swap(
        &mut self,
        swap_id: SwapId,
        pool_index: PoolIndex,
        until: i64,
        recipient: Address,
    ) -> Result<(), RegistryError> {
        if self.locked.contains_key(&swap_id) || self.retired.is_retired(&swap_id) {
            return Err(RegistryError::SwapAlreadyExists { swap_id });
        }

        self.locked.insert(
            swap_id,
            LockedSwap {
                pool_index,
                until,
                recipient: recipient.clone(),
            },
        );
        self.events.push(SettlementEvent::SwapLocked(SwapLocked {
            swap_id,
            pool_index,
            until,
            recipient,
        }));
        Ok(())
    }

    /// Remove a locked-swap record, returning its fields and retiring
    /// the id.
    pub(crate) fn remove_locked_swap(
        &mut self,
        swap_id: SwapId,
    ) -> Result<(PoolIndex, i64, Address), RegistryError> {
        let record = self
            .locked
            .remove(&swap_id)
            .ok_or(RegistryError::SwapNotFound { swap_id })?;

        self.retired.retire(swap_id);
        self.events
            .push(SettlementEvent::SwapUnlocked(SwapUnlocked {
                swap_id,
                pool_index: record.pool_index,
            }));
        Ok((record.pool_index, record.until, record.recipient))
    }

    /// Read a locked-swap record without consuming it.
    pub fn locked_swap(&self, swap_id: &SwapId) -> Option<&LockedSwap> {
        self.locked.get(swap_id)
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[SettlementEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<SettlementEvent> {
        std::mem::take(&mut self.events)
    }
}
