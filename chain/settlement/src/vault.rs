//! Vault — per-asset funds custody, partitioned by pool and by swap
//!
//! One vault instance exists per registered asset type. It never
//! interprets swap semantics; it only does balance arithmetic between
//! two categories:
//! - `in_pool[pool_index]`: a pool's available balance
//! - `pending[swap_id]`: escrow held against one in-flight swap
//!
//! Conservation invariant: the sum of both categories equals the total
//! custodied amount of the asset. Funds move between the categories or
//! leave custody as an owned `Funds` value; they are never created or
//! destroyed here.

use rust_decimal::Decimal;
use std::collections::HashMap;

use types::asset::AssetIdentity;
use types::ids::{PoolIndex, SwapId};

use crate::errors::VaultError;
use crate::events::{PoolDeposited, PoolWithdrawn, SettlementEvent, SwapEscrowed, SwapReleased};
use crate::funds::Funds;

/// Custody store for one asset type.
#[derive(Debug)]
pub struct Vault {
    /// The asset this vault custodies; every crossing `Funds` value
    /// must carry the same structural identity.
    asset: AssetIdentity,
    /// Available balance per pool. Entries persist once created, even
    /// at zero.
    in_pool: HashMap<PoolIndex, Decimal>,
    /// Escrowed balance per in-flight swap.
    pending: HashMap<SwapId, Decimal>,
    /// Emitted events log (append-only)
    events: Vec<SettlementEvent>,
}

impl Vault {
    /// Provision an empty vault for an asset. Called once, when the
    /// asset index is registered.
    pub(crate) fn new(asset: AssetIdentity) -> Self {
        Self {
            asset,
            in_pool: HashMap::new(),
            pending: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// The asset identity this vault custodies.
    pub fn asset(&self) -> &AssetIdentity {
        &self.asset
    }

    // ───────────────────────── Pool Balances ─────────────────────────

    /// Deposit funds into a pool's available balance.
    ///
    /// Creates the balance entry if absent, merges into it if present.
    pub fn deposit_to_pool(
        &mut self,
        pool_index: PoolIndex,
        funds: Funds,
    ) -> Result<(), VaultError> {
        self.check_asset(&funds)?;
        let amount = funds.amount();
        if amount <= Decimal::ZERO {
            return Err(VaultError::InvalidAmount);
        }

        let current = self.in_pool.get(&pool_index).copied().unwrap_or(Decimal::ZERO);
        let new_balance = current.checked_add(amount).ok_or(VaultError::Overflow)?;

        let (_, amount) = funds.into_parts();
        self.in_pool.insert(pool_index, new_balance);
        self.events.push(SettlementEvent::PoolDeposited(PoolDeposited {
            pool_index,
            amount,
        }));
        Ok(())
    }

    /// Withdraw an exact amount from a pool, returning custody of it.
    ///
    /// The balance entry persists (possibly at zero); it is never
    /// deleted.
    pub fn withdraw_from_pool(
        &mut self,
        pool_index: PoolIndex,
        amount: Decimal,
    ) -> Result<Funds, VaultError> {
        if amount <= Decimal::ZERO {
            return Err(VaultError::InvalidAmount);
        }
        self.debit_pool(pool_index, amount)?;

        self.events.push(SettlementEvent::PoolWithdrawn(PoolWithdrawn {
            pool_index,
            amount,
        }));
        Ok(Funds::new(self.asset.clone(), amount))
    }

    /// Get a pool's available balance (zero if no entry).
    pub fn pool_balance(&self, pool_index: PoolIndex) -> Decimal {
        self.in_pool
            .get(&pool_index)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    // ───────────────────────── Pending Escrow ─────────────────────────

    /// Atomically move an amount from a pool's available balance into
    /// escrow under a swap id.
    pub fn move_to_pending(
        &mut self,
        pool_index: PoolIndex,
        amount: Decimal,
        swap_id: SwapId,
    ) -> Result<(), VaultError> {
        if amount <= Decimal::ZERO {
            return Err(VaultError::InvalidAmount);
        }
        if self.pending.contains_key(&swap_id) {
            return Err(VaultError::AlreadyPending { swap_id });
        }
        self.debit_pool(pool_index, amount)?;

        self.pending.insert(swap_id, amount);
        self.events.push(SettlementEvent::SwapEscrowed(SwapEscrowed {
            swap_id,
            amount,
        }));
        Ok(())
    }

    /// Escrow caller-supplied funds under a swap id, bypassing any
    /// pool balance (funds originating outside a pool).
    pub fn escrow_external_funds(
        &mut self,
        swap_id: SwapId,
        funds: Funds,
    ) -> Result<(), VaultError> {
        self.check_asset(&funds)?;
        let amount = funds.amount();
        if amount <= Decimal::ZERO {
            return Err(VaultError::InvalidAmount);
        }
        if self.pending.contains_key(&swap_id) {
            return Err(VaultError::AlreadyPending { swap_id });
        }

        let (_, amount) = funds.into_parts();
        self.pending.insert(swap_id, amount);
        self.events.push(SettlementEvent::SwapEscrowed(SwapEscrowed {
            swap_id,
            amount,
        }));
        Ok(())
    }

    /// Release a swap's full pending balance, returning custody of it.
    ///
    /// The caller decides the destination (recipient on completion,
    /// depositor on reclaim); the vault only releases custody.
    pub fn release_pending(&mut self, swap_id: SwapId) -> Result<Funds, VaultError> {
        let amount = self
            .pending
            .remove(&swap_id)
            .ok_or(VaultError::PendingNotFound { swap_id })?;

        self.events.push(SettlementEvent::SwapReleased(SwapReleased {
            swap_id,
            amount,
        }));
        Ok(Funds::new(self.asset.clone(), amount))
    }

    /// Get a swap's pending balance (zero if no entry).
    pub fn pending_balance(&self, swap_id: &SwapId) -> Decimal {
        self.pending.get(swap_id).copied().unwrap_or(Decimal::ZERO)
    }

    /// Check whether a swap has a pending entry.
    pub fn is_pending(&self, swap_id: &SwapId) -> bool {
        self.pending.contains_key(swap_id)
    }

    /// Total custodied amount: all pool balances plus all escrow.
    ///
    /// Conservation witness for the deposits-minus-withdrawals
    /// invariant.
    pub fn total_custodied(&self) -> Decimal {
        let pooled: Decimal = self.in_pool.values().copied().sum();
        let escrowed: Decimal = self.pending.values().copied().sum();
        pooled + escrowed
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

    // ───────────────────────── Internal ─────────────────────────

    fn check_asset(&self, funds: &Funds) -> Result<(), VaultError> {
        if funds.asset() != &self.asset {
            return Err(VaultError::TypeMismatch {
                expected: self.asset.clone(),
                found: funds.asset().clone(),
            });
        }
        Ok(())
    }

    /// Debit with balance check. The entry is kept even when it reaches
    /// zero.
    fn debit_pool(&mut self, pool_index: PoolIndex, amount: Decimal) -> Result<(), VaultError> {
        let balance = self.in_pool.get_mut(&pool_index).ok_or_else(|| {
            VaultError::InsufficientBalance {
                pool_index,
                required: amount.to_string(),
                available: "0".to_string(),
            }
        })?;

        if *balance < amount {
            return Err(VaultError::InsufficientBalance {
                pool_index,
                required: amount.to_string(),
                available: balance.to_string(),
            });
        }

        *balance = balance.checked_sub(amount).ok_or(VaultError::Overflow)?;
        Ok(())
    }
}
