//! SettlementStore — the singleton deployment root
//!
//! Owns the registry and one vault per registered asset. This is the
//! capability boundary of the core: collaborators reach every mutating
//! operation through this struct, and the registry's tables are never
//! handed out mutably.
//!
//! Asset registration is the one place registry and vault construction
//! are coupled: recording an identity also provisions its empty vault.

use std::collections::HashMap;

use types::asset::AssetIdentity;
use types::ids::{Address, AssetIndex, PoolIndex, SwapId};

use crate::errors::{RegistryError, SettlementError};
use crate::events::SettlementEvent;
use crate::registry::Registry;
use crate::vault::Vault;

/// Root context owning all settlement state for one deployment.
#[derive(Debug)]
pub struct SettlementStore {
    registry: Registry,
    vaults: HashMap<AssetIndex, Vault>,
}

impl SettlementStore {
    /// Initialize all settlement state, owned by the deploying
    /// principal. Constructing a second store for the same deployment
    /// replaces the first wholesale; there is no partial
    /// re-initialization.
    pub fn new(deployer: Address) -> Self {
        Self {
            registry: Registry::new(deployer),
            vaults: HashMap::new(),
        }
    }

    /// Read access to the control plane.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ───────────────────────── Asset Registration ─────────────────────────

    /// Register an asset index and provision its vault. Deployer-only.
    pub fn register_asset(
        &mut self,
        caller: &Address,
        asset_index: AssetIndex,
        asset: AssetIdentity,
    ) -> Result<(), SettlementError> {
        self.registry
            .register_asset(caller, asset_index, asset.clone())?;
        self.vaults.insert(asset_index, Vault::new(asset));
        Ok(())
    }

    /// Look up the vault custodying an asset.
    pub fn vault(&self, asset_index: AssetIndex) -> Result<&Vault, SettlementError> {
        self.vaults
            .get(&asset_index)
            .ok_or_else(|| RegistryError::AssetNotFound { asset_index }.into())
    }

    /// Mutable access to an asset's vault, for funds operations.
    pub fn vault_mut(&mut self, asset_index: AssetIndex) -> Result<&mut Vault, SettlementError> {
        self.vaults
            .get_mut(&asset_index)
            .ok_or_else(|| RegistryError::AssetNotFound { asset_index }.into())
    }

    // ───────────────────────── Pool Bookkeeping ─────────────────────────

    /// Record a pool's owner (pool-management collaborator surface).
    pub fn record_pool_owner(
        &mut self,
        caller: &Address,
        pool_index: PoolIndex,
        owner: Address,
    ) -> Result<(), SettlementError> {
        self.registry.record_pool_owner(caller, pool_index, owner)?;
        Ok(())
    }

    /// Authorize an operating principal for a pool (pool-management
    /// collaborator surface).
    pub fn authorize_for_pool(
        &mut self,
        caller: &Address,
        address: Address,
        pool_index: PoolIndex,
    ) -> Result<(), SettlementError> {
        self.registry.authorize_for_pool(caller, address, pool_index)?;
        Ok(())
    }

    // ───────────────────────── Swap Lifecycle ─────────────────────────

    /// Insert a posted-swap record.
    pub fn add_posted_swap(
        &mut self,
        swap_id: SwapId,
        pool_index: PoolIndex,
        from_address: Address,
    ) -> Result<(), SettlementError> {
        self.registry
            .add_posted_swap(swap_id, pool_index, from_address)?;
        Ok(())
    }

    /// Remove a posted-swap record, returning `(pool_index, from_address)`.
    pub fn remove_posted_swap(
        &mut self,
        swap_id: SwapId,
    ) -> Result<(PoolIndex, Address), SettlementError> {
        Ok(self.registry.remove_posted_swap(swap_id)?)
    }

    /// Insert a locked-swap record.
    pub fn add_locked_swap(
        &mut self,
        swap_id: SwapId,
        pool_index: PoolIndex,
        until: i64,
        recipient: Address,
    ) -> Result<(), SettlementError> {
        self.registry
            .add_locked_swap(swap_id, pool_index, until, recipient)?;
        Ok(())
    }

    /// Remove a locked-swap record, returning `(pool_index, until, recipient)`.
    pub fn remove_locked_swap(
        &mut self,
        swap_id: SwapId,
    ) -> Result<(PoolIndex, i64, Address), SettlementError> {
        Ok(self.registry.remove_locked_swap(swap_id)?)
    }

    // ───────────────────────── Events ─────────────────────────

    /// Drain the registry's event log (consume and clear). The host
    /// calls this after each committed transaction; vault events are
    /// drained per vault via [`vault_mut`](Self::vault_mut).
    pub fn drain_registry_events(&mut self) -> Vec<SettlementEvent> {
        self.registry.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VaultError;
    use crate::funds::Funds;
    use rust_decimal::Decimal;

    fn deployer() -> Address {
        Address::new("0xdeployer")
    }

    fn usdc() -> AssetIdentity {
        AssetIdentity::new(Address::new("0x1"), "coin", "USDC")
    }

    fn setup_store() -> SettlementStore {
        let mut store = SettlementStore::new(deployer());
        store
            .register_asset(&deployer(), AssetIndex::new(1), usdc())
            .unwrap();
        store
    }

    #[test]
    fn test_register_asset_provisions_vault() {
        let store = setup_store();
        let vault = store.vault(AssetIndex::new(1)).unwrap();
        assert_eq!(vault.asset(), &usdc());
        assert_eq!(vault.total_custodied(), Decimal::ZERO);
    }

    #[test]
    fn test_register_asset_unauthorized_provisions_nothing() {
        let mut store = SettlementStore::new(deployer());
        let result = store.register_asset(&Address::new("0xeve"), AssetIndex::new(1), usdc());
        assert!(matches!(
            result,
            Err(SettlementError::Registry(RegistryError::NotAuthorized))
        ));
        assert!(store.vault(AssetIndex::new(1)).is_err());
    }

    #[test]
    fn test_duplicate_registration_keeps_original_vault() {
        let mut store = setup_store();
        store
            .vault_mut(AssetIndex::new(1))
            .unwrap()
            .deposit_to_pool(PoolIndex::new(7), Funds::new(usdc(), Decimal::from(10)))
            .unwrap();

        let other = AssetIdentity::new(Address::new("0x2"), "coin", "OTHER");
        let result = store.register_asset(&deployer(), AssetIndex::new(1), other);
        assert!(matches!(
            result,
            Err(SettlementError::Registry(RegistryError::AlreadyRegistered { .. }))
        ));

        // The original vault and its balances are untouched.
        let vault = store.vault(AssetIndex::new(1)).unwrap();
        assert_eq!(vault.asset(), &usdc());
        assert_eq!(vault.pool_balance(PoolIndex::new(7)), Decimal::from(10));
    }

    #[test]
    fn test_vault_lookup_unregistered() {
        let store = setup_store();
        assert!(matches!(
            store.vault(AssetIndex::new(2)),
            Err(SettlementError::Registry(RegistryError::AssetNotFound { .. }))
        ));
    }

    #[test]
    fn test_match_asset_type_through_store() {
        let store = setup_store();
        store
            .registry()
            .match_asset_type(AssetIndex::new(1), &usdc())
            .unwrap();
    }

    #[test]
    fn test_drain_registry_events_through_store() {
        let mut store = setup_store();
        store
            .add_posted_swap(
                SwapId::from_bytes([1; 32]),
                PoolIndex::new(7),
                Address::new("0xalice"),
            )
            .unwrap();

        // AssetRegistered from setup, then the post.
        let events = store.drain_registry_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], SettlementEvent::SwapPosted(_)));

        // Drained: the log is empty until the next operation.
        assert!(store.registry().events().is_empty());
        assert!(store.drain_registry_events().is_empty());
    }

    #[test]
    fn test_vault_error_surfaces_through_settlement_error() {
        let mut store = setup_store();
        let result = store
            .vault_mut(AssetIndex::new(1))
            .unwrap()
            .withdraw_from_pool(PoolIndex::new(7), Decimal::from(1))
            .map_err(SettlementError::from);
        assert!(matches!(
            result,
            Err(SettlementError::Vault(VaultError::InsufficientBalance { .. }))
        ));
    }
}
