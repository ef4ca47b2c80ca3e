//! Settlement-specific error types
//!
//! Comprehensive error taxonomy for registry and vault operations.
//! Every error aborts the enclosing operation with no partial effect;
//! retries are the caller's responsibility.

use thiserror::Error;
use types::asset::AssetIdentity;
use types::ids::{Address, AssetIndex, PoolIndex, SwapId};

/// Registry-specific errors (control-plane state)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unauthorized: caller is not the deployer")]
    NotAuthorized,

    #[error("Asset index already registered: {asset_index}")]
    AlreadyRegistered { asset_index: AssetIndex },

    #[error("Asset index not registered: {asset_index}")]
    AssetNotFound { asset_index: AssetIndex },

    #[error("Asset type mismatch for index {asset_index}: registered {expected}, supplied {found}")]
    TypeMismatch {
        asset_index: AssetIndex,
        expected: AssetIdentity,
        found: AssetIdentity,
    },

    #[error("Pool not found: {pool_index}")]
    PoolNotFound { pool_index: PoolIndex },

    #[error("No pool authorized for address: {address}")]
    PoolNotAuthorized { address: Address },

    #[error("Swap already exists: {swap_id}")]
    SwapAlreadyExists { swap_id: SwapId },

    #[error("Swap not found: {swap_id}")]
    SwapNotFound { swap_id: SwapId },
}

/// Vault-specific errors (funds-custody state)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VaultError {
    #[error("Asset type mismatch: vault holds {expected}, funds are {found}")]
    TypeMismatch {
        expected: AssetIdentity,
        found: AssetIdentity,
    },

    #[error("Insufficient balance in pool {pool_index}: required {required}, available {available}")]
    InsufficientBalance {
        pool_index: PoolIndex,
        required: String,
        available: String,
    },

    #[error("Swap already has a pending balance: {swap_id}")]
    AlreadyPending { swap_id: SwapId },

    #[error("No pending balance for swap: {swap_id}")]
    PendingNotFound { swap_id: SwapId },

    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,
}

/// Top-level settlement error, wrapping both concerns for callers that
/// drive registry and vault operations together.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettlementError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),
}
