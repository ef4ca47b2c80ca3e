//! Settlement events
//!
//! Events are immutable records appended by registry and vault
//! operations. The host drains them after each committed transaction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::asset::AssetIdentity;
use types::ids::{Address, AssetIndex, PoolIndex, SwapId};

/// A new asset index was registered and its vault provisioned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRegistered {
    pub asset_index: AssetIndex,
    pub asset: AssetIdentity,
}

/// Funds entered a pool's available balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolDeposited {
    pub pool_index: PoolIndex,
    pub amount: Decimal,
}

/// Funds left a pool's available balance and custody entirely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolWithdrawn {
    pub pool_index: PoolIndex,
    pub amount: Decimal,
}

/// A swap was posted against a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPosted {
    pub swap_id: SwapId,
    pub pool_index: PoolIndex,
    pub from_address: Address,
}

/// A posted-swap record was removed (released or cancelled by the caller)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPostRemoved {
    pub swap_id: SwapId,
    pub pool_index: PoolIndex,
}

/// A swap entered the locked phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapLocked {
    pub swap_id: SwapId,
    pub pool_index: PoolIndex,
    pub until: i64,
    pub recipient: Address,
}

/// A locked-swap record was removed (completed or reclaimed on timeout)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapUnlocked {
    pub swap_id: SwapId,
    pub pool_index: PoolIndex,
}

/// Funds were escrowed under a swap id (from a pool or from outside)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEscrowed {
    pub swap_id: SwapId,
    pub amount: Decimal,
}

/// A swap's pending balance was released from custody
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReleased {
    pub swap_id: SwapId,
    pub amount: Decimal,
}

/// Enum wrapper for all settlement events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementEvent {
    AssetRegistered(AssetRegistered),
    PoolDeposited(PoolDeposited),
    PoolWithdrawn(PoolWithdrawn),
    SwapPosted(SwapPosted),
    SwapPostRemoved(SwapPostRemoved),
    SwapLocked(SwapLocked),
    SwapUnlocked(SwapUnlocked),
    SwapEscrowed(SwapEscrowed),
    SwapReleased(SwapReleased),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_posted_serialization() {
        let event = SwapPosted {
            swap_id: SwapId::from_bytes([1; 32]),
            pool_index: PoolIndex::new(7),
            from_address: Address::new("0xalice"),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: SwapPosted = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_swap_locked_serialization() {
        let event = SwapLocked {
            swap_id: SwapId::from_bytes([2; 32]),
            pool_index: PoolIndex::new(7),
            until: 1_700_003_600,
            recipient: Address::new("0xbob"),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: SwapLocked = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_pool_deposited_serialization() {
        let event = PoolDeposited {
            pool_index: PoolIndex::new(1),
            amount: Decimal::from(1000),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deser: PoolDeposited = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deser);
    }

    #[test]
    fn test_settlement_event_enum_variant() {
        let event = SettlementEvent::SwapReleased(SwapReleased {
            swap_id: SwapId::from_bytes([3; 32]),
            amount: Decimal::from(100),
        });
        assert!(matches!(event, SettlementEvent::SwapReleased(_)));
    }
}
