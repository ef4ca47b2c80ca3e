//! Unique identifier types for settlement entities
//!
//! Identifiers are opaque to this core: swap ids are constructed and
//! cryptographically verified by the outward swap-posting modules, and
//! principal addresses come from the host ledger. This crate only gives
//! them stable newtypes so they cannot be confused with one another.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in bytes of an encoded swap identifier.
pub const SWAP_ID_LEN: usize = 32;

/// Opaque fixed-format identifier for one atomic-swap instance.
///
/// Assumed globally unique per swap; uniqueness is the obligation of
/// the external module that constructs and verifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwapId([u8; SWAP_ID_LEN]);

impl SwapId {
    /// Wrap raw identifier bytes.
    pub fn from_bytes(bytes: [u8; SWAP_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string (64 hex digits, optional `0x` prefix).
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; SWAP_ID_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get the raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; SWAP_ID_LEN] {
        &self.0
    }
}

impl fmt::Display for SwapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Principal identifier on the host ledger (deployer, pool owner,
/// depositor, recipient).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Small integer index identifying a registered asset type (0–255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetIndex(u8);

impl AssetIndex {
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for AssetIndex {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for AssetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index identifying one liquidity pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolIndex(u64);

impl PoolIndex {
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PoolIndex {
    fn from(index: u64) -> Self {
        Self(index)
    }
}

impl fmt::Display for PoolIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_id_hex_round_trip() {
        let id = SwapId::from_bytes([0xab; 32]);
        let encoded = id.to_string();
        assert!(encoded.starts_with("0x"));
        assert_eq!(SwapId::from_hex(&encoded).unwrap(), id);
    }

    #[test]
    fn test_swap_id_from_hex_without_prefix() {
        let hex = "01".repeat(32);
        let id = SwapId::from_hex(&hex).unwrap();
        assert_eq!(id.as_bytes(), &[0x01; 32]);
    }

    #[test]
    fn test_swap_id_from_hex_wrong_length() {
        assert!(SwapId::from_hex("abcd").is_err());
    }

    #[test]
    fn test_swap_id_serde_transparent() {
        let id = SwapId::from_bytes([7; 32]);
        let json = serde_json::to_string(&id).unwrap();
        let back: SwapId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_address_display() {
        let addr = Address::new("0xdeployer");
        assert_eq!(addr.to_string(), "0xdeployer");
        assert_eq!(addr.as_str(), "0xdeployer");
    }

    #[test]
    fn test_asset_index_and_pool_index() {
        let asset = AssetIndex::new(1);
        let pool = PoolIndex::new(7);
        assert_eq!(asset.value(), 1);
        assert_eq!(pool.value(), 7);
        assert_eq!(pool.to_string(), "7");
    }

    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fuzz_swap_id_hex_round_trip(bytes in prop::array::uniform32(any::<u8>())) {
                let id = SwapId::from_bytes(bytes);
                prop_assert_eq!(SwapId::from_hex(&id.to_string()).unwrap(), id);
            }
        }
    }
}
