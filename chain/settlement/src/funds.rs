//! Move-only custodied funds
//!
//! `Funds` is the unit of value that crosses the vault boundary. It is
//! deliberately not `Clone` or `Copy`: a value is consumed exactly once
//! by a deposit or escrow, and produced exactly once by a withdrawal or
//! release, so value cannot be duplicated inside the core.
//!
//! A `Funds` value rejected by a vault operation is dropped with the
//! failed call; the host transaction aborts and rolls the caller's
//! custody back, so nothing is lost outside this library's tables.

use rust_decimal::Decimal;
use types::asset::AssetIdentity;

/// An owned amount of one asset, in custody transit.
#[must_use = "funds must be deposited, escrowed, or unwrapped with into_parts"]
#[derive(Debug, PartialEq, Eq)]
pub struct Funds {
    asset: AssetIdentity,
    amount: Decimal,
}

impl Funds {
    /// Wrap value entering custody from the host ledger.
    ///
    /// This is the only way value enters custody from outside: the host
    /// calls it when an external deposit is observed on the underlying
    /// ledger. The vault also mints `Funds` internally when custodied
    /// value leaves its tables (withdraw, release).
    pub fn new(asset: AssetIdentity, amount: Decimal) -> Self {
        Self { asset, amount }
    }

    /// The asset this value denominates.
    pub fn asset(&self) -> &AssetIdentity {
        &self.asset
    }

    /// The amount carried.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Consume the value, returning custody to the host ledger.
    pub fn into_parts(self) -> (AssetIdentity, Decimal) {
        (self.asset, self.amount)
    }
}
