//! Structural asset-type identity
//!
//! An asset is identified by the full triple of its originating account,
//! defining namespace, and type name. Comparison is structural — two
//! identities are the same asset only if every component matches.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::Address;

/// Globally-unique descriptor of one fungible asset type.
///
/// Equality is field-by-field; there is no reference identity. Any
/// differing component (origin, module, or name) makes a different
/// asset, and the settlement core will refuse to mix the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetIdentity {
    /// Account that published the asset's defining module
    pub origin: Address,
    /// Namespace (module) the asset type is declared in
    pub module: String,
    /// Type name within the module
    pub name: String,
}

impl AssetIdentity {
    pub fn new(origin: impl Into<Address>, module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            module: module.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for AssetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.origin, self.module, self.name)
    }
}
