//! # Identity Newtypes
//!
//! Account identities for every party the escrow engine deals with:
//! clients, freelancers, the owner, dispute resolvers, the dev wallet,
//! and the engine's own custody account. All of them are the same kind
//! of thing — an opaque ledger identity — so one newtype covers them;
//! the *role* an account plays is decided per contract, not per type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque account identity on the external token ledger.
///
/// UUID-backed and always valid by construction. Roles (client,
/// freelancer, owner, resolver) are properties of the registry and of
/// individual contracts, never of the identity itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Create a new random account identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an account identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}
