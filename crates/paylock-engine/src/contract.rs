//! # Contract Records and Lifecycle States
//!
//! The per-engagement record held by the registry and its status machine:
//! `STARTED → COMPLETE_INITIATED → COMPLETED`, with the dispute branch
//! `STARTED | COMPLETE_INITIATED → IN_DISPUTE → DISPUTE_RESOLVED`.
//!
//! ## Design Choice: Validated Enum over Typestate
//!
//! Statuses are a runtime-checked enum rather than typestate. Records of
//! every status live together in one ledger map, are serialized for
//! hosting layers, and are addressed by number at runtime — the status is
//! never known at compile time. Each transition method on the registry
//! validates the current status and returns a structured error on
//! mismatch, which gives the same per-call-site guarantee.

use serde::{Deserialize, Serialize};

use paylock_core::{AccountId, BasisPoints, TermsHash, Timestamp, TokenAmount};

// ── Contract numbers ───────────────────────────────────────────────────

/// A contract's unique, monotonically increasing ledger number.
///
/// Assigned by the registry at creation and never reused. The first
/// issued number is a deployment constant (11112 by default) and each
/// creation increments by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContractNo(u64);

impl ContractNo {
    /// Wrap a raw contract number.
    pub const fn new(no: u64) -> Self {
        Self(no)
    }

    /// The raw number.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The number that follows this one.
    pub(crate) const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for ContractNo {
    fn from(no: u64) -> Self {
        Self(no)
    }
}

impl std::fmt::Display for ContractNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Contract status ────────────────────────────────────────────────────

/// The lifecycle status of an escrow contract.
///
/// ## Transition Graph
///
/// ```text
/// STARTED ──initiate_complete()──▶ COMPLETE_INITIATED ──claim_payment()──▶ COMPLETED
///    │                                  │
///    ├──start_dispute()                 └──start_dispute() [client only]
///    ▼                                  ▼
/// IN_DISPUTE ──────────resolve_dispute()──────────▶ DISPUTE_RESOLVED
/// ```
///
/// `COMPLETED` and `DISPUTE_RESOLVED` are terminal. Once a contract is
/// `IN_DISPUTE` or later, the normal completion path is permanently
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Funds are in custody; work is underway.
    Started,
    /// The client has signed off; the hold interval is running.
    CompleteInitiated,
    /// The freelancer has been paid. Terminal state.
    Completed,
    /// A party has opened a dispute; awaiting a resolver.
    InDispute,
    /// A resolver has split the funds. Terminal state.
    DisputeResolved,
}

impl ContractStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "STARTED",
            Self::CompleteInitiated => "COMPLETE_INITIATED",
            Self::Completed => "COMPLETED",
            Self::InDispute => "IN_DISPUTE",
            Self::DisputeResolved => "DISPUTE_RESOLVED",
        }
    }

    /// The numeric wire code of this status (0 through 4).
    pub fn code(&self) -> u8 {
        match self {
            Self::Started => 0,
            Self::CompleteInitiated => 1,
            Self::Completed => 2,
            Self::InDispute => 3,
            Self::DisputeResolved => 4,
        }
    }

    /// Whether this status is terminal (no further transitions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::DisputeResolved)
    }

    /// Valid target statuses from this status.
    pub fn valid_transitions(&self) -> &'static [ContractStatus] {
        match self {
            Self::Started => &[Self::CompleteInitiated, Self::InDispute],
            Self::CompleteInitiated => &[Self::Completed, Self::InDispute],
            Self::InDispute => &[Self::DisputeResolved],
            Self::Completed | Self::DisputeResolved => &[],
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── The contract record ────────────────────────────────────────────────

/// One escrowed engagement between a client and a freelancer.
///
/// Created only by the registry's `start_contract`; never deleted. The
/// parties, terms digest, amount, and frozen fee rate are fixed at
/// creation. `start_time` is reset when completion is initiated — the
/// hold-interval gate is measured from that event, not from creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// The ledger number, unique for the registry's lifetime.
    pub contract_no: ContractNo,
    /// The paying party.
    pub client: AccountId,
    /// The party performing the work.
    pub freelancer: AccountId,
    /// Digest of the off-chain terms; stored verbatim, never interpreted.
    pub terms_hash: TermsHash,
    /// The full payment amount held in custody.
    pub amount: TokenAmount,
    /// The fee rate frozen at creation. Later `set_fee` calls do not
    /// affect this contract's settlement.
    pub fee_bps: BasisPoints,
    /// Current lifecycle status.
    pub status: ContractStatus,
    /// Creation time, overwritten by completion-initiation; the claim
    /// hold interval counts from here.
    pub start_time: Timestamp,
}

impl Contract {
    /// Whether `account` is the client or the freelancer of this contract.
    pub fn is_party(&self, account: &AccountId) -> bool {
        self.client == *account || self.freelancer == *account
    }
}
