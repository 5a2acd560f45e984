//! # Escrow Error Types
//!
//! Structured error hierarchy for the escrow engine. Every rejected
//! precondition surfaces a distinct, stable variant so callers and tests
//! can assert on cause, not just on failure. All errors are synchronous
//! and are returned before any state mutation is committed — a failed
//! operation leaves the registry byte-for-byte unchanged.

use thiserror::Error;

use paylock_core::TokenAmount;
use paylock_token::TokenError;

use crate::contract::{ContractNo, ContractStatus};

/// Errors arising from escrow operations.
///
/// Grouped by cause: authorization (caller identity does not match the
/// required role), state guards (the contract's status does not permit
/// the transition), value guards (a numeric precondition failed), the
/// global pause switch, and the hold-interval time gate.
#[derive(Error, Debug)]
pub enum EscrowError {
    // ── Authorization ──────────────────────────────────────────────────

    /// A configuration operation was invoked by a non-owner identity.
    #[error("caller is not the registry owner")]
    NotOwner,

    /// Completion can only be initiated by the contract's client.
    #[error("only the client may initiate completion of contract {contract_no}")]
    NotClient {
        /// The contract the caller tried to act on.
        contract_no: ContractNo,
    },

    /// Payment can only be claimed by the contract's freelancer.
    #[error("only the freelancer may claim payment for contract {contract_no}")]
    NotFreelancer {
        /// The contract the caller tried to act on.
        contract_no: ContractNo,
    },

    /// Dispute resolution requires an authorized dispute resolver.
    #[error("caller is not an authorized dispute resolver")]
    NotResolver,

    /// Disputes can only be opened by a party to the contract.
    #[error("caller is not a party to contract {contract_no}")]
    NotAllowed {
        /// The contract the caller tried to dispute.
        contract_no: ContractNo,
    },

    // ── State guards ───────────────────────────────────────────────────

    /// Completion can only be initiated while the contract is STARTED.
    #[error("contract is not available for closing (status {status})")]
    NotAvailableForClosing {
        /// The contract's current status.
        status: ContractStatus,
    },

    /// Payment can only be claimed while completion is initiated.
    #[error("contract is not available for claim (status {status})")]
    NotAvailableForClaim {
        /// The contract's current status.
        status: ContractStatus,
    },

    /// Dispute resolution requires the contract to be IN_DISPUTE.
    #[error("contract is not in dispute (status {status})")]
    NotInDispute {
        /// The contract's current status.
        status: ContractStatus,
    },

    /// The contract cannot be disputed by this caller in its current
    /// status. Covers the freelancer during COMPLETE_INITIATED and every
    /// already-disputed or terminal status.
    #[error("contract cannot be disputed (status {status})")]
    CannotDispute {
        /// The contract's current status.
        status: ContractStatus,
    },

    // ── Value guards ───────────────────────────────────────────────────

    /// The contract amount is below the configured minimum.
    #[error("payment amount {amount} is below the minimum of {minimum} base units")]
    AmountTooLow {
        /// The rejected amount.
        amount: TokenAmount,
        /// The configured minimum contract amount.
        minimum: TokenAmount,
    },

    /// The resolver's split leaves less than the fee behind.
    #[error("freelancer amount {requested} exceeds the {available} available after the fee")]
    FreelancerAmountTooMuch {
        /// The freelancer share the resolver requested.
        requested: TokenAmount,
        /// The maximum share available (`amount - fee`).
        available: TokenAmount,
    },

    /// The external ledger refused the custody deposit — the client has
    /// not approved enough allowance (or lacks the balance) for the
    /// contract amount.
    #[error("payment token refused the escrow deposit: {0}")]
    InsufficientAllowance(#[source] TokenError),

    // ── Global switches and time gates ─────────────────────────────────

    /// New-contract creation is globally paused.
    #[error("new contracts are paused")]
    Paused,

    /// The hold interval since completion-initiation has not elapsed.
    #[error("too early to claim: {remaining_secs}s of the hold interval remain")]
    TooEarly {
        /// Seconds left until the claim becomes eligible.
        remaining_secs: u64,
    },

    /// No contract exists under the given number.
    #[error("no contract exists with number {contract_no}")]
    UnknownContract {
        /// The unknown contract number.
        contract_no: ContractNo,
    },

    /// The ledger failed a custody-side settlement transfer. A correctly
    /// funded custody account never produces this.
    #[error("token ledger failure during settlement: {0}")]
    Token(#[source] TokenError),
}
