#![deny(missing_docs)]

//! # paylock-engine — Escrow Engine for Single-Payment Freelance Contracts
//!
//! Mediates milestone-free, single-payment engagements between a client
//! and a freelancer: funds are pulled into custody at creation, released
//! to the freelancer after a completion handshake and a hold interval,
//! or split by an authorized dispute resolver. The engine orchestrates
//! transfers through an external token ledger
//! ([`paylock_token::TokenLedger`]) and never implements one itself.
//!
//! - **Error** ([`error`]): structured error hierarchy — one stable
//!   variant per rejected precondition.
//!
//! - **Contract** ([`contract`]): the per-engagement record and its
//!   status machine.
//!
//! - **Registry** ([`registry`]): the process-wide aggregate holding
//!   configuration, the contract ledger, per-party indices, and the
//!   dispute-resolver set, with owner-gated configuration operations.
//!
//! - **Lifecycle** ([`lifecycle`]): the five state transitions — create,
//!   initiate completion, claim, dispute, resolve.
//!
//! - **Settlement** ([`settlement`]): basis-point fee math and
//!   exact-accounting fund splits.
//!
//! - **View** ([`view`]): bounded recency queries and the consolidated
//!   per-caller snapshot.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use paylock_core::{AccountId, TermsHash, TokenAmount};
//! use paylock_engine::{EscrowConfig, EscrowRegistry};
//! use paylock_token::{InMemoryToken, TokenLedger};
//!
//! let owner = AccountId::new();
//! let client = AccountId::new();
//! let freelancer = AccountId::new();
//! let token = Arc::new(InMemoryToken::new("USDT"));
//! let amount = TokenAmount::from_whole(10, 18).unwrap();
//! token.mint(&client, amount).unwrap();
//!
//! let mut registry = EscrowRegistry::new(
//!     EscrowConfig::new(owner, AccountId::new()),
//!     Arc::clone(&token) as Arc<dyn TokenLedger>,
//! );
//!
//! token.approve(&client, registry.custody_account(), amount);
//! let contract_no = registry
//!     .start_contract(&client, freelancer, TermsHash::of(b"terms"), amount)
//!     .unwrap();
//! registry.initiate_complete(&client, contract_no).unwrap();
//! // ...after the hold interval, the freelancer claims:
//! // registry.claim_payment(&freelancer, contract_no)?;
//! ```

pub mod contract;
pub mod error;
pub mod lifecycle;
pub mod registry;
pub mod settlement;
pub mod view;

// Re-export primary types for ergonomic imports.
pub use contract::{Contract, ContractNo, ContractStatus};
pub use error::EscrowError;
pub use registry::{
    EscrowConfig, EscrowRegistry, DEFAULT_FEE, DEFAULT_FIRST_CONTRACT_NO,
    DEFAULT_HOLD_INTERVAL_SECS, DEFAULT_MIN_CONTRACT_AMOUNT,
};
pub use settlement::{claim_split, dispute_split, fee_amount, ClaimSplit, DisputeSplit};
pub use view::FullView;
