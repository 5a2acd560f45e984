#![deny(missing_docs)]

//! # paylock-core — Foundational Types for the paylock Escrow Engine
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `thiserror`,
//! `chrono`, `uuid`, and `sha2` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every quantity is a
//!    distinct type. You cannot pass a fee rate where a token amount is
//!    expected, and an [`AccountId`] is not interchangeable with a raw UUID.
//!
//! 2. **Integer-only money.** [`TokenAmount`] is a `u128` of token base
//!    units. Floats never appear in monetary code paths; arithmetic is
//!    checked and truncation is explicit at the call site.
//!
//! 3. **Validation at construction.** [`BasisPoints`] rejects rates above
//!    the 10000 denominator when built, so downstream settlement math never
//!    has to re-check it.
//!
//! 4. **UTC everywhere.** [`Timestamp`] carries UTC time only; local time
//!    conversion is a presentation concern for hosting layers.

pub mod amount;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod terms;

// Re-export primary types at crate root for ergonomic imports.
pub use amount::{BasisPoints, TokenAmount, FEE_DENOMINATOR};
pub use error::ValidationError;
pub use identity::AccountId;
pub use temporal::Timestamp;
pub use terms::TermsHash;
