#![deny(missing_docs)]

//! # paylock-token — External Payment-Token Interface
//!
//! The escrow engine never implements a token ledger of its own; it
//! orchestrates transfers through an external fungible-token interface.
//! This crate defines that seam:
//!
//! - **Ledger** ([`ledger`]): the [`TokenLedger`] trait — `transfer_from`
//!   (pull into custody under prior approval), `transfer` (push out),
//!   plus the `balance_of` / `allowance` / `symbol` read surface.
//!
//! - **Memory** ([`memory`]): [`InMemoryToken`], a reference ledger with
//!   `mint` and `approve` conveniences, used by the test suites and by
//!   hosting layers that want a self-contained demo.
//!
//! Real deployments implement [`TokenLedger`] over whatever balance
//! ledger they actually settle against; any `Err` from the ledger aborts
//! the enclosing escrow operation with no state change.

pub mod ledger;
pub mod memory;

// Re-export primary types for ergonomic imports.
pub use ledger::{TokenError, TokenLedger};
pub use memory::InMemoryToken;
