//! # Token Ledger Trait
//!
//! The interface the escrow engine settles through. The engine acts as a
//! custodian: it pulls contract amounts from clients with
//! [`TokenLedger::transfer_from`] (the client must have approved the
//! engine's custody account as spender beforehand) and pays out with
//! [`TokenLedger::transfer`] from that same custody account.
//!
//! ## Failure Semantics
//!
//! Every `Err` returned from a ledger method is treated by the engine as
//! a hard abort of the enclosing operation: no escrow state changes are
//! committed on a failed transfer. The ledger itself must apply each
//! method atomically — a `transfer_from` either moves the full amount and
//! burns the allowance, or does nothing.

use thiserror::Error;

use paylock_core::{AccountId, TokenAmount};

/// Errors returned by a token ledger.
///
/// Each variant carries the accounts and quantities involved so callers
/// can assert on cause rather than on failure alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A `transfer_from` exceeded the spender's remaining approval.
    #[error(
        "transfer of {requested} exceeds allowance {available} granted by {owner} to {spender}"
    )]
    InsufficientAllowance {
        /// The account whose funds were to be pulled.
        owner: AccountId,
        /// The spender whose approval was insufficient.
        spender: AccountId,
        /// The requested transfer amount.
        requested: TokenAmount,
        /// The remaining approved amount.
        available: TokenAmount,
    },

    /// A transfer exceeded the sender's balance.
    #[error("transfer of {requested} exceeds balance {available} of {account}")]
    InsufficientBalance {
        /// The account whose balance was insufficient.
        account: AccountId,
        /// The requested transfer amount.
        requested: TokenAmount,
        /// The sender's current balance.
        available: TokenAmount,
    },

    /// Crediting the recipient would overflow its balance.
    #[error("crediting {amount} to {account} would overflow its balance")]
    BalanceOverflow {
        /// The account whose balance would overflow.
        account: AccountId,
        /// The amount that could not be credited.
        amount: TokenAmount,
    },
}

/// A fungible-token balance ledger the escrow engine settles through.
///
/// Implementations must be `Send + Sync`: the engine hands out clones of
/// an `Arc<dyn TokenLedger>` handle, and hosting layers may read balances
/// concurrently with the single-writer escrow operations.
pub trait TokenLedger: Send + Sync {
    /// Pull `amount` from `owner` to `recipient` under `spender`'s
    /// previously approved allowance, reducing that allowance by the
    /// amount moved.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InsufficientAllowance`] if the remaining
    /// approval does not cover `amount`, or
    /// [`TokenError::InsufficientBalance`] if `owner`'s balance does not.
    fn transfer_from(
        &self,
        owner: &AccountId,
        spender: &AccountId,
        recipient: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError>;

    /// Move `amount` from `sender` to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InsufficientBalance`] if `sender`'s balance
    /// does not cover `amount`.
    fn transfer(
        &self,
        sender: &AccountId,
        recipient: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError>;

    /// The current balance of `account`.
    fn balance_of(&self, account: &AccountId) -> TokenAmount;

    /// The remaining amount `spender` may pull from `owner`.
    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> TokenAmount;

    /// The ledger's display symbol (e.g. `"USDT"`).
    fn symbol(&self) -> String;
}
