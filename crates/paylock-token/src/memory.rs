//! # In-Memory Reference Ledger
//!
//! A self-contained [`TokenLedger`] backed by in-process maps. This is
//! the ledger the test suites run against and the one hosting layers use
//! for demos; it is not a custody-grade token implementation.
//!
//! `mint` and `approve` are inherent methods, not part of the trait: they
//! belong to the external ledger's deposit semantics, which the escrow
//! core never calls.

use std::collections::HashMap;

use parking_lot::RwLock;

use paylock_core::{AccountId, TokenAmount};

use crate::ledger::{TokenError, TokenLedger};

#[derive(Default)]
struct Books {
    balances: HashMap<AccountId, TokenAmount>,
    allowances: HashMap<(AccountId, AccountId), TokenAmount>,
}

impl Books {
    fn credit(&mut self, account: &AccountId, amount: TokenAmount) -> Result<(), TokenError> {
        let balance = self.balances.entry(*account).or_insert(TokenAmount::ZERO);
        *balance = balance
            .checked_add(amount)
            .ok_or(TokenError::BalanceOverflow {
                account: *account,
                amount,
            })?;
        Ok(())
    }

    fn debit(&mut self, account: &AccountId, amount: TokenAmount) -> Result<(), TokenError> {
        let available = self
            .balances
            .get(account)
            .copied()
            .unwrap_or(TokenAmount::ZERO);
        let remaining = available
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance {
                account: *account,
                requested: amount,
                available,
            })?;
        self.balances.insert(*account, remaining);
        Ok(())
    }
}

/// An in-memory fungible-token ledger with ERC-20-style approvals.
///
/// Interior mutability lets a shared `Arc<InMemoryToken>` serve both the
/// escrow engine (as `dyn TokenLedger`) and a test harness minting and
/// approving balances on the side.
pub struct InMemoryToken {
    symbol: String,
    books: RwLock<Books>,
}

impl InMemoryToken {
    /// Create an empty ledger with the given display symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            books: RwLock::new(Books::default()),
        }
    }

    /// Credit `amount` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::BalanceOverflow`] if the account balance
    /// would exceed `u128::MAX`.
    pub fn mint(&self, account: &AccountId, amount: TokenAmount) -> Result<(), TokenError> {
        self.books.write().credit(account, amount)
    }

    /// Set (not add to) the amount `spender` may pull from `owner`.
    pub fn approve(&self, owner: &AccountId, spender: &AccountId, amount: TokenAmount) {
        self.books.write().allowances.insert((*owner, *spender), amount);
    }
}

impl TokenLedger for InMemoryToken {
    fn transfer_from(
        &self,
        owner: &AccountId,
        spender: &AccountId,
        recipient: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        let mut books = self.books.write();
        let key = (*owner, *spender);
        let approved = books
            .allowances
            .get(&key)
            .copied()
            .unwrap_or(TokenAmount::ZERO);
        let remaining =
            approved
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientAllowance {
                    owner: *owner,
                    spender: *spender,
                    requested: amount,
                    available: approved,
                })?;
        // Balance moves before the allowance burn so a failed debit leaves
        // the approval intact.
        books.debit(owner, amount)?;
        books.credit(recipient, amount)?;
        books.allowances.insert(key, remaining);
        Ok(())
    }

    fn transfer(
        &self,
        sender: &AccountId,
        recipient: &AccountId,
        amount: TokenAmount,
    ) -> Result<(), TokenError> {
        let mut books = self.books.write();
        books.debit(sender, amount)?;
        books.credit(recipient, amount)
    }

    fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.books
            .read()
            .balances
            .get(account)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> TokenAmount {
        self.books
            .read()
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    fn symbol(&self) -> String {
        self.symbol.clone()
    }
}
