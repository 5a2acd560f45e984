//! # Escrow Registry
//!
//! The process-wide aggregate: configuration, the contract ledger, the
//! per-party indices, and the dispute-resolver set. All mutation funnels
//! through the transition methods (see [`crate::lifecycle`]) and the
//! owner-gated configuration operations defined here — there is no
//! ambient or static state, so a hosting process owns the registry and
//! decides sharing and locking.
//!
//! ## Concurrency
//!
//! Every mutating operation takes `&mut self`, so exclusive access is
//! enforced by the borrow checker. A hosting service must serialize
//! mutations itself (a single-writer lock around the registry preserves
//! the engine's atomicity guarantee); no operation suspends or yields.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use paylock_core::{AccountId, BasisPoints, TokenAmount};
use paylock_token::TokenLedger;

use crate::contract::{Contract, ContractNo};
use crate::error::EscrowError;

// ── Deployment defaults ────────────────────────────────────────────────

/// Default platform fee: 100 bps (1%).
pub const DEFAULT_FEE: BasisPoints = BasisPoints::from_literal(100);

/// Default hold interval between completion-initiation and claim
/// eligibility: 7 days.
pub const DEFAULT_HOLD_INTERVAL_SECS: u64 = 604_800;

/// Default minimum contract amount: one whole token at 18 decimals.
pub const DEFAULT_MIN_CONTRACT_AMOUNT: TokenAmount =
    TokenAmount::new(1_000_000_000_000_000_000);

/// Default first issued contract number.
pub const DEFAULT_FIRST_CONTRACT_NO: u64 = 11_112;

// ── Configuration ──────────────────────────────────────────────────────

/// Deployment configuration for an escrow registry.
///
/// Built with [`EscrowConfig::new`] from the two identities every
/// deployment must supply; every other field starts at its deployment
/// default and may be overridden before the registry is constructed.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EscrowConfig {
    /// The identity allowed to run configuration operations.
    pub owner: AccountId,
    /// The fee recipient.
    pub dev_wallet: AccountId,
    /// The prospective fee rate applied to newly created contracts.
    pub fee: BasisPoints,
    /// The claim hold interval, in seconds.
    pub hold_interval_secs: u64,
    /// The smallest accepted contract amount, in base units.
    pub min_contract_amount: TokenAmount,
    /// The number assigned to the first contract.
    pub first_contract_no: u64,
    /// Global pause switch for contract creation.
    pub new_contracts_allowed: bool,
}

impl EscrowConfig {
    /// Configuration with deployment defaults for the given owner and
    /// fee recipient.
    pub fn new(owner: AccountId, dev_wallet: AccountId) -> Self {
        Self {
            owner,
            dev_wallet,
            fee: DEFAULT_FEE,
            hold_interval_secs: DEFAULT_HOLD_INTERVAL_SECS,
            min_contract_amount: DEFAULT_MIN_CONTRACT_AMOUNT,
            first_contract_no: DEFAULT_FIRST_CONTRACT_NO,
            new_contracts_allowed: true,
        }
    }
}

// ── The registry ───────────────────────────────────────────────────────

/// The escrow engine's single mutable aggregate.
///
/// Holds the configuration, the payment-token handle, the contract
/// ledger keyed by number, insertion-ordered per-party indices for
/// recency queries, and the authorized dispute-resolver set. The
/// registry also owns a custody account identity: the ledger account
/// that holds every active contract's amount, and the spender clients
/// must approve before `start_contract` can pull funds.
pub struct EscrowRegistry {
    pub(crate) config: EscrowConfig,
    pub(crate) token: Arc<dyn TokenLedger>,
    pub(crate) custody_account: AccountId,
    /// The last issued contract number; `first_contract_no - 1` until
    /// the first creation.
    pub(crate) current_no: ContractNo,
    pub(crate) contracts: BTreeMap<ContractNo, Contract>,
    pub(crate) by_client: HashMap<AccountId, Vec<ContractNo>>,
    pub(crate) by_freelancer: HashMap<AccountId, Vec<ContractNo>>,
    pub(crate) resolvers: HashSet<AccountId>,
}

impl EscrowRegistry {
    /// Create a registry over the given configuration and token ledger.
    ///
    /// A fresh custody account identity is generated; clients approve it
    /// as spender and settlements pay out from it.
    pub fn new(config: EscrowConfig, token: Arc<dyn TokenLedger>) -> Self {
        let current_no = ContractNo::new(config.first_contract_no.saturating_sub(1));
        Self {
            config,
            token,
            custody_account: AccountId::new(),
            current_no,
            contracts: BTreeMap::new(),
            by_client: HashMap::new(),
            by_freelancer: HashMap::new(),
            resolvers: HashSet::new(),
        }
    }

    // ── Read accessors ─────────────────────────────────────────────────

    /// The registry owner.
    pub fn owner(&self) -> &AccountId {
        &self.config.owner
    }

    /// The fee recipient.
    pub fn dev_wallet(&self) -> &AccountId {
        &self.config.dev_wallet
    }

    /// The prospective fee rate for newly created contracts.
    pub fn fee(&self) -> BasisPoints {
        self.config.fee
    }

    /// The claim hold interval, in seconds.
    pub fn hold_interval_secs(&self) -> u64 {
        self.config.hold_interval_secs
    }

    /// Whether contract creation is currently allowed.
    pub fn new_contracts_allowed(&self) -> bool {
        self.config.new_contracts_allowed
    }

    /// The custody account clients must approve as spender.
    pub fn custody_account(&self) -> &AccountId {
        &self.custody_account
    }

    /// The most recently issued contract number (`first_contract_no - 1`
    /// until the first creation).
    pub fn current_contract_no(&self) -> ContractNo {
        self.current_no
    }

    /// The record under `contract_no`, if one was ever created.
    pub fn contract(&self, contract_no: ContractNo) -> Option<&Contract> {
        self.contracts.get(&contract_no)
    }

    /// Whether `account` is an authorized dispute resolver.
    pub fn is_dispute_resolver(&self, account: &AccountId) -> bool {
        self.resolvers.contains(account)
    }

    // ── Owner-gated configuration operations ───────────────────────────

    /// Replace the token ledger used for all future transfers.
    ///
    /// Already-settled contracts are unaffected; contracts still in
    /// custody will settle through the new ledger.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotOwner`] for non-owner callers.
    pub fn set_payment_token(
        &mut self,
        caller: &AccountId,
        token: Arc<dyn TokenLedger>,
    ) -> Result<(), EscrowError> {
        self.require_owner(caller)?;
        tracing::info!(symbol = %token.symbol(), "payment token replaced");
        self.token = token;
        Ok(())
    }

    /// Flip the global pause switch for contract creation.
    ///
    /// In-flight contracts are unaffected in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotOwner`] for non-owner callers.
    pub fn toggle_new_contracts_allowed(&mut self, caller: &AccountId) -> Result<(), EscrowError> {
        self.require_owner(caller)?;
        self.config.new_contracts_allowed = !self.config.new_contracts_allowed;
        tracing::info!(
            allowed = self.config.new_contracts_allowed,
            "new-contract switch toggled"
        );
        Ok(())
    }

    /// Update the prospective fee rate.
    ///
    /// Applies to contracts created after this call; every existing
    /// contract settles at the rate frozen into its record at creation.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotOwner`] for non-owner callers.
    pub fn set_fee(&mut self, caller: &AccountId, fee: BasisPoints) -> Result<(), EscrowError> {
        self.require_owner(caller)?;
        tracing::info!(fee = %fee, "prospective fee rate updated");
        self.config.fee = fee;
        Ok(())
    }

    /// Add or remove an identity from the dispute-resolver set.
    ///
    /// Idempotent: authorizing an authorized resolver or revoking an
    /// unknown one is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EscrowError::NotOwner`] for non-owner callers.
    pub fn set_dispute_resolver(
        &mut self,
        caller: &AccountId,
        resolver: AccountId,
        authorized: bool,
    ) -> Result<(), EscrowError> {
        self.require_owner(caller)?;
        if authorized {
            self.resolvers.insert(resolver);
        } else {
            self.resolvers.remove(&resolver);
        }
        Ok(())
    }

    pub(crate) fn require_owner(&self, caller: &AccountId) -> Result<(), EscrowError> {
        if *caller != self.config.owner {
            return Err(EscrowError::NotOwner);
        }
        Ok(())
    }
}

impl std::fmt::Debug for EscrowRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscrowRegistry")
            .field("config", &self.config)
            .field("custody_account", &self.custody_account)
            .field("current_no", &self.current_no)
            .field("contracts", &self.contracts.len())
            .field("resolvers", &self.resolvers.len())
            .finish_non_exhaustive()
    }
}
