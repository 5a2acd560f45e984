//! # Read Views
//!
//! Read-only aggregation over the registry: bounded recency queries per
//! party and the consolidated [`FullView`] snapshot. Views read live
//! state at call time — nothing is cached — and never mutate anything.

use serde::{Deserialize, Serialize};

use paylock_core::{AccountId, BasisPoints, TokenAmount};

use crate::contract::{Contract, ContractNo};
use crate::registry::EscrowRegistry;

/// A consolidated configuration-plus-balance snapshot for one caller.
///
/// Everything a front end needs to render the caller's escrow dashboard
/// in a single read: the global configuration, the caller's standing
/// with the payment token, and their recent contracts in both roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullView {
    /// Whether new contracts may currently be created.
    pub new_contracts_allowed: bool,
    /// Display symbol of the payment token.
    pub payment_token_symbol: String,
    /// The caller's current approval toward the custody account.
    pub payment_token_allowance: TokenAmount,
    /// The custody account the caller must approve before creating a
    /// contract.
    pub custody_account: AccountId,
    /// The most recently issued contract number.
    pub current_contract_no: ContractNo,
    /// The prospective fee rate for new contracts.
    pub fee: BasisPoints,
    /// The claim hold interval, in seconds.
    pub hold_interval_secs: u64,
    /// The fee recipient.
    pub dev_wallet: AccountId,
    /// Whether the caller is an authorized dispute resolver.
    pub is_dispute_resolver: bool,
    /// The caller's most recent contracts as client, newest first.
    pub client_contracts: Vec<Contract>,
    /// The caller's most recent contracts as freelancer, newest first.
    pub freelancer_contracts: Vec<Contract>,
}

impl EscrowRegistry {
    /// Up to `max_count` most recently created contracts with `client`
    /// as the paying party, newest first.
    ///
    /// Returns fewer records if the party has fewer, and an empty vector
    /// for an unknown party.
    pub fn recent_contracts_by_client(
        &self,
        client: &AccountId,
        max_count: usize,
    ) -> Vec<Contract> {
        self.recent_from_index(self.by_client.get(client), max_count)
    }

    /// Up to `max_count` most recently created contracts with
    /// `freelancer` as the working party, newest first.
    pub fn recent_contracts_by_freelancer(
        &self,
        freelancer: &AccountId,
        max_count: usize,
    ) -> Vec<Contract> {
        self.recent_from_index(self.by_freelancer.get(freelancer), max_count)
    }

    /// The consolidated snapshot for `caller`, with both recency lists
    /// bounded by `max_recent_count`.
    pub fn full_view(&self, caller: &AccountId, max_recent_count: usize) -> FullView {
        FullView {
            new_contracts_allowed: self.config.new_contracts_allowed,
            payment_token_symbol: self.token.symbol(),
            payment_token_allowance: self.token.allowance(caller, &self.custody_account),
            custody_account: self.custody_account,
            current_contract_no: self.current_no,
            fee: self.config.fee,
            hold_interval_secs: self.config.hold_interval_secs,
            dev_wallet: self.config.dev_wallet,
            is_dispute_resolver: self.resolvers.contains(caller),
            client_contracts: self.recent_contracts_by_client(caller, max_recent_count),
            freelancer_contracts: self.recent_contracts_by_freelancer(caller, max_recent_count),
        }
    }

    fn recent_from_index(
        &self,
        index: Option<&Vec<ContractNo>>,
        max_count: usize,
    ) -> Vec<Contract> {
        let Some(numbers) = index else {
            return Vec::new();
        };
        numbers
            .iter()
            .rev()
            .take(max_count)
            .filter_map(|no| self.contracts.get(no))
            .cloned()
            .collect()
    }
}
