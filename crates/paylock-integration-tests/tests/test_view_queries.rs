//! # View Layer — Integration Tests
//!
//! Recency queries per party and the consolidated full view, exercised
//! across creation, configuration changes, and both roles of the same
//! caller.

use std::sync::Arc;

use paylock_core::{AccountId, TermsHash, TokenAmount};
use paylock_engine::{ContractNo, EscrowConfig, EscrowRegistry};
use paylock_token::{InMemoryToken, TokenLedger};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct World {
    registry: EscrowRegistry,
    token: Arc<InMemoryToken>,
    client: AccountId,
    freelancer: AccountId,
}

fn units(whole: u64) -> TokenAmount {
    TokenAmount::from_whole(whole, 18).unwrap()
}

fn world() -> World {
    let client = AccountId::new();
    let freelancer = AccountId::new();
    let token = Arc::new(InMemoryToken::new("USDT"));
    token.mint(&client, units(1_000)).unwrap();
    let registry = EscrowRegistry::new(
        EscrowConfig::new(AccountId::new(), AccountId::new()),
        Arc::clone(&token) as Arc<dyn TokenLedger>,
    );
    World {
        registry,
        token,
        client,
        freelancer,
    }
}

fn start_contracts(w: &mut World, count: usize) {
    for _ in 0..count {
        w.token
            .approve(&w.client, w.registry.custody_account(), units(10));
        w.registry
            .start_contract(&w.client, w.freelancer, TermsHash::of(b"terms"), units(10))
            .unwrap();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn ten_recent_contracts_by_client() {
    let mut w = world();
    start_contracts(&mut w, 10);

    assert_eq!(w.registry.current_contract_no(), ContractNo::new(11_121));
    let results = w.registry.recent_contracts_by_client(&w.client, 20);
    assert_eq!(results.len(), 10);
    // Newest first.
    assert_eq!(results[0].contract_no, ContractNo::new(11_121));
}

#[test]
fn five_recent_contracts_by_freelancer_and_none_for_strangers() {
    let mut w = world();
    start_contracts(&mut w, 5);

    assert_eq!(w.registry.current_contract_no(), ContractNo::new(11_116));
    let results = w.registry.recent_contracts_by_freelancer(&w.freelancer, 20);
    assert_eq!(results.len(), 5);

    let stranger = AccountId::new();
    assert!(w
        .registry
        .recent_contracts_by_freelancer(&stranger, 20)
        .is_empty());
    assert!(w.registry.recent_contracts_by_client(&stranger, 20).is_empty());
}

#[test]
fn full_view_aggregates_config_allowance_and_recency() {
    let mut w = world();
    start_contracts(&mut w, 5);
    w.token
        .approve(&w.client, w.registry.custody_account(), units(10));

    let view = w.registry.full_view(&w.client, 3);
    assert!(view.new_contracts_allowed);
    assert_eq!(view.payment_token_symbol, "USDT");
    assert_eq!(view.payment_token_allowance, units(10));
    assert_eq!(view.current_contract_no, ContractNo::new(11_116));
    assert_eq!(view.fee.value(), 100);
    assert_eq!(view.hold_interval_secs, 604_800);
    assert!(!view.is_dispute_resolver);
    assert_eq!(view.client_contracts.len(), 3);
    assert!(view.freelancer_contracts.is_empty());

    let freelancer_view = w.registry.full_view(&w.freelancer, 3);
    assert_eq!(freelancer_view.freelancer_contracts.len(), 3);
    assert!(freelancer_view.client_contracts.is_empty());
}

#[test]
fn full_view_is_never_stale() {
    let mut w = world();
    let owner = *w.registry.owner();

    assert!(w.registry.full_view(&w.client, 1).new_contracts_allowed);
    w.registry.toggle_new_contracts_allowed(&owner).unwrap();
    assert!(!w.registry.full_view(&w.client, 1).new_contracts_allowed);

    assert!(!w.registry.full_view(&w.client, 1).is_dispute_resolver);
    w.registry
        .set_dispute_resolver(&owner, w.client, true)
        .unwrap();
    assert!(w.registry.full_view(&w.client, 1).is_dispute_resolver);

    // Allowance reads through to the live ledger.
    w.token
        .approve(&w.client, w.registry.custody_account(), units(42));
    assert_eq!(
        w.registry.full_view(&w.client, 1).payment_token_allowance,
        units(42)
    );
}

#[test]
fn full_view_tracks_a_replaced_payment_token() {
    let mut w = world();
    let owner = *w.registry.owner();
    w.registry
        .set_payment_token(&owner, Arc::new(InMemoryToken::new("BUSD")))
        .unwrap();

    let view = w.registry.full_view(&w.client, 1);
    assert_eq!(view.payment_token_symbol, "BUSD");
    // The old ledger's approvals do not carry over.
    assert_eq!(view.payment_token_allowance, TokenAmount::ZERO);
}

#[test]
fn views_serialize_for_hosting_layers() {
    let mut w = world();
    start_contracts(&mut w, 2);
    let view = w.registry.full_view(&w.client, 5);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["payment_token_symbol"], "USDT");
    assert_eq!(json["client_contracts"].as_array().unwrap().len(), 2);
    assert_eq!(json["current_contract_no"], 11_113);
}
