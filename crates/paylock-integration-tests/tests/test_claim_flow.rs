//! # Claim Flow — End-to-End Integration Tests
//!
//! Exercises the happy path from contract creation through the
//! completion handshake to the freelancer's claim, and the hold-interval
//! gate that protects the client's dispute window.

use std::sync::Arc;

use paylock_core::{AccountId, TermsHash, TokenAmount};
use paylock_engine::{ContractStatus, EscrowConfig, EscrowError, EscrowRegistry};
use paylock_token::{InMemoryToken, TokenLedger};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct World {
    registry: EscrowRegistry,
    token: Arc<InMemoryToken>,
    client: AccountId,
    freelancer: AccountId,
    dev_wallet: AccountId,
}

fn units(whole: u64) -> TokenAmount {
    TokenAmount::from_whole(whole, 18).unwrap()
}

/// A funded world. `hold_interval_secs` is configurable so tests can
/// choose between an open gate (0) and the 7-day default.
fn world(hold_interval_secs: u64) -> World {
    let owner = AccountId::new();
    let client = AccountId::new();
    let freelancer = AccountId::new();
    let dev_wallet = AccountId::new();
    let token = Arc::new(InMemoryToken::new("USDT"));
    token.mint(&client, units(1_000)).unwrap();

    let mut config = EscrowConfig::new(owner, dev_wallet);
    config.hold_interval_secs = hold_interval_secs;
    let registry = EscrowRegistry::new(config, Arc::clone(&token) as Arc<dyn TokenLedger>);

    World {
        registry,
        token,
        client,
        freelancer,
        dev_wallet,
    }
}

fn start_contract(w: &mut World, amount: TokenAmount) -> paylock_engine::ContractNo {
    w.token
        .approve(&w.client, w.registry.custody_account(), amount);
    w.registry
        .start_contract(&w.client, w.freelancer, TermsHash::of(b"terms"), amount)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: full claim lifecycle
// ---------------------------------------------------------------------------

#[test]
fn client_starts_client_closes_freelancer_claims() {
    let mut w = world(0);
    let no = start_contract(&mut w, units(10));

    // Funds moved into custody at creation.
    assert_eq!(w.token.balance_of(&w.client), units(990));
    assert_eq!(w.token.balance_of(w.registry.custody_account()), units(10));
    assert_eq!(
        w.registry.contract(no).unwrap().status,
        ContractStatus::Started
    );

    w.registry.initiate_complete(&w.client, no).unwrap();
    assert_eq!(
        w.registry.contract(no).unwrap().status,
        ContractStatus::CompleteInitiated
    );

    w.registry.claim_payment(&w.freelancer, no).unwrap();

    // 10 tokens at the default 100 bps: 9.9 / 0.1.
    assert_eq!(
        w.token.balance_of(&w.freelancer),
        TokenAmount::new(9_900_000_000_000_000_000)
    );
    assert_eq!(
        w.token.balance_of(&w.dev_wallet),
        TokenAmount::new(100_000_000_000_000_000)
    );
    assert_eq!(
        w.token.balance_of(w.registry.custody_account()),
        TokenAmount::ZERO
    );
    assert_eq!(
        w.registry.contract(no).unwrap().status,
        ContractStatus::Completed
    );
}

#[test]
fn hold_interval_gates_the_claim() {
    let mut w = world(604_800);
    let no = start_contract(&mut w, units(10));
    w.registry.initiate_complete(&w.client, no).unwrap();

    let err = w.registry.claim_payment(&w.freelancer, no).unwrap_err();
    assert!(matches!(err, EscrowError::TooEarly { .. }));

    // The rejection changed nothing: funds stay in custody, the status
    // stays claim-pending.
    assert_eq!(w.token.balance_of(&w.freelancer), TokenAmount::ZERO);
    assert_eq!(w.token.balance_of(w.registry.custody_account()), units(10));
    assert_eq!(
        w.registry.contract(no).unwrap().status,
        ContractStatus::CompleteInitiated
    );
}

#[test]
fn contract_numbers_are_consecutive_and_never_reused() {
    let mut w = world(0);
    let mut previous = w.registry.current_contract_no().value();
    for _ in 0..10 {
        let no = start_contract(&mut w, units(10)).value();
        assert_eq!(no, previous + 1);
        previous = no;
    }
    assert_eq!(w.registry.current_contract_no().value(), 11_121);
}

#[test]
fn settled_contracts_remain_queryable() {
    let mut w = world(0);
    let no = start_contract(&mut w, units(10));
    w.registry.initiate_complete(&w.client, no).unwrap();
    w.registry.claim_payment(&w.freelancer, no).unwrap();

    let record = w.registry.contract(no).unwrap();
    assert_eq!(record.status, ContractStatus::Completed);
    assert_eq!(record.amount, units(10));
    assert_eq!(w.registry.recent_contracts_by_client(&w.client, 10).len(), 1);
}

// ---------------------------------------------------------------------------
// Test: creation guards
// ---------------------------------------------------------------------------

#[test]
fn sub_unit_amounts_are_rejected() {
    let mut w = world(0);
    let one_short = TokenAmount::new(units(1).base_units() - 1);

    for amount in [TokenAmount::ZERO, one_short] {
        w.token
            .approve(&w.client, w.registry.custody_account(), amount);
        let err = w
            .registry
            .start_contract(&w.client, w.freelancer, TermsHash::of(b"t"), amount)
            .unwrap_err();
        assert!(matches!(err, EscrowError::AmountTooLow { .. }));
    }
}

#[test]
fn unapproved_creation_is_rejected_without_side_effects() {
    let mut w = world(0);
    w.token.approve(
        &w.client,
        w.registry.custody_account(),
        TokenAmount::new(units(10).base_units() - 1),
    );
    let err = w
        .registry
        .start_contract(&w.client, w.freelancer, TermsHash::of(b"t"), units(10))
        .unwrap_err();
    assert!(matches!(err, EscrowError::InsufficientAllowance(_)));
    assert_eq!(w.token.balance_of(&w.client), units(1_000));
    assert_eq!(w.registry.current_contract_no().value(), 11_111);
}

#[test]
fn pause_blocks_creation_but_not_in_flight_contracts() {
    let mut w = world(0);
    let owner = *w.registry.owner();
    let no = start_contract(&mut w, units(10));

    w.registry.toggle_new_contracts_allowed(&owner).unwrap();

    w.token
        .approve(&w.client, w.registry.custody_account(), units(10));
    let err = w
        .registry
        .start_contract(&w.client, w.freelancer, TermsHash::of(b"t"), units(10))
        .unwrap_err();
    assert!(matches!(err, EscrowError::Paused));

    // The in-flight contract still completes normally.
    w.registry.initiate_complete(&w.client, no).unwrap();
    w.registry.claim_payment(&w.freelancer, no).unwrap();
    assert_eq!(
        w.registry.contract(no).unwrap().status,
        ContractStatus::Completed
    );
}
