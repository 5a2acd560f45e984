//! # Fee Snapshot — Integration Tests
//!
//! A contract settles at the fee rate in effect when it was created;
//! later `set_fee` calls change only contracts created afterwards. Two
//! contracts created under different rates must settle at different
//! absolute fees even when settled in the same call sequence.

use std::sync::Arc;

use paylock_core::{AccountId, BasisPoints, TermsHash, TokenAmount};
use paylock_engine::{ContractNo, EscrowConfig, EscrowRegistry};
use paylock_token::{InMemoryToken, TokenLedger};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct World {
    registry: EscrowRegistry,
    token: Arc<InMemoryToken>,
    owner: AccountId,
    client: AccountId,
    freelancer: AccountId,
    dev_wallet: AccountId,
}

fn units(whole: u64) -> TokenAmount {
    TokenAmount::from_whole(whole, 18).unwrap()
}

fn world() -> World {
    let owner = AccountId::new();
    let client = AccountId::new();
    let freelancer = AccountId::new();
    let dev_wallet = AccountId::new();
    let token = Arc::new(InMemoryToken::new("USDT"));
    token.mint(&client, units(1_000)).unwrap();

    let mut config = EscrowConfig::new(owner, dev_wallet);
    config.hold_interval_secs = 0;
    let registry = EscrowRegistry::new(config, Arc::clone(&token) as Arc<dyn TokenLedger>);

    World {
        registry,
        token,
        owner,
        client,
        freelancer,
        dev_wallet,
    }
}

fn start_contract(w: &mut World) -> ContractNo {
    w.token
        .approve(&w.client, w.registry.custody_account(), units(10));
    w.registry
        .start_contract(&w.client, w.freelancer, TermsHash::of(b"terms"), units(10))
        .unwrap()
}

fn settle(w: &mut World, no: ContractNo) {
    w.registry.initiate_complete(&w.client, no).unwrap();
    w.registry.claim_payment(&w.freelancer, no).unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fee_change_does_not_touch_an_existing_contract() {
    let mut w = world();
    let no = start_contract(&mut w);

    let owner = w.owner;
    w.registry
        .set_fee(&owner, BasisPoints::new(200).unwrap())
        .unwrap();
    settle(&mut w, no);

    // Settled at the original 100 bps: fee 0.1 of 10 tokens.
    assert_eq!(
        w.token.balance_of(&w.dev_wallet),
        TokenAmount::new(100_000_000_000_000_000)
    );
}

#[test]
fn contracts_created_under_different_rates_settle_differently() {
    let mut w = world();
    let owner = w.owner;

    let first = start_contract(&mut w);
    w.registry
        .set_fee(&owner, BasisPoints::new(200).unwrap())
        .unwrap();
    let second = start_contract(&mut w);

    // Settle both in the same sequence; each uses its own frozen rate.
    settle(&mut w, first);
    let dev_after_first = w.token.balance_of(&w.dev_wallet);
    assert_eq!(dev_after_first, TokenAmount::new(100_000_000_000_000_000));

    settle(&mut w, second);
    let dev_after_second = w.token.balance_of(&w.dev_wallet);
    assert_eq!(
        dev_after_second
            .checked_sub(dev_after_first)
            .unwrap(),
        TokenAmount::new(200_000_000_000_000_000)
    );

    assert_eq!(w.registry.contract(first).unwrap().fee_bps.value(), 100);
    assert_eq!(w.registry.contract(second).unwrap().fee_bps.value(), 200);
}

#[test]
fn frozen_rate_also_governs_dispute_resolution() {
    let mut w = world();
    let owner = w.owner;
    let resolver = AccountId::new();
    w.registry
        .set_dispute_resolver(&owner, resolver, true)
        .unwrap();

    let no = start_contract(&mut w);
    w.registry
        .set_fee(&owner, BasisPoints::new(500).unwrap())
        .unwrap();
    w.registry.start_dispute(&w.client, no).unwrap();
    w.registry.resolve_dispute(&resolver, no, units(5)).unwrap();

    // Dispute fee at the frozen 100 bps, not the new 500.
    assert_eq!(
        w.token.balance_of(&w.dev_wallet),
        TokenAmount::new(100_000_000_000_000_000)
    );
}
