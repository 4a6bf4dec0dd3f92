//! End-to-end sniping scenarios run through the hooked pool manager.

use proptest::prelude::*;
use rust_decimal_macros::dec;
use snipe_guard_domain::{Epoch, FeeAmounts, Owner, PoolId, PositionKey, Salt, TickRange};
use snipe_guard_ledger::events::HookEventKind;
use snipe_guard_ledger::{FirstEpochGuard, GuardConfig, HookError, RedirectOutcome};
use snipe_guard_simulation::prelude::*;

const LP_A: u64 = 1;
const LP_B: u64 = 2;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn pool() -> PoolId {
    PoolId::from_low_u64(42)
}

fn position(owner: u64, salt: u64) -> PositionKey {
    PositionKey::new(
        Owner::from_low_u64(owner),
        TickRange::new(-600, 600),
        Salt::from_low_u64(salt),
    )
}

fn manager(lock: u64, capacity: usize) -> HookedPoolManager<FirstEpochGuard> {
    init_tracing();
    let guard = FirstEpochGuard::new(GuardConfig::new(lock, capacity).unwrap());
    let mut manager = HookedPoolManager::new(guard);
    manager.initialize_pool(pool(), 0).unwrap();
    manager
}

#[test]
fn test_swap_sniping_fees_go_to_resident_lp() {
    let mut m = manager(1, 16);
    let a = position(LP_A, 0);
    let b = position(LP_B, 1);

    // Epoch 1: A provides liquidity.
    m.add_liquidity(pool(), a, 1_000).unwrap();

    // Epoch 2: B joins right before a swap and takes half of its fee.
    m.advance_epoch();
    m.add_liquidity(pool(), b, 1_000).unwrap();
    m.swap(pool(), FeeAmounts::new(10_000, 0)).unwrap();
    assert_eq!(m.hooks().first_epoch_fees(pool(), &b), FeeAmounts::ZERO);

    // Epoch 3: a second swap shared by both; settlement runs first.
    m.advance_epoch();
    m.swap(pool(), FeeAmounts::new(6_000, 0)).unwrap();
    assert_eq!(
        m.hooks().first_epoch_fees(pool(), &b),
        FeeAmounts::new(5_000, 0)
    );

    let wb = m.remove_liquidity(pool(), b, 1_000).unwrap();
    assert_eq!(wb.liquidity, 1_000);
    assert_eq!(wb.fees_earned, FeeAmounts::new(8_000, 0));
    assert_eq!(wb.redirected, FeeAmounts::new(5_000, 0));
    assert_eq!(wb.net_fees, FeeAmounts::new(3_000, 0));
    assert_eq!(wb.outcome, RedirectOutcome::DonatedToPool);
    assert_eq!(m.collected(pool(), &b.owner), FeeAmounts::new(3_000, 0));

    let wa = m.remove_liquidity(pool(), a, 1_000).unwrap();
    assert_eq!(wa.fees_earned, FeeAmounts::new(13_000, 0));
    assert_eq!(wa.outcome, RedirectOutcome::NothingToRedirect);
    assert_eq!(m.collected(pool(), &a.owner), FeeAmounts::new(13_000, 0));

    let shares = fee_shares(m.engine(), pool(), &[a.owner, b.owner]);
    assert_eq!(shares[0].share0, Some(dec!(0.8125)));
    assert_eq!(shares[1].share0, Some(dec!(0.1875)));

    let redirected = m.hooks().events_for(pool()).any(|event| {
        event.kind
            == HookEventKind::FeesRedirected {
                key: b,
                amounts: FeeAmounts::new(5_000, 0),
            }
    });
    assert!(redirected);
}

#[test]
fn test_donation_sniping_leaves_sniper_nothing() {
    let mut m = manager(1, 16);
    let a = position(LP_A, 0);
    let b = position(LP_B, 1);

    m.add_liquidity(pool(), a, 1_000).unwrap();
    m.advance_epoch();
    m.add_liquidity(pool(), b, 1_000).unwrap();
    m.donate(pool(), FeeAmounts::new(4_000, 2_000)).unwrap();

    m.advance_epoch();
    let wb = m.remove_liquidity(pool(), b, 1_000).unwrap();
    assert_eq!(wb.fees_earned, FeeAmounts::new(2_000, 1_000));
    assert_eq!(wb.redirected, FeeAmounts::new(2_000, 1_000));
    assert_eq!(wb.net_fees, FeeAmounts::ZERO);
    assert_eq!(m.collected(pool(), &b.owner), FeeAmounts::ZERO);

    m.remove_liquidity(pool(), a, 1_000).unwrap();
    assert_eq!(m.collected(pool(), &a.owner), FeeAmounts::new(4_000, 2_000));
}

#[test]
fn test_sole_lp_gets_first_epoch_fees_back() {
    let mut m = manager(1, 16);
    let a = position(LP_A, 0);

    m.add_liquidity(pool(), a, 500).unwrap();
    m.swap(pool(), FeeAmounts::new(1_000, 250)).unwrap();
    m.advance_epoch();

    let wa = m.remove_liquidity(pool(), a, 500).unwrap();
    assert_eq!(wa.outcome, RedirectOutcome::ReturnedToOwner);
    assert_eq!(wa.redirected, FeeAmounts::ZERO);
    assert_eq!(wa.net_fees, FeeAmounts::new(1_000, 250));
    assert_eq!(m.collected(pool(), &a.owner), FeeAmounts::new(1_000, 250));
    assert_eq!(m.engine().pool(pool()).unwrap().active_liquidity, 0);
}

#[test]
fn test_capacity_limit_per_epoch() {
    let mut m = manager(1, 3);
    for salt in 0..3 {
        m.add_liquidity(pool(), position(LP_A, salt), 100).unwrap();
    }

    let err = m.add_liquidity(pool(), position(LP_B, 0), 100).unwrap_err();
    assert_eq!(
        err,
        ManagerError::Hook(HookError::TooManyPositionsInEpoch {
            epoch: Epoch(1),
            capacity: 3,
        })
    );
    assert_eq!(m.engine().pool(pool()).unwrap().active_liquidity, 300);

    m.advance_epoch();
    m.add_liquidity(pool(), position(LP_B, 0), 100).unwrap();
    assert_eq!(m.engine().pool(pool()).unwrap().active_liquidity, 400);
}

#[test]
fn test_same_epoch_exit_without_lock_isolates_nothing() {
    let mut m = manager(0, 16);
    let a = position(LP_A, 0);
    let b = position(LP_B, 1);

    m.add_liquidity(pool(), a, 1_000).unwrap();
    m.advance_epoch();
    m.add_liquidity(pool(), b, 1_000).unwrap();
    m.swap(pool(), FeeAmounts::new(2_000, 0)).unwrap();

    let wb = m.remove_liquidity(pool(), b, 1_000).unwrap();
    assert_eq!(wb.outcome, RedirectOutcome::NothingToRedirect);
    assert_eq!(wb.net_fees, FeeAmounts::new(1_000, 0));
    assert!(m.hooks().queued_positions(pool()).is_empty());
}

#[test]
fn test_locked_and_partial_exits_are_rejected() {
    let mut m = manager(3, 16);
    let a = position(LP_A, 0);
    let b = position(LP_B, 1);

    m.add_liquidity(pool(), a, 1_000).unwrap();
    m.add_liquidity(pool(), b, 1_000).unwrap();
    m.advance_epochs(2);

    let err = m.remove_liquidity(pool(), b, 1_000).unwrap_err();
    assert_eq!(
        err,
        ManagerError::Hook(HookError::PositionLocked {
            key: b,
            elapsed: 2,
            required: 3,
        })
    );

    m.advance_epoch();
    let err = m.remove_liquidity(pool(), b, 400).unwrap_err();
    assert_eq!(
        err,
        ManagerError::Hook(HookError::PositionPartiallyWithdrawn {
            key: b,
            requested: -400,
            liquidity: 1_000,
        })
    );
    assert_eq!(m.engine().pool(pool()).unwrap().active_liquidity, 2_000);

    m.remove_liquidity(pool(), b, 1_000).unwrap();
    assert_eq!(m.hooks().creation_epoch(pool(), &b), None);
}

#[test]
fn test_later_epochs_do_not_grow_isolated_fees() {
    let mut m = manager(1, 16);
    let a = position(LP_A, 0);
    let b = position(LP_B, 1);

    m.add_liquidity(pool(), a, 1_000).unwrap();
    m.advance_epoch();
    m.add_liquidity(pool(), b, 1_000).unwrap();
    m.swap(pool(), FeeAmounts::new(2_000, 2_000)).unwrap();

    for _ in 0..5 {
        m.advance_epoch();
        m.swap(pool(), FeeAmounts::new(2_000, 2_000)).unwrap();
    }

    let wb = m.remove_liquidity(pool(), b, 1_000).unwrap();
    assert_eq!(wb.redirected, FeeAmounts::new(1_000, 1_000));
    assert_eq!(wb.net_fees, FeeAmounts::new(5_000, 5_000));
}

proptest! {
    #[test]
    fn prop_sniper_keeps_only_later_epoch_fees(
        first in 0u128..1_000_000_000,
        later in 0u128..1_000_000_000,
        liquidity in 1u128..1_000_000,
    ) {
        let mut m = manager(1, 16);
        let a = position(LP_A, 0);
        let b = position(LP_B, 1);

        m.add_liquidity(pool(), a, liquidity).unwrap();
        m.advance_epoch();
        m.add_liquidity(pool(), b, liquidity).unwrap();
        m.swap(pool(), FeeAmounts::new(first, 0)).unwrap();
        m.advance_epoch();
        m.swap(pool(), FeeAmounts::new(later, 0)).unwrap();

        let isolated = m.hooks().first_epoch_fees(pool(), &b);
        let wb = m.remove_liquidity(pool(), b, liquidity).unwrap();
        m.remove_liquidity(pool(), a, liquidity).unwrap();

        prop_assert_eq!(wb.redirected, isolated);
        prop_assert_eq!(wb.net_fees.amount0 + wb.redirected.amount0, wb.fees_earned.amount0);
        prop_assert!(wb.net_fees.amount0 <= later / 2 + 1);

        let total = m.collected(pool(), &a.owner).amount0 + m.collected(pool(), &b.owner).amount0;
        prop_assert!(total <= first + later);
        prop_assert!(total + 3 >= first + later);
    }
}
