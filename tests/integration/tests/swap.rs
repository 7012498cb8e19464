//! Swap scenarios

use tarn_pool::{process_swap_exact_in, Ledger, PoolError};
use tarn_integration_tests::{TestValues, DEFAULT_SUPPLY};

#[test]
fn swaps_preserve_the_invariant_product() {
    let mut values = TestValues::with_initial_deposit(0);
    let k0 = 10_000_000u128 * 3_000_000u128;

    let quote = process_swap_exact_in(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_a,
        values.asset_b,
        1_000_000,
        0,
    )
    .unwrap();

    assert_eq!(quote.amount_out, 272_727);
    assert_eq!(
        values.ledger.balance(&values.trader, &values.asset_b),
        DEFAULT_SUPPLY + 272_727
    );

    let pool = values.pool();
    assert!((pool.reserve_a as u128) * (pool.reserve_b as u128) >= k0);
    // Share supply is untouched by trading
    assert_eq!(pool.share_supply, 5_477_225);
}

#[test]
fn fee_accrues_to_the_pool() {
    let mut values = TestValues::with_initial_deposit(30);
    let k0 = 10_000_000u128 * 3_000_000u128;

    process_swap_exact_in(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_a,
        values.asset_b,
        1_000_000,
        0,
    )
    .unwrap();

    // With a fee the invariant strictly grows: value accrues to holders
    let pool = values.pool();
    assert!((pool.reserve_a as u128) * (pool.reserve_b as u128) > k0);
}

#[test]
fn either_direction_trades_against_the_same_pool() {
    let mut values = TestValues::with_initial_deposit(0);

    let q1 = process_swap_exact_in(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_b,
        values.asset_a,
        300_000,
        0,
    )
    .unwrap();

    let pool = values.pool();
    assert_eq!(pool.reserve_b, 3_300_000);
    assert_eq!(pool.reserve_a, 10_000_000 - q1.amount_out);
}

#[test]
fn a_round_trip_never_profits() {
    let mut values = TestValues::with_initial_deposit(0);
    let start_a = values.ledger.balance(&values.trader, &values.asset_a);

    let q1 = process_swap_exact_in(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_a,
        values.asset_b,
        500_000,
        0,
    )
    .unwrap();
    process_swap_exact_in(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_b,
        values.asset_a,
        q1.amount_out,
        0,
    )
    .unwrap();

    assert!(values.ledger.balance(&values.trader, &values.asset_a) <= start_a);
}

#[test]
fn slippage_floor_aborts_without_mutation() {
    let mut values = TestValues::with_initial_deposit(0);
    let snapshot = values.snapshot();

    assert_eq!(
        process_swap_exact_in(
            &mut values.registry,
            &mut values.ledger,
            &values.trader,
            &values.trader,
            values.asset_a,
            values.asset_b,
            1_000_000,
            272_728,
        ),
        Err(PoolError::SlippageExceeded)
    );
    assert_eq!(values.snapshot(), snapshot);
}

#[test]
fn unknown_pair_is_rejected() {
    let mut values = TestValues::with_initial_deposit(0);
    let stranger = tarn_pool::AssetId::from_seed("asset-unlisted");
    let (lo, hi) = if stranger < values.asset_a {
        (stranger, values.asset_a)
    } else {
        (values.asset_a, stranger)
    };

    assert_eq!(
        process_swap_exact_in(
            &mut values.registry,
            &mut values.ledger,
            &values.trader,
            &values.trader,
            lo,
            hi,
            1_000,
            0,
        ),
        Err(PoolError::PoolNotFound)
    );
}
