//! Deposit liquidity scenarios

use pool_model::MINIMUM_LIQUIDITY;
use tarn_pool::{process_deposit_liquidity, Ledger, PoolError};
use tarn_integration_tests::{TestValues, DEFAULT_SUPPLY, DEPOSIT_AMOUNT_A, DEPOSIT_AMOUNT_B};

#[test]
fn deposits_initial_liquidity() {
    let mut values = TestValues::seeded(0);

    let quote = process_deposit_liquidity(
        &mut values.registry,
        &mut values.ledger,
        &values.depositor,
        &values.depositor,
        values.asset_a,
        values.asset_b,
        DEPOSIT_AMOUNT_A,
        DEPOSIT_AMOUNT_B,
    )
    .unwrap();

    // Exact amounts leave the depositor
    assert_eq!(
        values.ledger.balance(&values.depositor, &values.asset_a),
        DEFAULT_SUPPLY - DEPOSIT_AMOUNT_A
    );
    assert_eq!(
        values.ledger.balance(&values.depositor, &values.asset_b),
        DEFAULT_SUPPLY - DEPOSIT_AMOUNT_B
    );

    // Reserves hold exactly the deposit
    let pool = values.pool();
    assert_eq!(pool.reserve_a, DEPOSIT_AMOUNT_A);
    assert_eq!(pool.reserve_b, DEPOSIT_AMOUNT_B);

    // floor(sqrt(10e6 * 3e6)) - 1 = 5_477_224 shares to the depositor
    assert_eq!(quote.shares_to_depositor, 5_477_224);
    assert_eq!(values.share_balance(&values.depositor), 5_477_224);
    assert_eq!(pool.share_supply, 5_477_224 + MINIMUM_LIQUIDITY);
}

#[test]
fn deposits_subsequent_liquidity_with_correct_proportions() {
    let mut values = TestValues::with_initial_deposit(0);

    let quote = process_deposit_liquidity(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_a,
        values.asset_b,
        4_000_000,
        4_000_000, // deliberately off-ratio; the engine reprices B
    )
    .unwrap();

    // B follows the live reserve ratio, not the caller's number
    assert_eq!(quote.amount_a, 4_000_000);
    assert_eq!(quote.amount_b, 1_200_000);
    assert_eq!(quote.shares_to_depositor, 2_190_890);

    let pool = values.pool();
    assert_eq!(pool.reserve_a, 14_000_000);
    assert_eq!(pool.reserve_b, 4_200_000);
    assert_eq!(pool.share_supply, 5_477_225 + 2_190_890);

    // The second depositor's share of supply equals their share of reserves
    assert_eq!(values.share_balance(&values.trader), 2_190_890);
}

#[test]
fn depositing_more_than_owned_is_rejected_not_partially_filled() {
    let mut values = TestValues::seeded(0);
    let snapshot = values.snapshot();

    let result = process_deposit_liquidity(
        &mut values.registry,
        &mut values.ledger,
        &values.depositor,
        &values.depositor,
        values.asset_a,
        values.asset_b,
        DEFAULT_SUPPLY + 1,
        DEPOSIT_AMOUNT_B,
    );

    assert_eq!(result, Err(PoolError::InsufficientDepositorBalance));
    assert_eq!(values.snapshot(), snapshot);
}

#[test]
fn subsequent_deposit_beyond_b_balance_is_rejected() {
    let mut values = TestValues::with_initial_deposit(0);

    // Requires ceil(80M * 3M / 10M) = 24M of B; drain the trader's B first
    let trader_b = values.ledger.balance(&values.trader, &values.asset_b);
    values
        .ledger
        .debit(&values.trader, &values.asset_b, trader_b)
        .unwrap();

    let snapshot = values.snapshot();
    let result = process_deposit_liquidity(
        &mut values.registry,
        &mut values.ledger,
        &values.trader,
        &values.trader,
        values.asset_a,
        values.asset_b,
        80_000_000,
        0,
    );

    assert_eq!(result, Err(PoolError::InsufficientDepositorBalance));
    assert_eq!(values.snapshot(), snapshot);
}

#[test]
fn dust_deposit_below_locked_minimum_is_rejected() {
    let mut values = TestValues::seeded(0);
    let snapshot = values.snapshot();

    assert_eq!(
        process_deposit_liquidity(
            &mut values.registry,
            &mut values.ledger,
            &values.depositor,
            &values.depositor,
            values.asset_a,
            values.asset_b,
            1,
            1,
        ),
        Err(PoolError::InsufficientLiquidityMinted)
    );
    assert_eq!(values.snapshot(), snapshot);
}
