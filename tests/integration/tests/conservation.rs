//! Randomized conservation properties across whole operations
//!
//! The ledger view must mirror the pool state after every operation, and
//! no sequence of operations may create value out of nothing.

use proptest::prelude::*;
use tarn_pool::{
    process_deposit_liquidity, process_swap_exact_in, process_withdraw_liquidity, Ledger,
    PoolError,
};
use tarn_integration_tests::{TestValues, DEFAULT_SUPPLY};

/// Reserves recorded in the pool always equal the balances the custody
/// authority actually holds.
fn assert_ledger_mirrors_pool(values: &TestValues) {
    let pool = values.pool();
    let authority = pool.identity().authority;
    assert_eq!(
        values.ledger.balance(&authority, &values.asset_a),
        pool.reserve_a
    );
    assert_eq!(
        values.ledger.balance(&authority, &values.asset_b),
        pool.reserve_b
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deposit_withdraw_round_trip_conserves(
        amount_a in 1_000u64..=50_000_000,
        amount_b in 1_000u64..=50_000_000,
        burn_fraction_bps in 1u64..=10_000,
    ) {
        let mut values = TestValues::seeded(0);

        let deposit = process_deposit_liquidity(
            &mut values.registry,
            &mut values.ledger,
            &values.depositor,
            &values.depositor,
            values.asset_a,
            values.asset_b,
            amount_a,
            amount_b,
        ).unwrap();
        assert_ledger_mirrors_pool(&values);

        let burn = (deposit.shares_to_depositor as u128 * burn_fraction_bps as u128 / 10_000) as u64;
        if burn > 0 {
            process_withdraw_liquidity(
                &mut values.registry,
                &mut values.ledger,
                &values.depositor,
                &values.depositor,
                values.asset_a,
                values.asset_b,
                burn,
            ).unwrap();
            assert_ledger_mirrors_pool(&values);
        }

        // The depositor can never end up above their starting balances
        prop_assert!(
            values.ledger.balance(&values.depositor, &values.asset_a) <= DEFAULT_SUPPLY
        );
        prop_assert!(
            values.ledger.balance(&values.depositor, &values.asset_b) <= DEFAULT_SUPPLY
        );
    }

    #[test]
    fn swaps_conserve_total_assets(
        amount in 1u64..=20_000_000,
        fee_bps in 0u64..=100,
        a_to_b in any::<bool>(),
    ) {
        let mut values = TestValues::with_initial_deposit(fee_bps);
        let total_a = DEFAULT_SUPPLY * 2; // depositor + trader mints
        let k0 = 10_000_000u128 * 3_000_000u128;

        let (sell, buy) = if a_to_b {
            (values.asset_a, values.asset_b)
        } else {
            (values.asset_b, values.asset_a)
        };
        let result = process_swap_exact_in(
            &mut values.registry,
            &mut values.ledger,
            &values.trader,
            &values.trader,
            sell,
            buy,
            amount,
            0,
        );

        match result {
            Ok(_) => {
                assert_ledger_mirrors_pool(&values);
                let pool = values.pool();
                prop_assert!((pool.reserve_a as u128) * (pool.reserve_b as u128) >= k0);

                // Total asset A across every account is unchanged
                let authority = pool.identity().authority;
                let held: u64 = values.ledger.balance(&values.depositor, &values.asset_a)
                    + values.ledger.balance(&values.trader, &values.asset_a)
                    + values.ledger.balance(&authority, &values.asset_a);
                prop_assert_eq!(held, total_a);
            }
            Err(e) => prop_assert!(matches!(
                e,
                PoolError::InsufficientLiquidity | PoolError::InsufficientBalance
            )),
        }
    }

    #[test]
    fn rejected_operations_mutate_nothing(
        shares in 1u64..=u64::MAX,
    ) {
        let mut values = TestValues::with_initial_deposit(0);
        let snapshot = values.snapshot();

        // The trader holds no shares, so every withdrawal attempt fails
        let result = process_withdraw_liquidity(
            &mut values.registry,
            &mut values.ledger,
            &values.trader,
            &values.trader,
            values.asset_a,
            values.asset_b,
            shares,
        );

        prop_assert!(result.is_err());
        prop_assert_eq!(values.snapshot(), snapshot);
    }
}
