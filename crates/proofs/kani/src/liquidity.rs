//! Kani proofs for pool liquidity invariants
//!
//! These proofs verify that the share accounting satisfies key safety
//! properties:
//! - **P1: Conservation** - withdrawals never pay out more than reserves
//! - **P2: Dilution Match** - deposits never lower reserves-per-share
//! - **P3: Invariant Non-Decreasing** - swaps never decrease x·y
//! - **P4: Locked Minimum** - the first mint always withholds exactly
//!   `MINIMUM_LIQUIDITY` from the depositor

use pool_model::{
    quote_initial_deposit, quote_subsequent_deposit, quote_swap_exact_in, quote_withdraw,
    MINIMUM_LIQUIDITY,
};

/// P1: A withdrawal pays out at most the pro-rata slice and burns exactly
/// the requested shares.
#[kani::proof]
#[kani::unwind(3)]
fn p1_withdraw_conserves_reserves() {
    let reserve_a: u64 = kani::any();
    let reserve_b: u64 = kani::any();
    let supply: u64 = kani::any();
    let shares: u64 = kani::any();

    kani::assume(supply > 0 && supply < 1 << 40);
    kani::assume(reserve_a > 0 && reserve_a < 1 << 40);
    kani::assume(reserve_b > 0 && reserve_b < 1 << 40);
    kani::assume(shares > 0 && shares <= supply);

    if let Ok(q) = quote_withdraw(reserve_a, reserve_b, supply, shares) {
        assert!(q.amount_a <= reserve_a, "P1: payout A bounded by reserve");
        assert!(q.amount_b <= reserve_b, "P1: payout B bounded by reserve");
        assert!(q.new_supply == supply - shares, "P1: exact burn");
        assert!(
            q.new_reserve_a + q.amount_a == reserve_a,
            "P1: reserve A conserved"
        );
        assert!(
            q.new_reserve_b + q.amount_b == reserve_b,
            "P1: reserve B conserved"
        );
    }
}

/// P2: A subsequent deposit never decreases reserves-per-share for
/// existing holders, in either asset.
#[kani::proof]
#[kani::unwind(3)]
fn p2_deposit_never_dilutes() {
    let reserve_a: u64 = kani::any();
    let reserve_b: u64 = kani::any();
    let supply: u64 = kani::any();
    let desired_a: u64 = kani::any();

    kani::assume(reserve_a > 0 && reserve_a < 1 << 30);
    kani::assume(reserve_b > 0 && reserve_b < 1 << 30);
    kani::assume(supply > 0 && supply < 1 << 30);
    kani::assume(desired_a > 0 && desired_a < 1 << 30);

    if let Ok(q) = quote_subsequent_deposit(reserve_a, reserve_b, supply, desired_a) {
        // new_reserve/new_supply >= reserve/supply, cross-multiplied in u128
        assert!(
            (q.new_reserve_a as u128) * (supply as u128)
                >= (reserve_a as u128) * (q.new_supply as u128),
            "P2: share price in A must not drop"
        );
        assert!(
            (q.new_reserve_b as u128) * (supply as u128)
                >= (reserve_b as u128) * (q.new_supply as u128),
            "P2: share price in B must not drop"
        );
    }
}

/// P3: A swap never decreases the invariant product and never empties the
/// output reserve.
#[kani::proof]
#[kani::unwind(3)]
fn p3_swap_invariant_non_decreasing() {
    let reserve_in: u64 = kani::any();
    let reserve_out: u64 = kani::any();
    let amount_in: u64 = kani::any();
    let fee_bps: u64 = kani::any();

    kani::assume(reserve_in > 0 && reserve_in < 1 << 30);
    kani::assume(reserve_out > 0 && reserve_out < 1 << 30);
    kani::assume(amount_in > 0 && amount_in < 1 << 30);
    kani::assume(fee_bps < 10_000);

    if let Ok(q) = quote_swap_exact_in(reserve_in, reserve_out, amount_in, fee_bps) {
        let k0 = (reserve_in as u128) * (reserve_out as u128);
        let k1 = (q.new_reserve_in as u128) * (q.new_reserve_out as u128);

        assert!(k1 >= k0, "P3: invariant must not decrease");
        assert!(q.new_reserve_out >= 1, "P3: output reserve never drained");
        assert!(q.amount_out < reserve_out, "P3: payout strictly below reserve");
    }
}

/// P4: The first mint withholds exactly the locked minimum and takes the
/// full requested amounts.
#[kani::proof]
#[kani::unwind(70)]
fn p4_initial_mint_withholds_minimum() {
    let desired_a: u64 = kani::any();
    let desired_b: u64 = kani::any();

    kani::assume(desired_a > 0 && desired_a < 1 << 30);
    kani::assume(desired_b > 0 && desired_b < 1 << 30);

    if let Ok(q) = quote_initial_deposit(desired_a, desired_b) {
        assert!(
            q.new_supply == q.shares_to_depositor + MINIMUM_LIQUIDITY,
            "P4: supply = depositor shares + locked minimum"
        );
        assert!(q.shares_locked == MINIMUM_LIQUIDITY, "P4: exact withholding");
        assert!(q.new_reserve_a == desired_a, "P4: full A taken");
        assert!(q.new_reserve_b == desired_b, "P4: full B taken");
        assert!(q.shares_to_depositor > 0, "P4: depositor always receives shares");
    }
}
