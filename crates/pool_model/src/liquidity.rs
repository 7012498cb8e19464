//! Share accounting for a two-asset constant product pool
//!
//! Every function here is a pure quote: it takes the pool's current reserve
//! and supply figures and returns the complete post-state picture plus the
//! asset movements the state machine must apply. Nothing is mutated; the
//! caller applies the quote atomically or not at all.
//!
//! Properties held by these formulas:
//! - **L1**: Initial mint is the floor geometric mean of the deposit, with
//!   `MINIMUM_LIQUIDITY` withheld from the depositor and left in supply.
//! - **L2**: Subsequent deposits price asset B and the minted shares from
//!   the same live reserve ratio, so share dilution equals reserve dilution.
//! - **L3**: Withdrawal pays out floor pro-rata slices; the invariant
//!   product only decreases through a proportional burn.
//! - **L4**: Swaps never decrease the invariant product and never drain a
//!   reserve to zero.

use crate::math::{add_u64, div_ceil_u128, div_floor_u128, isqrt_u128, mul_u64, narrow_u64, sub_u64};
use crate::{ModelError, BPS_SCALE, MINIMUM_LIQUIDITY};

/// Quote for a deposit: asset draw amounts, minted shares, and post-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    /// Amount of asset A drawn from the depositor
    pub amount_a: u64,
    /// Amount of asset B drawn from the depositor
    pub amount_b: u64,
    /// Shares credited to the depositor
    pub shares_to_depositor: u64,
    /// Shares added to supply but assigned to no one (first deposit only)
    pub shares_locked: u64,
    /// Reserve of asset A after the deposit
    pub new_reserve_a: u64,
    /// Reserve of asset B after the deposit
    pub new_reserve_b: u64,
    /// Share supply after the deposit
    pub new_supply: u64,
}

/// Quote for a withdrawal: payout amounts and post-state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawQuote {
    /// Amount of asset A paid to the depositor
    pub amount_a: u64,
    /// Amount of asset B paid to the depositor
    pub amount_b: u64,
    /// Reserve of asset A after the withdrawal
    pub new_reserve_a: u64,
    /// Reserve of asset B after the withdrawal
    pub new_reserve_b: u64,
    /// Share supply after the burn
    pub new_supply: u64,
}

/// Quote for an exact-input swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Amount of the output asset paid to the trader
    pub amount_out: u64,
    /// Input-side reserve after the swap (includes the fee)
    pub new_reserve_in: u64,
    /// Output-side reserve after the swap
    pub new_reserve_out: u64,
}

/// Quote the first deposit into a pool (share supply is zero)
///
/// minted = floor(sqrt(desired_a * desired_b)). The depositor receives
/// `minted - MINIMUM_LIQUIDITY`; the withheld portion stays in supply
/// forever. Reserves become exactly the requested amounts.
///
/// # Arguments
/// * `desired_a` - Full amount of asset A to take
/// * `desired_b` - Full amount of asset B to take
///
/// # Returns
/// * `DepositQuote` on success
/// * `ModelError::InsufficientLiquidityMinted` when `minted <= MINIMUM_LIQUIDITY`
pub fn quote_initial_deposit(desired_a: u64, desired_b: u64) -> Result<DepositQuote, ModelError> {
    let minted = narrow_u64(isqrt_u128(mul_u64(desired_a, desired_b)))?;

    if minted <= MINIMUM_LIQUIDITY {
        return Err(ModelError::InsufficientLiquidityMinted);
    }

    Ok(DepositQuote {
        amount_a: desired_a,
        amount_b: desired_b,
        shares_to_depositor: minted - MINIMUM_LIQUIDITY,
        shares_locked: MINIMUM_LIQUIDITY,
        new_reserve_a: desired_a,
        new_reserve_b: desired_b,
        new_supply: minted,
    })
}

/// Quote a deposit into an active pool (share supply is positive)
///
/// Asset A is taken exactly as requested; asset B is computed from the live
/// reserve ratio, rounded up so the pool never underprices B:
///
/// ```text
/// required_b = ceil(desired_a * reserve_b / reserve_a)
/// shares     = floor(desired_a * supply / reserve_a)
/// ```
///
/// Both figures derive from the same ratio, so the depositor's share of
/// supply equals their share of reserves (L2).
///
/// # Returns
/// * `ModelError::ZeroAmount` when `desired_a == 0`
/// * `ModelError::InsufficientLiquidityMinted` when the share amount floors
///   to zero (the deposit would be consumed without compensation)
pub fn quote_subsequent_deposit(
    reserve_a: u64,
    reserve_b: u64,
    supply: u64,
    desired_a: u64,
) -> Result<DepositQuote, ModelError> {
    if desired_a == 0 {
        return Err(ModelError::ZeroAmount);
    }

    let required_b = narrow_u64(div_ceil_u128(
        mul_u64(desired_a, reserve_b),
        reserve_a as u128,
    )?)?;
    let shares = narrow_u64(div_floor_u128(
        mul_u64(desired_a, supply),
        reserve_a as u128,
    )?)?;

    if shares == 0 {
        return Err(ModelError::InsufficientLiquidityMinted);
    }

    Ok(DepositQuote {
        amount_a: desired_a,
        amount_b: required_b,
        shares_to_depositor: shares,
        shares_locked: 0,
        new_reserve_a: add_u64(reserve_a, desired_a)?,
        new_reserve_b: add_u64(reserve_b, required_b)?,
        new_supply: add_u64(supply, shares)?,
    })
}

/// Quote a withdrawal of `shares` from an active pool
///
/// Pays out floor pro-rata slices of both reserves and burns the shares
/// from supply. The locked `MINIMUM_LIQUIDITY` is part of `supply`, so it
/// dilutes every payout and is itself never paid out (L3).
///
/// # Returns
/// * `ModelError::ZeroAmount` when `shares == 0`
/// * `ModelError::ExceedsSupply` when `shares > supply`
pub fn quote_withdraw(
    reserve_a: u64,
    reserve_b: u64,
    supply: u64,
    shares: u64,
) -> Result<WithdrawQuote, ModelError> {
    if shares == 0 {
        return Err(ModelError::ZeroAmount);
    }
    if shares > supply {
        return Err(ModelError::ExceedsSupply);
    }

    let amount_a = narrow_u64(div_floor_u128(mul_u64(reserve_a, shares), supply as u128)?)?;
    let amount_b = narrow_u64(div_floor_u128(mul_u64(reserve_b, shares), supply as u128)?)?;

    Ok(WithdrawQuote {
        amount_a,
        amount_b,
        new_reserve_a: sub_u64(reserve_a, amount_a)?,
        new_reserve_b: sub_u64(reserve_b, amount_b)?,
        new_supply: sub_u64(supply, shares)?,
    })
}

/// Quote an exact-input constant product swap with fee on input
///
/// ```text
/// net_in = amount_in * (BPS_SCALE - fee_bps) / BPS_SCALE
/// out    = floor(reserve_out * net_in / (reserve_in + net_in))
/// ```
///
/// The output is floored against the trader, and the full `amount_in`
/// (fee included) lands in the input reserve, so the invariant product
/// never decreases and strictly increases when `fee_bps > 0` (L4). The
/// floored output is always strictly below `reserve_out`, so a swap can
/// never drain a reserve.
///
/// # Returns
/// * `ModelError::ZeroAmount` when `amount_in == 0`
/// * `ModelError::InvalidFee` when `fee_bps >= BPS_SCALE`
/// * `ModelError::InsufficientLiquidity` when a reserve is zero or the
///   output floors to zero
pub fn quote_swap_exact_in(
    reserve_in: u64,
    reserve_out: u64,
    amount_in: u64,
    fee_bps: u64,
) -> Result<SwapQuote, ModelError> {
    if amount_in == 0 {
        return Err(ModelError::ZeroAmount);
    }
    if fee_bps >= BPS_SCALE {
        return Err(ModelError::InvalidFee);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(ModelError::InsufficientLiquidity);
    }

    let net_in = div_floor_u128(
        mul_u64(amount_in, BPS_SCALE - fee_bps),
        BPS_SCALE as u128,
    )?;
    if net_in == 0 {
        return Err(ModelError::InsufficientLiquidity);
    }

    // out <= reserve_out * net_in / (reserve_in + net_in) < reserve_out,
    // so the narrowing cannot fail and the output reserve stays positive
    let amount_out = narrow_u64(div_floor_u128(
        (reserve_out as u128) * net_in,
        (reserve_in as u128) + net_in,
    )?)?;
    if amount_out == 0 {
        return Err(ModelError::InsufficientLiquidity);
    }

    Ok(SwapQuote {
        amount_out,
        // The fee portion also lands in the pool
        new_reserve_in: add_u64(reserve_in, amount_in)?,
        new_reserve_out: sub_u64(reserve_out, amount_out)?,
    })
}
