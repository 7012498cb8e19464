//! Swap instruction - exact-input constant product trade

use pool_model::{quote_swap_exact_in, SwapQuote};

use crate::errors::PoolError;
use crate::ledger::{EscrowGateway, Ledger};
use crate::state::PoolRegistry;
use crate::types::{Address, AssetId};

/// Process an exact-input swap
///
/// Trades `amount_in` of `asset_in` for the other asset of the pair at the
/// constant product price, with the pool's fee taken on the input side.
/// The quote comes from the VERIFIED `pool_model` function (property L4:
/// the invariant product never decreases and the output reserve is never
/// drained).
///
/// # Security Checks
/// - Verifies the signer controls the trader account
/// - Verifies the output clears the trader's minimum before anything moves
/// - Verifies the trader's input balance covers the trade
/// - Verifies the output credit cannot overflow the trader's balance
///
/// # Arguments
/// * `registry` - Pool registry
/// * `ledger` - The ledger environment
/// * `signer` - Account that authorized this operation
/// * `trader` - Account paying the input and receiving the output
/// * `asset_in` - Asset the trader is selling
/// * `asset_out` - Asset the trader is buying
/// * `amount_in` - Exact input amount, fee included
/// * `min_amount_out` - Slippage floor for the output
pub fn process_swap_exact_in<L: Ledger>(
    registry: &mut PoolRegistry,
    ledger: &mut L,
    signer: &Address,
    trader: &Address,
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: u64,
    min_amount_out: u64,
) -> Result<SwapQuote, PoolError> {
    // SECURITY: Verify the signer controls the trader account
    if signer != trader {
        return Err(PoolError::Unauthorized);
    }
    if asset_in == asset_out {
        return Err(PoolError::SelfPairing);
    }

    // Resolve the canonical pair regardless of trade direction
    let (asset_a, asset_b) = if asset_in < asset_out {
        (asset_in, asset_out)
    } else {
        (asset_out, asset_in)
    };
    let pool = registry.get_mut(asset_a, asset_b)?;

    let a_to_b = asset_in == pool.asset_a;
    let (reserve_in, reserve_out) = if a_to_b {
        (pool.reserve_a, pool.reserve_b)
    } else {
        (pool.reserve_b, pool.reserve_a)
    };

    let quote = quote_swap_exact_in(reserve_in, reserve_out, amount_in, pool.fee_bps)?;

    let mut gateway = EscrowGateway::new(ledger, pool.identity());

    // SECURITY: Slippage floor, balance cover, and credit overflow are all
    // checked before the first transfer
    if quote.amount_out < min_amount_out {
        return Err(PoolError::SlippageExceeded);
    }
    if gateway.balance(trader, &asset_in) < amount_in {
        return Err(PoolError::InsufficientBalance);
    }
    if gateway.balance(trader, &asset_out) > u64::MAX - quote.amount_out {
        return Err(PoolError::ArithmeticOverflow);
    }

    gateway.pull_to_pool(trader, &asset_in, amount_in)?;
    gateway.push_from_pool(trader, &asset_out, quote.amount_out)?;

    if a_to_b {
        pool.reserve_a = quote.new_reserve_in;
        pool.reserve_b = quote.new_reserve_out;
    } else {
        pool.reserve_b = quote.new_reserve_in;
        pool.reserve_a = quote.new_reserve_out;
    }

    log::debug!(
        "swap applied: pool={} in={} out={} fee_bps={}",
        pool.identity().pool,
        amount_in,
        quote.amount_out,
        pool.fee_bps
    );

    Ok(quote)
}
