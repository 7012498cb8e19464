//! Withdraw instruction - burn shares for a pro-rata slice of reserves

use pool_model::{quote_withdraw, WithdrawQuote};

use crate::errors::PoolError;
use crate::ledger::{EscrowGateway, Ledger};
use crate::state::PoolRegistry;
use crate::types::{Address, AssetId};

/// Process a liquidity withdrawal
///
/// Burns `share_amount` from the depositor and pays out floor pro-rata
/// slices of both reserves, using the VERIFIED quote from `pool_model`
/// (property L3). The locked minimum is part of supply and held by no one,
/// so withdrawing every redeemable share leaves the depositor at exactly
/// zero shares, supply at `MINIMUM_LIQUIDITY`, and residual dust reserves.
///
/// # Security Checks
/// - Verifies the signer controls the depositor account
/// - Verifies the burn is within the outstanding supply
/// - Verifies the depositor actually holds the shares
/// - Verifies the payout credits cannot overflow the depositor's balances,
///   so the operation cannot fail after the burn
///
/// # Arguments
/// * `registry` - Pool registry
/// * `ledger` - The ledger environment
/// * `signer` - Account that authorized this operation
/// * `depositor` - Account burning shares and receiving assets
/// * `asset_a`, `asset_b` - The pool's canonical pair
/// * `share_amount` - Shares to burn
pub fn process_withdraw_liquidity<L: Ledger>(
    registry: &mut PoolRegistry,
    ledger: &mut L,
    signer: &Address,
    depositor: &Address,
    asset_a: AssetId,
    asset_b: AssetId,
    share_amount: u64,
) -> Result<WithdrawQuote, PoolError> {
    // SECURITY: Verify the signer controls the depositor account
    if signer != depositor {
        return Err(PoolError::Unauthorized);
    }

    let pool = registry.get_mut(asset_a, asset_b)?;

    // Rejects zero amounts and burns above total supply
    let quote = quote_withdraw(
        pool.reserve_a,
        pool.reserve_b,
        pool.share_supply,
        share_amount,
    )?;

    let mut gateway = EscrowGateway::new(ledger, pool.identity());

    // SECURITY: The depositor must hold every share being burned. Holders
    // can never own the locked minimum, so this also caps the burn at the
    // redeemable supply.
    if gateway.share_balance(depositor) < share_amount {
        return Err(PoolError::InsufficientShareBalance);
    }

    // SECURITY: Payout credits must not overflow, or the burn below could
    // not be rolled back
    if gateway.balance(depositor, &asset_a) > u64::MAX - quote.amount_a
        || gateway.balance(depositor, &asset_b) > u64::MAX - quote.amount_b
    {
        return Err(PoolError::ArithmeticOverflow);
    }

    gateway.burn_shares(depositor, share_amount)?;
    gateway.push_from_pool(depositor, &asset_a, quote.amount_a)?;
    gateway.push_from_pool(depositor, &asset_b, quote.amount_b)?;

    pool.reserve_a = quote.new_reserve_a;
    pool.reserve_b = quote.new_reserve_b;
    pool.share_supply = quote.new_supply;

    log::debug!(
        "withdrawal applied: pool={} shares={} a={} b={}",
        pool.identity().pool,
        share_amount,
        quote.amount_a,
        quote.amount_b
    );

    Ok(quote)
}
