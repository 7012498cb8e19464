//! Deposit instruction - add liquidity and mint shares

use pool_model::{quote_initial_deposit, quote_subsequent_deposit, DepositQuote};

use crate::errors::PoolError;
use crate::ledger::{EscrowGateway, Ledger};
use crate::state::PoolRegistry;
use crate::types::{Address, AssetId};

/// Process a liquidity deposit
///
/// On a Seeded pool (zero supply) the full requested amounts are taken and
/// the mint is the floor geometric mean, with the locked minimum withheld
/// from the depositor. On an Active pool, asset A is taken as requested and
/// asset B is computed from the live reserve ratio; the minted shares come
/// from the same ratio so share dilution matches reserve dilution.
///
/// Uses the VERIFIED quote functions from `pool_model` (properties L1/L2);
/// this function only checks preconditions and applies the quote
/// atomically.
///
/// # Security Checks
/// - Verifies the signer controls the depositor account
/// - Verifies both draw amounts are covered by the depositor's balances
///   before any mutation
///
/// # Arguments
/// * `registry` - Pool registry
/// * `ledger` - The ledger environment
/// * `signer` - Account that authorized this operation
/// * `depositor` - Account funding the deposit and receiving shares
/// * `asset_a`, `asset_b` - The pool's canonical pair
/// * `desired_a` - Amount of asset A to deposit
/// * `desired_b` - Amount of asset B to deposit (ignored on Active pools,
///   where B is priced from the reserve ratio)
pub fn process_deposit_liquidity<L: Ledger>(
    registry: &mut PoolRegistry,
    ledger: &mut L,
    signer: &Address,
    depositor: &Address,
    asset_a: AssetId,
    asset_b: AssetId,
    desired_a: u64,
    desired_b: u64,
) -> Result<DepositQuote, PoolError> {
    // SECURITY: Verify the signer controls the depositor account
    if signer != depositor {
        return Err(PoolError::Unauthorized);
    }

    let pool = registry.get_mut(asset_a, asset_b)?;

    let quote = if pool.is_seeded() {
        quote_initial_deposit(desired_a, desired_b)?
    } else {
        quote_subsequent_deposit(pool.reserve_a, pool.reserve_b, pool.share_supply, desired_a)?
    };

    let mut gateway = EscrowGateway::new(ledger, pool.identity());

    // SECURITY: Both draws must be covered before anything moves
    if gateway.balance(depositor, &asset_a) < quote.amount_a
        || gateway.balance(depositor, &asset_b) < quote.amount_b
    {
        return Err(PoolError::InsufficientDepositorBalance);
    }

    gateway.pull_to_pool(depositor, &asset_a, quote.amount_a)?;
    gateway.pull_to_pool(depositor, &asset_b, quote.amount_b)?;
    gateway.mint_shares(depositor, quote.shares_to_depositor)?;

    pool.reserve_a = quote.new_reserve_a;
    pool.reserve_b = quote.new_reserve_b;
    pool.share_supply = quote.new_supply;

    log::debug!(
        "deposit applied: pool={} a={} b={} shares={} locked={}",
        pool.identity().pool,
        quote.amount_a,
        quote.amount_b,
        quote.shares_to_depositor,
        quote.shares_locked
    );

    Ok(quote)
}
