//! Initialize instruction - create the pool record for an asset pair

use pool_model::BPS_SCALE;

use crate::errors::PoolError;
use crate::identity::{derive_identity, PoolIdentity};
use crate::state::{Pool, PoolRegistry};
use crate::types::{Address, AssetId};

/// Process pool initialization
///
/// Creates the Pool record with zero reserves and zero share supply and
/// registers it under its derived identity. Reserve accounts and the share
/// asset come into existence lazily in the ledger environment; nothing is
/// transferred here.
///
/// # Security Checks
/// - Rejects pairing an asset with itself
/// - Rejects non-canonical asset ordering
/// - Prevents double initialization for the same pair
/// - Validates the fee is below 100%
///
/// # Arguments
/// * `registry` - Pool registry
/// * `payer` - Account paying for the record (recorded in the log only;
///   rent mechanics belong to the ledger environment)
/// * `asset_a` - Lexicographically smaller asset of the pair
/// * `asset_b` - Lexicographically larger asset of the pair
/// * `fee_bps` - Swap fee in basis points, fixed for the pool's lifetime
pub fn process_initialize_pool(
    registry: &mut PoolRegistry,
    payer: &Address,
    asset_a: AssetId,
    asset_b: AssetId,
    fee_bps: u64,
) -> Result<PoolIdentity, PoolError> {
    // SECURITY: Validate the fee before deriving anything
    if fee_bps >= BPS_SCALE {
        return Err(PoolError::InvalidFee);
    }

    // SECURITY: Rejects self-pairing and reversed ordering
    let identity = derive_identity(asset_a, asset_b)?;

    registry.insert(Pool::new(identity, asset_a, asset_b, fee_bps))?;

    log::debug!(
        "pool initialized: pool={} authority={} share_asset={} payer={}",
        identity.pool,
        identity.authority,
        identity.share_asset,
        payer
    );

    Ok(identity)
}
