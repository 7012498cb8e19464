//! Deterministic pool identity derivation
//!
//! Maps a canonically ordered asset pair to the three identities the state
//! machine needs: the pool record address, the custody authority that owns
//! pool-held reserves, and the share asset minted to depositors. Derivation
//! is a pure keyed hash, so callers on any host resolve the same pair to
//! the same identities without a registry round-trip.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::PoolError;
use crate::types::{Address, AssetId};

/// Seed tags, one per derived role
const POOL_TAG: &[u8] = b"pool";
const AUTHORITY_TAG: &[u8] = b"pool_authority";
const SHARE_TAG: &[u8] = b"share_mint";

/// The three derived identities of one pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolIdentity {
    /// Address of the pool record itself
    pub pool: Address,
    /// Custody authority owning the pool's reserve balances. Never a
    /// signer-held secret; only transition code moves balances it owns.
    pub authority: Address,
    /// The liquidity share asset for this pair
    pub share_asset: AssetId,
}

/// Derive the identities for a canonically ordered asset pair
///
/// Pure and total over valid pairs. Callers supplying assets in either
/// order must resolve to the same pool, so the canonical ordering is
/// enforced here:
///
/// # Errors
/// * `PoolError::SelfPairing` when `asset_a == asset_b`
/// * `PoolError::OrderingViolation` when `asset_a > asset_b`
pub fn derive_identity(asset_a: AssetId, asset_b: AssetId) -> Result<PoolIdentity, PoolError> {
    if asset_a == asset_b {
        return Err(PoolError::SelfPairing);
    }
    if asset_a > asset_b {
        return Err(PoolError::OrderingViolation);
    }

    Ok(PoolIdentity {
        pool: Address(derive(POOL_TAG, &asset_a, &asset_b)),
        authority: Address(derive(AUTHORITY_TAG, &asset_a, &asset_b)),
        share_asset: AssetId(derive(SHARE_TAG, &asset_a, &asset_b)),
    })
}

fn derive(tag: &[u8], asset_a: &AssetId, asset_b: &AssetId) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    hasher.update(asset_a.0);
    hasher.update(asset_b.0);
    hasher.finalize().into()
}
