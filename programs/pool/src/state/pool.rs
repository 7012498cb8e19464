//! The pool record

use serde::{Deserialize, Serialize};

use crate::identity::PoolIdentity;
use crate::types::AssetId;

use pool_model::MINIMUM_LIQUIDITY;

/// One pool per canonical (asset_a, asset_b) pair
///
/// Field invariants, preserved by every transition:
/// - `asset_a < asset_b`
/// - `share_supply == 0` iff both reserves are zero (Seeded state)
/// - once Active, `reserve_a * reserve_b` never decreases except through a
///   withdrawal burning shares proportionally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    /// Lexicographically smaller asset of the pair
    pub asset_a: AssetId,
    /// Lexicographically larger asset of the pair
    pub asset_b: AssetId,
    /// Pool-held balance of asset A
    pub reserve_a: u64,
    /// Pool-held balance of asset B
    pub reserve_b: u64,
    /// Outstanding liquidity shares, including the locked minimum
    pub share_supply: u64,
    /// Swap fee in basis points, fixed at creation
    pub fee_bps: u64,
    identity: PoolIdentity,
}

impl Pool {
    pub(crate) fn new(identity: PoolIdentity, asset_a: AssetId, asset_b: AssetId, fee_bps: u64) -> Self {
        Self {
            asset_a,
            asset_b,
            reserve_a: 0,
            reserve_b: 0,
            share_supply: 0,
            fee_bps,
            identity,
        }
    }

    pub fn identity(&self) -> &PoolIdentity {
        &self.identity
    }

    /// Seeded: initialized but never deposited into (or drained back to
    /// zero). The next deposit follows the initial-deposit rule.
    pub fn is_seeded(&self) -> bool {
        self.share_supply == 0
    }

    /// Supply actually redeemable by holders; the locked minimum is
    /// assigned to no one and never burns.
    pub fn redeemable_supply(&self) -> u64 {
        self.share_supply.saturating_sub(MINIMUM_LIQUIDITY)
    }
}
