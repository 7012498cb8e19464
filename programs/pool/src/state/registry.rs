//! Pool registry keyed by derived pool identity
//!
//! At most one pool exists per unordered asset pair. Lookups go through
//! `derive_identity`, so a caller supplying the pair in the wrong order is
//! rejected before the map is consulted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::PoolError;
use crate::identity::derive_identity;
use crate::state::Pool;
use crate::types::{Address, AssetId};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PoolRegistry {
    pools: BTreeMap<Address, Pool>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the pool for a canonical pair
    pub fn get(&self, asset_a: AssetId, asset_b: AssetId) -> Result<&Pool, PoolError> {
        let identity = derive_identity(asset_a, asset_b)?;
        self.pools.get(&identity.pool).ok_or(PoolError::PoolNotFound)
    }

    pub(crate) fn get_mut(
        &mut self,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<&mut Pool, PoolError> {
        let identity = derive_identity(asset_a, asset_b)?;
        self.pools
            .get_mut(&identity.pool)
            .ok_or(PoolError::PoolNotFound)
    }

    pub(crate) fn insert(&mut self, pool: Pool) -> Result<(), PoolError> {
        let key = pool.identity().pool;
        if self.pools.contains_key(&key) {
            return Err(PoolError::PoolAlreadyExists);
        }
        self.pools.insert(key, pool);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
