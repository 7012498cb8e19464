//! Escrow transfer gateway and the injected ledger environment
//!
//! The `Ledger` trait is the opaque environment the pool core reads from
//! and writes to: per-owner, per-asset balance bookkeeping with atomic
//! credit/debit. `EscrowGateway` is the internal-only interface through
//! which transition code moves pool-held balances; its constructor is
//! crate-private, so nothing outside the state machine can touch reserves
//! held by a pool's custody authority.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::PoolError;
use crate::identity::PoolIdentity;
use crate::types::{Address, AssetId};

/// The external ledger environment
///
/// Each method is atomic: it either applies fully or fails without effect.
/// The pool core never calls a method whose failure could leave an
/// operation half-applied; every fallible condition is checked before the
/// first mutation.
pub trait Ledger {
    /// Current balance, zero for accounts that have never been touched
    fn balance(&self, owner: &Address, asset: &AssetId) -> u64;

    /// Add `amount` to a balance
    fn credit(&mut self, owner: &Address, asset: &AssetId, amount: u64) -> Result<(), PoolError>;

    /// Remove `amount` from a balance
    ///
    /// Fails with `PoolError::InsufficientBalance` without partial effect.
    fn debit(&mut self, owner: &Address, asset: &AssetId, amount: u64) -> Result<(), PoolError>;
}

/// Gateway binding a ledger to one pool's custody authority and share asset
///
/// Constructed only by transition code (`pub(crate)`), which realizes the
/// capability model: the authority is not a signer-held secret, it is an
/// address only this gateway ever debits.
pub struct EscrowGateway<'a, L: Ledger> {
    ledger: &'a mut L,
    authority: Address,
    share_asset: AssetId,
}

impl<'a, L: Ledger> EscrowGateway<'a, L> {
    pub(crate) fn new(ledger: &'a mut L, identity: &PoolIdentity) -> Self {
        Self {
            ledger,
            authority: identity.authority,
            share_asset: identity.share_asset,
        }
    }

    pub(crate) fn balance(&self, owner: &Address, asset: &AssetId) -> u64 {
        self.ledger.balance(owner, asset)
    }

    pub(crate) fn share_balance(&self, owner: &Address) -> u64 {
        self.ledger.balance(owner, &self.share_asset)
    }

    /// Move assets from a depositor into pool custody
    pub(crate) fn pull_to_pool(
        &mut self,
        from: &Address,
        asset: &AssetId,
        amount: u64,
    ) -> Result<(), PoolError> {
        self.ledger.debit(from, asset, amount)?;
        self.ledger.credit(&self.authority, asset, amount)
    }

    /// Move assets out of pool custody to a recipient
    pub(crate) fn push_from_pool(
        &mut self,
        to: &Address,
        asset: &AssetId,
        amount: u64,
    ) -> Result<(), PoolError> {
        self.ledger.debit(&self.authority, asset, amount)?;
        self.ledger.credit(to, asset, amount)
    }

    /// Mint liquidity shares to a depositor
    pub(crate) fn mint_shares(&mut self, to: &Address, amount: u64) -> Result<(), PoolError> {
        self.ledger.credit(to, &self.share_asset, amount)
    }

    /// Burn liquidity shares held by a depositor
    pub(crate) fn burn_shares(&mut self, from: &Address, amount: u64) -> Result<(), PoolError> {
        self.ledger
            .debit(from, &self.share_asset, amount)
            .map_err(|_| PoolError::InsufficientShareBalance)
    }
}

/// Deterministic in-process ledger used by the CLI and every test
///
/// Balances live in ordered maps so serialized state is stable across runs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InMemoryLedger {
    balances: BTreeMap<Address, BTreeMap<AssetId, u64>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All balances of one owner, for display
    pub fn balances_of(&self, owner: &Address) -> impl Iterator<Item = (&AssetId, u64)> {
        self.balances
            .get(owner)
            .into_iter()
            .flat_map(|assets| assets.iter().map(|(asset, amount)| (asset, *amount)))
    }
}

impl Ledger for InMemoryLedger {
    fn balance(&self, owner: &Address, asset: &AssetId) -> u64 {
        self.balances
            .get(owner)
            .and_then(|assets| assets.get(asset))
            .copied()
            .unwrap_or(0)
    }

    fn credit(&mut self, owner: &Address, asset: &AssetId, amount: u64) -> Result<(), PoolError> {
        let entry = self
            .balances
            .entry(*owner)
            .or_default()
            .entry(*asset)
            .or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        Ok(())
    }

    fn debit(&mut self, owner: &Address, asset: &AssetId, amount: u64) -> Result<(), PoolError> {
        let entry = self
            .balances
            .get_mut(owner)
            .and_then(|assets| assets.get_mut(asset))
            .filter(|balance| **balance >= amount)
            .ok_or(PoolError::InsufficientBalance)?;
        *entry -= amount;
        Ok(())
    }
}
