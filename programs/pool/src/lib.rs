//! Tarn pool program - two-asset constant product liquidity pools
//!
//! The pool state machine over an injected ledger environment. Each
//! operation (initialize, deposit, withdraw, swap) is a bounded synchronous
//! computation executed against `&mut` state, so operations on one pool are
//! serialized by construction and either apply completely or leave every
//! balance untouched.
//!
//! All share and reserve arithmetic is imported from the verified
//! `pool_model` crate; this crate adds identity derivation, the registry,
//! the escrow gateway, and the operation preconditions.

pub mod errors;
pub mod identity;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;
pub mod types;

pub use errors::PoolError;
pub use identity::{derive_identity, PoolIdentity};
pub use instructions::{
    process_deposit_liquidity, process_initialize_pool, process_swap_exact_in,
    process_withdraw_liquidity,
};
pub use ledger::{InMemoryLedger, Ledger};
pub use state::{Pool, PoolRegistry};
pub use types::{Address, AssetId};
