//! Kani proof harnesses for the pool model
//!
//! Run with `cargo kani` from this crate. Each module proves one family of
//! safety properties over the pure functions in `pool_model`.

#[cfg(kani)]
pub mod liquidity;
