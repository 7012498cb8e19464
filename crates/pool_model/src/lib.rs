//! Pool Model - Pure constant product liquidity math for formal verification
//!
//! This crate contains the share-accounting and reserve formulas for a
//! two-asset liquidity pool, extracted from the pool program so they can be
//! verified with Kani and exercised with proptest in isolation.
//!
//! **Zero Duplication**: the production `programs/pool` crate imports and
//! uses these functions directly.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod liquidity;
pub mod math;


pub use liquidity::{
    quote_initial_deposit, quote_subsequent_deposit, quote_swap_exact_in, quote_withdraw,
    DepositQuote, SwapQuote, WithdrawQuote,
};

/// Basis points scale (10,000 bps = 100%)
pub const BPS_SCALE: u64 = 10_000;

/// Share units permanently locked on the first deposit. Keeps the share
/// price numerically stable by making a zero-supply Active pool unreachable.
pub const MINIMUM_LIQUIDITY: u64 = 1;

/// Error types for pool model operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// Amount is zero
    ZeroAmount,
    /// Arithmetic overflow
    Overflow,
    /// Division by zero
    DivisionByZero,
    /// Initial mint would not exceed the locked minimum, or a subsequent
    /// deposit would mint zero shares
    InsufficientLiquidityMinted,
    /// Reserves cannot support the requested trade
    InsufficientLiquidity,
    /// Burning more shares than the outstanding supply
    ExceedsSupply,
    /// Fee at or above 100%
    InvalidFee,
}
