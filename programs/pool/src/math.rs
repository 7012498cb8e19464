//! Liquidity math - Imports VERIFIED functions
//!
//! This module imports the verified share-accounting functions from
//! `pool_model`. All liquidity arithmetic is covered by the Kani proofs in
//! `crates/proofs/kani` (P1-P4). Do not duplicate the formulas here -
//! always go through the verified functions.

/// Re-export verified functions and types
pub use pool_model::{
    self, quote_initial_deposit, quote_subsequent_deposit, quote_swap_exact_in, quote_withdraw,
    DepositQuote, ModelError, SwapQuote, WithdrawQuote, BPS_SCALE, MINIMUM_LIQUIDITY,
};
