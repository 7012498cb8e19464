pub mod deposit_liquidity;
pub mod initialize_pool;
pub mod swap;
pub mod withdraw_liquidity;

pub use deposit_liquidity::process_deposit_liquidity;
pub use initialize_pool::process_initialize_pool;
pub use swap::process_swap_exact_in;
pub use withdraw_liquidity::process_withdraw_liquidity;
