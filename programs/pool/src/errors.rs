//! Error taxonomy for pool operations
//!
//! Every failure aborts the whole operation with no partial state mutation,
//! and the caller receives the specific kind, never a generic failure.

use pool_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    // Arithmetic engine
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
    #[error("division by zero")]
    DivisionByZero,

    // Registry / initialize
    #[error("a pool cannot pair an asset with itself")]
    SelfPairing,
    #[error("assets must be supplied in canonical order")]
    OrderingViolation,
    #[error("a pool for this asset pair already exists")]
    PoolAlreadyExists,
    #[error("no pool exists for this asset pair")]
    PoolNotFound,
    #[error("pool fee must be below 100%")]
    InvalidFee,

    // Deposit
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("deposit too small to mint liquidity")]
    InsufficientLiquidityMinted,
    #[error("depositor balance is below the required draw amount")]
    InsufficientDepositorBalance,

    // Withdraw
    #[error("share balance is below the requested burn")]
    InsufficientShareBalance,
    #[error("withdrawal exceeds the outstanding share supply")]
    WithdrawalExceedsSupply,

    // Swap
    #[error("reserves cannot support the requested trade")]
    InsufficientLiquidity,
    #[error("swap output is below the requested minimum")]
    SlippageExceeded,

    // Escrow gateway
    #[error("signer does not control the source account")]
    Unauthorized,
    #[error("insufficient balance")]
    InsufficientBalance,
}

impl From<ModelError> for PoolError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::ZeroAmount => PoolError::ZeroAmount,
            ModelError::Overflow => PoolError::ArithmeticOverflow,
            ModelError::DivisionByZero => PoolError::DivisionByZero,
            ModelError::InsufficientLiquidityMinted => PoolError::InsufficientLiquidityMinted,
            ModelError::InsufficientLiquidity => PoolError::InsufficientLiquidity,
            ModelError::ExceedsSupply => PoolError::WithdrawalExceedsSupply,
            ModelError::InvalidFee => PoolError::InvalidFee,
        }
    }
}
