//! Tarn CLI - drive constant product liquidity pools locally
//!
//! Operates the pool state machine against a JSON-persisted in-memory
//! ledger, so the full lifecycle (create, deposit, swap, withdraw) can be
//! exercised without any chain infrastructure. Actors and assets are named
//! by seed strings; their 32-byte identities are derived deterministically.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod liquidity;
mod pool;
mod store;
mod trading;
mod wallet;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "tarn")]
#[command(about = "Tarn liquidity pools - create and drive local AMM pools", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the state file (overrides config)
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and inspect pools
    Pool {
        #[command(subcommand)]
        command: PoolCommands,
    },

    /// Deposit and withdraw liquidity
    Liquidity {
        #[command(subcommand)]
        command: LiquidityCommands,
    },

    /// Swap an exact input amount through a pool
    Swap {
        /// Acting trader (seed name)
        #[arg(short, long)]
        actor: String,

        /// Asset to sell (seed name)
        #[arg(long)]
        sell: String,

        /// Asset to buy (seed name)
        #[arg(long)]
        buy: String,

        /// Exact input amount, fee included
        #[arg(long)]
        amount: u64,

        /// Minimum acceptable output
        #[arg(long, default_value = "0")]
        min_out: u64,
    },

    /// Manage test balances
    Wallet {
        #[command(subcommand)]
        command: WalletCommands,
    },
}

#[derive(Subcommand)]
enum PoolCommands {
    /// Create a pool for an asset pair
    Create {
        /// First asset (seed name)
        #[arg(long)]
        asset_a: String,

        /// Second asset (seed name)
        #[arg(long)]
        asset_b: String,

        /// Swap fee in basis points, fixed for the pool's lifetime
        #[arg(long, default_value = "0")]
        fee_bps: u64,

        /// Paying actor (seed name)
        #[arg(short, long)]
        payer: String,
    },

    /// Show one pool, or every pool when no pair is given
    Show {
        #[arg(long)]
        asset_a: Option<String>,

        #[arg(long)]
        asset_b: Option<String>,
    },
}

#[derive(Subcommand)]
enum LiquidityCommands {
    /// Deposit liquidity and receive shares
    Deposit {
        /// Acting depositor (seed name)
        #[arg(short, long)]
        actor: String,

        #[arg(long)]
        asset_a: String,

        #[arg(long)]
        asset_b: String,

        /// Amount of the first asset
        #[arg(long)]
        amount_a: u64,

        /// Amount of the second asset (repriced from the live ratio on
        /// active pools)
        #[arg(long)]
        amount_b: u64,
    },

    /// Burn shares and withdraw the pro-rata slice
    Withdraw {
        /// Acting depositor (seed name)
        #[arg(short, long)]
        actor: String,

        #[arg(long)]
        asset_a: String,

        #[arg(long)]
        asset_b: String,

        /// Shares to burn
        #[arg(long)]
        shares: u64,
    },
}

#[derive(Subcommand)]
enum WalletCommands {
    /// Mint test balances to an actor
    Mint {
        /// Receiving actor (seed name)
        #[arg(short, long)]
        actor: String,

        /// Asset (seed name)
        #[arg(long)]
        asset: String,

        #[arg(long)]
        amount: u64,
    },

    /// Show every balance an actor holds
    Balances {
        /// Actor (seed name)
        #[arg(short, long)]
        actor: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = CliConfig::resolve(cli.config, cli.state)?;

    match cli.command {
        Commands::Pool { command } => match command {
            PoolCommands::Create {
                asset_a,
                asset_b,
                fee_bps,
                payer,
            } => pool::create(&config, &asset_a, &asset_b, fee_bps, &payer),
            PoolCommands::Show { asset_a, asset_b } => pool::show(&config, asset_a, asset_b),
        },
        Commands::Liquidity { command } => match command {
            LiquidityCommands::Deposit {
                actor,
                asset_a,
                asset_b,
                amount_a,
                amount_b,
            } => liquidity::deposit(&config, &actor, &asset_a, &asset_b, amount_a, amount_b),
            LiquidityCommands::Withdraw {
                actor,
                asset_a,
                asset_b,
                shares,
            } => liquidity::withdraw(&config, &actor, &asset_a, &asset_b, shares),
        },
        Commands::Swap {
            actor,
            sell,
            buy,
            amount,
            min_out,
        } => trading::swap(&config, &actor, &sell, &buy, amount, min_out),
        Commands::Wallet { command } => match command {
            WalletCommands::Mint {
                actor,
                asset,
                amount,
            } => wallet::mint(&config, &actor, &asset, amount),
            WalletCommands::Balances { actor } => wallet::balances(&config, &actor),
        },
    }
}
