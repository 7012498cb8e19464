//! Swap commands

use anyhow::Result;
use colored::Colorize;

use tarn_pool::{process_swap_exact_in, Address, AssetId};

use crate::config::CliConfig;
use crate::store::Store;

pub fn swap(
    config: &CliConfig,
    actor: &str,
    sell: &str,
    buy: &str,
    amount: u64,
    min_out: u64,
) -> Result<()> {
    let mut store = Store::load(&config.state_path)?;
    let trader = Address::from_seed(actor);
    let asset_in = AssetId::from_seed(sell);
    let asset_out = AssetId::from_seed(buy);

    let quote = process_swap_exact_in(
        &mut store.registry,
        &mut store.ledger,
        &trader,
        &trader,
        asset_in,
        asset_out,
        amount,
        min_out,
    )?;
    store.save(&config.state_path)?;

    println!("{}", "=== Swap Executed ===".bright_green().bold());
    println!("{} {}", "Trader:".bright_cyan(), actor);
    println!("{} {} {}", "Sold:".bright_cyan(), amount, sell);
    println!("{} {} {}", "Bought:".bright_cyan(), quote.amount_out, buy);
    Ok(())
}
