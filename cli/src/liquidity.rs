//! Liquidity provider commands

use anyhow::Result;
use colored::Colorize;

use tarn_pool::{process_deposit_liquidity, process_withdraw_liquidity, Address};

use crate::config::CliConfig;
use crate::pool::canonical_pair;
use crate::store::Store;

pub fn deposit(
    config: &CliConfig,
    actor: &str,
    asset_a: &str,
    asset_b: &str,
    amount_a: u64,
    amount_b: u64,
) -> Result<()> {
    let mut store = Store::load(&config.state_path)?;
    let (id_a, id_b, name_a, name_b) = canonical_pair(asset_a, asset_b);
    // Amounts follow their assets into canonical order
    let (amount_a, amount_b) = if name_a == asset_a {
        (amount_a, amount_b)
    } else {
        (amount_b, amount_a)
    };
    let depositor = Address::from_seed(actor);

    let quote = process_deposit_liquidity(
        &mut store.registry,
        &mut store.ledger,
        &depositor,
        &depositor,
        id_a,
        id_b,
        amount_a,
        amount_b,
    )?;
    store.save(&config.state_path)?;

    println!("{}", "=== Liquidity Deposited ===".bright_green().bold());
    println!("{} {}", "Depositor:".bright_cyan(), actor);
    println!("{} {} {}", "Drawn:".bright_cyan(), quote.amount_a, name_a);
    println!("{} {} {}", "Drawn:".bright_cyan(), quote.amount_b, name_b);
    println!(
        "{} {}",
        "Shares minted:".bright_cyan(),
        quote.shares_to_depositor
    );
    if quote.shares_locked > 0 {
        println!(
            "{} {}",
            "Permanently locked:".bright_cyan(),
            quote.shares_locked
        );
    }
    Ok(())
}

pub fn withdraw(
    config: &CliConfig,
    actor: &str,
    asset_a: &str,
    asset_b: &str,
    shares: u64,
) -> Result<()> {
    let mut store = Store::load(&config.state_path)?;
    let (id_a, id_b, name_a, name_b) = canonical_pair(asset_a, asset_b);
    let depositor = Address::from_seed(actor);

    let quote = process_withdraw_liquidity(
        &mut store.registry,
        &mut store.ledger,
        &depositor,
        &depositor,
        id_a,
        id_b,
        shares,
    )?;
    store.save(&config.state_path)?;

    println!("{}", "=== Liquidity Withdrawn ===".bright_green().bold());
    println!("{} {}", "Depositor:".bright_cyan(), actor);
    println!("{} {}", "Shares burned:".bright_cyan(), shares);
    println!("{} {} {}", "Received:".bright_cyan(), quote.amount_a, name_a);
    println!("{} {} {}", "Received:".bright_cyan(), quote.amount_b, name_b);
    Ok(())
}
