//! Test balance management

use anyhow::Result;
use colored::Colorize;

use tarn_pool::{Address, AssetId, Ledger};

use crate::config::CliConfig;
use crate::store::Store;

pub fn mint(config: &CliConfig, actor: &str, asset: &str, amount: u64) -> Result<()> {
    let mut store = Store::load(&config.state_path)?;
    let owner = Address::from_seed(actor);
    let asset_id = AssetId::from_seed(asset);

    store.ledger.credit(&owner, &asset_id, amount)?;
    store.save(&config.state_path)?;

    println!("{}", "=== Balance Minted ===".bright_green().bold());
    println!("{} {}", "Actor:".bright_cyan(), actor);
    println!("{} {} {}", "Minted:".bright_cyan(), amount, asset);
    println!(
        "{} {}",
        "New balance:".bright_cyan(),
        store.ledger.balance(&owner, &asset_id)
    );
    Ok(())
}

pub fn balances(config: &CliConfig, actor: &str) -> Result<()> {
    let store = Store::load(&config.state_path)?;
    let owner = Address::from_seed(actor);

    println!(
        "{}",
        format!("=== Balances of {} ===", actor).bright_green().bold()
    );
    let mut any = false;
    for (asset, amount) in store.ledger.balances_of(&owner) {
        println!("{} {}", format!("{}:", asset).bright_cyan(), amount);
        any = true;
    }
    if !any {
        println!("{}", "No balances".dimmed());
    }
    Ok(())
}
