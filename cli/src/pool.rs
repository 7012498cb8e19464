//! Pool creation and inspection commands

use anyhow::Result;
use colored::Colorize;

use tarn_pool::{process_initialize_pool, Address, AssetId, Pool};

use crate::config::CliConfig;
use crate::store::Store;

/// Resolve two asset names to their canonical (smaller, larger) identity
/// order. Returns the ids plus the names in the same order, so amounts can
/// follow their assets.
pub fn canonical_pair<'n>(
    name_a: &'n str,
    name_b: &'n str,
) -> (AssetId, AssetId, &'n str, &'n str) {
    let id_a = AssetId::from_seed(name_a);
    let id_b = AssetId::from_seed(name_b);
    if id_a <= id_b {
        (id_a, id_b, name_a, name_b)
    } else {
        (id_b, id_a, name_b, name_a)
    }
}

pub fn create(
    config: &CliConfig,
    asset_a: &str,
    asset_b: &str,
    fee_bps: u64,
    payer: &str,
) -> Result<()> {
    let mut store = Store::load(&config.state_path)?;
    let (id_a, id_b, name_a, name_b) = canonical_pair(asset_a, asset_b);
    let payer_id = Address::from_seed(payer);

    let identity = process_initialize_pool(&mut store.registry, &payer_id, id_a, id_b, fee_bps)?;
    store.save(&config.state_path)?;

    println!("{}", "=== Pool Created ===".bright_green().bold());
    println!("{} {} / {}", "Pair:".bright_cyan(), name_a, name_b);
    println!("{} {}", "Pool:".bright_cyan(), identity.pool);
    println!("{} {}", "Authority:".bright_cyan(), identity.authority);
    println!("{} {}", "Share asset:".bright_cyan(), identity.share_asset);
    println!("{} {}", "Fee (bps):".bright_cyan(), fee_bps);
    Ok(())
}

pub fn show(config: &CliConfig, asset_a: Option<String>, asset_b: Option<String>) -> Result<()> {
    let store = Store::load(&config.state_path)?;

    match (asset_a, asset_b) {
        (Some(a), Some(b)) => {
            let (id_a, id_b, name_a, name_b) = canonical_pair(&a, &b);
            let pool = store.registry.get(id_a, id_b)?;
            println!(
                "{}",
                format!("=== Pool {} / {} ===", name_a, name_b)
                    .bright_green()
                    .bold()
            );
            print_pool(pool);
        }
        _ => {
            println!("{}", "=== Pools ===".bright_green().bold());
            if store.registry.is_empty() {
                println!("{}", "No pools created yet".dimmed());
            }
            for pool in store.registry.iter() {
                print_pool(pool);
                println!();
            }
        }
    }
    Ok(())
}

fn print_pool(pool: &Pool) {
    println!("{} {}", "Pool:".bright_cyan(), pool.identity().pool);
    println!(
        "{} {} -> {}",
        "Asset A:".bright_cyan(),
        pool.asset_a,
        pool.reserve_a
    );
    println!(
        "{} {} -> {}",
        "Asset B:".bright_cyan(),
        pool.asset_b,
        pool.reserve_b
    );
    println!("{} {}", "Share supply:".bright_cyan(), pool.share_supply);
    println!("{} {}", "Fee (bps):".bright_cyan(), pool.fee_bps);
    if pool.is_seeded() {
        println!("{}", "State: seeded (awaiting initial deposit)".yellow());
    }
}
