//! Shared fixtures for the integration suite
//!
//! Builds the same world every scenario starts from: two assets, a funded
//! depositor and trader, and an initialized pool. Identities derive from
//! seed strings, so every run sees identical addresses.

use tarn_pool::{
    process_deposit_liquidity, process_initialize_pool, Address, AssetId, InMemoryLedger, Ledger,
    Pool, PoolRegistry,
};

/// Assets minted to each actor before the scenario starts
pub const DEFAULT_SUPPLY: u64 = 100_000_000;

/// The reference deposit used across scenarios
pub const DEPOSIT_AMOUNT_A: u64 = 10_000_000;
pub const DEPOSIT_AMOUNT_B: u64 = 3_000_000;

pub struct TestValues {
    pub registry: PoolRegistry,
    pub ledger: InMemoryLedger,
    pub depositor: Address,
    pub trader: Address,
    pub asset_a: AssetId,
    pub asset_b: AssetId,
}

impl TestValues {
    /// Freshly initialized pool (fee given in bps), actors funded with
    /// `DEFAULT_SUPPLY` of both assets, no deposits yet
    pub fn seeded(fee_bps: u64) -> Self {
        let x = AssetId::from_seed("asset-x");
        let y = AssetId::from_seed("asset-y");
        let (asset_a, asset_b) = if x < y { (x, y) } else { (y, x) };

        let depositor = Address::from_seed("depositor");
        let trader = Address::from_seed("trader");

        let mut registry = PoolRegistry::new();
        process_initialize_pool(&mut registry, &depositor, asset_a, asset_b, fee_bps).unwrap();

        let mut ledger = InMemoryLedger::new();
        for actor in [&depositor, &trader] {
            ledger.credit(actor, &asset_a, DEFAULT_SUPPLY).unwrap();
            ledger.credit(actor, &asset_b, DEFAULT_SUPPLY).unwrap();
        }

        Self {
            registry,
            ledger,
            depositor,
            trader,
            asset_a,
            asset_b,
        }
    }

    /// Seeded pool plus the reference initial deposit from `depositor`
    pub fn with_initial_deposit(fee_bps: u64) -> Self {
        let mut values = Self::seeded(fee_bps);
        process_deposit_liquidity(
            &mut values.registry,
            &mut values.ledger,
            &values.depositor,
            &values.depositor,
            values.asset_a,
            values.asset_b,
            DEPOSIT_AMOUNT_A,
            DEPOSIT_AMOUNT_B,
        )
        .unwrap();
        values
    }

    pub fn pool(&self) -> &Pool {
        self.registry.get(self.asset_a, self.asset_b).unwrap()
    }

    pub fn share_balance(&self, owner: &Address) -> u64 {
        self.ledger.balance(owner, &self.pool().identity().share_asset)
    }

    /// Serialized snapshot for byte-identical no-mutation assertions
    pub fn snapshot(&self) -> String {
        let registry = serde_json::to_string(&self.registry).unwrap();
        let ledger = serde_json::to_string(&self.ledger).unwrap();
        format!("{registry}\n{ledger}")
    }
}
