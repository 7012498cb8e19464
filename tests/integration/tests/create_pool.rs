//! Pool creation lifecycle

use pool_model::BPS_SCALE;
use tarn_pool::{derive_identity, process_initialize_pool, Address, AssetId, PoolError, PoolRegistry};
use tarn_integration_tests::TestValues;

#[test]
fn creates_a_seeded_pool_with_derived_identities() {
    let values = TestValues::seeded(0);
    let pool = values.pool();

    assert!(pool.is_seeded());
    assert_eq!(pool.reserve_a, 0);
    assert_eq!(pool.reserve_b, 0);
    assert_eq!(pool.share_supply, 0);

    // The stored identity matches a fresh derivation
    let identity = derive_identity(values.asset_a, values.asset_b).unwrap();
    assert_eq!(*pool.identity(), identity);
}

#[test]
fn either_supplied_order_resolves_to_one_pool() {
    let values = TestValues::seeded(0);

    // Reversed lookup is rejected, canonical lookup succeeds: a caller who
    // sorts the pair always reaches the same pool
    assert_eq!(
        values
            .registry
            .get(values.asset_b, values.asset_a)
            .err(),
        Some(PoolError::OrderingViolation)
    );
    assert!(values.registry.get(values.asset_a, values.asset_b).is_ok());
}

#[test]
fn duplicate_creation_is_rejected() {
    let mut values = TestValues::seeded(0);
    let payer = Address::from_seed("payer");

    assert_eq!(
        process_initialize_pool(
            &mut values.registry,
            &payer,
            values.asset_a,
            values.asset_b,
            0
        ),
        Err(PoolError::PoolAlreadyExists)
    );
    assert_eq!(values.registry.len(), 1);
}

#[test]
fn self_pairing_and_bad_ordering_are_rejected() {
    let mut registry = PoolRegistry::new();
    let payer = Address::from_seed("payer");
    let x = AssetId::from_seed("asset-x");
    let y = AssetId::from_seed("asset-y");
    let (a, b) = if x < y { (x, y) } else { (y, x) };

    assert_eq!(
        process_initialize_pool(&mut registry, &payer, a, a, 0),
        Err(PoolError::SelfPairing)
    );
    assert_eq!(
        process_initialize_pool(&mut registry, &payer, b, a, 0),
        Err(PoolError::OrderingViolation)
    );
    assert!(registry.is_empty());
}

#[test]
fn fee_must_stay_below_one_hundred_percent() {
    let mut registry = PoolRegistry::new();
    let payer = Address::from_seed("payer");
    let x = AssetId::from_seed("asset-x");
    let y = AssetId::from_seed("asset-y");
    let (a, b) = if x < y { (x, y) } else { (y, x) };

    assert_eq!(
        process_initialize_pool(&mut registry, &payer, a, b, BPS_SCALE),
        Err(PoolError::InvalidFee)
    );
    assert!(process_initialize_pool(&mut registry, &payer, a, b, BPS_SCALE - 1).is_ok());
}
