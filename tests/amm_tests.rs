use ecosystem_amm::domain::{registry::PoolRegistry, types::*};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn hisa_usdc_registry() -> (PoolRegistry, PoolId) {
    let mut registry = PoolRegistry::new();
    let pool_id = registry
        .create_pool(
            TokenSymbol::Hisa,
            TokenSymbol::Usdc,
            dec!(100000),
            dec!(500000),
            dec!(0.003),
        )
        .unwrap();
    (registry, pool_id)
}

#[test]
fn test_create_pool_returns_canonical_id() {
    let mut registry = PoolRegistry::new();
    let pool_id = registry
        .create_pool(
            TokenSymbol::Usdc,
            TokenSymbol::Hisa,
            dec!(500000),
            dec!(100000),
            dec!(0.003),
        )
        .unwrap();
    // Sorted pair, independent of argument order
    assert_eq!(pool_id.as_str(), "HISA-USDC");
}

#[test]
fn test_duplicate_pair_rejected_regardless_of_order() {
    let (mut registry, _) = hisa_usdc_registry();
    for (a, b) in [
        (TokenSymbol::Hisa, TokenSymbol::Usdc),
        (TokenSymbol::Usdc, TokenSymbol::Hisa),
    ] {
        let err = registry
            .create_pool(a, b, dec!(1), dec!(1), dec!(0.003))
            .unwrap_err();
        assert!(matches!(err, AmmError::DuplicatePool(_)));
    }
}

#[test]
fn test_quote_reference_scenario_is_deterministic() {
    let (registry, pool_id) = hisa_usdc_registry();

    // 1000 USDC in at 0.3%: fee = 3, net = 997,
    // out = 100000 * 997 / 500997 = 199.0031497...
    let quote = registry
        .quote(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    assert_eq!(quote.fee, dec!(3));
    assert!(quote.amount_out > dec!(199.003));
    assert!(quote.amount_out < dec!(199.004));

    // Truncation rule makes repeated quotes bit-identical
    for _ in 0..10 {
        let again = registry
            .quote(&pool_id, TokenSymbol::Usdc, dec!(1000))
            .unwrap();
        assert_eq!(again.amount_out, quote.amount_out);
        assert_eq!(again.fee, quote.fee);
    }
}

#[test]
fn test_quote_is_pure() {
    let (registry, pool_id) = hisa_usdc_registry();
    registry
        .quote(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    let snapshot = registry.snapshot(&pool_id).unwrap();
    assert_eq!(snapshot.reserve_a, dec!(100000));
    assert_eq!(snapshot.reserve_b, dec!(500000));
}

#[test]
fn test_k_never_decreases_with_fee() {
    let (mut registry, pool_id) = hisa_usdc_registry();
    let mut k_before = registry.snapshot(&pool_id).unwrap().k;

    for amount in [dec!(10), dec!(1000), dec!(50000), dec!(0.001)] {
        registry
            .execute_swap(&pool_id, TokenSymbol::Usdc, amount)
            .unwrap();
        let k_after = registry.snapshot(&pool_id).unwrap().k;
        assert!(k_after >= k_before, "k shrank after swapping {amount}");
        k_before = k_after;
    }
}

#[test]
fn test_k_conserved_without_fee() {
    let mut registry = PoolRegistry::new();
    let pool_id = registry
        .create_pool(
            TokenSymbol::Hisa,
            TokenSymbol::Usdc,
            dec!(100000),
            dec!(500000),
            dec!(0),
        )
        .unwrap();

    let k_before = registry.snapshot(&pool_id).unwrap().k;
    registry
        .execute_swap(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    let k_after = registry.snapshot(&pool_id).unwrap().k;

    // Output truncation can only leave k at or marginally above its old value
    assert!(k_after >= k_before);
    let drift = (k_after - k_before) / k_before;
    assert!(drift < dec!(0.0000001));
}

#[test]
fn test_round_trip_erodes_input() {
    let (mut registry, pool_id) = hisa_usdc_registry();

    let first = registry
        .execute_swap(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    let second = registry
        .execute_swap(&pool_id, TokenSymbol::Hisa, first.amount_out)
        .unwrap();

    assert_eq!(second.token_out, TokenSymbol::Usdc);
    assert!(second.amount_out < dec!(1000));
}

#[test]
fn test_extreme_swap_leaves_positive_reserves() {
    let (mut registry, pool_id) = hisa_usdc_registry();
    registry
        .execute_swap(&pool_id, TokenSymbol::Usdc, dec!(100000000000))
        .unwrap();

    let snapshot = registry.snapshot(&pool_id).unwrap();
    assert!(snapshot.reserve_a > Decimal::ZERO);
    assert!(snapshot.reserve_b > Decimal::ZERO);
}

#[test]
fn test_fee_counter_accumulates_across_pools() {
    let mut registry = PoolRegistry::new();
    let hisa = registry
        .create_pool(
            TokenSymbol::Hisa,
            TokenSymbol::Usdc,
            dec!(100000),
            dec!(500000),
            dec!(0.003),
        )
        .unwrap();
    let jani = registry
        .create_pool(
            TokenSymbol::Jani,
            TokenSymbol::Usdc,
            dec!(50000),
            dec!(250000),
            dec!(0.001),
        )
        .unwrap();

    registry
        .execute_swap(&hisa, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    registry
        .execute_swap(&jani, TokenSymbol::Usdc, dec!(1000))
        .unwrap();

    // 0.3% of 1000 plus 0.1% of 1000
    assert_eq!(registry.total_fees_collected(), dec!(4));
}

#[test]
fn test_add_liquidity_then_swap() {
    let (mut registry, pool_id) = hisa_usdc_registry();
    let deposit = registry
        .add_liquidity(&pool_id, dec!(10000), dec!(50000))
        .unwrap();
    assert!(deposit.ratio_deviation_percent.is_none());
    assert_eq!(deposit.new_k, dec!(110000) * dec!(550000));

    // Deeper pool, smaller impact for the same trade
    let quote_after = registry
        .quote(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    assert!(quote_after.amount_out > Decimal::ZERO);
}

#[test]
fn test_simulate_matches_execution() {
    let (mut registry, pool_id) = hisa_usdc_registry();
    let estimate = registry
        .simulate_price_impact(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();
    let execution = registry
        .execute_swap(&pool_id, TokenSymbol::Usdc, dec!(1000))
        .unwrap();

    assert_eq!(estimate.amount_out, execution.amount_out);
    assert_eq!(estimate.fee, execution.fee_paid);
    assert_eq!(estimate.new_price_a_in_b, execution.new_price_a_in_b);
    assert_eq!(estimate.new_price_b_in_a, execution.new_price_b_in_a);
}
