//! # Ecosystem AMM demo
//!
//! Non-interactive entry point: seeds the genesis pools, reports derived
//! token prices, runs a sample swap and shows the analytics working against
//! the mutated state. Everything is reported through tracing; the core never
//! prints.

use ecosystem_amm::utils::logger::setup_logger;
use ecosystem_amm::*;
use rust_decimal_macros::dec;
use tracing::info;

fn main() -> anyhow::Result<()> {
    setup_logger().expect("Failed to initialize logger");

    info!("Starting Ecosystem AMM v{}", VERSION);

    let config = EcosystemConfig::builtin();
    for ecosystem in &config.ecosystems {
        info!(
            name = %ecosystem.name,
            pools = ecosystem.pools.len(),
            "ecosystem profile loaded"
        );
    }

    let registry: ThreadSafeRegistry = config.build_registry()?.into();
    info!(pools = registry.pool_ids().len(), "genesis pools created");

    let prices = registry.with_read(|reg| PriceOracle::new().token_prices(reg));
    for symbol in TokenSymbol::ALL {
        match prices.get(&symbol) {
            Some(price) => info!(token = %symbol, %price, "derived price"),
            None => info!(token = %symbol, "no path to anchor, unpriced"),
        }
    }

    let pool_id = PoolId::canonical(TokenSymbol::Hisa, TokenSymbol::Usdc);

    let estimate = registry.with_read(|reg| {
        reg.simulate_price_impact(&pool_id, TokenSymbol::Usdc, dec!(1000))
    })?;
    info!(
        amount_out = %estimate.amount_out,
        fee = %estimate.fee,
        impact_percent = %estimate.price_impact_percent,
        "simulated swapping 1000 USDC into HISA-USDC"
    );

    let execution = registry.execute_swap(&pool_id, TokenSymbol::Usdc, dec!(1000))?;
    info!(
        amount_out = %execution.amount_out,
        fee = %execution.fee_paid,
        new_price = %execution.new_price_a_in_b,
        "swap executed"
    );
    info!(total_fees = %registry.total_fees_collected(), "fees collected so far");

    let projection = registry.with_read(|reg| {
        RewardEstimator::new().project_lp_rewards(reg, &pool_id, dec!(10), 30)
    })?;
    info!(
        user_value = %projection.user_liquidity_value,
        period_rewards = %projection.user_period_rewards,
        apy = %projection.estimated_apy,
        roi = %projection.roi_percent,
        "reward projection for a 10% provider over 30 days"
    );

    let assessment = registry.with_read(|reg| {
        ArbitrageAnalyzer::new().assess(reg, &pool_id, dec!(5.5), TokenSymbol::Hisa)
    })?;
    info!(
        pool_price = %assessment.pool_price,
        external_price = %assessment.external_price,
        opportunity = assessment.arbitrage_opportunity,
        trade_size = %assessment.optimal_trade_size,
        estimated_profit = %assessment.estimated_profit,
        "arbitrage assessment vs external HISA price 5.5"
    );

    Ok(())
}
