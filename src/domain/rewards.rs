use crate::domain::oracle::PriceOracle;
use crate::domain::registry::PoolRegistry;
use crate::domain::types::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Assumed daily trading volume as a fraction of pool value (5%).
const DAILY_VOLUME_RATIO: Decimal = dec!(0.05);

/// Fixed scaling applied on top of the annualized fee yield.
///
/// This multiplier is part of the reward model as shipped; it does not follow
/// from the daily-volume assumption and is kept literally rather than
/// normalized away. Treat the APY figure as a promotional projection, not a
/// derived rate.
const APY_MULTIPLIER: Decimal = dec!(30);

const DAYS_PER_YEAR: Decimal = dec!(365);
const HUNDRED: Decimal = dec!(100);

/// Projected fee income for a liquidity provider over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpRewardProjection {
    /// Anchor-denominated value of the user's share of the pool
    pub user_liquidity_value: Decimal,
    /// Modeled daily trading volume for the pool
    pub estimated_daily_volume: Decimal,
    /// Modeled daily fee income of the whole pool
    pub daily_fees_generated: Decimal,
    /// User's share of the daily fee income
    pub user_daily_fee_share: Decimal,
    /// User's fee income over the whole period
    pub user_period_rewards: Decimal,
    /// Annualized yield figure, including [`APY_MULTIPLIER`] scaling
    pub estimated_apy: Decimal,
    /// Period fee income relative to the user's liquidity value, in percent
    pub roi_percent: Decimal,
    /// Projection horizon in days
    pub period_days: u32,
}

impl LpRewardProjection {
    fn zero(period_days: u32) -> Self {
        Self {
            user_liquidity_value: Decimal::ZERO,
            estimated_daily_volume: Decimal::ZERO,
            daily_fees_generated: Decimal::ZERO,
            user_daily_fee_share: Decimal::ZERO,
            user_period_rewards: Decimal::ZERO,
            estimated_apy: Decimal::ZERO,
            roi_percent: Decimal::ZERO,
            period_days,
        }
    }
}

/// Projects liquidity-provider fee income from modeled volume.
///
/// The volume assumption (5% of pool value per day) is a modeling constant,
/// not market data. Pool value comes from the oracle's price map; reserves of
/// unpriced tokens contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardEstimator {
    oracle: PriceOracle,
}

impl RewardEstimator {
    /// Estimator using the default USDC-anchored oracle.
    pub fn new() -> Self {
        Self {
            oracle: PriceOracle::new(),
        }
    }

    /// Estimator using a custom oracle.
    pub fn with_oracle(oracle: PriceOracle) -> Self {
        Self { oracle }
    }

    /// Projects rewards for a user holding `user_liquidity_percent` of the
    /// pool over `period_days`.
    ///
    /// Fails with [`AmmError::PoolNotFound`] for an unknown pool and
    /// [`AmmError::OutOfRangeArgument`] when the percentage is outside
    /// `[0, 100]`. A pool whose total value is zero (no priced reserves)
    /// yields an all-zero projection.
    pub fn project_lp_rewards(
        &self,
        registry: &PoolRegistry,
        pool_id: &PoolId,
        user_liquidity_percent: Decimal,
        period_days: u32,
    ) -> AmmResult<LpRewardProjection> {
        let pool = registry.pool(pool_id)?;
        if user_liquidity_percent < Decimal::ZERO || user_liquidity_percent > HUNDRED {
            return Err(AmmError::OutOfRangeArgument(format!(
                "liquidity percentage must be in [0, 100], got {user_liquidity_percent}"
            )));
        }

        let prices = self.oracle.token_prices(registry);
        let total_value = registry.pool_value_locked(pool_id, &prices)?;
        if total_value.is_zero() {
            return Ok(LpRewardProjection::zero(period_days));
        }

        let share = user_liquidity_percent / HUNDRED;
        let user_liquidity_value = total_value * share;
        let estimated_daily_volume = total_value * DAILY_VOLUME_RATIO;
        let daily_fees_generated = estimated_daily_volume * pool.fee_rate();
        let user_daily_fee_share = daily_fees_generated * share;
        let user_period_rewards = user_daily_fee_share * Decimal::from(period_days);

        let (estimated_apy, roi_percent) = if user_liquidity_value > Decimal::ZERO {
            let annual_fee_share = daily_fees_generated * DAYS_PER_YEAR * share;
            (
                annual_fee_share / user_liquidity_value * HUNDRED * APY_MULTIPLIER,
                user_period_rewards / user_liquidity_value * HUNDRED,
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        Ok(LpRewardProjection {
            user_liquidity_value,
            estimated_daily_volume,
            daily_fees_generated,
            user_daily_fee_share,
            user_period_rewards,
            estimated_apy,
            roi_percent,
            period_days,
        })
    }
}
