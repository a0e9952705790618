use crate::domain::registry::PoolRegistry;
use crate::domain::types::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relative ratio deviation above which a deposit triggers a warning (0.1%).
const RATIO_DEVIATION_TOLERANCE: Decimal = dec!(0.001);

/// Outcome of a liquidity deposit.
///
/// No ownership share is minted; the deposit only grows raw reserves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityDeposit {
    /// Pool the deposit went into
    pub pool_id: PoolId,
    /// Amount of token A added
    pub added_a: Decimal,
    /// Amount of token B added
    pub added_b: Decimal,
    /// Reserve of token A after the deposit
    pub new_reserve_a: Decimal,
    /// Reserve of token B after the deposit
    pub new_reserve_b: Decimal,
    /// Constant product after the deposit
    pub new_k: Decimal,
    /// Relative deviation (in percent) of the provided A/B ratio from the
    /// pool ratio, present only when it exceeded the tolerance
    pub ratio_deviation_percent: Option<Decimal>,
}

impl PoolRegistry {
    /// Adds liquidity to both sides of a pool.
    ///
    /// When the provided A/B ratio deviates from the pool's current ratio by
    /// more than 0.1% relative, a warning is logged and reported in the
    /// result, but the deposit still proceeds with the caller's literal
    /// amounts.
    pub fn add_liquidity(
        &mut self,
        pool_id: &PoolId,
        amount_a: Decimal,
        amount_b: Decimal,
    ) -> AmmResult<LiquidityDeposit> {
        if amount_a <= Decimal::ZERO {
            return Err(AmmError::InvalidAmount(amount_a));
        }
        if amount_b <= Decimal::ZERO {
            return Err(AmmError::InvalidAmount(amount_b));
        }
        let pool = self.pool_mut(pool_id)?;

        let mut ratio_deviation_percent = None;
        if pool.reserve_a() > Decimal::ZERO && pool.reserve_b() > Decimal::ZERO {
            let current_ratio = pool.reserve_a() / pool.reserve_b();
            let provided_ratio = amount_a / amount_b;
            let deviation = ((current_ratio - provided_ratio) / current_ratio).abs();
            if deviation > RATIO_DEVIATION_TOLERANCE {
                let deviation_percent = deviation * Decimal::from(100);
                warn!(
                    pool = %pool_id,
                    %current_ratio,
                    %provided_ratio,
                    %deviation_percent,
                    "liquidity amounts deviate from pool ratio"
                );
                ratio_deviation_percent = Some(deviation_percent);
            }
        }

        pool.add_reserves(amount_a, amount_b);

        Ok(LiquidityDeposit {
            pool_id: pool_id.clone(),
            added_a: amount_a,
            added_b: amount_b,
            new_reserve_a: pool.reserve_a(),
            new_reserve_b: pool.reserve_b(),
            new_k: pool.k(),
            ratio_deviation_percent,
        })
    }
}
