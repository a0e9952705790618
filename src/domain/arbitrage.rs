use crate::domain::registry::PoolRegistry;
use crate::domain::types::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Price divergence (in percent) above which a trade is flagged (0.5%).
const DEFAULT_THRESHOLD_PERCENT: Decimal = dec!(0.5);

/// Proposed trade size as a fraction of the token's pool reserve (1%).
const DEFAULT_TRADE_FRACTION: Decimal = dec!(0.01);

/// Comparison of a pool's spot price against an external market price.
///
/// The profit figure is a first-order estimate: it prices the whole proposed
/// trade at the observed difference and ignores the price impact the trade
/// itself would cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageAssessment {
    /// Pool spot price of the examined token, in units of its counterpart
    pub pool_price: Decimal,
    /// External market price supplied by the caller
    pub external_price: Decimal,
    /// `external_price - pool_price`
    pub price_difference: Decimal,
    /// Difference relative to the pool price, in percent
    pub price_difference_percent: Decimal,
    /// True when the divergence exceeds the analyzer's threshold
    pub arbitrage_opportunity: bool,
    /// Proposed trade size, a fixed fraction of the token's reserve
    pub optimal_trade_size: Decimal,
    /// First-order profit estimate for the proposed trade
    pub estimated_profit: Decimal,
}

impl ArbitrageAssessment {
    fn flat(pool_price: Decimal, external_price: Decimal) -> Self {
        Self {
            pool_price,
            external_price,
            price_difference: Decimal::ZERO,
            price_difference_percent: Decimal::ZERO,
            arbitrage_opportunity: false,
            optimal_trade_size: Decimal::ZERO,
            estimated_profit: Decimal::ZERO,
        }
    }
}

/// Flags pools whose spot price diverges from an external reference.
#[derive(Debug, Clone, Copy)]
pub struct ArbitrageAnalyzer {
    threshold_percent: Decimal,
    trade_fraction: Decimal,
}

impl Default for ArbitrageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitrageAnalyzer {
    /// Analyzer with the default 0.5% threshold and 1%-of-reserve sizing.
    pub fn new() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            trade_fraction: DEFAULT_TRADE_FRACTION,
        }
    }

    /// Analyzer with custom threshold and trade sizing.
    pub fn with_params(threshold_percent: Decimal, trade_fraction: Decimal) -> Self {
        Self {
            threshold_percent,
            trade_fraction,
        }
    }

    /// Divergence threshold in percent.
    pub fn threshold_percent(&self) -> Decimal {
        self.threshold_percent
    }

    /// Trade size as a fraction of the examined token's reserve.
    pub fn trade_fraction(&self) -> Decimal {
        self.trade_fraction
    }

    /// Assesses the divergence between a pool's price for `token` and an
    /// external market price for the same token.
    ///
    /// Fails with [`AmmError::PoolNotFound`] for an unknown pool and
    /// [`AmmError::InvalidToken`] when the token is not in the pool. A pool
    /// price of zero produces a flat no-opportunity result instead of a
    /// division by zero.
    pub fn assess(
        &self,
        registry: &PoolRegistry,
        pool_id: &PoolId,
        external_price: Decimal,
        token: TokenSymbol,
    ) -> AmmResult<ArbitrageAssessment> {
        let pool = registry.pool(pool_id)?;
        let (pool_price, reserve) = if token == pool.symbol_a() {
            (pool.price_a_in_b(), pool.reserve_a())
        } else if token == pool.symbol_b() {
            (pool.price_b_in_a(), pool.reserve_b())
        } else {
            return Err(AmmError::InvalidToken(token.to_string()));
        };

        if pool_price.is_zero() {
            return Ok(ArbitrageAssessment::flat(pool_price, external_price));
        }

        let price_difference = external_price - pool_price;
        let price_difference_percent = price_difference / pool_price * Decimal::from(100);
        let flagged = price_difference_percent.abs() > self.threshold_percent;

        let (optimal_trade_size, estimated_profit) = if flagged {
            let size = reserve * self.trade_fraction;
            (size, price_difference.abs() * size)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        Ok(ArbitrageAssessment {
            pool_price,
            external_price,
            price_difference,
            price_difference_percent,
            arbitrage_opportunity: flagged,
            optimal_trade_size,
            estimated_profit,
        })
    }
}
