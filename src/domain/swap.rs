use crate::domain::registry::PoolRegistry;
use crate::domain::types::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Priced swap without any state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapQuote {
    /// Amount of the opposite token the swap would pay out
    pub amount_out: Decimal,
    /// Fee charged on the input side
    pub fee: Decimal,
}

/// Outcome of an executed swap, including the post-trade spot prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapExecution {
    /// Pool the swap ran against
    pub pool_id: PoolId,
    /// Token sold into the pool
    pub token_in: TokenSymbol,
    /// Amount sold, fee included
    pub amount_in: Decimal,
    /// Token paid out
    pub token_out: TokenSymbol,
    /// Amount paid out
    pub amount_out: Decimal,
    /// Fee retained by the pool
    pub fee_paid: Decimal,
    /// Spot price of A in B after the trade
    pub new_price_a_in_b: Decimal,
    /// Spot price of B in A after the trade
    pub new_price_b_in_a: Decimal,
}

/// Hypothetical post-swap state computed without mutating the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceImpactEstimate {
    /// Amount the swap would pay out
    pub amount_out: Decimal,
    /// Fee the swap would charge
    pub fee: Decimal,
    /// Relative change of the input token's spot price, in percent (signed)
    pub price_impact_percent: Decimal,
    /// Hypothetical spot price of A in B after the trade
    pub new_price_a_in_b: Decimal,
    /// Hypothetical spot price of B in A after the trade
    pub new_price_b_in_a: Decimal,
}

impl PoolRegistry {
    /// Prices a swap against current reserves. Pure; see [`Pool::quote`].
    ///
    /// [`Pool::quote`]: crate::domain::pool::Pool::quote
    pub fn quote(
        &self,
        pool_id: &PoolId,
        token_in: TokenSymbol,
        amount_in: Decimal,
    ) -> AmmResult<SwapQuote> {
        self.pool(pool_id)?.quote(token_in, amount_in)
    }

    /// Executes a swap against the pool.
    ///
    /// The quote is always recomputed from current reserves; a caller-supplied
    /// quote could be stale. The reserve mutation is applied together with the
    /// quoted amounts or not at all, and the registry fee counter grows by the
    /// charged fee.
    pub fn execute_swap(
        &mut self,
        pool_id: &PoolId,
        token_in: TokenSymbol,
        amount_in: Decimal,
    ) -> AmmResult<SwapExecution> {
        let pool = self.pool_mut(pool_id)?;
        let quote = pool.quote(token_in, amount_in)?;
        let token_out = pool
            .counterpart(token_in)
            .ok_or_else(|| AmmError::InvalidToken(token_in.to_string()))?;

        let (_, reserve_out) = pool.oriented_reserves(token_in)?;
        if quote.amount_out >= reserve_out {
            return Err(AmmError::InsufficientLiquidity {
                pool_id: pool_id.clone(),
                token: token_out,
            });
        }

        pool.apply_swap(token_in, amount_in, quote.amount_out);
        let new_price_a_in_b = pool.price_a_in_b();
        let new_price_b_in_a = pool.price_b_in_a();
        self.collect_fee(quote.fee);

        debug!(
            pool = %pool_id,
            %token_in,
            %amount_in,
            %token_out,
            amount_out = %quote.amount_out,
            fee = %quote.fee,
            "swap executed"
        );

        Ok(SwapExecution {
            pool_id: pool_id.clone(),
            token_in,
            amount_in,
            token_out,
            amount_out: quote.amount_out,
            fee_paid: quote.fee,
            new_price_a_in_b,
            new_price_b_in_a,
        })
    }

    /// Projects the price impact of a swap without applying it.
    ///
    /// Reserves are rolled forward hypothetically and the impact is the
    /// relative change of the input token's spot price. Negative impact means
    /// selling the token cheapens it, which is the normal case.
    pub fn simulate_price_impact(
        &self,
        pool_id: &PoolId,
        token_in: TokenSymbol,
        amount_in: Decimal,
    ) -> AmmResult<PriceImpactEstimate> {
        let pool = self.pool(pool_id)?;
        let quote = pool.quote(token_in, amount_in)?;

        let mut reserve_a = pool.reserve_a();
        let mut reserve_b = pool.reserve_b();
        if token_in == pool.symbol_a() {
            reserve_a += amount_in;
            reserve_b -= quote.amount_out;
        } else {
            reserve_b += amount_in;
            reserve_a -= quote.amount_out;
        }

        let new_price_a_in_b = if reserve_a.is_zero() {
            Decimal::ZERO
        } else {
            reserve_b / reserve_a
        };
        let new_price_b_in_a = if reserve_b.is_zero() {
            Decimal::ZERO
        } else {
            reserve_a / reserve_b
        };

        let (current_price, new_price) = if token_in == pool.symbol_a() {
            (pool.price_a_in_b(), new_price_a_in_b)
        } else {
            (pool.price_b_in_a(), new_price_b_in_a)
        };
        let price_impact_percent = if current_price.is_zero() {
            Decimal::ZERO
        } else {
            (new_price - current_price) / current_price * Decimal::from(100)
        };

        Ok(PriceImpactEstimate {
            amount_out: quote.amount_out,
            fee: quote.fee,
            price_impact_percent,
            new_price_a_in_b,
            new_price_b_in_a,
        })
    }
}
