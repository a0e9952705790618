use crate::domain::swap::SwapQuote;
use crate::domain::types::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A constant-product liquidity pool for one token pair.
///
/// Reserves are the only mutable state; the pair assignment and fee rate are
/// fixed for the life of the pool. The invariant `k = reserve_a * reserve_b`
/// and the spot prices are always derived from current reserves, never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    symbol_a: TokenSymbol,
    symbol_b: TokenSymbol,
    reserve_a: Decimal,
    reserve_b: Decimal,
    /// Fee fraction in [0, 1), taken from the input side of every swap
    fee_rate: Decimal,
    created_at: Timestamp,
    last_update: Timestamp,
}

impl Pool {
    /// Creates a pool with the given reserves. Callers go through
    /// [`PoolRegistry::create_pool`](crate::domain::registry::PoolRegistry::create_pool),
    /// which validates tokens, amounts and fee rate first.
    pub(crate) fn new(
        symbol_a: TokenSymbol,
        symbol_b: TokenSymbol,
        reserve_a: Decimal,
        reserve_b: Decimal,
        fee_rate: Decimal,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            symbol_a,
            symbol_b,
            reserve_a,
            reserve_b,
            fee_rate,
            created_at: now,
            last_update: now,
        }
    }

    /// First token of the fixed slot assignment.
    pub fn symbol_a(&self) -> TokenSymbol {
        self.symbol_a
    }

    /// Second token of the fixed slot assignment.
    pub fn symbol_b(&self) -> TokenSymbol {
        self.symbol_b
    }

    /// Current reserve of token A.
    pub fn reserve_a(&self) -> Decimal {
        self.reserve_a
    }

    /// Current reserve of token B.
    pub fn reserve_b(&self) -> Decimal {
        self.reserve_b
    }

    /// Fee fraction charged on the input side of a swap.
    pub fn fee_rate(&self) -> Decimal {
        self.fee_rate
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Timestamp of the last reserve mutation.
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    /// Constant product `k = reserve_a * reserve_b`, recomputed on demand.
    pub fn k(&self) -> Decimal {
        self.reserve_a * self.reserve_b
    }

    /// Spot price of token A in units of token B, 0 when `reserve_a` is 0.
    pub fn price_a_in_b(&self) -> Decimal {
        if self.reserve_a.is_zero() {
            return Decimal::ZERO;
        }
        self.reserve_b / self.reserve_a
    }

    /// Spot price of token B in units of token A, 0 when `reserve_b` is 0.
    pub fn price_b_in_a(&self) -> Decimal {
        if self.reserve_b.is_zero() {
            return Decimal::ZERO;
        }
        self.reserve_a / self.reserve_b
    }

    /// Returns true if the token is one of the pool's two symbols.
    pub fn contains(&self, token: TokenSymbol) -> bool {
        token == self.symbol_a || token == self.symbol_b
    }

    /// The other member of the pair, or `None` if the token is not in the pool.
    pub fn counterpart(&self, token: TokenSymbol) -> Option<TokenSymbol> {
        if token == self.symbol_a {
            Some(self.symbol_b)
        } else if token == self.symbol_b {
            Some(self.symbol_a)
        } else {
            None
        }
    }

    /// Reserves oriented as `(reserve_in, reserve_out)` for a swap that sells
    /// `token_in` into the pool.
    pub(crate) fn oriented_reserves(&self, token_in: TokenSymbol) -> AmmResult<(Decimal, Decimal)> {
        if token_in == self.symbol_a {
            Ok((self.reserve_a, self.reserve_b))
        } else if token_in == self.symbol_b {
            Ok((self.reserve_b, self.reserve_a))
        } else {
            Err(AmmError::InvalidToken(token_in.to_string()))
        }
    }

    /// Prices a swap without mutating the pool.
    ///
    /// The fee is deducted from the input before the constant-product formula
    /// is applied: `out = reserve_out * net / (reserve_in + net)`. A negative
    /// formula result is clamped to zero; output and fee are quantized per
    /// [`quantize`].
    pub fn quote(&self, token_in: TokenSymbol, amount_in: Decimal) -> AmmResult<SwapQuote> {
        if amount_in <= Decimal::ZERO {
            return Err(AmmError::InvalidAmount(amount_in));
        }
        let (reserve_in, reserve_out) = self.oriented_reserves(token_in)?;

        let fee = quantize(amount_in * self.fee_rate);
        let net_input = amount_in - fee;
        let mut amount_out = (reserve_out * net_input) / (reserve_in + net_input);
        if amount_out < Decimal::ZERO {
            amount_out = Decimal::ZERO;
        }

        Ok(SwapQuote {
            amount_out: quantize(amount_out),
            fee,
        })
    }

    /// Applies an already-validated swap: input reserve grows by the full
    /// `amount_in` (fee included), output reserve shrinks by `amount_out`.
    pub(crate) fn apply_swap(
        &mut self,
        token_in: TokenSymbol,
        amount_in: Decimal,
        amount_out: Decimal,
    ) {
        if token_in == self.symbol_a {
            self.reserve_a += amount_in;
            self.reserve_b -= amount_out;
        } else {
            self.reserve_b += amount_in;
            self.reserve_a -= amount_out;
        }
        self.last_update = chrono::Utc::now();
    }

    /// Grows both reserves by the given deposit amounts.
    pub(crate) fn add_reserves(&mut self, amount_a: Decimal, amount_b: Decimal) {
        self.reserve_a += amount_a;
        self.reserve_b += amount_b;
        self.last_update = chrono::Utc::now();
    }

    /// Immutable view of the pool including its derived quantities.
    pub fn snapshot(&self, pool_id: PoolId) -> PoolSnapshot {
        PoolSnapshot {
            pool_id,
            token_a: self.symbol_a,
            token_b: self.symbol_b,
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            fee_rate: self.fee_rate,
            price_a_in_b: self.price_a_in_b(),
            price_b_in_a: self.price_b_in_a(),
            k: self.k(),
            last_update: self.last_update,
        }
    }
}

/// Point-in-time view of a pool with its derived prices and invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Canonical id of the pool
    pub pool_id: PoolId,
    /// First token of the fixed slot assignment
    pub token_a: TokenSymbol,
    /// Second token of the fixed slot assignment
    pub token_b: TokenSymbol,
    /// Reserve of token A
    pub reserve_a: Decimal,
    /// Reserve of token B
    pub reserve_b: Decimal,
    /// Fee fraction
    pub fee_rate: Decimal,
    /// Spot price of A in B
    pub price_a_in_b: Decimal,
    /// Spot price of B in A
    pub price_b_in_a: Decimal,
    /// Constant product at snapshot time
    pub k: Decimal,
    /// Last reserve mutation
    pub last_update: Timestamp,
}
