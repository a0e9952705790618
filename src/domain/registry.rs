use crate::domain::pool::{Pool, PoolSnapshot};
use crate::domain::types::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Owner of every pool in the ecosystem, keyed by canonical pair id.
///
/// The registry is the single source of truth for reserves. It also carries
/// the process-lifetime fee counter, which only
/// [`execute_swap`](PoolRegistry::execute_swap) increases.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: HashMap<PoolId, Pool>,
    total_fees_collected: Decimal,
}

impl PoolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pool for an unordered token pair.
    ///
    /// Fails with [`AmmError::InvalidToken`] when the two symbols are equal,
    /// [`AmmError::DuplicatePool`] when a pool for the pair already exists
    /// (regardless of argument order), [`AmmError::InvalidAmount`] on
    /// non-positive initial reserves and [`AmmError::OutOfRangeArgument`]
    /// when the fee rate is outside `[0, 1)`.
    pub fn create_pool(
        &mut self,
        token_a: TokenSymbol,
        token_b: TokenSymbol,
        initial_a: Decimal,
        initial_b: Decimal,
        fee_rate: Decimal,
    ) -> AmmResult<PoolId> {
        if token_a == token_b {
            return Err(AmmError::InvalidToken(format!(
                "pool requires two distinct tokens, got {token_a} twice"
            )));
        }
        if initial_a <= Decimal::ZERO {
            return Err(AmmError::InvalidAmount(initial_a));
        }
        if initial_b <= Decimal::ZERO {
            return Err(AmmError::InvalidAmount(initial_b));
        }
        if fee_rate < Decimal::ZERO || fee_rate >= Decimal::ONE {
            return Err(AmmError::OutOfRangeArgument(format!(
                "fee rate must be in [0, 1), got {fee_rate}"
            )));
        }

        let pool_id = PoolId::canonical(token_a, token_b);
        if self.pools.contains_key(&pool_id) {
            return Err(AmmError::DuplicatePool(pool_id));
        }

        self.pools.insert(
            pool_id.clone(),
            Pool::new(token_a, token_b, initial_a, initial_b, fee_rate),
        );
        info!(
            pool = %pool_id,
            %initial_a,
            %initial_b,
            %fee_rate,
            "pool created"
        );
        Ok(pool_id)
    }

    /// Immutable snapshot of a pool, including derived prices and `k`.
    pub fn snapshot(&self, pool_id: &PoolId) -> AmmResult<PoolSnapshot> {
        self.pool(pool_id).map(|pool| pool.snapshot(pool_id.clone()))
    }

    /// Returns true if a pool exists for the id.
    pub fn contains(&self, pool_id: &PoolId) -> bool {
        self.pools.contains_key(pool_id)
    }

    /// Number of registered pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns true if no pools are registered.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// All pool ids, sorted for stable presentation.
    pub fn pool_ids(&self) -> Vec<PoolId> {
        let mut ids: Vec<PoolId> = self.pools.keys().cloned().collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids
    }

    /// Lifetime sum of fees collected by swaps across all pools.
    pub fn total_fees_collected(&self) -> Decimal {
        self.total_fees_collected
    }

    pub(crate) fn pool(&self, pool_id: &PoolId) -> AmmResult<&Pool> {
        self.pools
            .get(pool_id)
            .ok_or_else(|| AmmError::PoolNotFound(pool_id.clone()))
    }

    pub(crate) fn pool_mut(&mut self, pool_id: &PoolId) -> AmmResult<&mut Pool> {
        self.pools
            .get_mut(pool_id)
            .ok_or_else(|| AmmError::PoolNotFound(pool_id.clone()))
    }

    pub(crate) fn pools(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    pub(crate) fn collect_fee(&mut self, fee: Decimal) {
        self.total_fees_collected += fee;
    }

    /// Value of one pool's reserves under the given price map. Tokens absent
    /// from the map contribute 0.
    pub fn pool_value_locked(
        &self,
        pool_id: &PoolId,
        prices: &HashMap<TokenSymbol, Decimal>,
    ) -> AmmResult<Decimal> {
        let pool = self.pool(pool_id)?;
        let value_a = prices
            .get(&pool.symbol_a())
            .map(|price| pool.reserve_a() * price)
            .unwrap_or(Decimal::ZERO);
        let value_b = prices
            .get(&pool.symbol_b())
            .map(|price| pool.reserve_b() * price)
            .unwrap_or(Decimal::ZERO);
        Ok(value_a + value_b)
    }

    /// Total value locked across all pools under the given price map.
    pub fn total_value_locked(&self, prices: &HashMap<TokenSymbol, Decimal>) -> Decimal {
        self.pools
            .values()
            .map(|pool| {
                let value_a = prices
                    .get(&pool.symbol_a())
                    .map(|price| pool.reserve_a() * price)
                    .unwrap_or(Decimal::ZERO);
                let value_b = prices
                    .get(&pool.symbol_b())
                    .map(|price| pool.reserve_b() * price)
                    .unwrap_or(Decimal::ZERO);
                value_a + value_b
            })
            .sum()
    }
}

/// Thread-safe wrapper around [`PoolRegistry`].
///
/// A swap recomputes its quote and applies the reserve mutation under a
/// single write lock, so concurrent swaps can never price against stale
/// reserves. Read-side consumers observe one consistent registry state per
/// call.
#[derive(Debug, Clone, Default)]
pub struct ThreadSafeRegistry {
    inner: Arc<RwLock<PoolRegistry>>,
}

impl ThreadSafeRegistry {
    /// Creates a wrapper around an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pool with a write lock.
    pub fn create_pool(
        &self,
        token_a: TokenSymbol,
        token_b: TokenSymbol,
        initial_a: Decimal,
        initial_b: Decimal,
        fee_rate: Decimal,
    ) -> AmmResult<PoolId> {
        self.inner
            .write()
            .expect("Failed to acquire write lock")
            .create_pool(token_a, token_b, initial_a, initial_b, fee_rate)
    }

    /// Pool snapshot with a read lock.
    pub fn snapshot(&self, pool_id: &PoolId) -> AmmResult<PoolSnapshot> {
        self.inner
            .read()
            .expect("Failed to acquire read lock")
            .snapshot(pool_id)
    }

    /// All pool ids with a read lock.
    pub fn pool_ids(&self) -> Vec<PoolId> {
        self.inner
            .read()
            .expect("Failed to acquire read lock")
            .pool_ids()
    }

    /// Lifetime fee total with a read lock.
    pub fn total_fees_collected(&self) -> Decimal {
        self.inner
            .read()
            .expect("Failed to acquire read lock")
            .total_fees_collected()
    }

    /// Prices a swap with a read lock.
    pub fn quote(
        &self,
        pool_id: &PoolId,
        token_in: TokenSymbol,
        amount_in: Decimal,
    ) -> AmmResult<crate::domain::swap::SwapQuote> {
        self.inner
            .read()
            .expect("Failed to acquire read lock")
            .quote(pool_id, token_in, amount_in)
    }

    /// Executes a swap; quote recomputation and reserve mutation happen under
    /// the same write lock.
    pub fn execute_swap(
        &self,
        pool_id: &PoolId,
        token_in: TokenSymbol,
        amount_in: Decimal,
    ) -> AmmResult<crate::domain::swap::SwapExecution> {
        self.inner
            .write()
            .expect("Failed to acquire write lock")
            .execute_swap(pool_id, token_in, amount_in)
    }

    /// Adds liquidity with a write lock.
    pub fn add_liquidity(
        &self,
        pool_id: &PoolId,
        amount_a: Decimal,
        amount_b: Decimal,
    ) -> AmmResult<crate::domain::liquidity::LiquidityDeposit> {
        self.inner
            .write()
            .expect("Failed to acquire write lock")
            .add_liquidity(pool_id, amount_a, amount_b)
    }

    /// Runs a read-only closure against one consistent registry state.
    /// Analytics consumers use this to evaluate oracle prices, reward
    /// projections and arbitrage assessments without tearing.
    pub fn with_read<R>(&self, f: impl FnOnce(&PoolRegistry) -> R) -> R {
        f(&self.inner.read().expect("Failed to acquire read lock"))
    }
}

impl From<PoolRegistry> for ThreadSafeRegistry {
    fn from(registry: PoolRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}
