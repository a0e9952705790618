use crate::domain::registry::PoolRegistry;
use crate::domain::types::TokenSymbol;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Prices keyed by token, in units of the oracle's anchor.
pub type PriceMap = HashMap<TokenSymbol, Decimal>;

/// Derives an anchor-denominated price for every token reachable through the
/// pool graph.
///
/// The anchor (USDC by default) is fixed at 1. Pools adjacent to the anchor
/// price their other endpoint directly; remaining tokens are priced by
/// fixed-point propagation: whenever exactly one endpoint of a pool is
/// priced, the other endpoint gets `known_price * exchange_rate`. Passes
/// repeat until nothing new is assigned, which is bounded by the token count
/// since a priced token is never re-priced. The terminal map does not depend
/// on pool iteration order. Tokens with no path to the anchor are simply
/// absent from the map; callers must check membership rather than assume a
/// default.
#[derive(Debug, Clone, Copy)]
pub struct PriceOracle {
    anchor: TokenSymbol,
}

impl Default for PriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceOracle {
    /// Oracle anchored on USDC.
    pub fn new() -> Self {
        Self {
            anchor: TokenSymbol::Usdc,
        }
    }

    /// Oracle anchored on an arbitrary reference token.
    pub fn with_anchor(anchor: TokenSymbol) -> Self {
        Self { anchor }
    }

    /// The reference token fixed at price 1.
    pub fn anchor(&self) -> TokenSymbol {
        self.anchor
    }

    /// Computes the current price map from the registry's reserves.
    pub fn token_prices(&self, registry: &PoolRegistry) -> PriceMap {
        let mut prices = PriceMap::new();
        prices.insert(self.anchor, Decimal::ONE);

        // Direct pass: pools touching the anchor price their other endpoint.
        for pool in registry.pools() {
            if pool.symbol_b() == self.anchor && !prices.contains_key(&pool.symbol_a()) {
                prices.insert(pool.symbol_a(), pool.price_a_in_b());
            } else if pool.symbol_a() == self.anchor && !prices.contains_key(&pool.symbol_b()) {
                prices.insert(pool.symbol_b(), pool.price_b_in_a());
            }
        }

        // Propagate across the rest of the graph until a full pass assigns
        // nothing new.
        let mut found_new = true;
        while found_new {
            found_new = false;
            for pool in registry.pools() {
                let price_a = prices.get(&pool.symbol_a()).copied();
                let price_b = prices.get(&pool.symbol_b()).copied();
                match (price_a, price_b) {
                    (None, Some(known)) => {
                        prices.insert(pool.symbol_a(), pool.price_a_in_b() * known);
                        found_new = true;
                    }
                    (Some(known), None) => {
                        prices.insert(pool.symbol_b(), pool.price_b_in_a() * known);
                        found_new = true;
                    }
                    _ => {}
                }
            }
        }

        prices
    }
}
