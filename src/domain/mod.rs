//! Domain layer containing the pool model and its derived analytics
//!
//! The registry owns every pool and is the single source of truth for
//! reserves; swap execution and liquidity deposits are the only mutations.
//! The oracle, reward estimator and arbitrage analyzer are read-only
//! consumers recomputed from current reserves on every call.

/// Pool price vs external market comparison
pub mod arbitrage;
/// Liquidity deposits
pub mod liquidity;
/// Graph-based token price discovery
pub mod oracle;
/// The constant-product pool model
pub mod pool;
/// Pool ownership and lookup
pub mod registry;
/// Liquidity-provider reward projections
pub mod rewards;
/// Swap pricing and execution
pub mod swap;
/// Core types and primitives
pub mod types;

pub use types::*;

pub use arbitrage::{ArbitrageAnalyzer, ArbitrageAssessment};
pub use liquidity::LiquidityDeposit;
pub use oracle::{PriceMap, PriceOracle};
pub use pool::{Pool, PoolSnapshot};
pub use registry::{PoolRegistry, ThreadSafeRegistry};
pub use rewards::{LpRewardProjection, RewardEstimator};
pub use swap::{PriceImpactEstimate, SwapExecution, SwapQuote};
