//! # Ecosystem AMM
//!
//! A constant-product automated market maker over a small graph of token-pair
//! liquidity pools, with analytics derived from live pool state:
//! - Pool registry with canonical unordered-pair ids and a process-lifetime
//!   fee counter
//! - Swap quoting and execution with input-side fees (x * y = k)
//! - Liquidity deposits with ratio-deviation warnings
//! - Graph-based price discovery from a stable anchor token
//! - Liquidity-provider reward projections and arbitrage assessments
//!
//! ## Architecture
//!
//! The crate follows domain-driven design with a clear separation of
//! concerns:
//!
//! - **Domain**: pool model, registry, swap engine, oracle and analytics
//! - **Config**: static genesis seeds and the descriptive ecosystem catalog
//! - **Utils**: logging setup
//!
//! ## Numerics
//!
//! All amounts are `rust_decimal::Decimal`; swap outputs and fees are
//! quantized to a fixed number of fractional digits with truncation toward
//! zero, so identical inputs produce bit-identical results everywhere.
//!
//! ## Thread Safety
//!
//! [`ThreadSafeRegistry`] wraps the registry in `std::sync::RwLock`: multiple
//! concurrent readers, single-writer exclusion, and swap execution that
//! recomputes its quote under the same write lock that applies the mutation.

/// Static configuration: genesis pools and the ecosystem catalog
pub mod config;
pub mod domain;
/// Utilities for logging setup
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    arbitrage::{ArbitrageAnalyzer, ArbitrageAssessment},
    liquidity::LiquidityDeposit,
    oracle::{PriceMap, PriceOracle},
    pool::{Pool, PoolSnapshot},
    registry::{PoolRegistry, ThreadSafeRegistry},
    rewards::{LpRewardProjection, RewardEstimator},
    swap::{PriceImpactEstimate, SwapExecution, SwapQuote},
    types::*,
};

pub use config::{
    load_ecosystem_config, parse_ecosystem_config, EcosystemConfig, EcosystemPoolProfile,
    EcosystemProfile, PoolSeed,
};

/// Main result type for the AMM engine
pub type Result<T> = std::result::Result<T, AmmError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
