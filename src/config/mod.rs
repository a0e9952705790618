//! Static ecosystem configuration
//!
//! Two kinds of read-only data live here: the genesis pool seeds applied at
//! startup, and the descriptive ecosystem catalog (names, purposes,
//! participants). The catalog is display material only; nothing in the
//! pricing math reads it. Both can be loaded from JSON or taken from the
//! built-in defaults.

use crate::domain::{AmmResult, PoolRegistry, TokenSymbol};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial reserves and fee rate for one genesis pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSeed {
    /// First token of the pair
    pub token_a: TokenSymbol,
    /// Second token of the pair
    pub token_b: TokenSymbol,
    /// Initial reserve of token A
    pub initial_a: Decimal,
    /// Initial reserve of token B
    pub initial_b: Decimal,
    /// Fee fraction fixed at creation
    pub fee_rate: Decimal,
}

impl PoolSeed {
    fn new(
        token_a: TokenSymbol,
        token_b: TokenSymbol,
        initial_a: Decimal,
        initial_b: Decimal,
        fee_rate: Decimal,
    ) -> Self {
        Self {
            token_a,
            token_b,
            initial_a,
            initial_b,
            fee_rate,
        }
    }
}

/// Descriptive profile of one conceptual pool within an ecosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemPoolProfile {
    /// Display name
    pub name: String,
    /// What the pool is for
    pub purpose: String,
    /// Who takes part
    pub participants: Vec<String>,
    /// What participation earns
    pub rewards: Vec<String>,
    /// How the pool operates
    pub mechanisms: Vec<String>,
}

/// Descriptive profile of one sub-ecosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemProfile {
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Conceptual pools of the ecosystem
    pub pools: Vec<EcosystemPoolProfile>,
}

/// Complete static configuration: descriptive catalog plus genesis pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemConfig {
    /// Descriptive ecosystem catalog, display-only
    pub ecosystems: Vec<EcosystemProfile>,
    /// Pools created at startup
    pub seed_pools: Vec<PoolSeed>,
}

impl EcosystemConfig {
    /// The built-in configuration shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            ecosystems: builtin_catalog(),
            seed_pools: builtin_seeds(),
        }
    }

    /// Creates a registry and applies every seed through
    /// [`PoolRegistry::create_pool`], so seeds get the same validation as
    /// runtime pool creation.
    pub fn build_registry(&self) -> AmmResult<PoolRegistry> {
        let mut registry = PoolRegistry::new();
        for seed in &self.seed_pools {
            registry.create_pool(
                seed.token_a,
                seed.token_b,
                seed.initial_a,
                seed.initial_b,
                seed.fee_rate,
            )?;
        }
        Ok(registry)
    }
}

/// Parse an ecosystem configuration from a JSON string.
pub fn parse_ecosystem_config(json_str: &str) -> AmmResult<EcosystemConfig> {
    let config: EcosystemConfig = serde_json::from_str(json_str)?;
    Ok(config)
}

/// Load an ecosystem configuration from a JSON file.
pub fn load_ecosystem_config<P: AsRef<Path>>(path: P) -> AmmResult<EcosystemConfig> {
    let json_str = fs::read_to_string(path)?;
    parse_ecosystem_config(&json_str)
}

fn builtin_seeds() -> Vec<PoolSeed> {
    const DEFAULT_FEE: Decimal = dec!(0.003);
    const STABLE_FEE: Decimal = dec!(0.001);
    vec![
        PoolSeed::new(
            TokenSymbol::Hisa,
            TokenSymbol::Usdc,
            dec!(100000),
            dec!(500000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::Jani,
            TokenSymbol::Usdc,
            dec!(50000),
            dec!(250000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::Chat,
            TokenSymbol::Usdc,
            dec!(75000),
            dec!(375000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::Umoja,
            TokenSymbol::Usdc,
            dec!(80000),
            dec!(400000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::JaniStable,
            TokenSymbol::Usdc,
            dec!(200000),
            dec!(200000),
            STABLE_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::UmojaStable,
            TokenSymbol::Usdc,
            dec!(200000),
            dec!(200000),
            STABLE_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::UmojaOption,
            TokenSymbol::Umoja,
            dec!(1000000),
            dec!(50000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::Jani,
            TokenSymbol::JaniStable,
            dec!(50000),
            dec!(50000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::Umoja,
            TokenSymbol::UmojaStable,
            dec!(80000),
            dec!(80000),
            DEFAULT_FEE,
        ),
        PoolSeed::new(
            TokenSymbol::Hbar,
            TokenSymbol::Usdc,
            dec!(200000),
            dec!(100000),
            DEFAULT_FEE,
        ),
    ]
}

fn profile(
    name: &str,
    purpose: &str,
    participants: &[&str],
    rewards: &[&str],
    mechanisms: &[&str],
) -> EcosystemPoolProfile {
    EcosystemPoolProfile {
        name: name.to_string(),
        purpose: purpose.to_string(),
        participants: participants.iter().map(|s| s.to_string()).collect(),
        rewards: rewards.iter().map(|s| s.to_string()).collect(),
        mechanisms: mechanisms.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_catalog() -> Vec<EcosystemProfile> {
    vec![
        EcosystemProfile {
            name: "JANI (Conservation Ecosystem)".to_string(),
            description:
                "Tree planting, environmental regeneration, and carbon offset tokenization."
                    .to_string(),
            pools: vec![
                profile(
                    "Tree-Planting Staking Pool",
                    "Reward verified planting and growth of trees.",
                    &["Farmers", "Nurseries", "Community Forest Associations"],
                    &["JANI tokens", "NFTs", "Impact score badges"],
                    &["Stake JANI", "Proof-of-Growth validation", "ZK oracles"],
                ),
                profile(
                    "Bamboo Carbon Offset Pool",
                    "Incentivize bamboo farming for carbon credits.",
                    &["Bamboo Farmers", "Offset buyers"],
                    &["HBAR tokens", "NFTs"],
                    &["Staking", "Validator & AI verification", "Tokenized offsets"],
                ),
                profile(
                    "Validator Reward Pool",
                    "Pay validators for verifying impact activities.",
                    &["Community validators", "AI agents"],
                    &["JANI tokens", "Tiered validator bonuses"],
                    &["GPS triangulation", "AI audit", "Staking + trust scores"],
                ),
            ],
        },
        EcosystemProfile {
            name: "UMOJA (Financial Ecosystem)".to_string(),
            description: "Tokenized prosperity, access to capital, and fractional finance."
                .to_string(),
            pools: vec![
                profile(
                    "Fractional Ownership Pool",
                    "Enable co-ownership of land, businesses, etc.",
                    &["Retail investors", "Local SMEs", "Farm cooperatives"],
                    &["Yield", "Tokenized dividends"],
                    &["Stake UMOJA", "Fractional asset tokens", "Governance"],
                ),
                profile(
                    "Microfinance & Chama Pool",
                    "Empower communities to lend and borrow transparently.",
                    &["Chamas", "Women groups", "Youth SACCOs"],
                    &["Interest", "Governance boosts"],
                    &["DAO votes", "Loan tracking", "Staking UMOJA"],
                ),
                profile(
                    "Diaspora Investment Pool",
                    "Let diaspora invest in African development projects.",
                    &["Diaspora funders", "Local entrepreneurs"],
                    &["Yields", "Land shares", "Impact tokens"],
                    &["Stake or donate", "Geo-targeted reporting", "Transparency dashboard"],
                ),
            ],
        },
        EcosystemProfile {
            name: "CHAT (Cultural Ecosystem)".to_string(),
            description:
                "Preserves, tokenizes, and rewards cultural memory through NFTs and voice-driven content."
                    .to_string(),
            pools: vec![
                profile(
                    "Voice-to-NFT Pool",
                    "Monetize oral histories via AI transcription and tokenization.",
                    &["Elders", "Youth contributors"],
                    &["CHAT tokens", "Royalties", "NFT minting rights"],
                    &["Voice onboarding", "AI dialect tagging", "Mobile-to-IPFS"],
                ),
                profile(
                    "Curation DAO Pool",
                    "Community votes to feature top cultural works.",
                    &["Token holders", "Curators", "Communities"],
                    &["Revenue share", "Exposure in digital museums"],
                    &["Quadratic voting", "Governance staking", "NFT feature rights"],
                ),
                profile(
                    "Licensing & Royalty Pool",
                    "Distribute royalties from AR/VR and platform access.",
                    &["Creators", "Conservation vaults"],
                    &["CHAT tokens", "Burn incentives"],
                    &["Automated fee sharing", "NFT usage tracking", "Royalty splits"],
                ),
            ],
        },
    ]
}
