use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token symbols recognised by the ecosystem.
///
/// The set is closed: extending it means shipping a new build, so every
/// operation can validate membership statically instead of carrying free-form
/// strings through the pricing math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenSymbol {
    /// Core ecosystem token
    Hisa,
    /// Stable reference asset, the pricing anchor
    Usdc,
    /// Conservation ecosystem token
    Jani,
    /// Cultural ecosystem token
    Chat,
    /// Financial ecosystem token
    Umoja,
    /// Option token on UMOJA
    UmojaOption,
    /// JANI-pegged stable token
    JaniStable,
    /// UMOJA-pegged stable token
    UmojaStable,
    /// External network token
    Hbar,
}

impl TokenSymbol {
    /// Every symbol in the enumeration, in declaration order.
    pub const ALL: [TokenSymbol; 9] = [
        TokenSymbol::Hisa,
        TokenSymbol::Usdc,
        TokenSymbol::Jani,
        TokenSymbol::Chat,
        TokenSymbol::Umoja,
        TokenSymbol::UmojaOption,
        TokenSymbol::JaniStable,
        TokenSymbol::UmojaStable,
        TokenSymbol::Hbar,
    ];

    /// Canonical string form of the symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::Hisa => "HISA",
            TokenSymbol::Usdc => "USDC",
            TokenSymbol::Jani => "JANI",
            TokenSymbol::Chat => "CHAT",
            TokenSymbol::Umoja => "UMOJA",
            TokenSymbol::UmojaOption => "UMOJA_OPTION",
            TokenSymbol::JaniStable => "JANI_STABLE",
            TokenSymbol::UmojaStable => "UMOJA_STABLE",
            TokenSymbol::Hbar => "HBAR",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenSymbol::ALL
            .iter()
            .find(|symbol| symbol.as_str() == s)
            .copied()
            .ok_or_else(|| AmmError::InvalidToken(s.to_string()))
    }
}

/// Canonical identifier for an unordered token pair.
///
/// The two symbols are sorted lexicographically and joined with `-`, so the
/// same pool is found no matter which token the caller names first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId(String);

impl PoolId {
    /// Builds the canonical id for an unordered pair.
    pub fn canonical(token_a: TokenSymbol, token_b: TokenSymbol) -> Self {
        let (first, second) = if token_a.as_str() <= token_b.as_str() {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        PoolId(format!("{}-{}", first.as_str(), second.as_str()))
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp for pool bookkeeping
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Fractional digits kept on swap outputs and fees.
pub const OUTPUT_SCALE: u32 = 12;

/// Quantizes a computed amount to [`OUTPUT_SCALE`] fractional digits,
/// rounding toward zero.
///
/// Truncation is the single rounding direction used anywhere in the engine;
/// given the same reserves and inputs, every build produces bit-identical
/// outputs.
pub fn quantize(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(OUTPUT_SCALE, RoundingStrategy::ToZero)
}

/// AMM engine errors
#[derive(Debug, thiserror::Error)]
pub enum AmmError {
    /// Symbol outside the enumeration, or not a member of the addressed pool
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// No pool registered under the given id
    #[error("pool {0} does not exist")]
    PoolNotFound(PoolId),

    /// A pool for the unordered pair already exists
    #[error("pool {0} already exists")]
    DuplicatePool(PoolId),

    /// Non-positive quantity where a positive one is required
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Swap output would meet or exceed the opposite reserve
    #[error("insufficient {token} liquidity in pool {pool_id}")]
    InsufficientLiquidity {
        /// Pool the swap was addressed to
        pool_id: PoolId,
        /// Token whose reserve cannot cover the output
        token: TokenSymbol,
    },

    /// Argument outside its documented range
    #[error("argument out of range: {0}")]
    OutOfRangeArgument(String),

    /// Malformed configuration data
    #[error("parse error: {0}")]
    ParseError(String),

    /// Input/output error while reading configuration
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for AMM operations
pub type AmmResult<T> = Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_round_trip() {
        for symbol in TokenSymbol::ALL {
            assert_eq!(symbol.as_str().parse::<TokenSymbol>().unwrap(), symbol);
        }
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let err = "DOGE".parse::<TokenSymbol>().unwrap_err();
        assert!(matches!(err, AmmError::InvalidToken(ref s) if s == "DOGE"));
    }

    #[test]
    fn test_pool_id_order_independent() {
        let ab = PoolId::canonical(TokenSymbol::Hisa, TokenSymbol::Usdc);
        let ba = PoolId::canonical(TokenSymbol::Usdc, TokenSymbol::Hisa);
        assert_eq!(ab, ba);
        assert_eq!(ab.as_str(), "HISA-USDC");
    }

    #[test]
    fn test_quantize_truncates_toward_zero() {
        assert_eq!(quantize(dec!(1.9999999999999)), dec!(1.999999999999));
        assert_eq!(quantize(dec!(-1.9999999999999)), dec!(-1.999999999999));
        assert_eq!(quantize(dec!(42)), dec!(42));
    }
}
