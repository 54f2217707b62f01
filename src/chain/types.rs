//! Wire format types for EVM deployment configuration.
//!
//! This module provides the value types that appear in the emitted
//! configuration object: network names, network ids, and wei amounts
//! with their hex wire encoding.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ============================================================================
// NetworkName
// ============================================================================

/// A network name (e.g., `development` or `rinkeby`).
///
/// The name doubles as the subdomain label of hosted-node endpoint URLs
/// (`https://rinkeby.infura.io/...`), so it is kept as a plain lowercase
/// string rather than a closed enum.
///
/// # Example
///
/// ```
/// use evm_deploy_config::chain::NetworkName;
///
/// let rinkeby = NetworkName::rinkeby();
/// assert_eq!(rinkeby.to_string(), "rinkeby");
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NetworkName(String);

impl NetworkName {
    /// Creates a network name from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the local development network name.
    pub fn development() -> Self {
        Self("development".to_string())
    }

    /// Returns the Rinkeby test network name.
    pub fn rinkeby() -> Self {
        Self("rinkeby".to_string())
    }

    /// Returns the inner name string.
    pub fn inner(&self) -> &str {
        &self.0
    }
}

impl Display for NetworkName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for NetworkName {
    type Error = NetworkNameFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "development" | "rinkeby" => Ok(NetworkName(value.to_string())),
            _ => Err(NetworkNameFormatError::UnknownNetwork(value.to_string())),
        }
    }
}

/// Error returned when converting a string to a supported [`NetworkName`].
#[derive(Debug, thiserror::Error)]
pub enum NetworkNameFormatError {
    /// The name is not a supported network.
    #[error("Unknown network {0}, expected development or rinkeby")]
    UnknownNetwork(String),
}

// ============================================================================
// NetworkId
// ============================================================================

/// A chain identifier as it appears in the emitted configuration.
///
/// The build tool accepts both numeric ids (`1234` for a local chain) and
/// string ids (`"4"` for Rinkeby); both forms are preserved on the wire.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkId {
    /// A numeric chain id, serialized as a JSON number.
    Numeric(u64),
    /// A named chain id, serialized as a JSON string.
    Named(String),
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkId::Numeric(n) => write!(f, "{n}"),
            NetworkId::Named(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for NetworkId {
    fn from(value: u64) -> Self {
        NetworkId::Numeric(value)
    }
}

impl From<&str> for NetworkId {
    fn from(value: &str) -> Self {
        NetworkId::Named(value.to_string())
    }
}

impl From<String> for NetworkId {
    fn from(value: String) -> Self {
        NetworkId::Named(value)
    }
}

// ============================================================================
// Wei
// ============================================================================

/// Number of wei per gwei (10^9).
pub const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Number of decimal places between gwei and wei.
pub const GWEI_DECIMALS: u32 = 9;

/// An amount of wei, the native currency's smallest unit.
///
/// Gas prices are configured in gwei for humans and handed to the build
/// tool as `0x`-prefixed hex wei strings.
///
/// # Example
///
/// ```
/// use evm_deploy_config::chain::Wei;
///
/// let one_gwei = Wei::from_gwei(1);
/// assert_eq!(one_gwei.to_string(), "0x3b9aca00");
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Wei(u128);

impl Wei {
    /// Creates an amount from a raw wei value.
    pub fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    /// Creates an amount from a whole number of gwei.
    pub fn from_gwei(gwei: u64) -> Self {
        Self(gwei as u128 * WEI_PER_GWEI)
    }

    /// Returns the raw wei value.
    pub fn as_wei(&self) -> u128 {
        self.0
    }

    /// Parses a human-readable gwei amount into wei.
    ///
    /// Accepts formats like `"10"`, `"1.5"`, `"0.000000001"`; at most nine
    /// fractional digits are meaningful.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be parsed, carries more than
    /// nine decimal places, or exceeds u128 range.
    pub fn parse_gwei(v: &str) -> Result<Self, WeiParseError> {
        let parts: Vec<&str> = v.split('.').collect();
        let (whole, frac) = match parts.len() {
            1 => (parts[0], ""),
            2 => (parts[0], parts[1]),
            _ => return Err(WeiParseError::InvalidFormat(v.to_string())),
        };

        let frac_len = frac.len() as u32;
        if frac_len > GWEI_DECIMALS {
            return Err(WeiParseError::TooManyDecimals {
                got: frac_len,
                max: GWEI_DECIMALS,
            });
        }

        let whole_val: u128 = whole
            .parse()
            .map_err(|_| WeiParseError::InvalidFormat(v.to_string()))?;
        let frac_val: u128 = if frac.is_empty() {
            0
        } else {
            frac.parse()
                .map_err(|_| WeiParseError::InvalidFormat(v.to_string()))?
        };

        let frac_scale = 10u128.pow(GWEI_DECIMALS - frac_len);

        let total = whole_val
            .checked_mul(WEI_PER_GWEI)
            .and_then(|w| w.checked_add(frac_val.checked_mul(frac_scale)?))
            .ok_or(WeiParseError::Overflow)?;

        Ok(Self(total))
    }

    /// Returns the hex-encoded wei value with 0x prefix.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }
}

impl FromStr for Wei {
    type Err = WeiParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix("0x") {
            u128::from_str_radix(hex, 16)
                .map(Wei)
                .map_err(|e| WeiParseError::InvalidHex(e.to_string()))
        } else {
            s.parse::<u128>()
                .map(Wei)
                .map_err(|_| WeiParseError::InvalidFormat(s.to_string()))
        }
    }
}

impl Display for Wei {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for Wei {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when parsing a wei or gwei amount.
#[derive(Debug, thiserror::Error)]
pub enum WeiParseError {
    /// The input string is not a valid number.
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),

    /// The hex string is invalid.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Too many decimal places for a gwei amount.
    #[error("Too many decimal places: got {got}, max {max}")]
    TooManyDecimals { got: u32, max: u32 },

    /// The resulting amount overflows u128.
    #[error("Amount overflow")]
    Overflow,
}

// ============================================================================
// Tests
// ============================================================================
