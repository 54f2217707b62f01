//! Configuration records handed to the external build/deploy tool.
//!
//! The structs here mirror the configuration object the surrounding
//! toolchain consumes: compiler settings under `compilers.solc` and one
//! [`NetworkProfile`] per supported network. All records are assembled once
//! at load time and never mutated.

use serde::{Deserialize, Serialize};

use super::{NetworkId, ProviderFactory, Wei};

/// Solidity compiler version the contracts are pinned to.
pub const SOLC_VERSION: &str = "0.4.25";

/// Optimizer runs setting (code-size vs gas-cost tradeoff).
pub const OPTIMIZER_RUNS: u32 = 200;

/// Bytecode optimizer settings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Whether the optimizer runs at all.
    pub enabled: bool,
    /// Optimizer runs tuning parameter.
    pub runs: u32,
}

/// Compiler settings block nested under the version.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SolcSettings {
    /// Optimizer configuration.
    pub optimizer: OptimizerSettings,
}

/// Solidity compiler configuration.
///
/// Constructed once from literal constants; [`CompilerSettings::default`]
/// yields the pinned version with the optimizer enabled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// Compiler version string.
    pub version: String,
    /// Nested settings block.
    pub settings: SolcSettings,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            settings: SolcSettings {
                optimizer: OptimizerSettings {
                    enabled: true,
                    runs: OPTIMIZER_RUNS,
                },
            },
        }
    }
}

/// Compiler section of the configuration object.
#[derive(Debug, Clone, Serialize)]
pub struct Compilers {
    /// Solidity compiler settings.
    pub solc: CompilerSettings,
}

/// Connection parameters for one network.
///
/// Local networks carry a host and port; remote networks carry a
/// [`ProviderFactory`] instead. The factory holds the wallet secrets, so it
/// is kept out of the serialized form entirely.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkProfile {
    /// Node host, for networks reached directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Node port, for networks reached directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Gas limit for deployment transactions.
    pub gas: u64,
    /// Gas price in wei, hex-encoded on the wire.
    #[serde(rename = "gasPrice")]
    pub gas_price: Wei,
    /// Chain identifier.
    pub network_id: NetworkId,
    /// Wallet-backed provider factory, for networks reached through a
    /// hosted node. Absent in coverage mode.
    #[serde(skip)]
    pub provider: Option<ProviderFactory>,
}

/// Networks section of the configuration object.
#[derive(Debug, Clone, Serialize)]
pub struct Networks {
    /// Local development network.
    pub development: NetworkProfile,
    /// Rinkeby test network.
    pub rinkeby: NetworkProfile,
}

/// The full configuration object consumed by the build/deploy tool.
#[derive(Debug, Clone, Serialize)]
pub struct DeployConfig {
    /// Compiler settings.
    pub compilers: Compilers,
    /// Per-network connection parameters.
    pub networks: Networks,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compiler_settings() {
        let solc = CompilerSettings::default();
        assert_eq!(solc.version, "0.4.25");
        assert!(solc.settings.optimizer.enabled);
        assert_eq!(solc.settings.optimizer.runs, 200);
    }

    #[test]
    fn test_compiler_settings_wire_shape() {
        let json = serde_json::to_value(CompilerSettings::default()).unwrap();
        assert_eq!(json["version"], "0.4.25");
        assert_eq!(json["settings"]["optimizer"]["enabled"], true);
        assert_eq!(json["settings"]["optimizer"]["runs"], 200);
    }

    #[test]
    fn test_compiler_settings_serde_roundtrip() {
        let solc = CompilerSettings::default();
        let json = serde_json::to_string(&solc).unwrap();
        let deserialized: CompilerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(solc, deserialized);
    }

    #[test]
    fn test_local_profile_serializes_host_and_port() {
        let profile = NetworkProfile {
            host: Some("localhost".to_string()),
            port: Some(8545),
            gas: 4_700_000,
            gas_price: Wei::from_gwei(1),
            network_id: NetworkId::from(1234),
            provider: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["host"], "localhost");
        assert_eq!(json["port"], 8545);
        assert_eq!(json["gas"], 4_700_000);
        assert_eq!(json["gasPrice"], "0x3b9aca00");
        assert_eq!(json["network_id"], 1234);
    }

    #[test]
    fn test_remote_profile_omits_absent_fields() {
        let profile = NetworkProfile {
            host: None,
            port: None,
            gas: 4_700_000,
            gas_price: Wei::from_gwei(10),
            network_id: NetworkId::from("4"),
            provider: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("host").is_none());
        assert!(json.get("port").is_none());
        assert_eq!(json["network_id"], "4");
    }

    #[test]
    fn test_provider_never_serializes() {
        use crate::chain::{Mnemonic, NetworkName};

        let profile = NetworkProfile {
            host: None,
            port: None,
            gas: 4_700_000,
            gas_price: Wei::from_gwei(10),
            network_id: NetworkId::from("4"),
            provider: Some(ProviderFactory::new(
                Mnemonic::new("zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong"),
                NetworkName::rinkeby(),
                "sup3rs3cret",
            )),
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("provider"));
        assert!(!json.contains("sup3rs3cret"));
        assert!(!json.contains("zoo"));
    }
}
