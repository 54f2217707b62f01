//! Wallet-backed provider construction for remote networks.
//!
//! This module provides [`ProviderFactory`], a deferred constructor for
//! wallet-backed connections. The factory is created while the
//! configuration is resolved, but nothing is constructed until the build
//! tool actually selects the remote network and calls
//! [`ProviderFactory::construct`].

use std::fmt;

use super::NetworkName;

/// Host of the hosted-node service the endpoint template targets.
pub const PROVIDER_HOST: &str = "infura.io";

// ============================================================================
// Mnemonic
// ============================================================================

/// A wallet seed phrase.
///
/// The phrase deterministically derives the deploying wallet's keys, so it
/// never appears in `Debug` output, logs, or serialized configuration.
#[derive(Clone, Eq, PartialEq)]
pub struct Mnemonic(String);

impl Mnemonic {
    /// Creates a mnemonic from a seed phrase.
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    /// Returns the seed phrase.
    pub fn phrase(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic(<redacted>)")
    }
}

impl From<&str> for Mnemonic {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Mnemonic {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// ProviderFactory
// ============================================================================

/// Deferred constructor for a wallet-backed provider.
///
/// Owned by the remote [`NetworkProfile`](super::NetworkProfile) it was
/// created for. Holding a factory proves both required secrets were present
/// when the configuration was resolved; constructing the provider is
/// delayed until the network is actually selected.
///
/// # Example
///
/// ```
/// use evm_deploy_config::chain::{Mnemonic, NetworkName, ProviderFactory};
///
/// let factory = ProviderFactory::new(
///     Mnemonic::new("legal winner thank year wave sausage worth useful legal winner thank yellow"),
///     NetworkName::rinkeby(),
///     "a1b2c3",
/// );
/// assert_eq!(factory.endpoint_url(), "https://rinkeby.infura.io/a1b2c3");
/// ```
#[derive(Clone)]
pub struct ProviderFactory {
    mnemonic: Mnemonic,
    network: NetworkName,
    api_key: String,
}

impl ProviderFactory {
    /// Creates a factory targeting `network` with the given credentials.
    pub fn new(mnemonic: Mnemonic, network: NetworkName, api_key: impl Into<String>) -> Self {
        Self {
            mnemonic,
            network,
            api_key: api_key.into(),
        }
    }

    /// Returns the network this factory targets.
    pub fn network(&self) -> &NetworkName {
        &self.network
    }

    /// Returns the remote endpoint URL the provider will connect to.
    ///
    /// The URL interpolates the network name and API key into the fixed
    /// hosted-node template.
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.{PROVIDER_HOST}/{}", self.network, self.api_key)
    }

    /// Constructs the wallet-backed provider handle.
    ///
    /// This is the only deferred work in the crate; no network I/O happens
    /// here. The returned handle carries everything the external wallet
    /// collaborator needs to open and sign over the connection.
    pub fn construct(&self) -> WalletProvider {
        tracing::debug!(network = %self.network, "constructing wallet provider");
        WalletProvider {
            mnemonic: self.mnemonic.clone(),
            endpoint_url: self.endpoint_url(),
        }
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The api_key is part of the endpoint URL; keep it out of Debug.
        f.debug_struct("ProviderFactory")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// WalletProvider
// ============================================================================

/// A wallet-backed connection handle.
///
/// Consumed by the external build/deploy tool to sign and broadcast
/// transactions; this crate only assembles it.
#[derive(Clone)]
pub struct WalletProvider {
    mnemonic: Mnemonic,
    endpoint_url: String,
}

impl WalletProvider {
    /// Returns the signing seed phrase.
    pub fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }

    /// Returns the remote endpoint URL.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl fmt::Debug for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Both fields are secret-bearing.
        f.debug_struct("WalletProvider").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str =
        "legal winner thank year wave sausage worth useful legal winner thank yellow";

    #[test]
    fn test_endpoint_url_interpolation() {
        let factory =
            ProviderFactory::new(Mnemonic::new(PHRASE), NetworkName::rinkeby(), "deadbeef");
        assert_eq!(factory.endpoint_url(), "https://rinkeby.infura.io/deadbeef");
    }

    #[test]
    fn test_construct_carries_credentials() {
        let factory = ProviderFactory::new(Mnemonic::new(PHRASE), NetworkName::rinkeby(), "k3y");
        let provider = factory.construct();
        assert_eq!(provider.mnemonic().phrase(), PHRASE);
        assert_eq!(provider.endpoint_url(), "https://rinkeby.infura.io/k3y");
    }

    #[test]
    fn test_construct_is_repeatable() {
        let factory = ProviderFactory::new(Mnemonic::new(PHRASE), NetworkName::rinkeby(), "k3y");
        let first = factory.construct();
        let second = factory.construct();
        assert_eq!(first.endpoint_url(), second.endpoint_url());
    }

    #[test]
    fn test_mnemonic_debug_is_redacted() {
        let debug = format!("{:?}", Mnemonic::new(PHRASE));
        assert!(!debug.contains("winner"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_factory_debug_hides_api_key() {
        let factory =
            ProviderFactory::new(Mnemonic::new(PHRASE), NetworkName::rinkeby(), "sup3rs3cret");
        let debug = format!("{factory:?}");
        assert!(!debug.contains("sup3rs3cret"));
        assert!(debug.contains("rinkeby"));
    }

    #[test]
    fn test_wallet_provider_debug_hides_secrets() {
        let factory =
            ProviderFactory::new(Mnemonic::new(PHRASE), NetworkName::rinkeby(), "sup3rs3cret");
        let debug = format!("{:?}", factory.construct());
        assert!(!debug.contains("sup3rs3cret"));
        assert!(!debug.contains("winner"));
    }
}
