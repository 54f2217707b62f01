//! Known networks and their fixed connection parameters.
//!
//! This module provides the constants and profile constructors for the two
//! supported networks: the local development chain and the Rinkeby test
//! network.

use crate::chain::{NetworkId, NetworkProfile, ProviderFactory, Wei};

/// Gas limit for deployment transactions, both networks.
pub const DEPLOY_GAS_LIMIT: u64 = 4_700_000;

/// Host of the local development node.
pub const DEVELOPMENT_HOST: &str = "localhost";

/// Port of the local development node.
pub const DEVELOPMENT_PORT: u16 = 8545;

/// Chain id of the local development network.
pub const DEVELOPMENT_NETWORK_ID: u64 = 1234;

/// Chain id of the Rinkeby test network.
pub const RINKEBY_NETWORK_ID: &str = "4";

/// Gas price on the development network, in gwei.
pub const DEVELOPMENT_GAS_PRICE_GWEI: u64 = 1;

/// Gas price on Rinkeby, in gwei.
pub const RINKEBY_GAS_PRICE_GWEI: u64 = 10;

impl NetworkProfile {
    /// Returns the local development network profile.
    ///
    /// Fixed host, port, and gas parameters; identical regardless of
    /// environment state.
    pub fn development() -> Self {
        Self {
            host: Some(DEVELOPMENT_HOST.to_string()),
            port: Some(DEVELOPMENT_PORT),
            gas: DEPLOY_GAS_LIMIT,
            gas_price: Wei::from_gwei(DEVELOPMENT_GAS_PRICE_GWEI),
            network_id: NetworkId::from(DEVELOPMENT_NETWORK_ID),
            provider: None,
        }
    }

    /// Returns the Rinkeby network profile carrying `provider`.
    ///
    /// The provider is absent in coverage mode; everything else is fixed.
    pub fn rinkeby(provider: Option<ProviderFactory>) -> Self {
        Self {
            host: None,
            port: None,
            gas: DEPLOY_GAS_LIMIT,
            gas_price: Wei::from_gwei(RINKEBY_GAS_PRICE_GWEI),
            network_id: NetworkId::from(RINKEBY_NETWORK_ID),
            provider,
        }
    }
}
