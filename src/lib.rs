//! Compiler and network configuration resolver for EVM smart-contract
//! deployments.
//!
//! This crate is the configuration component of a contract build/deployment
//! toolchain. It declares the pinned compiler settings, the connection
//! parameters of the supported networks, and validates the
//! environment-supplied secrets a remote deployment needs. Compiling,
//! signing, and broadcasting are all external collaborators; this crate
//! only decides what configuration values to hand them.
//!
//! # Architecture
//!
//! Resolution is a single synchronous load-validate-assemble pass:
//!
//! 1. Read the coverage opt-out flag; in coverage mode the remote network
//!    gets no provider and no secrets are required
//! 2. Otherwise validate `MNEMONIC` and `INFURA_API_KEY` and build a
//!    [`ProviderFactory`](chain::ProviderFactory) for the remote network
//! 3. Assemble the [`DeployConfig`](chain::DeployConfig): compiler settings
//!    plus one profile per network
//!
//! The provider factory is the only deferred work: it constructs the
//! wallet-backed connection handle lazily, when the build tool actually
//! selects the remote network.
//!
//! Environment access goes through the [`env::EnvSource`] capability so the
//! resolver can run against an in-memory table in tests; only the
//! accompanying binary terminates the process on a missing secret.
//!
//! # Environment
//!
//! - `MNEMONIC` - wallet seed phrase, required for remote deployment
//! - `INFURA_API_KEY` - hosted-node credential, required for remote
//!   deployment
//! - `SOLIDITY_COVERAGE` - when set, skip provider construction entirely
//!
//! # Usage
//!
//! ```
//! use evm_deploy_config::env::StaticEnv;
//! use evm_deploy_config::resolver;
//!
//! let env = StaticEnv::new()
//!     .with("MNEMONIC", "legal winner thank year wave sausage worth useful legal winner thank yellow")
//!     .with("INFURA_API_KEY", "a1b2c3");
//!
//! let config = resolver::resolve(&env)?;
//! let factory = config.networks.rinkeby.provider.expect("secrets are set");
//! assert_eq!(factory.endpoint_url(), "https://rinkeby.infura.io/a1b2c3");
//! # Ok::<(), evm_deploy_config::resolver::ConfigError>(())
//! ```

pub mod chain;
pub mod env;
pub mod resolver;

mod networks;
pub use networks::*;

pub use chain::{CompilerSettings, DeployConfig, NetworkProfile, ProviderFactory, WalletProvider};
pub use resolver::{ConfigError, provider_factory, resolve};
