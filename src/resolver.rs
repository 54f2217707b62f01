//! The configuration resolver.
//!
//! A single linear load-validate-assemble sequence, run once per process
//! start: validate that the remote network's secrets are present, build its
//! provider factory, and assemble the full [`DeployConfig`].
//!
//! Missing secrets surface as [`ConfigError::MissingSecret`] rather than a
//! process exit; terminating on failure is the binary's job.

use crate::chain::{
    CompilerSettings, Compilers, DeployConfig, Mnemonic, NetworkName, NetworkProfile, Networks,
    ProviderFactory,
};
use crate::env::EnvSource;

/// Environment variable holding the wallet seed phrase.
pub const MNEMONIC_VAR: &str = "MNEMONIC";

/// Environment variable holding the hosted-node API key.
pub const INFURA_API_KEY_VAR: &str = "INFURA_API_KEY";

/// Opt-out flag set by the coverage harness, which needs no live network.
pub const COVERAGE_VAR: &str = "SOLIDITY_COVERAGE";

/// Error resolving the deployment configuration.
///
/// There is exactly one kind: a required secret missing from the
/// environment. It is detected synchronously during resolution and is not
/// recoverable; no partial configuration is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required secret is unset (or set to an empty value).
    #[error("Missing required secret: {name}")]
    MissingSecret {
        /// Name of the missing environment variable.
        name: &'static str,
    },
}

fn require_secret(env: &impl EnvSource, name: &'static str) -> Result<String, ConfigError> {
    match env.secret(name) {
        Some(value) => Ok(value),
        None => {
            tracing::error!(secret = name, "required secret is not set");
            Err(ConfigError::MissingSecret { name })
        }
    }
}

/// Validates the remote-network secrets and creates a provider factory.
///
/// Checks `MNEMONIC` first, then `INFURA_API_KEY`; the first missing secret
/// aborts resolution. On success the returned factory targets
/// `https://{network}.infura.io/{api_key}` and constructs nothing until
/// [`construct`](ProviderFactory::construct) is called.
///
/// # Errors
///
/// [`ConfigError::MissingSecret`] naming the first absent secret.
pub fn provider_factory(
    env: &impl EnvSource,
    network: NetworkName,
) -> Result<ProviderFactory, ConfigError> {
    let mnemonic = require_secret(env, MNEMONIC_VAR)?;
    let api_key = require_secret(env, INFURA_API_KEY_VAR)?;
    Ok(ProviderFactory::new(Mnemonic::new(mnemonic), network, api_key))
}

/// Resolves the full deployment configuration from `env`.
///
/// When `SOLIDITY_COVERAGE` is set to a non-empty value, provider
/// construction is skipped entirely and the remote profile carries no
/// provider; secrets are not checked in that mode. Otherwise the Rinkeby
/// provider factory is validated and attached.
///
/// # Errors
///
/// [`ConfigError::MissingSecret`] when a remote-network secret is absent
/// outside coverage mode. There is no other failure path.
pub fn resolve(env: &impl EnvSource) -> Result<DeployConfig, ConfigError> {
    let provider = if env.is_truthy(COVERAGE_VAR) {
        tracing::debug!("coverage mode, skipping remote provider construction");
        None
    } else {
        Some(provider_factory(env, NetworkName::rinkeby())?)
    };

    Ok(DeployConfig {
        compilers: Compilers {
            solc: CompilerSettings::default(),
        },
        networks: Networks {
            development: NetworkProfile::development(),
            rinkeby: NetworkProfile::rinkeby(provider),
        },
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    const PHRASE: &str =
        "legal winner thank year wave sausage worth useful legal winner thank yellow";

    fn full_env() -> StaticEnv {
        StaticEnv::new()
            .with(MNEMONIC_VAR, PHRASE)
            .with(INFURA_API_KEY_VAR, "a1b2c3")
    }

    #[test]
    fn test_missing_mnemonic_is_fatal() {
        let env = StaticEnv::new().with(INFURA_API_KEY_VAR, "a1b2c3");
        let err = resolve(&env).unwrap_err();
        assert!(err.to_string().contains("MNEMONIC"));
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let env = StaticEnv::new().with(MNEMONIC_VAR, PHRASE);
        let err = resolve(&env).unwrap_err();
        assert!(err.to_string().contains("INFURA_API_KEY"));
    }

    #[test]
    fn test_mnemonic_checked_before_api_key() {
        let err = resolve(&StaticEnv::new()).unwrap_err();
        let ConfigError::MissingSecret { name } = err;
        assert_eq!(name, MNEMONIC_VAR);
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let env = full_env().with(MNEMONIC_VAR, "");
        let err = resolve(&env).unwrap_err();
        assert!(err.to_string().contains("MNEMONIC"));
    }

    #[test]
    fn test_resolve_attaches_rinkeby_provider() {
        let config = resolve(&full_env()).unwrap();
        let factory = config.networks.rinkeby.provider.expect("factory present");
        assert_eq!(factory.endpoint_url(), "https://rinkeby.infura.io/a1b2c3");
        assert_eq!(factory.construct().mnemonic().phrase(), PHRASE);
    }

    #[test]
    fn test_coverage_mode_skips_provider_and_validation() {
        // No secrets at all; the coverage flag must suppress the check.
        let env = StaticEnv::new().with(COVERAGE_VAR, "true");
        let config = resolve(&env).unwrap();
        assert!(config.networks.rinkeby.provider.is_none());
    }

    #[test]
    fn test_empty_coverage_flag_does_not_opt_out() {
        let env = StaticEnv::new().with(COVERAGE_VAR, "");
        let err = resolve(&env).unwrap_err();
        assert!(err.to_string().contains("MNEMONIC"));
    }

    #[test]
    fn test_development_profile_is_environment_independent() {
        let with_secrets = resolve(&full_env()).unwrap();
        let coverage = resolve(&StaticEnv::new().with(COVERAGE_VAR, "1")).unwrap();

        for config in [&with_secrets, &coverage] {
            let dev = &config.networks.development;
            assert_eq!(dev.host.as_deref(), Some("localhost"));
            assert_eq!(dev.port, Some(8545));
        }
    }
}
