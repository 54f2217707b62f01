//! Configuration emitter for the contract build toolchain.
//!
//! Resolves the compiler and network settings from the process environment
//! (plus a local `.env` file when present) and prints them as JSON for the
//! surrounding build/deploy tool. A missing required secret is a fatal
//! startup error: the binary names the secret and exits non-zero.
//!
//! # Configuration
//!
//! Set the following environment variables:
//!
//! - `MNEMONIC`          - Wallet seed phrase (required outside coverage mode)
//! - `INFURA_API_KEY`    - Hosted-node API key (required outside coverage mode)
//! - `SOLIDITY_COVERAGE` - Set to skip provider construction
//! - `LOG_LEVEL`         - Log filter, used if `RUST_LOG` is not set (default: info)

use std::process::ExitCode;

use evm_deploy_config::env::ProcessEnv;
use evm_deploy_config::resolver::{self, ConfigError};

fn main() -> ExitCode {
    // Pick up a .env file if one exists; absence is fine.
    let _ = dotenvy::dotenv();

    // Initialize tracing: LOG_LEVEL is used if RUST_LOG is not set
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match resolver::resolve(&ProcessEnv::new()) {
        Ok(config) => config,
        Err(ConfigError::MissingSecret { name }) => {
            eprintln!("Please set your {name}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        remote_provider = config.networks.rinkeby.provider.is_some(),
        "deployment configuration resolved"
    );

    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize configuration");
            ExitCode::FAILURE
        }
    }
}
