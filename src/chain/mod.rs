//! Core EVM network types, configuration records, and provider factory.
//!
//! This module provides the fundamental types for the deployment
//! configuration:
//!
//! - [`NetworkName`], [`NetworkId`], [`Wei`] - wire-format value types
//! - [`CompilerSettings`], [`NetworkProfile`], [`DeployConfig`] - the
//!   assembled configuration records
//! - [`ProviderFactory`], [`WalletProvider`] - deferred wallet-backed
//!   provider construction for remote networks

pub mod types;
pub use types::*;

pub mod config;
pub use config::*;

pub mod provider;
pub use provider::*;
