//! Environment-lookup capability.
//!
//! The resolver reads the environment exclusively through [`EnvSource`], so
//! it can be exercised against an in-memory table ([`StaticEnv`]) without
//! mutating the process-wide environment. Production code passes
//! [`ProcessEnv`].

use std::collections::HashMap;

/// Read-only access to an environment variable table.
pub trait EnvSource {
    /// Returns the raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` when it holds a usable secret.
    ///
    /// A variable that is unset, empty, or whitespace-only counts as
    /// missing.
    fn secret(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.trim().is_empty())
    }

    /// Whether `key` is set to a non-empty value.
    ///
    /// Used for opt-out flags, where an empty value does not count as set.
    fn is_truthy(&self, key: &str) -> bool {
        self.var(key).is_some_and(|v| !v.is_empty())
    }
}

/// [`EnvSource`] backed by the process environment table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a process-environment source.
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// [`EnvSource`] backed by an in-memory map.
///
/// # Example
///
/// ```
/// use evm_deploy_config::env::{EnvSource, StaticEnv};
///
/// let env = StaticEnv::new().with("INFURA_API_KEY", "a1b2c3");
/// assert_eq!(env.var("INFURA_API_KEY").as_deref(), Some("a1b2c3"));
/// assert_eq!(env.var("MNEMONIC"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

// ============================================================================
// Tests
// ============================================================================
