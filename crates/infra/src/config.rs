//! Configuration loading and representation.
//!
//! Settings come from `STOCKROOM_*` environment variables. Anything unset
//! falls back to its documented default; anything malformed is an error.

use std::time::Duration;

use thiserror::Error;

use stockroom_core::{DomainError, IdStrategy};
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, StockOutPolicy};

pub const ENV_SIMULATED_LATENCY_MS: &str = "STOCKROOM_SIMULATED_LATENCY_MS";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const ENV_STOCK_OUT_POLICY: &str = "STOCKROOM_STOCK_OUT_POLICY";
pub const ENV_ID_STRATEGY: &str = "STOCKROOM_ID_STRATEGY";
pub const ENV_SEED_DEMO_DATA: &str = "STOCKROOM_SEED_DEMO_DATA";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the inventory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Delay awaited before every service operation (zero disables it).
    pub simulated_latency: Duration,
    pub low_stock_threshold: u64,
    pub stock_out_policy: StockOutPolicy,
    pub id_strategy: IdStrategy,
    pub seed_demo_data: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            stock_out_policy: StockOutPolicy::Clamp,
            id_strategy: IdStrategy::Sequential,
            seed_demo_data: false,
        }
    }
}

impl InventoryConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment, a map in tests, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let simulated_latency = match lookup(ENV_SIMULATED_LATENCY_MS) {
            Some(raw) => Duration::from_millis(parse_u64(ENV_SIMULATED_LATENCY_MS, &raw)?),
            None => defaults.simulated_latency,
        };

        let low_stock_threshold = match lookup(ENV_LOW_STOCK_THRESHOLD) {
            Some(raw) => parse_u64(ENV_LOW_STOCK_THRESHOLD, &raw)?,
            None => defaults.low_stock_threshold,
        };

        let stock_out_policy = match lookup(ENV_STOCK_OUT_POLICY) {
            Some(raw) => raw
                .parse()
                .map_err(|e: DomainError| invalid(ENV_STOCK_OUT_POLICY, &raw, e))?,
            None => defaults.stock_out_policy,
        };

        let id_strategy = match lookup(ENV_ID_STRATEGY) {
            Some(raw) => raw
                .parse()
                .map_err(|e: DomainError| invalid(ENV_ID_STRATEGY, &raw, e))?,
            None => defaults.id_strategy,
        };

        // The binary is a demo backend: seed unless told otherwise.
        let seed_demo_data = match lookup(ENV_SEED_DEMO_DATA) {
            Some(raw) => parse_bool(ENV_SEED_DEMO_DATA, &raw)?,
            None => true,
        };

        Ok(Self {
            simulated_latency,
            low_stock_threshold,
            stock_out_policy,
            id_strategy,
            seed_demo_data,
        })
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: u64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_stock_out_policy(mut self, policy: StockOutPolicy) -> Self {
        self.stock_out_policy = policy;
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }
}

fn invalid(var: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|e| invalid(var, raw, e))
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, raw, "expected a boolean")),
    }
}
