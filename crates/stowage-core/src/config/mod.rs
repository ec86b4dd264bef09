//! Engine configuration.
//!
//! Every constant table the engine consults (category weights, decay
//! modifiers, boost multipliers, window thresholds, knapsack scaling,
//! penalty bounds) lives here and is injected at construction, so
//! independently configured instances can coexist in one process.

pub mod decay_config;
pub mod defaults;
pub mod eviction_config;
pub mod knapsack_config;
pub mod scoring_config;
pub mod window_config;

use serde::{Deserialize, Serialize};

use crate::errors::{StowageError, StowageResult};

pub use decay_config::{DecayConfig, DecayModifiers};
pub use eviction_config::EvictionConfig;
pub use knapsack_config::KnapsackConfig;
pub use scoring_config::{CategoryWeights, ContextualBoosts, ScoringConfig};
pub use window_config::WindowConfig;

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Context window capacity in token units. Must be >= 1.
    pub capacity: u32,
    pub scoring: ScoringConfig,
    pub decay: DecayConfig,
    pub window: WindowConfig,
    pub knapsack: KnapsackConfig,
    pub eviction: EvictionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CAPACITY,
            scoring: ScoringConfig::default(),
            decay: DecayConfig::default(),
            window: WindowConfig::default(),
            knapsack: KnapsackConfig::default(),
            eviction: EvictionConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration at a given capacity.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML, validating it.
    pub fn from_toml_str(raw: &str) -> StowageResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on configurations the engine cannot run with.
    pub fn validate(&self) -> StowageResult<()> {
        if self.capacity == 0 {
            return Err(invalid("capacity must be >= 1 token unit"));
        }
        if !(self.window.target_utilization > 0.0 && self.window.target_utilization <= 1.0) {
            return Err(invalid("target_utilization must be in (0, 1]"));
        }
        if !self.window.free_buffer_ratio.is_finite() || self.window.free_buffer_ratio < 0.0 {
            return Err(invalid("free_buffer_ratio must be finite and >= 0"));
        }
        if self.knapsack.dp_capacity_limit == 0 {
            return Err(invalid("dp_capacity_limit must be >= 1"));
        }
        if !self.decay.default_rate.is_finite() || self.decay.default_rate < 0.0 {
            return Err(invalid("decay default_rate must be finite and >= 0"));
        }
        if !(self.eviction.penalty_decay > 0.0 && self.eviction.penalty_decay < 1.0) {
            return Err(invalid("penalty_decay must be in (0, 1)"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> StowageError {
    StowageError::InvalidConfig {
        reason: reason.to_string(),
    }
}
