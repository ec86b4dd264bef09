//! Context window pressure tracking: tiers, trend, and the optimization
//! trigger.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use stowage_core::config::WindowConfig;
use stowage_core::constants::{
    CRITICAL_PRESSURE_FLOOR, EXCEEDED_PRESSURE_FLOOR, HIGH_PRESSURE_FLOOR, MEDIUM_PRESSURE_FLOOR,
};

/// Pressure tier by utilization. A utilization exactly on a boundary
/// belongs to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureTier {
    Low,
    Medium,
    High,
    Critical,
    Exceeded,
}

/// Pressure movement over the recent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureTrend {
    Increasing,
    Stable,
    Decreasing,
}

/// Tracks utilization, a bounded pressure history, and whether a
/// re-optimization is warranted.
#[derive(Debug, Clone)]
pub struct ContextWindowManager {
    capacity: u32,
    config: WindowConfig,
    history: VecDeque<f64>,
}

impl ContextWindowManager {
    pub fn new(capacity: u32, config: WindowConfig) -> Self {
        Self {
            capacity,
            config,
            history: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn utilization(&self, current_tokens: u32) -> f64 {
        f64::from(current_tokens) / f64::from(self.capacity)
    }

    pub fn tier(&self, current_tokens: u32) -> PressureTier {
        let u = self.utilization(current_tokens);
        if u < MEDIUM_PRESSURE_FLOOR {
            PressureTier::Low
        } else if u < HIGH_PRESSURE_FLOOR {
            PressureTier::Medium
        } else if u < CRITICAL_PRESSURE_FLOOR {
            PressureTier::High
        } else if u < EXCEEDED_PRESSURE_FLOOR {
            PressureTier::Critical
        } else {
            PressureTier::Exceeded
        }
    }

    /// Record a pressure sample, keeping the bounded history.
    pub fn record_pressure(&mut self, pressure: f64) {
        self.history.push_back(pressure);
        while self.history.len() > self.config.pressure_history_len {
            self.history.pop_front();
        }
    }

    /// Trend over the most recent samples: the mean pairwise delta beyond
    /// ±trend_delta classifies as increasing/decreasing.
    pub fn trend(&self) -> PressureTrend {
        let window = self.config.trend_window.min(self.history.len());
        if window < 2 {
            return PressureTrend::Stable;
        }
        let recent: Vec<f64> = self
            .history
            .iter()
            .skip(self.history.len() - window)
            .copied()
            .collect();
        let mean_delta = recent
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .sum::<f64>()
            / (window - 1) as f64;

        if mean_delta > self.config.trend_delta {
            PressureTrend::Increasing
        } else if mean_delta < -self.config.trend_delta {
            PressureTrend::Decreasing
        } else {
            PressureTrend::Stable
        }
    }

    /// Whether the engine should re-optimize at the given total.
    pub fn should_optimize(&self, current_tokens: u32) -> bool {
        let tier = self.tier(current_tokens);
        matches!(tier, PressureTier::Critical | PressureTier::Exceeded)
            || (tier == PressureTier::High && self.trend() == PressureTrend::Increasing)
            || self.utilization(current_tokens) > self.config.target_utilization
    }

    /// Token units to free to get back under the utilization target, plus
    /// a capacity-relative buffer. Zero when already under the target.
    pub fn tokens_to_free(&self, current_tokens: u32) -> u32 {
        let target = f64::from(self.capacity) * self.config.target_utilization;
        let current = f64::from(current_tokens);
        if current <= target {
            return 0;
        }
        let buffer = f64::from(self.capacity) * self.config.free_buffer_ratio;
        ((current - target) + buffer).ceil() as u32
    }
}
