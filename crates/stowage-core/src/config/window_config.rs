use serde::{Deserialize, Serialize};

use super::defaults;

/// Context window pressure-tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Utilization the engine optimizes back down to.
    pub target_utilization: f64,
    /// Extra share of capacity freed beyond the target when evicting.
    pub free_buffer_ratio: f64,
    /// Pressure samples retained for trend tracking.
    pub pressure_history_len: usize,
    /// Samples inspected when classifying the trend.
    pub trend_window: usize,
    /// Mean pairwise delta beyond which the trend counts as moving.
    pub trend_delta: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            target_utilization: defaults::DEFAULT_TARGET_UTILIZATION,
            free_buffer_ratio: defaults::DEFAULT_FREE_BUFFER_RATIO,
            pressure_history_len: defaults::DEFAULT_PRESSURE_HISTORY_LEN,
            trend_window: defaults::DEFAULT_TREND_WINDOW,
            trend_delta: defaults::DEFAULT_TREND_DELTA,
        }
    }
}
