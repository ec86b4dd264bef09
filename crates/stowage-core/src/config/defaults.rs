//! Default values for all configuration objects.

/// Default context window capacity in token units.
pub const DEFAULT_CAPACITY: u32 = 8_192;

/// Base decay rate for items that do not override it.
pub const DEFAULT_DECAY_RATE: f64 = 0.1;

/// Relevance never decays below this floor.
pub const RELEVANCE_FLOOR: f64 = 0.1;

/// Utilization above which the window manager asks for optimization.
pub const DEFAULT_TARGET_UTILIZATION: f64 = 0.8;

/// Extra share of capacity freed beyond the utilization target.
pub const DEFAULT_FREE_BUFFER_RATIO: f64 = 0.05;

/// Pressure samples retained for trend tracking.
pub const DEFAULT_PRESSURE_HISTORY_LEN: usize = 50;

/// Samples inspected when classifying the pressure trend.
pub const DEFAULT_TREND_WINDOW: usize = 5;

/// Mean pairwise delta beyond which the trend counts as moving.
pub const DEFAULT_TREND_DELTA: f64 = 0.02;

/// Capacity above which the knapsack DP scales its units down.
pub const DEFAULT_DP_CAPACITY_LIMIT: u32 = 10_000;

/// Maximum entries in the adaptive strategy's penalty map.
pub const DEFAULT_MAX_PENALTY_ENTRIES: usize = 256;

/// Penalty added on each re-admission of a previously evicted id.
pub const DEFAULT_PENALTY_INCREMENT: f64 = 0.1;

/// Multiplier applied to all penalties on every evict call.
pub const DEFAULT_PENALTY_DECAY: f64 = 0.95;

/// Penalties below this are pruned.
pub const DEFAULT_PENALTY_PRUNE_THRESHOLD: f64 = 0.01;

/// Maximum evicted ids remembered for reinsertion tracking.
pub const DEFAULT_MAX_TRACKED_EVICTIONS: usize = 512;
