use serde::{Deserialize, Serialize};

use super::defaults;

/// Knapsack optimizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnapsackConfig {
    /// Capacity above which the DP scales its units down. The resulting
    /// approximation can leave up to scale − 1 units of slack unused;
    /// this bounds DP cost, it is not an optimality guarantee.
    pub dp_capacity_limit: u32,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            dp_capacity_limit: defaults::DEFAULT_DP_CAPACITY_LIMIT,
        }
    }
}
