//! # stowage-engine
//!
//! The orchestrator of the Stowage context engine: pressure-tier and
//! trend tracking (`ContextWindowManager`) and the admission/eviction
//! loop (`ContextOptimizer`) composing scoring, decay, eviction
//! strategies, and knapsack selection.
//!
//! Single-threaded and synchronous by contract: every operation runs to
//! completion, performs no I/O, and mutates only in-memory state. Hosts
//! sharing an instance across threads must serialize access themselves.

pub mod optimizer;
pub mod window;

pub use optimizer::ContextOptimizer;
pub use window::{ContextWindowManager, PressureTier, PressureTrend};
