//! # stowage-core
//!
//! Foundation crate for the Stowage context engine.
//! Defines the item data model, configuration, errors, shared result
//! models, and the clock abstraction. Every other crate in the workspace
//! depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use errors::{StowageError, StowageResult};
pub use item::{ContextItem, ItemCategory};
pub use models::{EngineState, OptimizationResult, SessionSnapshot};
