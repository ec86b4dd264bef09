//! # stowage-eviction
//!
//! Eviction strategies behind one shared selection contract:
//! `select(items, tokens_to_free, now) -> ids`. Three closed variants:
//! recency-based, priority-based (value score), and adaptive (value score
//! with reinsertion-penalty feedback). No strategy ever selects an
//! instruction item.

mod adaptive;
pub mod penalties;
mod priority;
mod recency;
pub mod strategy;

pub use adaptive::AdaptiveState;
pub use penalties::ReinsertionPenalties;
pub use strategy::{EvictionPolicy, EvictionStrategy};
