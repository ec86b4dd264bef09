//! # stowage-decay
//!
//! Relevance decay for context items: exponential decay over elapsed
//! hours, scaled by per-category modifiers, with a recoverability floor.

pub mod engine;
pub mod formula;

pub use engine::{DecayContext, DecayEngine};
