//! Typed errors for the Stowage engine.
//!
//! Expected conditions (absent ids, excluded items, the degenerate
//! required-overflow selection) are communicated through return values;
//! errors are reserved for rejected admissions and invalid construction.

/// Engine-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum StowageError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("duplicate item id: {id}")]
    DuplicateItem { id: String },

    #[error("item {id} has size {size}; token size must be >= 1")]
    InvalidItemSize { id: String, size: u32 },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience alias used across all stowage crates.
pub type StowageResult<T> = Result<T, StowageError>;
