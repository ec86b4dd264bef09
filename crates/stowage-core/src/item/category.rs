use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of context item categories.
///
/// The category drives the type weight in priority scoring and the
/// modifier applied to relevance decay. Instruction items additionally
/// enjoy eviction immunity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Instruction,
    Decision,
    FileContent,
    UnderstandingNode,
    Memory,
    Summary,
    ErrorContext,
    Dependency,
}

impl ItemCategory {
    /// All categories in a stable order, for per-category aggregation.
    pub const ALL: [ItemCategory; 8] = [
        ItemCategory::Instruction,
        ItemCategory::Decision,
        ItemCategory::FileContent,
        ItemCategory::UnderstandingNode,
        ItemCategory::Memory,
        ItemCategory::Summary,
        ItemCategory::ErrorContext,
        ItemCategory::Dependency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Instruction => "instruction",
            ItemCategory::Decision => "decision",
            ItemCategory::FileContent => "file_content",
            ItemCategory::UnderstandingNode => "understanding_node",
            ItemCategory::Memory => "memory",
            ItemCategory::Summary => "summary",
            ItemCategory::ErrorContext => "error_context",
            ItemCategory::Dependency => "dependency",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
