use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the host session, supplied per admission.
///
/// The engine never mutates it; it feeds dependency satisfaction and the
/// active-file boost in priority scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Item ids the session currently knows about.
    pub known_ids: HashSet<String>,
    /// File paths currently active in the session.
    pub active_files: Vec<String>,
}

impl SessionSnapshot {
    pub fn new(known_ids: HashSet<String>, active_files: Vec<String>) -> Self {
        Self {
            known_ids,
            active_files,
        }
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.known_ids.contains(id)
    }

    pub fn is_active_file(&self, path: &str) -> bool {
        self.active_files.iter().any(|f| f == path)
    }
}
