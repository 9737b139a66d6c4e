use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::inject::injector::Assignment;

// ============================================================================
// Injection run report
// ============================================================================

/// Outcome for a single resource file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,

    /// Identifiers added, in assignment order
    pub assignments: Vec<Assignment>,

    /// Whether the file was rewritten (false on dry runs)
    pub written: bool,
}

/// A file (or root) that could not be processed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Aggregated result of one `inject` invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl RunReport {
    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn assigned_count(&self) -> usize {
        self.files.iter().map(|f| f.assignments.len()).sum()
    }

    pub fn written_count(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }

    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
