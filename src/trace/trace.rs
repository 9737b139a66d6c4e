use serde::Serialize;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::inject::injector::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    FileProcessed,
    IdAssigned,
    FileFailed,
    DiffCompleted,
}

#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub event: TraceKind,
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TraceEvent {
    pub fn now(event: TraceKind, path: &Path) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            event,
            path: path.display().to_string(),
            tag: None,
            id: None,
            assigned: None,
            exit_code: None,
            message: None,
        }
    }

    pub fn with_assignment(mut self, assignment: &Assignment) -> Self {
        self.tag = Some(assignment.tag.clone());
        self.id = Some(assignment.id.clone());
        self
    }

    pub fn with_assigned(mut self, count: usize) -> Self {
        self.assigned = Some(count);
        self
    }

    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = Some(message.to_string());
        self
    }
}
