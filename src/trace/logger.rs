use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::trace::trace::TraceEvent;

/// JSON-lines sink for injection and diff events.
///
/// A trace file that cannot be opened or written only costs the trace:
/// the warning goes to stderr and the rewrite of layouts carries on.
pub struct TraceLogger {
    sink: Option<TraceSink>,
}

struct TraceSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl TraceLogger {
    /// Append to `path`, creating it if needed. Earlier runs are kept.
    pub fn new(path: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Some(TraceSink {
                    path: path.to_path_buf(),
                    file: Mutex::new(file),
                }),
            },
            Err(e) => {
                eprintln!("Warning: tracing disabled, cannot open '{}': {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// `--trace` or `trace.path`, whichever won; `None` means no tracing.
    pub fn from_option(path: Option<&Path>) -> Self {
        path.map_or_else(Self::disabled, Self::new)
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Record one event as a single line.
    pub fn log(&self, event: &TraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let mut line = match serde_json::to_vec(event) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Warning: dropped {:?} event for {}: {}", event.event, event.path, e);
                return;
            }
        };
        line.push(b'\n');

        // One write per line so concurrent appenders never interleave halves.
        let result = match sink.file.lock() {
            Ok(mut file) => file.write_all(&line),
            Err(poisoned) => poisoned.into_inner().write_all(&line),
        };
        if let Err(e) = result {
            eprintln!("Warning: could not append to {}: {}", sink.path.display(), e);
        }
    }
}
