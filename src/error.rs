use std::fmt;
use std::path::PathBuf;

use crate::xml::XmlError;

#[derive(Debug)]
pub enum ToolError {
    /// Reading, writing or renaming a file failed
    Io { path: PathBuf, source: std::io::Error },

    /// File content is not well-formed XML
    Parse { path: PathBuf, source: XmlError },

    /// Document could not be written back out
    Serialize { path: PathBuf, source: XmlError },

    /// Bad command-line arguments or config values
    Arguments(String),

    /// External diff program failed to spawn
    DiffSpawn { program: String, source: std::io::Error },
}

impl ToolError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToolError::Io { path: path.into(), source }
    }

    /// Path of the file the error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ToolError::Io { path, .. }
            | ToolError::Parse { path, .. }
            | ToolError::Serialize { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            ToolError::Parse { path, source } => {
                write!(f, "Malformed XML in {}: {}", path.display(), source)
            }
            ToolError::Serialize { path, source } => {
                write!(f, "Failed to serialize {}: {}", path.display(), source)
            }
            ToolError::Arguments(msg) => {
                write!(f, "Invalid arguments: {}", msg)
            }
            ToolError::DiffSpawn { program, source } => {
                write!(f, "Failed to spawn {} (is it installed?): {}", program, source)
            }
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::Io { source, .. } => Some(source),
            ToolError::Parse { source, .. } => Some(source),
            ToolError::Serialize { source, .. } => Some(source),
            ToolError::DiffSpawn { source, .. } => Some(source),
            ToolError::Arguments(_) => None,
        }
    }
}
