use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ToolError;

/// Replace the contents of `path` atomically.
///
/// The new content goes to a temporary file in the same directory, which is
/// then renamed over the original. If anything fails the original file is
/// untouched and the temporary file is removed. The original's permissions
/// are carried over.
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), ToolError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ToolError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| ToolError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ToolError::io(tmp.path(), e))?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(tmp.path(), metadata.permissions())
            .map_err(|e| ToolError::io(tmp.path(), e))?;
    }

    tmp.persist(path).map_err(|e| ToolError::io(path, e.error))?;
    Ok(())
}
