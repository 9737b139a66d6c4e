use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::ToolError;

/// Resource directory families that hold view XML, in processing order.
pub const RESOURCE_PREFIXES: &[&str] = &["layout", "menu"];

/// Find every layout and menu XML file under `root`.
///
/// A resource directory is any directory strictly below `root` whose parent
/// is named `res` and whose name starts with `layout` or `menu`
/// (`res/layout`, `res/layout-land`, `res/menu-v21`, ...). All `.xml` files
/// beneath it, at any depth, are returned: layout directories first, then
/// menu directories, each in file-name order. Hidden entries are skipped
/// and symlinks are not followed.
pub fn find_resource_files(root: &Path) -> Result<Vec<PathBuf>, ToolError> {
    let metadata = std::fs::metadata(root).map_err(|e| ToolError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ToolError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for prefix in RESOURCE_PREFIXES {
        for dir in find_resource_dirs(root, prefix)? {
            for file in find_xml_files(&dir)? {
                if seen.insert(file.clone()) {
                    files.push(file);
                }
            }
        }
    }

    Ok(files)
}

/// Directories under `root` matching `**/res/<prefix>*`.
pub fn find_resource_dirs(root: &Path, prefix: &str) -> Result<Vec<PathBuf>, ToolError> {
    let mut dirs = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.depth() < 2 || !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let parent_is_res = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|p| p == "res");
        if parent_is_res && name.starts_with(prefix) {
            dirs.push(entry.into_path());
        }
    }

    Ok(dirs)
}

/// All `.xml` files below `dir`, at any depth.
fn find_xml_files(dir: &Path) -> Result<Vec<PathBuf>, ToolError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "xml") {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn walk_error(root: &Path, err: walkdir::Error) -> ToolError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    ToolError::io(path, source)
}
