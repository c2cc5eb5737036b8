use relative_path::{Component, RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content path: {0}")]
    InvalidPath(String),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Resolves a content path below `root`.
///
/// The path is normalised first; anything that still climbs above the root
/// (`../x`, `a/../../x`) is rejected, as is a path with nothing left.
/// A leading `/` does not escape: the path stays rooted at `root`.
pub fn resolve(root: &Path, relative: &RelativePath) -> Result<PathBuf, IoError> {
    let normalized = relative.normalize();
    if normalized.as_str().is_empty()
        || normalized
            .components()
            .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(IoError::InvalidPath(relative.to_string()));
    }
    Ok(normalized.to_path(root))
}

/// Read a file below `root` and return its content
pub fn read_file(relative: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = resolve(root, relative)?;
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file below `root`
pub fn write_file(relative: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = resolve(root, relative)?;

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Files directly inside `folder` (below `root`), as content paths, sorted.
///
/// A folder that does not exist yet has no files.
pub fn list_files(folder: &RelativePath, root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    let dir = resolve(root, folder)?;
    if !dir.is_dir() {
        return Ok(vec![]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        if !entry.file_type().map_err(IoError::Io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(folder.normalize().join(name));
        }
    }
    files.sort();
    Ok(files)
}

/// Scan for markdown files below `dir`, sorted
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}
