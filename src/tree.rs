//! Recursive directory listing.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors that can occur when listing a directory tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// List every regular file below `dir`, sorted by path.
///
/// Hidden files and directories and symbolic links are skipped. With an
/// `extension` only files carrying it (compared case-insensitively, without
/// the dot) are kept.
pub fn dir_tree(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>, TreeError> {
    if !dir.is_dir() {
        return Err(TreeError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(ext) = extension
            && !has_extension(entry.path(), ext)
        {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}
