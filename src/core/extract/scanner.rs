use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

/// Collect every file under `root` whose extension is in `extensions`.
///
/// Top-level directories named in `ignore_dirs` are pruned from the walk.
/// Entries are visited in file-name order so repeated runs see the same
/// sequence. Any walk error aborts the scan.
///
/// Links are not followed into directories, but a link with a matching name
/// is returned like a regular file and read through.
pub fn scan_source_files(
    root: &Path,
    extensions: &[String],
    ignore_dirs: &[String],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignore_dirs));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk source tree: {}", root.display()))?;
        let path = entry.path();

        if !entry.file_type().is_dir() && is_scannable_file(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &[String]) -> bool {
    entry.depth() == 1
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.iter().any(|dir| dir == name))
}

fn is_scannable_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
