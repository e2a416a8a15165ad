//! Term extraction from source files.
//!
//! ## Module Structure
//!
//! - `pattern`: the translation-call regex and term capture
//! - `scanner`: source tree walk with extension and directory filters

mod pattern;
mod scanner;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

pub use pattern::TermPattern;
pub use scanner::scan_source_files;

/// Output of one extraction pass.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Raw terms in traversal order, duplicates included.
    pub terms: Vec<String>,
    /// Files that were read.
    pub files: Vec<PathBuf>,
}

/// Walk `root` and collect every term found by `pattern`.
///
/// An unreadable file aborts the whole extraction.
pub fn extract_terms(
    root: &Path,
    extensions: &[String],
    ignore_dirs: &[String],
    pattern: &TermPattern,
) -> Result<Extraction> {
    let files = scan_source_files(root, extensions, ignore_dirs)?;
    let mut terms = Vec::new();

    for file in &files {
        let bytes = fs::read(file)
            .with_context(|| format!("Failed to read source file: {}", file.display()))?;
        let found = pattern.find_terms(&String::from_utf8_lossy(&bytes));
        debug!(file = %file.display(), terms = found.len(), "scanned source file");
        terms.extend(found);
    }

    Ok(Extraction { terms, files })
}
