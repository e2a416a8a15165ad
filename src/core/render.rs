//! Generated Lua artifact.
//!
//! The artifact is a derived view of the cache and is regenerated in full on
//! every run. Output order is by term, then by locale, so identical caches
//! always produce byte-identical files.

use std::{fmt::Write, path::Path};

use anyhow::{Context, Result};

use super::cache::Cache;
use crate::utils::atomic_write;

/// Fixed parts of the generated file.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Written verbatim before the first block.
    pub preamble: &'a str,
    /// Table expression each term is assigned into, e.g. `L.data`.
    pub table_name: &'a str,
}

/// Render the full artifact for `cache`.
pub fn render_artifact(cache: &Cache, options: RenderOptions<'_>) -> String {
    let mut output = String::from(options.preamble);

    for set in cache.sets() {
        let _ = writeln!(
            output,
            "{}[\"{}\"] = {{",
            options.table_name,
            term_literal(&set.term)
        );
        for translation in &set.translations {
            let _ = writeln!(
                output,
                "  [\"{}\"] = \"{}\",",
                translation.locale,
                escape_lua(&translation.text)
            );
        }
        output.push_str("}\n");
    }

    output
}

pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    atomic_write(path, contents.as_bytes())
        .with_context(|| format!("Failed to write generated file: {}", path.display()))
}

/// Terms are copied from source literals, so existing escape sequences are
/// kept as written. Only bare double quotes (from single-quoted literals)
/// need escaping to stay valid inside a double-quoted key.
fn term_literal(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut escaped = false;
    for c in term.chars() {
        if c == '"' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

/// Escape translated text as the body of a double-quoted Lua string.
fn escape_lua(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
