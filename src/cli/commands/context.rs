use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{config::load_config, pipeline::TranslationContext};

/// Load the config found from the working directory and apply CLI overrides.
///
/// Paths from the config file are relative to the file's directory; paths
/// given on the command line are relative to the working directory.
pub fn build_context(common: &CommonArgs) -> Result<TranslationContext> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let loaded = load_config(&cwd)?;

    let pick = |flag: &Option<PathBuf>, configured: &str| match flag {
        Some(path) => cwd.join(path),
        None => loaded.resolve(configured),
    };

    let source_root = pick(&common.source_root, &loaded.config.source_root);
    let cache_path = pick(&common.cache, &loaded.config.cache_path);
    let output_path = pick(&common.output, &loaded.config.output_path);

    debug!(
        from_file = loaded.from_file,
        source_root = %source_root.display(),
        cache = %cache_path.display(),
        output = %output_path.display(),
        "resolved configuration"
    );

    Ok(TranslationContext {
        config: loaded.config,
        source_root,
        cache_path,
        output_path,
    })
}
