use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::pipeline::RunSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Translate(TranslateSummary),
    DryRun(DryRunSummary),
    Render(RenderSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub run: RunSummary,
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct DryRunSummary {
    pub files_scanned: usize,
    pub terms_found: usize,
    pub cached: usize,
    /// Distinct, uncached terms in the order they would be batched.
    pub pending: Vec<String>,
    /// Number of non-empty batches that would be sent.
    pub batches: usize,
}

#[derive(Debug)]
pub struct RenderSummary {
    pub terms: usize,
    pub output_path: PathBuf,
}

/// Result of running a glossa command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
