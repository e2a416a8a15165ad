//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: write a default configuration file
//! - `translate`: extract terms, translate the new ones, write cache and artifact
//! - `render`: regenerate the artifact from the cache only

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::translator::API_KEY_ENV;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Translate(cmd)) => cmd.args.common.verbose,
            Some(Command::Render(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all pipeline commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source tree to scan (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Translation cache file (overrides config file)
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Generated output file (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only list the terms that would be sent; no requests, no writes
    #[arg(long)]
    pub dry_run: bool,

    /// API key for the translation service
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub args: TranslateArgs,
}

#[derive(Debug, Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub args: RenderArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .glossarc.json configuration file
    Init,
    /// Extract terms, translate new ones, and regenerate the output file
    Translate(TranslateCommand),
    /// Regenerate the output file from the translation cache
    Render(RenderCommand),
}
