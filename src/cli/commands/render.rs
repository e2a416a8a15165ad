use anyhow::Result;

use super::super::args::RenderCommand;
use super::context::build_context;
use super::{CommandResult, CommandSummary, RenderSummary};
use crate::core::Cache;

pub fn render(cmd: RenderCommand) -> Result<CommandResult> {
    let ctx = build_context(&cmd.args.common)?;
    let cache = Cache::load(&ctx.cache_path)?;

    ctx.write_output(&cache)?;

    Ok(CommandResult::success(CommandSummary::Render(RenderSummary {
        terms: cache.len(),
        output_path: ctx.output_path,
    })))
}
