use anyhow::Result;

use super::super::{args::TranslateCommand, report::print_batch_progress};
use super::context::build_context;
use super::{CommandResult, CommandSummary, DryRunSummary, TranslateSummary};
use crate::translator::{OpenAiTranslator, TranslatorSettings, system_prompt};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let ctx = build_context(&args.common)?;
    let plan = ctx.plan()?;

    if args.dry_run {
        return Ok(CommandResult::success(CommandSummary::DryRun(DryRunSummary {
            files_scanned: plan.extraction.files.len(),
            terms_found: plan.extraction.terms.len(),
            cached: plan.cache.len(),
            batches: plan.non_empty_batches().count(),
            pending: plan.pending,
        })));
    }

    // A missing key is reported on every run, not only when terms are pending.
    let translator = OpenAiTranslator::new(
        args.api_key.as_deref(),
        TranslatorSettings {
            api_base_url: ctx.config.api_base_url.clone(),
            model: ctx.config.model.clone(),
            seed: ctx.config.seed,
            system_prompt: system_prompt(&ctx.config.domain, &ctx.config.locales),
        },
    )?;

    let run = ctx.execute(plan, &translator, print_batch_progress)?;

    Ok(CommandResult::success(CommandSummary::Translate(
        TranslateSummary {
            run,
            cache_path: ctx.cache_path,
            output_path: ctx.output_path,
        },
    )))
}
