//! Report formatting and printing utilities.
//!
//! Separate from the pipeline so glossa can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, DryRunSummary, InitSummary, RenderSummary, TranslateSummary,
};
use crate::{config::CONFIG_FILE_NAME, pipeline::BatchOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of pending terms listed by a dry run without `-v`.
const MAX_PENDING_DISPLAY: usize = 20;

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err);
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, out, err),
        CommandSummary::Translate(summary) => print_translate(summary, out, err),
        CommandSummary::DryRun(summary) => print_dry_run(summary, verbose, out),
        CommandSummary::Render(summary) => print_render(summary, out),
    }
}

/// Print one line per merged batch as the run progresses.
pub fn print_batch_progress(outcome: &BatchOutcome) {
    print_batch_progress_to(outcome, &mut io::stdout().lock());
}

pub fn print_batch_progress_to<W: Write>(outcome: &BatchOutcome, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Processed batch {} ({}/{}): {} {}",
        outcome.index,
        outcome.position,
        outcome.total,
        outcome.stats.merged(),
        if outcome.stats.merged() == 1 { "term" } else { "terms" }
    );
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}

fn print_translate<W: Write, E: Write>(summary: &TranslateSummary, out: &mut W, err: &mut E) {
    let run = &summary.run;

    let _ = writeln!(
        out,
        "Scanned {} source {}, found {} {} ({} new)",
        run.files_scanned,
        if run.files_scanned == 1 { "file" } else { "files" },
        run.terms_found,
        if run.terms_found == 1 { "term" } else { "terms" },
        run.pending
    );

    if run.batches_sent == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "All terms already translated".green()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Translated {} {} in {} {}",
                run.translated,
                if run.translated == 1 { "term" } else { "terms" },
                run.batches_sent,
                if run.batches_sent == 1 { "batch" } else { "batches" }
            )
            .green()
        );
    }

    if !run.untranslated.is_empty() {
        let _ = writeln!(
            err,
            "{} {} term(s) missing from responses, they will be retried on the next run: {}",
            "warning:".bold().yellow(),
            run.untranslated.len(),
            run.untranslated.join(", ")
        );
    }

    print_written(&summary.cache_path, run.cache_size, out);
    print_written(&summary.output_path, run.cache_size, out);
}

fn print_dry_run<W: Write>(summary: &DryRunSummary, verbose: bool, out: &mut W) {
    let _ = writeln!(
        out,
        "Scanned {} source {}, found {} {} ({} cached)",
        summary.files_scanned,
        if summary.files_scanned == 1 { "file" } else { "files" },
        summary.terms_found,
        if summary.terms_found == 1 { "term" } else { "terms" },
        summary.cached
    );

    if summary.pending.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "No new terms to translate".green()
        );
        return;
    }

    let _ = writeln!(
        out,
        "{} new {} would be sent in {} {}:",
        summary.pending.len(),
        if summary.pending.len() == 1 { "term" } else { "terms" },
        summary.batches,
        if summary.batches == 1 { "batch" } else { "batches" }
    );

    let shown = if verbose {
        summary.pending.len()
    } else {
        summary.pending.len().min(MAX_PENDING_DISPLAY)
    };
    for term in summary.pending.iter().take(shown) {
        let _ = writeln!(out, "  {} {}", "+".green(), term);
    }
    let remaining = summary.pending.len() - shown;
    if remaining > 0 {
        let _ = writeln!(
            out,
            "  {}",
            format!("... and {} more (use {} to list all)", remaining, "-v").dimmed()
        );
    }
}

fn print_render<W: Write>(summary: &RenderSummary, out: &mut W) {
    print_written(&summary.output_path, summary.terms, out);
}

fn print_written<W: Write>(path: &Path, terms: usize, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} ({} {})",
            path.display(),
            terms,
            if terms == 1 { "term" } else { "terms" }
        )
        .green()
    );
}
