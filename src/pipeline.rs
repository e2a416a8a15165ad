//! Extraction → reconciliation → batching → translation → merge.
//!
//! [`TranslationContext`] holds the resolved configuration for one run.
//! [`TranslationContext::plan`] does all local work and touches nothing on
//! disk; [`TranslationContext::execute`] sends every non-empty batch in order,
//! committing the cache after each successful batch, and regenerates the
//! artifact once all batches are merged.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    core::{
        Batch, Cache, Extraction, MergeStats, RenderOptions, TermPattern, extract_terms,
        merge_response, partition, reconcile, render_artifact, write_artifact,
    },
    translator::Translator,
};

/// Configuration and resolved paths for one run.
pub struct TranslationContext {
    pub config: Config,
    pub source_root: PathBuf,
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
}

/// Result of the local half of a run.
#[derive(Debug)]
pub struct Plan {
    pub extraction: Extraction,
    pub cache: Cache,
    /// Distinct, uncached terms in sorted order.
    pub pending: Vec<String>,
    /// Every batch slot, empty ones included.
    pub batches: Vec<Batch>,
}

impl Plan {
    pub fn non_empty_batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter().filter(|batch| !batch.is_empty())
    }
}

/// Progress for one merged batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub index: usize,
    /// 1-based position among the non-empty batches.
    pub position: usize,
    pub total: usize,
    pub stats: MergeStats,
}

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub terms_found: usize,
    pub pending: usize,
    pub batches_sent: usize,
    pub translated: usize,
    /// Requested terms that no response contained.
    pub untranslated: Vec<String>,
    pub cache_size: usize,
}

impl TranslationContext {
    pub fn render_options(&self) -> RenderOptions<'_> {
        RenderOptions {
            preamble: &self.config.preamble,
            table_name: &self.config.table_name,
        }
    }

    /// Extract, load the cache, reconcile, and partition.
    pub fn plan(&self) -> Result<Plan> {
        let pattern = TermPattern::new(&self.config.call_marker)?;
        let extraction = extract_terms(
            &self.source_root,
            &self.config.extensions,
            &self.config.ignore_dirs,
            &pattern,
        )?;
        let cache = Cache::load(&self.cache_path)?;
        let pending = reconcile(&extraction.terms, &cache);
        let batches = partition(&pending, self.config.batch_count);

        debug!(
            files = extraction.files.len(),
            terms = extraction.terms.len(),
            cached = cache.len(),
            pending = pending.len(),
            "planned translation run"
        );

        Ok(Plan {
            extraction,
            cache,
            pending,
            batches,
        })
    }

    /// Translate every non-empty batch of `plan` and write the outputs.
    ///
    /// The cache file is rewritten after each merged batch, so a failure in
    /// a later batch keeps the work already done. The artifact is only
    /// written once every batch has succeeded.
    pub fn execute<T, F>(&self, plan: Plan, translator: &T, mut on_batch: F) -> Result<RunSummary>
    where
        T: Translator,
        F: FnMut(&BatchOutcome),
    {
        let Plan {
            extraction,
            mut cache,
            pending,
            batches,
        } = plan;

        let to_send: Vec<&Batch> = batches.iter().filter(|batch| !batch.is_empty()).collect();
        let total = to_send.len();

        let mut summary = RunSummary {
            files_scanned: extraction.files.len(),
            terms_found: extraction.terms.len(),
            pending: pending.len(),
            ..Default::default()
        };

        if total > 0 {
            translator
                .preflight()
                .context("Translation service credentials check failed")?;
        }

        for (i, batch) in to_send.into_iter().enumerate() {
            let response = translator
                .translate(batch)
                .with_context(|| format!("Failed to translate batch {}", batch.index))?;
            let stats = merge_response(&mut cache, batch, response);

            for term in &stats.missing {
                warn!(batch = batch.index, term = %term, "term missing from response");
            }
            for term in &stats.unexpected {
                warn!(batch = batch.index, term = %term, "response contained a term that was not requested");
            }

            cache.save(&self.cache_path)?;
            info!(batch = batch.index, merged = stats.merged(), "committed batch to cache");

            summary.batches_sent += 1;
            summary.translated += stats.merged();
            summary.untranslated.extend(stats.missing.iter().cloned());
            on_batch(&BatchOutcome {
                index: batch.index,
                position: i + 1,
                total,
                stats,
            });
        }

        cache.save(&self.cache_path)?;
        self.write_output(&cache)?;
        summary.cache_size = cache.len();

        Ok(summary)
    }

    /// Regenerate the artifact from `cache`.
    pub fn write_output(&self, cache: &Cache) -> Result<()> {
        let contents = render_artifact(cache, self.render_options());
        write_artifact(&self.output_path, &contents)
    }
}
