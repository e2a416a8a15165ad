use std::collections::{BTreeMap, BTreeSet};

use super::{
    batch::Batch,
    cache::{Cache, InsertOutcome, TranslationSet},
};

/// Parsed service response: term → locale code → translated text.
pub type TranslationResponse = BTreeMap<String, BTreeMap<String, String>>;

/// What merging one response changed, relative to the batch it answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub replaced: usize,
    /// Requested terms the response did not contain. They stay pending.
    pub missing: Vec<String>,
    /// Terms in the response that were not requested.
    pub unexpected: Vec<String>,
}

impl MergeStats {
    pub fn merged(&self) -> usize {
        self.added + self.replaced
    }
}

/// Fold `response` into `cache`, one [`TranslationSet`] per term.
pub fn merge_response(cache: &mut Cache, batch: &Batch, response: TranslationResponse) -> MergeStats {
    let requested: BTreeSet<&str> = batch.terms().iter().map(String::as_str).collect();
    let mut stats = MergeStats {
        missing: requested
            .iter()
            .filter(|term| !response.contains_key(**term))
            .map(|term| term.to_string())
            .collect(),
        ..Default::default()
    };

    for (term, translations) in response {
        if !requested.contains(term.as_str()) {
            stats.unexpected.push(term.clone());
        }
        match cache.insert(TranslationSet::new(term, translations)) {
            InsertOutcome::Added => stats.added += 1,
            InsertOutcome::Replaced => stats.replaced += 1,
        }
    }

    stats
}
