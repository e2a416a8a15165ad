use std::collections::BTreeSet;

use super::cache::Cache;

/// Reduce raw extracted terms to the ones that still need translating.
///
/// Duplicates collapse to one entry, terms already present in `cache` are
/// dropped, and the result is sorted so batches are reproducible.
pub fn reconcile<I, S>(raw_terms: I, cache: &Cache) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let distinct: BTreeSet<String> = raw_terms
        .into_iter()
        .map(|term| term.as_ref().to_string())
        .collect();

    distinct
        .into_iter()
        .filter(|term| !cache.contains(term))
        .collect()
}
