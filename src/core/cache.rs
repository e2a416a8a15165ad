//! Persistent translation cache.
//!
//! The cache is the single source of truth for terms that already have
//! translations. On disk it is a JSON array:
//!
//! ```json
//! [
//!   {
//!     "Term": "Bag",
//!     "Translations": [{ "Locale": "frFR", "Text": "Sac" }]
//!   }
//! ]
//! ```
//!
//! In memory, sets are keyed by term so no two entries can share a term and
//! iteration is always in ascending term order.

use std::{
    collections::{BTreeMap, btree_map},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::atomic_write;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Translation {
    #[serde(rename = "Locale")]
    pub locale: String,
    #[serde(rename = "Text")]
    pub text: String,
}

/// One term with its translations, ordered by locale code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationSet {
    #[serde(rename = "Term")]
    pub term: String,
    #[serde(rename = "Translations", default, deserialize_with = "null_as_empty")]
    pub translations: Vec<Translation>,
}

/// Older caches write a term the model returned nothing for as
/// `"Translations": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Translation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Translation>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TranslationSet {
    pub fn new<I, L, T>(term: impl Into<String>, translations: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        let mut set = Self {
            term: term.into(),
            translations: translations
                .into_iter()
                .map(|(locale, text)| Translation {
                    locale: locale.into(),
                    text: text.into(),
                })
                .collect(),
        };
        set.sort_translations();
        set
    }

    pub fn sort_translations(&mut self) {
        self.translations.sort_by(|a, b| a.locale.cmp(&b.locale));
    }

    pub fn text_for(&self, locale: &str) -> Option<&str> {
        self.translations
            .iter()
            .find(|t| t.locale == locale)
            .map(|t| t.text.as_str())
    }
}

/// Whether [`Cache::insert`] added a new term or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added,
    Replaced,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cache {
    sets: BTreeMap<String, TranslationSet>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from `path`, or return an empty cache if the file
    /// does not exist. A file that exists but does not match the expected
    /// shape is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cache file: {}", path.display()))?;
        let sets: Vec<TranslationSet> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cache file: {}", path.display()))?;

        Ok(sets.into_iter().collect())
    }

    /// Serialize the whole cache to `path` with 2-space indentation and a
    /// trailing newline, replacing the previous file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        atomic_write(path, format!("{}\n", content).as_bytes())
            .with_context(|| format!("Failed to save cache file: {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        let sets: Vec<&TranslationSet> = self.sets.values().collect();
        serde_json::to_string_pretty(&sets).context("Failed to serialize translation cache")
    }

    /// Insert a set, replacing any existing set for the same term.
    pub fn insert(&mut self, mut set: TranslationSet) -> InsertOutcome {
        set.sort_translations();
        match self.sets.entry(set.term.clone()) {
            btree_map::Entry::Occupied(mut entry) => {
                entry.insert(set);
                InsertOutcome::Replaced
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(set);
                InsertOutcome::Added
            }
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.sets.contains_key(term)
    }

    pub fn get(&self, term: &str) -> Option<&TranslationSet> {
        self.sets.get(term)
    }

    /// Sets in ascending term order.
    pub fn sets(&self) -> impl Iterator<Item = &TranslationSet> {
        self.sets.values()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<TranslationSet> for Cache {
    fn from_iter<I: IntoIterator<Item = TranslationSet>>(iter: I) -> Self {
        let mut cache = Self::new();
        for set in iter {
            cache.insert(set);
        }
        cache
    }
}
