use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glossarc.json";

/// Header written at the top of every generated artifact.
pub const DEFAULT_PREAMBLE: &str = r#"local addonName = ... ---@type string

---@class BetterBags: AceAddon
local addon = LibStub('AceAddon-3.0'):GetAddon(addonName)

---@class Localization: AceModule
local L = addon:GetModule('Localization')

--[[
	THIS FILE IS AUTOGENERATED. DO NOT EDIT THIS FILE DIRECTLY.
	IF YOU NEED TO MODIFY A TRANSLATION, PLEASE EDIT overrides.lua!
]]--

"#;

/// A target locale: the code used as a key in responses and output,
/// and the language name shown to the model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Locale {
    pub code: String,
    pub name: String,
}

impl Locale {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    #[serde(default = "default_call_marker")]
    pub call_marker: String,
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_table_name")]
    pub table_name: String,
    #[serde(default = "default_preamble")]
    pub preamble: String,
    #[serde(default = "default_batch_count")]
    pub batch_count: usize,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_seed")]
    pub seed: i64,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["lua".to_string()]
}

fn default_ignore_dirs() -> Vec<String> {
    [".git", "libs", "tools"].map(String::from).to_vec()
}

fn default_call_marker() -> String {
    "L:G".to_string()
}

fn default_cache_path() -> String {
    "cache/translations.json".to_string()
}

fn default_output_path() -> String {
    "core/translations.lua".to_string()
}

fn default_table_name() -> String {
    "L.data".to_string()
}

fn default_preamble() -> String {
    DEFAULT_PREAMBLE.to_string()
}

fn default_batch_count() -> usize {
    30
}

fn default_domain() -> String {
    "World of Warcraft".to_string()
}

fn default_locales() -> Vec<Locale> {
    vec![
        Locale::new("koKR", "Korean"),
        Locale::new("frFR", "French"),
        Locale::new("deDE", "German"),
        Locale::new("zhCN", "Chinese (Simplified)"),
        Locale::new("esES", "Spanish (Spain)"),
        Locale::new("zhTW", "Chinese (Traditional)"),
        Locale::new("esMX", "Spanish (Mexico)"),
        Locale::new("ruRU", "Russian"),
        Locale::new("ptBR", "Portuguese (Brazil)"),
        Locale::new("itIT", "Italian"),
    ]
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_seed() -> i64 {
    8472
}

fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            call_marker: default_call_marker(),
            cache_path: default_cache_path(),
            output_path: default_output_path(),
            table_name: default_table_name(),
            preamble: default_preamble(),
            batch_count: default_batch_count(),
            domain: default_domain(),
            locales: default_locales(),
            model: default_model(),
            seed: default_seed(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.batch_count == 0 {
            bail!("'batchCount' must be at least 1");
        }
        if self.call_marker.trim().is_empty() {
            bail!("'callMarker' must not be empty");
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if locale.code.trim().is_empty() {
                bail!("Locale code in 'locales' must not be empty");
            }
            if !seen.insert(locale.code.as_str()) {
                bail!("Duplicate locale code in 'locales': \"{}\"", locale.code);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// Resolve a possibly relative config path against `base_dir`.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
