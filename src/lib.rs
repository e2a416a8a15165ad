//! Glossa - source string extraction and machine translation
//!
//! Glossa scans a source tree for translation calls such as `L:G("Bag")`,
//! sends the terms that are not yet in the translation cache to a language
//! model in a fixed number of batches, and regenerates a source file that
//! maps every term to its translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, reconciliation, batching, merging, and rendering
//! - `pipeline`: Orchestration of one translation run
//! - `translator`: Translation service client
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod translator;
pub mod utils;
