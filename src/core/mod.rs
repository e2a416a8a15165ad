//! Core translation pipeline.
//!
//! Data flows leaf-first through these modules:
//!
//! 1. `extract`: walk the source tree and collect raw terms
//! 2. `reconcile`: drop duplicates and already cached terms
//! 3. `batch`: spread pending terms over a fixed number of requests
//! 4. `merge`: fold service responses into the cache
//! 5. `cache` / `render`: persist the cache and regenerate the artifact

pub mod batch;
pub mod cache;
pub mod extract;
pub mod merge;
pub mod reconcile;
pub mod render;

pub use batch::{Batch, partition};
pub use cache::{Cache, InsertOutcome, Translation, TranslationSet};
pub use extract::{Extraction, TermPattern, extract_terms};
pub use merge::{MergeStats, TranslationResponse, merge_response};
pub use reconcile::reconcile;
pub use render::{RenderOptions, render_artifact, write_artifact};
