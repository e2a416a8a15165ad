//! Translation service boundary.
//!
//! ## Module Structure
//!
//! - `openai`: blocking client for OpenAI-compatible chat completion endpoints
//! - `prompt`: the fixed system instruction sent with every batch

mod openai;
mod prompt;

use thiserror::Error;

use crate::core::{Batch, TranslationResponse};

pub use openai::{OpenAiTranslator, TranslatorSettings, parse_translation_content};
pub use prompt::system_prompt;

/// Environment variable holding the translation service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("missing API key: set OPENAI_API_KEY or pass --api-key")]
    MissingApiKey,

    #[error("translation service rejected the API key ({status})")]
    Unauthorized { status: u16 },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to translation service failed")]
    Http(#[source] reqwest::Error),

    #[error("translation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("translation service returned no content for batch {batch}")]
    EmptyResponse { batch: usize },

    #[error("malformed translation response for batch {batch}")]
    MalformedResponse {
        batch: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can translate one batch of terms.
///
/// Calls are made one at a time, in batch order.
pub trait Translator {
    /// Check credentials before the first batch is sent.
    fn preflight(&self) -> Result<(), TranslateError> {
        Ok(())
    }

    fn translate(&self, batch: &Batch) -> Result<TranslationResponse, TranslateError>;
}
