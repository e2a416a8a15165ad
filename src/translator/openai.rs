use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{TranslateError, Translator};
use crate::core::{Batch, TranslationResponse};

/// Request parameters that stay fixed for a whole run.
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    pub api_base_url: String,
    pub model: String,
    pub seed: i64,
    pub system_prompt: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    seed: i64,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible `chat/completions` endpoint.
pub struct OpenAiTranslator {
    client: Client,
    api_key: String,
    settings: TranslatorSettings,
}

impl OpenAiTranslator {
    /// Create a translator. A missing or blank key is rejected here, before
    /// any request is made.
    pub fn new(api_key: Option<&str>, settings: TranslatorSettings) -> Result<Self, TranslateError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(TranslateError::MissingApiKey)?
            .to_string();

        // Completions for large batches can take minutes; only the transport bounds them.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(TranslateError::Client)?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.api_base_url.trim_end_matches('/'), path)
    }
}

impl Translator for OpenAiTranslator {
    fn preflight(&self) -> Result<(), TranslateError> {
        let response = self
            .client
            .get(self.endpoint("models"))
            .bearer_auth(&self.api_key)
            .send()
            .map_err(TranslateError::Http)?;
        check_status(response)?;
        debug!("translation service accepted credentials");
        Ok(())
    }

    fn translate(&self, batch: &Batch) -> Result<TranslationResponse, TranslateError> {
        let block = batch.block();
        let request = ChatRequest {
            model: &self.settings.model,
            seed: self.settings.seed,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.settings.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &block,
                },
            ],
        };

        info!(batch = batch.index, terms = batch.len(), "sending batch");
        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(TranslateError::Http)?;
        let body: ChatResponse = check_status(response)?
            .json()
            .map_err(TranslateError::Http)?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(TranslateError::EmptyResponse { batch: batch.index })?;

        parse_translation_content(batch.index, &content)
    }
}

fn check_status(response: Response) -> Result<Response, TranslateError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TranslateError::Unauthorized {
            status: status.as_u16(),
        });
    }
    let body = response.text().unwrap_or_default();
    Err(TranslateError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Parse the message content of a completion as `term → locale → text`.
///
/// Anything else, including non-string translation values, is rejected.
pub fn parse_translation_content(
    batch: usize,
    content: &str,
) -> Result<TranslationResponse, TranslateError> {
    serde_json::from_str(content)
        .map_err(|source| TranslateError::MalformedResponse { batch, source })
}
