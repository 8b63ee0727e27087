//! Keyless Google Translate provider
//!
//! Talks to the public `translate_a/single` endpoint used by the Google
//! Translate web widgets. No credentials are needed, which makes it the
//! default provider of the command line tool. The endpoint is rate limited
//! by Google; this provider does not retry.

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, validate_locale};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

const WEB_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Maximum characters per request accepted by the web endpoint
const MAX_CHARS: usize = 5_000;

#[derive(Debug, Clone)]
pub struct GoogleWebTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleWebTranslator {
    pub fn new() -> MtResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: WEB_ENDPOINT.to_string(),
        })
    }

    fn request_url(&self, text: &str, source_locale: &str, target_locale: &str) -> MtResult<Url> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", source_locale),
                ("tl", target_locale),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| MtError::ConfigError(format!("Invalid endpoint URL: {}", e)))
    }

    /// The response is a nested array; the first element lists the translated
    /// sentences as `[translated, original, ...]` tuples.
    fn join_sentences(json: &Value) -> MtResult<String> {
        let sentences = json
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                MtError::TranslationError("Unexpected response: missing sentence list".to_string())
            })?;

        let translated: String = sentences
            .iter()
            .filter_map(|sentence| sentence.get(0).and_then(Value::as_str))
            .collect();

        if translated.is_empty() {
            return Err(MtError::TranslationError(
                "Unexpected response: no translated text".to_string(),
            ));
        }
        Ok(translated)
    }
}

#[async_trait]
impl MachineTranslator for GoogleWebTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        if text.chars().count() > MAX_CHARS {
            return Err(MtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                MAX_CHARS
            )));
        }

        let url = self.request_url(text, source_locale, target_locale)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MtError::TranslationError(format!(
                "Service responded with {}",
                status
            )));
        }

        let json: Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse response: {}", e))
        })?;

        Self::join_sentences(&json)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
