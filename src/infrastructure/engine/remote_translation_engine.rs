use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationEngine, TranslationEngineError};
use crate::domain::{AudioBuffer, SpeakerId, TargetLanguage};

/// Calls a model server that hosts the speech-to-speech model.
///
/// `POST {base_url}/translate` takes the decoded samples as JSON and answers
/// with the translated samples; `GET {base_url}/health` reports readiness.
pub struct RemoteTranslationEngine {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl RemoteTranslationEngine {
    pub fn new(base_url: &str, model: String) -> Result<Self, TranslationEngineError> {
        let trimmed = base_url.trim_end_matches('/');
        reqwest::Url::parse(trimmed).map_err(|e| {
            TranslationEngineError::ModelLoadFailed(format!(
                "invalid engine url {}: {}",
                base_url, e
            ))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: trimmed.to_string(),
            model,
        })
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    samples: &'a [f32],
    sample_rate: u32,
    channels: u16,
    target_language: &'a str,
    speaker_id: u32,
    model: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    samples: Vec<f32>,
    #[serde(default = "default_channels")]
    channels: u16,
}

fn default_channels() -> u16 {
    1
}

#[async_trait]
impl TranslationEngine for RemoteTranslationEngine {
    async fn translate(
        &self,
        audio: &AudioBuffer,
        target_language: &TargetLanguage,
        speaker_id: SpeakerId,
    ) -> Result<AudioBuffer, TranslationEngineError> {
        let url = format!("{}/translate", self.base_url);
        let body = TranslateRequest {
            samples: audio.samples(),
            sample_rate: audio.sample_rate(),
            channels: audio.channels(),
            target_language: target_language.as_str(),
            speaker_id: speaker_id.get(),
            model: &self.model,
        };

        tracing::debug!(url = %url, model = %self.model, "Sending audio to translation engine");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationEngineError::Unavailable(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = format!("status {}: {}", status, body);
            return Err(if status.is_client_error() {
                TranslationEngineError::InvalidRequest(message)
            } else {
                TranslationEngineError::InferenceFailed(message)
            });
        }

        let result: TranslateResponse = response.json().await.map_err(|e| {
            TranslationEngineError::InferenceFailed(format!("parse response: {}", e))
        })?;

        tracing::info!(
            samples = result.samples.len(),
            language = %target_language,
            "Remote translation completed"
        );

        Ok(AudioBuffer::new(
            result.samples,
            audio.sample_rate(),
            result.channels,
        ))
    }

    async fn is_ready(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Translation engine health probe failed");
                false
            }
        }
    }
}
