use async_trait::async_trait;

use crate::domain::{AudioBuffer, SpeakerId, TargetLanguage};

/// Speech-to-speech translation model, loaded once and shared by all requests.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        audio: &AudioBuffer,
        target_language: &TargetLanguage,
        speaker_id: SpeakerId,
    ) -> Result<AudioBuffer, TranslationEngineError>;

    async fn is_ready(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationEngineError {
    #[error("invalid translation request: {0}")]
    InvalidRequest(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("engine unavailable: {0}")]
    Unavailable(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
}
