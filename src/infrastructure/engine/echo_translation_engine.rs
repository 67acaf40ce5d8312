use async_trait::async_trait;

use crate::application::ports::{TranslationEngine, TranslationEngineError};
use crate::domain::{AudioBuffer, SpeakerId, TargetLanguage};

/// Returns the input unchanged. Lets the service run without a model server.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoTranslationEngine;

#[async_trait]
impl TranslationEngine for EchoTranslationEngine {
    async fn translate(
        &self,
        audio: &AudioBuffer,
        target_language: &TargetLanguage,
        speaker_id: SpeakerId,
    ) -> Result<AudioBuffer, TranslationEngineError> {
        tracing::debug!(
            language = %target_language,
            speaker_id = speaker_id.get(),
            "Echo engine returning input audio"
        );
        Ok(audio.clone())
    }

    async fn is_ready(&self) -> bool {
        true
    }
}
