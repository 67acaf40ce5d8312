use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{AudioCodec, AudioCodecError, StagingStore, TranslationEngine};
use crate::domain::{
    AudioBuffer, AudioFormat, SpeakerId, StagedPath, TargetLanguage, TranslationRequest,
    TranslationResult, download_file_name, sanitize_file_name,
};

use super::processing_error::ProcessingError;
use super::staged_artifact::StagedArtifact;

/// How the translated audio travels back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStrategy {
    /// Upload and output are written to the staging store; the output is
    /// streamed from disk and removed once the response body is dropped.
    StagedFile,
    /// Everything stays in memory.
    StreamedMemory,
}

impl DeliveryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StagedFile => "staged_file",
            Self::StreamedMemory => "streamed_memory",
        }
    }
}

pub enum Delivery {
    StagedFile(StagedDownload),
    StreamedMemory(TranslationResult),
}

/// A staged output file ready to be sent.
///
/// The body stream owns the output artifact, so the file outlives the
/// handler and is removed after the last chunk has been consumed.
pub struct StagedDownload {
    pub file_name: String,
    pub media_type: &'static str,
    pub content_length: u64,
    pub body: BoxStream<'static, Result<Bytes, io::Error>>,
}

pub struct TranslationService {
    codec: Arc<dyn AudioCodec>,
    engine: Arc<dyn TranslationEngine>,
    staging_store: Arc<dyn StagingStore>,
    output_format: AudioFormat,
}

impl TranslationService {
    pub fn new(
        codec: Arc<dyn AudioCodec>,
        engine: Arc<dyn TranslationEngine>,
        staging_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            codec,
            engine,
            staging_store,
            output_format: AudioFormat::Wav,
        }
    }

    /// Runs decode, translate and encode for one request and hands the output
    /// to the chosen delivery strategy.
    ///
    /// Every failure is logged here with its full context; callers only map
    /// the returned error to a response.
    #[tracing::instrument(
        skip(self, request),
        fields(
            translation_id = %request.id.as_uuid(),
            file_name = %request.original_file_name,
            strategy = strategy.as_str(),
        )
    )]
    pub async fn handle(
        &self,
        request: TranslationRequest,
        strategy: DeliveryStrategy,
    ) -> Result<Delivery, ProcessingError> {
        let outcome = match validate(&request) {
            Ok((language, speaker_id)) => {
                let started = Instant::now();
                let outcome = match strategy {
                    DeliveryStrategy::StagedFile => {
                        self.deliver_staged(&request, &language, speaker_id).await
                    }
                    DeliveryStrategy::StreamedMemory => {
                        self.deliver_in_memory(&request, &language, speaker_id)
                            .await
                    }
                };
                if outcome.is_ok() {
                    tracing::info!(
                        language = %language,
                        speaker_id = speaker_id.get(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Translation completed"
                    );
                }
                outcome
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            tracing::error!(kind = e.kind(), error = %e, details = ?e, "Translation request failed");
        }

        outcome
    }

    async fn deliver_staged(
        &self,
        request: &TranslationRequest,
        language: &TargetLanguage,
        speaker_id: SpeakerId,
    ) -> Result<Delivery, ProcessingError> {
        let file_name = sanitize_file_name(&request.original_file_name);

        let input = StagedArtifact::new(
            Arc::clone(&self.staging_store),
            StagedPath::input(&request.id, &file_name),
        );
        let stored = self
            .staging_store
            .store(input.path(), request.audio_bytes.clone())
            .await?;
        tracing::debug!(path = %input.path(), bytes = stored, "Upload staged");

        let input_path = self.staging_store.local_path(input.path())?;
        let decoded = self.decode_file(input_path).await;
        input.release().await;
        let audio = decoded?;

        let translated = self.translate(&audio, language, speaker_id).await?;

        let output = StagedArtifact::new(
            Arc::clone(&self.staging_store),
            StagedPath::output(&request.id, &file_name),
        );
        let output_path = self.staging_store.local_path(output.path())?;
        let content_length = self.encode_file(translated, output_path).await?;
        tracing::debug!(path = %output.path(), bytes = content_length, "Translation staged");

        // The closure owns `output`; dropping the body drops the artifact.
        let stream = self.staging_store.open(output.path()).await?;
        let body = stream
            .inspect(move |chunk| {
                if let Ok(bytes) = chunk {
                    tracing::trace!(path = %output.path(), bytes = bytes.len(), "Sending staged chunk");
                }
            })
            .boxed();

        Ok(Delivery::StagedFile(StagedDownload {
            file_name: download_file_name(&file_name),
            media_type: self.output_format.media_type(),
            content_length,
            body,
        }))
    }

    async fn deliver_in_memory(
        &self,
        request: &TranslationRequest,
        language: &TargetLanguage,
        speaker_id: SpeakerId,
    ) -> Result<Delivery, ProcessingError> {
        let audio = self.decode(request.audio_bytes.clone()).await?;
        let translated = self.translate(&audio, language, speaker_id).await?;
        let encoded = self.encode(translated).await?;

        Ok(Delivery::StreamedMemory(TranslationResult::new(
            encoded,
            self.output_format.media_type(),
        )))
    }

    /// The engine's output is always re-timed to the input's sample rate.
    async fn translate(
        &self,
        audio: &AudioBuffer,
        language: &TargetLanguage,
        speaker_id: SpeakerId,
    ) -> Result<AudioBuffer, ProcessingError> {
        tracing::debug!(
            samples = audio.len(),
            sample_rate = audio.sample_rate(),
            channels = audio.channels(),
            "Invoking translation engine"
        );

        let translated = self
            .engine
            .translate(audio, language, speaker_id)
            .await?;

        let channels = translated.channels();
        Ok(AudioBuffer::new(
            translated.into_samples(),
            audio.sample_rate(),
            channels,
        ))
    }

    async fn decode(&self, data: Bytes) -> Result<AudioBuffer, ProcessingError> {
        let codec = Arc::clone(&self.codec);
        tokio::task::spawn_blocking(move || codec.decode(&data))
            .await
            .map_err(|e| decode_task_failed(&e))?
            .map_err(ProcessingError::Decode)
    }

    async fn decode_file(&self, path: PathBuf) -> Result<AudioBuffer, ProcessingError> {
        let codec = Arc::clone(&self.codec);
        tokio::task::spawn_blocking(move || codec.decode_file(&path))
            .await
            .map_err(|e| decode_task_failed(&e))?
            .map_err(ProcessingError::Decode)
    }

    async fn encode(&self, audio: AudioBuffer) -> Result<Vec<u8>, ProcessingError> {
        let codec = Arc::clone(&self.codec);
        let format = self.output_format;
        tokio::task::spawn_blocking(move || codec.encode(&audio, format))
            .await
            .map_err(|e| encode_task_failed(&e))?
            .map_err(ProcessingError::Encode)
    }

    async fn encode_file(&self, audio: AudioBuffer, path: PathBuf) -> Result<u64, ProcessingError> {
        let codec = Arc::clone(&self.codec);
        let format = self.output_format;
        tokio::task::spawn_blocking(move || codec.encode_to_file(&audio, format, &path))
            .await
            .map_err(|e| encode_task_failed(&e))?
            .map_err(ProcessingError::Encode)
    }
}

fn validate(request: &TranslationRequest) -> Result<(TargetLanguage, SpeakerId), ProcessingError> {
    let language = TargetLanguage::parse(&request.target_language).ok_or_else(|| {
        ProcessingError::Validation("Missing required field: language".to_string())
    })?;

    if request.audio_bytes.is_empty() {
        return Err(ProcessingError::Validation(
            "Missing required field: file (uploaded audio is empty)".to_string(),
        ));
    }

    Ok((language, SpeakerId::resolve(request.speaker_id)))
}

fn decode_task_failed(e: &tokio::task::JoinError) -> ProcessingError {
    ProcessingError::Decode(AudioCodecError::DecodingFailed(format!("decode task: {}", e)))
}

fn encode_task_failed(e: &tokio::task::JoinError) -> ProcessingError {
    ProcessingError::Encode(AudioCodecError::EncodingFailed(format!("encode task: {}", e)))
}
