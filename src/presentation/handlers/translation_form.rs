use axum::extract::Multipart;
use bytes::Bytes;

use crate::application::services::ProcessingError;
use crate::domain::TranslationRequest;

pub const FILE_FIELD: &str = "file";
pub const LANGUAGE_FIELD: &str = "language";
pub const SPEAKER_ID_FIELDS: [&str; 2] = ["speakerId", "speaker_id"];

const DEFAULT_FILE_NAME: &str = "audio.wav";

/// Collects the `file`, `language` and `speakerId` form fields.
///
/// Missing fields are left empty here; the translation service decides
/// whether the request is valid.
pub async fn read_translation_form(
    mut multipart: Multipart,
) -> Result<TranslationRequest, ProcessingError> {
    let mut audio_bytes = Bytes::new();
    let mut file_name: Option<String> = None;
    let mut language = String::new();
    let mut speaker_id: Option<u32> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Err(ProcessingError::Validation(format!(
                    "Failed to read multipart: {}",
                    e
                )));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FILE_FIELD => {
                file_name = field.file_name().map(str::to_string);
                audio_bytes = field.bytes().await.map_err(|e| {
                    ProcessingError::Validation(format!("Failed to read file: {}", e))
                })?;
            }
            LANGUAGE_FIELD => {
                language = read_text(field).await?;
            }
            n if SPEAKER_ID_FIELDS.contains(&n) => {
                speaker_id = parse_speaker_id(&read_text(field).await?)?;
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    tracing::debug!(
        bytes = audio_bytes.len(),
        file_name = file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME),
        language = %language,
        "Translation form received"
    );

    Ok(TranslationRequest::new(
        audio_bytes,
        file_name.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        language,
        speaker_id,
    ))
}

pub fn parse_speaker_id(raw: &str) -> Result<Option<u32>, ProcessingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u32>().map(Some).map_err(|_| {
        ProcessingError::Validation(format!(
            "speakerId must be a non-negative integer, got {:?}",
            trimmed
        ))
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ProcessingError> {
    let name = field.name().unwrap_or_default().to_string();
    field
        .text()
        .await
        .map_err(|e| ProcessingError::Validation(format!("Failed to read {}: {}", name, e)))
}
