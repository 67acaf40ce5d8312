use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub audio_bytes: Bytes,
    pub media_type: &'static str,
}

impl TranslationResult {
    pub fn new(audio_bytes: impl Into<Bytes>, media_type: &'static str) -> Self {
        Self {
            audio_bytes: audio_bytes.into(),
            media_type,
        }
    }
}
