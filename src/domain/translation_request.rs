use std::fmt;

use bytes::Bytes;

use super::translation_id::TranslationId;

/// One uploaded clip and the parameters it should be translated with.
///
/// Fields are kept as received; the processor validates them.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub id: TranslationId,
    pub audio_bytes: Bytes,
    pub original_file_name: String,
    pub target_language: String,
    pub speaker_id: Option<u32>,
}

impl TranslationRequest {
    pub fn new(
        audio_bytes: Bytes,
        original_file_name: impl Into<String>,
        target_language: impl Into<String>,
        speaker_id: Option<u32>,
    ) -> Self {
        Self {
            id: TranslationId::new(),
            audio_bytes,
            original_file_name: original_file_name.into(),
            target_language: target_language.into(),
            speaker_id,
        }
    }
}

/// Non-empty language code such as `fra` or `eng`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeakerId(u32);

impl SpeakerId {
    pub const DEFAULT: SpeakerId = SpeakerId(1);

    /// Absent and zero both select the default speaker.
    pub fn resolve(raw: Option<u32>) -> Self {
        match raw {
            None | Some(0) => Self::DEFAULT,
            Some(id) => Self(id),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for SpeakerId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
