use crate::application::ports::{AudioCodecError, StagingStoreError, TranslationEngineError};

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("{0}")]
    Validation(String),
    #[error("decode: {0}")]
    Decode(AudioCodecError),
    #[error("translation: {0}")]
    Engine(#[from] TranslationEngineError),
    #[error("encode: {0}")]
    Encode(AudioCodecError),
    #[error("storage: {0}")]
    Storage(#[from] StagingStoreError),
}

impl ProcessingError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Decode(_) => "decode",
            Self::Engine(_) => "engine",
            Self::Encode(_) => "encode",
            Self::Storage(_) => "storage",
        }
    }
}
