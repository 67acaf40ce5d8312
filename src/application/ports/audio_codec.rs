use std::io;
use std::path::Path;

use crate::domain::{AudioBuffer, AudioFormat};

/// Reads and writes audio containers.
///
/// Implementations are CPU bound and synchronous; async callers run them on
/// the blocking pool.
pub trait AudioCodec: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, AudioCodecError>;

    fn decode_file(&self, path: &Path) -> Result<AudioBuffer, AudioCodecError>;

    fn encode(&self, audio: &AudioBuffer, format: AudioFormat) -> Result<Vec<u8>, AudioCodecError>;

    /// Writes the encoded audio to `path` and returns the number of bytes written.
    fn encode_to_file(
        &self,
        audio: &AudioBuffer,
        format: AudioFormat,
        path: &Path,
    ) -> Result<u64, AudioCodecError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioCodecError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
