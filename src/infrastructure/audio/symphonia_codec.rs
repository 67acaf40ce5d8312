use std::path::Path;

use crate::application::ports::{AudioCodec, AudioCodecError};
use crate::domain::{AudioBuffer, AudioFormat};

use super::audio_decoder::{decode_audio, decode_audio_file};
use super::audio_encoder::{encode_wav, encode_wav_file};

/// Decodes any container symphonia can probe; writes WAV with hound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioCodec;

impl SymphoniaAudioCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AudioCodec for SymphoniaAudioCodec {
    fn decode(&self, data: &[u8]) -> Result<AudioBuffer, AudioCodecError> {
        decode_audio(data)
    }

    fn decode_file(&self, path: &Path) -> Result<AudioBuffer, AudioCodecError> {
        decode_audio_file(path)
    }

    fn encode(&self, audio: &AudioBuffer, format: AudioFormat) -> Result<Vec<u8>, AudioCodecError> {
        match format {
            AudioFormat::Wav => encode_wav(audio),
        }
    }

    fn encode_to_file(
        &self,
        audio: &AudioBuffer,
        format: AudioFormat,
        path: &Path,
    ) -> Result<u64, AudioCodecError> {
        match format {
            AudioFormat::Wav => encode_wav_file(audio, path),
        }
    }
}
