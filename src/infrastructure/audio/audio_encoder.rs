use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::AudioCodecError;
use crate::domain::AudioBuffer;

const BITS_PER_SAMPLE: u16 = 16;
const I16_SCALE: f32 = 32_768.0;

pub fn encode_wav(audio: &AudioBuffer) -> Result<Vec<u8>, AudioCodecError> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav(audio, &mut cursor)?;
    Ok(cursor.into_inner())
}

pub fn encode_wav_file(audio: &AudioBuffer, path: &Path) -> Result<u64, AudioCodecError> {
    let file = File::create(path)?;
    write_wav(audio, BufWriter::new(file))?;
    Ok(std::fs::metadata(path)?.len())
}

/// Writes 16-bit PCM; samples outside `[-1.0, 1.0]` are clipped.
fn write_wav<W: Write + Seek>(audio: &AudioBuffer, sink: W) -> Result<(), AudioCodecError> {
    if audio.is_empty() {
        return Err(AudioCodecError::EncodingFailed(
            "audio buffer is empty".to_string(),
        ));
    }
    if audio.sample_rate() == 0 {
        return Err(AudioCodecError::EncodingFailed(
            "sample rate must be positive".to_string(),
        ));
    }
    if audio.len() % audio.channels() as usize != 0 {
        return Err(AudioCodecError::EncodingFailed(format!(
            "{} samples do not fill {} channels",
            audio.len(),
            audio.channels()
        )));
    }

    let spec = WavSpec {
        channels: audio.channels(),
        sample_rate: audio.sample_rate(),
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::new(sink, spec)
        .map_err(|e| AudioCodecError::EncodingFailed(format!("header: {}", e)))?;

    for &sample in audio.samples() {
        let scaled = (sample * I16_SCALE)
            .round()
            .clamp(i16::MIN as f32, i16::MAX as f32) as i16;
        writer
            .write_sample(scaled)
            .map_err(|e| AudioCodecError::EncodingFailed(format!("sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| AudioCodecError::EncodingFailed(format!("finalize: {}", e)))
}
