pub mod audio_decoder;
pub mod audio_encoder;
mod symphonia_codec;

pub use symphonia_codec::SymphoniaAudioCodec;
