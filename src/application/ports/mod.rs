mod audio_codec;
mod staging_store;
mod translation_engine;

pub use audio_codec::{AudioCodec, AudioCodecError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use translation_engine::{TranslationEngine, TranslationEngineError};
