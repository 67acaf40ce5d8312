mod audio_buffer;
mod audio_format;
mod model_source;
mod staged_path;
mod translation_id;
mod translation_request;
mod translation_result;

pub use audio_buffer::AudioBuffer;
pub use audio_format::AudioFormat;
pub use model_source::ModelSource;
pub use staged_path::{StagedPath, download_file_name, sanitize_file_name};
pub use translation_id::TranslationId;
pub use translation_request::{SpeakerId, TargetLanguage, TranslationRequest};
pub use translation_result::TranslationResult;
