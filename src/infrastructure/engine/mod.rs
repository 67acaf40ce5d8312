mod echo_translation_engine;
mod remote_translation_engine;
mod translation_engine_factory;

pub use echo_translation_engine::EchoTranslationEngine;
pub use remote_translation_engine::RemoteTranslationEngine;
pub use translation_engine_factory::TranslationEngineFactory;
