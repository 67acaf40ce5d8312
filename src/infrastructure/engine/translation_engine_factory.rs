use std::sync::Arc;

use crate::application::ports::{TranslationEngine, TranslationEngineError};
use crate::domain::ModelSource;
use crate::presentation::config::{EngineProvider, EngineSettings};

use super::echo_translation_engine::EchoTranslationEngine;
use super::remote_translation_engine::RemoteTranslationEngine;

pub struct TranslationEngineFactory;

impl TranslationEngineFactory {
    pub fn create(
        settings: &EngineSettings,
        model_source: &ModelSource,
    ) -> Result<Arc<dyn TranslationEngine>, TranslationEngineError> {
        match settings.provider {
            EngineProvider::Remote => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    TranslationEngineError::ModelLoadFailed(
                        "engine.base_url required for the remote engine".to_string(),
                    )
                })?;
                let engine = RemoteTranslationEngine::new(base_url, model_source.identifier())?;
                Ok(Arc::new(engine))
            }
            EngineProvider::Echo => Ok(Arc::new(EchoTranslationEngine)),
        }
    }
}
