use std::sync::Arc;

use crate::application::services::{HealthService, TranslationService};

#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<TranslationService>,
    pub health_service: Arc<HealthService>,
    pub max_upload_bytes: usize,
}
