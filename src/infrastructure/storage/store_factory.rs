use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::presentation::config::StorageSettings;

use super::local_store::LocalStagingStore;

pub struct StagingStoreFactory;

impl StagingStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn StagingStore>, StagingStoreError> {
        let path = PathBuf::from(&settings.staging_path);
        let store = LocalStagingStore::new(path)?;
        tracing::info!(path = %settings.staging_path, "Staging store ready");
        Ok(Arc::new(store))
    }
}
