use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;

use polyglot::application::ports::{AudioCodec, StagingStore, StagingStoreError};
use polyglot::application::services::HealthService;
use polyglot::domain::StagedPath;
use polyglot::infrastructure::audio::SymphoniaAudioCodec;
use polyglot::infrastructure::engine::EchoTranslationEngine;
use polyglot::infrastructure::storage::LocalStagingStore;

use crate::helpers::staged_files;

struct ReadOnlyStore;

#[async_trait::async_trait]
impl StagingStore for ReadOnlyStore {
    async fn store(&self, _path: &StagedPath, _data: Bytes) -> Result<u64, StagingStoreError> {
        Err(StagingStoreError::UploadFailed("read-only".to_string()))
    }

    async fn fetch(&self, path: &StagedPath) -> Result<Vec<u8>, StagingStoreError> {
        Err(StagingStoreError::NotFound(path.to_string()))
    }

    async fn open(
        &self,
        path: &StagedPath,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, StagingStoreError> {
        Err(StagingStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, _path: &StagedPath) -> Result<(), StagingStoreError> {
        Ok(())
    }

    fn local_path(&self, path: &StagedPath) -> Result<PathBuf, StagingStoreError> {
        Err(StagingStoreError::NotFound(path.to_string()))
    }
}

fn codec() -> Arc<dyn AudioCodec> {
    Arc::new(SymphoniaAudioCodec::new())
}

#[tokio::test]
async fn given_working_components_when_checking_then_report_is_healthy() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalStagingStore::new(dir.path().to_path_buf()).unwrap());
    let service = HealthService::new(codec(), Arc::new(EchoTranslationEngine), store);

    let report = service.check().await;

    assert!(report.engine_loaded);
    assert!(report.codec_ready);
    assert!(report.storage_writable);
    assert!(report.is_healthy());
    assert!(staged_files(dir.path()).is_empty());
}

#[tokio::test]
async fn given_unwritable_store_when_checking_then_storage_check_fails() {
    let service = HealthService::new(
        codec(),
        Arc::new(EchoTranslationEngine),
        Arc::new(ReadOnlyStore),
    );

    let report = service.check().await;

    assert!(report.engine_loaded);
    assert!(report.codec_ready);
    assert!(!report.storage_writable);
    assert!(!report.is_healthy());
}
