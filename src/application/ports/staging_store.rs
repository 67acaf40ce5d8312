use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StagedPath;

#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    async fn store(&self, path: &StagedPath, data: Bytes) -> Result<u64, StagingStoreError>;

    async fn fetch(&self, path: &StagedPath) -> Result<Vec<u8>, StagingStoreError>;

    /// Streams the artifact; the stream keeps reading after the caller returns.
    async fn open(
        &self,
        path: &StagedPath,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, StagingStoreError>;

    /// Removes the artifact. Deleting a missing artifact succeeds.
    async fn delete(&self, path: &StagedPath) -> Result<(), StagingStoreError>;


    /// Filesystem location backing `path`, for codecs that work on named files.
    fn local_path(&self, path: &StagedPath) -> Result<PathBuf, StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
