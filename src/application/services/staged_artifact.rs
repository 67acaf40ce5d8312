use std::sync::Arc;

use crate::application::ports::StagingStore;
use crate::domain::StagedPath;

/// Ownership of one staged file for the duration of a request.
///
/// Call [`StagedArtifact::release`] to delete it at a known point. If the
/// artifact is dropped without being released (early return, panic, or a
/// response body that finished streaming) deletion is scheduled on the
/// current runtime instead.
pub struct StagedArtifact {
    store: Arc<dyn StagingStore>,
    path: StagedPath,
    released: bool,
}

impl StagedArtifact {
    pub fn new(store: Arc<dyn StagingStore>, path: StagedPath) -> Self {
        Self {
            store,
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &StagedPath {
        &self.path
    }

    pub async fn release(mut self) {
        self.released = true;
        remove(self.store.as_ref(), &self.path).await;
    }
}

impl Drop for StagedArtifact {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        let store = Arc::clone(&self.store);
        let path = self.path.clone();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    remove(store.as_ref(), &path).await;
                });
            }
            Err(_) => {
                tracing::warn!(path = %path, "No runtime available, staged artifact left behind");
            }
        }
    }
}

async fn remove(store: &dyn StagingStore, path: &StagedPath) {
    match store.delete(path).await {
        Ok(()) => tracing::debug!(path = %path, "Staged artifact removed"),
        Err(e) => tracing::warn!(path = %path, error = %e, "Failed to remove staged artifact"),
    }
}
