use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{AudioCodec, StagingStore, StagingStoreError, TranslationEngine};
use crate::domain::{AudioBuffer, AudioFormat, StagedPath, TranslationId};

const PROBE_SAMPLE_RATE: u32 = 16_000;
const PROBE_PAYLOAD: &[u8] = b"polyglot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub engine_loaded: bool,
    pub codec_ready: bool,
    pub storage_writable: bool,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.engine_loaded && self.codec_ready && self.storage_writable
    }
}

pub struct HealthService {
    codec: Arc<dyn AudioCodec>,
    engine: Arc<dyn TranslationEngine>,
    staging_store: Arc<dyn StagingStore>,
}

impl HealthService {
    pub fn new(
        codec: Arc<dyn AudioCodec>,
        engine: Arc<dyn TranslationEngine>,
        staging_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            codec,
            engine,
            staging_store,
        }
    }

    pub async fn check(&self) -> HealthReport {
        let (engine_loaded, codec_ready, storage_writable) = tokio::join!(
            self.engine.is_ready(),
            self.probe_codec(),
            self.probe_storage()
        );

        let report = HealthReport {
            engine_loaded,
            codec_ready,
            storage_writable,
        };
        if !report.is_healthy() {
            tracing::warn!(?report, "Health check degraded");
        }
        report
    }

    /// Encodes a short silent clip and decodes it back.
    async fn probe_codec(&self) -> bool {
        let codec = Arc::clone(&self.codec);
        let result = tokio::task::spawn_blocking(move || {
            let probe = AudioBuffer::mono(vec![0.0; 160], PROBE_SAMPLE_RATE);
            let encoded = codec.encode(&probe, AudioFormat::Wav)?;
            codec.decode(&encoded)
        })
        .await;

        match result {
            Ok(Ok(decoded)) => decoded.sample_rate() == PROBE_SAMPLE_RATE,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Codec probe failed");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Codec probe task failed");
                false
            }
        }
    }

    /// Writes, reads back and deletes a small probe artifact.
    async fn probe_storage(&self) -> bool {
        let path = StagedPath::from_raw(format!(
            "health_{}.probe",
            TranslationId::new().as_uuid().simple()
        ));

        let outcome = async {
            self.staging_store
                .store(&path, Bytes::from_static(PROBE_PAYLOAD))
                .await?;
            let fetched = self.staging_store.fetch(&path).await?;
            self.staging_store.delete(&path).await?;
            Ok::<bool, StagingStoreError>(fetched == PROBE_PAYLOAD)
        }
        .await;

        match outcome {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "Storage probe failed");
                let _ = self.staging_store.delete(&path).await;
                false
            }
        }
    }
}
