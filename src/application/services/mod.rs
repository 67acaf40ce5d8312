mod health_service;
mod processing_error;
mod staged_artifact;
mod translation_service;

pub use health_service::{HealthReport, HealthService};
pub use processing_error::ProcessingError;
pub use staged_artifact::StagedArtifact;
pub use translation_service::{Delivery, DeliveryStrategy, StagedDownload, TranslationService};
