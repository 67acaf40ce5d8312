use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use polyglot::application::ports::AudioCodec;
use polyglot::application::services::{HealthService, TranslationService};
use polyglot::domain::ModelSource;
use polyglot::infrastructure::audio::SymphoniaAudioCodec;
use polyglot::infrastructure::engine::TranslationEngineFactory;
use polyglot::infrastructure::observability::{TracingConfig, init_tracing};
use polyglot::infrastructure::storage::StagingStoreFactory;
use polyglot::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging))
        .context("failed to initialise tracing")?;

    let model_source = ModelSource::resolve(
        Path::new(&settings.engine.model_dir),
        &settings.engine.hub_model_id,
    );
    tracing::info!(
        source = model_source.describe(),
        model = %model_source,
        provider = ?settings.engine.provider,
        "Loading translation engine"
    );

    let engine = TranslationEngineFactory::create(&settings.engine, &model_source)
        .context("failed to initialise translation engine")?;
    let staging_store = StagingStoreFactory::create(&settings.storage)
        .context("failed to initialise staging store")?;
    let codec: Arc<dyn AudioCodec> = Arc::new(SymphoniaAudioCodec::new());

    let translation_service = Arc::new(TranslationService::new(
        Arc::clone(&codec),
        Arc::clone(&engine),
        Arc::clone(&staging_store),
    ));
    let health_service = Arc::new(HealthService::new(codec, engine, staging_store));

    let state = AppState {
        translation_service,
        health_service,
        max_upload_bytes: settings.server.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(
        address = %addr,
        environment = %environment,
        max_upload_mb = settings.server.max_upload_mb,
        "Polyglot listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
