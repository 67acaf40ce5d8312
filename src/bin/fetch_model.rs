//! Downloads the translation model from the Hugging Face hub into the local
//! model directory, so the server can start without network access.

use std::path::PathBuf;

use anyhow::Context;
use hf_hub::api::sync::Api;
use tracing_subscriber::EnvFilter;

use polyglot::presentation::{Environment, Settings};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;
    let model_id = settings.engine.hub_model_id;
    let target = PathBuf::from(&settings.engine.model_dir);

    tracing::info!(model = %model_id, target = %target.display(), "Fetching model from hub");

    let api = Api::new().context("failed to create hub client")?;
    let repo = api.model(model_id.clone());
    let info = repo
        .info()
        .with_context(|| format!("failed to list files of {}", model_id))?;

    std::fs::create_dir_all(&target)
        .with_context(|| format!("failed to create {}", target.display()))?;

    for sibling in &info.siblings {
        let cached = repo
            .get(&sibling.rfilename)
            .with_context(|| format!("failed to download {}", sibling.rfilename))?;
        let destination = target.join(&sibling.rfilename);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = std::fs::copy(&cached, &destination)
            .with_context(|| format!("failed to copy {}", sibling.rfilename))?;
        tracing::info!(file = %sibling.rfilename, bytes, "Saved model file");
    }

    tracing::info!(
        files = info.siblings.len(),
        target = %target.display(),
        "Model saved to local path"
    );
    Ok(())
}
