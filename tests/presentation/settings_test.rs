use polyglot::presentation::{EngineProvider, Environment, Settings};

#[test]
fn given_no_overrides_when_loading_settings_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.server.max_upload_mb, 50);
    assert_eq!(settings.engine.provider, EngineProvider::Remote);
    assert_eq!(settings.engine.model_dir, "./model");
    assert_eq!(
        settings.engine.hub_model_id,
        "facebook/seamless-m4t-v2-large"
    );
    assert_eq!(settings.storage.staging_path, "./staging");
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_upload_limit_in_megabytes_when_converting_then_returns_bytes() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.max_upload_bytes(), 50 * 1024 * 1024);
}
