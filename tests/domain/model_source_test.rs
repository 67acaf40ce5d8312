use std::path::Path;

use polyglot::domain::ModelSource;

const HUB_ID: &str = "facebook/seamless-m4t-v2-large";

#[test]
fn given_existing_local_directory_when_resolving_then_uses_local_path() {
    let dir = tempfile::TempDir::new().unwrap();

    let source = ModelSource::resolve(dir.path(), HUB_ID);

    assert_eq!(source, ModelSource::LocalDir(dir.path().to_path_buf()));
    assert_eq!(source.describe(), "local path");
    assert_eq!(source.identifier(), dir.path().display().to_string());
}

#[test]
fn given_missing_local_directory_when_resolving_then_falls_back_to_hub() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("model");

    let source = ModelSource::resolve(&missing, HUB_ID);

    assert_eq!(source, ModelSource::Hub(HUB_ID.to_string()));
    assert_eq!(source.describe(), "Hugging Face");
    assert_eq!(source.to_string(), HUB_ID);
}

#[test]
fn given_relative_missing_directory_when_resolving_then_identifier_is_hub_id() {
    let source = ModelSource::resolve(Path::new("./definitely-not-a-model-dir"), HUB_ID);

    assert_eq!(source.identifier(), HUB_ID);
}
