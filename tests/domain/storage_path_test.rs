use polyglot::domain::{StagedPath, TranslationId, download_file_name, sanitize_file_name};

#[test]
fn given_translation_id_and_filename_when_creating_input_path_then_format_is_temp_id_name() {
    let id = TranslationId::new();
    let path = StagedPath::input(&id, "lecture.wav");

    let expected = format!("temp_{}_lecture.wav", id.as_uuid().simple());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_translation_id_and_filename_when_creating_output_path_then_format_is_processed_id_name() {
    let id = TranslationId::new();
    let path = StagedPath::output(&id, "lecture.wav");

    let expected = format!("processed_{}_lecture.wav", id.as_uuid().simple());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_two_requests_with_same_filename_when_creating_paths_then_paths_differ() {
    let id_a = TranslationId::new();
    let id_b = TranslationId::new();

    assert_ne!(
        StagedPath::input(&id_a, "clip.wav"),
        StagedPath::input(&id_b, "clip.wav")
    );
    assert_ne!(
        StagedPath::output(&id_a, "clip.wav"),
        StagedPath::output(&id_b, "clip.wav")
    );
}

#[test]
fn given_same_request_when_creating_input_and_output_then_paths_differ() {
    let id = TranslationId::new();

    assert_ne!(
        StagedPath::input(&id, "clip.wav"),
        StagedPath::output(&id, "clip.wav")
    );
}

#[test]
fn given_staged_path_when_displayed_then_matches_as_str() {
    let id = TranslationId::new();
    let path = StagedPath::input(&id, "test.wav");

    assert_eq!(format!("{}", path), path.as_str());
}

#[test]
fn given_filename_when_building_download_name_then_prefixes_processed() {
    assert_eq!(download_file_name("speech.mp3"), "processed_speech.mp3");
}

#[test]
fn given_nested_path_when_sanitizing_then_keeps_only_base_name() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name("C:\\Users\\me\\clip.wav"), "clip.wav");
}

#[test]
fn given_unsafe_characters_when_sanitizing_then_replaces_with_underscore() {
    assert_eq!(sanitize_file_name("my clip (1).wav"), "my_clip__1_.wav");
    assert_eq!(sanitize_file_name("grüße.wav"), "gr__e.wav");
}

#[test]
fn given_hidden_or_empty_name_when_sanitizing_then_never_returns_dot_prefixed_name() {
    assert_eq!(sanitize_file_name(".hidden.wav"), "hidden.wav");
    assert_eq!(sanitize_file_name(".."), "audio.wav");
    assert_eq!(sanitize_file_name(""), "audio.wav");
    assert_eq!(sanitize_file_name("dir/"), "audio.wav");
}

#[test]
fn given_overlong_name_when_sanitizing_then_caps_length_and_keeps_extension() {
    let raw = format!("{}.wav", "a".repeat(226));

    let sanitized = sanitize_file_name(&raw);

    assert_eq!(sanitized.len(), 120);
    assert!(sanitized.ends_with("a.wav"));
}

#[test]
fn given_overlong_name_without_extension_when_sanitizing_then_caps_length() {
    let sanitized = sanitize_file_name(&"b".repeat(300));

    assert_eq!(sanitized, "b".repeat(120));
}

#[test]
fn given_overlong_name_when_building_staged_path_then_stays_within_name_limit() {
    let raw = format!("{}.wav", "a".repeat(226));

    let path = StagedPath::output(&TranslationId::new(), &raw);

    assert!(path.as_str().len() <= 255);
}
