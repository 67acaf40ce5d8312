use polyglot::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};
use polyglot::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_uses_default_filter() {
    let config = TracingConfig::default();
    assert_eq!(config.filter, DEFAULT_LOG_FILTER);
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let logging = LoggingSettings {
        level: "warn,polyglot=trace".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.filter, "warn,polyglot=trace");
}

#[test]
fn given_default_filter_when_inspected_then_enables_crate_debug_logs() {
    assert!(DEFAULT_LOG_FILTER.contains("polyglot=debug"));
    assert!(DEFAULT_LOG_FILTER.contains("tower_http=debug"));
}
