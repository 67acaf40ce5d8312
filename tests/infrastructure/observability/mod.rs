mod tracing_config_test;
