use v2g_domain::config::LoggingConfig;
use v2g_logger::Logger;

#[test]
fn console_only_config_writes_no_files() {
    let logger = Logger::builder("integration-console-only")
        .with_config(&LoggingConfig::default())
        .expect("default config is valid")
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output(), "console-only logger should not create a file guard");
}
