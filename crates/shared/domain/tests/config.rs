use v2g_domain::config::{AppConfig, LoggingConfig, RuleSet, ServerConfig, SimulationConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8050);
    assert!(server.ssl.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());

    let simulation = SimulationConfig::default();
    assert_eq!(simulation.rules, RuleSet::Observed);
    assert_eq!(simulation.discharge_default, 50);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 9000 },
        "logging": { "level": "debug", "json": true, "directory": "/tmp/v2g-logs" },
        "simulation": { "rules": "table" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/v2g-logs")));
    assert_eq!(cfg.simulation.rules, RuleSet::Table);
    assert_eq!(cfg.simulation.discharge_default, 50);
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg: AppConfig = serde_json::from_value(json!({})).expect("empty config deserialize");
    assert_eq!(cfg.server.port, 8050);
    assert_eq!(cfg.simulation.rules, RuleSet::Observed);
}

#[test]
fn rule_set_parses_case_insensitively() {
    assert_eq!("TABLE".parse::<RuleSet>().ok(), Some(RuleSet::Table));
    assert_eq!(RuleSet::Observed.to_string(), "observed");
    assert!("strict".parse::<RuleSet>().is_err());
}

#[test]
fn cloned_config_is_copy_on_write() {
    let original = AppConfig::default();
    let mut changed = original.clone();
    changed.server.port = 1;
    assert_eq!(original.server.port, 8050);
    assert_eq!(changed.server.port, 1);
}
