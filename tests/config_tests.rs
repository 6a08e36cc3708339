mod common;

use rtc_swarm::config::enums::configuration_error::ConfigurationError;
use rtc_swarm::config::structs::configuration::Configuration;
use rtc_swarm::config::structs::ice_server_config::IceServerConfig;
use tempfile::TempDir;

#[test]
fn test_config_save_and_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    let mut config = common::test_config();
    config.tracker_client.http_headers.insert("Origin".to_string(), "https://example.com".to_string());
    config.rtc.ice_servers.push(IceServerConfig {
        urls: vec!["turn:turn.example.com:3478".to_string()],
        username: "user".to_string(),
        credential: "secret".to_string(),
    });

    Configuration::save_file(path, toml::to_string(&config).unwrap()).unwrap();
    let loaded = Configuration::load_file(path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    let result = Configuration::load_file(path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::IOError(_))));
}

#[test]
fn test_config_load_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "log_level = [not toml").unwrap();
    let result = Configuration::load_file(path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_config_durations() {
    let config = common::test_config();
    assert_eq!(config.handshake_timeout().as_secs(), 5);
    assert_eq!(config.announce_interval().as_secs(), 120);
}
