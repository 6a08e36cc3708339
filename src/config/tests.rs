#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert_eq!(config.peer.chunk_size, 16384);
        assert_eq!(config.tracker_client.offers_per_announce, 10);
        assert!(!config.disable_trackers);
    }

    #[test]
    fn test_configuration_toml_round_trip() {
        let mut config = Configuration::init();
        config.tracker_client.http_headers.insert("User-Agent".to_string(), "rtc-swarm".to_string());
        config.tracker_client.proxy = Some("127.0.0.1:3128".to_string());
        let serialized = toml::to_string(&config).unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_optional_sections_default() {
        let data = r#"
log_level = "debug"
peer_id_prefix = "-XX0001-"

[tracker_client]
handshake_timeout = 5
announce_interval = 60
offers_per_announce = 2

[peer]
chunk_size = 1024
observer_capacity = 1
"#;
        let config = Configuration::load(data.as_bytes()).unwrap();
        assert!(config.rtc.ice_servers.is_empty());
        assert!(config.tracker_client.http_headers.is_empty());
        assert!(config.tracker_client.proxy.is_none());
        assert!(!config.disable_trackers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = "verbose".to_string();
        match config.validate() {
            Err(ConfigurationError::ValidationError { name, value }) => {
                assert_eq!(name, "log_level");
                assert_eq!(value, "verbose");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_ice_url() {
        let mut config = Configuration::init();
        config.rtc.ice_servers[0].urls = vec!["http://stun.example.com".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let mut config = Configuration::init();
        config.peer.chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_long_prefix() {
        let mut config = Configuration::init();
        config.peer_id_prefix = "-THIS-PREFIX-IS-TOO-LONG-".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_error_display() {
        let error = ConfigurationError::ValidationError {
            name: "peer.chunk_size".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(format!("{}", error), "Invalid value for peer.chunk_size: \"0\"");
    }
}
