use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::time::Duration;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::ice_server_config::IceServerConfig;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::rtc_config::RtcConfig;
use crate::config::structs::tracker_client_config::TrackerClientConfig;

pub const MAX_CHUNK_SIZE: u32 = 1 << 20;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            peer_id_prefix: String::from("-RS0300-"),
            disable_trackers: false,
            tracker_client: TrackerClientConfig {
                handshake_timeout: 10,
                announce_interval: 120,
                offers_per_announce: 10,
                http_headers: BTreeMap::new(),
                proxy: None,
            },
            rtc: RtcConfig {
                ice_servers: vec![
                    IceServerConfig {
                        urls: vec![String::from("stun:stun.l.google.com:19302")],
                        username: String::new(),
                        credential: String::new(),
                    }
                ],
            },
            peer: PeerConfig {
                chunk_size: 16384,
                observer_capacity: 16,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file("config.toml") {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                return match Configuration::save_file("config.toml", config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut check_map = vec![
            ("log_level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$"),
            ("peer_id_prefix", self.peer_id_prefix.clone(), r"^[\x20-\x7e]{0,20}$"),
        ];
        if let Some(proxy) = &self.tracker_client.proxy {
            check_map.push(("tracker_client.proxy", proxy.clone(), r"^[A-Za-z0-9.\-\[\]:]+:[0-9]{1,5}$"));
        }
        for server in &self.rtc.ice_servers {
            for url in &server.urls {
                check_map.push(("rtc.ice_servers.urls", url.clone(), r"^(stun|stuns|turn|turns):\S+$"));
            }
        }

        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        if self.peer.chunk_size == 0 || self.peer.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigurationError::ValidationError {
                name: String::from("peer.chunk_size"),
                value: self.peer.chunk_size.to_string(),
            });
        }
        if self.peer.observer_capacity == 0 {
            return Err(ConfigurationError::ValidationError {
                name: String::from("peer.observer_capacity"),
                value: String::from("0"),
            });
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let matches = Regex::new(regex)
            .map(|regex_check| regex_check.is_match(value))
            .unwrap_or(false);
        if !matches {
            return Err(ConfigurationError::ValidationError {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.tracker_client.handshake_timeout)
    }

    pub fn announce_interval(&self) -> Duration {
        Duration::from_secs(self.tracker_client.announce_interval)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
