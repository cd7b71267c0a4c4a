use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub registry: RegistryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Flat file holding one flight per line
    pub flights_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    pub max_flights: usize,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 8080)?
            .set_default("storage.flights_path", "flights_db.txt")?
            .set_default("registry.max_flights", 100)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SKYROUTE_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("SKYROUTE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_files() {
        let config = Config::load().expect("defaults should deserialize");
        assert_eq!(config.registry.max_flights, 100);
        assert!(!config.storage.flights_path.is_empty());
    }
}
