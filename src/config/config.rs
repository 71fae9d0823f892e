use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// Default location of the optional YAML configuration file.
pub const CONFIG_PATH: &str = "./config.yaml";

/// Prefix for environment variable overrides, e.g. `HEALTH_SERVER_PORT=9100`.
pub const ENV_PREFIX: &str = "HEALTH_SERVER_";

/// Main server config. Every field has a compiled-in default, so the server
/// starts on `0.0.0.0:9004` when no file or environment override exists.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9004,
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// The `host:port` pair handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Layers the compiled defaults, the YAML file at `path` (if present) and
/// `HEALTH_SERVER_*` environment variables, in increasing priority.
pub fn config_figment(path: &str) -> Figment {
    Figment::from(Serialized::defaults(ServerConfig::default()))
        .merge(Yaml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load config from "config.yaml" in the current directory plus the environment.
pub fn load_config() -> Result<ServerConfig, figment::Error> {
    config_figment(CONFIG_PATH).extract()
}
