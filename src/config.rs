use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::oracle::UnavailablePolicy;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub use_json: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    /// User registry listener
    #[serde(default = "ServiceConfig::users")]
    pub users: ServiceConfig,
    /// Order registry listener
    #[serde(default = "ServiceConfig::orders")]
    pub orders: ServiceConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    fn users() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }

    fn orders() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// User-existence check used by the order registry
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OracleConfig {
    /// Base URL of the user registry, used when the order registry runs alone
    pub user_service_url: String,
    /// Upper bound for a single existence check
    pub timeout_ms: u64,
    /// Retry once on connect errors and timeouts
    pub retry_transient: bool,
    pub on_unavailable: UnavailablePolicy,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            user_service_url: "http://127.0.0.1:8081".to_string(),
            timeout_ms: 2000,
            retry_transient: true,
            on_unavailable: UnavailablePolicy::FailClosed,
        }
    }
}

impl OracleConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Budget for one HTTP attempt, so that a retry still fits in `timeout`.
    pub fn attempt_timeout(&self) -> Duration {
        if self.retry_transient {
            self.timeout() / 2
        } else {
            self.timeout()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_file() -> String {
    "registry.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            use_json: false,
            rotation: default_rotation(),
            users: ServiceConfig::users(),
            orders: ServiceConfig::orders(),
            oracle: OracleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`, falling back to defaults when the file is absent.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        if !Path::new(&config_path).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
