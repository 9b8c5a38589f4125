//! Application settings and configuration management

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::gateway::facade::CdnFacade;
use crate::transport::Credential;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    /// Default credential handed to the facade; absent means calls fail
    /// until one is set
    #[serde(default)]
    pub credential: Option<i64>,
    pub rest: RestConfig,
    #[serde(default)]
    pub rpc: Vec<RpcBackendConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

/// REST backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestConfig {
    #[serde(default = "default_rest_name")]
    pub name: String,
    pub url: String,
}

fn default_rest_name() -> String {
    "contentd".to_string()
}

/// One RPC backend target
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcBackendConfig {
    pub family: String,
    pub address: String,
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.format", "plain")?
            .set_default("rest.name", "contentd")?
            .set_default("rest.url", "amc_url")?
            // Load from configuration file
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default"))
                    .required(false),
            )
            // Override with environment variables (prefixed with CALLGATE_)
            .add_source(
                Environment::with_prefix("CALLGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rest.name.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "REST backend name cannot be empty".to_string(),
            )));
        }
        if self.rest.url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "REST backend url cannot be empty".to_string(),
            )));
        }
        for backend in &self.rpc {
            if backend.family.is_empty() {
                return Err(AppError::Config(config::ConfigError::Message(
                    "RPC backend family cannot be empty".to_string(),
                )));
            }
            if backend.address.is_empty() {
                return Err(AppError::Config(config::ConfigError::Message(
                    format!("RPC backend '{}' must have an address", backend.family),
                )));
            }
        }
        Ok(())
    }

    fn rpc_address(&self, family: &str) -> Result<&str> {
        self.rpc
            .iter()
            .find(|b| b.family == family)
            .map(|b| b.address.as_str())
            .ok_or_else(|| {
                AppError::Config(config::ConfigError::Message(format!(
                    "No '{}' backend in configuration",
                    family
                )))
            })
    }

    /// Build the CDN facade from the configured targets
    pub fn facade(&self, catalog: &Catalog) -> Result<CdnFacade> {
        CdnFacade::new(
            catalog,
            &self.rest.name,
            &self.rest.url,
            self.rpc_address("onev")?,
            self.rpc_address("cob")?,
            self.rpc_address("plc")?,
            Credential(self.credential.unwrap_or(0)),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            credential: None,
            rest: RestConfig {
                name: default_rest_name(),
                url: "amc_url".to_string(),
            },
            rpc: vec![],
        }
    }
}
