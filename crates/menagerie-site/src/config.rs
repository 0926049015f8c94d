//! Site configuration
//!
//! Layered configuration loading:
//! 1. Built-in defaults (lowest precedence)
//! 2. `menagerie.toml` in the working directory
//! 3. Environment variables (MENAGERIE_* prefix, highest precedence)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid bind address {addr}: {source}")]
    BindAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Main site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind: String,

    /// Directory served under `/public`.
    pub assets: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            assets: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the working directory and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_dir(".")
    }

    /// Load configuration with `menagerie.toml` resolved against `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            .add_source(
                config::File::from(dir.as_ref().join("menagerie.toml"))
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::Environment::with_prefix("MENAGERIE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Parse the configured bind string into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|source| ConfigError::BindAddress {
                addr: self.server.bind.clone(),
                source,
            })
    }
}
