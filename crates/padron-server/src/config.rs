//! Server configuration
//!
//! Read from the environment (after an optional `.env`):
//! - `PADRON_HOST`: bind address, default `0.0.0.0`
//! - `PADRON_PORT`: bind port, default `9090`
//! - `PADRON_VARIANT`: `basic` or `extended`, default `extended`

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 9090;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PADRON_HOST '{0}'")]
    InvalidHost(String),

    #[error("Invalid PADRON_PORT '{0}'")]
    InvalidPort(String),

    #[error("Unknown PADRON_VARIANT '{0}' (expected 'basic' or 'extended')")]
    UnknownVariant(String),
}

/// Which flavour of the API is served.
///
/// `Basic` routes CRUD only. `Extended` adds the filter endpoints and uses
/// lowercase wording for some responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVariant {
    Basic,
    #[default]
    Extended,
}

impl ApiVariant {
    pub fn has_filters(self) -> bool {
        matches!(self, Self::Extended)
    }

    /// Body for GET by id on a miss
    pub fn get_not_found(self) -> &'static str {
        match self {
            Self::Basic => "Persona no encontrada",
            Self::Extended => "persona no encontrada",
        }
    }

    /// Body for PUT and DELETE on a miss
    pub fn mutation_not_found(self) -> &'static str {
        "Persona no encontrada"
    }

    pub fn created(self) -> &'static str {
        "Persona creada"
    }

    pub fn updated(self) -> &'static str {
        match self {
            Self::Basic => "Persona actualizada",
            Self::Extended => "persona actualizada",
        }
    }
}

impl FromStr for ApiVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "extended" => Ok(Self::Extended),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub variant: ApiVariant,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            variant: ApiVariant::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("PADRON_HOST") {
            config.host = host
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        }
        if let Some(port) = lookup("PADRON_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(variant) = lookup("PADRON_VARIANT") {
            config.variant = variant.parse()?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
