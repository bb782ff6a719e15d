//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Complete configuration for the shipyard service
///
/// Every section has defaults, so an empty YAML mapping (`{}`) is a valid configuration.
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// paging:
///   default_page_size: 3
///   max_page_size: 100
/// logging:
///   filter: shipyard=debug,tower_http=info
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipyardConfig {
    pub server: ServerConfig,
    pub paging: PagingConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Listing page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when a request does not give one
    pub default_page_size: usize,

    /// Upper bound for requested page sizes
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 3,
            max_page_size: 100,
        }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl ShipyardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot reject on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paging = &self.paging;

        if paging.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "paging.max_page_size".to_string(),
                value: paging.max_page_size.to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if paging.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "paging.default_page_size".to_string(),
                value: paging.default_page_size.to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if paging.default_page_size > paging.max_page_size {
            return Err(ConfigError::InvalidValue {
                field: "paging.default_page_size".to_string(),
                value: paging.default_page_size.to_string(),
                message: format!("must not exceed max_page_size ({})", paging.max_page_size),
            });
        }

        Ok(())
    }

    /// Address string for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
