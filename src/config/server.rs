//! HTTP listener settings: bind address, request timeout, CORS origins.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Server configuration (`SCHOOL_BILLING__SERVER__*`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Upper bound for one request, vendor call included.
    pub request_timeout_secs: u64,

    /// Comma-separated dashboard origins. Unset or empty allows any origin.
    pub cors_origins: Option<String>,
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl ServerConfig {
    /// Parsed bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Origins allowed by the CORS layer.
    pub fn cors_origins(&self) -> CorsOrigins {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,school_billing=debug,sqlx=warn,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unset_origins_allow_any() {
        assert_eq!(ServerConfig::default().cors_origins(), CorsOrigins::Any);

        let config = ServerConfig {
            cors_origins: Some(" , ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cors_origins(), CorsOrigins::Any);
    }

    #[test]
    fn wildcard_origin_allows_any() {
        let config = ServerConfig {
            cors_origins: Some("https://painel.escola.app,*".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cors_origins(), CorsOrigins::Any);
    }

    #[test]
    fn listed_origins_are_trimmed() {
        let config = ServerConfig {
            cors_origins: Some("https://painel.escola.app, http://localhost:5173,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.cors_origins(),
            CorsOrigins::List(vec![
                "https://painel.escola.app".to_string(),
                "http://localhost:5173".to_string()
            ])
        );
    }

    #[test]
    fn bad_host_fails_validation() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidHost(_))));
    }

    #[test]
    fn timeout_must_be_within_bounds() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }
}
