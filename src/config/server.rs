//! HTTP listener configuration

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the model API listens.
///
/// Every field has a default, so a partial `EXPERT_AHP__SERVER__*` set loads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allowed origins; blank or unset allows any origin
    pub cors_origins: Option<String>,
}

/// Deployment environment; production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Cross-origin policy derived from `cors_origins`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    AnyOrigin,
    Origins(Vec<String>),
}

impl ServerConfig {
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

    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .iter()
            .flat_map(|list| list.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
        if origins.is_empty() {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::Origins(origins)
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
            log_level: "info,expert_ahp=debug,tower_http=debug".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_serve_any_origin_with_crate_logging() {
        let config = ServerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.cors_policy(), CorsPolicy::AnyOrigin);
        assert!(config.log_level.contains("expert_ahp=debug"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: ServerConfig =
            serde_json::from_value(json!({ "port": 9000, "environment": "production" })).unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.is_production());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result = serde_json::from_value::<ServerConfig>(json!({ "environment": "staging" }));
        assert!(result.is_err());
    }

    #[test]
    fn blank_origin_list_means_any_origin() {
        let config = ServerConfig {
            cors_origins: Some(" , ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cors_policy(), CorsPolicy::AnyOrigin);
    }

    #[test]
    fn origin_list_is_trimmed() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, https://ahp.example.org,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.cors_policy(),
            CorsPolicy::Origins(vec![
                "http://localhost:5173".to_string(),
                "https://ahp.example.org".to_string(),
            ])
        );
    }

    #[test]
    fn validation_rejects_bad_listener_settings() {
        let cases = [
            ServerConfig { port: 0, ..Default::default() },
            ServerConfig { request_timeout_secs: 0, ..Default::default() },
            ServerConfig {
                request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS + 1,
                ..Default::default()
            },
            ServerConfig { host: "not a host".to_string(), ..Default::default() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }
}
