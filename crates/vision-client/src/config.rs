//! Client configuration.

use std::time::Duration;

/// Default confidence floor sent with detection requests.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.45;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`VisionClient`](crate::VisionClient).
///
/// Immutable once the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host the vision service listens on
    pub host: String,
    /// Service port
    pub port: u16,
    /// API key sent with every request; empty means unauthenticated
    pub api_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum confidence for returned predictions, in [0, 1]
    pub min_confidence: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 80,
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl ClientConfig {
    /// Config for a service at `host:port`, defaults for everything else.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("VISION_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("VISION_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(80),
            api_key: std::env::var("VISION_API_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("VISION_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            min_confidence: std::env::var("VISION_MIN_CONFIDENCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_CONFIDENCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 80);
        assert!(config.api_key.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.min_confidence, 0.45);
    }

    #[test]
    fn test_new_keeps_defaults_for_rest() {
        let config = ClientConfig::new("10.0.0.2", 5000);
        assert_eq!(config.host, "10.0.0.2");
        assert_eq!(config.port, 5000);
        assert_eq!(config.min_confidence, DEFAULT_MIN_CONFIDENCE);
    }
}
