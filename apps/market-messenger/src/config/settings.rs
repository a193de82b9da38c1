//! Client Configuration Settings
//!
//! Configuration types for the bot client, loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

/// Default server endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://localhost:8000";

/// User id sent on calls that do not act as a particular bot.
pub const DEFAULT_BOT_USER_ID: &str = "fakeid";

const DEFAULT_CA_PATH: &str = "grpc-server.crt";
const DEFAULT_TLS_DOMAIN: &str = "localhost";
const DEFAULT_MARKET_EVENTS_CAPACITY: usize = 100;

/// TLS settings for the server connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsSettings {
    /// PEM file holding the certificate the server presents.
    pub ca_cert_path: PathBuf,
    /// Name to verify the server certificate against.
    pub domain_name: String,
}

impl Default for TlsSettings {
    fn default() -> Self {
        Self {
            ca_cert_path: PathBuf::from(DEFAULT_CA_PATH),
            domain_name: DEFAULT_TLS_DOMAIN.to_string(),
        }
    }
}

/// Connection settings for the Dalal Street server.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Server endpoint (e.g., `https://localhost:8000`).
    pub endpoint: String,

    /// TLS settings; `None` connects in plaintext.
    pub tls: Option<TlsSettings>,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Timeout for unary requests. Streams are not bounded.
    pub request_timeout: Duration,

    /// TCP keepalive interval.
    pub tcp_keepalive: Duration,

    /// HTTP/2 keepalive interval.
    pub http2_keepalive_interval: Duration,

    /// Keepalive timeout.
    pub keepalive_timeout: Duration,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tls: Some(TlsSettings::default()),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            tcp_keepalive: Duration::from_secs(60),
            http2_keepalive_interval: Duration::from_secs(75),
            keepalive_timeout: Duration::from_secs(20),
        }
    }
}

impl ServerSettings {
    /// Create plaintext settings for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            tls: None,
            ..Default::default()
        }
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the unary request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Enable TLS.
    #[must_use]
    pub fn with_tls(mut self, tls: TlsSettings) -> Self {
        self.tls = Some(tls);
        self
    }
}

/// Bot identity settings.
#[derive(Clone)]
pub struct BotSettings {
    /// Shared secret granting bot API access.
    pub secret: String,
    /// Bot user to log in as.
    pub bot_user_id: Option<String>,
    /// User id sent on calls that do not act as a particular bot.
    pub default_bot_user_id: String,
}

impl std::fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotSettings")
            .field("secret", &"[REDACTED]")
            .field("bot_user_id", &self.bot_user_id)
            .field("default_bot_user_id", &self.default_bot_user_id)
            .finish()
    }
}

/// Complete client configuration.
#[derive(Debug, Clone)]
pub struct MessengerConfig {
    /// Server connection settings.
    pub server: ServerSettings,
    /// Bot identity.
    pub bot: BotSettings,
    /// Number of market events kept in memory.
    pub market_events_capacity: usize,
}

impl MessengerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("DALAL_BOT_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("DALAL_BOT_SECRET".to_string()))?;
        if secret.is_empty() {
            return Err(ConfigError::EmptyValue("DALAL_BOT_SECRET".to_string()));
        }

        let bot_user_id = lookup("DALAL_BOT_USER_ID").filter(|v| !v.is_empty());
        let default_bot_user_id = lookup("DALAL_DEFAULT_BOT_USER_ID")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BOT_USER_ID.to_string());

        let defaults = ServerSettings::default();
        let endpoint = lookup("DALAL_SERVER_ENDPOINT").unwrap_or(defaults.endpoint);

        // An explicitly empty CA path turns TLS off.
        let tls = match lookup("DALAL_TLS_CA_PATH") {
            Some(path) if path.is_empty() => None,
            path => Some(TlsSettings {
                ca_cert_path: path.map_or_else(|| PathBuf::from(DEFAULT_CA_PATH), PathBuf::from),
                domain_name: lookup("DALAL_TLS_DOMAIN")
                    .unwrap_or_else(|| DEFAULT_TLS_DOMAIN.to_string()),
            }),
        };

        let server = ServerSettings {
            endpoint,
            tls,
            connect_timeout: parse_duration_secs(
                &lookup,
                "DALAL_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout,
            )?,
            request_timeout: parse_duration_secs(
                &lookup,
                "DALAL_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout,
            )?,
            ..defaults
        };

        let market_events_capacity = parse_var(
            &lookup,
            "DALAL_MARKET_EVENTS_CAPACITY",
            DEFAULT_MARKET_EVENTS_CAPACITY,
        )?;

        Ok(Self {
            server,
            bot: BotSettings {
                secret,
                bot_user_id,
                default_bot_user_id,
            },
            market_events_capacity,
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable could not be parsed.
    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

fn parse_duration_secs<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    parse_var(lookup, key, default.as_secs()).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_with_only_secret() {
        let config = MessengerConfig::from_lookup(lookup_from(&[("DALAL_BOT_SECRET", "hellobots")]))
            .unwrap();

        assert_eq!(config.server.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.server.tls, Some(TlsSettings::default()));
        assert_eq!(config.bot.default_bot_user_id, DEFAULT_BOT_USER_ID);
        assert_eq!(config.bot.bot_user_id, None);
        assert_eq!(config.market_events_capacity, DEFAULT_MARKET_EVENTS_CAPACITY);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = MessengerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "DALAL_BOT_SECRET"));
    }

    #[test]
    fn empty_secret_is_an_error() {
        let err =
            MessengerConfig::from_lookup(lookup_from(&[("DALAL_BOT_SECRET", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyValue(_)));
    }

    #[test]
    fn empty_ca_path_disables_tls() {
        let config = MessengerConfig::from_lookup(lookup_from(&[
            ("DALAL_BOT_SECRET", "s"),
            ("DALAL_TLS_CA_PATH", ""),
            ("DALAL_SERVER_ENDPOINT", "http://127.0.0.1:8000"),
        ]))
        .unwrap();

        assert!(config.server.tls.is_none());
        assert_eq!(config.server.endpoint, "http://127.0.0.1:8000");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = MessengerConfig::from_lookup(lookup_from(&[
            ("DALAL_BOT_SECRET", "s"),
            ("DALAL_BOT_USER_ID", "2127"),
            ("DALAL_TLS_CA_PATH", "/etc/dalal/server.crt"),
            ("DALAL_TLS_DOMAIN", "dalal.local"),
            ("DALAL_CONNECT_TIMEOUT_SECS", "3"),
            ("DALAL_MARKET_EVENTS_CAPACITY", "5"),
        ]))
        .unwrap();

        let tls = config.server.tls.unwrap();
        assert_eq!(tls.ca_cert_path, PathBuf::from("/etc/dalal/server.crt"));
        assert_eq!(tls.domain_name, "dalal.local");
        assert_eq!(config.server.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.bot.bot_user_id.as_deref(), Some("2127"));
        assert_eq!(config.market_events_capacity, 5);
    }

    #[test]
    fn malformed_number_is_an_error() {
        let err = MessengerConfig::from_lookup(lookup_from(&[
            ("DALAL_BOT_SECRET", "s"),
            ("DALAL_REQUEST_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();

        assert!(
            matches!(err, ConfigError::InvalidValue { key, value } if key == "DALAL_REQUEST_TIMEOUT_SECS" && value == "soon")
        );
    }

    #[test]
    fn debug_redacts_secret() {
        let config = MessengerConfig::from_lookup(lookup_from(&[("DALAL_BOT_SECRET", "hellobots")]))
            .unwrap();
        assert!(!format!("{config:?}").contains("hellobots"));
    }

    #[test]
    fn server_settings_builder() {
        let settings = ServerSettings::new("http://dalal:8000")
            .with_tls(TlsSettings::default())
            .with_connect_timeout(Duration::from_secs(5));

        assert_eq!(settings.endpoint, "http://dalal:8000");
        assert!(settings.tls.is_some());
        assert_eq!(settings.connect_timeout, Duration::from_secs(5));
    }
}
