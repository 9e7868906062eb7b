//! Client configuration.
//!
//! Configuration can be built in code or loaded from environment variables
//! with [`ClientConfig::from_env`].

use std::env;
use std::time::Duration;

use crate::error::ClientError;
use crate::types::Region;

/// Worker pool size used by async clients when none is configured.
pub const DEFAULT_MAX_WORKERS: usize = 50;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(50);
const DEFAULT_MAX_CONNECTIONS: usize = 50;

/// HTTP proxy settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy URL, e.g. `http://proxy.internal:3128`.
    pub url: String,
    /// Optional basic-auth user name.
    pub username: Option<String>,
    /// Optional basic-auth password.
    pub password: Option<String>,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Configuration shared by a synchronous client and its async wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Region the client talks to.
    pub region: Region,
    /// Endpoint override. When `None` the service's public endpoint is used.
    pub endpoint: Option<String>,
    /// Number of workers in the default async worker pool.
    pub max_workers: usize,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Maximum idle connections kept per host.
    pub max_connections: usize,
    /// Optional HTTP proxy.
    pub proxy: Option<ProxyConfig>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            endpoint: None,
            max_workers: DEFAULT_MAX_WORKERS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            proxy: None,
            user_agent: concat!("ruststack-sdk/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `AWS_REGION` / `AWS_DEFAULT_REGION` | `region` |
    /// | `AWS_ENDPOINT_URL` | `endpoint` |
    /// | `RUSTSTACK_SDK_MAX_WORKERS` | `max_workers` |
    /// | `RUSTSTACK_SDK_CONNECT_TIMEOUT_MS` | `connect_timeout` |
    /// | `RUSTSTACK_SDK_REQUEST_TIMEOUT_MS` | `request_timeout` |
    /// | `RUSTSTACK_SDK_MAX_CONNECTIONS` | `max_connections` |
    /// | `HTTPS_PROXY` | `proxy` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            config.region = Region::new(v);
        }
        if let Some(v) = lookup("AWS_ENDPOINT_URL") {
            config.endpoint = Some(v);
        }
        config.max_workers = parse_or(&lookup, "RUSTSTACK_SDK_MAX_WORKERS", config.max_workers);
        config.max_connections = parse_or(
            &lookup,
            "RUSTSTACK_SDK_MAX_CONNECTIONS",
            config.max_connections,
        );
        config.connect_timeout = Duration::from_millis(parse_or(
            &lookup,
            "RUSTSTACK_SDK_CONNECT_TIMEOUT_MS",
            millis(config.connect_timeout),
        ));
        config.request_timeout = Duration::from_millis(parse_or(
            &lookup,
            "RUSTSTACK_SDK_REQUEST_TIMEOUT_MS",
            millis(config.request_timeout),
        ));
        if let Some(url) = lookup("HTTPS_PROXY").or_else(|| lookup("https_proxy")) {
            config.proxy = Some(ProxyConfig {
                url,
                username: None,
                password: None,
            });
        }

        config
    }

    /// Check the configuration for values no client can work with.
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] for a zero-sized worker pool or an
    /// empty endpoint override.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.max_workers == 0 {
            return Err(ClientError::Config(
                "max_workers must be at least 1".to_owned(),
            ));
        }
        if self.endpoint.as_deref().is_some_and(str::is_empty) {
            return Err(ClientError::Config("endpoint must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<Region>) -> Self {
        self.region = region.into();
        self
    }

    /// Set an endpoint override.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the default worker pool size.
    #[must_use]
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Set the connect and request timeouts.
    #[must_use]
    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    /// Route requests through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "ignoring invalid configuration value");
            default
        }),
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region.as_str(), "us-east-1");
        assert_eq!(config.max_workers, 50);
        assert!(config.endpoint.is_none());
        assert!(config.user_agent.starts_with("ruststack-sdk/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_should_load_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AWS_DEFAULT_REGION", "eu-west-1"),
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
            ("RUSTSTACK_SDK_MAX_WORKERS", "8"),
            ("RUSTSTACK_SDK_CONNECT_TIMEOUT_MS", "250"),
            ("HTTPS_PROXY", "http://proxy:3128"),
        ]));

        assert_eq!(config.region.as_str(), "eu-west-1");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.max_workers, 8);
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.proxy.unwrap().url, "http://proxy:3128");
    }

    #[test]
    fn test_should_prefer_aws_region_over_default_region() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AWS_REGION", "ap-south-1"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(config.region.as_str(), "ap-south-1");
    }

    #[test]
    fn test_should_fall_back_on_invalid_numbers() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("RUSTSTACK_SDK_MAX_WORKERS", "lots")]));
        assert_eq!(config.max_workers, DEFAULT_MAX_WORKERS);
    }

    #[test]
    fn test_should_reject_zero_workers() {
        let config = ClientConfig::default().with_max_workers(0);
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_should_redact_proxy_password() {
        let proxy = ProxyConfig {
            url: "http://proxy:3128".to_owned(),
            username: Some("user".to_owned()),
            password: Some("hunter2".to_owned()),
        };
        let debug = format!("{proxy:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
