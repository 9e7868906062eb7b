//! HTTP transport abstraction.
//!
//! Service clients are synchronous, so the transport is a blocking call from
//! a fully-built, signed [`http::Request`] to an [`http::Response`].
//!
//! A `reqwest::blocking::Client` owns a private runtime that must not be torn
//! down from an async context, so [`ReqwestTransport`] always releases it on
//! a plain thread.

use bytes::Bytes;
use parking_lot::RwLock;
use ruststack_sdk_core::{ClientConfig, ClientError};

/// Sends signed HTTP requests.
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Send a request and wait for the complete response.
    ///
    /// Non-2xx responses are returned as `Ok`; only failures to complete the
    /// exchange are errors.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on connection or timeout failures
    /// and [`ClientError::Shutdown`] after [`shutdown`](Self::shutdown).
    fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, ClientError>;

    /// Release connections. Later sends fail with [`ClientError::Shutdown`].
    fn shutdown(&self);
}

/// Transport backed by a blocking `reqwest` client.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: RwLock<Option<reqwest::blocking::Client>>,
}

impl ReqwestTransport {
    /// Build a transport from the timeouts, pool size, proxy and user agent
    /// in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the proxy URL is invalid or the
    /// HTTP client cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(config.user_agent.clone());

        if let Some(proxy) = &config.proxy {
            let mut p = reqwest::Proxy::all(&proxy.url)
                .map_err(|e| ClientError::Config(format!("invalid proxy {}: {e}", proxy.url)))?;
            if let Some(username) = &proxy.username {
                p = p.basic_auth(username, proxy.password.as_deref().unwrap_or_default());
            }
            builder = builder.proxy(p);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client: RwLock::new(Some(client)),
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, ClientError> {
        // Clone the handle so the lock is not held across the exchange.
        let client = self.client.read().clone().ok_or(ClientError::Shutdown)?;

        let (parts, body) = request.into_parts();
        let response = client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body.to_vec())
            .send()
            .map_err(ClientError::transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().map_err(ClientError::transport)?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }

    fn shutdown(&self) {
        let client = self.client.write().take();
        if let Some(client) = client {
            release(client);
            tracing::debug!("HTTP transport closed");
        }
    }
}

impl Drop for ReqwestTransport {
    fn drop(&mut self) {
        if let Some(client) = self.client.get_mut().take() {
            release(client);
        }
    }
}

/// Drop the last transport handle off the calling thread.
fn release(client: reqwest::blocking::Client) {
    let spawned = std::thread::Builder::new()
        .name("ruststack-sdk-transport-close".to_owned())
        .spawn(move || drop(client));
    if let Err(e) = spawned {
        tracing::warn!(error = %e, "failed to spawn transport close thread");
    }
}
