//! Credentials and credential providers.
//!
//! A [`CredentialsProvider`] is asked for credentials once per request. The
//! default provider is a [`CredentialsProviderChain`] over the environment;
//! per-request override credentials in
//! [`RequestOptions`](crate::RequestOptions) bypass the provider entirely.

use std::env;
use std::sync::Arc;

use crate::error::ClientError;

/// AWS credentials for request signing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The AWS access key ID.
    pub access_key_id: String,
    /// The AWS secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Create long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Source of credentials for signing requests.
///
/// Implementations are shared by every worker thread of a client, so they
/// must be safe to call concurrently.
pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
    /// Resolve the credentials to sign the next request with.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Credentials`] if no credentials are available.
    fn credentials(&self) -> Result<Credentials, ClientError>;
}

/// Provider that always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Wrap fixed credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, ClientError> {
        Ok(self.credentials.clone())
    }
}

/// Provider reading `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` /
/// `AWS_SESSION_TOKEN`, falling back to `ACCESS_KEY` / `SECRET_KEY`.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentCredentialsProvider;

impl EnvironmentCredentialsProvider {
    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials, ClientError> {
        let access_key = lookup("AWS_ACCESS_KEY_ID")
            .or_else(|| lookup("ACCESS_KEY"))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ClientError::Credentials("AWS_ACCESS_KEY_ID is not set".to_owned()))?;
        let secret_key = lookup("AWS_SECRET_ACCESS_KEY")
            .or_else(|| lookup("SECRET_KEY"))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ClientError::Credentials("AWS_SECRET_ACCESS_KEY is not set".to_owned())
            })?;

        Ok(Credentials {
            access_key_id: access_key,
            secret_access_key: secret_key,
            session_token: lookup("AWS_SESSION_TOKEN").filter(|v| !v.is_empty()),
        })
    }
}

impl CredentialsProvider for EnvironmentCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, ClientError> {
        Self::resolve(|key| env::var(key).ok())
    }
}

/// Tries each provider in order and returns the first credentials found.
#[derive(Debug, Clone)]
pub struct CredentialsProviderChain {
    providers: Vec<Arc<dyn CredentialsProvider>>,
}

impl CredentialsProviderChain {
    /// Build a chain from explicit providers.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn CredentialsProvider>>) -> Self {
        Self { providers }
    }

    /// Append a provider to the end of the chain.
    #[must_use]
    pub fn with(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.providers.push(provider);
        self
    }
}

impl Default for CredentialsProviderChain {
    fn default() -> Self {
        Self::new(vec![Arc::new(EnvironmentCredentialsProvider)])
    }
}

impl CredentialsProvider for CredentialsProviderChain {
    fn credentials(&self) -> Result<Credentials, ClientError> {
        let mut reasons = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.credentials() {
                Ok(credentials) => return Ok(credentials),
                Err(e) => {
                    tracing::debug!(?provider, error = %e, "credentials provider yielded nothing");
                    reasons.push(e.to_string());
                }
            }
        }
        Err(ClientError::Credentials(format!(
            "no provider in the chain could supply credentials: [{}]",
            reasons.join("; ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug)]
    struct EmptyProvider;

    impl CredentialsProvider for EmptyProvider {
        fn credentials(&self) -> Result<Credentials, ClientError> {
            Err(ClientError::Credentials("empty".to_owned()))
        }
    }

    #[test]
    fn test_should_return_static_credentials() {
        let provider = StaticCredentialsProvider::new(Credentials::new("AKID", "secret"));
        let creds = provider.credentials().unwrap();
        assert_eq!(creds.access_key_id, "AKID");
        assert_eq!(creds.secret_access_key, "secret");
        assert!(creds.session_token.is_none());
    }

    #[test]
    fn test_should_redact_secrets_in_debug() {
        let creds = Credentials::new("AKID", "very-secret").with_session_token("token-value");
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKID"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("token-value"));
    }

    #[test]
    fn test_should_resolve_environment_credentials() {
        let vars: HashMap<&str, &str> = [
            ("ACCESS_KEY", "minio"),
            ("SECRET_KEY", "minio-secret"),
            ("AWS_SESSION_TOKEN", "session"),
        ]
        .into_iter()
        .collect();
        let creds =
            EnvironmentCredentialsProvider::resolve(|k| vars.get(k).map(|v| (*v).to_owned()))
                .unwrap();
        assert_eq!(creds.access_key_id, "minio");
        assert_eq!(creds.secret_access_key, "minio-secret");
        assert_eq!(creds.session_token.as_deref(), Some("session"));
    }

    #[test]
    fn test_should_fail_without_environment_credentials() {
        let result = EnvironmentCredentialsProvider::resolve(|_| None);
        assert!(matches!(result, Err(ClientError::Credentials(_))));
    }

    #[test]
    fn test_should_use_first_successful_provider_in_chain() {
        let chain = CredentialsProviderChain::new(vec![Arc::new(EmptyProvider)]).with(Arc::new(
            StaticCredentialsProvider::new(Credentials::new("second", "s")),
        ));
        assert_eq!(chain.credentials().unwrap().access_key_id, "second");
    }

    #[test]
    fn test_should_report_all_failures_from_chain() {
        let chain = CredentialsProviderChain::new(vec![Arc::new(EmptyProvider)]);
        let err = chain.credentials().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
