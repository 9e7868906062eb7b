//! Error types for request signing.

/// Errors that can occur while signing a request.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The request URI has no host and no `Host` header was set.
    #[error("Request has no host to sign")]
    MissingHost,

    /// A value could not be stored in an HTTP header.
    #[error("Invalid value for header {name}")]
    InvalidHeaderValue {
        /// Header name.
        name: &'static str,
    },
}

impl From<SigningError> for ruststack_sdk_core::ClientError {
    fn from(err: SigningError) -> Self {
        Self::Signing(err.to_string())
    }
}
