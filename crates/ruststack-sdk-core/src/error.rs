//! Error taxonomy shared by every service client.
//!
//! Failures fall into two categories:
//!
//! - [`ClientError`]: something went wrong locally while preparing,
//!   dispatching or decoding a request (no credentials, marshalling fault,
//!   network failure, task rejected by a shut-down pool, ...).
//! - [`ServiceError`]: the remote service answered with a structured error
//!   response.
//!
//! Both are wrapped by [`SdkError`]. All three types are `Clone` so that a
//! completed [`ResponseFuture`](crate::ResponseFuture) can hand out the same
//! error every time it is observed.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Convenience result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Top-level error returned by every client operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SdkError {
    /// Local failure.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Structured error response from the remote service.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl SdkError {
    /// Whether this is a local failure.
    #[must_use]
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client(_))
    }

    /// Whether this is a service-side failure.
    #[must_use]
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// The service error, if this is one.
    #[must_use]
    pub fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(e) => Some(e),
            Self::Client(_) => None,
        }
    }

    /// The client error, if this is one.
    #[must_use]
    pub fn as_client(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            Self::Service(_) => None,
        }
    }

    /// The raw service error code, if this is a service error.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.as_service().map(|e| e.code.as_str())
    }

    /// Decode the service error code into a service-specific code enum.
    ///
    /// Returns `None` for client errors and for codes the enum does not know.
    #[must_use]
    pub fn service_code<C: ErrorCode>(&self) -> Option<C> {
        self.as_service().and_then(ServiceError::code_as)
    }
}

/// Local failures raised before, during or after talking to the service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// No credentials could be resolved.
    #[error("unable to load credentials: {0}")]
    Credentials(String),

    /// The client configuration is invalid.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The request could not be turned into an HTTP request.
    #[error("failed to marshall {operation} request: {message}")]
    Marshall {
        /// Operation name.
        operation: &'static str,
        /// What went wrong.
        message: String,
    },

    /// The request could not be signed.
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// The HTTP exchange failed (connection refused, timeout, ...).
    #[error("HTTP transport error: {message}")]
    Transport {
        /// What went wrong.
        message: String,
        /// Underlying transport error.
        #[source]
        source: Option<Arc<dyn StdError + Send + Sync>>,
    },

    /// A successful response could not be decoded.
    #[error("failed to unmarshall {operation} response: {message}")]
    Unmarshall {
        /// Operation name.
        operation: &'static str,
        /// What went wrong.
        message: String,
    },

    /// The client (and its transport) has been shut down.
    #[error("client has been shut down")]
    Shutdown,

    /// The executor refused the task, usually because it was shut down.
    #[error("task rejected by executor: {0}")]
    Rejected(String),

    /// The task was discarded before a worker picked it up.
    #[error("task was cancelled before it started")]
    Cancelled,

    /// The operation or its success callback panicked.
    #[error("task panicked: {0}")]
    Panicked(String),
}

impl ClientError {
    /// Build a transport error from an underlying error.
    pub fn transport(source: impl StdError + Send + Sync + 'static) -> Self {
        Self::Transport {
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }

    /// Build a panic error from a payload caught by `catch_unwind`.
    #[must_use]
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_owned());
        Self::Panicked(message)
    }
}

/// Which side of the exchange the service blames for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fault {
    /// The request was invalid (`Sender`, HTTP 4xx).
    Client,
    /// The service failed (`Receiver`, HTTP 5xx).
    Server,
    /// The response did not say.
    #[default]
    Unknown,
}

impl Fault {
    /// Derive the fault from an XML `<Type>` value or, failing that, the status.
    #[must_use]
    pub fn from_type_or_status(error_type: Option<&str>, status: http::StatusCode) -> Self {
        match error_type {
            Some("Sender") => Self::Client,
            Some("Receiver") => Self::Server,
            _ if status.is_client_error() => Self::Client,
            _ if status.is_server_error() => Self::Server,
            _ => Self::Unknown,
        }
    }
}

/// A structured error response returned by a service.
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// Name of the service that returned the error.
    pub service: &'static str,
    /// The error code, e.g. `NoSuchHostedZone`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Request id assigned by the service, if reported.
    pub request_id: Option<String>,
    /// HTTP status of the response.
    pub status: http::StatusCode,
    /// Sender/receiver fault.
    pub fault: Fault,
    /// Whether the code is one of the service's documented error codes.
    pub modeled: bool,
}

impl ServiceError {
    /// Decode the code into a service-specific code enum.
    #[must_use]
    pub fn code_as<C: ErrorCode>(&self) -> Option<C> {
        C::from_code(&self.code)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} returned {} ({}): {}",
            self.service, self.code, self.status, self.message
        )?;
        if let Some(id) = &self.request_id {
            write!(f, " [request id: {id}]")?;
        }
        Ok(())
    }
}

impl StdError for ServiceError {}

/// A service-specific enum of documented error codes.
///
/// Implemented by the `*ErrorCode` enum of each service crate. The runtime
/// uses [`ErrorCode::ALL`] as the service's error registry.
pub trait ErrorCode: Sized + Copy + fmt::Debug + 'static {
    /// Every documented code, as wire strings.
    const ALL: &'static [&'static str];

    /// Parse a wire code.
    fn from_code(code: &str) -> Option<Self>;

    /// The wire code.
    fn as_str(&self) -> &'static str;
}
