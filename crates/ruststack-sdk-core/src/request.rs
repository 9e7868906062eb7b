//! Per-request options carried by every operation input.

use crate::credentials::Credentials;

/// Options that travel with a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Credentials used instead of the client's provider for this request.
    pub credentials: Option<Credentials>,
    /// Extra HTTP headers added to the wire request.
    pub custom_headers: Vec<(String, String)>,
    /// Extra parameters copied onto the wire request as-is.
    pub custom_query_params: Vec<(String, String)>,
}

impl RequestOptions {
    /// Override the credentials for this request.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add an HTTP header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Add a request parameter.
    #[must_use]
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_query_params.push((name.into(), value.into()));
        self
    }
}

/// Implemented by every operation input.
pub trait SdkRequest {
    /// The options attached to this request.
    fn request_options(&self) -> &RequestOptions;
}

/// Implement [`SdkRequest`] for input structs holding a
/// `request_options: RequestOptions` field.
#[macro_export]
macro_rules! impl_sdk_request {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SdkRequest for $ty {
                fn request_options(&self) -> &$crate::RequestOptions {
                    &self.request_options
                }
            }
        )+
    };
}
