//! AWS Signature Version 4 request signing for the RustStack SDK.
//!
//! The runtime builds an [`http::Request`] for each operation and passes it to
//! [`sign_request`] together with the resolved credentials. Signing adds the
//! `X-Amz-Date`, `Host` and (for temporary credentials) `X-Amz-Security-Token`
//! headers and finally the `Authorization` header.
//!
//! # Usage
//!
//! ```rust
//! use bytes::Bytes;
//! use chrono::{TimeZone, Utc};
//! use ruststack_sdk_auth::{SigningParams, sign_request};
//! use ruststack_sdk_core::Credentials;
//!
//! let mut request = http::Request::builder()
//!     .method("GET")
//!     .uri("https://route53.amazonaws.com/2013-04-01/hostedzone")
//!     .body(Bytes::new())
//!     .unwrap();
//! let params = SigningParams::new(
//!     "us-east-1",
//!     "route53",
//!     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//! );
//! sign_request(&mut request, &Credentials::new("AKID", "secret"), &params).unwrap();
//! assert!(request.headers().contains_key(http::header::AUTHORIZATION));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction
//! - [`error`] - Signing error types
//! - [`signer`] - Key derivation and request signing

pub mod canonical;
pub mod error;
pub mod signer;

pub use error::SigningError;
pub use signer::{SigningParams, hash_payload, sign_request};
