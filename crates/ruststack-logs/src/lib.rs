//! CloudWatch Logs client for the RustStack SDK.
//!
//! Logs speaks AWS JSON 1.1: every call is a `POST /` with an
//! `X-Amz-Target: Logs_20140328.<Operation>` header and a `camelCase` body.
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{LogsAsyncClient, LogsClient, METADATA};
pub use error::LogsErrorCode;
pub use input::*;
pub use operations::LogsOperation;
pub use output::*;
pub use types::{
    InputLogEvent, LogGroup, LogStream, OrderBy, OutputLogEvent, RejectedLogEventsInfo,
};
