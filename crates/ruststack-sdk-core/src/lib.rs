//! Core types and asynchronous request execution for the RustStack SDK.
//!
//! Every service client in the SDK is built from two layers:
//!
//! - a synchronous client exposing one blocking method per API operation, and
//! - an asynchronous client that hands each call to a [`TaskExecutor`] and
//!   returns a [`ResponseFuture`], optionally notifying an [`AsyncHandler`].
//!
//! This crate holds everything the two layers share: configuration,
//! credentials, the error taxonomy, the executors (including the default
//! fixed-size [`WorkerPool`]), the one-shot future, the generic
//! [`AsyncDispatcher`] and the [`async_client!`] macro that derives the
//! per-operation async bindings.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ruststack_sdk_core::{AsyncDispatcher, WorkerPool};
//!
//! let pool = Arc::new(WorkerPool::new(2));
//! let dispatcher = AsyncDispatcher::new(pool);
//!
//! let future = dispatcher.submit(21_u32, |n: &u32| Ok(n * 2), None);
//! assert_eq!(future.get().unwrap(), 42);
//! ```

mod client;
mod config;
mod credentials;
mod dispatch;
mod error;
mod executor;
mod future;
mod handler;
mod macros;
mod metrics;
mod pool;
mod request;
mod types;

pub use client::{AsyncClient, ServiceClient};
pub use config::{ClientConfig, DEFAULT_MAX_WORKERS, ProxyConfig};
pub use credentials::{
    Credentials, CredentialsProvider, CredentialsProviderChain, EnvironmentCredentialsProvider,
    StaticCredentialsProvider,
};
pub use dispatch::AsyncDispatcher;
pub use error::{ClientError, ErrorCode, Fault, SdkError, SdkResult, ServiceError};
pub use executor::{InlineExecutor, Rejected, Task, TaskExecutor, TokioBlockingExecutor};
pub use future::{Promise, ResponseFuture, promise};
pub use handler::{AsyncHandler, FnHandler, Outcome, OutcomeHandler, handler_fn, outcome_handler};
pub use metrics::{MetricsCollector, OperationStats, OperationSummary, RequestMetrics};
pub use pool::WorkerPool;
pub use request::{RequestOptions, SdkRequest};
pub use types::Region;
