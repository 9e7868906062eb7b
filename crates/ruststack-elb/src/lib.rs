//! Classic Elastic Load Balancing client for the RustStack SDK.
//!
//! [`ElbClient`] blocks the calling thread; [`ElbAsyncClient`] wraps it and
//! runs each call on a worker pool.
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{ElbAsyncClient, ElbClient, METADATA};
pub use error::ElbErrorCode;
pub use input::*;
pub use operations::ElbOperation;
pub use output::*;
pub use types::{
    HealthCheck, Instance, InstanceState, Listener, ListenerDescription, LoadBalancerDescription,
    Tag,
};
