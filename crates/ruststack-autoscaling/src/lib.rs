//! Auto Scaling client for the RustStack SDK.
//!
//! [`AutoScalingClient`] is the blocking client; [`AutoScalingAsyncClient`]
//! runs the same operations on a worker pool and hands back
//! [`ResponseFuture`](ruststack_sdk_core::ResponseFuture)s.
//!
//! Auto Scaling speaks the query protocol: inputs are flattened into form
//! parameters and results are read from `<{Operation}Result>` elements.
//!
//! ```no_run
//! use ruststack_autoscaling::{AutoScalingAsyncClient, DescribeAutoScalingGroupsInput};
//! use ruststack_sdk_core::ClientConfig;
//!
//! let client = AutoScalingAsyncClient::new(ClientConfig::from_env())?;
//! let groups = client
//!     .describe_auto_scaling_groups_async(DescribeAutoScalingGroupsInput::default())
//!     .get()?;
//! println!("{} groups", groups.auto_scaling_groups.len());
//! client.shutdown();
//! # Ok::<(), ruststack_sdk_core::SdkError>(())
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{AutoScalingAsyncClient, AutoScalingClient, METADATA};
pub use error::AutoScalingErrorCode;
pub use input::*;
pub use operations::AutoScalingOperation;
pub use output::*;
pub use types::{Activity, AutoScalingGroup, Instance, InstanceMonitoring, LaunchConfiguration, Tag};
