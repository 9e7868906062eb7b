//! Route 53 client for the RustStack SDK.
//!
//! Route 53 speaks REST-XML against a single global endpoint. Requests are
//! signed for `us-east-1` regardless of the configured region.
//!
//! ```no_run
//! use ruststack_route53::{DeleteHostedZoneInput, Route53AsyncClient};
//! use ruststack_sdk_core::{ClientConfig, SdkError, handler_fn};
//!
//! let client = Route53AsyncClient::new(ClientConfig::from_env())?;
//! let future = client.delete_hosted_zone_async_with_handler(
//!     DeleteHostedZoneInput {
//!         id: "/hostedzone/Z1D633PJN98FT9".to_owned(),
//!         ..DeleteHostedZoneInput::default()
//!     },
//!     handler_fn(
//!         |_req: &DeleteHostedZoneInput, out: &ruststack_route53::DeleteHostedZoneOutput| {
//!             println!("deleting: {}", out.change_info.status);
//!         },
//!         |err: &SdkError| eprintln!("failed: {err}"),
//!     ),
//! );
//! let _ = future.get();
//! client.shutdown();
//! # Ok::<(), SdkError>(())
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use client::{METADATA, Route53AsyncClient, Route53Client};
pub use error::Route53ErrorCode;
pub use input::{
    ChangeResourceRecordSetsInput, CreateHostedZoneInput, DeleteHostedZoneInput, GetChangeInput,
    GetHostedZoneInput, ListHostedZonesInput, ListResourceRecordSetsInput, trim_resource_id,
};
pub use operations::Route53Operation;
pub use output::*;
pub use types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, DelegationSet, HostedZone,
    HostedZoneConfig, ResourceRecord, ResourceRecordSet, Vpc,
};
