//! Integration tests for the RustStack SDK clients.
//!
//! These tests require an AWS-compatible server at `localhost:4566` (or
//! `AWS_ENDPOINT_URL`). They are marked `#[ignore]` so they don't run during
//! normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p ruststack-sdk-integration -- --ignored
//! ```
//!
//! The transport is blocking, so the tests are plain `#[test]`s that wait on
//! the returned futures.

use std::sync::{Arc, Once};

use ruststack_autoscaling::{AutoScalingAsyncClient, AutoScalingClient};
use ruststack_elb::{ElbAsyncClient, ElbClient};
use ruststack_logs::{LogsAsyncClient, LogsClient};
use ruststack_route53::{Route53AsyncClient, Route53Client};
use ruststack_sdk_core::{ClientConfig, Credentials, StaticCredentialsProvider};
use ruststack_sdk_runtime::{ClientRuntime, ServiceMetadata};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("AWS_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// Client configuration pointing at the local server.
#[must_use]
pub fn test_config() -> ClientConfig {
    ClientConfig::default()
        .with_region("us-east-1")
        .with_endpoint(endpoint_url())
        .with_max_workers(4)
}

/// Build a runtime for `metadata` against the local server with the
/// `test`/`test` credentials.
fn runtime(metadata: &'static ServiceMetadata) -> ClientRuntime {
    init_tracing();
    ClientRuntime::builder(metadata, test_config())
        .credentials(Arc::new(StaticCredentialsProvider::new(Credentials::new(
            "test", "test",
        ))))
        .build()
        .unwrap_or_else(|e| panic!("failed to build {} runtime: {e}", metadata.service_name))
}

/// Async Auto Scaling client.
#[must_use]
pub fn autoscaling_client() -> AutoScalingAsyncClient {
    AutoScalingAsyncClient::from_client(AutoScalingClient::from_runtime(runtime(
        &ruststack_autoscaling::METADATA,
    )))
}

/// Async ELB client.
#[must_use]
pub fn elb_client() -> ElbAsyncClient {
    ElbAsyncClient::from_client(ElbClient::from_runtime(runtime(&ruststack_elb::METADATA)))
}

/// Async Route 53 client.
#[must_use]
pub fn route53_client() -> Route53AsyncClient {
    Route53AsyncClient::from_client(Route53Client::from_runtime(runtime(
        &ruststack_route53::METADATA,
    )))
}

/// Async CloudWatch Logs client.
#[must_use]
pub fn logs_client() -> LogsAsyncClient {
    LogsAsyncClient::from_client(LogsClient::from_runtime(runtime(&ruststack_logs::METADATA)))
}

/// Generate a unique resource name for a test.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("test-{prefix}-{}", &id[..8])
}

mod test_autoscaling;
mod test_elb;
mod test_logs;
mod test_route53;
