//! RustStack SDK probe.
//!
//! Sends one read-only call to each supported service through the async
//! clients, all sharing a single worker pool, and prints what came back
//! along with per-operation latency.
//!
//! # Usage
//!
//! ```text
//! AWS_ENDPOINT_URL=http://localhost:4566 ruststack-sdk-probe
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_ENDPOINT_URL` | *(per service)* | Endpoint every client talks to |
//! | `AWS_REGION` | `us-east-1` | Region for regional services |
//! | `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` | *(required)* | Credentials |
//! | `RUSTSTACK_SDK_MAX_WORKERS` | `50` | Size of the shared worker pool |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ruststack_autoscaling::{
    AutoScalingAsyncClient, AutoScalingClient, DescribeAutoScalingGroupsInput,
};
use ruststack_elb::{DescribeLoadBalancersInput, ElbAsyncClient, ElbClient};
use ruststack_logs::{DescribeLogGroupsInput, LogsAsyncClient, LogsClient};
use ruststack_route53::{ListHostedZonesInput, Route53AsyncClient, Route53Client};
use ruststack_sdk_core::{
    ClientConfig, MetricsCollector, OperationStats, ResponseFuture, TaskExecutor, WorkerPool,
};
use ruststack_sdk_runtime::{ClientRuntime, ServiceMetadata};

/// How long to wait for any single call.
const CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

fn runtime(
    metadata: &'static ServiceMetadata,
    config: &ClientConfig,
    stats: &Arc<OperationStats>,
) -> Result<ClientRuntime> {
    let collector: Arc<dyn MetricsCollector> = stats.clone();
    ClientRuntime::builder(metadata, config.clone())
        .metrics(collector)
        .build()
        .with_context(|| format!("failed to build {} client", metadata.service_name))
}

/// Wait for `future` and report the result. Returns whether the call succeeded.
fn report<T>(label: &str, future: &ResponseFuture<T>, describe: impl FnOnce(&T) -> String) -> bool {
    match future.wait_timeout(CALL_TIMEOUT) {
        Some(Ok(out)) => {
            println!("{label:<28} ok     {}", describe(out));
            true
        }
        Some(Err(e)) => {
            println!("{label:<28} error  {e}");
            false
        }
        None => {
            println!("{label:<28} timed out after {CALL_TIMEOUT:?}");
            false
        }
    }
}

fn names<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Display,
{
    let names: Vec<String> = items.into_iter().map(|s| s.to_string()).collect();
    if names.is_empty() {
        "(none)".to_owned()
    } else {
        names.join(", ")
    }
}

fn main() -> Result<()> {
    init_tracing(&log_level())?;

    let config = ClientConfig::from_env();
    config.validate().context("invalid client configuration")?;
    info!(
        region = %config.region,
        endpoint = config.endpoint.as_deref().unwrap_or("(default)"),
        workers = config.max_workers,
        "starting probe"
    );

    let pool: Arc<dyn TaskExecutor> =
        Arc::new(WorkerPool::with_name("sdk-probe", config.max_workers));
    let stats = Arc::new(OperationStats::new());

    let autoscaling = AutoScalingAsyncClient::with_executor(
        AutoScalingClient::from_runtime(runtime(&ruststack_autoscaling::METADATA, &config, &stats)?),
        Arc::clone(&pool),
    );
    let elb = ElbAsyncClient::with_executor(
        ElbClient::from_runtime(runtime(&ruststack_elb::METADATA, &config, &stats)?),
        Arc::clone(&pool),
    );
    let route53 = Route53AsyncClient::with_executor(
        Route53Client::from_runtime(runtime(&ruststack_route53::METADATA, &config, &stats)?),
        Arc::clone(&pool),
    );
    let logs = LogsAsyncClient::with_executor(
        LogsClient::from_runtime(runtime(&ruststack_logs::METADATA, &config, &stats)?),
        Arc::clone(&pool),
    );

    // Everything is in flight before the first result is read.
    let groups =
        autoscaling.describe_auto_scaling_groups_async(DescribeAutoScalingGroupsInput::default());
    let balancers = elb.describe_load_balancers_async(DescribeLoadBalancersInput::default());
    let zones = route53.list_hosted_zones_async(ListHostedZonesInput::default());
    let log_groups = logs.describe_log_groups_async(DescribeLogGroupsInput::default());

    let results = [
        report("autoscaling groups", &groups, |out| {
            names(out.auto_scaling_groups.iter().map(|g| &g.auto_scaling_group_name))
        }),
        report("load balancers", &balancers, |out| {
            names(out.load_balancer_descriptions.iter().map(|lb| &lb.load_balancer_name))
        }),
        report("hosted zones", &zones, |out| {
            names(out.hosted_zones.iter().map(|z| &z.name))
        }),
        report("log groups", &log_groups, |out| {
            names(out.log_groups.iter().map(|g| &g.log_group_name))
        }),
    ];

    println!();
    for (service, operation, summary) in stats.snapshot() {
        println!(
            "{service:>20}.{operation:<28} calls={} errors={} mean={:?}",
            summary.calls,
            summary.errors,
            summary.mean_latency()
        );
    }

    autoscaling.shutdown();
    elb.shutdown();
    route53.shutdown();
    logs.shutdown();

    let failed = results.iter().filter(|ok| !**ok).count();
    if failed > 0 {
        warn!(failed, "some probes failed");
        bail!("{failed} of {} probes failed", results.len());
    }
    info!("all probes succeeded");
    Ok(())
}
