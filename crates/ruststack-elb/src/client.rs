//! Synchronous and asynchronous Elastic Load Balancing clients.

use ruststack_sdk_core::{
    ClientConfig, ErrorCode, SdkRequest, SdkResult, ServiceClient, async_client,
};
use ruststack_sdk_runtime::{
    ClientRuntime, Protocol, QuerySerialize, ServiceMetadata, XmlDeserialize,
};

use crate::error::ElbErrorCode;
use crate::input::{
    ConfigureHealthCheckInput, CreateLoadBalancerInput, DeleteLoadBalancerInput,
    DeregisterInstancesFromLoadBalancerInput, DescribeInstanceHealthInput,
    DescribeLoadBalancersInput, RegisterInstancesWithLoadBalancerInput,
};
use crate::operations::ElbOperation;
use crate::output::{
    ConfigureHealthCheckOutput, CreateLoadBalancerOutput, DeleteLoadBalancerOutput,
    DeregisterInstancesFromLoadBalancerOutput, DescribeInstanceHealthOutput,
    DescribeLoadBalancersOutput, RegisterInstancesWithLoadBalancerOutput,
};

/// Elastic Load Balancing service description.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "ElasticLoadBalancing",
    signing_name: "elasticloadbalancing",
    endpoint_prefix: "elasticloadbalancing",
    api_version: "2012-06-01",
    protocol: Protocol::AwsQuery,
    json_target_prefix: None,
    global_region: None,
    xml_namespace: Some("http://elasticloadbalancing.amazonaws.com/doc/2012-06-01/"),
    error_codes: ElbErrorCode::ALL,
};

/// Blocking Elastic Load Balancing client.
#[derive(Debug)]
pub struct ElbClient {
    runtime: ClientRuntime,
}

impl ElbClient {
    /// Build a client with the default transport and credentials chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        Ok(Self::from_runtime(
            ClientRuntime::builder(&METADATA, config).build()?,
        ))
    }

    /// Wrap a runtime built from [`METADATA`].
    #[must_use]
    pub fn from_runtime(runtime: ClientRuntime) -> Self {
        Self { runtime }
    }

    /// The underlying runtime.
    #[must_use]
    pub fn runtime(&self) -> &ClientRuntime {
        &self.runtime
    }

    /// Create a load balancer and return its DNS name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLoadBalancerName`, `TooManyLoadBalancers`,
    /// `CertificateNotFound` or another service or client error.
    pub fn create_load_balancer(
        &self,
        input: &CreateLoadBalancerInput,
    ) -> SdkResult<CreateLoadBalancerOutput> {
        self.query(ElbOperation::CreateLoadBalancer, input)
    }

    /// Delete a load balancer. Deleting a missing one succeeds.
    ///
    /// # Errors
    ///
    /// Returns a client error or an unmodeled service error.
    pub fn delete_load_balancer(
        &self,
        input: &DeleteLoadBalancerInput,
    ) -> SdkResult<DeleteLoadBalancerOutput> {
        self.query(ElbOperation::DeleteLoadBalancer, input)
    }

    /// Describe load balancers.
    ///
    /// # Errors
    ///
    /// Returns `LoadBalancerNotFound` or a client error.
    pub fn describe_load_balancers(
        &self,
        input: &DescribeLoadBalancersInput,
    ) -> SdkResult<DescribeLoadBalancersOutput> {
        self.query(ElbOperation::DescribeLoadBalancers, input)
    }

    /// Register instances with a load balancer.
    ///
    /// # Errors
    ///
    /// Returns `LoadBalancerNotFound`, `InvalidInstance` or a client error.
    pub fn register_instances_with_load_balancer(
        &self,
        input: &RegisterInstancesWithLoadBalancerInput,
    ) -> SdkResult<RegisterInstancesWithLoadBalancerOutput> {
        self.query(ElbOperation::RegisterInstancesWithLoadBalancer, input)
    }

    /// Deregister instances from a load balancer.
    ///
    /// # Errors
    ///
    /// Returns `LoadBalancerNotFound`, `InvalidInstance` or a client error.
    pub fn deregister_instances_from_load_balancer(
        &self,
        input: &DeregisterInstancesFromLoadBalancerInput,
    ) -> SdkResult<DeregisterInstancesFromLoadBalancerOutput> {
        self.query(ElbOperation::DeregisterInstancesFromLoadBalancer, input)
    }

    /// Describe the health of registered instances.
    ///
    /// # Errors
    ///
    /// Returns `LoadBalancerNotFound`, `InvalidInstance` or a client error.
    pub fn describe_instance_health(
        &self,
        input: &DescribeInstanceHealthInput,
    ) -> SdkResult<DescribeInstanceHealthOutput> {
        self.query(ElbOperation::DescribeInstanceHealth, input)
    }

    /// Replace the health check of a load balancer.
    ///
    /// # Errors
    ///
    /// Returns `LoadBalancerNotFound` or a client error.
    pub fn configure_health_check(
        &self,
        input: &ConfigureHealthCheckInput,
    ) -> SdkResult<ConfigureHealthCheckOutput> {
        self.query(ElbOperation::ConfigureHealthCheck, input)
    }

    fn query<I, O>(&self, operation: ElbOperation, input: &I) -> SdkResult<O>
    where
        I: QuerySerialize + SdkRequest,
        O: XmlDeserialize + Default,
    {
        self.runtime.execute_query(operation.as_str(), input)
    }
}

impl ServiceClient for ElbClient {
    const SERVICE_NAME: &'static str = "ElasticLoadBalancing";

    fn from_config(config: ClientConfig) -> SdkResult<Self> {
        Self::new(config)
    }

    fn config(&self) -> &ClientConfig {
        self.runtime.config()
    }

    fn shutdown(&self) {
        self.runtime.shutdown();
    }
}

async_client! {
    /// Asynchronous Elastic Load Balancing client.
    pub struct ElbAsyncClient(ElbClient) {
        /// Create a load balancer.
        fn create_load_balancer_async, create_load_balancer_async_with_handler
            => create_load_balancer(CreateLoadBalancerInput) -> CreateLoadBalancerOutput;
        /// Delete a load balancer.
        fn delete_load_balancer_async, delete_load_balancer_async_with_handler
            => delete_load_balancer(DeleteLoadBalancerInput) -> DeleteLoadBalancerOutput;
        /// Describe load balancers.
        fn describe_load_balancers_async, describe_load_balancers_async_with_handler
            => describe_load_balancers(DescribeLoadBalancersInput) -> DescribeLoadBalancersOutput;
        /// Register instances with a load balancer.
        fn register_instances_with_load_balancer_async, register_instances_with_load_balancer_async_with_handler
            => register_instances_with_load_balancer(RegisterInstancesWithLoadBalancerInput) -> RegisterInstancesWithLoadBalancerOutput;
        /// Deregister instances from a load balancer.
        fn deregister_instances_from_load_balancer_async, deregister_instances_from_load_balancer_async_with_handler
            => deregister_instances_from_load_balancer(DeregisterInstancesFromLoadBalancerInput) -> DeregisterInstancesFromLoadBalancerOutput;
        /// Describe the health of registered instances.
        fn describe_instance_health_async, describe_instance_health_async_with_handler
            => describe_instance_health(DescribeInstanceHealthInput) -> DescribeInstanceHealthOutput;
        /// Replace the health check of a load balancer.
        fn configure_health_check_async, configure_health_check_async_with_handler
            => configure_health_check(ConfigureHealthCheckInput) -> ConfigureHealthCheckOutput;
    }
}
