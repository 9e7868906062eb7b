//! Elastic Load Balancing input types.

use ruststack_sdk_core::{RequestOptions, impl_sdk_request};
use ruststack_sdk_runtime::query::{QueryParams, QuerySerialize};

use crate::types::{HealthCheck, Instance, Listener, Tag};

/// Input for the `CreateLoadBalancer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLoadBalancerInput {
    /// Name of the new load balancer.
    pub load_balancer_name: String,
    /// Listeners to create.
    pub listeners: Vec<Listener>,
    /// Availability zones (EC2-Classic).
    pub availability_zones: Vec<String>,
    /// Subnets (VPC).
    pub subnets: Vec<String>,
    /// Security groups (VPC).
    pub security_groups: Vec<String>,
    /// `internal` for an internal load balancer.
    pub scheme: Option<String>,
    /// Tags to create with the load balancer.
    pub tags: Vec<Tag>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for CreateLoadBalancerInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("LoadBalancerName", self.load_balancer_name.as_str());
        params.push_struct_list("Listeners", &self.listeners);
        params.push_list("AvailabilityZones", &self.availability_zones);
        params.push_list("Subnets", &self.subnets);
        params.push_list("SecurityGroups", &self.security_groups);
        params.push_opt("Scheme", self.scheme.as_ref());
        params.push_struct_list("Tags", &self.tags);
    }
}

/// Input for the `DeleteLoadBalancer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteLoadBalancerInput {
    /// Load balancer to delete.
    pub load_balancer_name: String,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DeleteLoadBalancerInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("LoadBalancerName", self.load_balancer_name.as_str());
    }
}

/// Input for the `DescribeLoadBalancers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLoadBalancersInput {
    /// Load balancers to describe. Empty describes all.
    pub load_balancer_names: Vec<String>,
    /// Marker from a previous page.
    pub marker: Option<String>,
    /// Page size.
    pub page_size: Option<i32>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DescribeLoadBalancersInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push_list("LoadBalancerNames", &self.load_balancer_names);
        params.push_opt("Marker", self.marker.as_ref());
        params.push_opt("PageSize", self.page_size);
    }
}

/// Input for the `RegisterInstancesWithLoadBalancer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterInstancesWithLoadBalancerInput {
    /// Target load balancer.
    pub load_balancer_name: String,
    /// Instances to register.
    pub instances: Vec<Instance>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

/// Input for the `DeregisterInstancesFromLoadBalancer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeregisterInstancesFromLoadBalancerInput {
    /// Target load balancer.
    pub load_balancer_name: String,
    /// Instances to deregister.
    pub instances: Vec<Instance>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

/// Input for the `DescribeInstanceHealth` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeInstanceHealthInput {
    /// Load balancer to inspect.
    pub load_balancer_name: String,
    /// Instances to report on. Empty reports on all registered instances.
    pub instances: Vec<Instance>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

macro_rules! instances_query {
    ($($ty:ty),+) => {
        $(
            impl QuerySerialize for $ty {
                fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
                    params.push("LoadBalancerName", self.load_balancer_name.as_str());
                    params.push_struct_list("Instances", &self.instances);
                }
            }
        )+
    };
}

instances_query!(
    RegisterInstancesWithLoadBalancerInput,
    DeregisterInstancesFromLoadBalancerInput,
    DescribeInstanceHealthInput
);

/// Input for the `ConfigureHealthCheck` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureHealthCheckInput {
    /// Target load balancer.
    pub load_balancer_name: String,
    /// New health check settings.
    pub health_check: HealthCheck,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for ConfigureHealthCheckInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("LoadBalancerName", self.load_balancer_name.as_str());
        params.push_struct("HealthCheck", Some(&self.health_check));
    }
}

impl_sdk_request!(
    CreateLoadBalancerInput,
    DeleteLoadBalancerInput,
    DescribeLoadBalancersInput,
    RegisterInstancesWithLoadBalancerInput,
    DeregisterInstancesFromLoadBalancerInput,
    DescribeInstanceHealthInput,
    ConfigureHealthCheckInput,
);
