//! Synchronous and asynchronous Auto Scaling clients.

use ruststack_sdk_core::{
    ClientConfig, ErrorCode, SdkRequest, SdkResult, ServiceClient, async_client,
};
use ruststack_sdk_runtime::{
    ClientRuntime, Protocol, QuerySerialize, ServiceMetadata, XmlDeserialize,
};

use crate::error::AutoScalingErrorCode;
use crate::input::{
    CreateAutoScalingGroupInput, CreateLaunchConfigurationInput, DeleteAutoScalingGroupInput,
    DeleteLaunchConfigurationInput, DescribeAutoScalingGroupsInput,
    DescribeLaunchConfigurationsInput, DescribeScalingActivitiesInput, SetDesiredCapacityInput,
    UpdateAutoScalingGroupInput,
};
use crate::operations::AutoScalingOperation;
use crate::output::{
    CreateAutoScalingGroupOutput, CreateLaunchConfigurationOutput, DeleteAutoScalingGroupOutput,
    DeleteLaunchConfigurationOutput, DescribeAutoScalingGroupsOutput,
    DescribeLaunchConfigurationsOutput, DescribeScalingActivitiesOutput, SetDesiredCapacityOutput,
    UpdateAutoScalingGroupOutput,
};

/// Auto Scaling service description.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "AutoScaling",
    signing_name: "autoscaling",
    endpoint_prefix: "autoscaling",
    api_version: "2011-01-01",
    protocol: Protocol::AwsQuery,
    json_target_prefix: None,
    global_region: None,
    xml_namespace: Some("http://autoscaling.amazonaws.com/doc/2011-01-01/"),
    error_codes: AutoScalingErrorCode::ALL,
};

/// Blocking Auto Scaling client.
///
/// Safe to share between threads; every call runs on the caller's thread.
#[derive(Debug)]
pub struct AutoScalingClient {
    runtime: ClientRuntime,
}

impl AutoScalingClient {
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

    /// Create an Auto Scaling group.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists`, `LimitExceeded` or `ResourceContention`
    /// service errors, or a client error.
    pub fn create_auto_scaling_group(
        &self,
        input: &CreateAutoScalingGroupInput,
    ) -> SdkResult<CreateAutoScalingGroupOutput> {
        self.query(AutoScalingOperation::CreateAutoScalingGroup, input)
    }

    /// Describe Auto Scaling groups.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNextToken` or a client error.
    pub fn describe_auto_scaling_groups(
        &self,
        input: &DescribeAutoScalingGroupsInput,
    ) -> SdkResult<DescribeAutoScalingGroupsOutput> {
        self.query(AutoScalingOperation::DescribeAutoScalingGroups, input)
    }

    /// Update an Auto Scaling group.
    ///
    /// # Errors
    ///
    /// Returns `ScalingActivityInProgress`, `ResourceContention` or a client
    /// error.
    pub fn update_auto_scaling_group(
        &self,
        input: &UpdateAutoScalingGroupInput,
    ) -> SdkResult<UpdateAutoScalingGroupOutput> {
        self.query(AutoScalingOperation::UpdateAutoScalingGroup, input)
    }

    /// Delete an Auto Scaling group.
    ///
    /// # Errors
    ///
    /// Returns `ResourceInUse`, `ScalingActivityInProgress` or a client
    /// error.
    pub fn delete_auto_scaling_group(
        &self,
        input: &DeleteAutoScalingGroupInput,
    ) -> SdkResult<DeleteAutoScalingGroupOutput> {
        self.query(AutoScalingOperation::DeleteAutoScalingGroup, input)
    }

    /// Set the desired capacity of a group.
    ///
    /// # Errors
    ///
    /// Returns `ScalingActivityInProgress` or a client error.
    pub fn set_desired_capacity(
        &self,
        input: &SetDesiredCapacityInput,
    ) -> SdkResult<SetDesiredCapacityOutput> {
        self.query(AutoScalingOperation::SetDesiredCapacity, input)
    }

    /// Describe scaling activities.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNextToken` or a client error.
    pub fn describe_scaling_activities(
        &self,
        input: &DescribeScalingActivitiesInput,
    ) -> SdkResult<DescribeScalingActivitiesOutput> {
        self.query(AutoScalingOperation::DescribeScalingActivities, input)
    }

    /// Create a launch configuration.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists`, `LimitExceeded` or a client error.
    pub fn create_launch_configuration(
        &self,
        input: &CreateLaunchConfigurationInput,
    ) -> SdkResult<CreateLaunchConfigurationOutput> {
        self.query(AutoScalingOperation::CreateLaunchConfiguration, input)
    }

    /// Describe launch configurations.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNextToken` or a client error.
    pub fn describe_launch_configurations(
        &self,
        input: &DescribeLaunchConfigurationsInput,
    ) -> SdkResult<DescribeLaunchConfigurationsOutput> {
        self.query(AutoScalingOperation::DescribeLaunchConfigurations, input)
    }

    /// Delete a launch configuration.
    ///
    /// # Errors
    ///
    /// Returns `ResourceInUse` or a client error.
    pub fn delete_launch_configuration(
        &self,
        input: &DeleteLaunchConfigurationInput,
    ) -> SdkResult<DeleteLaunchConfigurationOutput> {
        self.query(AutoScalingOperation::DeleteLaunchConfiguration, input)
    }

    fn query<I, O>(&self, operation: AutoScalingOperation, input: &I) -> SdkResult<O>
    where
        I: QuerySerialize + SdkRequest,
        O: XmlDeserialize + Default,
    {
        self.runtime.execute_query(operation.as_str(), input)
    }
}

impl ServiceClient for AutoScalingClient {
    const SERVICE_NAME: &'static str = "AutoScaling";

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
    /// Asynchronous Auto Scaling client.
    ///
    /// Operations run on a worker pool and return a
    /// [`ResponseFuture`](ruststack_sdk_core::ResponseFuture).
    pub struct AutoScalingAsyncClient(AutoScalingClient) {
        /// Create an Auto Scaling group.
        fn create_auto_scaling_group_async, create_auto_scaling_group_async_with_handler
            => create_auto_scaling_group(CreateAutoScalingGroupInput) -> CreateAutoScalingGroupOutput;
        /// Describe Auto Scaling groups.
        fn describe_auto_scaling_groups_async, describe_auto_scaling_groups_async_with_handler
            => describe_auto_scaling_groups(DescribeAutoScalingGroupsInput) -> DescribeAutoScalingGroupsOutput;
        /// Update an Auto Scaling group.
        fn update_auto_scaling_group_async, update_auto_scaling_group_async_with_handler
            => update_auto_scaling_group(UpdateAutoScalingGroupInput) -> UpdateAutoScalingGroupOutput;
        /// Delete an Auto Scaling group.
        fn delete_auto_scaling_group_async, delete_auto_scaling_group_async_with_handler
            => delete_auto_scaling_group(DeleteAutoScalingGroupInput) -> DeleteAutoScalingGroupOutput;
        /// Set the desired capacity of a group.
        fn set_desired_capacity_async, set_desired_capacity_async_with_handler
            => set_desired_capacity(SetDesiredCapacityInput) -> SetDesiredCapacityOutput;
        /// Describe scaling activities.
        fn describe_scaling_activities_async, describe_scaling_activities_async_with_handler
            => describe_scaling_activities(DescribeScalingActivitiesInput) -> DescribeScalingActivitiesOutput;
        /// Create a launch configuration.
        fn create_launch_configuration_async, create_launch_configuration_async_with_handler
            => create_launch_configuration(CreateLaunchConfigurationInput) -> CreateLaunchConfigurationOutput;
        /// Describe launch configurations.
        fn describe_launch_configurations_async, describe_launch_configurations_async_with_handler
            => describe_launch_configurations(DescribeLaunchConfigurationsInput) -> DescribeLaunchConfigurationsOutput;
        /// Delete a launch configuration.
        fn delete_launch_configuration_async, delete_launch_configuration_async_with_handler
            => delete_launch_configuration(DeleteLaunchConfigurationInput) -> DeleteLaunchConfigurationOutput;
    }
}
