//! Auto Scaling input types.
//!
//! Every input carries [`RequestOptions`] and flattens itself into query
//! parameters through [`QuerySerialize`].

use ruststack_sdk_core::{RequestOptions, impl_sdk_request};
use ruststack_sdk_runtime::query::{QueryParams, QuerySerialize};

use crate::types::{InstanceMonitoring, Tag};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// Input for the `CreateAutoScalingGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAutoScalingGroupInput {
    /// Name of the new group.
    pub auto_scaling_group_name: String,
    /// Launch configuration for new instances.
    pub launch_configuration_name: Option<String>,
    /// Minimum size.
    pub min_size: i32,
    /// Maximum size.
    pub max_size: i32,
    /// Initial desired capacity. Defaults to `min_size`.
    pub desired_capacity: Option<i32>,
    /// Seconds between scaling activities.
    pub default_cooldown: Option<i32>,
    /// Availability zones.
    pub availability_zones: Vec<String>,
    /// Classic load balancers to attach.
    pub load_balancer_names: Vec<String>,
    /// `EC2` or `ELB`.
    pub health_check_type: Option<String>,
    /// Health check grace period in seconds.
    pub health_check_grace_period: Option<i32>,
    /// Comma-separated subnet ids.
    pub vpc_zone_identifier: Option<String>,
    /// Tags to create with the group.
    pub tags: Vec<Tag>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for CreateAutoScalingGroupInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("AutoScalingGroupName", self.auto_scaling_group_name.as_str());
        params.push_opt("LaunchConfigurationName", self.launch_configuration_name.as_ref());
        params.push("MinSize", self.min_size.to_string());
        params.push("MaxSize", self.max_size.to_string());
        params.push_opt("DesiredCapacity", self.desired_capacity);
        params.push_opt("DefaultCooldown", self.default_cooldown);
        params.push_list("AvailabilityZones", &self.availability_zones);
        params.push_list("LoadBalancerNames", &self.load_balancer_names);
        params.push_opt("HealthCheckType", self.health_check_type.as_ref());
        params.push_opt("HealthCheckGracePeriod", self.health_check_grace_period);
        params.push_opt("VPCZoneIdentifier", self.vpc_zone_identifier.as_ref());
        params.push_struct_list("Tags", &self.tags);
    }
}

/// Input for the `DescribeAutoScalingGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeAutoScalingGroupsInput {
    /// Groups to describe. Empty describes all groups.
    pub auto_scaling_group_names: Vec<String>,
    /// Page size.
    pub max_records: Option<i32>,
    /// Token from a previous page.
    pub next_token: Option<String>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DescribeAutoScalingGroupsInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push_list("AutoScalingGroupNames", &self.auto_scaling_group_names);
        params.push_opt("MaxRecords", self.max_records);
        params.push_opt("NextToken", self.next_token.as_ref());
    }
}

/// Input for the `UpdateAutoScalingGroup` operation.
///
/// Only the fields that are set are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAutoScalingGroupInput {
    /// Group to update.
    pub auto_scaling_group_name: String,
    /// New launch configuration.
    pub launch_configuration_name: Option<String>,
    /// New minimum size.
    pub min_size: Option<i32>,
    /// New maximum size.
    pub max_size: Option<i32>,
    /// New desired capacity.
    pub desired_capacity: Option<i32>,
    /// New cooldown.
    pub default_cooldown: Option<i32>,
    /// New availability zones.
    pub availability_zones: Vec<String>,
    /// New health check type.
    pub health_check_type: Option<String>,
    /// New grace period.
    pub health_check_grace_period: Option<i32>,
    /// New subnets.
    pub vpc_zone_identifier: Option<String>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for UpdateAutoScalingGroupInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("AutoScalingGroupName", self.auto_scaling_group_name.as_str());
        params.push_opt("LaunchConfigurationName", self.launch_configuration_name.as_ref());
        params.push_opt("MinSize", self.min_size);
        params.push_opt("MaxSize", self.max_size);
        params.push_opt("DesiredCapacity", self.desired_capacity);
        params.push_opt("DefaultCooldown", self.default_cooldown);
        params.push_list("AvailabilityZones", &self.availability_zones);
        params.push_opt("HealthCheckType", self.health_check_type.as_ref());
        params.push_opt("HealthCheckGracePeriod", self.health_check_grace_period);
        params.push_opt("VPCZoneIdentifier", self.vpc_zone_identifier.as_ref());
    }
}

/// Input for the `DeleteAutoScalingGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteAutoScalingGroupInput {
    /// Group to delete.
    pub auto_scaling_group_name: String,
    /// Terminate the group's instances instead of requiring an empty group.
    pub force_delete: Option<bool>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DeleteAutoScalingGroupInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("AutoScalingGroupName", self.auto_scaling_group_name.as_str());
        params.push_opt("ForceDelete", self.force_delete);
    }
}

/// Input for the `SetDesiredCapacity` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDesiredCapacityInput {
    /// Group to resize.
    pub auto_scaling_group_name: String,
    /// New desired capacity.
    pub desired_capacity: i32,
    /// Wait for the cooldown to expire first.
    pub honor_cooldown: Option<bool>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for SetDesiredCapacityInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("AutoScalingGroupName", self.auto_scaling_group_name.as_str());
        params.push("DesiredCapacity", self.desired_capacity.to_string());
        params.push_opt("HonorCooldown", self.honor_cooldown);
    }
}

/// Input for the `DescribeScalingActivities` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeScalingActivitiesInput {
    /// Specific activities to describe.
    pub activity_ids: Vec<String>,
    /// Restrict to one group.
    pub auto_scaling_group_name: Option<String>,
    /// Page size.
    pub max_records: Option<i32>,
    /// Token from a previous page.
    pub next_token: Option<String>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DescribeScalingActivitiesInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push_list("ActivityIds", &self.activity_ids);
        params.push_opt("AutoScalingGroupName", self.auto_scaling_group_name.as_ref());
        params.push_opt("MaxRecords", self.max_records);
        params.push_opt("NextToken", self.next_token.as_ref());
    }
}

// ---------------------------------------------------------------------------
// Launch configurations
// ---------------------------------------------------------------------------

/// Input for the `CreateLaunchConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLaunchConfigurationInput {
    /// Name of the new configuration.
    pub launch_configuration_name: String,
    /// AMI id.
    pub image_id: Option<String>,
    /// Instance type.
    pub instance_type: Option<String>,
    /// Key pair name.
    pub key_name: Option<String>,
    /// Security groups.
    pub security_groups: Vec<String>,
    /// Base64 user data.
    pub user_data: Option<String>,
    /// Detailed monitoring.
    pub instance_monitoring: Option<InstanceMonitoring>,
    /// IAM instance profile.
    pub iam_instance_profile: Option<String>,
    /// Assign public IP addresses.
    pub associate_public_ip_address: Option<bool>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for CreateLaunchConfigurationInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("LaunchConfigurationName", self.launch_configuration_name.as_str());
        params.push_opt("ImageId", self.image_id.as_ref());
        params.push_opt("InstanceType", self.instance_type.as_ref());
        params.push_opt("KeyName", self.key_name.as_ref());
        params.push_list("SecurityGroups", &self.security_groups);
        params.push_opt("UserData", self.user_data.as_ref());
        params.push_struct("InstanceMonitoring", self.instance_monitoring.as_ref());
        params.push_opt("IamInstanceProfile", self.iam_instance_profile.as_ref());
        params.push_opt("AssociatePublicIpAddress", self.associate_public_ip_address);
    }
}

/// Input for the `DescribeLaunchConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLaunchConfigurationsInput {
    /// Configurations to describe. Empty describes all.
    pub launch_configuration_names: Vec<String>,
    /// Page size.
    pub max_records: Option<i32>,
    /// Token from a previous page.
    pub next_token: Option<String>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DescribeLaunchConfigurationsInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push_list("LaunchConfigurationNames", &self.launch_configuration_names);
        params.push_opt("MaxRecords", self.max_records);
        params.push_opt("NextToken", self.next_token.as_ref());
    }
}

/// Input for the `DeleteLaunchConfiguration` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteLaunchConfigurationInput {
    /// Configuration to delete.
    pub launch_configuration_name: String,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl QuerySerialize for DeleteLaunchConfigurationInput {
    fn serialize_query(&self, _prefix: &str, params: &mut QueryParams) {
        params.push("LaunchConfigurationName", self.launch_configuration_name.as_str());
    }
}

impl_sdk_request!(
    CreateAutoScalingGroupInput,
    DescribeAutoScalingGroupsInput,
    UpdateAutoScalingGroupInput,
    DeleteAutoScalingGroupInput,
    SetDesiredCapacityInput,
    DescribeScalingActivitiesInput,
    CreateLaunchConfigurationInput,
    DescribeLaunchConfigurationsInput,
    DeleteLaunchConfigurationInput,
);
