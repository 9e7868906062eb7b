//! Shared Auto Scaling data types.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use ruststack_sdk_runtime::query::{QueryParams, QuerySerialize, key};
use ruststack_sdk_runtime::xml::XmlError;
use ruststack_sdk_runtime::xml::deserialize::{
    XmlDeserialize, deserialize_list, parse_bool, parse_i32, parse_timestamp, read_children,
    read_text_content, skip_element,
};

/// A tag on an Auto Scaling group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: Option<String>,
    /// Whether instances launched by the group inherit the tag.
    pub propagate_at_launch: Option<bool>,
    /// Name of the group the tag belongs to.
    pub resource_id: Option<String>,
    /// Always `auto-scaling-group`.
    pub resource_type: Option<String>,
}

impl Tag {
    /// A tag with a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

impl QuerySerialize for Tag {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(key(prefix, "Key"), self.key.as_str());
        params.push_opt(&key(prefix, "Value"), self.value.as_ref());
        params.push_opt(&key(prefix, "PropagateAtLaunch"), self.propagate_at_launch);
        params.push_opt(&key(prefix, "ResourceId"), self.resource_id.as_ref());
        params.push_opt(&key(prefix, "ResourceType"), self.resource_type.as_ref());
    }
}

impl XmlDeserialize for Tag {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut tag = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Key" => tag.key = read_text_content(reader)?,
                "Value" => tag.value = Some(read_text_content(reader)?),
                "PropagateAtLaunch" => {
                    tag.propagate_at_launch = Some(parse_bool(&read_text_content(reader)?)?);
                }
                "ResourceId" => tag.resource_id = Some(read_text_content(reader)?),
                "ResourceType" => tag.resource_type = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(tag)
    }
}

/// An EC2 instance that belongs to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    /// Instance id.
    pub instance_id: String,
    /// Instance type, e.g. `t3.micro`.
    pub instance_type: Option<String>,
    /// Availability zone the instance runs in.
    pub availability_zone: String,
    /// Lifecycle state, e.g. `InService`.
    pub lifecycle_state: String,
    /// `Healthy` or `Unhealthy`.
    pub health_status: String,
    /// Launch configuration the instance was started from.
    pub launch_configuration_name: Option<String>,
    /// Whether the instance is protected from scale-in.
    pub protected_from_scale_in: Option<bool>,
}

impl XmlDeserialize for Instance {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut instance = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "InstanceId" => instance.instance_id = read_text_content(reader)?,
                "InstanceType" => instance.instance_type = Some(read_text_content(reader)?),
                "AvailabilityZone" => instance.availability_zone = read_text_content(reader)?,
                "LifecycleState" => instance.lifecycle_state = read_text_content(reader)?,
                "HealthStatus" => instance.health_status = read_text_content(reader)?,
                "LaunchConfigurationName" => {
                    instance.launch_configuration_name = Some(read_text_content(reader)?);
                }
                "ProtectedFromScaleIn" => {
                    instance.protected_from_scale_in =
                        Some(parse_bool(&read_text_content(reader)?)?);
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(instance)
    }
}

/// An Auto Scaling group as returned by `DescribeAutoScalingGroups`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoScalingGroup {
    /// Group name.
    pub auto_scaling_group_name: String,
    /// Group ARN.
    pub auto_scaling_group_arn: Option<String>,
    /// Launch configuration used for new instances.
    pub launch_configuration_name: Option<String>,
    /// Minimum group size.
    pub min_size: i32,
    /// Maximum group size.
    pub max_size: i32,
    /// Desired group size.
    pub desired_capacity: i32,
    /// Seconds between scaling activities.
    pub default_cooldown: i32,
    /// Availability zones of the group.
    pub availability_zones: Vec<String>,
    /// Classic load balancers attached to the group.
    pub load_balancer_names: Vec<String>,
    /// `EC2` or `ELB`.
    pub health_check_type: String,
    /// Grace period before health checks start, in seconds.
    pub health_check_grace_period: Option<i32>,
    /// Instances currently in the group.
    pub instances: Vec<Instance>,
    /// Creation time.
    pub created_time: Option<DateTime<Utc>>,
    /// Comma-separated subnet ids.
    pub vpc_zone_identifier: Option<String>,
    /// Set while the group is being deleted.
    pub status: Option<String>,
    /// Tags on the group.
    pub tags: Vec<Tag>,
}

impl XmlDeserialize for AutoScalingGroup {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut group = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "AutoScalingGroupName" => group.auto_scaling_group_name = read_text_content(reader)?,
                "AutoScalingGroupARN" => {
                    group.auto_scaling_group_arn = Some(read_text_content(reader)?);
                }
                "LaunchConfigurationName" => {
                    group.launch_configuration_name = Some(read_text_content(reader)?);
                }
                "MinSize" => group.min_size = parse_i32(&read_text_content(reader)?)?,
                "MaxSize" => group.max_size = parse_i32(&read_text_content(reader)?)?,
                "DesiredCapacity" => {
                    group.desired_capacity = parse_i32(&read_text_content(reader)?)?;
                }
                "DefaultCooldown" => {
                    group.default_cooldown = parse_i32(&read_text_content(reader)?)?;
                }
                "AvailabilityZones" => {
                    group.availability_zones = deserialize_list(reader, "member")?;
                }
                "LoadBalancerNames" => {
                    group.load_balancer_names = deserialize_list(reader, "member")?;
                }
                "HealthCheckType" => group.health_check_type = read_text_content(reader)?,
                "HealthCheckGracePeriod" => {
                    group.health_check_grace_period =
                        Some(parse_i32(&read_text_content(reader)?)?);
                }
                "Instances" => group.instances = deserialize_list(reader, "member")?,
                "CreatedTime" => {
                    group.created_time = Some(parse_timestamp(&read_text_content(reader)?)?);
                }
                "VPCZoneIdentifier" => group.vpc_zone_identifier = Some(read_text_content(reader)?),
                "Status" => group.status = Some(read_text_content(reader)?),
                "Tags" => group.tags = deserialize_list(reader, "member")?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(group)
    }
}

/// Detailed monitoring setting of a launch configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceMonitoring {
    /// Whether detailed monitoring is enabled.
    pub enabled: Option<bool>,
}

impl QuerySerialize for InstanceMonitoring {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push_opt(&key(prefix, "Enabled"), self.enabled);
    }
}

impl XmlDeserialize for InstanceMonitoring {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut monitoring = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Enabled" => monitoring.enabled = Some(parse_bool(&read_text_content(reader)?)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(monitoring)
    }
}

/// A launch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchConfiguration {
    /// Configuration name.
    pub launch_configuration_name: String,
    /// Configuration ARN.
    pub launch_configuration_arn: Option<String>,
    /// AMI id.
    pub image_id: String,
    /// Key pair name.
    pub key_name: Option<String>,
    /// Security groups assigned to instances.
    pub security_groups: Vec<String>,
    /// Base64 user data.
    pub user_data: Option<String>,
    /// Instance type.
    pub instance_type: String,
    /// Detailed monitoring setting.
    pub instance_monitoring: Option<InstanceMonitoring>,
    /// IAM instance profile name or ARN.
    pub iam_instance_profile: Option<String>,
    /// Whether instances get a public IP address.
    pub associate_public_ip_address: Option<bool>,
    /// Creation time.
    pub created_time: Option<DateTime<Utc>>,
}

impl XmlDeserialize for LaunchConfiguration {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut lc = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "LaunchConfigurationName" => lc.launch_configuration_name = read_text_content(reader)?,
                "LaunchConfigurationARN" => {
                    lc.launch_configuration_arn = Some(read_text_content(reader)?);
                }
                "ImageId" => lc.image_id = read_text_content(reader)?,
                "KeyName" => lc.key_name = Some(read_text_content(reader)?),
                "SecurityGroups" => lc.security_groups = deserialize_list(reader, "member")?,
                "UserData" => lc.user_data = Some(read_text_content(reader)?),
                "InstanceType" => lc.instance_type = read_text_content(reader)?,
                "InstanceMonitoring" => {
                    lc.instance_monitoring = Some(InstanceMonitoring::deserialize_xml(reader)?);
                }
                "IamInstanceProfile" => lc.iam_instance_profile = Some(read_text_content(reader)?),
                "AssociatePublicIpAddress" => {
                    lc.associate_public_ip_address =
                        Some(parse_bool(&read_text_content(reader)?)?);
                }
                "CreatedTime" => lc.created_time = Some(parse_timestamp(&read_text_content(reader)?)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(lc)
    }
}

/// A scaling activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    /// Activity id.
    pub activity_id: String,
    /// Group the activity belongs to.
    pub auto_scaling_group_name: String,
    /// Summary of the activity.
    pub description: Option<String>,
    /// Why the activity started.
    pub cause: String,
    /// Start time.
    pub start_time: Option<DateTime<Utc>>,
    /// End time, once finished.
    pub end_time: Option<DateTime<Utc>>,
    /// Status code, e.g. `Successful` or `InProgress`.
    pub status_code: String,
    /// Status details.
    pub status_message: Option<String>,
    /// Completion percentage.
    pub progress: Option<i32>,
    /// Further details in JSON.
    pub details: Option<String>,
}

impl XmlDeserialize for Activity {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut activity = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "ActivityId" => activity.activity_id = read_text_content(reader)?,
                "AutoScalingGroupName" => {
                    activity.auto_scaling_group_name = read_text_content(reader)?;
                }
                "Description" => activity.description = Some(read_text_content(reader)?),
                "Cause" => activity.cause = read_text_content(reader)?,
                "StartTime" => {
                    activity.start_time = Some(parse_timestamp(&read_text_content(reader)?)?);
                }
                "EndTime" => activity.end_time = Some(parse_timestamp(&read_text_content(reader)?)?),
                "StatusCode" => activity.status_code = read_text_content(reader)?,
                "StatusMessage" => activity.status_message = Some(read_text_content(reader)?),
                "Progress" => activity.progress = Some(parse_i32(&read_text_content(reader)?)?),
                "Details" => activity.details = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(activity)
    }
}
