//! Shared Elastic Load Balancing data types.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use ruststack_sdk_runtime::query::{QueryParams, QuerySerialize, key};
use ruststack_sdk_runtime::xml::XmlError;
use ruststack_sdk_runtime::xml::deserialize::{
    XmlDeserialize, deserialize_list, parse_i32, parse_timestamp, read_children,
    read_text_content, skip_element,
};

/// A listener: a front-end port and protocol mapped to an instance port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listener {
    /// `HTTP`, `HTTPS`, `TCP` or `SSL`.
    pub protocol: String,
    /// Port the load balancer listens on.
    pub load_balancer_port: i32,
    /// Protocol used towards the instances.
    pub instance_protocol: Option<String>,
    /// Port on the instances.
    pub instance_port: i32,
    /// Server certificate ARN for `HTTPS`/`SSL` listeners.
    pub ssl_certificate_id: Option<String>,
}

impl Listener {
    /// A listener forwarding `protocol` traffic from `port` to `instance_port`.
    pub fn new(protocol: impl Into<String>, port: i32, instance_port: i32) -> Self {
        Self {
            protocol: protocol.into(),
            load_balancer_port: port,
            instance_port,
            ..Self::default()
        }
    }
}

impl QuerySerialize for Listener {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(key(prefix, "Protocol"), self.protocol.as_str());
        params.push(key(prefix, "LoadBalancerPort"), self.load_balancer_port.to_string());
        params.push_opt(&key(prefix, "InstanceProtocol"), self.instance_protocol.as_ref());
        params.push(key(prefix, "InstancePort"), self.instance_port.to_string());
        params.push_opt(&key(prefix, "SSLCertificateId"), self.ssl_certificate_id.as_ref());
    }
}

impl XmlDeserialize for Listener {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut listener = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Protocol" => listener.protocol = read_text_content(reader)?,
                "LoadBalancerPort" => {
                    listener.load_balancer_port = parse_i32(&read_text_content(reader)?)?;
                }
                "InstanceProtocol" => listener.instance_protocol = Some(read_text_content(reader)?),
                "InstancePort" => listener.instance_port = parse_i32(&read_text_content(reader)?)?,
                "SSLCertificateId" => {
                    listener.ssl_certificate_id = Some(read_text_content(reader)?);
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(listener)
    }
}

/// A listener together with the policies enabled on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerDescription {
    /// The listener.
    pub listener: Listener,
    /// Names of the policies enabled on the listener.
    pub policy_names: Vec<String>,
}

impl XmlDeserialize for ListenerDescription {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut description = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Listener" => description.listener = Listener::deserialize_xml(reader)?,
                "PolicyNames" => description.policy_names = deserialize_list(reader, "member")?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(description)
    }
}

/// Health check settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthCheck {
    /// Target in the form `PROTOCOL:PORT[/PATH]`, e.g. `HTTP:80/health`.
    pub target: String,
    /// Seconds between checks.
    pub interval: i32,
    /// Seconds before a check times out.
    pub timeout: i32,
    /// Consecutive failures before an instance is unhealthy.
    pub unhealthy_threshold: i32,
    /// Consecutive successes before an instance is healthy.
    pub healthy_threshold: i32,
}

impl QuerySerialize for HealthCheck {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(key(prefix, "Target"), self.target.as_str());
        params.push(key(prefix, "Interval"), self.interval.to_string());
        params.push(key(prefix, "Timeout"), self.timeout.to_string());
        params.push(key(prefix, "UnhealthyThreshold"), self.unhealthy_threshold.to_string());
        params.push(key(prefix, "HealthyThreshold"), self.healthy_threshold.to_string());
    }
}

impl XmlDeserialize for HealthCheck {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut check = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Target" => check.target = read_text_content(reader)?,
                "Interval" => check.interval = parse_i32(&read_text_content(reader)?)?,
                "Timeout" => check.timeout = parse_i32(&read_text_content(reader)?)?,
                "UnhealthyThreshold" => {
                    check.unhealthy_threshold = parse_i32(&read_text_content(reader)?)?;
                }
                "HealthyThreshold" => {
                    check.healthy_threshold = parse_i32(&read_text_content(reader)?)?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(check)
    }
}

/// Reference to an EC2 instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Instance {
    /// Instance id.
    pub instance_id: String,
}

impl Instance {
    /// Refer to an instance by id.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}

impl QuerySerialize for Instance {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(key(prefix, "InstanceId"), self.instance_id.as_str());
    }
}

impl XmlDeserialize for Instance {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut instance = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "InstanceId" => instance.instance_id = read_text_content(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(instance)
    }
}

/// Health of a registered instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceState {
    /// Instance id.
    pub instance_id: String,
    /// `InService`, `OutOfService` or `Unknown`.
    pub state: String,
    /// `ELB` or `Instance` when out of service.
    pub reason_code: Option<String>,
    /// Explanation of the state.
    pub description: Option<String>,
}

impl XmlDeserialize for InstanceState {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut state = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "InstanceId" => state.instance_id = read_text_content(reader)?,
                "State" => state.state = read_text_content(reader)?,
                "ReasonCode" => state.reason_code = Some(read_text_content(reader)?),
                "Description" => state.description = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(state)
    }
}

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: Option<String>,
}

impl QuerySerialize for Tag {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(key(prefix, "Key"), self.key.as_str());
        params.push_opt(&key(prefix, "Value"), self.value.as_ref());
    }
}

/// A load balancer as returned by `DescribeLoadBalancers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBalancerDescription {
    /// Load balancer name.
    pub load_balancer_name: String,
    /// Public DNS name.
    pub dns_name: Option<String>,
    /// Route 53 hosted zone name of the DNS name.
    pub canonical_hosted_zone_name: Option<String>,
    /// Route 53 hosted zone id of the DNS name.
    pub canonical_hosted_zone_name_id: Option<String>,
    /// Listeners with their policies.
    pub listener_descriptions: Vec<ListenerDescription>,
    /// Health check settings.
    pub health_check: Option<HealthCheck>,
    /// Registered instances.
    pub instances: Vec<Instance>,
    /// Availability zones.
    pub availability_zones: Vec<String>,
    /// VPC subnets.
    pub subnets: Vec<String>,
    /// VPC security groups.
    pub security_groups: Vec<String>,
    /// VPC id.
    pub vpc_id: Option<String>,
    /// `internet-facing` or `internal`.
    pub scheme: Option<String>,
    /// Creation time.
    pub created_time: Option<DateTime<Utc>>,
}

impl XmlDeserialize for LoadBalancerDescription {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut lb = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "LoadBalancerName" => lb.load_balancer_name = read_text_content(reader)?,
                "DNSName" => lb.dns_name = Some(read_text_content(reader)?),
                "CanonicalHostedZoneName" => {
                    lb.canonical_hosted_zone_name = Some(read_text_content(reader)?);
                }
                "CanonicalHostedZoneNameID" => {
                    lb.canonical_hosted_zone_name_id = Some(read_text_content(reader)?);
                }
                "ListenerDescriptions" => {
                    lb.listener_descriptions = deserialize_list(reader, "member")?;
                }
                "HealthCheck" => lb.health_check = Some(HealthCheck::deserialize_xml(reader)?),
                "Instances" => lb.instances = deserialize_list(reader, "member")?,
                "AvailabilityZones" => lb.availability_zones = deserialize_list(reader, "member")?,
                "Subnets" => lb.subnets = deserialize_list(reader, "member")?,
                "SecurityGroups" => lb.security_groups = deserialize_list(reader, "member")?,
                "VPCId" => lb.vpc_id = Some(read_text_content(reader)?),
                "Scheme" => lb.scheme = Some(read_text_content(reader)?),
                "CreatedTime" => lb.created_time = Some(parse_timestamp(&read_text_content(reader)?)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(lb)
    }
}
