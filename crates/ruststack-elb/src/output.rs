//! Elastic Load Balancing output types.

use quick_xml::Reader;
use ruststack_sdk_runtime::xml::XmlError;
use ruststack_sdk_runtime::xml::deserialize::{
    XmlDeserialize, deserialize_list, read_children, read_text_content, skip_element,
};

use crate::types::{HealthCheck, Instance, InstanceState, LoadBalancerDescription};

/// Output of the `CreateLoadBalancer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLoadBalancerOutput {
    /// Public DNS name of the new load balancer.
    pub dns_name: Option<String>,
}

impl XmlDeserialize for CreateLoadBalancerOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "DNSName" => out.dns_name = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `DeleteLoadBalancer` operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteLoadBalancerOutput {}

impl XmlDeserialize for DeleteLoadBalancerOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        skip_element(reader)?;
        Ok(Self {})
    }
}

/// Output of the `DescribeLoadBalancers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLoadBalancersOutput {
    /// The load balancers on this page.
    pub load_balancer_descriptions: Vec<LoadBalancerDescription>,
    /// Marker for the next page.
    pub next_marker: Option<String>,
}

impl XmlDeserialize for DescribeLoadBalancersOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "LoadBalancerDescriptions" => {
                    out.load_balancer_descriptions = deserialize_list(reader, "member")?;
                }
                "NextMarker" => out.next_marker = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of `RegisterInstancesWithLoadBalancer` and
/// `DeregisterInstancesFromLoadBalancer`: the instances registered afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisteredInstancesOutput {
    /// Instances registered with the load balancer after the change.
    pub instances: Vec<Instance>,
}

impl XmlDeserialize for RegisteredInstancesOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Instances" => out.instances = deserialize_list(reader, "member")?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `RegisterInstancesWithLoadBalancer` operation.
pub type RegisterInstancesWithLoadBalancerOutput = RegisteredInstancesOutput;

/// Output of the `DeregisterInstancesFromLoadBalancer` operation.
pub type DeregisterInstancesFromLoadBalancerOutput = RegisteredInstancesOutput;

/// Output of the `DescribeInstanceHealth` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeInstanceHealthOutput {
    /// State of each requested instance.
    pub instance_states: Vec<InstanceState>,
}

impl XmlDeserialize for DescribeInstanceHealthOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "InstanceStates" => out.instance_states = deserialize_list(reader, "member")?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `ConfigureHealthCheck` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigureHealthCheckOutput {
    /// The health check now in effect.
    pub health_check: Option<HealthCheck>,
}

impl XmlDeserialize for ConfigureHealthCheckOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "HealthCheck" => out.health_check = Some(HealthCheck::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}
