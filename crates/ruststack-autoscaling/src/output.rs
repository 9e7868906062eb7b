//! Auto Scaling output types.
//!
//! Each output is decoded from the `<{Operation}Result>` element of the query
//! response. Operations without a result element yield the default value.

use quick_xml::Reader;
use ruststack_sdk_runtime::xml::XmlError;
use ruststack_sdk_runtime::xml::deserialize::{
    XmlDeserialize, deserialize_list, read_children, read_text_content, skip_element,
};

use crate::types::{Activity, AutoScalingGroup, LaunchConfiguration};

/// Declare outputs of operations that return nothing but request metadata.
macro_rules! empty_output {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name {}

            impl XmlDeserialize for $name {
                fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
                    skip_element(reader)?;
                    Ok(Self {})
                }
            }
        )+
    };
}

empty_output! {
    /// Output of the `CreateAutoScalingGroup` operation.
    CreateAutoScalingGroupOutput;
    /// Output of the `UpdateAutoScalingGroup` operation.
    UpdateAutoScalingGroupOutput;
    /// Output of the `DeleteAutoScalingGroup` operation.
    DeleteAutoScalingGroupOutput;
    /// Output of the `SetDesiredCapacity` operation.
    SetDesiredCapacityOutput;
    /// Output of the `CreateLaunchConfiguration` operation.
    CreateLaunchConfigurationOutput;
    /// Output of the `DeleteLaunchConfiguration` operation.
    DeleteLaunchConfigurationOutput;
}

/// Output of the `DescribeAutoScalingGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeAutoScalingGroupsOutput {
    /// The groups on this page.
    pub auto_scaling_groups: Vec<AutoScalingGroup>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl XmlDeserialize for DescribeAutoScalingGroupsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "AutoScalingGroups" => out.auto_scaling_groups = deserialize_list(reader, "member")?,
                "NextToken" => out.next_token = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `DescribeScalingActivities` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeScalingActivitiesOutput {
    /// The activities on this page, most recent first.
    pub activities: Vec<Activity>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl XmlDeserialize for DescribeScalingActivitiesOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Activities" => out.activities = deserialize_list(reader, "member")?,
                "NextToken" => out.next_token = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `DescribeLaunchConfigurations` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLaunchConfigurationsOutput {
    /// The launch configurations on this page.
    pub launch_configurations: Vec<LaunchConfiguration>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

impl XmlDeserialize for DescribeLaunchConfigurationsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "LaunchConfigurations" => {
                    out.launch_configurations = deserialize_list(reader, "member")?;
                }
                "NextToken" => out.next_token = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}
