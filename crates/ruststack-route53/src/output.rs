//! Route 53 output types.
//!
//! Each output is read from the children of the response's root element,
//! e.g. `<GetHostedZoneResponse>`.

use quick_xml::Reader;
use ruststack_sdk_runtime::xml::XmlError;
use ruststack_sdk_runtime::xml::deserialize::{
    XmlDeserialize, deserialize_list, parse_bool, parse_i32, read_children, read_text_content,
    skip_element,
};

use crate::types::{ChangeInfo, DelegationSet, HostedZone, ResourceRecordSet, Vpc};

/// Output of the `CreateHostedZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateHostedZoneOutput {
    /// The new zone.
    pub hosted_zone: HostedZone,
    /// Status of the zone creation.
    pub change_info: ChangeInfo,
    /// Name servers assigned to the zone.
    pub delegation_set: Option<DelegationSet>,
    /// Associated VPC of a private zone.
    pub vpc: Option<Vpc>,
}

impl XmlDeserialize for CreateHostedZoneOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "HostedZone" => out.hosted_zone = HostedZone::deserialize_xml(reader)?,
                "ChangeInfo" => out.change_info = ChangeInfo::deserialize_xml(reader)?,
                "DelegationSet" => out.delegation_set = Some(DelegationSet::deserialize_xml(reader)?),
                "VPC" => out.vpc = Some(Vpc::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `GetHostedZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetHostedZoneOutput {
    /// The zone.
    pub hosted_zone: HostedZone,
    /// Name servers of a public zone.
    pub delegation_set: Option<DelegationSet>,
    /// VPCs of a private zone.
    pub vpcs: Vec<Vpc>,
}

impl XmlDeserialize for GetHostedZoneOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "HostedZone" => out.hosted_zone = HostedZone::deserialize_xml(reader)?,
                "DelegationSet" => out.delegation_set = Some(DelegationSet::deserialize_xml(reader)?),
                "VPCs" => out.vpcs = deserialize_list(reader, "VPC")?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `ListHostedZones` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHostedZonesOutput {
    /// Zones on this page.
    pub hosted_zones: Vec<HostedZone>,
    /// Marker the page started at.
    pub marker: Option<String>,
    /// Whether more pages follow.
    pub is_truncated: bool,
    /// Marker of the next page.
    pub next_marker: Option<String>,
    /// Page size used.
    pub max_items: Option<i32>,
}

impl XmlDeserialize for ListHostedZonesOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "HostedZones" => out.hosted_zones = deserialize_list(reader, "HostedZone")?,
                "Marker" => out.marker = Some(read_text_content(reader)?),
                "IsTruncated" => out.is_truncated = parse_bool(&read_text_content(reader)?)?,
                "NextMarker" => out.next_marker = Some(read_text_content(reader)?),
                "MaxItems" => out.max_items = Some(parse_i32(&read_text_content(reader)?)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the operations that only report a [`ChangeInfo`]:
/// `DeleteHostedZone`, `ChangeResourceRecordSets` and `GetChange`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeInfoOutput {
    /// Status of the change.
    pub change_info: ChangeInfo,
}

impl XmlDeserialize for ChangeInfoOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "ChangeInfo" => out.change_info = ChangeInfo::deserialize_xml(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}

/// Output of the `DeleteHostedZone` operation.
pub type DeleteHostedZoneOutput = ChangeInfoOutput;

/// Output of the `ChangeResourceRecordSets` operation.
pub type ChangeResourceRecordSetsOutput = ChangeInfoOutput;

/// Output of the `GetChange` operation.
pub type GetChangeOutput = ChangeInfoOutput;

/// Output of the `ListResourceRecordSets` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListResourceRecordSetsOutput {
    /// Record sets on this page.
    pub resource_record_sets: Vec<ResourceRecordSet>,
    /// Whether more pages follow.
    pub is_truncated: bool,
    /// Name to start the next page at.
    pub next_record_name: Option<String>,
    /// Type to start the next page at.
    pub next_record_type: Option<String>,
    /// Set identifier to start the next page at.
    pub next_record_identifier: Option<String>,
    /// Page size used.
    pub max_items: Option<i32>,
}

impl XmlDeserialize for ListResourceRecordSetsOutput {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut out = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "ResourceRecordSets" => {
                    out.resource_record_sets = deserialize_list(reader, "ResourceRecordSet")?;
                }
                "IsTruncated" => out.is_truncated = parse_bool(&read_text_content(reader)?)?,
                "NextRecordName" => out.next_record_name = Some(read_text_content(reader)?),
                "NextRecordType" => out.next_record_type = Some(read_text_content(reader)?),
                "NextRecordIdentifier" => {
                    out.next_record_identifier = Some(read_text_content(reader)?);
                }
                "MaxItems" => out.max_items = Some(parse_i32(&read_text_content(reader)?)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(out)
    }
}
