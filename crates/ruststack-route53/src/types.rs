//! Route 53 data types, read from and written to REST-XML bodies.

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use quick_xml::{Reader, Writer};
use ruststack_sdk_runtime::xml::XmlError;
use ruststack_sdk_runtime::xml::deserialize::{
    XmlDeserialize, deserialize_list, parse_bool, parse_i64, parse_timestamp, read_children,
    read_text_content, skip_element,
};
use ruststack_sdk_runtime::xml::serialize::{
    XmlSerialize, write_list, write_optional_bool, write_optional_i64, write_optional_struct,
    write_optional_text, write_struct, write_text_element,
};

// ---------------------------------------------------------------------------
// Hosted zones
// ---------------------------------------------------------------------------

/// A hosted zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostedZone {
    /// Zone id as returned by the service, e.g. `/hostedzone/Z1D633PJN98FT9`.
    pub id: String,
    /// Fully qualified domain name, with the trailing dot.
    pub name: String,
    /// Idempotency token the zone was created with.
    pub caller_reference: String,
    /// Comment and visibility.
    pub config: Option<HostedZoneConfig>,
    /// Number of record sets in the zone.
    pub resource_record_set_count: Option<i64>,
}

impl XmlDeserialize for HostedZone {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut zone = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Id" => zone.id = read_text_content(reader)?,
                "Name" => zone.name = read_text_content(reader)?,
                "CallerReference" => zone.caller_reference = read_text_content(reader)?,
                "Config" => zone.config = Some(HostedZoneConfig::deserialize_xml(reader)?),
                "ResourceRecordSetCount" => {
                    zone.resource_record_set_count = Some(parse_i64(&read_text_content(reader)?)?);
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(zone)
    }
}

/// Optional settings of a hosted zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostedZoneConfig {
    /// Free-form comment.
    pub comment: Option<String>,
    /// Whether the zone is private to associated VPCs.
    pub private_zone: Option<bool>,
}

impl XmlSerialize for HostedZoneConfig {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Comment", self.comment.as_deref())?;
        write_optional_bool(writer, "PrivateZone", self.private_zone)
    }
}

impl XmlDeserialize for HostedZoneConfig {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut config = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Comment" => config.comment = Some(read_text_content(reader)?),
                "PrivateZone" => config.private_zone = Some(parse_bool(&read_text_content(reader)?)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(config)
    }
}

/// A VPC a private zone is associated with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vpc {
    /// Region of the VPC.
    pub vpc_region: Option<String>,
    /// VPC id.
    pub vpc_id: Option<String>,
}

impl XmlSerialize for Vpc {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "VPCRegion", self.vpc_region.as_deref())?;
        write_optional_text(writer, "VPCId", self.vpc_id.as_deref())
    }
}

impl XmlDeserialize for Vpc {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut vpc = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "VPCRegion" => vpc.vpc_region = Some(read_text_content(reader)?),
                "VPCId" => vpc.vpc_id = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(vpc)
    }
}

/// Name servers assigned to a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegationSet {
    /// Reusable delegation set id, if any.
    pub id: Option<String>,
    /// Authoritative name servers.
    pub name_servers: Vec<String>,
}

impl XmlDeserialize for DelegationSet {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut set = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Id" => set.id = Some(read_text_content(reader)?),
                "NameServers" => set.name_servers = deserialize_list(reader, "NameServer")?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(set)
    }
}

// ---------------------------------------------------------------------------
// Changes
// ---------------------------------------------------------------------------

/// Propagation status of a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeInfo {
    /// Change id as returned by the service, e.g. `/change/C2682N5HXP0BZ4`.
    pub id: String,
    /// `PENDING` or `INSYNC`.
    pub status: String,
    /// When the change was submitted.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Comment from the change batch.
    pub comment: Option<String>,
}

impl ChangeInfo {
    /// Whether the change has reached every Route 53 name server.
    #[must_use]
    pub fn is_in_sync(&self) -> bool {
        self.status == "INSYNC"
    }
}

impl XmlDeserialize for ChangeInfo {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut info = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Id" => info.id = read_text_content(reader)?,
                "Status" => info.status = read_text_content(reader)?,
                "SubmittedAt" => info.submitted_at = Some(parse_timestamp(&read_text_content(reader)?)?),
                "Comment" => info.comment = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(info)
    }
}

/// What a [`Change`] does to its record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    /// Create the record set; fails if it exists.
    Create,
    /// Delete the record set; must match it exactly.
    Delete,
    /// Create the record set or replace it.
    #[default]
    Upsert,
}

impl ChangeAction {
    /// Wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::Upsert => "UPSERT",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One change in a [`ChangeBatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Change {
    /// Action to take.
    pub action: ChangeAction,
    /// Record set the action applies to.
    pub resource_record_set: ResourceRecordSet,
}

impl Change {
    /// A change applying `action` to `record_set`.
    #[must_use]
    pub fn new(action: ChangeAction, record_set: ResourceRecordSet) -> Self {
        Self {
            action,
            resource_record_set: record_set,
        }
    }
}

impl XmlSerialize for Change {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Action", self.action.as_str())?;
        write_struct(writer, "ResourceRecordSet", &self.resource_record_set)
    }
}

/// Changes applied atomically by `ChangeResourceRecordSets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    /// Optional comment, echoed in [`ChangeInfo`].
    pub comment: Option<String>,
    /// The changes, applied in order.
    pub changes: Vec<Change>,
}

impl XmlSerialize for ChangeBatch {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Comment", self.comment.as_deref())?;
        write_list(writer, "Changes", &self.changes, |w, change| {
            write_struct(w, "Change", change)
        })
    }
}

// ---------------------------------------------------------------------------
// Record sets
// ---------------------------------------------------------------------------

/// A single record value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Value in zone-file syntax, e.g. `192.0.2.44`.
    pub value: String,
}

impl ResourceRecord {
    /// A record with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl XmlSerialize for ResourceRecord {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Value", &self.value)
    }
}

impl XmlDeserialize for ResourceRecord {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut record = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Value" => record.value = read_text_content(reader)?,
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(record)
    }
}

/// Target of an alias record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTarget {
    /// Hosted zone of the target.
    pub hosted_zone_id: String,
    /// DNS name of the target, e.g. a load balancer.
    pub dns_name: String,
    /// Whether the alias inherits the target's health.
    pub evaluate_target_health: bool,
}

impl XmlSerialize for AliasTarget {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "HostedZoneId", &self.hosted_zone_id)?;
        write_text_element(writer, "DNSName", &self.dns_name)?;
        write_optional_bool(writer, "EvaluateTargetHealth", Some(self.evaluate_target_health))
    }
}

impl XmlDeserialize for AliasTarget {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut target = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "HostedZoneId" => target.hosted_zone_id = read_text_content(reader)?,
                "DNSName" => target.dns_name = read_text_content(reader)?,
                "EvaluateTargetHealth" => {
                    target.evaluate_target_health = parse_bool(&read_text_content(reader)?)?;
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(target)
    }
}

/// A set of records sharing a name and type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRecordSet {
    /// Record name, e.g. `www.example.com.`.
    pub name: String,
    /// Record type, e.g. `A`, `CNAME`, `TXT`.
    pub record_type: String,
    /// Distinguishes weighted or failover sets with the same name and type.
    pub set_identifier: Option<String>,
    /// Relative weight of a weighted set.
    pub weight: Option<i64>,
    /// Failover role, `PRIMARY` or `SECONDARY`.
    pub failover: Option<String>,
    /// Time to live in seconds. Absent for alias records.
    pub ttl: Option<i64>,
    /// Record values. Empty for alias records.
    pub resource_records: Vec<ResourceRecord>,
    /// Alias target instead of record values.
    pub alias_target: Option<AliasTarget>,
    /// Health check the set is tied to.
    pub health_check_id: Option<String>,
}

impl ResourceRecordSet {
    /// A plain record set with a TTL and values.
    pub fn new<V: Into<String>>(
        name: impl Into<String>,
        record_type: impl Into<String>,
        ttl: i64,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            ttl: Some(ttl),
            resource_records: values.into_iter().map(ResourceRecord::new).collect(),
            ..Self::default()
        }
    }
}

impl XmlSerialize for ResourceRecordSet {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Name", &self.name)?;
        write_text_element(writer, "Type", &self.record_type)?;
        write_optional_text(writer, "SetIdentifier", self.set_identifier.as_deref())?;
        write_optional_i64(writer, "Weight", self.weight)?;
        write_optional_text(writer, "Failover", self.failover.as_deref())?;
        write_optional_i64(writer, "TTL", self.ttl)?;
        write_list(writer, "ResourceRecords", &self.resource_records, |w, record| {
            write_struct(w, "ResourceRecord", record)
        })?;
        write_optional_struct(writer, "AliasTarget", self.alias_target.as_ref())?;
        write_optional_text(writer, "HealthCheckId", self.health_check_id.as_deref())
    }
}

impl XmlDeserialize for ResourceRecordSet {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut set = Self::default();
        read_children(reader, |reader, name| {
            match name {
                "Name" => set.name = read_text_content(reader)?,
                "Type" => set.record_type = read_text_content(reader)?,
                "SetIdentifier" => set.set_identifier = Some(read_text_content(reader)?),
                "Weight" => set.weight = Some(parse_i64(&read_text_content(reader)?)?),
                "Failover" => set.failover = Some(read_text_content(reader)?),
                "TTL" => set.ttl = Some(parse_i64(&read_text_content(reader)?)?),
                "ResourceRecords" => {
                    set.resource_records = deserialize_list(reader, "ResourceRecord")?;
                }
                "AliasTarget" => set.alias_target = Some(AliasTarget::deserialize_xml(reader)?),
                "HealthCheckId" => set.health_check_id = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(set)
    }
}
