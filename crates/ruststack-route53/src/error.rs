//! Route 53 error codes.

use std::fmt;

use ruststack_sdk_core::ErrorCode;

/// Documented Route 53 error codes for the supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Route53ErrorCode {
    /// A zone with a different caller reference already owns the domain.
    ConflictingDomainExists,
    /// No reusable delegation set is available.
    DelegationSetNotAvailable,
    /// A zone with this caller reference already exists.
    HostedZoneAlreadyExists,
    /// The zone still contains records other than SOA and NS.
    HostedZoneNotEmpty,
    /// The change batch failed validation.
    InvalidChangeBatch,
    /// The domain name is not valid.
    InvalidDomainName,
    /// An input parameter is not valid.
    InvalidInput,
    /// The VPC id is not valid.
    InvalidVPCId,
    /// No change with the given id exists.
    NoSuchChange,
    /// No hosted zone with the given id exists.
    NoSuchHostedZone,
    /// A previous change to the zone is still propagating.
    PriorRequestNotComplete,
    /// The account has reached its hosted zone limit.
    TooManyHostedZones,
}

impl ErrorCode for Route53ErrorCode {
    const ALL: &'static [&'static str] = &[
        "ConflictingDomainExists",
        "DelegationSetNotAvailable",
        "HostedZoneAlreadyExists",
        "HostedZoneNotEmpty",
        "InvalidChangeBatch",
        "InvalidDomainName",
        "InvalidInput",
        "InvalidVPCId",
        "NoSuchChange",
        "NoSuchHostedZone",
        "PriorRequestNotComplete",
        "TooManyHostedZones",
    ];

    fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "ConflictingDomainExists" => Self::ConflictingDomainExists,
            "DelegationSetNotAvailable" => Self::DelegationSetNotAvailable,
            "HostedZoneAlreadyExists" => Self::HostedZoneAlreadyExists,
            "HostedZoneNotEmpty" => Self::HostedZoneNotEmpty,
            "InvalidChangeBatch" => Self::InvalidChangeBatch,
            "InvalidDomainName" => Self::InvalidDomainName,
            "InvalidInput" => Self::InvalidInput,
            "InvalidVPCId" => Self::InvalidVPCId,
            "NoSuchChange" => Self::NoSuchChange,
            "NoSuchHostedZone" => Self::NoSuchHostedZone,
            "PriorRequestNotComplete" => Self::PriorRequestNotComplete,
            "TooManyHostedZones" => Self::TooManyHostedZones,
            _ => return None,
        })
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::ConflictingDomainExists => "ConflictingDomainExists",
            Self::DelegationSetNotAvailable => "DelegationSetNotAvailable",
            Self::HostedZoneAlreadyExists => "HostedZoneAlreadyExists",
            Self::HostedZoneNotEmpty => "HostedZoneNotEmpty",
            Self::InvalidChangeBatch => "InvalidChangeBatch",
            Self::InvalidDomainName => "InvalidDomainName",
            Self::InvalidInput => "InvalidInput",
            Self::InvalidVPCId => "InvalidVPCId",
            Self::NoSuchChange => "NoSuchChange",
            Self::NoSuchHostedZone => "NoSuchHostedZone",
            Self::PriorRequestNotComplete => "PriorRequestNotComplete",
            Self::TooManyHostedZones => "TooManyHostedZones",
        }
    }
}

impl fmt::Display for Route53ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
