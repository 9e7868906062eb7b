//! Elastic Load Balancing error codes.

use std::fmt;

use ruststack_sdk_core::ErrorCode;

/// Documented Elastic Load Balancing error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ElbErrorCode {
    /// The server certificate ARN is unknown.
    CertificateNotFound,
    /// A load balancer with that name already exists.
    DuplicateLoadBalancerName,
    /// A tag key was given twice.
    DuplicateTagKeys,
    /// The requested configuration change is not valid.
    InvalidConfigurationRequest,
    /// An instance id is invalid.
    InvalidInstance,
    /// The scheme is invalid for the load balancer.
    InvalidScheme,
    /// A security group is invalid.
    InvalidSecurityGroup,
    /// A subnet is invalid.
    InvalidSubnet,
    /// No load balancer with that name exists.
    LoadBalancerNotFound,
    /// The operation is not allowed.
    OperationNotPermitted,
    /// A subnet does not exist.
    SubnetNotFound,
    /// The account has too many load balancers.
    TooManyLoadBalancers,
    /// Too many tags on the load balancer.
    TooManyTags,
    /// A listener protocol is not supported.
    UnsupportedProtocol,
}

impl ErrorCode for ElbErrorCode {
    const ALL: &'static [&'static str] = &[
        "CertificateNotFound",
        "DuplicateLoadBalancerName",
        "DuplicateTagKeys",
        "InvalidConfigurationRequest",
        "InvalidInstance",
        "InvalidScheme",
        "InvalidSecurityGroup",
        "InvalidSubnet",
        "LoadBalancerNotFound",
        "OperationNotPermitted",
        "SubnetNotFound",
        "TooManyLoadBalancers",
        "TooManyTags",
        "UnsupportedProtocol",
    ];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "CertificateNotFound" => Some(Self::CertificateNotFound),
            "DuplicateLoadBalancerName" => Some(Self::DuplicateLoadBalancerName),
            "DuplicateTagKeys" => Some(Self::DuplicateTagKeys),
            "InvalidConfigurationRequest" => Some(Self::InvalidConfigurationRequest),
            "InvalidInstance" => Some(Self::InvalidInstance),
            "InvalidScheme" => Some(Self::InvalidScheme),
            "InvalidSecurityGroup" => Some(Self::InvalidSecurityGroup),
            "InvalidSubnet" => Some(Self::InvalidSubnet),
            "LoadBalancerNotFound" => Some(Self::LoadBalancerNotFound),
            "OperationNotPermitted" => Some(Self::OperationNotPermitted),
            "SubnetNotFound" => Some(Self::SubnetNotFound),
            "TooManyLoadBalancers" => Some(Self::TooManyLoadBalancers),
            "TooManyTags" => Some(Self::TooManyTags),
            "UnsupportedProtocol" => Some(Self::UnsupportedProtocol),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::CertificateNotFound => "CertificateNotFound",
            Self::DuplicateLoadBalancerName => "DuplicateLoadBalancerName",
            Self::DuplicateTagKeys => "DuplicateTagKeys",
            Self::InvalidConfigurationRequest => "InvalidConfigurationRequest",
            Self::InvalidInstance => "InvalidInstance",
            Self::InvalidScheme => "InvalidScheme",
            Self::InvalidSecurityGroup => "InvalidSecurityGroup",
            Self::InvalidSubnet => "InvalidSubnet",
            Self::LoadBalancerNotFound => "LoadBalancerNotFound",
            Self::OperationNotPermitted => "OperationNotPermitted",
            Self::SubnetNotFound => "SubnetNotFound",
            Self::TooManyLoadBalancers => "TooManyLoadBalancers",
            Self::TooManyTags => "TooManyTags",
            Self::UnsupportedProtocol => "UnsupportedProtocol",
        }
    }
}

impl fmt::Display for ElbErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
