//! Auto Scaling error codes.
//!
//! Auto Scaling reports errors in the query protocol's `<ErrorResponse>`
//! envelope. The runtime decodes them into a
//! [`ServiceError`](ruststack_sdk_core::ServiceError); match on the code with
//! [`ServiceError::code_as`](ruststack_sdk_core::ServiceError::code_as).

use std::fmt;

use ruststack_sdk_core::ErrorCode;

/// Documented Auto Scaling error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AutoScalingErrorCode {
    /// A group or launch configuration with that name already exists.
    AlreadyExists,
    /// The `NextToken` value is invalid.
    InvalidNextToken,
    /// An account quota was reached.
    LimitExceeded,
    /// A pending update to the same resource is in progress.
    ResourceContention,
    /// The resource is in use and cannot be deleted.
    ResourceInUse,
    /// The group has a scaling activity in progress.
    ScalingActivityInProgress,
    /// The service-linked role is not yet ready.
    ServiceLinkedRoleFailure,
    /// A parameter failed validation.
    ValidationError,
}

impl ErrorCode for AutoScalingErrorCode {
    const ALL: &'static [&'static str] = &[
        "AlreadyExists",
        "InvalidNextToken",
        "LimitExceeded",
        "ResourceContention",
        "ResourceInUse",
        "ScalingActivityInProgress",
        "ServiceLinkedRoleFailure",
        "ValidationError",
    ];

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "AlreadyExists" => Some(Self::AlreadyExists),
            "InvalidNextToken" => Some(Self::InvalidNextToken),
            "LimitExceeded" => Some(Self::LimitExceeded),
            "ResourceContention" => Some(Self::ResourceContention),
            "ResourceInUse" => Some(Self::ResourceInUse),
            "ScalingActivityInProgress" => Some(Self::ScalingActivityInProgress),
            "ServiceLinkedRoleFailure" => Some(Self::ServiceLinkedRoleFailure),
            "ValidationError" => Some(Self::ValidationError),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "AlreadyExists",
            Self::InvalidNextToken => "InvalidNextToken",
            Self::LimitExceeded => "LimitExceeded",
            Self::ResourceContention => "ResourceContention",
            Self::ResourceInUse => "ResourceInUse",
            Self::ScalingActivityInProgress => "ScalingActivityInProgress",
            Self::ServiceLinkedRoleFailure => "ServiceLinkedRoleFailure",
            Self::ValidationError => "ValidationError",
        }
    }
}

impl fmt::Display for AutoScalingErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
