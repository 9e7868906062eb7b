//! Route 53 operation enum.

use std::fmt;

/// All supported Route 53 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route53Operation {
    // Hosted zones
    /// Create a public or private hosted zone.
    CreateHostedZone,
    /// Get a hosted zone and its delegation set.
    GetHostedZone,
    /// List hosted zones.
    ListHostedZones,
    /// Delete an empty hosted zone.
    DeleteHostedZone,

    // Record sets
    /// Create, delete or upsert record sets in one batch.
    ChangeResourceRecordSets,
    /// List the record sets of a zone.
    ListResourceRecordSets,

    // Changes
    /// Get the propagation status of a change.
    GetChange,
}

impl Route53Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::CreateHostedZone,
        Self::GetHostedZone,
        Self::ListHostedZones,
        Self::DeleteHostedZone,
        Self::ChangeResourceRecordSets,
        Self::ListResourceRecordSets,
        Self::GetChange,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateHostedZone => "CreateHostedZone",
            Self::GetHostedZone => "GetHostedZone",
            Self::ListHostedZones => "ListHostedZones",
            Self::DeleteHostedZone => "DeleteHostedZone",
            Self::ChangeResourceRecordSets => "ChangeResourceRecordSets",
            Self::ListResourceRecordSets => "ListResourceRecordSets",
            Self::GetChange => "GetChange",
        }
    }

    /// Parse an operation name string into a `Route53Operation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// The HTTP method the operation is bound to.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::CreateHostedZone | Self::ChangeResourceRecordSets => http::Method::POST,
            Self::DeleteHostedZone => http::Method::DELETE,
            Self::GetHostedZone
            | Self::ListHostedZones
            | Self::ListResourceRecordSets
            | Self::GetChange => http::Method::GET,
        }
    }
}

impl fmt::Display for Route53Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in Route53Operation::ALL {
            assert_eq!(Route53Operation::from_name(op.as_str()), Some(op));
        }
        assert_eq!(Route53Operation::from_name("CreateHealthCheck"), None);
    }

    #[test]
    fn test_should_bind_http_methods() {
        assert_eq!(Route53Operation::DeleteHostedZone.method(), http::Method::DELETE);
        assert_eq!(Route53Operation::ChangeResourceRecordSets.method(), http::Method::POST);
        assert_eq!(Route53Operation::GetChange.method(), http::Method::GET);
    }
}
