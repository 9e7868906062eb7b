//! CloudWatch Logs operation enum.

use std::fmt;

/// All supported CloudWatch Logs operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogsOperation {
    // Log groups
    /// Create a log group.
    CreateLogGroup,
    /// Delete a log group and its streams.
    DeleteLogGroup,
    /// List log groups.
    DescribeLogGroups,
    /// Set how long events in a group are kept.
    PutRetentionPolicy,

    // Log streams
    /// Create a stream in a group.
    CreateLogStream,
    /// List the streams of a group.
    DescribeLogStreams,

    // Events
    /// Upload a batch of events to a stream.
    PutLogEvents,
    /// Read events from a stream.
    GetLogEvents,
}

impl LogsOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::CreateLogGroup,
        Self::DeleteLogGroup,
        Self::DescribeLogGroups,
        Self::PutRetentionPolicy,
        Self::CreateLogStream,
        Self::DescribeLogStreams,
        Self::PutLogEvents,
        Self::GetLogEvents,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateLogGroup => "CreateLogGroup",
            Self::DeleteLogGroup => "DeleteLogGroup",
            Self::DescribeLogGroups => "DescribeLogGroups",
            Self::PutRetentionPolicy => "PutRetentionPolicy",
            Self::CreateLogStream => "CreateLogStream",
            Self::DescribeLogStreams => "DescribeLogStreams",
            Self::PutLogEvents => "PutLogEvents",
            Self::GetLogEvents => "GetLogEvents",
        }
    }

    /// Parse an operation name string into a `LogsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }
}

impl fmt::Display for LogsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
