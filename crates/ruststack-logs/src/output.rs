//! CloudWatch Logs output types.
//!
//! Every field is optional on the wire, so outputs deserialize with
//! `#[serde(default)]`.

use serde::Deserialize;

use crate::types::{LogGroup, LogStream, OutputLogEvent, RejectedLogEventsInfo};

macro_rules! empty_output {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
            pub struct $name {}
        )+
    };
}

empty_output!(
    /// Output of the `CreateLogGroup` operation.
    CreateLogGroupOutput,
    /// Output of the `DeleteLogGroup` operation.
    DeleteLogGroupOutput,
    /// Output of the `PutRetentionPolicy` operation.
    PutRetentionPolicyOutput,
    /// Output of the `CreateLogStream` operation.
    CreateLogStreamOutput,
);

/// Output of the `DescribeLogGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeLogGroupsOutput {
    /// Groups on this page.
    pub log_groups: Vec<LogGroup>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of the `DescribeLogStreams` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeLogStreamsOutput {
    /// Streams on this page.
    pub log_streams: Vec<LogStream>,
    /// Token for the next page.
    pub next_token: Option<String>,
}

/// Output of the `PutLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutLogEventsOutput {
    /// Token for the next upload to the stream.
    pub next_sequence_token: Option<String>,
    /// Events that were not stored.
    pub rejected_log_events_info: Option<RejectedLogEventsInfo>,
}

/// Output of the `GetLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetLogEventsOutput {
    /// Events on this page.
    pub events: Vec<OutputLogEvent>,
    /// Token for newer events. Equal to the request token at the end of the stream.
    pub next_forward_token: Option<String>,
    /// Token for older events.
    pub next_backward_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_read_empty_body_as_empty_output() {
        let out: CreateLogGroupOutput = serde_json::from_str("{}").unwrap();
        assert_eq!(out, CreateLogGroupOutput {});
        let out: DescribeLogGroupsOutput = serde_json::from_str("{}").unwrap();
        assert!(out.log_groups.is_empty());
    }

    #[test]
    fn test_should_ignore_unknown_fields() {
        let out: DescribeLogGroupsOutput = serde_json::from_str(
            r#"{"logGroups":[{"logGroupName":"/app","retentionInDays":7,"dataProtectionStatus":"ACTIVATED"}]}"#,
        )
        .unwrap();
        assert_eq!(out.log_groups[0].log_group_name, "/app");
        assert_eq!(out.log_groups[0].retention_in_days, Some(7));
    }
}
