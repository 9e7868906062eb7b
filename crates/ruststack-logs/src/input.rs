//! CloudWatch Logs input types.
//!
//! Inputs serialize to the `camelCase` JSON bodies of the `Logs_20140328`
//! target. Absent options and empty collections are left out of the body.

use std::collections::HashMap;

use ruststack_sdk_core::{RequestOptions, impl_sdk_request};
use serde::Serialize;

use crate::types::{InputLogEvent, OrderBy};

// ---------------------------------------------------------------------------
// Log groups
// ---------------------------------------------------------------------------

/// Input for the `CreateLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogGroupInput {
    /// Group name, unique per region.
    pub log_group_name: String,
    /// KMS key ARN for encrypting the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Tags to attach.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

/// Input for the `DeleteLogGroup` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLogGroupInput {
    /// Group to delete.
    pub log_group_name: String,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

/// Input for the `DescribeLogGroups` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroupsInput {
    /// Only groups whose name starts with this prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_group_name_prefix: Option<String>,
    /// Token from the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, at most 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

/// Input for the `PutRetentionPolicy` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRetentionPolicyInput {
    /// Target group.
    pub log_group_name: String,
    /// Days to keep events, one of the values the service accepts
    /// (1, 3, 5, 7, 14, 30, ...).
    pub retention_in_days: i32,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

// ---------------------------------------------------------------------------
// Log streams
// ---------------------------------------------------------------------------

/// Input for the `CreateLogStream` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogStreamInput {
    /// Group to create the stream in.
    pub log_group_name: String,
    /// Stream name, unique in the group.
    pub log_stream_name: String,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

/// Input for the `DescribeLogStreams` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogStreamsInput {
    /// Group whose streams are listed.
    pub log_group_name: String,
    /// Only streams whose name starts with this prefix. Not allowed with
    /// `OrderBy::LastEventTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    /// Sort descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descending: Option<bool>,
    /// Token from the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, at most 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Input for the `PutLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutLogEventsInput {
    /// Target group.
    pub log_group_name: String,
    /// Target stream.
    pub log_stream_name: String,
    /// Events in chronological order.
    pub log_events: Vec<InputLogEvent>,
    /// `nextSequenceToken` of the previous upload to this stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_token: Option<String>,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

/// Input for the `GetLogEvents` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogEventsInput {
    /// Source group.
    pub log_group_name: String,
    /// Source stream.
    pub log_stream_name: String,
    /// Inclusive lower bound in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Exclusive upper bound in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Forward or backward token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Maximum number of events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Read from the oldest event instead of the newest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_from_head: Option<bool>,
    /// Per-request options.
    #[serde(skip)]
    pub request_options: RequestOptions,
}

impl_sdk_request!(
    CreateLogGroupInput,
    DeleteLogGroupInput,
    DescribeLogGroupsInput,
    PutRetentionPolicyInput,
    CreateLogStreamInput,
    DescribeLogStreamsInput,
    PutLogEventsInput,
    GetLogEventsInput,
);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_omit_absent_fields() {
        let input = DescribeLogStreamsInput {
            log_group_name: "/app/web".to_owned(),
            order_by: Some(OrderBy::LastEventTime),
            descending: Some(true),
            request_options: RequestOptions::default().with_header("x-trace", "1"),
            ..DescribeLogStreamsInput::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "logGroupName": "/app/web",
                "orderBy": "LastEventTime",
                "descending": true
            })
        );
    }

    #[test]
    fn test_should_serialize_events_in_camel_case() {
        let input = PutLogEventsInput {
            log_group_name: "g".to_owned(),
            log_stream_name: "s".to_owned(),
            log_events: vec![InputLogEvent::new(1_700_000_000_000, "started")],
            sequence_token: Some("49590".to_owned()),
            ..PutLogEventsInput::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "logGroupName": "g",
                "logStreamName": "s",
                "logEvents": [{"timestamp": 1_700_000_000_000_i64, "message": "started"}],
                "sequenceToken": "49590"
            })
        );
    }

    #[test]
    fn test_should_skip_empty_tags() {
        let input = CreateLogGroupInput {
            log_group_name: "g".to_owned(),
            ..CreateLogGroupInput::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"logGroupName": "g"})
        );
    }
}
