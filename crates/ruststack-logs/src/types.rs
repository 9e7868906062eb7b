//! Shared CloudWatch Logs types.
//!
//! Field names follow the `camelCase` JSON wire format. Timestamps are
//! milliseconds since the Unix epoch, as on the wire.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Sort key for `DescribeLogStreams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderBy {
    /// Sort by stream name.
    LogStreamName,
    /// Sort by the timestamp of the latest event.
    LastEventTime,
}

impl OrderBy {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogStreamName => "LogStreamName",
            Self::LastEventTime => "LastEventTime",
        }
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Groups and streams
// ---------------------------------------------------------------------------

/// A log group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogGroup {
    /// Group name.
    pub log_group_name: String,
    /// Creation time in epoch milliseconds.
    pub creation_time: Option<i64>,
    /// Retention in days; absent means events never expire.
    pub retention_in_days: Option<i32>,
    /// Number of metric filters.
    pub metric_filter_count: Option<i32>,
    /// Group ARN.
    pub arn: Option<String>,
    /// Bytes stored.
    pub stored_bytes: Option<i64>,
    /// KMS key encrypting the group.
    pub kms_key_id: Option<String>,
}

/// A log stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogStream {
    /// Stream name.
    pub log_stream_name: String,
    /// Creation time in epoch milliseconds.
    pub creation_time: Option<i64>,
    /// Timestamp of the earliest event.
    pub first_event_timestamp: Option<i64>,
    /// Timestamp of the latest event.
    pub last_event_timestamp: Option<i64>,
    /// When the latest event was ingested.
    pub last_ingestion_time: Option<i64>,
    /// Token for the next `PutLogEvents` call.
    pub upload_sequence_token: Option<String>,
    /// Stream ARN.
    pub arn: Option<String>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// An event to upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLogEvent {
    /// Event time in epoch milliseconds.
    pub timestamp: i64,
    /// Raw message.
    pub message: String,
}

impl InputLogEvent {
    /// An event at `timestamp` (epoch milliseconds).
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

/// An event read back from a stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputLogEvent {
    /// Event time in epoch milliseconds.
    pub timestamp: Option<i64>,
    /// Raw message.
    pub message: Option<String>,
    /// When the event was ingested.
    pub ingestion_time: Option<i64>,
}

/// Indexes of events `PutLogEvents` refused to store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RejectedLogEventsInfo {
    /// First index of events newer than allowed.
    pub too_new_log_event_start_index: Option<i32>,
    /// Last index of events older than allowed.
    pub too_old_log_event_end_index: Option<i32>,
    /// Last index of events older than the retention period.
    pub expired_log_event_end_index: Option<i32>,
}
