//! Synchronous and asynchronous CloudWatch Logs clients.

use ruststack_sdk_core::{
    ClientConfig, ErrorCode, SdkRequest, SdkResult, ServiceClient, async_client,
};
use ruststack_sdk_runtime::{ClientRuntime, Protocol, ServiceMetadata};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::LogsErrorCode;
use crate::input::{
    CreateLogGroupInput, CreateLogStreamInput, DeleteLogGroupInput, DescribeLogGroupsInput,
    DescribeLogStreamsInput, GetLogEventsInput, PutLogEventsInput, PutRetentionPolicyInput,
};
use crate::operations::LogsOperation;
use crate::output::{
    CreateLogGroupOutput, CreateLogStreamOutput, DeleteLogGroupOutput, DescribeLogGroupsOutput,
    DescribeLogStreamsOutput, GetLogEventsOutput, PutLogEventsOutput, PutRetentionPolicyOutput,
};

/// CloudWatch Logs service description.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "CloudWatchLogs",
    signing_name: "logs",
    endpoint_prefix: "logs",
    api_version: "2014-03-28",
    protocol: Protocol::AwsJson1_1,
    json_target_prefix: Some("Logs_20140328."),
    global_region: None,
    xml_namespace: None,
    error_codes: LogsErrorCode::ALL,
};

/// Blocking CloudWatch Logs client.
#[derive(Debug)]
pub struct LogsClient {
    runtime: ClientRuntime,
}

impl LogsClient {
    /// Build a client with the default transport and credentials chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        Ok(Self::from_runtime(
            ClientRuntime::builder(&METADATA, config).build()?,
        ))
    }

    /// Wrap a runtime built from [`METADATA`].
    #[must_use]
    pub fn from_runtime(runtime: ClientRuntime) -> Self {
        Self { runtime }
    }

    /// The underlying runtime.
    #[must_use]
    pub fn runtime(&self) -> &ClientRuntime {
        &self.runtime
    }

    /// Create a log group.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExistsException`, `LimitExceededException` or
    /// another service or client error.
    pub fn create_log_group(&self, input: &CreateLogGroupInput) -> SdkResult<CreateLogGroupOutput> {
        self.json(LogsOperation::CreateLogGroup, input)
    }

    /// Delete a log group with all its streams and events.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFoundException` or a client error.
    pub fn delete_log_group(&self, input: &DeleteLogGroupInput) -> SdkResult<DeleteLogGroupOutput> {
        self.json(LogsOperation::DeleteLogGroup, input)
    }

    /// List log groups in name order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameterException` or a client error.
    pub fn describe_log_groups(
        &self,
        input: &DescribeLogGroupsInput,
    ) -> SdkResult<DescribeLogGroupsOutput> {
        self.json(LogsOperation::DescribeLogGroups, input)
    }

    /// Set the retention of a log group.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFoundException`, `InvalidParameterException` or a
    /// client error.
    pub fn put_retention_policy(
        &self,
        input: &PutRetentionPolicyInput,
    ) -> SdkResult<PutRetentionPolicyOutput> {
        self.json(LogsOperation::PutRetentionPolicy, input)
    }

    /// Create a log stream.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFoundException`, `ResourceAlreadyExistsException`
    /// or a client error.
    pub fn create_log_stream(
        &self,
        input: &CreateLogStreamInput,
    ) -> SdkResult<CreateLogStreamOutput> {
        self.json(LogsOperation::CreateLogStream, input)
    }

    /// List the streams of a log group.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFoundException` or a client error.
    pub fn describe_log_streams(
        &self,
        input: &DescribeLogStreamsInput,
    ) -> SdkResult<DescribeLogStreamsOutput> {
        self.json(LogsOperation::DescribeLogStreams, input)
    }

    /// Upload a batch of events.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSequenceTokenException`,
    /// `DataAlreadyAcceptedException`, `ResourceNotFoundException` or a
    /// client error.
    pub fn put_log_events(&self, input: &PutLogEventsInput) -> SdkResult<PutLogEventsOutput> {
        self.json(LogsOperation::PutLogEvents, input)
    }

    /// Read events from a stream.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFoundException` or a client error.
    pub fn get_log_events(&self, input: &GetLogEventsInput) -> SdkResult<GetLogEventsOutput> {
        self.json(LogsOperation::GetLogEvents, input)
    }

    fn json<I, O>(&self, operation: LogsOperation, input: &I) -> SdkResult<O>
    where
        I: Serialize + SdkRequest,
        O: DeserializeOwned,
    {
        self.runtime.execute_json(operation.as_str(), input)
    }
}

impl ServiceClient for LogsClient {
    const SERVICE_NAME: &'static str = "CloudWatchLogs";

    fn from_config(config: ClientConfig) -> SdkResult<Self> {
        Self::new(config)
    }

    fn config(&self) -> &ClientConfig {
        self.runtime.config()
    }

    fn shutdown(&self) {
        self.runtime.shutdown();
    }
}

async_client! {
    /// Asynchronous CloudWatch Logs client.
    pub struct LogsAsyncClient(LogsClient) {
        /// Create a log group.
        fn create_log_group_async, create_log_group_async_with_handler
            => create_log_group(CreateLogGroupInput) -> CreateLogGroupOutput;
        /// Delete a log group.
        fn delete_log_group_async, delete_log_group_async_with_handler
            => delete_log_group(DeleteLogGroupInput) -> DeleteLogGroupOutput;
        /// List log groups.
        fn describe_log_groups_async, describe_log_groups_async_with_handler
            => describe_log_groups(DescribeLogGroupsInput) -> DescribeLogGroupsOutput;
        /// Set the retention of a log group.
        fn put_retention_policy_async, put_retention_policy_async_with_handler
            => put_retention_policy(PutRetentionPolicyInput) -> PutRetentionPolicyOutput;
        /// Create a log stream.
        fn create_log_stream_async, create_log_stream_async_with_handler
            => create_log_stream(CreateLogStreamInput) -> CreateLogStreamOutput;
        /// List the streams of a log group.
        fn describe_log_streams_async, describe_log_streams_async_with_handler
            => describe_log_streams(DescribeLogStreamsInput) -> DescribeLogStreamsOutput;
        /// Upload a batch of events.
        fn put_log_events_async, put_log_events_async_with_handler
            => put_log_events(PutLogEventsInput) -> PutLogEventsOutput;
        /// Read events from a stream.
        fn get_log_events_async, get_log_events_async_with_handler
            => get_log_events(GetLogEventsInput) -> GetLogEventsOutput;
    }
}
