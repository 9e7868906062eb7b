//! Synchronous and asynchronous Route 53 clients.

use ruststack_sdk_core::{
    ClientConfig, ClientError, ErrorCode, SdkRequest, SdkResult, ServiceClient, async_client,
};
use ruststack_sdk_runtime::{ClientRuntime, Protocol, ServiceMetadata, XmlDeserialize};

use crate::error::Route53ErrorCode;
use crate::input::{
    ChangeResourceRecordSetsInput, CreateHostedZoneInput, DeleteHostedZoneInput, GetChangeInput,
    GetHostedZoneInput, ListHostedZonesInput, ListResourceRecordSetsInput, RestInput,
};
use crate::operations::Route53Operation;
use crate::output::{
    ChangeResourceRecordSetsOutput, CreateHostedZoneOutput, DeleteHostedZoneOutput,
    GetChangeOutput, GetHostedZoneOutput, ListHostedZonesOutput, ListResourceRecordSetsOutput,
};

/// Route 53 service description. Route 53 is global: one endpoint, signed
/// for `us-east-1` whatever region is configured.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_name: "Route53",
    signing_name: "route53",
    endpoint_prefix: "route53",
    api_version: "2013-04-01",
    protocol: Protocol::RestXml,
    json_target_prefix: None,
    global_region: Some("us-east-1"),
    xml_namespace: Some("https://route53.amazonaws.com/doc/2013-04-01/"),
    error_codes: Route53ErrorCode::ALL,
};

/// Blocking Route 53 client.
///
/// Zone and change ids may be passed with or without the `/hostedzone/` and
/// `/change/` prefixes the service returns them with.
#[derive(Debug)]
pub struct Route53Client {
    runtime: ClientRuntime,
}

impl Route53Client {
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

    /// Create a hosted zone.
    ///
    /// # Errors
    ///
    /// Returns `HostedZoneAlreadyExists`, `InvalidDomainName`,
    /// `TooManyHostedZones` or another service or client error.
    pub fn create_hosted_zone(
        &self,
        input: &CreateHostedZoneInput,
    ) -> SdkResult<CreateHostedZoneOutput> {
        self.rest(Route53Operation::CreateHostedZone, input)
    }

    /// Get a hosted zone.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchHostedZone`, `InvalidInput` or a client error.
    pub fn get_hosted_zone(&self, input: &GetHostedZoneInput) -> SdkResult<GetHostedZoneOutput> {
        self.rest(Route53Operation::GetHostedZone, input)
    }

    /// List hosted zones in name order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` or a client error.
    pub fn list_hosted_zones(
        &self,
        input: &ListHostedZonesInput,
    ) -> SdkResult<ListHostedZonesOutput> {
        self.rest(Route53Operation::ListHostedZones, input)
    }

    /// Delete a hosted zone. Only SOA and NS records may remain.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchHostedZone`, `HostedZoneNotEmpty`,
    /// `PriorRequestNotComplete` or a client error.
    pub fn delete_hosted_zone(
        &self,
        input: &DeleteHostedZoneInput,
    ) -> SdkResult<DeleteHostedZoneOutput> {
        self.rest(Route53Operation::DeleteHostedZone, input)
    }

    /// Apply a batch of record set changes atomically.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchHostedZone`, `InvalidChangeBatch`,
    /// `PriorRequestNotComplete` or a client error.
    pub fn change_resource_record_sets(
        &self,
        input: &ChangeResourceRecordSetsInput,
    ) -> SdkResult<ChangeResourceRecordSetsOutput> {
        self.rest(Route53Operation::ChangeResourceRecordSets, input)
    }

    /// List the record sets of a zone.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchHostedZone`, `InvalidInput` or a client error.
    pub fn list_resource_record_sets(
        &self,
        input: &ListResourceRecordSetsInput,
    ) -> SdkResult<ListResourceRecordSetsOutput> {
        self.rest(Route53Operation::ListResourceRecordSets, input)
    }

    /// Get the status of a change.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchChange` or a client error.
    pub fn get_change(&self, input: &GetChangeInput) -> SdkResult<GetChangeOutput> {
        self.rest(Route53Operation::GetChange, input)
    }

    fn rest<I, O>(&self, operation: Route53Operation, input: &I) -> SdkResult<O>
    where
        I: RestInput + SdkRequest,
        O: XmlDeserialize + Default,
    {
        let request = input
            .to_rest_request()
            .map_err(|e| ClientError::Marshall {
                operation: operation.as_str(),
                message: e.to_string(),
            })?;
        self.runtime
            .execute_rest_xml(operation.as_str(), input, request)
    }
}

impl ServiceClient for Route53Client {
    const SERVICE_NAME: &'static str = "Route53";

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
    /// Asynchronous Route 53 client.
    pub struct Route53AsyncClient(Route53Client) {
        /// Create a hosted zone.
        fn create_hosted_zone_async, create_hosted_zone_async_with_handler
            => create_hosted_zone(CreateHostedZoneInput) -> CreateHostedZoneOutput;
        /// Get a hosted zone.
        fn get_hosted_zone_async, get_hosted_zone_async_with_handler
            => get_hosted_zone(GetHostedZoneInput) -> GetHostedZoneOutput;
        /// List hosted zones.
        fn list_hosted_zones_async, list_hosted_zones_async_with_handler
            => list_hosted_zones(ListHostedZonesInput) -> ListHostedZonesOutput;
        /// Delete a hosted zone.
        fn delete_hosted_zone_async, delete_hosted_zone_async_with_handler
            => delete_hosted_zone(DeleteHostedZoneInput) -> DeleteHostedZoneOutput;
        /// Apply a batch of record set changes.
        fn change_resource_record_sets_async, change_resource_record_sets_async_with_handler
            => change_resource_record_sets(ChangeResourceRecordSetsInput) -> ChangeResourceRecordSetsOutput;
        /// List the record sets of a zone.
        fn list_resource_record_sets_async, list_resource_record_sets_async_with_handler
            => list_resource_record_sets(ListResourceRecordSetsInput) -> ListResourceRecordSetsOutput;
        /// Get the status of a change.
        fn get_change_async, get_change_async_with_handler
            => get_change(GetChangeInput) -> GetChangeOutput;
    }
}
