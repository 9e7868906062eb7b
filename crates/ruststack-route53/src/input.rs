//! Route 53 input types and their REST bindings.

use std::io::{self, Write};

use http::Method;
use quick_xml::Writer;
use ruststack_sdk_auth::canonical::uri_encode;
use ruststack_sdk_core::{RequestOptions, impl_sdk_request};
use ruststack_sdk_runtime::RestRequest;
use ruststack_sdk_runtime::xml::serialize::{
    XmlSerialize, write_optional_struct, write_optional_text, write_struct, write_text_element,
};
use ruststack_sdk_runtime::xml::{XmlError, to_xml};

use crate::types::{ChangeBatch, HostedZoneConfig, Vpc};

const PATH_PREFIX: &str = "/2013-04-01";
const XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

/// Strip the `/hostedzone/` or `/change/` prefix the service puts on ids, so
/// ids from one response can be passed straight into the next request.
#[must_use]
pub fn trim_resource_id(id: &str) -> &str {
    let id = id.trim_start_matches('/');
    id.strip_prefix("hostedzone/")
        .or_else(|| id.strip_prefix("change/"))
        .unwrap_or(id)
}

fn zone_path(id: &str, suffix: &str) -> String {
    format!("{PATH_PREFIX}/hostedzone/{}{suffix}", uri_encode(trim_resource_id(id)))
}

/// Binds an input to its method, path, query string and body.
pub(crate) trait RestInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError>;
}

// ---------------------------------------------------------------------------
// Hosted zones
// ---------------------------------------------------------------------------

/// Input for the `CreateHostedZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateHostedZoneInput {
    /// Domain name of the zone.
    pub name: String,
    /// Idempotency token. A random UUID is used when absent.
    pub caller_reference: Option<String>,
    /// Comment and visibility.
    pub hosted_zone_config: Option<HostedZoneConfig>,
    /// VPC to associate a private zone with.
    pub vpc: Option<Vpc>,
    /// Reusable delegation set to assign.
    pub delegation_set_id: Option<String>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

struct CreateHostedZoneBody<'a> {
    input: &'a CreateHostedZoneInput,
    caller_reference: &'a str,
}

impl XmlSerialize for CreateHostedZoneBody<'_> {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Name", &self.input.name)?;
        write_optional_struct(writer, "VPC", self.input.vpc.as_ref())?;
        write_text_element(writer, "CallerReference", self.caller_reference)?;
        write_optional_struct(writer, "HostedZoneConfig", self.input.hosted_zone_config.as_ref())?;
        write_optional_text(writer, "DelegationSetId", self.input.delegation_set_id.as_deref())
    }
}

impl RestInput for CreateHostedZoneInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        let generated;
        let caller_reference = match &self.caller_reference {
            Some(reference) => reference.as_str(),
            None => {
                generated = uuid::Uuid::new_v4().to_string();
                generated.as_str()
            }
        };
        let body = to_xml(
            "CreateHostedZoneRequest",
            Some(XMLNS),
            &CreateHostedZoneBody {
                input: self,
                caller_reference,
            },
        )?;
        Ok(RestRequest::new(Method::POST, format!("{PATH_PREFIX}/hostedzone")).with_body(body))
    }
}

/// Input for the `GetHostedZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetHostedZoneInput {
    /// Zone id, with or without the `/hostedzone/` prefix.
    pub id: String,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl RestInput for GetHostedZoneInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        Ok(RestRequest::new(Method::GET, zone_path(&self.id, "")))
    }
}

/// Input for the `ListHostedZones` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListHostedZonesInput {
    /// `NextMarker` of the previous page.
    pub marker: Option<String>,
    /// Page size, at most 100.
    pub max_items: Option<i32>,
    /// Only zones using this reusable delegation set.
    pub delegation_set_id: Option<String>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl RestInput for ListHostedZonesInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        Ok(
            RestRequest::new(Method::GET, format!("{PATH_PREFIX}/hostedzone"))
                .with_query("marker", self.marker.as_ref())
                .with_query("maxitems", self.max_items)
                .with_query("delegationsetid", self.delegation_set_id.as_ref()),
        )
    }
}

/// Input for the `DeleteHostedZone` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteHostedZoneInput {
    /// Zone id, with or without the `/hostedzone/` prefix.
    pub id: String,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl RestInput for DeleteHostedZoneInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        Ok(RestRequest::new(Method::DELETE, zone_path(&self.id, "")))
    }
}

// ---------------------------------------------------------------------------
// Record sets
// ---------------------------------------------------------------------------

/// Input for the `ChangeResourceRecordSets` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeResourceRecordSetsInput {
    /// Zone id, with or without the `/hostedzone/` prefix.
    pub hosted_zone_id: String,
    /// Changes to apply atomically.
    pub change_batch: ChangeBatch,
    /// Per-request options.
    pub request_options: RequestOptions,
}

struct ChangeResourceRecordSetsBody<'a>(&'a ChangeBatch);

impl XmlSerialize for ChangeResourceRecordSetsBody<'_> {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_struct(writer, "ChangeBatch", self.0)
    }
}

impl RestInput for ChangeResourceRecordSetsInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        let body = to_xml(
            "ChangeResourceRecordSetsRequest",
            Some(XMLNS),
            &ChangeResourceRecordSetsBody(&self.change_batch),
        )?;
        Ok(
            RestRequest::new(Method::POST, zone_path(&self.hosted_zone_id, "/rrset/"))
                .with_body(body),
        )
    }
}

/// Input for the `ListResourceRecordSets` operation.
///
/// Listing starts at `start_record_name`/`start_record_type` in DNS order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListResourceRecordSetsInput {
    /// Zone id, with or without the `/hostedzone/` prefix.
    pub hosted_zone_id: String,
    /// First record name to list.
    pub start_record_name: Option<String>,
    /// First record type to list. Requires `start_record_name`.
    pub start_record_type: Option<String>,
    /// First set identifier to list, for weighted and failover sets.
    pub start_record_identifier: Option<String>,
    /// Page size, at most 300.
    pub max_items: Option<i32>,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl RestInput for ListResourceRecordSetsInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        Ok(
            RestRequest::new(Method::GET, zone_path(&self.hosted_zone_id, "/rrset"))
                .with_query("name", self.start_record_name.as_ref())
                .with_query("type", self.start_record_type.as_ref())
                .with_query("identifier", self.start_record_identifier.as_ref())
                .with_query("maxitems", self.max_items),
        )
    }
}

// ---------------------------------------------------------------------------
// Changes
// ---------------------------------------------------------------------------

/// Input for the `GetChange` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetChangeInput {
    /// Change id, with or without the `/change/` prefix.
    pub id: String,
    /// Per-request options.
    pub request_options: RequestOptions,
}

impl RestInput for GetChangeInput {
    fn to_rest_request(&self) -> Result<RestRequest, XmlError> {
        Ok(RestRequest::new(
            Method::GET,
            format!("{PATH_PREFIX}/change/{}", uri_encode(trim_resource_id(&self.id))),
        ))
    }
}

impl_sdk_request!(
    CreateHostedZoneInput,
    GetHostedZoneInput,
    ListHostedZonesInput,
    DeleteHostedZoneInput,
    ChangeResourceRecordSetsInput,
    ListResourceRecordSetsInput,
    GetChangeInput,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Change, ChangeAction, ResourceRecordSet};

    fn body(request: &RestRequest) -> String {
        String::from_utf8(request.body.clone().unwrap()).unwrap()
    }

    #[test]
    fn test_should_trim_resource_ids() {
        assert_eq!(trim_resource_id("/hostedzone/Z1D633PJN98FT9"), "Z1D633PJN98FT9");
        assert_eq!(trim_resource_id("hostedzone/Z1D633PJN98FT9"), "Z1D633PJN98FT9");
        assert_eq!(trim_resource_id("/change/C2682N5HXP0BZ4"), "C2682N5HXP0BZ4");
        assert_eq!(trim_resource_id("Z1D633PJN98FT9"), "Z1D633PJN98FT9");
    }

    #[test]
    fn test_should_bind_zone_id_into_path() {
        let request = DeleteHostedZoneInput {
            id: "/hostedzone/Z1".to_owned(),
            ..DeleteHostedZoneInput::default()
        }
        .to_rest_request()
        .unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "/2013-04-01/hostedzone/Z1");
        assert!(request.body.is_none());

        let request = GetChangeInput {
            id: "/change/C9".to_owned(),
            ..GetChangeInput::default()
        }
        .to_rest_request()
        .unwrap();
        assert_eq!(request.path, "/2013-04-01/change/C9");
    }

    #[test]
    fn test_should_generate_caller_reference() {
        let input = CreateHostedZoneInput {
            name: "example.com".to_owned(),
            hosted_zone_config: Some(HostedZoneConfig {
                comment: Some("test".to_owned()),
                private_zone: None,
            }),
            ..CreateHostedZoneInput::default()
        };
        let first = body(&input.to_rest_request().unwrap());
        let second = body(&input.to_rest_request().unwrap());

        assert!(first.contains(
            "<CreateHostedZoneRequest xmlns=\"https://route53.amazonaws.com/doc/2013-04-01/\">"
        ));
        assert!(first.contains("<Name>example.com</Name><CallerReference>"));
        assert!(first.contains("<HostedZoneConfig><Comment>test</Comment></HostedZoneConfig>"));
        assert_ne!(first, second);

        let fixed = CreateHostedZoneInput {
            caller_reference: Some("ref-1".to_owned()),
            ..input
        };
        assert!(body(&fixed.to_rest_request().unwrap()).contains("<CallerReference>ref-1</CallerReference>"));
    }

    #[test]
    fn test_should_write_change_batch() {
        let input = ChangeResourceRecordSetsInput {
            hosted_zone_id: "Z1".to_owned(),
            change_batch: ChangeBatch {
                comment: None,
                changes: vec![Change::new(
                    ChangeAction::Create,
                    ResourceRecordSet::new("www.example.com.", "A", 300, ["192.0.2.1"]),
                )],
            },
            ..ChangeResourceRecordSetsInput::default()
        };
        let request = input.to_rest_request().unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/2013-04-01/hostedzone/Z1/rrset/");
        assert!(body(&request).contains(
            "<ChangeBatch><Changes><Change><Action>CREATE</Action><ResourceRecordSet>\
             <Name>www.example.com.</Name><Type>A</Type><TTL>300</TTL><ResourceRecords>\
             <ResourceRecord><Value>192.0.2.1</Value></ResourceRecord></ResourceRecords>\
             </ResourceRecordSet></Change></Changes></ChangeBatch>"
        ));
    }

    #[test]
    fn test_should_map_list_filters_to_query() {
        let request = ListResourceRecordSetsInput {
            hosted_zone_id: "Z1".to_owned(),
            start_record_name: Some("www.example.com.".to_owned()),
            start_record_type: Some("A".to_owned()),
            max_items: Some(10),
            ..ListResourceRecordSetsInput::default()
        }
        .to_rest_request()
        .unwrap();

        assert_eq!(request.path, "/2013-04-01/hostedzone/Z1/rrset");
        assert_eq!(
            request.query,
            [
                ("name".to_owned(), "www.example.com.".to_owned()),
                ("type".to_owned(), "A".to_owned()),
                ("maxitems".to_owned(), "10".to_owned()),
            ]
        );
    }
}
