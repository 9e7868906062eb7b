//! Unmarshalling of service error responses.
//!
//! XML services answer with
//!
//! ```xml
//! <ErrorResponse>
//!   <Error><Type>Sender</Type><Code>...</Code><Message>...</Message></Error>
//!   <RequestId>...</RequestId>
//! </ErrorResponse>
//! ```
//!
//! (Route 53 additionally reports batch validation failures as
//! `<InvalidChangeBatch><Messages><Message>..</Message></Messages>`), and JSON
//! services with `{"__type": "...", "message": "..."}`.

use http::{HeaderMap, StatusCode};
use quick_xml::Reader;
use quick_xml::events::Event;
use ruststack_sdk_core::{Fault, ServiceError};
use serde::Deserialize;

use crate::protocol::ServiceMetadata;
use crate::xml::deserialize::{read_children, read_text_content, skip_element};
use crate::xml::error::XmlError;

const REQUEST_ID_HEADERS: [&str; 2] = ["x-amzn-requestid", "x-amz-request-id"];

/// The fields found in an error body before classification.
#[derive(Debug, Default)]
struct RawError {
    code: Option<String>,
    message: Option<String>,
    error_type: Option<String>,
    request_id: Option<String>,
}

/// Parse an XML error body.
pub(crate) fn parse_xml_error(
    metadata: &ServiceMetadata,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> ServiceError {
    let raw = read_xml_error(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "error body is not valid XML");
        RawError::default()
    });
    classify(metadata, status, headers, raw)
}

/// Parse a JSON error body.
pub(crate) fn parse_json_error(
    metadata: &ServiceMetadata,
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
) -> ServiceError {
    #[derive(Deserialize)]
    struct JsonError {
        #[serde(rename = "__type")]
        error_type: Option<String>,
        #[serde(alias = "Message")]
        message: Option<String>,
    }

    let parsed: Option<JsonError> = serde_json::from_slice(body).ok();
    let header_code = headers
        .get("x-amzn-errortype")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(':').next().unwrap_or(v).to_owned());
    let (body_code, message) = parsed
        .map(|e| (e.error_type, e.message))
        .unwrap_or_default();

    let raw = RawError {
        code: body_code
            .map(|t| t.rsplit('#').next().unwrap_or(&t).to_owned())
            .or(header_code),
        message,
        error_type: None,
        request_id: None,
    };
    classify(metadata, status, headers, raw)
}

fn classify(
    metadata: &ServiceMetadata,
    status: StatusCode,
    headers: &HeaderMap,
    raw: RawError,
) -> ServiceError {
    let code = raw
        .code
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| fallback_code(status));
    let request_id = raw.request_id.or_else(|| {
        REQUEST_ID_HEADERS
            .iter()
            .find_map(|name| headers.get(*name))
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
    });

    ServiceError {
        service: metadata.service_name,
        modeled: metadata.is_modeled_error(&code),
        fault: Fault::from_type_or_status(raw.error_type.as_deref(), status),
        message: raw.message.unwrap_or_default(),
        code,
        request_id,
        status,
    }
}

fn fallback_code(status: StatusCode) -> String {
    match status {
        StatusCode::NOT_FOUND => "NotFound".to_owned(),
        StatusCode::FORBIDDEN => "AccessDenied".to_owned(),
        s if s.is_server_error() => "InternalFailure".to_owned(),
        s => format!("Http{}", s.as_u16()),
    }
}

fn read_xml_error(body: &[u8]) -> Result<RawError, XmlError> {
    let mut reader = Reader::from_reader(body);
    let root = loop {
        match reader.read_event()? {
            Event::Start(e) => {
                break String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
            }
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            _ => {}
        }
    };

    let mut raw = RawError::default();
    if root != "ErrorResponse" && root != "Response" && root != "Error" {
        // Route 53 names the root after the error itself.
        raw.code = Some(root);
    }
    let mut messages = Vec::new();
    read_error_fields(&mut reader, &mut raw, &mut messages)?;
    if raw.message.is_none() && !messages.is_empty() {
        raw.message = Some(messages.join("; "));
    }
    Ok(raw)
}

fn read_error_fields(
    reader: &mut Reader<&[u8]>,
    raw: &mut RawError,
    messages: &mut Vec<String>,
) -> Result<(), XmlError> {
    read_children(reader, |reader, tag| {
        match tag {
            "Error" | "Errors" => read_error_fields(reader, raw, messages)?,
            "Code" => raw.code = Some(read_text_content(reader)?),
            "Message" if raw.message.is_none() => {
                raw.message = Some(read_text_content(reader)?);
            }
            "Type" => raw.error_type = Some(read_text_content(reader)?),
            "RequestId" | "RequestID" => raw.request_id = Some(read_text_content(reader)?),
            "Messages" => {
                read_children(reader, |reader, tag| {
                    match tag {
                        "Message" => messages.push(read_text_content(reader)?),
                        _ => skip_element(reader)?,
                    }
                    Ok(())
                })?;
            }
            _ => skip_element(reader)?,
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Protocol;

    const METADATA: ServiceMetadata = ServiceMetadata {
        service_name: "Route53",
        signing_name: "route53",
        endpoint_prefix: "route53",
        api_version: "2013-04-01",
        protocol: Protocol::RestXml,
        json_target_prefix: None,
        global_region: Some("us-east-1"),
        xml_namespace: None,
        error_codes: &["NoSuchHostedZone", "InvalidChangeBatch", "ResourceNotFoundException"],
    };

    #[test]
    fn test_should_parse_query_error_response() {
        let body = br#"<ErrorResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
  <Error>
    <Type>Sender</Type>
    <Code>NoSuchHostedZone</Code>
    <Message>No hosted zone found with ID: Z1</Message>
  </Error>
  <RequestId>req-42</RequestId>
</ErrorResponse>"#;
        let err = parse_xml_error(&METADATA, StatusCode::NOT_FOUND, &HeaderMap::new(), body);

        assert_eq!(err.code, "NoSuchHostedZone");
        assert_eq!(err.message, "No hosted zone found with ID: Z1");
        assert_eq!(err.request_id.as_deref(), Some("req-42"));
        assert_eq!(err.fault, Fault::Client);
        assert!(err.modeled);
    }

    #[test]
    fn test_should_parse_invalid_change_batch() {
        let body = b"<InvalidChangeBatch><Messages><Message>first</Message>\
                     <Message>second</Message></Messages></InvalidChangeBatch>";
        let err = parse_xml_error(&METADATA, StatusCode::BAD_REQUEST, &HeaderMap::new(), body);

        assert_eq!(err.code, "InvalidChangeBatch");
        assert_eq!(err.message, "first; second");
        assert!(err.modeled);
    }

    #[test]
    fn test_should_fall_back_for_unparseable_body() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", "hdr-1".parse().unwrap());
        let err = parse_xml_error(
            &METADATA,
            StatusCode::SERVICE_UNAVAILABLE,
            &headers,
            b"<html>oops",
        );

        assert_eq!(err.code, "InternalFailure");
        assert_eq!(err.fault, Fault::Server);
        assert_eq!(err.request_id.as_deref(), Some("hdr-1"));
        assert!(!err.modeled);
    }

    #[test]
    fn test_should_parse_json_error() {
        let body = br#"{"__type":"com.amazonaws.logs#ResourceNotFoundException","message":"gone"}"#;
        let err = parse_json_error(&METADATA, StatusCode::BAD_REQUEST, &HeaderMap::new(), body);

        assert_eq!(err.code, "ResourceNotFoundException");
        assert_eq!(err.message, "gone");
        assert!(err.modeled);
    }

    #[test]
    fn test_should_use_error_type_header_for_json() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            "ThrottlingException:http://internal.amazon.com/".parse().unwrap(),
        );
        let err = parse_json_error(&METADATA, StatusCode::BAD_REQUEST, &headers, b"");

        assert_eq!(err.code, "ThrottlingException");
        assert!(!err.modeled);
    }
}
