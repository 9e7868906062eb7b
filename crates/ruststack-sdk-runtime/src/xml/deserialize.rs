//! XML deserialization: parsing service responses into Rust types.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

use crate::xml::error::XmlError;

/// Trait for deserializing response types from XML.
///
/// The opening tag has already been consumed by the caller; the
/// implementation reads child elements until the matching end tag.
pub trait XmlDeserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or a value cannot be parsed.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

impl XmlDeserialize for String {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        read_text_content(reader)
    }
}

/// Deserialize an XML document whose root element maps to `T`.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_xml<T: XmlDeserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(_) => return T::deserialize_xml(&mut reader),
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            _ => {}
        }
    }
}

/// Deserialize a query protocol response.
///
/// Query responses look like
///
/// ```xml
/// <DescribeLoadBalancersResponse xmlns="...">
///   <DescribeLoadBalancersResult>...</DescribeLoadBalancersResult>
///   <ResponseMetadata><RequestId>...</RequestId></ResponseMetadata>
/// </DescribeLoadBalancersResponse>
/// ```
///
/// The `result_tag` element is deserialized as `T`. Operations without output
/// omit it, in which case `T::default()` is returned. The request id is
/// returned alongside.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_query_response<T: XmlDeserialize + Default>(
    xml: &[u8],
    result_tag: &str,
) -> Result<(T, Option<String>), XmlError> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Empty(_) => return Ok((T::default(), None)),
            Event::Eof => return Err(XmlError::MissingElement("root element".to_owned())),
            _ => {}
        }
    }

    let mut result = None;
    let mut request_id = None;
    read_children(&mut reader, |reader, tag| {
        if tag == result_tag {
            result = Some(T::deserialize_xml(reader)?);
        } else if tag == "ResponseMetadata" {
            read_children(reader, |reader, tag| {
                match tag {
                    "RequestId" => request_id = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
        } else {
            skip_element(reader)?;
        }
        Ok(())
    })?;

    Ok((result.unwrap_or_default(), request_id))
}

/// Visit each child element of the current element.
///
/// `visit` is called with the local name of every child start tag and must
/// consume the child through its end tag (typically with
/// [`read_text_content`], a nested deserializer, or [`skip_element`]).
/// Self-closing children carry no content and are not visited. Returns after
/// the parent's end tag has been consumed.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or any error from `visit`.
pub fn read_children<'i, F>(reader: &mut Reader<&'i [u8]>, mut visit: F) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&'i [u8]>, &str) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                let tag = std::str::from_utf8(name.as_ref())
                    .map_err(|err| XmlError::InvalidValue(err.to_string()))?;
                visit(reader, tag)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF inside element".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
///
/// Text is kept verbatim; entity references are resolved in place.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or an unknown entity reference.
pub fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::InvalidValue(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::InvalidValue(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::InvalidValue(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::InvalidValue(err.to_string()))?;
                    let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                        XmlError::InvalidValue(format!("unknown entity reference &{name};"))
                    })?;
                    text.push_str(resolved);
                }
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
///
/// # Errors
///
/// Returns `XmlError` on malformed XML.
pub fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Deserialize a list of items, each wrapped in `item_tag` (`member` for
/// the query protocol).
///
/// # Errors
///
/// Returns `XmlError` on malformed XML or if an item fails to deserialize.
pub fn deserialize_list<T: XmlDeserialize>(
    reader: &mut Reader<&[u8]>,
    item_tag: &str,
) -> Result<Vec<T>, XmlError> {
    let mut items = Vec::new();
    read_children(reader, |reader, tag| {
        if tag == item_tag {
            items.push(T::deserialize_xml(reader)?);
        } else {
            skip_element(reader)?;
        }
        Ok(())
    })?;
    Ok(items)
}

/// Parse a boolean from XML text.
///
/// # Errors
///
/// Returns `XmlError::InvalidValue` for anything but `true`/`false`.
pub fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::InvalidValue(format!("invalid boolean: {s}"))),
    }
}

/// Parse an i32 from XML text.
///
/// # Errors
///
/// Returns `XmlError::InvalidValue` if `s` is not an integer.
pub fn parse_i32(s: &str) -> Result<i32, XmlError> {
    s.parse::<i32>()
        .map_err(|e| XmlError::InvalidValue(format!("invalid i32 '{s}': {e}")))
}

/// Parse an i64 from XML text.
///
/// # Errors
///
/// Returns `XmlError::InvalidValue` if `s` is not an integer.
pub fn parse_i64(s: &str) -> Result<i64, XmlError> {
    s.parse::<i64>()
        .map_err(|e| XmlError::InvalidValue(format!("invalid i64 '{s}': {e}")))
}

/// Parse an ISO 8601 timestamp from XML text.
///
/// # Errors
///
/// Returns `XmlError::InvalidValue` if `s` is not a timestamp.
pub fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, XmlError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map_err(|e| XmlError::InvalidValue(format!("invalid timestamp '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Listener {
        protocol: String,
        port: i32,
    }

    impl XmlDeserialize for Listener {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut out = Self::default();
            read_children(reader, |reader, tag| {
                match tag {
                    "Protocol" => out.protocol = read_text_content(reader)?,
                    "LoadBalancerPort" => out.port = parse_i32(&read_text_content(reader)?)?,
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
            Ok(out)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct DescribeResult {
        listeners: Vec<Listener>,
        zones: Vec<String>,
    }

    impl XmlDeserialize for DescribeResult {
        fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
            let mut out = Self::default();
            read_children(reader, |reader, tag| {
                match tag {
                    "Listeners" => out.listeners = deserialize_list(reader, "member")?,
                    "AvailabilityZones" => out.zones = deserialize_list(reader, "member")?,
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
            Ok(out)
        }
    }

    const RESPONSE: &str = r#"<?xml version="1.0"?>
<DescribeThingsResponse xmlns="http://example.com/doc/">
  <DescribeThingsResult>
    <Listeners>
      <member><Protocol>HTTP</Protocol><LoadBalancerPort>80</LoadBalancerPort></member>
      <member><Protocol>TCP</Protocol><LoadBalancerPort>443</LoadBalancerPort><Extra><Deep/></Extra></member>
    </Listeners>
    <AvailabilityZones><member>us-east-1a</member><member>us-east-1b</member></AvailabilityZones>
    <Unknown>ignored</Unknown>
  </DescribeThingsResult>
  <ResponseMetadata><RequestId>83c88b9d-12b7-11e3-8b82-87b12EXAMPLE</RequestId></ResponseMetadata>
</DescribeThingsResponse>"#;

    #[test]
    fn test_should_deserialize_query_response() {
        let (result, request_id): (DescribeResult, _) =
            from_query_response(RESPONSE.as_bytes(), "DescribeThingsResult").unwrap();

        assert_eq!(result.listeners.len(), 2);
        assert_eq!(result.listeners[1].protocol, "TCP");
        assert_eq!(result.listeners[1].port, 443);
        assert_eq!(result.zones, ["us-east-1a", "us-east-1b"]);
        assert_eq!(
            request_id.as_deref(),
            Some("83c88b9d-12b7-11e3-8b82-87b12EXAMPLE")
        );
    }

    #[test]
    fn test_should_default_when_result_is_absent() {
        let xml = "<DeleteThingResponse><ResponseMetadata><RequestId>r-1</RequestId>\
                   </ResponseMetadata></DeleteThingResponse>";
        let (result, request_id): (DescribeResult, _) =
            from_query_response(xml.as_bytes(), "DeleteThingResult").unwrap();
        assert_eq!(result, DescribeResult::default());
        assert_eq!(request_id.as_deref(), Some("r-1"));
    }

    #[test]
    fn test_should_resolve_entities_in_text() {
        let xml = "<Listener><Protocol>a &amp; b &lt;c&gt; &#65;</Protocol></Listener>";
        let listener: Listener = from_xml(xml.as_bytes()).unwrap();
        assert_eq!(listener.protocol, "a & b <c> A");
    }

    #[test]
    fn test_should_keep_cdata_text() {
        let xml = "<Listener><Protocol>HTTP <![CDATA[<raw> & more]]></Protocol></Listener>";
        let listener: Listener = from_xml(xml.as_bytes()).unwrap();
        assert_eq!(listener.protocol, "HTTP <raw> & more");
    }

    #[test]
    fn test_should_fail_on_invalid_number() {
        let xml = "<Listener><LoadBalancerPort>eighty</LoadBalancerPort></Listener>";
        assert!(matches!(
            from_xml::<Listener>(xml.as_bytes()),
            Err(XmlError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_should_fail_on_truncated_document() {
        let xml = "<Listener><Protocol>HTTP</Protocol>";
        assert!(from_xml::<Listener>(xml.as_bytes()).is_err());
    }

    #[test]
    fn test_should_fail_on_empty_document() {
        assert!(matches!(
            from_xml::<Listener>(b""),
            Err(XmlError::MissingElement(_))
        ));
    }

    #[test]
    fn test_should_parse_scalars() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("yes").is_err());
        assert_eq!(parse_i64("-5").unwrap(), -5);
        let ts = parse_timestamp("2024-01-02T03:04:05.000Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-02T03:04:05+00:00");
    }
}
