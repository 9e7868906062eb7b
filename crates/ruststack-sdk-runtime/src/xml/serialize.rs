//! XML serialization: writing REST-XML request bodies.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::xml::error::XmlError;

/// Trait for serializing request types to XML.
///
/// Implementors write their content as child elements inside the current
/// XML context. The root element is written by [`to_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait XmlSerialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete XML document with declaration and an
/// optional default namespace on the root element.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: XmlSerialize>(
    root_element: &str,
    namespace: Option<&str>,
    value: &T,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root = writer.create_element(root_element);
    let root = match namespace {
        Some(ns) => root.with_attribute(("xmlns", ns)),
        None => root,
    };
    root.write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

/// Write a simple `<tag>text</tag>` element.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional boolean.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, if v { "true" } else { "false" })?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional i64.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_optional_i64<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<i64>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write `<tag>..</tag>` with `value` serialized as its children.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_struct<W: Write, T: XmlSerialize>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &T,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_inner_content(|w| value.serialize_xml(w))?;
    Ok(())
}

/// Write `<tag>..</tag>` only if the value is `Some`.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_optional_struct<W: Write, T: XmlSerialize>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&T>,
) -> io::Result<()> {
    match value {
        Some(v) => write_struct(writer, tag, v),
        None => Ok(()),
    }
}

/// Write `<tag><item_tag>..</item_tag>...</tag>`, serializing each item
/// with `write_item`. Nothing is written for an empty list.
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn write_list<W: Write, T>(
    writer: &mut Writer<W>,
    tag: &str,
    items: &[T],
    mut write_item: impl FnMut(&mut Writer<W>, &T) -> io::Result<()>,
) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writer.create_element(tag).write_inner_content(|w| {
        for item in items {
            write_item(w, item)?;
        }
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Comment {
        text: Option<String>,
        private: Option<bool>,
        values: Vec<String>,
    }

    impl XmlSerialize for Comment {
        fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
            write_optional_text(writer, "Comment", self.text.as_deref())?;
            write_optional_bool(writer, "PrivateZone", self.private)?;
            write_list(writer, "Values", &self.values, |w, v| {
                write_text_element(w, "Value", v)
            })
        }
    }

    #[test]
    fn test_should_write_document_with_namespace() {
        let xml = to_xml(
            "HostedZoneConfig",
            Some("https://route53.amazonaws.com/doc/2013-04-01/"),
            &Comment {
                text: Some("a < b".to_owned()),
                private: Some(false),
                values: vec!["1".to_owned(), "2".to_owned()],
            },
        )
        .unwrap();
        let xml = String::from_utf8(xml).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<HostedZoneConfig xmlns=\"https://route53.amazonaws.com/doc/2013-04-01/\">"
        ));
        assert!(xml.contains("<Comment>a &lt; b</Comment>"));
        assert!(xml.contains("<PrivateZone>false</PrivateZone>"));
        assert!(xml.contains("<Values><Value>1</Value><Value>2</Value></Values>"));
    }

    #[test]
    fn test_should_skip_absent_values() {
        let xml = to_xml(
            "Root",
            None,
            &Comment {
                text: None,
                private: None,
                values: Vec::new(),
            },
        )
        .unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.ends_with("<Root></Root>"));
    }
}
