//! Errors raised while writing request bodies or reading response documents.

use std::io;

/// Failure to serialize a request body or deserialize a response document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// Writing the request body failed.
    #[error("failed to write XML body: {0}")]
    Io(#[from] io::Error),

    /// The response is not well-formed XML.
    #[error("malformed XML response: {0}")]
    Malformed(#[from] quick_xml::Error),

    /// A required element was absent.
    #[error("missing required element <{0}>")]
    MissingElement(String),

    /// The document ended inside an element, or held an element where text
    /// was expected.
    #[error("unexpected element or end of document: {0}")]
    UnexpectedElement(String),

    /// Element text that does not parse as the modelled type.
    #[error("invalid element value: {0}")]
    InvalidValue(String),
}
