//! XML layer for the query and REST-XML protocols.
//!
//! - [`XmlSerialize`] and [`to_xml`] write request bodies (Route 53).
//! - [`XmlDeserialize`], [`from_xml`] and [`from_query_response`] read
//!   response bodies.
//!
//! Conventions shared by the services:
//!
//! - Booleans: lowercase `true`/`false`
//! - Timestamps: ISO 8601 (`2024-01-01T00:00:00.000Z`)
//! - Query protocol lists: `<Items><member>...</member></Items>`

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{XmlDeserialize, from_query_response, from_xml};
pub use error::XmlError;
pub use serialize::{XmlSerialize, to_xml};
