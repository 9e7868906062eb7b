//! Protocol and transport runtime for the RustStack SDK service clients.
//!
//! Every synchronous service client owns a [`ClientRuntime`] built from a
//! static [`ServiceMetadata`]. The runtime speaks the three wire protocols
//! used by the supported services:
//!
//! | Protocol | Services | Request | Response |
//! |----------|----------|---------|----------|
//! | [`Protocol::AwsQuery`] | Auto Scaling, ELB | form body | XML |
//! | [`Protocol::RestXml`] | Route 53 | REST path, XML body | XML |
//! | [`Protocol::AwsJson1_1`] | CloudWatch Logs | `X-Amz-Target`, JSON | JSON |
//!
//! # Modules
//!
//! - [`protocol`] - Service descriptions
//! - [`query`] - Query protocol parameter flattening
//! - [`xml`] - XML serialization and deserialization
//! - [`transport`] - HTTP transport trait and the `reqwest` implementation
//! - [`runtime`] - The request pipeline
//! - [`mock`] - Scripted transport for tests

mod error;
pub mod mock;
pub mod protocol;
pub mod query;
pub mod runtime;
pub mod transport;
pub mod xml;

pub use mock::MockTransport;
pub use protocol::{Protocol, ServiceMetadata};
pub use query::{QueryParams, QuerySerialize};
pub use runtime::{ClientRuntime, ClientRuntimeBuilder, RestRequest};
pub use transport::{HttpTransport, ReqwestTransport};
pub use xml::{XmlDeserialize, XmlError, XmlSerialize};
