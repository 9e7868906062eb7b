//! The request pipeline shared by every synchronous service client.
//!
//! Each call goes through the same phases, timed into [`RequestMetrics`]:
//!
//! 1. marshall the input into an [`http::Request`] for the service protocol,
//! 2. resolve credentials and sign,
//! 3. send through the [`HttpTransport`],
//! 4. turn non-2xx responses into [`ServiceError`]s, or unmarshall the output.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use bytes::Bytes;
use chrono::Utc;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use ruststack_sdk_auth::canonical::uri_encode;
use ruststack_sdk_auth::{SigningParams, sign_request};
use ruststack_sdk_core::{
    ClientConfig, ClientError, CredentialsProvider, CredentialsProviderChain, MetricsCollector,
    RequestMetrics, RequestOptions, SdkRequest, SdkResult, ServiceError,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{parse_json_error, parse_xml_error};
use crate::protocol::{Protocol, ServiceMetadata};
use crate::query::{QueryParams, QuerySerialize};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::xml::{XmlDeserialize, from_query_response, from_xml};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
const XML_CONTENT_TYPE: &str = "application/xml";
const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A REST-XML request before it is bound to an endpoint.
#[derive(Debug, Clone)]
pub struct RestRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Request path with every label already percent-encoded.
    pub path: String,
    /// Query parameters, encoded when the URL is built.
    pub query: Vec<(String, String)>,
    /// Optional XML body.
    pub body: Option<Vec<u8>>,
}

impl RestRequest {
    /// Start a request without query or body.
    pub fn new(method: http::Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a query parameter if the value is present.
    #[must_use]
    pub fn with_query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.query.push((name.to_owned(), v.to_string()));
        }
        self
    }

    /// Attach an XML body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Builder for [`ClientRuntime`].
#[derive(Debug)]
pub struct ClientRuntimeBuilder {
    metadata: &'static ServiceMetadata,
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    metrics: Option<Arc<dyn MetricsCollector>>,
}

impl ClientRuntimeBuilder {
    /// Use a specific transport instead of the default `reqwest` one.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a specific credentials provider instead of the default chain.
    #[must_use]
    pub fn credentials(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Report the metrics of every request to `collector`.
    #[must_use]
    pub fn metrics(mut self, collector: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = Some(collector);
        self
    }

    /// Validate the configuration and build the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the configuration is invalid or the
    /// default transport cannot be created.
    pub fn build(self) -> Result<ClientRuntime, ClientError> {
        self.config.validate()?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(CredentialsProviderChain::default()));
        let endpoint = self
            .config
            .endpoint
            .clone()
            .unwrap_or_else(|| self.metadata.default_endpoint(self.config.region.as_str()))
            .trim_end_matches('/')
            .to_owned();

        debug!(
            service = self.metadata.service_name,
            %endpoint,
            region = %self.config.region,
            "client runtime created"
        );

        Ok(ClientRuntime {
            metadata: self.metadata,
            config: self.config,
            endpoint,
            transport,
            credentials,
            metrics: self.metrics,
            closed: AtomicBool::new(false),
        })
    }
}

/// Marshalls, signs, sends and unmarshalls requests for one service.
#[derive(Debug)]
pub struct ClientRuntime {
    metadata: &'static ServiceMetadata,
    config: ClientConfig,
    endpoint: String,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialsProvider>,
    metrics: Option<Arc<dyn MetricsCollector>>,
    closed: AtomicBool,
}

impl ClientRuntime {
    /// Start building a runtime for the described service.
    #[must_use]
    pub fn builder(metadata: &'static ServiceMetadata, config: ClientConfig) -> ClientRuntimeBuilder {
        ClientRuntimeBuilder {
            metadata,
            config,
            transport: None,
            credentials: None,
            metrics: None,
        }
    }

    /// The service description.
    #[must_use]
    pub fn metadata(&self) -> &'static ServiceMetadata {
        self.metadata
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Refuse further requests and release the transport.
    pub fn shutdown(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.transport.shutdown();
            debug!(service = self.metadata.service_name, "client runtime shut down");
        }
    }

    /// Execute a query protocol operation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`]s for local failures and [`ServiceError`] for
    /// error responses.
    pub fn execute_query<I, O>(&self, operation: &'static str, input: &I) -> SdkResult<O>
    where
        I: QuerySerialize + SdkRequest,
        O: XmlDeserialize + Default,
    {
        let options = input.request_options();
        self.execute(
            operation,
            options,
            || {
                let mut params = QueryParams::new(operation, self.metadata.api_version);
                input.serialize_query("", &mut params);
                for (name, value) in &options.custom_query_params {
                    params.push(name.as_str(), value.as_str());
                }
                self.build_request(
                    operation,
                    http::Method::POST,
                    "/",
                    &[],
                    Some(FORM_CONTENT_TYPE),
                    params.to_form_body().into(),
                )
            },
            |response| {
                let (output, request_id) =
                    from_query_response::<O>(response.body(), &format!("{operation}Result"))
                        .map_err(|e| unmarshall_error(operation, &e))?;
                debug!(operation, request_id = request_id.as_deref(), "query response decoded");
                Ok(output)
            },
        )
    }

    /// Execute a REST-XML operation.
    ///
    /// An empty response body yields `O::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`]s for local failures and [`ServiceError`] for
    /// error responses.
    pub fn execute_rest_xml<O>(
        &self,
        operation: &'static str,
        input: &impl SdkRequest,
        request: RestRequest,
    ) -> SdkResult<O>
    where
        O: XmlDeserialize + Default,
    {
        let options = input.request_options();
        self.execute(
            operation,
            options,
            || {
                let mut query = request.query;
                query.extend(options.custom_query_params.iter().cloned());
                let content_type = request.body.as_ref().map(|_| XML_CONTENT_TYPE);
                self.build_request(
                    operation,
                    request.method,
                    &request.path,
                    &query,
                    content_type,
                    request.body.unwrap_or_default().into(),
                )
            },
            |response| {
                if response.body().iter().all(u8::is_ascii_whitespace) {
                    return Ok(O::default());
                }
                from_xml::<O>(response.body()).map_err(|e| unmarshall_error(operation, &e))
            },
        )
    }

    /// Execute a JSON 1.1 operation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`]s for local failures and [`ServiceError`] for
    /// error responses.
    pub fn execute_json<I, O>(&self, operation: &'static str, input: &I) -> SdkResult<O>
    where
        I: Serialize + SdkRequest,
        O: DeserializeOwned,
    {
        let options = input.request_options();
        self.execute(
            operation,
            options,
            || {
                let body = serde_json::to_vec(input).map_err(|e| ClientError::Marshall {
                    operation,
                    message: e.to_string(),
                })?;
                let mut request = self.build_request(
                    operation,
                    http::Method::POST,
                    "/",
                    &options.custom_query_params,
                    Some(JSON_CONTENT_TYPE),
                    body.into(),
                )?;
                let target = format!(
                    "{}{operation}",
                    self.metadata.json_target_prefix.unwrap_or_default()
                );
                insert_header(&mut request, operation, "x-amz-target", &target)?;
                Ok(request)
            },
            |response| {
                let body: &[u8] = if response.body().iter().all(u8::is_ascii_whitespace) {
                    b"{}"
                } else {
                    response.body()
                };
                serde_json::from_slice(body).map_err(|e| ClientError::Unmarshall {
                    operation,
                    message: e.to_string(),
                })
            },
        )
    }

    fn execute<O>(
        &self,
        operation: &'static str,
        options: &RequestOptions,
        marshall: impl FnOnce() -> Result<http::Request<Bytes>, ClientError>,
        unmarshall: impl FnOnce(&http::Response<Bytes>) -> Result<O, ClientError>,
    ) -> SdkResult<O> {
        let started = Instant::now();
        let mut metrics = RequestMetrics {
            service: self.metadata.service_name,
            operation,
            ..RequestMetrics::default()
        };

        let result = self.run_phases(options, marshall, unmarshall, &mut metrics);

        metrics.total = started.elapsed();
        metrics.success = result.is_ok();
        if let Some(collector) = &self.metrics {
            collector.record(&metrics);
        }
        match &result {
            Ok(_) => debug!(
                service = self.metadata.service_name,
                operation,
                status = metrics.status.map(|s| s.as_u16()),
                elapsed = ?metrics.total,
                "request succeeded"
            ),
            Err(error) => debug!(
                service = self.metadata.service_name,
                operation,
                %error,
                elapsed = ?metrics.total,
                "request failed"
            ),
        }
        result
    }

    fn run_phases<O>(
        &self,
        options: &RequestOptions,
        marshall: impl FnOnce() -> Result<http::Request<Bytes>, ClientError>,
        unmarshall: impl FnOnce(&http::Response<Bytes>) -> Result<O, ClientError>,
        metrics: &mut RequestMetrics,
    ) -> SdkResult<O> {
        if self.is_closed() {
            return Err(ClientError::Shutdown.into());
        }

        let phase = Instant::now();
        let mut request = marshall()?;
        for (name, value) in &options.custom_headers {
            insert_header(&mut request, metrics.operation, name, value)?;
        }
        metrics.marshall = phase.elapsed();

        let phase = Instant::now();
        let credentials = match &options.credentials {
            Some(credentials) => credentials.clone(),
            None => self.credentials.credentials()?,
        };
        let params = SigningParams::new(
            self.metadata.signing_region(self.config.region.as_str()),
            self.metadata.signing_name,
            Utc::now(),
        );
        sign_request(&mut request, &credentials, &params).map_err(ClientError::from)?;
        metrics.sign = phase.elapsed();

        let phase = Instant::now();
        let response = self.transport.send(request)?;
        metrics.transport = phase.elapsed();
        metrics.status = Some(response.status());

        if !response.status().is_success() {
            return Err(self.service_error(&response).into());
        }

        let phase = Instant::now();
        let output = unmarshall(&response)?;
        metrics.unmarshall = phase.elapsed();
        Ok(output)
    }

    fn build_request(
        &self,
        operation: &'static str,
        method: http::Method,
        path: &str,
        query: &[(String, String)],
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<http::Request<Bytes>, ClientError> {
        let mut uri = format!("{}{path}", self.endpoint);
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
                .collect();
            uri.push('?');
            uri.push_str(&encoded.join("&"));
        }

        let mut builder = http::Request::builder()
            .method(method)
            .uri(uri)
            .header(USER_AGENT, self.config.user_agent.as_str());
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(body).map_err(|e| ClientError::Marshall {
            operation,
            message: e.to_string(),
        })
    }

    fn service_error(&self, response: &http::Response<Bytes>) -> ServiceError {
        let parse = match self.metadata.protocol {
            Protocol::AwsJson1_1 => parse_json_error,
            Protocol::AwsQuery | Protocol::RestXml => parse_xml_error,
        };
        parse(
            self.metadata,
            response.status(),
            response.headers(),
            response.body(),
        )
    }
}

fn insert_header(
    request: &mut http::Request<Bytes>,
    operation: &'static str,
    name: &str,
    value: &str,
) -> Result<(), ClientError> {
    let invalid = |message: String| ClientError::Marshall { operation, message };
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| invalid(format!("invalid header name {name}: {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| invalid(format!("invalid value for header {name}: {e}")))?;
    request.headers_mut().insert(name, value);
    Ok(())
}

fn unmarshall_error(operation: &'static str, error: &crate::xml::XmlError) -> ClientError {
    ClientError::Unmarshall {
        operation,
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ruststack_sdk_core::{
        Credentials, OperationStats, SdkError, StaticCredentialsProvider, impl_sdk_request,
    };
    use serde::Deserialize;

    use super::*;
    use crate::mock::MockTransport;
    use crate::query::key;
    use crate::xml::deserialize::{read_children, read_text_content, skip_element};
    use crate::xml::XmlError;

    static QUERY_SERVICE: ServiceMetadata = ServiceMetadata {
        service_name: "Widgets",
        signing_name: "widgets",
        endpoint_prefix: "widgets",
        api_version: "2020-01-01",
        protocol: Protocol::AwsQuery,
        json_target_prefix: None,
        global_region: None,
        xml_namespace: None,
        error_codes: &["WidgetNotFound"],
    };

    static JSON_SERVICE: ServiceMetadata = ServiceMetadata {
        service_name: "Gadgets",
        signing_name: "gadgets",
        endpoint_prefix: "gadgets",
        api_version: "2020-01-01",
        protocol: Protocol::AwsJson1_1,
        json_target_prefix: Some("Gadgets_20200101."),
        global_region: None,
        xml_namespace: None,
        error_codes: &["GadgetMissing"],
    };

    static REST_SERVICE: ServiceMetadata = ServiceMetadata {
        service_name: "Zones",
        signing_name: "zones",
        endpoint_prefix: "zones",
        api_version: "2020-01-01",
        protocol: Protocol::RestXml,
        json_target_prefix: None,
        global_region: Some("us-east-1"),
        xml_namespace: None,
        error_codes: &[],
    };

    #[derive(Debug, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct WidgetInput {
        name: String,
        #[serde(skip)]
        request_options: RequestOptions,
    }

    impl_sdk_request!(WidgetInput);

    impl QuerySerialize for WidgetInput {
        fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
            params.push(key(prefix, "WidgetName"), self.name.as_str());
        }
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct WidgetOutput {
        #[serde(default)]
        widget_id: Option<String>,
    }

    impl XmlDeserialize for WidgetOutput {
        fn deserialize_xml(
            reader: &mut quick_xml::Reader<&[u8]>,
        ) -> Result<Self, XmlError> {
            let mut out = Self::default();
            read_children(reader, |reader, tag| {
                match tag {
                    "WidgetId" => out.widget_id = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                }
                Ok(())
            })?;
            Ok(out)
        }
    }

    fn runtime(metadata: &'static ServiceMetadata, mock: &Arc<MockTransport>) -> ClientRuntime {
        ClientRuntime::builder(
            metadata,
            ClientConfig::default().with_endpoint("http://localhost:4566/"),
        )
        .transport(Arc::clone(mock) as Arc<dyn HttpTransport>)
        .credentials(Arc::new(StaticCredentialsProvider::new(Credentials::new(
            "AKIDEXAMPLE",
            "secret",
        ))))
        .build()
        .unwrap()
    }

    fn widget(name: &str) -> WidgetInput {
        WidgetInput {
            name: name.to_owned(),
            ..WidgetInput::default()
        }
    }

    #[test]
    fn test_should_execute_query_operation() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            200,
            "<CreateWidgetResponse><CreateWidgetResult><WidgetId>w-1</WidgetId>\
             </CreateWidgetResult></CreateWidgetResponse>",
        );
        let runtime = runtime(&QUERY_SERVICE, &mock);

        let out: WidgetOutput = runtime.execute_query("CreateWidget", &widget("a b")).unwrap();
        assert_eq!(out.widget_id.as_deref(), Some("w-1"));

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, http::Method::POST);
        assert_eq!(sent.uri.to_string(), "http://localhost:4566/");
        assert_eq!(sent.header("content-type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(sent.form_param("Action").as_deref(), Some("CreateWidget"));
        assert_eq!(sent.form_param("Version").as_deref(), Some("2020-01-01"));
        assert_eq!(sent.form_param("WidgetName").as_deref(), Some("a b"));
        let auth = sent.header("authorization").unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
        assert!(auth.contains("/us-east-1/widgets/aws4_request"));
    }

    #[test]
    fn test_should_return_service_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(
            400,
            "<ErrorResponse><Error><Type>Sender</Type><Code>WidgetNotFound</Code>\
             <Message>no such widget</Message></Error><RequestId>r-9</RequestId></ErrorResponse>",
        );
        let runtime = runtime(&QUERY_SERVICE, &mock);

        let err = runtime
            .execute_query::<_, WidgetOutput>("DeleteWidget", &widget("x"))
            .unwrap_err();
        let service = err.as_service().unwrap();
        assert_eq!(service.code, "WidgetNotFound");
        assert_eq!(service.message, "no such widget");
        assert_eq!(service.request_id.as_deref(), Some("r-9"));
        assert!(service.modeled);
    }

    #[test]
    fn test_should_report_unmarshall_failure() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "<CreateWidgetResponse><CreateWidgetResult>");
        let runtime = runtime(&QUERY_SERVICE, &mock);

        let err = runtime
            .execute_query::<_, WidgetOutput>("CreateWidget", &widget("x"))
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Client(ClientError::Unmarshall {
                operation: "CreateWidget",
                ..
            })
        ));
    }

    #[test]
    fn test_should_execute_json_operation() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, r#"{"widgetId":"g-1"}"#);
        let runtime = runtime(&JSON_SERVICE, &mock);

        let out: WidgetOutput = runtime.execute_json("PutGadget", &widget("g")).unwrap();
        assert_eq!(out.widget_id.as_deref(), Some("g-1"));

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.header("x-amz-target"), Some("Gadgets_20200101.PutGadget"));
        assert_eq!(sent.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(sent.body_str(), r#"{"name":"g"}"#);
    }

    #[test]
    fn test_should_accept_empty_json_body() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "");
        let runtime = runtime(&JSON_SERVICE, &mock);

        let out: WidgetOutput = runtime.execute_json("DeleteGadget", &widget("g")).unwrap();
        assert!(out.widget_id.is_none());
    }

    #[test]
    fn test_should_parse_json_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(400, r#"{"__type":"GadgetMissing","message":"gone"}"#);
        let runtime = runtime(&JSON_SERVICE, &mock);

        let err = runtime
            .execute_json::<_, WidgetOutput>("DeleteGadget", &widget("g"))
            .unwrap_err();
        assert_eq!(err.code(), Some("GadgetMissing"));
    }

    #[test]
    fn test_should_execute_rest_xml_with_query_and_global_region() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "<GetZoneResponse><WidgetId>z-1</WidgetId></GetZoneResponse>");
        let runtime = ClientRuntime::builder(
            &REST_SERVICE,
            ClientConfig::default()
                .with_region("eu-west-1")
                .with_endpoint("http://localhost:4566"),
        )
        .transport(Arc::clone(&mock) as Arc<dyn HttpTransport>)
        .credentials(Arc::new(StaticCredentialsProvider::new(Credentials::new(
            "AK", "SK",
        ))))
        .build()
        .unwrap();

        let request = RestRequest::new(http::Method::GET, "/2020-01-01/zone")
            .with_query("maxitems", Some(10))
            .with_query::<String>("marker", None)
            .with_query("name", Some("a b"));
        let out: WidgetOutput = runtime
            .execute_rest_xml("GetZone", &widget("z"), request)
            .unwrap();
        assert_eq!(out.widget_id.as_deref(), Some("z-1"));

        let sent = mock.last_request().unwrap();
        assert_eq!(
            sent.uri.to_string(),
            "http://localhost:4566/2020-01-01/zone?maxitems=10&name=a%20b"
        );
        assert!(sent.header("content-type").is_none());
        assert!(
            sent.header("authorization")
                .unwrap()
                .contains("/us-east-1/zones/aws4_request")
        );
    }

    #[test]
    fn test_should_default_empty_rest_xml_response() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(204, "");
        let runtime = runtime(&REST_SERVICE, &mock);
        let out: WidgetOutput = runtime
            .execute_rest_xml(
                "DeleteZone",
                &widget("z"),
                RestRequest::new(http::Method::DELETE, "/2020-01-01/zone/z"),
            )
            .unwrap();
        assert!(out.widget_id.is_none());
    }

    #[test]
    fn test_should_apply_request_options() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "<CreateWidgetResponse/>");
        let runtime = runtime(&QUERY_SERVICE, &mock);

        let mut input = widget("w");
        input.request_options = RequestOptions::default()
            .with_credentials(Credentials::new("OVERRIDE", "other"))
            .with_header("x-trace-id", "abc")
            .with_query_param("Extra", "1");
        let _: WidgetOutput = runtime.execute_query("CreateWidget", &input).unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.header("x-trace-id"), Some("abc"));
        assert_eq!(sent.form_param("Extra").as_deref(), Some("1"));
        assert!(
            sent.header("authorization")
                .unwrap()
                .contains("Credential=OVERRIDE/")
        );
    }

    #[test]
    fn test_should_reject_invalid_custom_header() {
        let mock = Arc::new(MockTransport::new());
        let runtime = runtime(&QUERY_SERVICE, &mock);

        let mut input = widget("w");
        input.request_options = RequestOptions::default().with_header("bad header", "v");
        let err = runtime
            .execute_query::<_, WidgetOutput>("CreateWidget", &input)
            .unwrap_err();
        assert!(matches!(err, SdkError::Client(ClientError::Marshall { .. })));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_should_record_metrics() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "<CreateWidgetResponse/>");
        mock.push_response(500, "");
        let stats = Arc::new(OperationStats::new());
        let runtime = ClientRuntime::builder(
            &QUERY_SERVICE,
            ClientConfig::default().with_endpoint("http://localhost:4566"),
        )
        .transport(Arc::clone(&mock) as Arc<dyn HttpTransport>)
        .credentials(Arc::new(StaticCredentialsProvider::new(Credentials::new(
            "AK", "SK",
        ))))
        .metrics(Arc::clone(&stats) as Arc<dyn MetricsCollector>)
        .build()
        .unwrap();

        let _ = runtime.execute_query::<_, WidgetOutput>("CreateWidget", &widget("a"));
        let _ = runtime.execute_query::<_, WidgetOutput>("CreateWidget", &widget("b"));

        let summary = stats.summary("Widgets", "CreateWidget").unwrap();
        assert_eq!(summary.calls, 2);
        assert_eq!(summary.errors, 1);
    }

    #[test]
    fn test_should_refuse_requests_after_shutdown() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(200, "");
        let runtime = runtime(&QUERY_SERVICE, &mock);

        runtime.shutdown();
        assert!(runtime.is_closed());
        assert!(mock.is_closed());
        let err = runtime
            .execute_query::<_, WidgetOutput>("CreateWidget", &widget("a"))
            .unwrap_err();
        assert!(matches!(err, SdkError::Client(ClientError::Shutdown)));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_should_use_default_endpoint() {
        let mock = Arc::new(MockTransport::new());
        let runtime = ClientRuntime::builder(
            &QUERY_SERVICE,
            ClientConfig::default().with_region("ap-south-1"),
        )
        .transport(mock as Arc<dyn HttpTransport>)
        .build()
        .unwrap();
        assert_eq!(runtime.endpoint(), "https://widgets.ap-south-1.amazonaws.com");
    }

    #[test]
    fn test_should_fail_without_credentials() {
        let mock = Arc::new(MockTransport::new());
        let runtime = ClientRuntime::builder(
            &QUERY_SERVICE,
            ClientConfig::default().with_endpoint("http://localhost:4566"),
        )
        .transport(Arc::clone(&mock) as Arc<dyn HttpTransport>)
        .credentials(Arc::new(ruststack_sdk_core::CredentialsProviderChain::new(
            Vec::new(),
        )))
        .build()
        .unwrap();

        let err = runtime
            .execute_query::<_, WidgetOutput>("CreateWidget", &widget("a"))
            .unwrap_err();
        assert!(matches!(err, SdkError::Client(ClientError::Credentials(_))));
    }
}
