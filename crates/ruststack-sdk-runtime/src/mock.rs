//! In-memory transport for tests.
//!
//! [`MockTransport`] answers each request with the next queued response (or
//! from a fallback responder) and records every request it receives.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use ruststack_sdk_core::ClientError;

use crate::transport::HttpTransport;

type Responder = Box<dyn Fn(&http::Request<Bytes>) -> http::Response<Bytes> + Send + Sync>;

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Full request URI.
    pub uri: http::Uri,
    /// Headers as sent, including the signature.
    pub headers: http::HeaderMap,
    /// Body bytes.
    pub body: Bytes,
}

impl RecordedRequest {
    /// The body as UTF-8 text.
    #[must_use]
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    /// Decoded `application/x-www-form-urlencoded` body parameters.
    #[must_use]
    pub fn form_params(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(&self.body).into_owned().collect()
    }

    /// Value of the first form parameter with this name.
    #[must_use]
    pub fn form_param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(&self.body)
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// Value of a header as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Scripted transport.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<http::Response<Bytes>>>,
    responder: Option<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
    delay: Option<Duration>,
    closed: AtomicBool,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("queued", &self.responses.lock().len())
            .field("requests", &self.requests.lock().len())
            .field("closed", &self.closed.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

impl MockTransport {
    /// A transport with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request without a queued response through `responder`.
    #[must_use]
    pub fn with_responder(
        mut self,
        responder: impl Fn(&http::Request<Bytes>) -> http::Response<Bytes> + Send + Sync + 'static,
    ) -> Self {
        self.responder = Some(Box::new(responder));
        self
    }

    /// Sleep before answering each request.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a response with the given status and body.
    pub fn push_response(&self, status: u16, body: impl Into<Bytes>) {
        self.push(response(status, body));
    }

    /// Queue a prepared response.
    pub fn push(&self, response: http::Response<Bytes>) {
        self.responses.lock().push_back(response);
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Whether [`HttpTransport::shutdown`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Build a response with the given status and body.
///
/// An unknown status code becomes `500`.
#[must_use]
pub fn response(status: u16, body: impl Into<Bytes>) -> http::Response<Bytes> {
    let mut response = http::Response::new(body.into());
    *response.status_mut() =
        http::StatusCode::from_u16(status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
    response
}

impl HttpTransport for MockTransport {
    fn send(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, ClientError> {
        if self.is_closed() {
            return Err(ClientError::Shutdown);
        }
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        self.requests.lock().push(RecordedRequest {
            method: request.method().clone(),
            uri: request.uri().clone(),
            headers: request.headers().clone(),
            body: request.body().clone(),
        });

        if let Some(queued) = self.responses.lock().pop_front() {
            return Ok(queued);
        }
        match &self.responder {
            Some(responder) => Ok(responder(&request)),
            None => Err(ClientError::Transport {
                message: "no mock response queued".to_owned(),
                source: None,
            }),
        }
    }

    fn shutdown(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &'static str) -> http::Request<Bytes> {
        http::Request::builder()
            .method("POST")
            .uri("http://localhost/")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn test_should_return_queued_responses_in_order() {
        let mock = MockTransport::new();
        mock.push_response(200, "first");
        mock.push_response(404, "second");

        assert_eq!(mock.send(request("a")).unwrap().body(), "first");
        let second = mock.send(request("b")).unwrap();
        assert_eq!(second.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(mock.requests().len(), 2);
        assert_eq!(mock.last_request().unwrap().body_str(), "b");
    }

    #[test]
    fn test_should_fall_back_to_responder() {
        let mock = MockTransport::new().with_responder(|req| response(200, req.body().clone()));
        assert_eq!(mock.send(request("echo")).unwrap().body(), "echo");
    }

    #[test]
    fn test_should_fail_without_response() {
        let mock = MockTransport::new();
        assert!(matches!(
            mock.send(request("")),
            Err(ClientError::Transport { .. })
        ));
    }

    #[test]
    fn test_should_fail_after_shutdown() {
        let mock = MockTransport::new();
        mock.push_response(200, "");
        mock.shutdown();
        assert!(mock.is_closed());
        assert!(matches!(mock.send(request("")), Err(ClientError::Shutdown)));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_should_decode_form_params() {
        let mock = MockTransport::new();
        mock.push_response(200, "");
        mock.send(request("Action=Describe&Names.member.1=a+b"))
            .unwrap();
        let recorded = mock.last_request().unwrap();
        assert_eq!(recorded.form_param("Names.member.1").as_deref(), Some("a b"));
        assert_eq!(recorded.form_params().len(), 2);
    }
}
