//! Static description of a service: names, protocol and endpoint rules.

/// Wire protocol spoken by a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `Action=...&Version=...` form bodies with XML responses.
    AwsQuery,
    /// REST paths with XML bodies.
    RestXml,
    /// `POST /` with `X-Amz-Target` and JSON bodies.
    AwsJson1_1,
}

impl Protocol {
    /// The protocol name as used in service models.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwsQuery => "awsQuery",
            Self::RestXml => "restXml",
            Self::AwsJson1_1 => "awsJson1_1",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the runtime needs to know about a service.
#[derive(Debug)]
pub struct ServiceMetadata {
    /// Name used in logs, metrics and errors, e.g. `"AutoScaling"`.
    pub service_name: &'static str,
    /// SigV4 signing name, e.g. `"autoscaling"`.
    pub signing_name: &'static str,
    /// Host prefix of the public endpoint.
    pub endpoint_prefix: &'static str,
    /// API version, e.g. `"2011-01-01"`.
    pub api_version: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for JSON services, including the trailing dot.
    pub json_target_prefix: Option<&'static str>,
    /// Signing region of a global service. Global services use one endpoint
    /// regardless of the configured region.
    pub global_region: Option<&'static str>,
    /// XML namespace of request bodies.
    pub xml_namespace: Option<&'static str>,
    /// Every documented error code of the service.
    pub error_codes: &'static [&'static str],
}

impl ServiceMetadata {
    /// Public endpoint for `region`.
    #[must_use]
    pub fn default_endpoint(&self, region: &str) -> String {
        match self.global_region {
            Some(_) => format!("https://{}.amazonaws.com", self.endpoint_prefix),
            None => format!("https://{}.{region}.amazonaws.com", self.endpoint_prefix),
        }
    }

    /// Region to put in the credential scope.
    #[must_use]
    pub fn signing_region<'a>(&self, configured: &'a str) -> &'a str {
        self.global_region.unwrap_or(configured)
    }

    /// Whether `code` is a documented error code.
    #[must_use]
    pub fn is_modeled_error(&self, code: &str) -> bool {
        self.error_codes.contains(&code)
    }
}
