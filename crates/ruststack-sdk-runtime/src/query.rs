//! Query protocol request serialization.
//!
//! Inputs are flattened into `name=value` pairs. Nested structures use dotted
//! names and lists use one-based `.member.N` suffixes:
//!
//! ```text
//! Action=CreateLoadBalancer
//! &Version=2012-06-01
//! &LoadBalancerName=my-lb
//! &Listeners.member.1.Protocol=HTTP
//! &Listeners.member.1.LoadBalancerPort=80
//! &AvailabilityZones.member.1=us-east-1a
//! ```

/// Ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Start a request for `action` of the given API version.
    #[must_use]
    pub fn new(action: &str, version: &str) -> Self {
        let mut params = Self::default();
        params.push("Action", action);
        params.push("Version", version);
        params
    }

    /// Add a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// Add a parameter if the value is present.
    pub fn push_opt<V: ToString>(&mut self, name: &str, value: Option<V>) {
        if let Some(v) = value {
            self.push(name, v.to_string());
        }
    }

    /// Add a list of scalars as `name.member.N`.
    pub fn push_list<V: ToString>(&mut self, name: &str, values: &[V]) {
        for (i, v) in values.iter().enumerate() {
            self.push(format!("{name}.member.{}", i + 1), v.to_string());
        }
    }

    /// Add a list of structures as `name.member.N.Field`.
    pub fn push_struct_list<T: QuerySerialize>(&mut self, name: &str, values: &[T]) {
        for (i, v) in values.iter().enumerate() {
            v.serialize_query(&format!("{name}.member.{}", i + 1), self);
        }
    }

    /// Add a nested structure as `name.Field`.
    pub fn push_struct<T: QuerySerialize>(&mut self, name: &str, value: Option<&T>) {
        if let Some(v) = value {
            v.serialize_query(name, self);
        }
    }

    /// Value of the first parameter with this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

/// Flattens a value into query parameters.
pub trait QuerySerialize {
    /// Append this value's fields, each name prefixed by `prefix.` (or bare
    /// when `prefix` is empty).
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams);
}

/// Join a prefix and a field name with a dot.
#[must_use]
pub fn key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Listener {
        protocol: String,
        port: i32,
        certificate: Option<String>,
    }

    impl QuerySerialize for Listener {
        fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
            params.push(key(prefix, "Protocol"), self.protocol.as_str());
            params.push(key(prefix, "LoadBalancerPort"), self.port.to_string());
            params.push_opt(&key(prefix, "SSLCertificateId"), self.certificate.as_ref());
        }
    }

    #[test]
    fn test_should_flatten_lists_and_structs() {
        let mut params = QueryParams::new("CreateLoadBalancer", "2012-06-01");
        params.push("LoadBalancerName", "my-lb");
        params.push_struct_list(
            "Listeners",
            &[Listener {
                protocol: "HTTP".to_owned(),
                port: 80,
                certificate: None,
            }],
        );
        params.push_list("AvailabilityZones", &["us-east-1a", "us-east-1b"]);

        assert_eq!(params.get("Action"), Some("CreateLoadBalancer"));
        assert_eq!(params.get("Listeners.member.1.Protocol"), Some("HTTP"));
        assert_eq!(params.get("Listeners.member.1.LoadBalancerPort"), Some("80"));
        assert_eq!(params.get("Listeners.member.1.SSLCertificateId"), None);
        assert_eq!(params.get("AvailabilityZones.member.2"), Some("us-east-1b"));
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn test_should_encode_form_body() {
        let mut params = QueryParams::new("DescribeTags", "2011-01-01");
        params.push("Filters.member.1.Values.member.1", "a b&c");
        assert_eq!(
            params.to_form_body(),
            "Action=DescribeTags&Version=2011-01-01&Filters.member.1.Values.member.1=a+b%26c"
        );
    }

    #[test]
    fn test_should_skip_absent_optionals() {
        let mut params = QueryParams::default();
        params.push_opt::<i32>("MaxRecords", None);
        params.push_opt("MinSize", Some(2));
        params.push_list::<String>("Names", &[]);
        assert_eq!(params.iter().collect::<Vec<_>>(), [("MinSize", "2")]);
    }
}
