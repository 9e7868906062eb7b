//! AWS Signature Version 4 signing.
//!
//! Signing a request takes four steps:
//!
//! 1. Add the `X-Amz-Date`, `Host` and session token headers.
//! 2. Build the canonical request over `host`, `content-type` and every
//!    `x-amz-*` header.
//! 3. Build the string to sign from the timestamp, credential scope and
//!    canonical request hash.
//! 4. Derive the signing key, compute the signature and set `Authorization`.
//!
//! The main entry point is [`sign_request`].

use bytes::Bytes;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use http::HeaderValue;
use http::header::{AUTHORIZATION, HOST};
use ruststack_sdk_core::Credentials;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::canonical::{build_canonical_request, build_signed_headers_string};
use crate::error::SigningError;

/// The only algorithm this signer produces.
const ALGORITHM: &str = "AWS4-HMAC-SHA256";

const X_AMZ_DATE: &str = "x-amz-date";
const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

type HmacSha256 = Hmac<Sha256>;

/// Scope and time of a signature.
#[derive(Debug, Clone)]
pub struct SigningParams {
    /// Region in the credential scope.
    pub region: String,
    /// Signing name of the service, e.g. `autoscaling` or `logs`.
    pub service: String,
    /// Signing time.
    pub time: DateTime<Utc>,
}

impl SigningParams {
    /// Build signing parameters.
    pub fn new(region: impl Into<String>, service: impl Into<String>, time: DateTime<Utc>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
            time,
        }
    }

    fn amz_date(&self) -> String {
        self.time.format("%Y%m%dT%H%M%SZ").to_string()
    }

    fn short_date(&self) -> String {
        self.time.format("%Y%m%d").to_string()
    }

    fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/aws4_request",
            self.short_date(),
            self.region,
            self.service
        )
    }
}

/// Sign `request` in place.
///
/// Any existing `Authorization` header is replaced.
///
/// # Errors
///
/// Returns [`SigningError::MissingHost`] if neither the URI nor the headers
/// name a host, and [`SigningError::InvalidHeaderValue`] if a credential
/// contains characters that are not valid in a header.
pub fn sign_request(
    request: &mut http::Request<Bytes>,
    credentials: &Credentials,
    params: &SigningParams,
) -> Result<(), SigningError> {
    let amz_date = params.amz_date();
    let headers = request.headers_mut();
    headers.remove(AUTHORIZATION);
    headers.insert(X_AMZ_DATE, header_value(&amz_date, X_AMZ_DATE)?);
    match &credentials.session_token {
        Some(token) => {
            headers.insert(X_AMZ_SECURITY_TOKEN, header_value(token, X_AMZ_SECURITY_TOKEN)?);
        }
        None => {
            headers.remove(X_AMZ_SECURITY_TOKEN);
        }
    }

    if !request.headers().contains_key(HOST) {
        let host = request
            .uri()
            .authority()
            .map(|authority| match authority.port() {
                Some(port) => format!("{}:{port}", authority.host()),
                None => authority.host().to_owned(),
            })
            .ok_or(SigningError::MissingHost)?;
        let value = header_value(&host, "host")?;
        request.headers_mut().insert(HOST, value);
    }

    let header_pairs: Vec<(&str, &str)> = request
        .headers()
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v)))
        .filter(|(name, _)| is_signed_header(name))
        .collect();
    let mut signed_headers: Vec<&str> = header_pairs.iter().map(|(name, _)| *name).collect();
    signed_headers.sort_unstable();
    signed_headers.dedup();

    let payload_hash = hash_payload(request.body());
    let canonical_request = build_canonical_request(
        request.method().as_str(),
        request.uri().path(),
        request.uri().query().unwrap_or(""),
        &header_pairs,
        &signed_headers,
        &payload_hash,
    );
    trace!(canonical_request = %canonical_request, "built canonical request");

    let scope = params.credential_scope();
    let string_to_sign = build_string_to_sign(
        &amz_date,
        &scope,
        &hex::encode(Sha256::digest(canonical_request.as_bytes())),
    );
    let signing_key = derive_signing_key(
        &credentials.secret_access_key,
        &params.short_date(),
        &params.region,
        &params.service,
    );
    let signature = compute_signature(&signing_key, &string_to_sign);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={}, Signature={signature}",
        credentials.access_key_id,
        build_signed_headers_string(&signed_headers),
    );
    let value = header_value(&authorization, "authorization")?;
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

fn is_signed_header(name: &str) -> bool {
    name == "host" || name == "content-type" || name.starts_with("x-amz-")
}

fn header_value(value: &str, name: &'static str) -> Result<HeaderValue, SigningError> {
    HeaderValue::from_str(value).map_err(|_| SigningError::InvalidHeaderValue { name })
}

/// Build the string to sign.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_auth::signer::build_string_to_sign;
///
/// let sts = build_string_to_sign(
///     "20150830T123600Z",
///     "20150830/us-east-1/service/aws4_request",
///     "bb579772317eb040ac9ed261061d46c1f17a8133879d6129b6e1c25292927e63",
/// );
/// assert!(sts.starts_with("AWS4-HMAC-SHA256\n20150830T123600Z\n"));
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the SigV4 signing key using the HMAC-SHA256 chain.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let date_key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let date_region_key = hmac_sha256(&date_key, region.as_bytes());
    let date_region_service_key = hmac_sha256(&date_region_key, service.as_bytes());
    hmac_sha256(&date_region_service_key, b"aws4_request")
}

/// Hex-encoded HMAC-SHA256 of `data` under `signing_key`.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Hex-encoded SHA-256 of a request body.
///
/// # Examples
///
/// ```
/// use ruststack_sdk_auth::hash_payload;
///
/// assert_eq!(
///     hash_payload(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}
