// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical request builders for Signature V4
//!
//! Pure functions; byte ordering and whitespace handling here must match
//! what any SigV4 verifier derives, or the server rejects the signature.

use crate::header_constants::{
    CONTENT_LENGTH, HOST, X_AMZ_EXPECTED_BUCKET_OWNER, X_AMZ_REQUEST_PAYER,
};
use crate::header_rules::Rule;
use crate::multimap_ext::Multimap;
use crate::signing_time::SigningTime;
use crate::utils::{AWS4_REQUEST, SIGNING_ALGORITHM, hmac_hash_hex, sha256_hash, strip_excess_spaces};

const HOST_HEADER: &str = "host";
const CONTENT_LENGTH_HEADER: &str = "content-length";

/// Headers lower-cased while hoisting into a presigned query, to match what
/// S3 expects for them.
const LOWER_CASE_HOISTED_HEADERS: [&str; 2] = [X_AMZ_EXPECTED_BUCKET_OWNER, X_AMZ_REQUEST_PAYER];

/// Returns credential scope of given time, region and service name, i.e.
/// `date/region/service/aws4_request`
pub fn build_credential_scope(time: &SigningTime, region: &str, service: &str) -> String {
    [time.short_time_format(), region, service, AWS4_REQUEST].join("/")
}

/// Output of [`build_canonical_headers`]
#[derive(Clone, Debug, Default)]
pub struct CanonicalHeaders {
    /// Signed headers keyed by lower-cased name
    pub signed: Multimap,
    /// Sorted lower-cased names joined by `;`
    pub signed_headers: String,
    /// One `name:values\n` line per signed header
    pub canonical_headers: String,
}

/// Builds signed and canonical headers.
///
/// Values have runs of spaces collapsed and surrounding whitespace, tabs
/// included, trimmed. Interior tabs are kept.
///
/// `host` is always signed and `content-length` is synthesized when
/// `content_length > 0`; caller supplied `Host` and `Content-Length`
/// headers are skipped so each appears exactly once. Any other header is
/// kept only when `rule` matches its name.
pub fn build_canonical_headers(
    host: &str,
    rule: &Rule,
    headers: &Multimap,
    content_length: u64,
) -> CanonicalHeaders {
    let mut signed = Multimap::new();
    signed.insert(HOST_HEADER.to_string(), host.to_string());
    if content_length > 0 {
        signed.insert(
            CONTENT_LENGTH_HEADER.to_string(),
            content_length.to_string(),
        );
    }

    // Sorted so that case variants of one name merge in a stable order.
    let mut keys: Vec<&String> = headers.keys().collect();
    keys.sort();
    for key in keys {
        if !rule.matches(key)
            || key.eq_ignore_ascii_case(CONTENT_LENGTH)
            || key.eq_ignore_ascii_case(HOST)
        {
            continue;
        }
        if let Some(values) = headers.get_vec(key) {
            signed.insert_many(key.to_ascii_lowercase(), values.iter().cloned());
        }
    }

    let mut names: Vec<&String> = signed.keys().collect();
    names.sort();

    let signed_headers = names
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<&str>>()
        .join(";");

    let mut canonical_headers = String::new();
    for name in names {
        canonical_headers.push_str(name);
        canonical_headers.push(':');
        if name == HOST_HEADER {
            canonical_headers.push_str(&strip_excess_spaces(host));
        } else if let Some(values) = signed.get_vec(name) {
            let cleaned: Vec<String> = values
                .iter()
                .map(|v| strip_excess_spaces(v).trim().to_string())
                .collect();
            canonical_headers.push_str(&cleaned.join(","));
        }
        canonical_headers.push('\n');
    }

    CanonicalHeaders {
        signed,
        signed_headers,
        canonical_headers,
    }
}

/// Returns canonical request of given parameters.
///
/// `canonical_headers` already ends with a newline, so the header block is
/// followed by an empty line before the signed header names.
pub fn build_canonical_string(
    method: &str,
    uri: &str,
    query: &str,
    signed_headers: &str,
    canonical_headers: &str,
    payload_hash: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n' +
    //   SignedHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    [
        method,
        uri,
        query,
        canonical_headers,
        signed_headers,
        payload_hash,
    ]
    .join("\n")
}

/// Returns string-to-sign of given algorithm, timestamp, scope and canonical
/// request
pub fn build_string_to_sign(
    algorithm: &str,
    timestamp: &str,
    credential_scope: &str,
    canonical_request: &str,
) -> String {
    let hash = sha256_hash(canonical_request.as_bytes());
    [algorithm, timestamp, credential_scope, &hash].join("\n")
}

/// Returns hex encoded signature for given signing key and string-to-sign
pub fn build_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hmac_hash_hex(signing_key, string_to_sign.as_bytes())
}

/// Returns authorization header value for given credential, signed headers
/// and signature
pub fn build_authorization_header(credential: &str, signed_headers: &str, signature: &str) -> String {
    format!(
        "{SIGNING_ALGORITHM} Credential={credential}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Splits headers into those hoisted into the query string (where `rule`
/// matches) and those that stay headers.
///
/// `X-Amz-Expected-Bucket-Owner` and `X-Amz-Request-Payer` are lower-cased
/// first; the lower-cased name is used on both sides.
pub fn build_query(rule: &Rule, headers: &Multimap) -> (Multimap, Multimap) {
    let mut query = Multimap::new();
    let mut unsigned_headers = Multimap::new();

    for (key, values) in headers.iter_all() {
        let key = if LOWER_CASE_HOISTED_HEADERS
            .iter()
            .any(|h| h.eq_ignore_ascii_case(key))
        {
            key.to_ascii_lowercase()
        } else {
            key.clone()
        };

        if rule.matches(&key) {
            query.insert_many(key, values.iter().cloned());
        } else {
            unsigned_headers.insert_many(key, values.iter().cloned());
        }
    }

    (query, unsigned_headers)
}
