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

//! Various utility and helper functions

use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use hex::encode as hexencode;
use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "ring")]
use ring::digest::{Context, SHA256};
#[cfg(not(feature = "ring"))]
use sha2::{Digest, Sha256};
use url::Url;
pub use urlencoding::encode as urlencode;

use crate::error::Error;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Signature V4 signing algorithm identifier
pub const SIGNING_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Terminator of every credential scope
pub const AWS4_REQUEST: &str = "aws4_request";

/// Hex encoded SHA256 hash of an empty string. Bodyless requests must pass
/// this as payload hash.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Full timestamp format used by `X-Amz-Date`, e.g. `20231201T120000Z`
pub const TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Date-only format used by the credential scope, e.g. `20231201`
pub const SHORT_TIME_FORMAT: &str = "%Y%m%d";

/// Gets hex encoded SHA256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    #[cfg(feature = "ring")]
    {
        hexencode(ring::digest::digest(&SHA256, data).as_ref())
    }
    #[cfg(not(feature = "ring"))]
    {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hexencode(hasher.finalize())
    }
}

/// Returns HMAC-SHA256 of given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    #[cfg(feature = "ring")]
    {
        let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA256, key);
        out.copy_from_slice(ring::hmac::sign(&key, data).as_ref());
    }
    #[cfg(not(feature = "ring"))]
    {
        use hmac::{Hmac, Mac};
        let mut hasher =
            Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
        hasher.update(data);
        out.copy_from_slice(&hasher.finalize().into_bytes());
    }
    out
}

/// Returns hex encoded HMAC-SHA256 of given key and data
pub fn hmac_hash_hex(key: &[u8], data: &[u8]) -> String {
    hexencode(hmac_hash(key, data))
}

/// Incremental SHA256 that can be fed through `std::io::copy`.
struct Sha256Writer {
    #[cfg(feature = "ring")]
    ctx: Context,
    #[cfg(not(feature = "ring"))]
    hasher: Sha256,
}

impl Sha256Writer {
    fn new() -> Self {
        Self {
            #[cfg(feature = "ring")]
            ctx: Context::new(&SHA256),
            #[cfg(not(feature = "ring"))]
            hasher: Sha256::new(),
        }
    }

    fn finalize(self) -> String {
        #[cfg(feature = "ring")]
        {
            hexencode(self.ctx.finish().as_ref())
        }
        #[cfg(not(feature = "ring"))]
        {
            hexencode(self.hasher.finalize())
        }
    }
}

impl Write for Sha256Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        #[cfg(feature = "ring")]
        self.ctx.update(buf);
        #[cfg(not(feature = "ring"))]
        self.hasher.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Computes hex encoded SHA256 of a request body.
///
/// The signer never reads bodies itself; callers that need a payload hash
/// for a streamed body can use this before signing.
pub fn compute_payload_hash<R: Read>(mut body: R) -> Result<String, Error> {
    let mut writer = Sha256Writer::new();
    std::io::copy(&mut body, &mut writer)?;
    Ok(writer.finalize())
}

/// Collapses runs of ASCII spaces into one and trims leading and trailing
/// spaces. Other whitespace is left alone.
pub fn strip_excess_spaces(value: &str) -> String {
    lazy_static! {
        static ref MULTI_SPACE_REGEX: Regex = Regex::new("( +)").unwrap();
    }
    MULTI_SPACE_REGEX
        .replace_all(value.trim_matches(' '), " ")
        .into_owned()
}

/// Returns host part of given `host:port` value
pub fn strip_port(hostport: &str) -> &str {
    let Some(colon) = hostport.find(':') else {
        return hostport;
    };
    if let Some(i) = hostport.find(']') {
        return hostport[..i].strip_prefix('[').unwrap_or(&hostport[..i]);
    }
    &hostport[..colon]
}

/// Returns port part of given `host:port` value, or empty string
pub fn port_only(hostport: &str) -> &str {
    let Some(colon) = hostport.find(':') else {
        return "";
    };
    if let Some(i) = hostport.find("]:") {
        return &hostport[i + 2..];
    }
    if hostport.contains(']') {
        return "";
    }
    &hostport[colon + 1..]
}

/// Checks whether given port is the default one for given scheme. An empty
/// port counts as default.
pub fn is_default_port(scheme: &str, port: &str) -> bool {
    if port.is_empty() {
        return true;
    }
    let scheme = scheme.to_ascii_lowercase();
    (scheme == "http" && port == "80") || (scheme == "https" && port == "443")
}

/// Returns the canonical URI path of given URL.
///
/// The already percent-encoded path is used as-is. S3 compatible backends
/// reject re-escaped paths, so no further escaping is applied here.
pub fn get_uri_path(url: &Url) -> String {
    let path = if url.cannot_be_a_base() {
        let mut opaque = url.path();
        if let Some(i) = opaque.find('?') {
            opaque = &opaque[..i];
        }
        let opaque = opaque.strip_prefix("//").unwrap_or(opaque);
        opaque.find('/').map_or("", |i| &opaque[i..])
    } else {
        url.path()
    };

    if path.is_empty() {
        return String::from("/");
    }
    path.to_string()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// Returns canonical MIME form of given header name, e.g.
/// `x-amz-meta-foo` becomes `X-Amz-Meta-Foo`. Names holding bytes that are
/// not valid in a header name are returned unchanged.
pub fn canonicalize_header_key(key: &str) -> String {
    if !key.bytes().all(is_token_byte) {
        return key.to_string();
    }

    let mut upper = true;
    key.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
