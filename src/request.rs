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

//! Request descriptor consumed by the signer

use http::Method;
use url::Url;

use crate::error::Error;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::utils::{canonicalize_header_key, is_default_port, port_only, strip_port};

/// HTTP request as seen by the signer.
///
/// Header names are compared case-insensitively; the helpers below store
/// them in canonical MIME form. Cloning yields an independent copy.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Multimap,
    /// Explicit host, takes precedence over the URL host when set
    pub host: Option<String>,
    /// Body length in bytes; zero when there is no body or it is unknown
    pub content_length: u64,
}

impl HttpRequest {
    /// Returns a request for given method and URL with no headers
    pub fn new(method: Method, url: &str) -> Result<Self, Error> {
        let url = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self::from_url(method, url))
    }

    pub fn from_url(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Multimap::new(),
            host: None,
            content_length: 0,
        }
    }

    /// Returns the first value of given header
    pub fn header(&self, name: &str) -> Option<&String> {
        self.header_values(name).into_iter().next()
    }

    /// Returns all values of given header, across every case variant of its name
    pub fn header_values(&self, name: &str) -> Vec<&String> {
        self.headers
            .iter_all()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .flat_map(|(_, values)| values.iter())
            .collect()
    }

    /// Appends a header value
    pub fn add_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.add(canonicalize_header_key(name), value);
    }

    /// Replaces every value of given header with a single value
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.remove_header(name);
        self.add_header(name, value);
    }

    /// Removes given header, returning its values
    pub fn remove_header(&mut self, name: &str) -> Vec<String> {
        let keys: Vec<String> = self
            .headers
            .keys()
            .filter(|k| k.eq_ignore_ascii_case(name))
            .cloned()
            .collect();
        keys.iter()
            .filter_map(|k| self.headers.remove(k))
            .flatten()
            .collect()
    }

    /// Returns URL host including an explicit port, e.g. `example.com:9000`
    pub fn url_host(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// Returns explicit host if set, else URL host
    pub fn host(&self) -> String {
        match &self.host {
            Some(host) if !host.is_empty() => host.clone(),
            _ => self.url_host(),
        }
    }

    /// Drops a default port (80 for http, 443 for https) from the effective
    /// host. The stripped value is written into [`HttpRequest::host`].
    pub fn sanitize_host_for_header(&mut self) {
        let host = self.host();
        let port = port_only(&host);
        if !port.is_empty() && is_default_port(self.url.scheme(), port) {
            self.host = Some(strip_port(&host).to_string());
        }
    }

    /// Returns query parameters of the URL, form-decoded
    pub fn query_params(&self) -> Multimap {
        let mut query = Multimap::new();
        for (key, value) in self.url.query_pairs() {
            query.add(key, value);
        }
        query
    }

    /// Replaces the raw query string of the URL; an empty query removes the `?`
    pub fn set_raw_query(&mut self, query: &str) {
        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(query));
        }
    }
}
