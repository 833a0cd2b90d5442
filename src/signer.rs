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

//! Signature V4 for S3 API
//!
//! [`Signer::sign_http`] writes `X-Amz-Date` and `Authorization` onto a
//! request in place. [`Signer::presign_http`] works on a copy and returns a
//! URL carrying the whole signature in its query string.

use chrono::{DateTime, TimeZone};
use http::Method;

use crate::builders::{
    CanonicalHeaders, build_authorization_header, build_canonical_headers, build_canonical_string,
    build_credential_scope, build_query, build_signature, build_string_to_sign,
};
use crate::config::{Config, Credentials};
use crate::error::Error;
use crate::header_constants::{
    AUTHORIZATION, X_AMZ_ALGORITHM, X_AMZ_CREDENTIAL, X_AMZ_DATE, X_AMZ_SIGNATURE,
    X_AMZ_SIGNED_HEADERS,
};
use crate::header_rules::{ALLOWED_QUERY_HOISTING, IGNORED_HEADERS};
use crate::key_deriver::{DerivedKeyCache, LocalKeyCache, SharedKeyCache, SigningKeyDeriver};
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::request::HttpRequest;
use crate::signing_time::SigningTime;
use crate::utils::{SIGNING_ALGORITHM, canonicalize_header_key, get_uri_path};

/// Signer that can be shared between threads
pub type SharedSigner = Signer<SharedKeyCache>;

/// Signer for use from one thread at a time; its key cache takes no locks
pub type LocalSigner = Signer<LocalKeyCache>;

/// Result of [`Signer::presign_http`]
#[derive(Clone, Debug)]
pub struct PresignedRequest {
    /// URL with `X-Amz-Algorithm`, `X-Amz-Credential`, `X-Amz-Date`,
    /// `X-Amz-SignedHeaders` and, last, `X-Amz-Signature` in its query
    pub url: String,
    /// Headers that were signed and must be sent verbatim with the URL,
    /// keyed by canonical name, e.g. `Host`
    pub signed_headers: Multimap,
}

/// Applies AWS Signature Version 4 to HTTP requests.
///
/// The key cache type decides the concurrency contract: a [`SharedSigner`]
/// is `Sync` and may be used from many threads at once, a [`LocalSigner`]
/// is not.
#[derive(Debug)]
pub struct Signer<C: DerivedKeyCache = SharedKeyCache> {
    config: Config,
    credentials: Credentials,
    key_deriver: SigningKeyDeriver<C>,
}

impl<C: DerivedKeyCache + Default> Signer<C> {
    /// Returns a signer for given config with an empty key cache
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_sigv4::{Config, Error, LocalSigner, Signer};
    ///
    /// let config = Config::builder()
    ///     .region("")
    ///     .access_key_id("AKID")
    ///     .secret_access_key("SECRET")
    ///     .build();
    /// let result: Result<LocalSigner, Error> = Signer::new(config);
    /// assert!(matches!(result, Err(Error::MissingRegion)));
    /// ```
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::with_cache(config, C::default())
    }
}

impl<C: DerivedKeyCache> Signer<C> {
    /// Returns a signer for given config using given key cache
    pub fn with_cache(mut config: Config, cache: C) -> Result<Self, Error> {
        config.validate()?;
        log::debug!(
            "created signer for access key {} in {}/{}",
            config.access_key_id,
            config.region,
            config.service
        );

        Ok(Self {
            credentials: config.credentials(),
            config,
            key_deriver: SigningKeyDeriver::new(cache),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn key_deriver(&self) -> &SigningKeyDeriver<C> {
        &self.key_deriver
    }

    /// Signs given request in place.
    ///
    /// Sets `X-Amz-Date` and `Authorization` headers, drops a default port
    /// from the host and rewrites the URL query in canonical form.
    /// `payload_hash` is the hex encoded SHA256 of the body; pass
    /// [`crate::utils::EMPTY_SHA256`] for requests without one. On error the
    /// request is left untouched.
    pub fn sign_http<Tz: TimeZone>(
        &self,
        req: &mut HttpRequest,
        payload_hash: &str,
        signing_time: DateTime<Tz>,
    ) -> Result<(), Error> {
        if payload_hash.is_empty() {
            return Err(Error::MissingPayloadHash);
        }

        let time = SigningTime::new(signing_time);
        let mut query = req.query_params();

        req.set_header(X_AMZ_DATE, time.time_format());
        query.sort_values();
        req.sanitize_host_for_header();

        let credential_scope = self.credential_scope(&time);
        let credential = format!("{}/{}", self.credentials.access_key_id, credential_scope);

        let headers = build_canonical_headers(
            &req.host(),
            &IGNORED_HEADERS,
            &req.headers,
            req.content_length,
        );
        let raw_query = query.get_canonical_query_string();

        let signature = self.compute_signature(
            &req.method,
            &get_uri_path(&req.url),
            &raw_query,
            &headers,
            payload_hash,
            &time,
            &credential_scope,
        );

        let authorization =
            build_authorization_header(&credential, &headers.signed_headers, &signature);
        req.set_header(AUTHORIZATION, authorization);
        req.set_raw_query(&raw_query);

        log::debug!(
            "signed {} {} with headers {}",
            req.method,
            req.url.path(),
            headers.signed_headers
        );
        Ok(())
    }

    /// Presigns given request.
    ///
    /// Works on a copy, so `req` is never modified. Unless header hoisting is
    /// disabled, `X-Amz-*` headers that need not be signed move into the
    /// query string. Query parameters already on the URL, such as
    /// `X-Amz-Expires`, are kept.
    pub fn presign_http<Tz: TimeZone>(
        &self,
        req: &HttpRequest,
        payload_hash: &str,
        signing_time: DateTime<Tz>,
    ) -> Result<PresignedRequest, Error> {
        if payload_hash.is_empty() {
            return Err(Error::MissingPayloadHash);
        }

        let mut req = req.clone();
        let time = SigningTime::new(signing_time);
        let mut query = req.query_params();

        query.set(X_AMZ_ALGORITHM, SIGNING_ALGORITHM);
        query.set(X_AMZ_DATE, time.time_format());
        query.sort_values();
        req.sanitize_host_for_header();

        let credential_scope = self.credential_scope(&time);
        query.set(
            X_AMZ_CREDENTIAL,
            format!("{}/{}", self.credentials.access_key_id, credential_scope),
        );

        let unsigned_headers = if self.config.disable_header_hoisting {
            req.headers.clone()
        } else {
            let (hoisted, unsigned) = build_query(&ALLOWED_QUERY_HOISTING, &req.headers);
            for (key, values) in hoisted {
                query.remove(&key);
                query.insert_many(key, values);
            }
            unsigned
        };

        let headers = build_canonical_headers(
            &req.host(),
            &IGNORED_HEADERS,
            &unsigned_headers,
            req.content_length,
        );
        query.set(X_AMZ_SIGNED_HEADERS, headers.signed_headers.as_str());

        let mut raw_query = query.get_canonical_query_string();

        let signature = self.compute_signature(
            &req.method,
            &get_uri_path(&req.url),
            &raw_query,
            &headers,
            payload_hash,
            &time,
            &credential_scope,
        );

        // Appended as is; the hex signature needs no escaping.
        raw_query.push('&');
        raw_query.push_str(X_AMZ_SIGNATURE);
        raw_query.push('=');
        raw_query.push_str(&signature);
        req.set_raw_query(&raw_query);

        let mut signed_headers = Multimap::new();
        for (key, values) in headers.signed {
            signed_headers.insert_many(canonicalize_header_key(&key), values);
        }

        log::debug!(
            "presigned {} {} with headers {}",
            req.method,
            req.url.path(),
            headers.signed_headers
        );
        Ok(PresignedRequest {
            url: req.url.to_string(),
            signed_headers,
        })
    }

    fn credential_scope(&self, time: &SigningTime) -> String {
        build_credential_scope(time, &self.config.region, &self.config.service)
    }

    fn compute_signature(
        &self,
        method: &Method,
        uri: &str,
        query: &str,
        headers: &CanonicalHeaders,
        payload_hash: &str,
        time: &SigningTime,
        credential_scope: &str,
    ) -> String {
        let canonical_request = build_canonical_string(
            method.as_str(),
            uri,
            query,
            &headers.signed_headers,
            &headers.canonical_headers,
            payload_hash,
        );
        log::trace!("canonical request:\n{canonical_request}");

        let string_to_sign = build_string_to_sign(
            SIGNING_ALGORITHM,
            time.time_format(),
            credential_scope,
            &canonical_request,
        );
        log::trace!("string to sign:\n{string_to_sign}");

        let signing_key = self.key_deriver.derive_key(
            &self.credentials.access_key_id,
            &self.credentials.secret_access_key,
            &self.config.service,
            &self.config.region,
            time,
        );
        build_signature(&signing_key, &string_to_sign)
    }
}
