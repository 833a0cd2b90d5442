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

//! Signer configuration

use std::fmt;

use typed_builder::TypedBuilder;

use crate::error::Error;

/// Service name used when none is configured
pub const DEFAULT_SERVICE: &str = "s3";

/// Configuration for Signature V4 signing.
///
/// All fields are required except `service`, which defaults to `s3`, and
/// `disable_header_hoisting`.
///
/// # Examples
///
/// ```
/// use s3_sigv4::{Config, SharedSigner};
/// let config = Config::builder()
///     .region("auto")
///     .access_key_id("AKID")
///     .secret_access_key("SECRET")
///     .build();
/// let signer = SharedSigner::new(config).unwrap();
/// assert_eq!(signer.config().service, "s3");
/// ```
#[derive(Clone, TypedBuilder)]
pub struct Config {
    /// Region, e.g. `us-east-1`, or `auto` for Cloudflare R2
    #[builder(setter(into))]
    pub region: String,
    #[builder(setter(into))]
    pub access_key_id: String,
    #[builder(setter(into))]
    pub secret_access_key: String,
    /// Service name; empty means [`DEFAULT_SERVICE`]
    #[builder(default, setter(into))]
    pub service: String,
    /// Keeps every header a header when presigning instead of moving
    /// eligible `X-Amz-*` headers into the query string
    #[builder(default)]
    pub disable_header_hoisting: bool,
}

impl Config {
    /// Checks that all required fields are set and fills in the default
    /// service.
    pub fn validate(&mut self) -> Result<(), Error> {
        if self.region.is_empty() {
            return Err(Error::MissingRegion);
        }
        if self.access_key_id.is_empty() {
            return Err(Error::MissingAccessKeyId);
        }
        if self.secret_access_key.is_empty() {
            return Err(Error::MissingSecretAccessKey);
        }
        if self.service.is_empty() {
            self.service = DEFAULT_SERVICE.to_string();
        }
        Ok(())
    }

    /// Returns the credentials held by this config
    pub fn credentials(&self) -> Credentials {
        Credentials {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("service", &self.service)
            .field("disable_header_hoisting", &self.disable_header_hoisting)
            .finish()
    }
}

/// Access key id and secret access key
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}
