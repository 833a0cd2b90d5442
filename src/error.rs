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

//! Error definitions for signing operations

use thiserror::Error;

/// Error definitions
///
/// Signing is deterministic and CPU bound, so every variant describes a
/// caller input problem; none of them is worth retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// Config has an empty region
    #[error("invalid config: region is required")]
    MissingRegion,

    /// Config has an empty access key id
    #[error("invalid config: access key ID is required")]
    MissingAccessKeyId,

    /// Config has an empty secret access key
    #[error("invalid config: secret access key is required")]
    MissingSecretAccessKey,

    /// Signing was requested without a payload hash. Bodyless requests must
    /// pass [`crate::utils::EMPTY_SHA256`] explicitly.
    #[error("payload hash is required")]
    MissingPayloadHash,

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to compute payload hash: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors raised while validating a [`crate::Config`].
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::MissingRegion | Error::MissingAccessKeyId | Error::MissingSecretAccessKey
        )
    }
}
