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

//! # AWS Signature Version 4 for S3 compatible storage (`s3-sigv4`)
//!
//! This crate signs HTTP requests for Amazon S3 compatible object storage
//! without pulling in a full cloud SDK. It produces either
//!
//! - an `Authorization` header written onto the request ([`Signer::sign_http`]), or
//! - a presigned URL carrying all signature material in its query string
//!   ([`Signer::presign_http`]).
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::Utc;
//! use http::Method;
//! use s3_sigv4::{Config, HttpRequest, Signer, SharedSigner};
//! use s3_sigv4::utils::EMPTY_SHA256;
//!
//! let config = Config::builder()
//!     .region("us-east-1")
//!     .access_key_id("AKID")
//!     .secret_access_key("SECRET")
//!     .build();
//! let signer: SharedSigner = Signer::new(config).unwrap();
//!
//! let mut req = HttpRequest::new(Method::GET, "https://example.com/bucket/key").unwrap();
//! signer.sign_http(&mut req, EMPTY_SHA256, Utc::now()).unwrap();
//! assert!(req.header("Authorization").unwrap().starts_with("AWS4-HMAC-SHA256"));
//! ```
//!
//! ## Design
//! - Header inclusion rules are composed once into three global policies in [`header_rules`]
//! - Canonical request pieces are pure functions in [`builders`]
//! - Signing keys are derived once per day/region/service and cached by a
//!   pluggable [`key_deriver::DerivedKeyCache`]; the cache type decides whether
//!   a [`Signer`] may be shared between threads
//! - Payload hashes are always supplied by the caller; the signer never reads a body

#![allow(clippy::too_many_arguments)]

pub mod builders;
pub mod config;
pub mod error;
pub mod header_constants;
pub mod header_rules;
pub mod key_deriver;
pub mod multimap_ext;
pub mod request;
pub mod signer;
pub mod signing_time;
pub mod utils;

pub use config::{Config, Credentials};
pub use error::Error;
pub use key_deriver::{LocalKeyCache, SharedKeyCache};
pub use request::HttpRequest;
pub use signer::{LocalSigner, PresignedRequest, SharedSigner, Signer};
pub use signing_time::SigningTime;


#[cfg(test)]
#[macro_use]
extern crate quickcheck;
