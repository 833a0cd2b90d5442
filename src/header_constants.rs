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

pub const AUTHORIZATION: &str = "Authorization";
pub const HOST: &str = "Host";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const USER_AGENT: &str = "User-Agent";
pub const EXPECT: &str = "Expect";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";

pub const X_AMZN_TRACE_ID: &str = "X-Amzn-Trace-Id";

pub const X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";
pub const X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";
pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const X_AMZ_EXPIRES: &str = "X-Amz-Expires";
pub const X_AMZ_SIGNED_HEADERS: &str = "X-Amz-SignedHeaders";
pub const X_AMZ_SIGNATURE: &str = "X-Amz-Signature";
pub const X_AMZ_CONTENT_SHA256: &str = "X-Amz-Content-Sha256";

pub const X_AMZ_EXPECTED_BUCKET_OWNER: &str = "X-Amz-Expected-Bucket-Owner";
pub const X_AMZ_REQUEST_PAYER: &str = "X-Amz-Request-Payer";

pub const X_AMZ_PREFIX: &str = "X-Amz-";
pub const X_AMZ_META_PREFIX: &str = "X-Amz-Meta-";
pub const X_AMZ_OBJECT_LOCK_PREFIX: &str = "X-Amz-Object-Lock-";
