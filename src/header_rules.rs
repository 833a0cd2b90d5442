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

//! Header inclusion rules for Signature V4
//!
//! A [`Rule`] classifies header names. Rules compose through negation,
//! any-of and all-of, and are assembled once into three process-wide
//! policies: [`IGNORED_HEADERS`], [`REQUIRED_SIGNED_HEADERS`] and
//! [`ALLOWED_QUERY_HOISTING`]. All matching is case-insensitive.

use crate::header_constants::*;
use lazy_static::lazy_static;
use std::collections::HashSet;

/// Composable predicate over header names
#[derive(Clone, Debug)]
pub enum Rule {
    /// Exact membership; names are stored lower-cased
    Set(HashSet<String>),
    /// Prefix match; patterns are stored lower-cased
    Prefix(Vec<String>),
    /// Matches whatever the inner rule does not
    Not(Box<Rule>),
    /// Matches when at least one inner rule matches
    AnyOf(Vec<Rule>),
    /// Matches when every inner rule matches
    AllOf(Vec<Rule>),
}

impl Rule {
    /// Returns a membership rule for given header names
    pub fn set<I, S>(names: I) -> Rule
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Rule::Set(
            names
                .into_iter()
                .map(|n| n.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }

    /// Returns a prefix rule for given patterns
    pub fn prefix<I, S>(patterns: I) -> Rule
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Rule::Prefix(
            patterns
                .into_iter()
                .map(|p| p.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }

    /// Returns the negation of given rule
    pub fn not(rule: Rule) -> Rule {
        Rule::Not(Box::new(rule))
    }

    /// Checks whether given header name satisfies this rule
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Rule::Set(names) => names.contains(&name.to_ascii_lowercase()),
            Rule::Prefix(patterns) => {
                let name = name.to_ascii_lowercase();
                patterns.iter().any(|p| name.starts_with(p.as_str()))
            }
            Rule::Not(rule) => !rule.matches(name),
            Rule::AnyOf(rules) => rules.iter().any(|r| r.matches(name)),
            Rule::AllOf(rules) => rules.iter().all(|r| r.matches(name)),
        }
    }
}

lazy_static! {
    /// Headers excluded from signing.
    ///
    /// The inner set names what is ignored; the policy itself matches every
    /// header that survives it, so canonicalization keeps a header only when
    /// this rule matches.
    pub static ref IGNORED_HEADERS: Rule = Rule::AnyOf(vec![Rule::not(Rule::set([
        AUTHORIZATION,
        USER_AGENT,
        X_AMZN_TRACE_ID,
        EXPECT,
        TRANSFER_ENCODING,
    ]))]);

    /// Headers that must always be signed and so are never hoisted into the
    /// query string of a presigned URL.
    pub static ref REQUIRED_SIGNED_HEADERS: Rule = Rule::AnyOf(vec![
        Rule::set([
            "Cache-Control",
            "Content-Disposition",
            "Content-Encoding",
            "Content-Language",
            "Content-Md5",
            "Content-Type",
            "Expires",
            "If-Match",
            "If-Modified-Since",
            "If-None-Match",
            "If-Unmodified-Since",
            "Range",
            "X-Amz-Acl",
            "X-Amz-Copy-Source",
            "X-Amz-Copy-Source-If-Match",
            "X-Amz-Copy-Source-If-Modified-Since",
            "X-Amz-Copy-Source-If-None-Match",
            "X-Amz-Copy-Source-If-Unmodified-Since",
            "X-Amz-Copy-Source-Range",
            "X-Amz-Copy-Source-Server-Side-Encryption-Customer-Algorithm",
            "X-Amz-Copy-Source-Server-Side-Encryption-Customer-Key",
            "X-Amz-Copy-Source-Server-Side-Encryption-Customer-Key-Md5",
            "X-Amz-Grant-Full-control",
            "X-Amz-Grant-Read",
            "X-Amz-Grant-Read-Acp",
            "X-Amz-Grant-Write",
            "X-Amz-Grant-Write-Acp",
            "X-Amz-Metadata-Directive",
            "X-Amz-Mfa",
            "X-Amz-Server-Side-Encryption",
            "X-Amz-Server-Side-Encryption-Aws-Kms-Key-Id",
            "X-Amz-Server-Side-Encryption-Context",
            "X-Amz-Server-Side-Encryption-Customer-Algorithm",
            "X-Amz-Server-Side-Encryption-Customer-Key",
            "X-Amz-Server-Side-Encryption-Customer-Key-Md5",
            "X-Amz-Storage-Class",
            "X-Amz-Website-Redirect-Location",
            X_AMZ_CONTENT_SHA256,
            "X-Amz-Tagging",
        ]),
        Rule::prefix([X_AMZ_OBJECT_LOCK_PREFIX]),
        Rule::prefix([X_AMZ_META_PREFIX]),
    ]);

    /// `X-Amz-*` headers that may move into the query string of a presigned
    /// URL.
    pub static ref ALLOWED_QUERY_HOISTING: Rule = Rule::AllOf(vec![
        Rule::not(REQUIRED_SIGNED_HEADERS.clone()),
        Rule::prefix([X_AMZ_PREFIX]),
    ]);
}
