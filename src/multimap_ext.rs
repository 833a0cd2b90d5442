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

use crate::utils::urlencode;
use multimap::MultiMap;

/// Multimap for string key and string value
pub type Multimap = MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Replaces every value of given key with a single value
    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Sorts the values of every key lexicographically
    fn sort_values(&mut self);

    /// Converts multimap to canonical query string.
    ///
    /// Keys are sorted, values keep their list order, and both are escaped
    /// with the RFC 3986 unreserved set so a space always becomes `%20`,
    /// never `+`.
    fn get_canonical_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        self.remove(&key);
        self.insert(key, value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn sort_values(&mut self) {
        for (_, values) in self.iter_all_mut() {
            values.sort();
        }
    }

    fn get_canonical_query_string(&self) -> String {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        let mut query = String::new();
        for key in keys {
            let Some(values) = self.get_vec(key) else {
                continue;
            };
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&urlencode(key));
                query.push('=');
                query.push_str(&urlencode(value));
            }
        }

        query
    }
}
