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

//! Signing key derivation with per-day caching
//!
//! A signing key is `HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region),
//! service), "aws4_request")`. It depends only on the secret, the UTC
//! calendar day, the region and the service, so a [`SigningKeyDeriver`]
//! keeps one per region/service pair and reuses it until the day or the
//! access key changes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;

use crate::signing_time::SigningTime;
use crate::utils::{AWS4_REQUEST, hmac_hash};

/// Derived Signature V4 signing key
pub type SigningKey = [u8; 32];

/// Derives the signing key for given secret, service, region and day.
pub fn derive_key(secret: &str, service: &str, region: &str, time: &SigningTime) -> SigningKey {
    let mut key: Vec<u8> = b"AWS4".to_vec();
    key.extend(secret.as_bytes());

    let date_key = hmac_hash(&key, time.short_time_format().as_bytes());
    let date_region_key = hmac_hash(&date_key, region.as_bytes());
    let date_region_service_key = hmac_hash(&date_region_key, service.as_bytes());
    hmac_hash(&date_region_service_key, AWS4_REQUEST.as_bytes())
}

/// Returns cache key of given service and region, i.e. `region/service`
pub fn lookup_key(service: &str, region: &str) -> String {
    let mut key = String::with_capacity(region.len() + service.len() + 1);
    key.push_str(region);
    key.push('/');
    key.push_str(service);
    key
}

#[derive(Clone)]
struct DerivedKey {
    access_key_id: String,
    date: NaiveDate,
    key: SigningKey,
}

impl DerivedKey {
    fn is_valid_for(&self, access_key_id: &str, date: NaiveDate) -> bool {
        self.access_key_id == access_key_id && self.date == date
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("access_key_id", &self.access_key_id)
            .field("date", &self.date)
            .finish_non_exhaustive()
    }
}

/// Storage for derived signing keys, keyed by `region/service`.
///
/// An entry is returned only if it was stored for the same access key id
/// and the same UTC calendar day; anything else is a miss. A `set`
/// overwrites whatever was stored under the key.
pub trait DerivedKeyCache: fmt::Debug {
    fn get(&self, key: &str, access_key_id: &str, date: NaiveDate) -> Option<SigningKey>;

    fn set(&self, key: &str, access_key_id: &str, date: NaiveDate, signing_key: SigningKey);
}

/// Cache without synchronization.
///
/// `Send` but not `Sync`: a signer holding it can move between threads but
/// cannot be used from two at once.
#[derive(Debug, Default)]
pub struct LocalKeyCache {
    values: RefCell<HashMap<String, DerivedKey>>,
}

impl LocalKeyCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DerivedKeyCache for LocalKeyCache {
    fn get(&self, key: &str, access_key_id: &str, date: NaiveDate) -> Option<SigningKey> {
        self.values
            .borrow()
            .get(key)
            .filter(|entry| entry.is_valid_for(access_key_id, date))
            .map(|entry| entry.key)
    }

    fn set(&self, key: &str, access_key_id: &str, date: NaiveDate, signing_key: SigningKey) {
        self.values.borrow_mut().insert(
            key.to_string(),
            DerivedKey {
                access_key_id: access_key_id.to_string(),
                date,
                key: signing_key,
            },
        );
    }
}

/// Cache guarded by a read/write lock; lookups run in parallel, stores are
/// exclusive.
#[derive(Debug, Default)]
pub struct SharedKeyCache {
    values: RwLock<HashMap<String, DerivedKey>>,
}

impl SharedKeyCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DerivedKeyCache for SharedKeyCache {
    fn get(&self, key: &str, access_key_id: &str, date: NaiveDate) -> Option<SigningKey> {
        // Entries are written whole, so a poisoned lock still holds valid data.
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values
            .get(key)
            .filter(|entry| entry.is_valid_for(access_key_id, date))
            .map(|entry| entry.key)
    }

    fn set(&self, key: &str, access_key_id: &str, date: NaiveDate, signing_key: SigningKey) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(
            key.to_string(),
            DerivedKey {
                access_key_id: access_key_id.to_string(),
                date,
                key: signing_key,
            },
        );
    }
}

/// Derives signing keys, reusing cached ones for the same day.
#[derive(Debug, Default)]
pub struct SigningKeyDeriver<C: DerivedKeyCache> {
    cache: C,
}

impl<C: DerivedKeyCache> SigningKeyDeriver<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns signing key for given credentials, service, region and time.
    ///
    /// The access key id only selects the cache entry; it is not part of the
    /// derivation.
    pub fn derive_key(
        &self,
        access_key_id: &str,
        secret_access_key: &str,
        service: &str,
        region: &str,
        time: &SigningTime,
    ) -> SigningKey {
        let cache_key = lookup_key(service, region);
        let date = time.date();
        if let Some(key) = self.cache.get(&cache_key, access_key_id, date) {
            log::trace!("signing key cache hit for {cache_key} on {date}");
            return key;
        }

        log::trace!("signing key cache miss for {cache_key} on {date}");
        let key = derive_key(secret_access_key, service, region, time);
        self.cache.set(&cache_key, access_key_id, date, key);
        key
    }
}
