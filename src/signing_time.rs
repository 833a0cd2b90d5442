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

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::OnceCell;

use crate::utils::{SHORT_TIME_FORMAT, TIME_FORMAT, UtcTime};

/// UTC signing instant with memoized `X-Amz-Date` and credential scope
/// representations.
#[derive(Clone, Debug)]
pub struct SigningTime {
    time: UtcTime,
    time_format: OnceCell<String>,
    short_time_format: OnceCell<String>,
}

impl SigningTime {
    /// Returns signing time for given instant, converted to UTC
    pub fn new<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Self {
            time: time.with_timezone(&Utc),
            time_format: OnceCell::new(),
            short_time_format: OnceCell::new(),
        }
    }

    pub fn time(&self) -> UtcTime {
        self.time
    }

    /// UTC calendar day of this instant
    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }

    /// Returns time formatted for `X-Amz-Date`, e.g. `20231201T120000Z`
    pub fn time_format(&self) -> &str {
        self.time_format
            .get_or_init(|| self.time.format(TIME_FORMAT).to_string())
    }

    /// Returns date formatted for credential scope, e.g. `20231201`
    pub fn short_time_format(&self) -> &str {
        self.short_time_format
            .get_or_init(|| self.time.format(SHORT_TIME_FORMAT).to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SigningTime {
    fn from(time: DateTime<Tz>) -> Self {
        SigningTime::new(time)
    }
}
