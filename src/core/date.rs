// Copyright 2025 Salescope Contributors
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

//! Calendar arithmetic for period grouping and lifespan metrics

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::core::Error;

/// Grouping granularity for time-series rollups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            _ => Err(Error::UnknownGranularity(s.to_string())),
        }
    }
}

/// Truncates a date to the first day of its period
pub fn truncate(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Day => date,
        Granularity::Month => {
            NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
        }
        Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    }
}

/// Calendar-month difference between two dates, ignoring day-of-month
///
/// Two dates in the same month yield 0; adjacent months yield 1. This is
/// the lifespan/recency metric: a customer whose first and last orders
/// fall in January and February has a lifespan of one month regardless
/// of the days involved.
pub fn months_between(earlier: NaiveDate, later: NaiveDate) -> i32 {
    (later.year() - earlier.year()) * 12 + later.month() as i32 - earlier.month() as i32
}

/// Whole elapsed years between two dates
///
/// Counts completed anniversaries, so a birthday later in the year has
/// not yet added a year. Used for customer age at the evaluation date.
pub fn years_between(earlier: NaiveDate, later: NaiveDate) -> i32 {
    let mut years = later.year() - earlier.year();
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years -= 1;
    }
    years
}
