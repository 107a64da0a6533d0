// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta};

/// NOTE: Used for reading and writing inventory files, so it should be stable across runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_FLOATING: &str = "%Y-%m-%dT%H:%M:%S";
pub const STABLE_FORMAT_LOCAL: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Human friendly format accepted on input only.
pub const INPUT_FORMAT_MINUTES: &str = "%Y-%m-%d %H:%M";

/// Shift a date by a number of days, clamping at the representable bounds.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    match TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta)) {
        Some(d) => d,
        None if days >= 0 => NaiveDate::MAX,
        None => NaiveDate::MIN,
    }
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
