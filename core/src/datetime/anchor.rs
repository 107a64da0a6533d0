// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{str::FromStr, sync::OnceLock};

use chrono::NaiveDate;
use regex::Regex;

use crate::datetime::util::{STABLE_FORMAT_DATEONLY, add_days};

/// A calendar day given either absolutely or relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAnchor {
    /// A specific number of days in the future or past.
    InDays(i64),

    /// A specific date.
    Date(NaiveDate),
}

impl DateAnchor {
    /// Represents the current date.
    pub fn today() -> Self {
        DateAnchor::InDays(0)
    }

    /// Represents tomorrow, which is one day after today.
    pub fn tomorrow() -> Self {
        DateAnchor::InDays(1)
    }

    /// Represents yesterday, which is one day before today.
    pub fn yesterday() -> Self {
        DateAnchor::InDays(-1)
    }

    /// Resolves the anchor to a concrete date, relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateAnchor::InDays(n) => add_days(today, *n),
            DateAnchor::Date(d) => *d,
        }
    }
}

impl From<NaiveDate> for DateAnchor {
    fn from(d: NaiveDate) -> Self {
        DateAnchor::Date(d)
    }
}

impl FromStr for DateAnchor {
    type Err = String;

    fn from_str(t: &str) -> Result<Self, Self::Err> {
        // Handle keywords
        match t.trim().to_lowercase().as_str() {
            "yesterday" => return Ok(Self::yesterday()),
            "tomorrow" => return Ok(Self::tomorrow()),
            "today" => return Ok(Self::today()),
            _ => {}
        }

        if let Ok(date) = NaiveDate::parse_from_str(t.trim(), STABLE_FORMAT_DATEONLY) {
            Ok(Self::Date(date))
        } else if let Some(days) = parse_days(t) {
            // Parse as days (e.g., "10d", "in 10d", "in 10 days", "-2d")
            Ok(Self::InDays(days))
        } else {
            Err(format!(
                "Invalid date: {t}. Expected YYYY-MM-DD, today, tomorrow, yesterday or in N days"
            ))
        }
    }
}

/// Parse days from string formats like "10d", "in 10d", "in 10 days", "-3d"
fn parse_days(s: &str) -> Option<i64> {
    const RE: &str = r"(?i)^\s*(?:in\s*)?(-?\d+)\s*d(?:ays?)?\s*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).expect("days pattern is a valid regex"));
    re.captures(s).and_then(|captures| captures[1].parse::<i64>().ok())
}
