// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::de;

use crate::datetime::util::{
    INPUT_FORMAT_MINUTES, STABLE_FORMAT_DATEONLY, STABLE_FORMAT_FLOATING, STABLE_FORMAT_LOCAL,
};

/// The expiry of a food item, which may carry a time of day that is ignored by all comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryDate {
    /// Date only without time.
    DateOnly(NaiveDate),

    /// Floating date and time without timezone.
    Floating(NaiveDateTime),

    /// Local date and time with timezone.
    /// NOTE: This is always in the local timezone of the system running the code.
    Local(DateTime<Local>),
}

impl ExpiryDate {
    /// Returns the calendar day, discarding any time of day.
    pub fn date(&self) -> NaiveDate {
        match self {
            ExpiryDate::DateOnly(d) => *d,
            ExpiryDate::Floating(dt) => dt.date(),
            ExpiryDate::Local(dt) => dt.date_naive(),
        }
    }

    /// Returns the time part, if available.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            ExpiryDate::DateOnly(_) => None,
            ExpiryDate::Floating(dt) => Some(dt.time()),
            ExpiryDate::Local(dt) => Some(dt.time()),
        }
    }

    /// Converts to a string representation that [`ExpiryDate::parse_stable`] reads back.
    pub fn format_stable(&self) -> String {
        match self {
            ExpiryDate::DateOnly(d) => d.format(STABLE_FORMAT_DATEONLY).to_string(),
            ExpiryDate::Floating(dt) => dt.format(STABLE_FORMAT_FLOATING).to_string(),
            ExpiryDate::Local(dt) => dt.format(STABLE_FORMAT_LOCAL).to_string(),
        }
    }

    /// Parses any of the stable formats, or `YYYY-MM-DD HH:MM` as a floating time.
    pub fn parse_stable(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.len() {
            // 2006-01-02
            10 => NaiveDate::parse_from_str(s, STABLE_FORMAT_DATEONLY)
                .map(Self::DateOnly)
                .ok(),

            // 2006-01-02 15:04
            16 => NaiveDateTime::parse_from_str(s, INPUT_FORMAT_MINUTES)
                .map(Self::Floating)
                .ok(),

            // 2006-01-02T15:04:05
            19 => NaiveDateTime::parse_from_str(s, STABLE_FORMAT_FLOATING)
                .map(Self::Floating)
                .ok(),

            // 2006-01-02T15:04:05+0800
            20.. => DateTime::parse_from_str(s, STABLE_FORMAT_LOCAL)
                .map(|a| Self::Local(a.with_timezone(&Local)))
                .ok(),

            _ => None,
        }
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time() {
            Some(time) => write!(f, "{} {}", self.date(), time.format("%H:%M")),
            None => write!(f, "{}", self.date()),
        }
    }
}

impl FromStr for ExpiryDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_stable(s).ok_or_else(|| {
            format!(
                "Invalid expiry date: {s}. Expected format: YYYY-MM-DD, YYYY-MM-DD HH:MM or YYYY-MM-DDTHH:MM:SS"
            )
        })
    }
}

impl From<NaiveDate> for ExpiryDate {
    fn from(d: NaiveDate) -> Self {
        ExpiryDate::DateOnly(d)
    }
}

impl From<NaiveDateTime> for ExpiryDate {
    fn from(dt: NaiveDateTime) -> Self {
        ExpiryDate::Floating(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ExpiryDate {
    fn from(dt: DateTime<Tz>) -> Self {
        ExpiryDate::Local(dt.with_timezone(&Local))
    }
}

impl serde::Serialize for ExpiryDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_stable())
    }
}

impl<'de> serde::Deserialize<'de> for ExpiryDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ExpiryVisitor;

        impl de::Visitor<'_> for ExpiryVisitor {
            type Value = ExpiryDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    r#"a date string like "2024-11-06", "2024-11-06 18:00" or "2024-11-06T18:00:00""#,
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(ExpiryVisitor)
    }
}
