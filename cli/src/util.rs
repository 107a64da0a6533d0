// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a month in the form `YYYY-MM`.
pub fn parse_month(s: &str) -> Result<(i32, u32), String> {
    let err = || format!("Invalid month: {s}. Expected format: YYYY-MM");
    let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
    let year: i32 = year.parse().map_err(|_| err())?;
    let month: u32 = month.parse().map_err(|_| err())?;
    match (1..=12).contains(&month) {
        true => Ok((year, month)),
        false => Err(err()),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human readable distance to the expiry day, e.g. `2 days left`.
pub fn format_days_left(days: i64) -> String {
    match days {
        ..=-2 => format!("expired {} days ago", -days),
        -1 => "expired yesterday".to_string(),
        0 => "expires today".to_string(),
        1 => "1 day left".to_string(),
        _ => format!("{days} days left"),
    }
}
