// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use clap::{ArgMatches, Command};
use colored::Colorize;
use foodcal_core::{DateAnchor, Foodcal, InventoryStats};

use crate::arg::{CommonArgs, FoodArgs};
use crate::util::{OutputFormat, format_date};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct CmdStats {
    pub from: Option<DateAnchor>,
    pub output_format: OutputFormat,
}

impl CmdStats {
    pub const NAME: &str = "stats";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show inventory statistics and a chart of upcoming expiries")
            .arg(FoodArgs::from("Day to compute the statistics for, defaults to today"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            from: FoodArgs::get_from(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing statistics...");
        let as_of = self
            .from
            .unwrap_or_else(DateAnchor::today)
            .resolve(app.today());
        let stats = app.stats(as_of);

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            OutputFormat::Table => print!(
                "{}",
                StatsDisplay {
                    stats: &stats,
                    window_days: app.config().stats_window_days,
                }
            ),
        }
        Ok(())
    }
}

/// The statistics summary followed by a bar chart of the upcoming days.
#[derive(Debug)]
struct StatsDisplay<'a> {
    stats: &'a InventoryStats,
    window_days: i64,
}

impl fmt::Display for StatsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;
        writeln!(
            f,
            "📊 {} {}",
            "Statistics as of".bold(),
            format_date(stats.as_of).bold()
        )?;
        writeln!(f, "  {:<15}{:>4}", "Total items", stats.total)?;
        writeln!(
            f,
            "  {:<15}{:>4}  (within {} days)",
            "Expiring soon",
            stats.expiring_soon.to_string().yellow(),
            self.window_days
        )?;
        writeln!(f, "  {:<15}{:>4}", "Expired", stats.expired.to_string().red())?;

        if stats.by_day.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        let max = stats.max_per_day();
        for day in &stats.by_day {
            let len = match max {
                0 => 0,
                _ => (day.count * BAR_WIDTH).div_ceil(max),
            };
            writeln!(
                f,
                "  {} {:<width$} {}",
                day.date.format("%m-%d %a"),
                "█".repeat(len).green(),
                day.count,
                width = BAR_WIDTH,
            )?;
        }
        Ok(())
    }
}
