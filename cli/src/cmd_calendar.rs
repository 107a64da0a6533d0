// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use clap::{ArgMatches, Command};
use colored::Colorize;
use foodcal_core::query::items_on_date;
use foodcal_core::{CalendarCell, FoodRecord, Foodcal, Freshness, MonthGrid};

use crate::arg::{CommonArgs, FoodArgs};
use crate::food_formatter::freshness_color;
use crate::util::{OutputFormat, format_date};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar {
    pub month: Option<(i32, u32)>,
    pub output_format: OutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show a month with the number of items expiring on each day")
            .arg(FoodArgs::month())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: FoodArgs::get_month(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering calendar...");
        let today = app.today();
        let (year, month) = self.month.unwrap_or((today.year(), today.month()));
        let grid =
            MonthGrid::new(year, month).ok_or_else(|| format!("Invalid month: {year}-{month}"))?;

        match self.output_format {
            OutputFormat::Json => println!("{}", Self::json(&grid, app.records())?),
            OutputFormat::Table => print!(
                "{}",
                MonthDisplay {
                    grid: &grid,
                    records: app.records(),
                    today,
                }
            ),
        }
        Ok(())
    }

    fn json(grid: &MonthGrid, records: &[FoodRecord]) -> Result<String, Box<dyn Error>> {
        let cells: Vec<_> = grid
            .cells()
            .map(|cell| {
                let items = items_on_date(records, cell.date);
                serde_json::json!({
                    "date": cell.date,
                    "in_month": cell.in_month,
                    "count": items.len(),
                    "items": items.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        Ok(serde_json::to_string_pretty(&cells)?)
    }
}

/// The month grid with expiring days marked, followed by the items of each busy day.
#[derive(Debug)]
struct MonthDisplay<'a> {
    grid: &'a MonthGrid,
    records: &'a [FoodRecord],
    today: NaiveDate,
}

impl fmt::Display for MonthDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.grid.first_day().format("%B %Y").to_string();
        writeln!(f, "{:^28}", title.bold())?;
        writeln!(
            f,
            "{}",
            WEEKDAYS.map(|d| format!(" {d} ")).concat().trim_end()
        )?;

        for week in self.grid.weeks() {
            let line: String = week.iter().map(|cell| self.cell(cell)).collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        let busy: Vec<_> = self
            .grid
            .items_by_day(self.records)
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .collect();
        if !busy.is_empty() {
            writeln!(f)?;
        }
        for (date, items) in busy {
            let names: Vec<_> = items.iter().map(|r| r.name.as_str()).collect();
            writeln!(f, "{}  {}", format_date(date), names.join(", "))?;
        }
        Ok(())
    }
}

impl MonthDisplay<'_> {
    fn cell(&self, cell: &CalendarCell) -> String {
        let count = items_on_date(self.records, cell.date).len();
        let mark = if count > 0 { "•" } else { " " };
        let text = format!("{:>3}{mark}", cell.date.day());
        let text = if !cell.in_month {
            text.dimmed()
        } else if count > 0 {
            let days = (cell.date - self.today).num_days();
            text.color(freshness_color(Freshness::from_days_left(days)))
        } else {
            text.normal()
        };
        match cell.date == self.today {
            true => text.underline().to_string(),
            false => text.to_string(),
        }
    }
}
