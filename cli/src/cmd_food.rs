// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use foodcal_core::query::{
    items_expiring_within, items_on_date, search_by_name, sorted_by_expiry,
    try_items_expiring_within,
};
use foodcal_core::{DateAnchor, FoodRecord, Foodcal, Freshness, storage_tip};

use crate::arg::{CommonArgs, FoodArgs};
use crate::food_formatter::{FoodFormatter, SHORT_ID_LEN, freshness_color};
use crate::util::{OutputFormat, format_date, format_days_left};

#[derive(Debug, Clone)]
pub struct CmdList {
    pub search: Option<String>,
    pub unsorted: bool,
    pub output_format: OutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the food items, soonest to expire first")
            .arg(FoodArgs::search())
            .arg(arg!(--unsorted "Keep the order of the inventory file"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: FoodArgs::get_search(matches),
            unsorted: matches.get_flag("unsorted"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing food items...");
        let records = search_by_name(app.records(), self.search.as_deref().unwrap_or(""));
        let records = match self.unsorted {
            true => records,
            false => sorted_by_expiry(&records),
        };
        print_records(app.today(), &records, self.output_format, "No food items");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdDay {
    pub date: DateAnchor,
    pub output_format: OutputFormat,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the food items expiring on a day")
            .arg(FoodArgs::date())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: FoodArgs::get_date(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing food items on a day...");
        let date = self.date.resolve(app.today());
        let records = items_on_date(app.records(), date);
        if self.output_format == OutputFormat::Table {
            println!("🗓️ {}", format_date(date).bold());
        }
        print_records(
            app.today(),
            &records,
            self.output_format,
            "Nothing expires on this day",
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdExpiring {
    pub from: Option<DateAnchor>,
    pub within: Option<i64>,
    pub strict: bool,
    pub output_format: OutputFormat,
}

impl CmdExpiring {
    pub const NAME: &str = "expiring";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the food items expiring within a number of days")
            .arg(FoodArgs::from("First day of the window, defaults to today"))
            .arg(FoodArgs::within())
            .arg(arg!(--strict "Fail on a negative window instead of listing nothing"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            from: FoodArgs::get_from(matches),
            within: FoodArgs::get_within(matches),
            strict: matches.get_flag("strict"),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing expiring food items...");
        let from = self
            .from
            .unwrap_or_else(DateAnchor::today)
            .resolve(app.today());
        let within = self.within.unwrap_or(app.config().expiring_soon_days);

        let records = match self.strict {
            true => try_items_expiring_within(app.records(), from, within)?,
            false => items_expiring_within(app.records(), from, within),
        };
        print_records(
            app.today(),
            &sorted_by_expiry(&records),
            self.output_format,
            "Nothing expires in this window",
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the details of a food item, with storage advice")
            .arg(FoodArgs::id_or_name())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: FoodArgs::get_id_or_name(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing food item...");
        let record = Self::find_one(app, &self.id)?;
        match self.output_format {
            OutputFormat::Json => println!("{}", Self::json(record, app.today())?),
            OutputFormat::Table => print!("{}", Self::details(record, app.today())),
        }
        Ok(())
    }

    fn find_one<'a>(app: &'a Foodcal, id: &str) -> Result<&'a FoodRecord, Box<dyn Error>> {
        match app.inventory().find(id).as_slice() {
            [] => Err(format!("No food item matches: {id}").into()),
            [record] => Ok(*record),
            records => {
                let candidates = records
                    .iter()
                    .map(|r| format!("{} ({})", r.name, &r.id.to_string()[..SHORT_ID_LEN]))
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(format!("Ambiguous food item {id}, candidates: {candidates}").into())
            }
        }
    }

    fn details(record: &FoodRecord, today: NaiveDate) -> String {
        let days = record.days_until_expiry(today);
        let freshness = Freshness::of(record, today);
        let color = freshness_color(freshness);
        format!(
            "{}\n  {:<10}{}\n  {:<10}{}\n  {:<10}{}\n  {:<10}{}\n  {:<10}{}\n",
            record.name.bold(),
            "id",
            record.id,
            "category",
            record.category,
            "expiry",
            record.expiry,
            "status",
            format!("{} ({freshness})", format_days_left(days)).color(color),
            "storage",
            storage_tip(&record.name),
        )
    }

    fn json(record: &FoodRecord, today: NaiveDate) -> Result<String, Box<dyn Error>> {
        let value = serde_json::json!({
            "id": record.id,
            "name": record.name,
            "category": record.category,
            "expiry": record.expiry,
            "days_until_expiry": record.days_until_expiry(today),
            "freshness": Freshness::of(record, today),
            "storage_tip": storage_tip(&record.name),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Prints the records, or a placeholder when there is nothing to show in a table.
pub fn print_records(
    as_of: NaiveDate,
    records: &[FoodRecord],
    format: OutputFormat,
    empty: &str,
) {
    if records.is_empty() && format == OutputFormat::Table {
        println!("{}", empty.italic());
        return;
    }

    let formatter = FoodFormatter::listing(as_of, format);
    println!("{}", formatter.format(records));
}
