// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use foodcal_core::{DateAnchor, MatchMode};

use crate::util::{OutputFormat, parse_month};

const DATE_HELP: &str = "\
Accepts YYYY-MM-DD, today, tomorrow, yesterday, or an offset from today such as \"in 3 days\" or 3d.";

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FoodArgs;

impl FoodArgs {
    pub fn date() -> Arg {
        arg!(date: <DATE> "The day to show items for")
            .long_help(format!("The day to show items for. {DATE_HELP}"))
            .value_parser(value_parser!(DateAnchor))
    }

    pub fn get_date(matches: &ArgMatches) -> DateAnchor {
        matches
            .get_one("date")
            .cloned()
            .unwrap_or_else(DateAnchor::today)
    }

    pub fn from(help: &'static str) -> Arg {
        arg!(--from <DATE>)
            .help(help)
            .long_help(format!("{help}. {DATE_HELP}"))
            .value_parser(value_parser!(DateAnchor))
    }

    pub fn get_from(matches: &ArgMatches) -> Option<DateAnchor> {
        matches.get_one("from").cloned()
    }

    pub fn within() -> Arg {
        arg!(-w --within <DAYS> "Number of days after the start day to include")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
    }

    pub fn get_within(matches: &ArgMatches) -> Option<i64> {
        matches.get_one("within").copied()
    }

    pub fn search() -> Arg {
        arg!(-s --search <QUERY> "Only show items whose name contains the query, ignoring case")
    }

    pub fn get_search(matches: &ArgMatches) -> Option<String> {
        matches.get_one("search").cloned()
    }

    pub fn id_or_name() -> Arg {
        arg!(id: <ID> "The id prefix or the name of the food item")
    }

    pub fn get_id_or_name(matches: &ArgMatches) -> String {
        matches.get_one::<String>("id").cloned().unwrap_or_default()
    }

    pub fn month() -> Arg {
        arg!(-m --month <MONTH> "The month to show, in the form YYYY-MM, defaults to this month")
            .value_parser(parse_month)
    }

    pub fn get_month(matches: &ArgMatches) -> Option<(i32, u32)> {
        matches.get_one("month").copied()
    }

    pub fn match_mode() -> Arg {
        arg!(--mode <MODE> "How recipes qualify: any ingredient or all ingredients available")
            .value_parser(value_parser!(MatchMode))
    }

    pub fn get_match_mode(matches: &ArgMatches) -> Option<MatchMode> {
        matches.get_one("mode").copied()
    }
}
