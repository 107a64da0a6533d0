// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of foodcal.

mod arg;
mod cli;
mod cmd_calendar;
mod cmd_dashboard;
mod cmd_food;
mod cmd_generate_completion;
mod cmd_recipes;
mod cmd_stats;
mod config;
mod food_formatter;
mod recipe_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
