// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Datelike;
use clap::{ArgMatches, Command};
use colored::Colorize;
use foodcal_core::{Foodcal, InventoryStats, QuickTips};

use crate::cmd_food::print_records;
use crate::util::OutputFormat;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes food expiring soon and a storage tip")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    /// Show the dashboard with expiring food, a summary and a tip.
    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let days = app.config().expiring_soon_days;
        println!("⏰ {}", format!("Expiring within {days} days").bold());
        print_records(
            app.today(),
            &app.expiring_soon(),
            OutputFormat::Table,
            "Nothing expires soon",
        );
        println!();

        let stats = app.stats(app.today());
        println!("{}", summary(&stats, app.config().stats_window_days));
        println!();

        let tips = QuickTips::starting_at(app.today().ordinal0() as usize);
        println!("💡 {}", tips.current().italic());
        Ok(())
    }
}

/// One line with the inventory totals, naming the window the soon count uses.
fn summary(stats: &InventoryStats, window_days: i64) -> String {
    format!(
        "📦 {} items, {} expiring within {window_days} days, {} expired",
        stats.total.to_string().bold(),
        stats.expiring_soon.to_string().yellow(),
        stats.expired.to_string().red(),
    )
}
