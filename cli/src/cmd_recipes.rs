// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use foodcal_core::{Foodcal, MatchMode};

use crate::arg::{CommonArgs, FoodArgs};
use crate::recipe_formatter::{RecipeFormatter, RecipeRow};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdRecipes {
    pub mode: Option<MatchMode>,
    pub output_format: OutputFormat,
}

impl CmdRecipes {
    pub const NAME: &str = "recipes";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Recommend recipes for the food at hand")
            .arg(FoodArgs::match_mode())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            mode: FoodArgs::get_match_mode(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, app: &Foodcal) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "recommending recipes...");
        let rows = Self::rows(app, self.mode);

        if self.output_format == OutputFormat::Table {
            let mode = self.mode.unwrap_or(app.config().match_mode);
            println!("🍳 {} ({mode})", "Recipes".bold());
        }
        let formatter = RecipeFormatter::new(self.output_format);
        println!("{}", formatter.format(&rows));
        Ok(())
    }

    fn rows(app: &Foodcal, mode: Option<MatchMode>) -> Vec<RecipeRow> {
        app.recipes(mode)
            .into_iter()
            .map(|recipe| RecipeRow::new(app.records(), recipe))
            .collect()
    }
}
