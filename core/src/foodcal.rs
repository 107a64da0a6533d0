// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Local, NaiveDate};

use crate::query::{items_expiring_within, matching_recipes, sorted_by_expiry};
use crate::{Config, FoodRecord, Inventory, InventoryStats, MatchMode, RecipeDefinition};

/// The foodcal application core: a configuration, its inventory, and the day it is viewed on.
#[derive(Debug, Clone)]
pub struct Foodcal {
    today: NaiveDate,
    config: Config,
    inventory: Inventory,
}

impl Foodcal {
    /// Creates a new instance, loading the configured inventory file.
    pub async fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        Self::new_at(config, Local::now().date_naive()).await
    }

    /// Like [`Foodcal::new`], but viewed on the given day instead of today.
    #[tracing::instrument(skip(config))]
    pub async fn new_at(mut config: Config, today: NaiveDate) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let inventory = Inventory::load(&config.inventory_path)
            .await
            .map_err(|e| format!("Failed to load inventory: {e}"))?;

        Ok(Self {
            today,
            config,
            inventory,
        })
    }

    /// Creates an instance over an in-memory inventory.
    pub fn with_inventory(config: Config, inventory: Inventory, today: NaiveDate) -> Self {
        Self {
            today,
            config,
            inventory,
        }
    }

    /// The day the inventory is viewed on.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The loaded inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// All records of the inventory.
    pub fn records(&self) -> &[FoodRecord] {
        self.inventory.records()
    }

    /// Items expiring within the configured soon window, soonest first.
    pub fn expiring_soon(&self) -> Vec<FoodRecord> {
        let items = items_expiring_within(
            self.records(),
            self.today,
            self.config.expiring_soon_days,
        );
        sorted_by_expiry(&items)
    }

    /// Statistics as of `as_of`, using the configured windows.
    pub fn stats(&self, as_of: NaiveDate) -> InventoryStats {
        InventoryStats::compute(
            self.records(),
            as_of,
            self.config.stats_window_days,
            self.config.chart_days,
        )
    }

    /// Recipes to recommend, using the configured match mode unless one is given.
    pub fn recipes(&self, mode: Option<MatchMode>) -> Vec<RecipeDefinition> {
        let mode = mode.unwrap_or(self.config.match_mode);
        matching_recipes(self.records(), &self.config.recipes(), mode)
    }
}
