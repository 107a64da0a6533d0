// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Views computed from a configuration and its inventory file.

use foodcal_core::query::{items_expiring_within, matching_recipes};
use foodcal_core::{Config, Inventory, InventoryStats, MatchMode, MonthGrid};

use crate::common::{SAMPLE_INVENTORY_TOML, date, names, setup_temp_dir, titles};

#[tokio::test]
async fn dashboard_figures_follow_config() {
    // Arrange
    let dir = setup_temp_dir().unwrap();
    let path = dir.write("food.toml", SAMPLE_INVENTORY_TOML).await.unwrap();
    let mut config: Config = toml::from_str(&format!(
        r#"
inventory_path = "{}"
expiring_soon_days = 1
match_mode = "any"

[[recipes]]
title = "Omelette"
ingredients = ["Eggs", "Milk"]
"#,
        path.display()
    ))
    .unwrap();
    config.normalize().unwrap();
    let today = date(2024, 11, 2);

    // Act
    let inventory = Inventory::load(&config.inventory_path).await.unwrap();
    let soon = items_expiring_within(inventory.records(), today, config.expiring_soon_days);
    let stats = InventoryStats::compute(
        inventory.records(),
        today,
        config.stats_window_days,
        config.chart_days,
    );
    let recipes = matching_recipes(inventory.records(), &config.recipes(), config.match_mode);

    // Assert
    assert_eq!(config.match_mode, MatchMode::Any);
    assert_eq!(names(&soon), ["Chicken", "Banana", "Eggs", "Orange"]);
    assert_eq!(stats.total, 9);
    assert_eq!(stats.expired, 1);
    assert_eq!(stats.expiring_soon, 4);
    assert_eq!(stats.by_day.len(), 5);
    assert_eq!(stats.by_day[0].date, date(2024, 11, 3));
    assert_eq!(stats.by_day[4].date, date(2024, 11, 7));
    assert_eq!(stats.max_per_day(), 2);
    assert_eq!(titles(&recipes), ["Omelette"]);
}

#[tokio::test]
async fn calendar_month_of_inventory() {
    let dir = setup_temp_dir().unwrap();
    let path = dir.write("food.toml", SAMPLE_INVENTORY_TOML).await.unwrap();
    let inventory = Inventory::load(&path).await.unwrap();

    let grid = MonthGrid::new(2024, 11).unwrap();
    let busy: Vec<_> = grid
        .items_by_day(inventory.records())
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(day, items)| (day, items.len()))
        .collect();

    assert_eq!(
        busy,
        [
            (date(2024, 11, 1), 1),
            (date(2024, 11, 2), 2),
            (date(2024, 11, 3), 2),
            (date(2024, 11, 6), 2),
            (date(2024, 11, 7), 2),
        ]
    );
}
