// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::NaiveDate;
use foodcal_core::{FoodRecord, RecipeDefinition};

/// The kitchen of November 2024 used across the tests, as an inventory file.
#[allow(dead_code)]
pub const SAMPLE_INVENTORY_TOML: &str = r#"
[[food]]
name = "Apple"
category = "apple"
expiry = "2024-11-06"

[[food]]
name = "Chicken"
category = "chicken"
expiry = "2024-11-02"

[[food]]
name = "Banana"
expiry = "2024-11-03"

[[food]]
name = "Eggs"
expiry = "2024-11-03 07:30"

[[food]]
name = "Carrot"
expiry = "2024-11-06"

[[food]]
name = "Orange"
expiry = "2024-11-02"

[[food]]
name = "Tomato"
expiry = "2024-11-07"

[[food]]
name = "Milk"
expiry = "2024-11-07"

[[food]]
name = "Potato"
expiry = "2024-11-01"
"#;

/// Builds a date, panicking on invalid input.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Creates a food record with the lowercase name as category.
pub fn food(name: &str, expiry: NaiveDate) -> FoodRecord {
    FoodRecord::new(name, name.to_lowercase(), expiry)
}

/// The same kitchen as [`SAMPLE_INVENTORY_TOML`], built in memory.
#[allow(dead_code)]
pub fn sample_inventory() -> Vec<FoodRecord> {
    vec![
        food("Apple", date(2024, 11, 6)),
        food("Chicken", date(2024, 11, 2)),
        food("Banana", date(2024, 11, 3)),
        food("Eggs", date(2024, 11, 3)),
        food("Carrot", date(2024, 11, 6)),
        food("Orange", date(2024, 11, 2)),
        food("Tomato", date(2024, 11, 7)),
        food("Milk", date(2024, 11, 7)),
        food("Potato", date(2024, 11, 1)),
    ]
}

/// A small recipe book.
#[allow(dead_code)]
pub fn sample_recipes() -> Vec<RecipeDefinition> {
    vec![
        RecipeDefinition::new("Apple Pie", ["Apple", "Flour", "Sugar"], "applepie"),
        RecipeDefinition::new("Chicken Salad", ["Chicken", "Lettuce", "Tomato"], "chickensalad"),
        RecipeDefinition::new("Banana Smoothie", ["Banana", "Milk"], "bananasmoothie"),
    ]
}

/// Names of the records, in order.
#[allow(dead_code)]
pub fn names(records: &[FoodRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

/// Titles of the recipes, in order.
#[allow(dead_code)]
pub fn titles(recipes: &[RecipeDefinition]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}
