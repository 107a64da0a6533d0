// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core library of foodcal: the food record model, the expiry-aware
//! inventory queries, and the calendar and statistics views built on them.

mod calendar;
mod config;
mod datetime;
mod food;
mod foodcal;
mod inventory;
pub mod query;
mod recipe;
mod stats;
mod tips;

pub use crate::calendar::{CalendarCell, MonthGrid};
pub use crate::config::{APP_NAME, Config, MAX_CHART_DAYS};
pub use crate::datetime::{DateAnchor, ExpiryDate, add_days};
pub use crate::food::{FoodDraft, FoodRecord, Freshness};
pub use crate::foodcal::Foodcal;
pub use crate::inventory::{Inventory, InventoryError};
pub use crate::query::{DayCount, QueryError};
pub use crate::recipe::{MatchMode, RecipeDefinition, default_recipes};
pub use crate::stats::InventoryStats;
pub use crate::tips::{QuickTips, storage_tip};
