// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::FoodRecord;
use crate::datetime::add_days;
use crate::query::{DayCount, expiring_counts_by_day, items_expiring_within};

/// Summary figures of an inventory at a given day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InventoryStats {
    /// The day the figures are computed for.
    pub as_of: NaiveDate,

    /// Number of tracked items.
    pub total: usize,

    /// Items expiring within the soon window, including `as_of`.
    pub expiring_soon: usize,

    /// Items whose expiry day is before `as_of`.
    pub expired: usize,

    /// Items expiring on each of the days following `as_of`.
    pub by_day: Vec<DayCount>,
}

impl InventoryStats {
    /// Computes the statistics over `records`.
    #[tracing::instrument(skip(records), fields(records = records.len()))]
    pub fn compute(
        records: &[FoodRecord],
        as_of: NaiveDate,
        soon_days: i64,
        chart_days: i64,
    ) -> Self {
        Self {
            as_of,
            total: records.len(),
            expiring_soon: items_expiring_within(records, as_of, soon_days).len(),
            expired: records.iter().filter(|r| r.expiry_date() < as_of).count(),
            by_day: expiring_counts_by_day(records, add_days(as_of, 1), chart_days),
        }
    }

    /// The largest per-day count, used to scale charts.
    pub fn max_per_day(&self) -> usize {
        self.by_day.iter().map(|d| d.count).max().unwrap_or(0)
    }
}
