// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::FoodRecord;
use crate::datetime::add_days;
use crate::query::items_on_date;

/// A single cell of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// The day shown in the cell.
    pub date: NaiveDate,

    /// Whether the day belongs to the displayed month, or pads the first or last week.
    pub in_month: bool,
}

/// The 7-column view of a month, weeks starting on Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthGrid {
    /// Creates the grid of a month, or `None` if the month does not exist.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = match month {
            12 => NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?,
            _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
        };
        let last = next_first.pred_opt()?;
        Some(Self {
            year,
            month,
            first,
            last,
        })
    }

    /// Creates the grid of the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    /// The year being displayed.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month being displayed, from 1 to 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// The following month.
    pub fn next(&self) -> Option<Self> {
        Self::from_date(self.last.succ_opt()?)
    }

    /// The preceding month.
    pub fn prev(&self) -> Option<Self> {
        Self::from_date(self.first.pred_opt()?)
    }

    /// Days of the previous month filling the first week.
    pub fn leading(&self) -> Vec<NaiveDate> {
        let n = i64::from(self.first.weekday().num_days_from_sunday());
        (1..=n).rev().map(|i| add_days(self.first, -i)).collect()
    }

    /// Every day of the month.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.first.iter_days().take_while(|d| *d <= self.last).collect()
    }

    /// Days of the next month completing the last week.
    pub fn trailing(&self) -> Vec<NaiveDate> {
        let n = 6 - i64::from(self.last.weekday().num_days_from_sunday());
        (1..=n).map(|i| add_days(self.last, i)).collect()
    }

    /// All cells in display order, a multiple of seven.
    pub fn cells(&self) -> impl Iterator<Item = CalendarCell> + '_ {
        let outside = |date| CalendarCell {
            date,
            in_month: false,
        };
        let inside = |date| CalendarCell {
            date,
            in_month: true,
        };

        self.leading()
            .into_iter()
            .map(outside)
            .chain(self.days().into_iter().map(inside))
            .chain(self.trailing().into_iter().map(outside))
    }

    /// The cells split into weeks of seven.
    pub fn weeks(&self) -> Vec<Vec<CalendarCell>> {
        let cells: Vec<_> = self.cells().collect();
        cells.chunks(7).map(<[CalendarCell]>::to_vec).collect()
    }

    /// The items expiring on each day of the month. Padding days are not included.
    pub fn items_by_day(&self, records: &[FoodRecord]) -> Vec<(NaiveDate, Vec<FoodRecord>)> {
        self.days()
            .into_iter()
            .map(|d| (d, items_on_date(records, d)))
            .collect()
    }
}
