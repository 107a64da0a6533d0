// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::NaiveDate;
use colored::Color;
use foodcal_core::{FoodRecord, Freshness};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_days_left};

/// Number of id characters shown, enough to pick an item with `show`.
pub const SHORT_ID_LEN: usize = 8;

#[derive(Debug)]
pub struct FoodFormatter {
    columns: Vec<FoodColumn>,
    format: OutputFormat,
}

impl FoodFormatter {
    pub fn new(columns: Vec<FoodColumn>, format: OutputFormat) -> Self {
        Self { columns, format }
    }

    /// The columns of an inventory listing.
    pub fn listing(as_of: NaiveDate, format: OutputFormat) -> Self {
        let columns = match format {
            OutputFormat::Table => vec![
                FoodColumn::ShortId,
                FoodColumn::Expiry,
                FoodColumn::DaysLeft { as_of },
                FoodColumn::Name,
            ],
            OutputFormat::Json => vec![
                FoodColumn::Id,
                FoodColumn::Name,
                FoodColumn::Category,
                FoodColumn::Expiry,
                FoodColumn::DaysUntilExpiry { as_of },
                FoodColumn::Freshness { as_of },
            ],
        };
        Self::new(columns, format)
    }

    pub fn format<'a>(&'a self, records: &'a [FoodRecord]) -> Display<'a> {
        Display {
            records,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    records: &'a [FoodRecord],
    formatter: &'a FoodFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.records)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.records)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FoodColumn {
    Id,
    ShortId,
    Name,
    Category,
    Expiry,
    DaysLeft { as_of: NaiveDate },
    DaysUntilExpiry { as_of: NaiveDate },
    Freshness { as_of: NaiveDate },
}

impl TableColumn<FoodRecord> for FoodColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            FoodColumn::Id => "id",
            FoodColumn::ShortId => "short_id",
            FoodColumn::Name => "name",
            FoodColumn::Category => "category",
            FoodColumn::Expiry => "expiry",
            FoodColumn::DaysLeft { .. } => "days_left",
            FoodColumn::DaysUntilExpiry { .. } => "days_until_expiry",
            FoodColumn::Freshness { .. } => "freshness",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a FoodRecord) -> Cow<'a, str> {
        match self {
            FoodColumn::Id => data.id.to_string().into(),
            FoodColumn::ShortId => data.id.to_string()[..SHORT_ID_LEN].to_string().into(),
            FoodColumn::Name => data.name.as_str().into(),
            FoodColumn::Category => data.category.as_str().into(),
            FoodColumn::Expiry => data.expiry.to_string().into(),
            FoodColumn::DaysLeft { as_of } => format_days_left(data.days_until_expiry(*as_of)).into(),
            FoodColumn::DaysUntilExpiry { as_of } => data.days_until_expiry(*as_of).to_string().into(),
            FoodColumn::Freshness { as_of } => Freshness::of(data, *as_of).to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            FoodColumn::DaysLeft { .. } | FoodColumn::DaysUntilExpiry { .. } => {
                PaddingDirection::Right
            }
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &FoodRecord) -> Option<Color> {
        match self {
            FoodColumn::DaysLeft { as_of } | FoodColumn::Freshness { as_of } => {
                Some(freshness_color(Freshness::of(data, *as_of)))
            }
            _ => None,
        }
    }
}

pub fn freshness_color(freshness: Freshness) -> Color {
    match freshness {
        Freshness::Expired => Color::BrightBlack,
        Freshness::Critical => Color::Red,
        Freshness::Warning => Color::Yellow,
        Freshness::Fresh => Color::Green,
    }
}
