// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use foodcal_core::query::ingredient_coverage;
use foodcal_core::{FoodRecord, RecipeDefinition};

use crate::table::{Table, TableColumn, TableStyleBasic};
use crate::util::OutputFormat;

/// A recipe together with what the inventory has of it.
#[derive(Debug, Clone)]
pub struct RecipeRow {
    pub recipe: RecipeDefinition,
    pub available: Vec<String>,
    pub missing: Vec<String>,
}

impl RecipeRow {
    pub fn new(records: &[FoodRecord], recipe: RecipeDefinition) -> Self {
        let (available, missing) = ingredient_coverage(records, &recipe);
        Self {
            recipe,
            available,
            missing,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.recipe.title,
            "image": self.recipe.image_ref,
            "available": self.available,
            "missing": self.missing,
        })
    }
}

#[derive(Debug)]
pub struct RecipeFormatter {
    columns: Vec<RecipeColumn>,
    format: OutputFormat,
}

impl RecipeFormatter {
    pub fn new(format: OutputFormat) -> Self {
        let columns = vec![
            RecipeColumn::Title,
            RecipeColumn::Available,
            RecipeColumn::Missing,
        ];
        Self { columns, format }
    }

    pub fn format<'a>(&'a self, rows: &'a [RecipeRow]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [RecipeRow],
    formatter: &'a RecipeFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            // ingredient lists stay arrays, so rows are serialized directly
            OutputFormat::Json => {
                let rows: Vec<_> = self.rows.iter().map(RecipeRow::to_json).collect();
                let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RecipeColumn {
    Title,
    Available,
    Missing,
}

impl TableColumn<RecipeRow> for RecipeColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            RecipeColumn::Title => "title",
            RecipeColumn::Available => "available",
            RecipeColumn::Missing => "missing",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a RecipeRow) -> Cow<'a, str> {
        match self {
            RecipeColumn::Title => data.recipe.title.as_str().into(),
            RecipeColumn::Available => data.available.join(", ").into(),
            RecipeColumn::Missing => match data.missing.is_empty() {
                true => "".into(),
                false => format!("missing {}", data.missing.join(", ")).into(),
            },
        }
    }

    fn get_color(&self, data: &RecipeRow) -> Option<Color> {
        match self {
            RecipeColumn::Title if data.missing.is_empty() => Some(Color::Green),
            RecipeColumn::Available => Some(Color::Green),
            RecipeColumn::Missing => Some(Color::Red),
            _ => None,
        }
    }
}
