// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

/// A recipe from the reference list, recommended when the inventory covers its ingredients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecipeDefinition {
    /// Title of the recipe.
    pub title: String,

    /// Ingredient names, matched case-insensitively against food names.
    #[serde(alias = "ingredients")]
    pub required_ingredients: Vec<String>,

    /// Display reference, opaque to the queries.
    #[serde(default, alias = "image")]
    pub image_ref: String,
}

impl RecipeDefinition {
    /// Creates a recipe definition.
    pub fn new<I, S>(title: impl Into<String>, ingredients: I, image_ref: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            required_ingredients: ingredients.into_iter().map(Into::into).collect(),
            image_ref: image_ref.into(),
        }
    }
}

/// The recipes recommended when none are configured.
pub fn default_recipes() -> Vec<RecipeDefinition> {
    vec![
        RecipeDefinition::new(
            "Apple Pie",
            ["Apple", "Flour", "Sugar", "Butter"],
            "applepie",
        ),
        RecipeDefinition::new(
            "Chicken Salad",
            ["Chicken", "Lettuce", "Tomato"],
            "chickensalad",
        ),
        RecipeDefinition::new(
            "Banana Smoothie",
            ["Banana", "Milk", "Honey"],
            "bananasmoothie",
        ),
    ]
}

/// How a recipe qualifies against the available inventory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// At least one ingredient is available.
    Any,

    /// Every ingredient is available.
    #[default]
    All,
}

impl AsRef<str> for MatchMode {
    fn as_ref(&self) -> &str {
        match self {
            MatchMode::Any => "any",
            MatchMode::All => "all",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(MatchMode::Any),
            "all" => Ok(MatchMode::All),
            _ => Err(format!("Invalid match mode: {s}. Expected any or all")),
        }
    }
}
