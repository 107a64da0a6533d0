// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{MatchMode, RecipeDefinition, default_recipes};

/// The name of the foodcal application.
pub const APP_NAME: &str = "foodcal";

/// Longest per-day chart, in days.
pub const MAX_CHART_DAYS: i64 = 366;

/// Configuration for the foodcal application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the inventory file.
    pub inventory_path: PathBuf,

    /// Days ahead, from today, for an item to count as expiring soon.
    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,

    /// Days ahead covered by the expiring soon figure of the statistics.
    #[serde(default = "default_stats_window_days")]
    pub stats_window_days: i64,

    /// Number of days shown in the per-day expiry chart.
    #[serde(default = "default_chart_days")]
    pub chart_days: i64,

    /// Recipes to recommend from. Falls back to the built-in list when empty.
    #[serde(default)]
    pub recipes: Vec<RecipeDefinition>,

    /// How recipes qualify against the inventory.
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Config {
    /// Creates a configuration with defaults for everything but the inventory path.
    pub fn new(inventory_path: impl Into<PathBuf>) -> Self {
        Self {
            inventory_path: inventory_path.into(),
            expiring_soon_days: default_expiring_soon_days(),
            stats_window_days: default_stats_window_days(),
            chart_days: default_chart_days(),
            recipes: Vec::new(),
            match_mode: MatchMode::default(),
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.inventory_path = expand_path(&self.inventory_path)
            .map_err(|e| format!("Failed to expand inventory path: {e}"))?;

        for (name, days) in [
            ("expiring_soon_days", self.expiring_soon_days),
            ("stats_window_days", self.stats_window_days),
            ("chart_days", self.chart_days),
        ] {
            if days < 0 {
                tracing::warn!(name, days, "negative day count, queries will be empty");
            }
        }

        if self.chart_days > MAX_CHART_DAYS {
            tracing::warn!(
                chart_days = self.chart_days,
                max = MAX_CHART_DAYS,
                "chart too long, truncating"
            );
            self.chart_days = MAX_CHART_DAYS;
        }

        Ok(())
    }

    /// The configured recipes, or the built-in ones if none are configured.
    pub fn recipes(&self) -> Vec<RecipeDefinition> {
        match self.recipes.is_empty() {
            true => default_recipes(),
            false => self.recipes.clone(),
        }
    }
}

const fn default_expiring_soon_days() -> i64 {
    2
}

const fn default_stats_window_days() -> i64 {
    3
}

const fn default_chart_days() -> i64 {
    5
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
