// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::ExpiryDate;
use crate::datetime::days_between;

/// A perishable food item tracked on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FoodRecord {
    /// Unique identifier, generated at creation and never changed.
    pub id: Uuid,

    /// Display name, non-empty.
    pub name: String,

    /// Image or icon reference, opaque to the queries.
    pub category: String,

    /// When the item expires. Only the calendar day takes part in comparisons.
    pub expiry: ExpiryDate,
}

impl FoodRecord {
    /// Creates a record with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        expiry: impl Into<ExpiryDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            expiry: expiry.into(),
        }
    }

    /// The calendar day on which the item expires.
    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry.date()
    }

    /// Signed number of days from `as_of` until the item expires, negative once expired.
    pub fn days_until_expiry(&self, as_of: NaiveDate) -> i64 {
        days_between(as_of, self.expiry_date())
    }
}

/// Input for adding a new food item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct FoodDraft {
    /// Existing id, if the item was created elsewhere.
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Display name of the item.
    pub name: String,

    /// Image or icon reference, defaults to the lowercase name.
    #[serde(default)]
    pub category: Option<String>,

    /// Expiry date of the item.
    pub expiry: ExpiryDate,
}

impl FoodDraft {
    /// Validates the draft and converts it into a record.
    pub fn into_record(self) -> Result<FoodRecord, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Food name must not be empty".to_string());
        }

        let category = match self.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => name.to_lowercase(),
        };

        Ok(FoodRecord {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: name.to_string(),
            category,
            expiry: self.expiry,
        })
    }
}

/// How close an item is to its expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    /// The expiry date has passed.
    Expired,

    /// Expires within two days.
    Critical,

    /// Expires within three to five days.
    Warning,

    /// More than five days left.
    Fresh,
}

impl Freshness {
    /// Classifies a record relative to `as_of`.
    pub fn of(record: &FoodRecord, as_of: NaiveDate) -> Self {
        Self::from_days_left(record.days_until_expiry(as_of))
    }

    /// Classifies a number of days left.
    pub fn from_days_left(days: i64) -> Self {
        match days {
            ..=-1 => Freshness::Expired,
            0..=2 => Freshness::Critical,
            3..=5 => Freshness::Warning,
            _ => Freshness::Fresh,
        }
    }
}

impl AsRef<str> for Freshness {
    fn as_ref(&self) -> &str {
        match self {
            Freshness::Expired => "expired",
            Freshness::Critical => "critical",
            Freshness::Warning => "warning",
            Freshness::Fresh => "fresh",
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
