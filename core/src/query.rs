// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expiry-aware queries over a collection of food records.
//!
//! Every function here is pure: it reads the records it is given and returns a
//! new collection, so callers may run them concurrently on shared data. Dates
//! are compared by calendar day only, the time of an expiry is ignored.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;

use crate::datetime::{add_days, days_between};
use crate::{FoodRecord, MatchMode, RecipeDefinition};

/// Error returned by the strict query variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The window length was negative.
    NegativeWindow(i64),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NegativeWindow(n) => {
                write!(f, "window must be a non-negative number of days, got {n}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Number of items expiring on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DayCount {
    /// The calendar day.
    pub date: NaiveDate,

    /// Items whose expiry falls on `date`.
    pub count: usize,
}

/// Items expiring on `target`, in input order.
pub fn items_on_date(records: &[FoodRecord], target: NaiveDate) -> Vec<FoodRecord> {
    records
        .iter()
        .filter(|r| r.expiry_date() == target)
        .cloned()
        .collect()
}

/// Items expiring in `[from, from + window_days]`, both ends included.
///
/// A negative window yields no items.
pub fn items_expiring_within(
    records: &[FoodRecord],
    from: NaiveDate,
    window_days: i64,
) -> Vec<FoodRecord> {
    if window_days < 0 {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| in_window(r.expiry_date(), from, window_days))
        .cloned()
        .collect()
}

/// Like [`items_expiring_within`], but rejects a negative window instead of returning nothing.
pub fn try_items_expiring_within(
    records: &[FoodRecord],
    from: NaiveDate,
    window_days: i64,
) -> Result<Vec<FoodRecord>, QueryError> {
    if window_days < 0 {
        return Err(QueryError::NegativeWindow(window_days));
    }
    Ok(items_expiring_within(records, from, window_days))
}

/// Items ordered by expiry day, soonest first. Items on the same day keep their input order.
pub fn sorted_by_expiry(records: &[FoodRecord]) -> Vec<FoodRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(FoodRecord::expiry_date); // stable
    sorted
}

/// Items whose name contains `query`, ignoring case. An empty query returns everything.
pub fn search_by_name(records: &[FoodRecord], query: &str) -> Vec<FoodRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let query = fold_case(query);
    records
        .iter()
        .filter(|r| fold_case(&r.name).contains(&query))
        .cloned()
        .collect()
}

/// Whether the item expires in `[as_of, as_of + horizon_days]`, both ends included.
pub fn is_expiring_soon(record: &FoodRecord, as_of: NaiveDate, horizon_days: i64) -> bool {
    horizon_days >= 0 && in_window(record.expiry_date(), as_of, horizon_days)
}

/// Signed number of days from `as_of` until the item expires.
pub fn days_until_expiry(record: &FoodRecord, as_of: NaiveDate) -> i64 {
    record.days_until_expiry(as_of)
}

/// Recipes the inventory can support under `mode`.
///
/// When no recipe qualifies, the whole reference list is returned so that there
/// is always something to recommend.
pub fn matching_recipes(
    records: &[FoodRecord],
    recipes: &[RecipeDefinition],
    mode: MatchMode,
) -> Vec<RecipeDefinition> {
    let available = available_names(records);
    let matched: Vec<_> = recipes
        .iter()
        .filter(|recipe| {
            let mut ingredients = recipe.required_ingredients.iter();
            match mode {
                MatchMode::Any => ingredients.any(|i| available.contains(&fold_case(i))),
                MatchMode::All => ingredients.all(|i| available.contains(&fold_case(i))),
            }
        })
        .cloned()
        .collect();

    if matched.is_empty() {
        tracing::debug!(%mode, "no recipe matched, falling back to all recipes");
        recipes.to_vec()
    } else {
        matched
    }
}

/// Splits the ingredients of a recipe into those in the inventory and those missing.
pub fn ingredient_coverage(
    records: &[FoodRecord],
    recipe: &RecipeDefinition,
) -> (Vec<String>, Vec<String>) {
    let available = available_names(records);
    recipe
        .required_ingredients
        .iter()
        .cloned()
        .partition(|i| available.contains(&fold_case(i)))
}

/// Number of items expiring on each of the `days` consecutive days starting at `from`.
///
/// The days stop at [`NaiveDate::MAX`].
pub fn expiring_counts_by_day(records: &[FoodRecord], from: NaiveDate, days: i64) -> Vec<DayCount> {
    let days = days.clamp(0, days_between(from, NaiveDate::MAX).saturating_add(1));
    (0..days)
        .map(|offset| add_days(from, offset))
        .map(|date| DayCount {
            date,
            count: records.iter().filter(|r| r.expiry_date() == date).count(),
        })
        .collect()
}

fn in_window(date: NaiveDate, from: NaiveDate, window_days: i64) -> bool {
    date >= from && date <= add_days(from, window_days)
}

fn available_names(records: &[FoodRecord]) -> HashSet<String> {
    records.iter().map(|r| fold_case(&r.name)).collect()
}

/// The key names are compared on: full Unicode case folding.
fn fold_case(s: &str) -> String {
    caseless::default_case_fold_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn food(name: &str, expiry: NaiveDate) -> FoodRecord {
        FoodRecord::new(name, name.to_lowercase(), expiry)
    }

    fn names(records: &[FoodRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn items_on_date_truncates_time() {
        let late = date(2024, 11, 3).and_hms_opt(22, 0, 0).unwrap();
        let records = vec![
            food("Banana", date(2024, 11, 3)),
            FoodRecord::new("Eggs", "eggs", late),
            food("Apple", date(2024, 11, 6)),
        ];
        assert_eq!(
            names(&items_on_date(&records, date(2024, 11, 3))),
            ["Banana", "Eggs"]
        );
        assert!(items_on_date(&[], date(2024, 11, 3)).is_empty());
    }

    #[test]
    fn window_includes_both_ends() {
        let records = vec![
            food("Before", date(2025, 1, 11)),
            food("Start", date(2025, 1, 12)),
            food("End", date(2025, 1, 15)),
            food("After", date(2025, 1, 16)),
        ];
        let found = items_expiring_within(&records, date(2025, 1, 12), 3);
        assert_eq!(names(&found), ["Start", "End"]);
    }

    #[test]
    fn zero_window_is_a_single_day() {
        let records = vec![food("A", date(2025, 1, 12)), food("B", date(2025, 1, 13))];
        let found = items_expiring_within(&records, date(2025, 1, 12), 0);
        assert_eq!(names(&found), ["A"]);
    }

    #[test]
    fn negative_window_is_empty_or_error() {
        let records = vec![food("A", date(2025, 1, 12))];
        assert!(items_expiring_within(&records, date(2025, 1, 12), -1).is_empty());
        assert_eq!(
            try_items_expiring_within(&records, date(2025, 1, 12), -1),
            Err(QueryError::NegativeWindow(-1))
        );
        assert_eq!(
            try_items_expiring_within(&records, date(2025, 1, 12), 0).map(|r| r.len()),
            Ok(1)
        );
    }

    #[test]
    fn huge_window_does_not_overflow() {
        let records = vec![food("A", date(2025, 1, 12))];
        let found = items_expiring_within(&records, date(2025, 1, 1), i64::MAX);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn sort_is_stable_on_same_day() {
        let records = vec![
            food("Tomato", date(2024, 11, 7)),
            food("Chicken", date(2024, 11, 2)),
            food("Orange", date(2024, 11, 2)),
            food("Potato", date(2024, 11, 1)),
        ];
        let sorted = sorted_by_expiry(&records);
        assert_eq!(names(&sorted), ["Potato", "Chicken", "Orange", "Tomato"]);
        assert_eq!(sorted_by_expiry(&sorted), sorted);
    }

    #[test]
    fn sort_ignores_time_of_day() {
        let evening = date(2024, 11, 2).and_hms_opt(20, 0, 0).unwrap();
        let morning = date(2024, 11, 2).and_hms_opt(8, 0, 0).unwrap();
        let records = vec![
            FoodRecord::new("Evening", "x", evening),
            FoodRecord::new("Morning", "x", morning),
        ];
        assert_eq!(names(&sorted_by_expiry(&records)), ["Evening", "Morning"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![
            food("Apple", date(2024, 11, 6)),
            food("Pineapple", date(2024, 11, 7)),
            food("Milk", date(2024, 11, 7)),
        ];
        assert_eq!(names(&search_by_name(&records, "APP")), ["Apple", "Pineapple"]);
        assert_eq!(search_by_name(&records, ""), records);
        assert!(search_by_name(&records, "bread").is_empty());
    }

    #[test]
    fn search_folds_unicode_case() {
        let records = vec![food("Äpfel", date(2024, 11, 6)), food("Crème", date(2024, 11, 6))];
        assert_eq!(names(&search_by_name(&records, "äPF")), ["Äpfel"]);
        assert_eq!(names(&search_by_name(&records, "CRÈME")), ["Crème"]);
    }

    #[test]
    fn search_folds_final_sigma() {
        let records = vec![food("ΦΑΣΟΛΙΑ ΓΙΓΑΝΤΕΣ", date(2024, 11, 6))];
        assert_eq!(names(&search_by_name(&records, "γιγαντεσ")), ["ΦΑΣΟΛΙΑ ΓΙΓΑΝΤΕΣ"]);
        assert_eq!(names(&search_by_name(&records, "γιγαντες")), ["ΦΑΣΟΛΙΑ ΓΙΓΑΝΤΕΣ"]);
    }

    #[test]
    fn search_folds_sharp_s() {
        let records = vec![food("Weißwurst", date(2024, 11, 6))];
        assert_eq!(names(&search_by_name(&records, "WEISS")), ["Weißwurst"]);
    }

    #[test]
    fn recipes_match_on_folded_names() {
        let recipes = vec![
            RecipeDefinition::new("Gigantes", ["γιγαντεσ"], "gigantes"),
            RecipeDefinition::new("Other", ["Flour"], "other"),
        ];
        let records = vec![food("ΓΙΓΑΝΤΕΣ", date(2025, 1, 1))];

        let all = matching_recipes(&records, &recipes, MatchMode::All);
        let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Gigantes"]);

        let (available, missing) = ingredient_coverage(&records, &recipes[0]);
        assert_eq!(available, ["γιγαντεσ"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn expiring_soon_boundaries() {
        let as_of = date(2025, 1, 12);
        assert!(is_expiring_soon(&food("A", as_of), as_of, 2));
        assert!(is_expiring_soon(&food("A", date(2025, 1, 14)), as_of, 2));
        assert!(!is_expiring_soon(&food("A", date(2025, 1, 15)), as_of, 2));
        assert!(!is_expiring_soon(&food("A", date(2025, 1, 11)), as_of, 2));
        assert!(!is_expiring_soon(&food("A", as_of), as_of, -1));
    }

    #[test]
    fn days_until_expiry_is_signed() {
        let record = food("A", date(2025, 1, 12));
        assert_eq!(days_until_expiry(&record, date(2025, 1, 10)), 2);
        assert_eq!(days_until_expiry(&record, date(2025, 1, 13)), -1);
    }

    #[test]
    fn recipes_any_and_all() {
        let recipes = vec![
            RecipeDefinition::new("Apple Pie", ["Apple", "Flour", "Sugar"], "applepie"),
            RecipeDefinition::new("Fruit Bowl", ["apple", "banana"], "fruitbowl"),
            RecipeDefinition::new("Steak", ["Beef"], "steak"),
        ];
        let records = vec![food("Apple", date(2025, 1, 1)), food("BANANA", date(2025, 1, 1))];

        let any = matching_recipes(&records, &recipes, MatchMode::Any);
        let titles: Vec<_> = any.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Apple Pie", "Fruit Bowl"]);

        let all = matching_recipes(&records, &recipes, MatchMode::All);
        let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Fruit Bowl"]);
    }

    #[test]
    fn recipes_fall_back_to_full_list() {
        let recipes = vec![RecipeDefinition::new(
            "Apple Pie",
            ["Apple", "Flour", "Sugar"],
            "applepie",
        )];
        let records = vec![food("Apple", date(2025, 1, 1))];

        assert_eq!(matching_recipes(&records, &recipes, MatchMode::Any), recipes);
        assert_eq!(matching_recipes(&records, &recipes, MatchMode::All), recipes);
        assert_eq!(matching_recipes(&[], &recipes, MatchMode::Any), recipes);
        assert!(matching_recipes(&records, &[], MatchMode::All).is_empty());
    }

    #[test]
    fn coverage_splits_ingredients_in_order() {
        let recipe = RecipeDefinition::new("Banana Smoothie", ["Banana", "Milk", "Honey"], "x");
        let records = vec![food("milk", date(2025, 1, 1)), food("Banana", date(2025, 1, 1))];
        let (available, missing) = ingredient_coverage(&records, &recipe);
        assert_eq!(available, ["Banana", "Milk"]);
        assert_eq!(missing, ["Honey"]);
    }

    #[test]
    fn counts_by_day_cover_each_day() {
        let records = vec![
            food("Chicken", date(2024, 11, 2)),
            food("Orange", date(2024, 11, 2)),
            food("Banana", date(2024, 11, 3)),
            food("Tomato", date(2024, 11, 7)),
        ];
        let counts = expiring_counts_by_day(&records, date(2024, 11, 2), 5);
        let flat: Vec<_> = counts.iter().map(|c| c.count).collect();
        assert_eq!(flat, [2, 1, 0, 0, 0]);
        assert_eq!(counts[4].date, date(2024, 11, 6));
        assert!(expiring_counts_by_day(&records, date(2024, 11, 2), 0).is_empty());
        assert!(expiring_counts_by_day(&records, date(2024, 11, 2), -3).is_empty());
    }

    #[test]
    fn counts_by_day_stop_at_max_date() {
        let from = add_days(NaiveDate::MAX, -2);
        let counts = expiring_counts_by_day(&[], from, i64::MAX);
        let dates: Vec<_> = counts.iter().map(|c| c.date).collect();
        assert_eq!(dates, [from, add_days(from, 1), NaiveDate::MAX]);
    }
}
