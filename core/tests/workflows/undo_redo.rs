// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Editing an inventory and walking its history.

use foodcal_core::query::items_on_date;
use foodcal_core::{FoodDraft, Inventory, InventoryStats};

use crate::common::{date, names, sample_inventory};

fn draft(name: &str, y: i32, m: u32, d: u32) -> FoodDraft {
    FoodDraft {
        id: None,
        name: name.to_string(),
        category: None,
        expiry: date(y, m, d).into(),
    }
}

#[test]
fn delete_then_undo_restores_the_day_view() {
    // Arrange
    let mut inventory = Inventory::new(sample_inventory()).unwrap();
    let day = date(2024, 11, 2);
    let chicken = inventory.find("chicken")[0].id;

    // Act
    inventory.remove(chicken).unwrap();
    let after_delete = items_on_date(inventory.records(), day);
    inventory.undo();
    let after_undo = items_on_date(inventory.records(), day);

    // Assert
    assert_eq!(names(&after_delete), ["Orange"]);
    assert_eq!(names(&after_undo), ["Chicken", "Orange"]);
}

#[test]
fn history_drives_statistics() {
    let as_of = date(2024, 11, 1);
    let mut inventory = Inventory::new(sample_inventory()).unwrap();
    let before = InventoryStats::compute(inventory.records(), as_of, 3, 5);

    inventory.add(draft("Yogurt", 2024, 11, 2)).unwrap();
    inventory.add(draft("Bread", 2024, 11, 20)).unwrap();
    let after = InventoryStats::compute(inventory.records(), as_of, 3, 5);
    assert_eq!(after.total, before.total + 2);
    assert_eq!(after.expiring_soon, before.expiring_soon + 1);

    assert!(inventory.undo());
    assert!(inventory.undo());
    assert_eq!(InventoryStats::compute(inventory.records(), as_of, 3, 5), before);

    assert!(inventory.redo());
    assert_eq!(inventory.len(), before.total + 1);
    assert!(inventory.can_redo());
}
