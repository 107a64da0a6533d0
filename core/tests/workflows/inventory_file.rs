// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loading inventories from TOML and JSON files.

use chrono::NaiveTime;
use foodcal_core::{ExpiryDate, Inventory};

use crate::common::{SAMPLE_INVENTORY_TOML, date, names, setup_temp_dir};

#[tokio::test]
async fn loads_toml_inventory() {
    // Arrange
    let dir = setup_temp_dir().unwrap();
    let path = dir.write("food.toml", SAMPLE_INVENTORY_TOML).await.unwrap();

    // Act
    let inventory = Inventory::load(&path).await.unwrap();

    // Assert
    assert_eq!(inventory.len(), 9);
    assert_eq!(names(&inventory.records()[..3]), ["Apple", "Chicken", "Banana"]);
    let banana = &inventory.records()[2];
    assert_eq!(banana.category, "banana");
    let eggs = &inventory.records()[3];
    assert_eq!(
        eggs.expiry,
        ExpiryDate::Floating(date(2024, 11, 3).and_time(NaiveTime::from_hms_opt(7, 30, 0).unwrap()))
    );
}

#[tokio::test]
async fn loads_json_inventory() {
    // Arrange
    let dir = setup_temp_dir().unwrap();
    let json = r#"{"food": [
        {"id": "6f1b2a9e-3c4d-4e5f-8a7b-9c0d1e2f3a4b", "name": "Milk", "expiry": "2024-11-07"},
        {"name": "Potato", "category": "veg", "expiry": "2024-11-01"}
    ]}"#;
    let path = dir.write("food.json", json).await.unwrap();

    // Act
    let inventory = Inventory::load(&path).await.unwrap();

    // Assert
    assert_eq!(inventory.len(), 2);
    assert_eq!(
        inventory.records()[0].id.to_string(),
        "6f1b2a9e-3c4d-4e5f-8a7b-9c0d1e2f3a4b"
    );
    assert_eq!(inventory.records()[1].category, "veg");
    assert_eq!(inventory.records()[1].expiry_date(), date(2024, 11, 1));
}

#[tokio::test]
async fn empty_file_is_an_empty_inventory() {
    let dir = setup_temp_dir().unwrap();
    let path = dir.write("food.toml", "").await.unwrap();

    let inventory = Inventory::load(&path).await.unwrap();
    assert!(inventory.is_empty());
}

#[tokio::test]
async fn rejects_invalid_files() {
    let dir = setup_temp_dir().unwrap();

    let unnamed = dir
        .write("unnamed.toml", "[[food]]\nname = \"\"\nexpiry = \"2024-11-01\"\n")
        .await
        .unwrap();
    let err = Inventory::load(&unnamed).await.unwrap_err();
    assert!(err.to_string().contains("invalid food item"));

    let bad_date = dir
        .write("bad.toml", "[[food]]\nname = \"Milk\"\nexpiry = \"soon\"\n")
        .await
        .unwrap();
    assert!(Inventory::load(&bad_date).await.is_err());

    let missing = dir.path().join("missing.toml");
    let err = Inventory::load(&missing).await.unwrap_err();
    assert!(err.to_string().contains("Failed to read inventory file"));
}
