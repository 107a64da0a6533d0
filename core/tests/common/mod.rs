// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Temporary directory management with auto-cleanup

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fixtures::{
    SAMPLE_INVENTORY_TOML, date, food, names, sample_inventory, sample_recipes, titles,
};
#[allow(unused_imports)]
pub use temp_dir::setup_temp_dir;
