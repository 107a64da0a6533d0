// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::path::Path;

use tokio::fs;
use uuid::Uuid;

use crate::{ExpiryDate, FoodDraft, FoodRecord};

/// Error of an inventory mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// No record carries the id.
    NotFound(Uuid),

    /// The draft did not describe a valid record.
    InvalidDraft(String),

    /// A record with the same id already exists.
    DuplicateId(Uuid),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::NotFound(id) => write!(f, "no food item with id {id}"),
            InventoryError::InvalidDraft(e) => write!(f, "invalid food item: {e}"),
            InventoryError::DuplicateId(id) => write!(f, "duplicate food item id {id}"),
        }
    }
}

impl Error for InventoryError {}

/// The reverse of an applied change.
#[derive(Debug, Clone)]
enum Change {
    Added(Uuid),
    Removed { index: usize, record: FoodRecord },
    Rescheduled { id: Uuid, expiry: ExpiryDate },
}

/// The food records of a household together with an undo and redo history.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    records: Vec<FoodRecord>,
    undo: Vec<Change>,
    redo: Vec<Change>,
}

#[derive(Debug, serde::Deserialize)]
struct InventoryFile {
    #[serde(default)]
    food: Vec<FoodDraft>,
}

impl Inventory {
    /// Creates an inventory from existing records, with an empty history.
    pub fn new(records: Vec<FoodRecord>) -> Result<Self, InventoryError> {
        let mut inventory = Self::default();
        for record in records {
            inventory.insert_checked(inventory.records.len(), record)?;
        }
        Ok(inventory)
    }

    /// Loads the inventory from a TOML file of `[[food]]` tables, or a JSON file with a `food` array.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read inventory file {}: {}", path.display(), e))?;

        let file: InventoryFile = match path.extension() {
            Some(ext) if ext == "json" => serde_json::from_str(&content)
                .map_err(|e| format!("Failed to parse inventory file {}: {e}", path.display()))?,
            _ => toml::from_str(&content)
                .map_err(|e| format!("Failed to parse inventory file {}: {e}", path.display()))?,
        };

        let records = file
            .food
            .into_iter()
            .map(FoodDraft::into_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(InventoryError::InvalidDraft)?;

        tracing::debug!(count = records.len(), "inventory loaded");
        Ok(Self::new(records)?)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the id, if any.
    pub fn get(&self, id: Uuid) -> Option<&FoodRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose id starts with `prefix`, or whose name equals it ignoring case.
    pub fn find(&self, prefix_or_name: &str) -> Vec<&FoodRecord> {
        let needle = prefix_or_name.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|r| r.id.to_string().starts_with(&needle) || r.name.to_lowercase() == needle)
            .collect()
    }

    /// Adds a new item and returns it.
    pub fn add(&mut self, draft: FoodDraft) -> Result<&FoodRecord, InventoryError> {
        let record = draft.into_record().map_err(InventoryError::InvalidDraft)?;
        let index = self.records.len();
        let id = record.id;
        self.insert_checked(index, record)?;
        self.record_change(Change::Added(id));
        Ok(&self.records[index])
    }

    /// Removes the item with the id and returns it.
    pub fn remove(&mut self, id: Uuid) -> Result<FoodRecord, InventoryError> {
        let index = self.index_of(id)?;
        let record = self.records.remove(index);
        self.record_change(Change::Removed {
            index,
            record: record.clone(),
        });
        Ok(record)
    }

    /// Replaces the expiry of the item with the id.
    pub fn reschedule(&mut self, id: Uuid, expiry: ExpiryDate) -> Result<(), InventoryError> {
        let index = self.index_of(id)?;
        let previous = std::mem::replace(&mut self.records[index].expiry, expiry);
        self.record_change(Change::Rescheduled {
            id,
            expiry: previous,
        });
        Ok(())
    }

    /// Reverts the last change. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(change) = self.undo.pop() else {
            return false;
        };
        let inverse = self.apply(change);
        self.redo.push(inverse);
        true
    }

    /// Reapplies the last undone change. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(change) = self.redo.pop() else {
            return false;
        };
        let inverse = self.apply(change);
        self.undo.push(inverse);
        true
    }

    /// Whether [`Inventory::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether [`Inventory::redo`] would change anything.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn record_change(&mut self, inverse: Change) {
        self.undo.push(inverse);
        self.redo.clear();
    }

    /// Applies a recorded change and returns its inverse.
    fn apply(&mut self, change: Change) -> Change {
        match change {
            Change::Added(id) => match self.records.iter().position(|r| r.id == id) {
                Some(index) => {
                    let record = self.records.remove(index);
                    Change::Removed { index, record }
                }
                None => {
                    tracing::warn!(%id, "history refers to a missing record");
                    Change::Added(id)
                }
            },
            Change::Removed { index, record } => {
                let id = record.id;
                self.records.insert(index.min(self.records.len()), record);
                Change::Added(id)
            }
            Change::Rescheduled { id, expiry } => {
                match self.records.iter_mut().find(|r| r.id == id) {
                    Some(record) => {
                        let previous = std::mem::replace(&mut record.expiry, expiry);
                        Change::Rescheduled {
                            id,
                            expiry: previous,
                        }
                    }
                    None => {
                        tracing::warn!(%id, "history refers to a missing record");
                        Change::Rescheduled { id, expiry }
                    }
                }
            }
        }
    }

    fn index_of(&self, id: Uuid) -> Result<usize, InventoryError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(InventoryError::NotFound(id))
    }

    fn insert_checked(&mut self, index: usize, record: FoodRecord) -> Result<(), InventoryError> {
        if self.get(record.id).is_some() {
            return Err(InventoryError::DuplicateId(record.id));
        }
        self.records.insert(index, record);
        Ok(())
    }
}
