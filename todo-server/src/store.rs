//! In-memory owner of the to-do collection.
//!
//! Items live in a map ordered by id. Ids are only ever handed out in
//! increasing order, so iterating the map yields items in insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct ItemStore {
    items: BTreeMap<u64, Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two records every fresh process starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.insert("ML", "Udemy course");
        store.insert("DSA", "IK course");
        store
    }

    pub fn list(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn find(&self, id: u64) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Append a new item with id one past the current last id, or 1 when empty.
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) -> Item {
        let id = self.items.keys().next_back().map_or(1, |last| last + 1);
        let item = Item {
            id,
            name: name.into(),
            description: description.into(),
        };
        self.items.insert(id, item.clone());
        item
    }

    /// Overwrite name and description in place. The id never changes.
    pub fn update(
        &mut self,
        id: u64,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<&Item> {
        let item = self.items.get_mut(&id)?;
        item.name = name.into();
        item.description = description.into();
        Some(item)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.items.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
