// ABOUTME: Grocery list model derived from profile preferences and templates
// ABOUTME: Ordered sections of items with aisle and storage metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How an item is stored at home
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageCategory {
    Pantry,
    Refrigerated,
    Frozen,
    Fresh,
}

/// A single shopping-list item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    /// Unique identifier
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Store aisle label
    pub aisle: String,
    /// Storage category
    pub storage: StorageCategory,
    /// Optional shopper note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GroceryItem {
    /// Create an item with a fresh id and no note
    #[must_use]
    pub fn new(name: impl Into<String>, aisle: impl Into<String>, storage: StorageCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            aisle: aisle.into(),
            storage,
            notes: None,
        }
    }

    /// Attach a shopper note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes = Some(note.into());
        self
    }
}

/// A titled group of items ("Pantry & Staples", ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrocerySection {
    /// Unique identifier
    pub id: Uuid,
    /// Section title
    pub title: String,
    /// Items in this section
    pub items: Vec<GroceryItem>,
}

impl GrocerySection {
    /// Create a section with a fresh id
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<GroceryItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            items,
        }
    }
}

/// The full derived shopping list; empty sections are dropped at build time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GroceryList {
    pub sections: Vec<GrocerySection>,
}

impl GroceryList {
    /// Build a list from sections, dropping any with zero items
    #[must_use]
    pub fn from_sections(sections: Vec<GrocerySection>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .filter(|section| !section.items.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_are_dropped() {
        let list = GroceryList::from_sections(vec![
            GrocerySection::new("Pantry & Staples", vec![GroceryItem::new(
                "Steel-cut oats",
                "Grains",
                StorageCategory::Pantry,
            )]),
            GrocerySection::new("Treats & Dessert", vec![]),
        ]);
        assert_eq!(list.sections.len(), 1);
        assert_eq!(list.sections[0].title, "Pantry & Staples");
    }
}
