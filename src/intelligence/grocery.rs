// ABOUTME: Grocery list synthesis from profile preferences and training load
// ABOUTME: Pantry, protein/recovery, and treats sections; empty sections dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Grocery Synthesizer

use crate::config::{CoachConfig, KeywordTables};
use crate::models::{
    GroceryItem, GroceryList, GrocerySection, Profile, StorageCategory, TrainingLoad,
};

/// Fallback protein item when no preference mentions a recognized protein
const FALLBACK_PROTEIN: &str = "Lean protein of choice";

/// Derive the shopping list from profile preferences
///
/// Section order is fixed: Pantry & Staples, Protein & Recovery, Treats &
/// Dessert. Sections with zero items are dropped.
#[must_use]
pub fn build_grocery_list(profile: &Profile, config: &CoachConfig) -> GroceryList {
    let mut pantry_items: Vec<GroceryItem> = profile
        .grocery_staples
        .iter()
        .map(|staple| GroceryItem::new(staple.clone(), "Pantry", StorageCategory::Pantry))
        .collect();

    if pantry_items.is_empty() {
        pantry_items = vec![
            GroceryItem::new("Steel-cut oats", "Grains", StorageCategory::Pantry),
            GroceryItem::new("Greek yogurt", "Dairy", StorageCategory::Refrigerated),
        ];
    }

    let mut protein_items = vec![protein_item(profile, config)];
    if profile.training.load == TrainingLoad::Heavy {
        protein_items.push(
            GroceryItem::new("Electrolyte mix", "Supplements", StorageCategory::Pantry)
                .with_note("Support recovery and heavy days."),
        );
    }

    let treat_items: Vec<GroceryItem> = profile
        .dessert_cadence
        .as_ref()
        .filter(|cadence| !cadence.is_empty())
        .map(|cadence| {
            vec![GroceryItem::new(cadence.clone(), "Treats", StorageCategory::Fresh)
                .with_note("Keep dessert cadence aligned with goals.")]
        })
        .unwrap_or_default();

    GroceryList::from_sections(vec![
        GrocerySection::new("Pantry & Staples", pantry_items),
        GrocerySection::new("Protein & Recovery", protein_items),
        GrocerySection::new("Treats & Dessert", treat_items),
    ])
}

fn protein_item(profile: &Profile, config: &CoachConfig) -> GroceryItem {
    let name = profile
        .taste_preferences
        .iter()
        .find(|preference| {
            KeywordTables::matches_any(preference, &config.keywords.protein_features)
        })
        .map_or_else(|| FALLBACK_PROTEIN.to_owned(), |hit| capitalize_words(hit));

    let item = GroceryItem::new(name, "Protein", StorageCategory::Refrigerated);
    match profile.health.supplements.first() {
        Some(supplement) => item.with_note(format!("Contains {}", supplement.name)),
        None => item,
    }
}

/// Uppercase the first letter of each whitespace-separated word
fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Supplement;

    #[test]
    fn test_empty_staples_get_two_defaults() {
        let list = build_grocery_list(&Profile::default(), &CoachConfig::default());
        let pantry = &list.sections[0];
        assert_eq!(pantry.title, "Pantry & Staples");
        assert_eq!(pantry.items.len(), 2);
        assert_eq!(pantry.items[0].name, "Steel-cut oats");
        assert_eq!(pantry.items[1].name, "Greek yogurt");
    }

    #[test]
    fn test_dessert_cadence_adds_treat_with_note() {
        let mut profile = Profile::default();
        profile.dessert_cadence = Some("few times/week".to_owned());

        let list = build_grocery_list(&profile, &CoachConfig::default());
        let treats = list
            .sections
            .iter()
            .find(|section| section.title == "Treats & Dessert")
            .unwrap();
        assert_eq!(treats.items.len(), 1);
        assert!(treats.items[0].notes.as_ref().is_some_and(|note| !note.is_empty()));
    }

    #[test]
    fn test_treats_section_dropped_without_cadence() {
        let list = build_grocery_list(&Profile::default(), &CoachConfig::default());
        assert!(list
            .sections
            .iter()
            .all(|section| section.title != "Treats & Dessert"));
    }

    #[test]
    fn test_protein_item_from_preferences() {
        let mut profile = Profile::default();
        profile.taste_preferences = vec!["rice".to_owned(), "grilled salmon".to_owned()];
        profile.health.supplements = vec![Supplement::new("creatine")];

        let list = build_grocery_list(&profile, &CoachConfig::default());
        let protein = list
            .sections
            .iter()
            .find(|section| section.title == "Protein & Recovery")
            .unwrap();
        assert_eq!(protein.items[0].name, "Grilled Salmon");
        assert_eq!(protein.items[0].notes.as_deref(), Some("Contains creatine"));
    }

    #[test]
    fn test_heavy_load_adds_electrolytes() {
        let mut profile = Profile::default();
        profile.training.load = TrainingLoad::Heavy;

        let list = build_grocery_list(&profile, &CoachConfig::default());
        let protein = list
            .sections
            .iter()
            .find(|section| section.title == "Protein & Recovery")
            .unwrap();
        assert_eq!(protein.items.len(), 2);
        assert_eq!(protein.items[1].name, "Electrolyte mix");
        assert_eq!(protein.items[1].storage, StorageCategory::Pantry);
    }

    #[test]
    fn test_fallback_protein_label() {
        let mut profile = Profile::default();
        profile.taste_preferences = vec!["pasta".to_owned()];

        let list = build_grocery_list(&profile, &CoachConfig::default());
        let protein = list
            .sections
            .iter()
            .find(|section| section.title == "Protein & Recovery")
            .unwrap();
        assert_eq!(protein.items[0].name, FALLBACK_PROTEIN);
    }
}
