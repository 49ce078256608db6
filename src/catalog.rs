// ABOUTME: Static intake questionnaire catalog with stable numeric ids
// ABOUTME: Ingestion routes on these ids; new questions must not reuse them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake questionnaire catalog
//!
//! A static ordered list of question groups. The 30 canonical ids are part of
//! the ingestion contract and must stay stable across catalog revisions.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Canonical question ids consumed by the ingestion routing table
pub mod ids {
    /// How many meals or snacks feel right most days?
    pub const MEAL_COUNT: u32 = 2;
    /// Foods you're loving lately?
    pub const FAVORITE_FOODS: u32 = 4;
    /// Foods or flavors you'd rather skip?
    pub const DISLIKED_FOODS: u32 = 5;
    /// How often do desserts or treats pop up?
    pub const DESSERT_CADENCE: u32 = 7;
    /// What kind of sweet tooth are we fueling?
    pub const DESSERT_TYPE: u32 = 8;
    /// Carbs that make you feel great?
    pub const FAVORITE_CARBS: u32 = 9;
    /// Proteins you enjoy most?
    pub const FAVORITE_PROTEINS: u32 = 10;
    /// Favorite fruits or vegetables?
    pub const FAVORITE_PRODUCE: u32 = 11;
    /// Any fruits or veggies you avoid?
    pub const DISLIKED_PRODUCE: u32 = 12;
    /// Staples you always keep on hand?
    pub const GROCERY_STAPLES: u32 = 18;
    /// Recent DEXA/InBody values
    pub const LEAN_MASS: u32 = 20;
    /// Height, weight, biological sex, and body fat
    pub const BODY_BASICS: u32 = 21;
    /// Primary goals right now?
    pub const NUTRITION_GOALS: u32 = 22;
    /// List of supplements or meds
    pub const SUPPLEMENTS_LIST: u32 = 24;
    /// Injuries or limitations
    pub const INJURIES: u32 = 25;
    /// Medical conditions
    pub const CONDITIONS: u32 = 26;
    /// Training load and recovery level
    pub const TRAINING_LOAD: u32 = 27;
    /// Days needing extra fuel or recovery support
    pub const HIGH_FUEL_DAYS: u32 = 28;
    /// Performance focus
    pub const PERFORMANCE_FOCUS: u32 = 29;
    /// Other health practices (hydration, fasting, sleep, stress)
    pub const RECOVERY_PRACTICES: u32 = 30;
}

/// One questionnaire prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Stable numeric id
    pub id: u32,
    /// Prompt text
    pub text: String,
    /// Whether an answer is required to finish intake
    pub required: bool,
    /// Owning group id
    pub group_id: u32,
    /// Optional helper copy shown under the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    /// Quick-reply chips
    pub quick_replies: Vec<String>,
}

/// A titled group of questions, asked in order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionGroup {
    /// Stable numeric id
    pub id: u32,
    /// Group title
    pub title: String,
    /// Questions in presentation order
    pub questions: Vec<Question>,
}

fn question(id: u32, text: &str, required: bool, group_id: u32) -> Question {
    Question {
        id,
        text: text.to_owned(),
        required,
        group_id,
        helper: None,
        quick_replies: Vec::new(),
    }
}

fn with_helper(mut q: Question, helper: &str) -> Question {
    q.helper = Some(helper.to_owned());
    q
}

fn with_replies(mut q: Question, replies: &[&str]) -> Question {
    q.quick_replies = replies.iter().map(|r| (*r).to_owned()).collect();
    q
}

/// The static ordered question catalog
pub fn question_groups() -> &'static [QuestionGroup] {
    static GROUPS: OnceLock<Vec<QuestionGroup>> = OnceLock::new();
    GROUPS.get_or_init(build_groups)
}

#[allow(clippy::too_many_lines)]
fn build_groups() -> Vec<QuestionGroup> {
    vec![
        QuestionGroup {
            id: 1,
            title: "Daily Rhythm & Frequency".into(),
            questions: vec![
                with_replies(
                    with_helper(
                        question(1, "Walk me through a usual day - when do you tend to eat meals?", false, 1),
                        "Timing helps me space energy and protein for you.",
                    ),
                    &["Early breakfast", "Late breakfast", "Varies"],
                ),
                with_replies(
                    question(ids::MEAL_COUNT, "How many meals or snacks feel right most days?", false, 1),
                    &["3 meals", "3 + snacks", "4+", "It depends"],
                ),
                with_replies(
                    question(3, "Any times of day you prefer not to eat?", false, 1),
                    &["Early AM", "Late PM", "Nope"],
                ),
            ],
        },
        QuestionGroup {
            id: 2,
            title: "Taste & Preferences".into(),
            questions: vec![
                with_replies(
                    question(ids::FAVORITE_FOODS, "Foods you're loving lately?", false, 2),
                    &["Savory", "Sweet", "Spicy"],
                ),
                with_replies(
                    question(ids::DISLIKED_FOODS, "Foods or flavors you'd rather skip?", false, 2),
                    &["Beans", "Seafood", "Spicy", "No thanks"],
                ),
                with_replies(
                    question(ids::FAVORITE_PRODUCE, "Favorite fruits or vegetables?", false, 2),
                    &["Berries", "Citrus", "Leafy greens"],
                ),
                with_replies(
                    question(ids::DISLIKED_PRODUCE, "Any fruits or veggies you avoid?", false, 2),
                    &["Cruciferous", "Nightshades", "Not picky"],
                ),
                with_replies(
                    question(ids::FAVORITE_CARBS, "Carbs that make you feel great?", false, 2),
                    &["Rice", "Potatoes", "Pasta", "Oats"],
                ),
                with_replies(
                    question(ids::FAVORITE_PROTEINS, "Proteins you enjoy most?", false, 2),
                    &["Chicken", "Fish", "Plant-based", "Red meat"],
                ),
            ],
        },
        QuestionGroup {
            id: 3,
            title: "Dietary Constraints".into(),
            questions: vec![with_replies(
                with_helper(
                    question(6, "Any dietary restrictions, allergies, or cultural guidelines?", false, 3),
                    "I'll keep your plan safe and respectful.",
                ),
                &["Gluten-free", "Dairy-free", "Halal", "Kosher", "None"],
            )],
        },
        QuestionGroup {
            id: 4,
            title: "Sweets & Treats".into(),
            questions: vec![
                with_replies(
                    question(ids::DESSERT_CADENCE, "How often do desserts or treats pop up?", false, 4),
                    &["Daily", "Few times/week", "Rarely"],
                ),
                with_replies(
                    question(ids::DESSERT_TYPE, "What kind of sweet tooth are we fueling?", false, 4),
                    &["Chocolate", "Candy", "Pastry", "Ice cream"],
                ),
            ],
        },
        QuestionGroup {
            id: 5,
            title: "Cooking & Time".into(),
            questions: vec![
                with_replies(
                    question(13, "How do you feel about cooking?", false, 5),
                    &["Love it", "Some days", "Minimal"],
                ),
                with_replies(
                    question(14, "Prep time sweet spot per meal?", false, 5),
                    &["<15 min", "15-30 min", "45+ min"],
                ),
                with_replies(
                    question(15, "Any kitchen equipment limits or favorites?", false, 5),
                    &["Air fryer", "Slow cooker", "No oven", "Minimal gear"],
                ),
            ],
        },
        QuestionGroup {
            id: 6,
            title: "Shopping Habits".into(),
            questions: vec![
                with_replies(
                    question(16, "How often do you shop for groceries?", false, 6),
                    &["Daily", "2-3x/week", "Weekly"],
                ),
                with_replies(
                    question(17, "Do you follow a fixed list or shop flexibly?", false, 6),
                    &["Fixed list", "Flexible", "Hybrid"],
                ),
                question(ids::GROCERY_STAPLES, "Staples you always keep on hand?", false, 6),
                question(19, "Seasonal favorites worth planning around?", false, 6),
            ],
        },
        QuestionGroup {
            id: 7,
            title: "Body Data & Goals".into(),
            questions: vec![
                with_helper(
                    question(ids::LEAN_MASS, "Recent DEXA/InBody values? Drop them in if you have them.", true, 7),
                    "Body comp helps me anchor your macros precisely.",
                ),
                with_replies(
                    question(
                        ids::BODY_BASICS,
                        "If no scan, what's your height, weight, biological sex, and estimated body fat %?",
                        false,
                        7,
                    ),
                    &["Share info", "Prefer not"],
                ),
                with_replies(
                    question(
                        ids::NUTRITION_GOALS,
                        "Primary goals right now? (gain, loss, performance, energy, convenience...)",
                        false,
                        7,
                    ),
                    &["Build muscle", "Lose fat", "Perform", "Energy", "Sustain"],
                ),
            ],
        },
        QuestionGroup {
            id: 8,
            title: "Health & Supplements".into(),
            questions: vec![
                with_replies(
                    with_helper(
                        question(
                            23,
                            "Any supplements or meds affecting metabolism, nutrition, or body comp? (creatine, GLP-1s...)",
                            true,
                            8,
                        ),
                        "This keeps recommendations safe and effective.",
                    ),
                    &["Creatine", "GLP-1", "HRT", "None"],
                ),
                question(ids::SUPPLEMENTS_LIST, "List them for me so I can factor them in.", false, 8),
                with_replies(
                    question(ids::INJURIES, "Any injuries or limitations I should respect?", false, 8),
                    &["Shoulder", "Back", "Knee", "None"],
                ),
                question(
                    ids::CONDITIONS,
                    "Any medical conditions I should keep in mind? (diabetes, thyroid, digestive...)",
                    false,
                    8,
                ),
            ],
        },
        QuestionGroup {
            id: 9,
            title: "Training & Recovery".into(),
            questions: vec![
                with_helper(
                    question(
                        ids::TRAINING_LOAD,
                        "How heavy is your current training load and recovery? (light, moderate, heavy, variable)",
                        true,
                        9,
                    ),
                    "I periodize fuel around training and recovery.",
                ),
                with_replies(
                    question(ids::HIGH_FUEL_DAYS, "Which days need extra fuel or recovery support?", false, 9),
                    &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
                ),
                with_replies(
                    question(ids::PERFORMANCE_FOCUS, "Performance focus? Endurance, speed, strength, or something else?", false, 9),
                    &["Endurance", "Speed", "Strength", "Power"],
                ),
                question(
                    ids::RECOVERY_PRACTICES,
                    "Other health practices worth noting (hydration, fasting, sleep, stress)?",
                    false,
                    9,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_ids_are_unique() {
        let mut seen = HashSet::new();
        for group in question_groups() {
            for q in &group.questions {
                assert!(seen.insert(q.id), "duplicate question id {}", q.id);
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_canonical_ids_are_present() {
        let all: HashSet<u32> = question_groups()
            .iter()
            .flat_map(|g| g.questions.iter().map(|q| q.id))
            .collect();
        for id in [
            ids::MEAL_COUNT,
            ids::FAVORITE_FOODS,
            ids::GROCERY_STAPLES,
            ids::LEAN_MASS,
            ids::BODY_BASICS,
            ids::TRAINING_LOAD,
            ids::RECOVERY_PRACTICES,
        ] {
            assert!(all.contains(&id), "missing canonical id {id}");
        }
    }

    #[test]
    fn test_required_questions() {
        let required: Vec<u32> = question_groups()
            .iter()
            .flat_map(|g| g.questions.iter().filter(|q| q.required).map(|q| q.id))
            .collect();
        assert_eq!(required, vec![ids::LEAN_MASS, 23, ids::TRAINING_LOAD]);
    }
}
