// ABOUTME: Answer ingestion routing table mapping question ids to profile fields
// ABOUTME: Fixed handler order keeps staples-replace ahead of dessert-append
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Answer ingestion
//!
//! Each routing-table entry claims one or more question ids and updates one
//! profile field. Handlers run in declaration order; the only ordering that
//! matters is that the grocery-staples replacement runs before the
//! dessert-type append, so dessert entries survive a full re-ingestion.
//! Absent or blank answers leave their fields unchanged, and malformed
//! numeric text never raises an error.

use std::collections::HashSet;

use tracing::debug;

use super::parsers;
use crate::catalog::ids;
use crate::config::{CoachConfig, KeywordTables};
use crate::errors::{AppError, CoachResult};
use crate::models::{
    NutritionGoal, PerformanceGoal, Profile, RawAnswers, Supplement, TrainingLoad, Weekday,
};

/// Prefix for dessert-type entries appended to grocery staples
const DESSERT_PREFIX: &str = "Dessert: ";

/// One routing-table entry: the ids it claims and the field update it applies
struct AnswerHandler {
    /// Profile field this handler updates, for logging and audit
    field: &'static str,
    /// Question ids feeding this field
    question_ids: &'static [u32],
    /// Field update, given the present non-blank answers in id order
    apply: fn(&mut Profile, &[&str], &KeywordTables),
}

/// The ingestion routing table
pub struct AnswerRouter {
    handlers: Vec<AnswerHandler>,
    keywords: KeywordTables,
}

impl AnswerRouter {
    /// Build the routing table from configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if two handlers claim the same
    /// question id, which would make the mapping ambiguous.
    pub fn new(config: &CoachConfig) -> CoachResult<Self> {
        let router = Self {
            handlers: build_handlers(),
            keywords: config.keywords.clone(),
        };
        router.check_collisions()?;
        Ok(router)
    }

    fn check_collisions(&self) -> CoachResult<()> {
        let mut claimed = HashSet::new();
        for handler in &self.handlers {
            for id in handler.question_ids {
                if !claimed.insert(*id) {
                    return Err(AppError::config(format!(
                        "question id {id} is claimed by more than one handler ({})",
                        handler.field
                    )));
                }
            }
        }
        Ok(())
    }

    /// Apply a set of raw answers to a profile
    ///
    /// Returns the updated profile; the input profile is consumed so callers
    /// cannot observe a half-applied state.
    #[must_use]
    pub fn apply(&self, mut profile: Profile, answers: &RawAnswers) -> Profile {
        for handler in &self.handlers {
            let present: Vec<&str> = handler
                .question_ids
                .iter()
                .filter_map(|id| answers.get(id))
                .map(String::as_str)
                .filter(|answer| !answer.trim().is_empty())
                .collect();

            if present.is_empty() {
                continue;
            }

            (handler.apply)(&mut profile, &present, &self.keywords);
            debug!(field = handler.field, answers = present.len(), "profile field updated");
        }
        profile
    }
}

fn build_handlers() -> Vec<AnswerHandler> {
    vec![
        AnswerHandler {
            field: "body.lean_mass_kg",
            question_ids: &[ids::LEAN_MASS],
            apply: apply_lean_mass,
        },
        AnswerHandler {
            field: "training.load",
            question_ids: &[ids::TRAINING_LOAD],
            apply: apply_training_load,
        },
        AnswerHandler {
            field: "health.supplements",
            question_ids: &[ids::SUPPLEMENTS_LIST],
            apply: apply_supplements,
        },
        AnswerHandler {
            field: "training.high_fuel_days",
            question_ids: &[ids::HIGH_FUEL_DAYS],
            apply: apply_high_fuel_days,
        },
        AnswerHandler {
            field: "training.performance_goals",
            question_ids: &[ids::PERFORMANCE_FOCUS],
            apply: apply_performance_focus,
        },
        AnswerHandler {
            field: "training.recovery_practices",
            question_ids: &[ids::RECOVERY_PRACTICES],
            apply: apply_recovery_practices,
        },
        AnswerHandler {
            field: "body",
            question_ids: &[ids::BODY_BASICS],
            apply: apply_body_basics,
        },
        AnswerHandler {
            field: "dessert_cadence",
            question_ids: &[ids::DESSERT_CADENCE],
            apply: apply_dessert_cadence,
        },
        AnswerHandler {
            field: "meal_cadence",
            question_ids: &[ids::MEAL_COUNT],
            apply: apply_meal_count,
        },
        AnswerHandler {
            field: "taste_preferences",
            question_ids: &[
                ids::FAVORITE_FOODS,
                ids::FAVORITE_CARBS,
                ids::FAVORITE_PROTEINS,
                ids::FAVORITE_PRODUCE,
            ],
            apply: apply_taste_preferences,
        },
        AnswerHandler {
            field: "avoidances",
            question_ids: &[ids::DISLIKED_FOODS, ids::DISLIKED_PRODUCE],
            apply: apply_avoidances,
        },
        // Staples replacement must precede the dessert-type append below.
        AnswerHandler {
            field: "grocery_staples",
            question_ids: &[ids::GROCERY_STAPLES],
            apply: apply_grocery_staples,
        },
        AnswerHandler {
            field: "grocery_staples (dessert)",
            question_ids: &[ids::DESSERT_TYPE],
            apply: apply_dessert_type,
        },
        AnswerHandler {
            field: "health.injuries",
            question_ids: &[ids::INJURIES],
            apply: apply_injuries,
        },
        AnswerHandler {
            field: "health.conditions",
            question_ids: &[ids::CONDITIONS],
            apply: apply_conditions,
        },
        AnswerHandler {
            field: "goals",
            question_ids: &[ids::NUTRITION_GOALS],
            apply: apply_goals,
        },
    ]
}

fn apply_lean_mass(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    if let Some(value) = parsers::first_number(answer) {
        profile.body.lean_mass_kg = Some(value);
    }
}

fn apply_training_load(profile: &mut Profile, answers: &[&str], keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.training.load = if KeywordTables::matches_any(answer, &keywords.heavy_load) {
        TrainingLoad::Heavy
    } else if KeywordTables::matches_any(answer, &keywords.light_load) {
        TrainingLoad::Light
    } else if KeywordTables::matches_any(answer, &keywords.variable_load) {
        TrainingLoad::Variable
    } else {
        TrainingLoad::Moderate
    };
}

fn apply_supplements(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.health.supplements = parsers::split_list(answer)
        .into_iter()
        .map(Supplement::new)
        .collect();
}

fn apply_high_fuel_days(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    let tokens: Vec<String> = parsers::split_list(answer)
        .into_iter()
        .map(|token| token.to_lowercase())
        .collect();
    profile.training.high_fuel_days = Weekday::ALL
        .into_iter()
        .filter(|day| tokens.iter().any(|token| token == day.name()))
        .collect();
}

fn apply_performance_focus(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    let lowered = answer.to_lowercase();
    profile.training.performance_goals = PerformanceGoal::ALL
        .into_iter()
        .filter(|goal| lowered.contains(goal.keyword()))
        .collect();
}

fn apply_recovery_practices(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.training.recovery_practices = parsers::split_list(answer);
}

fn apply_body_basics(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    let lowered = answer.to_lowercase();

    if let Some((value, unit)) = parsers::value_before_unit(&lowered, parsers::WEIGHT_UNITS) {
        profile.body.weight_kg = Some(parsers::to_kilograms(value, unit));
    }
    if let Some((value, unit)) = parsers::value_before_unit(&lowered, parsers::HEIGHT_UNITS) {
        profile.body.height_cm = Some(parsers::to_centimeters(value, unit));
    }
    if let Some((value, _)) = parsers::value_before_unit(&lowered, parsers::BODY_FAT_UNITS) {
        profile.body.body_fat_pct = Some(value);
    }
}

fn apply_dessert_cadence(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.dessert_cadence = Some((*answer).to_owned());
}

fn apply_meal_count(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    if let Some(count) = parsers::extract_digits(answer) {
        profile.meal_cadence = Some(count);
    }
}

fn apply_taste_preferences(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    profile.taste_preferences = union_lists(answers);
}

fn apply_avoidances(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    profile.avoidances = union_lists(answers);
}

fn apply_grocery_staples(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.grocery_staples = parsers::split_list(answer);
}

fn apply_dessert_type(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    // Replace any previous dessert entry so re-ingestion stays idempotent.
    profile
        .grocery_staples
        .retain(|staple| !staple.starts_with(DESSERT_PREFIX));
    profile.grocery_staples.push(format!("{DESSERT_PREFIX}{answer}"));
}

fn apply_injuries(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.health.injuries = parsers::split_list(answer);
}

fn apply_conditions(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    profile.health.conditions = parsers::split_list(answer);
}

fn apply_goals(profile: &mut Profile, answers: &[&str], _keywords: &KeywordTables) {
    let Some(answer) = answers.first() else { return };
    let lowered = answer.to_lowercase();
    profile.goals = NutritionGoal::ALL
        .into_iter()
        .filter(|goal| lowered.contains(goal.keyword()))
        .collect();
}

fn union_lists(answers: &[&str]) -> Vec<String> {
    answers
        .iter()
        .flat_map(|answer| parsers::split_list(answer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BiologicalSex;

    fn router() -> AnswerRouter {
        AnswerRouter::new(&CoachConfig::default()).unwrap()
    }

    fn answers(pairs: &[(u32, &str)]) -> RawAnswers {
        pairs.iter().map(|(id, text)| (*id, (*text).to_owned())).collect()
    }

    #[test]
    fn test_body_basics_unit_conversion() {
        let profile = router().apply(
            Profile::default(),
            &answers(&[(ids::BODY_BASICS, "I'm 176 lb, 5 ft, about 18 percent")]),
        );
        assert!((profile.body.weight_kg.unwrap() - 79.832_192).abs() < 1e-6);
        assert!((profile.body.height_cm.unwrap() - 152.4).abs() < 1e-9);
        assert!((profile.body.body_fat_pct.unwrap() - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metric_units_pass_through() {
        let profile = router().apply(
            Profile::default(),
            &answers(&[(ids::BODY_BASICS, "80 kg and 180 cm")]),
        );
        assert!((profile.body.weight_kg.unwrap() - 80.0).abs() < f64::EPSILON);
        assert!((profile.body.height_cm.unwrap() - 180.0).abs() < f64::EPSILON);
        assert_eq!(profile.body.biological_sex, None::<BiologicalSex>);
    }

    #[test]
    fn test_training_load_keywords() {
        let heavy = router().apply(
            Profile::default(),
            &answers(&[(ids::TRAINING_LOAD, "Pretty HEAVY block right now")]),
        );
        assert_eq!(heavy.training.load, TrainingLoad::Heavy);

        let fallback = router().apply(
            Profile::default(),
            &answers(&[(ids::TRAINING_LOAD, "steady, nothing wild")]),
        );
        assert_eq!(fallback.training.load, TrainingLoad::Moderate);
    }

    #[test]
    fn test_taste_union_across_ids() {
        let profile = router().apply(
            Profile::default(),
            &answers(&[
                (ids::FAVORITE_FOODS, "tacos, eggs"),
                (ids::FAVORITE_CARBS, "rice"),
                (ids::FAVORITE_PRODUCE, "berries, spinach"),
            ]),
        );
        assert_eq!(profile.taste_preferences, vec!["tacos", "eggs", "rice", "berries", "spinach"]);
    }

    #[test]
    fn test_staples_replace_runs_before_dessert_append() {
        let profile = router().apply(
            Profile::default(),
            &answers(&[
                (ids::DESSERT_TYPE, "dark chocolate"),
                (ids::GROCERY_STAPLES, "oats, rice"),
            ]),
        );
        assert_eq!(profile.grocery_staples, vec!["oats", "rice", "Dessert: dark chocolate"]);
    }

    #[test]
    fn test_ingestion_is_idempotent() {
        let input = answers(&[
            (ids::LEAN_MASS, "62.5 kg lean"),
            (ids::TRAINING_LOAD, "variable weeks"),
            (ids::DESSERT_TYPE, "pastry"),
            (ids::MEAL_COUNT, "3 + snacks"),
            (ids::HIGH_FUEL_DAYS, "Monday, saturday"),
        ]);
        let once = router().apply(Profile::default(), &input);
        let twice = router().apply(once.clone(), &input);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_blank_and_malformed_answers_leave_fields_unchanged() {
        let mut profile = Profile::default();
        profile.meal_cadence = Some(4);
        profile.body.lean_mass_kg = Some(60.0);

        let updated = router().apply(
            profile,
            &answers(&[(ids::MEAL_COUNT, "it depends"), (ids::LEAN_MASS, "   ")]),
        );
        assert_eq!(updated.meal_cadence, Some(4));
        assert_eq!(updated.body.lean_mass_kg, Some(60.0));
    }

    #[test]
    fn test_high_fuel_days_keep_canonical_names_only() {
        let profile = router().apply(
            Profile::default(),
            &answers(&[(ids::HIGH_FUEL_DAYS, "monday, Tues, FRIDAY, someday")]),
        );
        assert_eq!(profile.training.high_fuel_days, vec![Weekday::Monday, Weekday::Friday]);
    }

    #[test]
    fn test_goal_and_performance_substring_matching() {
        let profile = router().apply(
            Profile::default(),
            &answers(&[
                (ids::NUTRITION_GOALS, "fat loss and all-day energy"),
                (ids::PERFORMANCE_FOCUS, "endurance plus some strength"),
            ]),
        );
        assert_eq!(profile.goals, vec![NutritionGoal::Loss, NutritionGoal::Energy]);
        assert_eq!(
            profile.training.performance_goals,
            vec![PerformanceGoal::Endurance, PerformanceGoal::Strength]
        );
    }

    #[test]
    fn test_router_rejects_duplicate_ids() {
        let mut router = router();
        router.handlers.push(AnswerHandler {
            field: "duplicate",
            question_ids: &[ids::LEAN_MASS],
            apply: apply_lean_mass,
        });
        assert!(router.check_collisions().is_err());
    }
}
