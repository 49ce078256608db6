// ABOUTME: Energy and macro arithmetic: resting energy, TDEE, protein, splits
// ABOUTME: Total over any profile thanks to documented fallback values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy & Macro Calculator
//!
//! Implements the energy-expenditure and macro-target arithmetic. All
//! functions are total: missing body-composition fields fall back to the
//! documented defaults in [`RestingEnergyConfig`], so plan generation never
//! fails for a structurally valid profile.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, CoachConfig, GoalMultipliersConfig, KeywordTables, MacroSplitConfig,
    ProteinConfig, RestingEnergyConfig, SplitRatios,
};
use crate::models::{
    BiologicalSex, BodyComposition, Macros, NutritionGoal, PerformanceGoal, TrainingLoad,
    TrainingProfile,
};

/// Calculate resting energy using the Mifflin-St Jeor equation (1990)
///
/// Formula: `10 x weight_kg + 6.25 x height_cm - 5 x age + sex_term`
/// - Male: +5
/// - Female: -161
/// - Other/unspecified: -78 (documented midpoint constant)
///
/// Missing fields use the configured fallbacks (75 kg / 175 cm / 32 years).
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn estimate_resting_energy(body: &BodyComposition, config: &RestingEnergyConfig) -> f64 {
    let weight_kg = body.weight_kg.unwrap_or(config.fallback_weight_kg);
    let height_cm = body.height_cm.unwrap_or(config.fallback_height_cm);
    let age_years = body.age_years.unwrap_or(config.fallback_age_years);

    let sex_term = match body.biological_sex {
        Some(BiologicalSex::Male) => config.male_constant,
        Some(BiologicalSex::Female) => config.female_constant,
        Some(BiologicalSex::Other) | None => config.unspecified_constant,
    };

    config.weight_coef * weight_kg
        + config.height_coef * height_cm
        + config.age_coef * f64::from(age_years)
        + sex_term
}

/// Scale resting energy by the activity factor for a training load
#[must_use]
pub fn maintenance_energy(resting: f64, load: TrainingLoad, config: &ActivityFactorsConfig) -> f64 {
    resting * config.factor(load)
}

/// Apply the average of the goals' calorie multipliers
///
/// With no goals, maintenance energy is returned unchanged.
#[must_use]
pub fn goal_adjusted_energy(
    maintenance: f64,
    goals: &[NutritionGoal],
    config: &GoalMultipliersConfig,
) -> f64 {
    if goals.is_empty() {
        return maintenance;
    }
    let sum: f64 = goals.iter().map(|goal| config.multiplier(*goal)).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = sum / goals.len() as f64;
    maintenance * average
}

/// Daily protein target in grams
///
/// Lower bound is 1.6 g/kg, reduced to 1.4 g/kg when any reported condition
/// mentions kidney or renal issues; upper bound is 2.2 g/kg. The target never
/// drops below the lower-bound ratio applied to a 50 kg reference weight.
#[must_use]
pub fn protein_target_g(
    body: &BodyComposition,
    conditions: &[String],
    config: &ProteinConfig,
    keywords: &KeywordTables,
    fallback_weight_kg: f64,
) -> f64 {
    let weight_kg = body.weight_kg.unwrap_or(fallback_weight_kg);

    let lower_ratio = if conditions
        .iter()
        .any(|condition| KeywordTables::matches_any(condition, &keywords.renal_conditions))
    {
        config.renal_g_per_kg
    } else {
        config.base_g_per_kg
    };

    let base = (lower_ratio * weight_kg).max(lower_ratio * config.floor_reference_kg);
    base.clamp(lower_ratio * weight_kg, config.max_g_per_kg * weight_kg)
}

/// Select the carb/fat share of post-protein calories
///
/// Heavy load or an endurance focus favors carbohydrate; a strength focus
/// takes the next split; light load leans toward fat; everything else gets
/// the balanced default.
#[must_use]
pub fn macro_split(training: &TrainingProfile, config: &MacroSplitConfig) -> SplitRatios {
    let endurance_focus = training
        .performance_goals
        .contains(&PerformanceGoal::Endurance);

    if training.load == TrainingLoad::Heavy || endurance_focus {
        return config.high_carb;
    }
    if training.performance_goals.contains(&PerformanceGoal::Strength) {
        return config.strength;
    }
    if training.load == TrainingLoad::Light {
        return config.light;
    }
    config.balanced
}

/// Derive rounded macro targets from a calorie budget and protein grams
///
/// Remaining calories after protein are floored at `post_protein_floor` of
/// the budget so carb and fat allocations survive a protein-dominated budget.
/// Each output field is rounded to the nearest integer independently; there
/// is no re-normalization after rounding.
#[must_use]
pub fn macros_from_budget(
    calories: f64,
    protein_g: f64,
    split: SplitRatios,
    post_protein_floor: f64,
) -> Macros {
    let protein_calories = protein_g * 4.0;
    let remaining = (calories - protein_calories).max(calories * post_protein_floor);
    let carb_calories = remaining * split.carb;
    let fat_calories = remaining * split.fat;

    Macros {
        calories: calories.round(),
        protein: protein_g.round(),
        carbohydrates: (carb_calories / 4.0).round(),
        fat: (fat_calories / 9.0).round(),
    }
}

/// Goal-adjusted daily energy for a profile: resting energy, activity
/// scaling, then goal multipliers
#[must_use]
pub fn adjusted_daily_energy(
    body: &BodyComposition,
    load: TrainingLoad,
    goals: &[NutritionGoal],
    config: &CoachConfig,
) -> f64 {
    let resting = estimate_resting_energy(body, &config.resting_energy);
    let maintenance = maintenance_energy(resting, load, &config.activity_factors);
    goal_adjusted_energy(maintenance, goals, &config.goal_multipliers)
}
