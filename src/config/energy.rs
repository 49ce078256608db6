// ABOUTME: Energy expenditure configuration for resting energy and activity scaling
// ABOUTME: Mifflin-St Jeor coefficients, load factors, and goal multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy expenditure configuration
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, CoachResult};
use crate::models::{NutritionGoal, TrainingLoad};

/// Resting-energy (Mifflin-St Jeor) calculation configuration
///
/// Reference: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestingEnergyConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
    /// Constant for other/unspecified sex (-78)
    ///
    /// Literal midpoint of the male and female constants; a documented
    /// placeholder pending a published formula source, not a derived value.
    pub unspecified_constant: f64,
    /// Fallback weight (kg) when body composition is incomplete
    pub fallback_weight_kg: f64,
    /// Fallback height (cm) when body composition is incomplete
    pub fallback_height_cm: f64,
    /// Fallback age (years) when body composition is incomplete
    pub fallback_age_years: u32,
}

impl Default for RestingEnergyConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
            unspecified_constant: -78.0,
            fallback_weight_kg: 75.0,
            fallback_height_cm: 175.0,
            fallback_age_years: 32,
        }
    }
}

/// Activity factor multipliers keyed on training load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Light load: 1.30
    pub light: f64,
    /// Moderate load: 1.45
    pub moderate: f64,
    /// Heavy load: 1.60
    pub heavy: f64,
    /// Variable load: 1.50
    pub variable: f64,
}

impl ActivityFactorsConfig {
    /// Activity factor for a training load
    #[must_use]
    pub const fn factor(&self, load: TrainingLoad) -> f64 {
        match load {
            TrainingLoad::Light => self.light,
            TrainingLoad::Moderate => self.moderate,
            TrainingLoad::Heavy => self.heavy,
            TrainingLoad::Variable => self.variable,
        }
    }

    /// Validate that every factor is positive
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` when a factor is zero or negative.
    pub fn validate(&self) -> CoachResult<()> {
        let factors = [
            ("light", self.light),
            ("moderate", self.moderate),
            ("heavy", self.heavy),
            ("variable", self.variable),
        ];
        for (name, value) in factors {
            if value <= 0.0 {
                return Err(AppError::config(format!(
                    "{name} activity factor must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            light: 1.30,
            moderate: 1.45,
            heavy: 1.60,
            variable: 1.50,
        }
    }
}

/// Calorie multiplier per nutrition goal; multiple goals are averaged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalMultipliersConfig {
    /// Fat loss: 0.85
    pub loss: f64,
    /// Muscle gain: 1.12
    pub gain: f64,
    /// Performance: 1.05
    pub performance: f64,
    /// Maintenance, energy, convenience, other: 1.0
    pub neutral: f64,
}

impl GoalMultipliersConfig {
    /// Multiplier for one goal
    #[must_use]
    pub const fn multiplier(&self, goal: NutritionGoal) -> f64 {
        match goal {
            NutritionGoal::Loss => self.loss,
            NutritionGoal::Gain => self.gain,
            NutritionGoal::Performance => self.performance,
            NutritionGoal::Maintenance
            | NutritionGoal::Energy
            | NutritionGoal::Convenience
            | NutritionGoal::Other => self.neutral,
        }
    }
}

impl Default for GoalMultipliersConfig {
    fn default() -> Self {
        Self {
            loss: 0.85,
            gain: 1.12,
            performance: 1.05,
            neutral: 1.0,
        }
    }
}
