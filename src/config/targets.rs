// ABOUTME: Macro target configuration for protein bounds and calorie splits
// ABOUTME: Carb/fat ratios, day-type multipliers, and meal fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, CoachResult};

/// Protein target bounds in grams per kilogram bodyweight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Standard lower bound: 1.6 g/kg
    pub base_g_per_kg: f64,
    /// Lower bound when kidney/renal conditions are reported: 1.4 g/kg
    pub renal_g_per_kg: f64,
    /// Upper bound: 2.2 g/kg
    pub max_g_per_kg: f64,
    /// Reference weight (kg) for the absolute floor: lower bound x 50 kg
    pub floor_reference_kg: f64,
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            base_g_per_kg: 1.6,
            renal_g_per_kg: 1.4,
            max_g_per_kg: 2.2,
            floor_reference_kg: 50.0,
        }
    }
}

/// A carb/fat share of post-protein calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitRatios {
    /// Carbohydrate share (0.0-1.0)
    pub carb: f64,
    /// Fat share (0.0-1.0)
    pub fat: f64,
}

impl SplitRatios {
    /// Create a split
    #[must_use]
    pub const fn new(carb: f64, fat: f64) -> Self {
        Self { carb, fat }
    }
}

/// Carb/fat split selection table, checked in declaration order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Heavy load or endurance focus: 55% carb / 25% fat
    pub high_carb: SplitRatios,
    /// Strength focus: 50% / 27%
    pub strength: SplitRatios,
    /// Light load: 45% / 30%
    pub light: SplitRatios,
    /// Everything else: 48% / 27%
    pub balanced: SplitRatios,
    /// Minimum share of the calorie budget left after protein: 0.4
    ///
    /// Protects carb and fat allocations when protein alone would exceed the
    /// budget.
    pub post_protein_floor: f64,
}

impl MacroSplitConfig {
    /// Validate that every split leaves room for protein and the floor is a ratio
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` when a split exceeds 100% of
    /// remaining calories or the floor is outside 0.0-1.0.
    pub fn validate(&self) -> CoachResult<()> {
        let splits = [
            ("high_carb", self.high_carb),
            ("strength", self.strength),
            ("light", self.light),
            ("balanced", self.balanced),
        ];
        for (name, split) in splits {
            if split.carb < 0.0 || split.fat < 0.0 || split.carb + split.fat > 1.0 {
                return Err(AppError::config(format!(
                    "{name} split must keep carb + fat within 0.0-1.0, got {} + {}",
                    split.carb, split.fat
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.post_protein_floor) {
            return Err(AppError::config(format!(
                "post_protein_floor must be between 0.0 and 1.0, got {}",
                self.post_protein_floor
            )));
        }
        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            high_carb: SplitRatios::new(0.55, 0.25),
            strength: SplitRatios::new(0.50, 0.27),
            light: SplitRatios::new(0.45, 0.30),
            balanced: SplitRatios::new(0.48, 0.27),
            post_protein_floor: 0.4,
        }
    }
}

/// Calorie multiplier per day-type template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMultipliersConfig {
    /// Training Day: 1.08
    pub training: f64,
    /// Rest Day: 0.92
    pub rest: f64,
    /// High Output (variable load): 1.15
    pub high: f64,
    /// Low Output (variable load): 0.85
    pub low: f64,
}

impl Default for TemplateMultipliersConfig {
    fn default() -> Self {
        Self {
            training: 1.08,
            rest: 0.92,
            high: 1.15,
            low: 0.85,
        }
    }
}

/// Macro fraction per meal slot in sample days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSplitConfig {
    /// Breakfast share: 0.25
    pub breakfast: f64,
    /// Lunch share: 0.30
    pub lunch: f64,
    /// Dinner share: 0.30
    pub dinner: f64,
    /// Snacks share: 0.15
    pub snacks: f64,
}

impl MealSplitConfig {
    /// Fractions in meal order (breakfast, lunch, dinner, snacks)
    #[must_use]
    pub const fn fractions(&self) -> [f64; 4] {
        [self.breakfast, self.lunch, self.dinner, self.snacks]
    }

    /// Validate that the fractions cover the whole day
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` when the fractions do not sum to 1.0.
    pub fn validate(&self) -> CoachResult<()> {
        let sum: f64 = self.fractions().iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(AppError::config(format!(
                "meal fractions must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for MealSplitConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.30,
            dinner: 0.30,
            snacks: 0.15,
        }
    }
}
