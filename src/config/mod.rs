// ABOUTME: Configuration for the plan derivation pipeline
// ABOUTME: Aggregates energy, target, and advisor constant tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan derivation configuration
//!
//! Every constant the engine uses lives here as a documented config struct
//! with a `Default` impl, so thresholds and keyword tables can be tuned
//! without touching call sites.

mod advisor;
mod energy;
mod targets;

pub use advisor::{AdvisorThresholds, KeywordTables};
pub use energy::{ActivityFactorsConfig, GoalMultipliersConfig, RestingEnergyConfig};
pub use targets::{
    MacroSplitConfig, MealSplitConfig, ProteinConfig, SplitRatios, TemplateMultipliersConfig,
};

use crate::errors::CoachResult;

/// Complete engine configuration with sensible defaults
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CoachConfig {
    /// Resting-energy (Mifflin-St Jeor) settings
    pub resting_energy: RestingEnergyConfig,
    /// Activity factor per training load
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie multiplier per nutrition goal
    pub goal_multipliers: GoalMultipliersConfig,
    /// Protein target bounds
    pub protein: ProteinConfig,
    /// Carb/fat split selection
    pub macro_split: MacroSplitConfig,
    /// Per-day-type calorie multipliers
    pub template_multipliers: TemplateMultipliersConfig,
    /// Meal macro fractions for sample days
    pub meal_split: MealSplitConfig,
    /// Adjustment advisor thresholds
    pub advisor: AdvisorThresholds,
    /// Keyword tables for free-text classification
    pub keywords: KeywordTables,
}

impl CoachConfig {
    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` naming the first invalid setting.
    pub fn validate(&self) -> CoachResult<()> {
        self.activity_factors.validate()?;
        self.macro_split.validate()?;
        self.meal_split.validate()?;
        self.advisor.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CoachConfig::default().validate().is_ok());
    }
}
