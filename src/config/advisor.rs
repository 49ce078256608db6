// ABOUTME: Advisor thresholds and free-text classification keyword tables
// ABOUTME: Keeps keyword matching explicit and tunable, out of call sites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, CoachResult};

/// Thresholds for the adjustment rule chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorThresholds {
    /// Energy surplus/deficit that triggers a suggestion: 150 kcal
    pub energy_tolerance_kcal: f64,
    /// Consumed-carb fraction of target below which heavy days flag: 0.8
    pub carb_shortfall_ratio: f64,
}

impl AdvisorThresholds {
    /// Validate the threshold ranges
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` when the tolerance is negative or the
    /// shortfall ratio is outside 0.0-1.0.
    pub fn validate(&self) -> CoachResult<()> {
        if self.energy_tolerance_kcal < 0.0 {
            return Err(AppError::config(format!(
                "energy_tolerance_kcal must be non-negative, got {}",
                self.energy_tolerance_kcal
            )));
        }
        if !(0.0..=1.0).contains(&self.carb_shortfall_ratio) {
            return Err(AppError::config(format!(
                "carb_shortfall_ratio must be between 0.0 and 1.0, got {}",
                self.carb_shortfall_ratio
            )));
        }
        Ok(())
    }
}

impl Default for AdvisorThresholds {
    fn default() -> Self {
        Self {
            energy_tolerance_kcal: 150.0,
            carb_shortfall_ratio: 0.8,
        }
    }
}

/// Keyword tables for classifying free-form profile text
///
/// Matching is case-insensitive substring containment everywhere these tables
/// are consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTables {
    /// Training-load answer keywords mapping to heavy
    pub heavy_load: Vec<String>,
    /// Training-load answer keywords mapping to light
    pub light_load: Vec<String>,
    /// Training-load answer keywords mapping to variable
    pub variable_load: Vec<String>,
    /// Condition keywords that lower the protein floor
    pub renal_conditions: Vec<String>,
    /// Recovery-practice keywords that add the sleep note to templates
    pub sleep_recovery: Vec<String>,
    /// Recovery-practice keywords that raise the day's recovery flag
    pub recovery_flag: Vec<String>,
    /// Taste-preference keywords that pick the grocery protein item
    pub protein_features: Vec<String>,
}

impl KeywordTables {
    /// Whether `haystack` contains any keyword, case-insensitively
    #[must_use]
    pub fn matches_any(haystack: &str, keywords: &[String]) -> bool {
        let lowered = haystack.to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword.as_str()))
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            heavy_load: vec!["heavy".into()],
            light_load: vec!["light".into()],
            variable_load: vec!["variable".into()],
            renal_conditions: vec!["kidney".into(), "renal".into()],
            sleep_recovery: vec!["sleep".into()],
            recovery_flag: vec!["sauna".into(), "sleep".into(), "hrv".into()],
            protein_features: vec!["chicken".into(), "salmon".into()],
        }
    }
}
