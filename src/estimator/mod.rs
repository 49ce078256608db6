// ABOUTME: Meal-text estimator contract plus a keyword-table mock
// ABOUTME: Parses free text into entries; adjustment suggestions ride the advisor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal-text estimator collaborator
//!
//! [`MealTextEstimator`] is the pluggable natural-language component that
//! turns "slice of pie at 9am" into a timestamped entry with an estimated
//! macro breakdown. [`MockEstimator`] implements it with a small keyword
//! table; its `suggest_adjustments` delegates to the rule-based
//! [`AdjustmentAdvisor`](crate::intelligence::AdjustmentAdvisor), which is a
//! complete implementation of that half of the contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;

use crate::config::CoachConfig;
use crate::errors::{AppError, CoachResult};
use crate::intelligence::AdjustmentAdvisor;
use crate::models::{Adjustment, DayContext, Macros, MealEntry};

/// Natural-language meal parsing and adjustment suggestion contract
#[async_trait]
pub trait MealTextEstimator: Send + Sync {
    /// Parse free text into a meal entry with an estimated macro breakdown
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ParseFailed` when the text cannot be understood;
    /// callers surface this as a retry prompt rather than crashing the
    /// pipeline.
    async fn parse_meal_entry(&self, text: &str) -> CoachResult<MealEntry>;

    /// Suggest adjustments for a day's consumed vs target macros
    ///
    /// # Errors
    ///
    /// Implementations backed by remote services may fail; the mock never
    /// does.
    async fn suggest_adjustments(&self, context: &DayContext) -> CoachResult<Vec<Adjustment>>;
}

/// Keyword-table estimator for local development and tests
pub struct MockEstimator {
    advisor: AdjustmentAdvisor,
    time_pattern: Regex,
}

impl MockEstimator {
    /// Build the mock from engine configuration
    ///
    /// # Errors
    ///
    /// Returns an internal error if the timestamp pattern fails to compile.
    pub fn new(config: &CoachConfig) -> CoachResult<Self> {
        let time_pattern = Regex::new(r"(\d{1,2})(?::(\d{2}))?\s?(am|pm)")
            .map_err(|error| AppError::internal(format!("time pattern: {error}")))?;
        Ok(Self {
            advisor: AdjustmentAdvisor::new(config.advisor.clone()),
            time_pattern,
        })
    }

    fn estimate_macros(lowered: &str) -> Macros {
        if lowered.contains("pie") {
            return Macros::new(350.0, 4.0, 45.0, 16.0);
        }
        if lowered.contains("shake") {
            return Macros::new(240.0, 30.0, 12.0, 6.0);
        }
        if lowered.contains("salad") {
            return Macros::new(180.0, 12.0, 14.0, 8.0);
        }
        Macros::new(250.0, 15.0, 20.0, 10.0)
    }

    fn extract_timestamp(&self, lowered: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let captures = self.time_pattern.captures(lowered)?;
        let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
        let minute: u32 = match captures.get(2) {
            Some(group) => group.as_str().parse().ok()?,
            None => 0,
        };
        if hour == 0 || hour > 12 || minute > 59 {
            return None;
        }

        let hour_24 = match captures.get(3)?.as_str() {
            "pm" if hour != 12 => hour + 12,
            "am" if hour == 12 => 0,
            _ => hour,
        };

        now.date_naive()
            .and_hms_opt(hour_24, minute, 0)
            .map(|naive| naive.and_utc())
    }
}

#[async_trait]
impl MealTextEstimator for MockEstimator {
    async fn parse_meal_entry(&self, text: &str) -> CoachResult<MealEntry> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::parse_failed("meal description was empty"));
        }

        let lowered = trimmed.to_lowercase();
        let now = Utc::now();
        let timestamp = self.extract_timestamp(&lowered, now).unwrap_or(now);

        Ok(MealEntry::new(
            timestamp,
            trimmed,
            Some(Self::estimate_macros(&lowered)),
        ))
    }

    async fn suggest_adjustments(&self, context: &DayContext) -> CoachResult<Vec<Adjustment>> {
        Ok(self.advisor.suggest(context))
    }
}
