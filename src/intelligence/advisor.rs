// ABOUTME: Ordered rule chain comparing consumed vs target macros for a day
// ABOUTME: First matching rule wins; absent macros skip every rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adjustment Advisor
//!
//! A pure function of a [`DayContext`]: evaluates an ordered rule chain and
//! returns zero or one adjustment. Rules 1-3 require both target and
//! consumed macros; when either is absent the chain yields nothing. This is
//! the reference implementation of the estimator collaborator's
//! `suggest_adjustments` contract; a richer implementation may replace it
//! without changing that contract.

use tracing::debug;

use crate::config::AdvisorThresholds;
use crate::models::{Adjustment, DayContext, Macros, TrainingLoad};

/// One entry in the ordered rule chain
struct AdvisorRule {
    /// Rule name for logging and audit
    name: &'static str,
    /// Returns an adjustment when the rule fires
    check: fn(&DayContext, &Macros, &Macros, &AdvisorThresholds) -> Option<Adjustment>,
}

/// Ordered rule chain over a day's consumed vs target macros
pub struct AdjustmentAdvisor {
    thresholds: AdvisorThresholds,
    rules: Vec<AdvisorRule>,
}

impl AdjustmentAdvisor {
    /// Create an advisor with the given thresholds
    #[must_use]
    pub fn new(thresholds: AdvisorThresholds) -> Self {
        Self {
            thresholds,
            rules: vec![
                AdvisorRule {
                    name: "over_plan",
                    check: over_plan,
                },
                AdvisorRule {
                    name: "fuel_low",
                    check: fuel_low,
                },
                AdvisorRule {
                    name: "heavy_day_carb_shortfall",
                    check: heavy_day_carb_shortfall,
                },
            ],
        }
    }

    /// Evaluate the rule chain; first matching rule wins
    #[must_use]
    pub fn suggest(&self, context: &DayContext) -> Vec<Adjustment> {
        let (Some(target), Some(consumed)) = (&context.target_macros, &context.consumed_macros)
        else {
            return Vec::new();
        };

        for rule in &self.rules {
            if let Some(adjustment) = (rule.check)(context, target, consumed, &self.thresholds) {
                debug!(rule = rule.name, "adjustment rule fired");
                return vec![adjustment];
            }
        }
        Vec::new()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn over_plan(
    _context: &DayContext,
    target: &Macros,
    consumed: &Macros,
    thresholds: &AdvisorThresholds,
) -> Option<Adjustment> {
    let delta = consumed.calories - target.calories;
    if delta > thresholds.energy_tolerance_kcal {
        return Some(Adjustment::new(
            format!(
                "You're {} kcal over plan. Let's ease dinner carbs and add a walk.",
                delta as i64
            ),
            vec![
                "Swap dinner starch for greens".to_owned(),
                "Add 10-minute walk post-meal".to_owned(),
            ],
        ));
    }
    None
}

fn fuel_low(
    _context: &DayContext,
    target: &Macros,
    consumed: &Macros,
    thresholds: &AdvisorThresholds,
) -> Option<Adjustment> {
    if target.calories - consumed.calories > thresholds.energy_tolerance_kcal {
        return Some(Adjustment::new(
            "Fuel is a bit low today. Add a light carb + protein snack.",
            vec![
                "Add yogurt with berries".to_owned(),
                "Sip electrolytes if training felt heavy".to_owned(),
            ],
        ));
    }
    None
}

fn heavy_day_carb_shortfall(
    context: &DayContext,
    target: &Macros,
    consumed: &Macros,
    thresholds: &AdvisorThresholds,
) -> Option<Adjustment> {
    if context.training_load == TrainingLoad::Heavy
        && consumed.carbohydrates < target.carbohydrates * thresholds.carb_shortfall_ratio
    {
        return Some(Adjustment::new(
            "Heavy day detected but you're light on carbs. Let's bump pre-training fuel.",
            vec![
                "Add banana + honey before next session".to_owned(),
                "Include electrolyte drink during training".to_owned(),
            ],
        ));
    }
    None
}
