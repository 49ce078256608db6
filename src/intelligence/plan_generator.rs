// ABOUTME: Day-type template and sample-day generation plus plan assembly
// ABOUTME: Selects the governing template for a calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Template & Day Generator
//!
//! Builds the full plan for a profile: day-type macro templates, a sample day
//! per template, and the grocery list. Training and Rest templates are always
//! produced; High/Low Output templates appear only for variable training
//! load. Every template shares the profile's protein target and carb/fat
//! split, differing only in the total-calorie multiplier.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use super::{calculator, grocery};
use crate::config::CoachConfig;
use crate::errors::CoachResult;
use crate::models::{
    DailyPlan, MacroTemplate, Meal, Plan, Profile, TemplateKind, TrainingLoad, Weekday,
};

/// Meal labels in sample-day order
const MEAL_LABELS: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snacks"];
/// Index of the snack slot, the only meal that carries a treat item
const SNACK_SLOT: usize = 3;
/// Placeholder when a profile has no preferences to draw items from
const FALLBACK_MEAL_ITEM: &str = "Coach-suggested option";

/// Generates plans from profiles; pure apart from the supplied timestamp
pub struct PlanGenerator {
    config: CoachConfig,
}

impl PlanGenerator {
    /// Create a generator with validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` when the configuration is invalid.
    pub fn new(config: CoachConfig) -> CoachResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Regenerate the whole plan for a profile
    ///
    /// Never fails: the calculator has defined fallbacks for every missing
    /// numeric field.
    #[must_use]
    pub fn generate_plan(&self, profile: &Profile, now: DateTime<Utc>) -> Plan {
        let adjusted_calories = calculator::adjusted_daily_energy(
            &profile.body,
            profile.training.load,
            &profile.goals,
            &self.config,
        );
        let templates = self.build_templates(profile, adjusted_calories);
        let daily_plans = self.build_sample_days(profile, &templates);
        let grocery_list = grocery::build_grocery_list(profile, &self.config);

        info!(
            templates = templates.len(),
            load = ?profile.training.load,
            "plan regenerated"
        );

        Plan {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            templates,
            daily_plans,
            grocery_list,
        }
    }

    fn build_templates(&self, profile: &Profile, adjusted_calories: f64) -> Vec<MacroTemplate> {
        let protein_g = calculator::protein_target_g(
            &profile.body,
            &profile.health.conditions,
            &self.config.protein,
            &self.config.keywords,
            self.config.resting_energy.fallback_weight_kg,
        );
        let split = calculator::macro_split(&profile.training, &self.config.macro_split);
        let multipliers = &self.config.template_multipliers;

        let template = |name: &str, kind: TemplateKind, multiplier: f64, notes: Vec<String>| {
            let macros = calculator::macros_from_budget(
                adjusted_calories * multiplier,
                protein_g,
                split,
                self.config.macro_split.post_protein_floor,
            );
            MacroTemplate::new(name, kind, macros, notes)
        };

        let mut context_notes: Vec<String> = Vec::new();
        if profile.training.load == TrainingLoad::Heavy {
            context_notes.push("Higher carbs to cover heavy training days.".to_owned());
        }
        if profile.training.recovery_practices.iter().any(|practice| {
            crate::config::KeywordTables::matches_any(practice, &self.config.keywords.sleep_recovery)
        }) {
            context_notes.push(
                "Encourage evening protein + magnesium-friendly choices for recovery.".to_owned(),
            );
        }

        let mut training_notes = context_notes.clone();
        training_notes.push("Add pre/intra carbs around key sessions.".to_owned());

        let mut templates = vec![
            template(
                "Training Day",
                TemplateKind::Training,
                multipliers.training,
                training_notes,
            ),
            template(
                "Rest Day",
                TemplateKind::Rest,
                multipliers.rest,
                vec!["Dial carbs down, keep protein steady.".to_owned()],
            ),
        ];

        if profile.training.load == TrainingLoad::Variable {
            templates.push(template(
                "High Output",
                TemplateKind::High,
                multipliers.high,
                vec!["Use on long or double-session days.".to_owned()],
            ));
            templates.push(template(
                "Low Output",
                TemplateKind::Low,
                multipliers.low,
                vec!["Use for active recovery or off days.".to_owned()],
            ));
        }

        templates
    }

    fn build_sample_days(&self, profile: &Profile, templates: &[MacroTemplate]) -> Vec<DailyPlan> {
        templates
            .iter()
            .map(|template| DailyPlan {
                id: Uuid::new_v4(),
                label: template.name.clone(),
                template: template.clone(),
                meals: self.build_meals(profile, template),
            })
            .collect()
    }

    fn build_meals(&self, profile: &Profile, template: &MacroTemplate) -> Vec<Meal> {
        let fractions = self.config.meal_split.fractions();

        MEAL_LABELS
            .iter()
            .enumerate()
            .map(|(slot, label)| {
                let meal_macros = template.macros.scaled(fractions[slot]);

                let mut items: Vec<String> = Vec::new();
                if let Some(favorite) = profile.taste_preferences.first() {
                    items.push(favorite.clone());
                }
                if let Some(staple) = profile.grocery_staples.first() {
                    items.push(staple.clone());
                }
                if slot == SNACK_SLOT {
                    if let Some(dessert) = &profile.dessert_cadence {
                        items.push(format!("Treat: {dessert}"));
                    }
                }
                if items.is_empty() {
                    items.push(FALLBACK_MEAL_ITEM.to_owned());
                }

                Meal::new(*label, items, meal_macros)
            })
            .collect()
    }

    /// The template governing a calendar date
    ///
    /// Heavy and moderate loads point at the training template, light at
    /// rest. Variable load picks High Output on high-fuel weekdays and Low
    /// Output otherwise, falling back through training/rest to the first
    /// template when a kind is missing.
    #[must_use]
    pub fn select_template<'a>(
        &self,
        plan: &'a Plan,
        profile: &Profile,
        date: NaiveDate,
    ) -> Option<&'a MacroTemplate> {
        let by_kind =
            |kind: TemplateKind| plan.templates.iter().find(|template| template.kind == kind);

        match profile.training.load {
            TrainingLoad::Heavy | TrainingLoad::Moderate => {
                by_kind(TemplateKind::Training).or_else(|| plan.templates.first())
            }
            TrainingLoad::Light => by_kind(TemplateKind::Rest).or_else(|| plan.templates.first()),
            TrainingLoad::Variable => {
                let weekday = Weekday::from_date(date);
                if profile.training.high_fuel_days.contains(&weekday) {
                    by_kind(TemplateKind::High).or_else(|| by_kind(TemplateKind::Training))
                } else {
                    by_kind(TemplateKind::Low).or_else(|| by_kind(TemplateKind::Rest))
                }
            }
        }
    }
}
