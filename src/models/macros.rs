// ABOUTME: Macro targets, day-type templates, sample days, and the derived plan
// ABOUTME: All macro fields are integer-rounded at the point of computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::GroceryList;

/// A calorie/protein/carb/fat target or total, in kcal and grams
///
/// Fields are non-negative and integer-rounded wherever the engine computes
/// them; calories stay within rounding tolerance of 4P + 4C + 9F.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Macros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbohydrates: f64,
    /// Fat (grams)
    pub fat: f64,
}

impl Macros {
    /// Create a macro set from explicit values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbohydrates: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbohydrates,
            fat,
        }
    }

    /// Scale every field by `ratio`, rounding each to the nearest integer
    #[must_use]
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            calories: (self.calories * ratio).round(),
            protein: (self.protein * ratio).round(),
            carbohydrates: (self.carbohydrates * ratio).round(),
            fat: (self.fat * ratio).round(),
        }
    }

    /// Field-wise sum
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            fat: self.fat + other.fat,
        }
    }
}

/// Day type a macro template applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Standard training day
    Training,
    /// Rest or recovery day
    Rest,
    /// High-output day (variable load only)
    High,
    /// Low-output day (variable load only)
    Low,
}

/// A named macro target for one day type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroTemplate {
    /// Unique identifier
    pub id: Uuid,
    /// Display name ("Training Day", ...)
    pub name: String,
    /// Day type this template applies to
    pub kind: TemplateKind,
    /// Daily macro targets
    pub macros: Macros,
    /// Free-text rationale notes
    pub notes: Vec<String>,
}

impl MacroTemplate {
    /// Create a template with a fresh id
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: TemplateKind,
        macros: Macros,
        notes: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            macros,
            notes,
        }
    }
}

/// One meal within a sample day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Unique identifier
    pub id: Uuid,
    /// Meal label ("Breakfast", ...)
    pub name: String,
    /// Suggested items, derived from profile preferences
    pub items: Vec<String>,
    /// Macro share of the owning template
    pub macros: Macros,
}

impl Meal {
    /// Create a meal with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<String>, macros: Macros) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items,
            macros,
        }
    }
}

/// A sample day: a template plus four meals at fixed macro fractions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Display label (matches the template name)
    pub label: String,
    /// The day-type template this sample day illustrates
    pub template: MacroTemplate,
    /// Breakfast, lunch, dinner, snacks
    pub meals: Vec<Meal>,
}

/// The derived plan: templates, sample days, and a grocery list
///
/// Regenerated wholesale whenever ingestion completes or a caller requests
/// it; superseded plans are not retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last regeneration timestamp
    pub updated_at: DateTime<Utc>,
    /// 2-4 day-type templates (training + rest always; high/low when variable)
    pub templates: Vec<MacroTemplate>,
    /// One sample day per template
    pub daily_plans: Vec<DailyPlan>,
    /// Derived shopping list
    pub grocery_list: GroceryList,
}
