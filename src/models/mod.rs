// ABOUTME: Core data model for profiles, plans, logs, and groceries
// ABOUTME: Serde-serializable value types shared by every engine component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data model
//!
//! All entities are immutable value records passed between pure functions;
//! observation by a presentation layer happens after storage commit, never
//! through shared mutable state.

mod grocery;
mod log;
mod macros;
mod profile;

pub use grocery::{GroceryItem, GroceryList, GrocerySection, StorageCategory};
pub use log::{Adjustment, DailyLog, DayContext, MealEntry};
pub use macros::{DailyPlan, MacroTemplate, Macros, Meal, Plan, TemplateKind};
pub use profile::{
    BiologicalSex, BodyComposition, HealthProfile, NutritionGoal, PerformanceGoal, Profile,
    Supplement, TrainingLoad, TrainingProfile, Weekday,
};

/// Raw questionnaire answers: question-id to free-text answer
///
/// Transient input to ingestion; never persisted by the core.
pub type RawAnswers = std::collections::HashMap<u32, String>;
