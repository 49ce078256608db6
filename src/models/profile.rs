// ABOUTME: User profile model built up from questionnaire answers
// ABOUTME: Body composition, goals, health, training, and preference fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex for resting-energy calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    Male,
    Female,
    Other,
}

/// Self-reported nutrition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    Gain,
    Loss,
    Maintenance,
    Performance,
    Energy,
    Convenience,
    Other,
}

impl NutritionGoal {
    /// Every goal, in catalog order
    pub const ALL: [Self; 7] = [
        Self::Gain,
        Self::Loss,
        Self::Maintenance,
        Self::Performance,
        Self::Energy,
        Self::Convenience,
        Self::Other,
    ];

    /// Canonical keyword matched against free-text answers
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Loss => "loss",
            Self::Maintenance => "maintenance",
            Self::Performance => "performance",
            Self::Energy => "energy",
            Self::Convenience => "convenience",
            Self::Other => "other",
        }
    }
}

/// Performance focus for training periodization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceGoal {
    Endurance,
    Speed,
    Strength,
    Power,
    Other,
}

impl PerformanceGoal {
    /// Every performance goal, in catalog order
    pub const ALL: [Self; 5] = [
        Self::Endurance,
        Self::Speed,
        Self::Strength,
        Self::Power,
        Self::Other,
    ];

    /// Canonical keyword matched against free-text answers
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Endurance => "endurance",
            Self::Speed => "speed",
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Other => "other",
        }
    }
}

/// Current training load level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLoad {
    Light,
    #[default]
    Moderate,
    Heavy,
    Variable,
}

/// Day of week, serialized as the canonical lowercase name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Canonical lowercase name, as matched during ingestion
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Weekday of a calendar date
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// Body composition data, all fields optional until shared
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BodyComposition {
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Body fat percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    /// Lean mass in kilograms (from DEXA/InBody scans)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lean_mass_kg: Option<f64>,
    /// Biological sex for resting-energy calculation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_sex: Option<BiologicalSex>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
}

/// A supplement the user reports taking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplement {
    /// Unique identifier
    pub id: Uuid,
    /// Supplement name as reported
    pub name: String,
}

impl Supplement {
    /// Create a supplement with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Health context: supplements, injuries, and medical conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HealthProfile {
    pub supplements: Vec<Supplement>,
    pub injuries: Vec<String>,
    pub conditions: Vec<String>,
}

/// Training context: load, fuel days, performance goals, recovery practices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrainingProfile {
    /// Current training load level
    pub load: TrainingLoad,
    /// Weekdays that need extra fuel or recovery support
    pub high_fuel_days: Vec<Weekday>,
    /// Performance focus areas
    pub performance_goals: Vec<PerformanceGoal>,
    /// Free-text recovery practices (sleep, sauna, HRV tracking, ...)
    pub recovery_practices: Vec<String>,
}

/// The single live user profile, mutated field-by-field by ingestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Body composition data
    pub body: BodyComposition,
    /// Nutrition goals
    pub goals: Vec<NutritionGoal>,
    /// Health context
    pub health: HealthProfile,
    /// Training context
    pub training: TrainingProfile,
    /// Foods the user enjoys
    pub taste_preferences: Vec<String>,
    /// Foods the user avoids
    pub avoidances: Vec<String>,
    /// Pantry staples always kept on hand
    pub grocery_staples: Vec<String>,
    /// Free-text dessert cadence ("few times/week", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dessert_cadence: Option<String>,
    /// Preferred meals-plus-snacks count per day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_cadence: Option<u32>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            body: BodyComposition::default(),
            goals: Vec::new(),
            health: HealthProfile::default(),
            training: TrainingProfile::default(),
            taste_preferences: Vec::new(),
            avoidances: Vec::new(),
            grocery_staples: Vec::new(),
            dessert_cadence: None,
            meal_cadence: None,
        }
    }
}
