// ABOUTME: Daily intake logs, meal entries, day context, and adjustments
// ABOUTME: Logs are upserted per calendar day; DayContext is ephemeral
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Macros, TrainingLoad};

/// One logged meal, parsed from free text by the estimator collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Unique identifier
    pub id: Uuid,
    /// When the meal was eaten
    pub timestamp: DateTime<Utc>,
    /// Free-text description as logged
    pub description: String,
    /// Estimated macro breakdown, if the estimator produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
}

impl MealEntry {
    /// Create an entry with a fresh id
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, description: impl Into<String>, macros: Option<Macros>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            description: description.into(),
            macros,
        }
    }
}

/// A calendar day's logged intake plus its training context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    /// Unique identifier
    pub id: Uuid,
    /// UTC calendar day this log covers (upsert key)
    pub date: NaiveDate,
    /// Logged meals, kept sorted by timestamp
    pub entries: Vec<MealEntry>,
    /// Training load captured when the log was opened
    pub training_load: TrainingLoad,
    /// Whether recovery practices apply to this day
    pub recovery_flag: bool,
}

impl DailyLog {
    /// Create an empty log for a day
    #[must_use]
    pub fn new(date: NaiveDate, training_load: TrainingLoad, recovery_flag: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            entries: Vec::new(),
            training_load,
            recovery_flag,
        }
    }

    /// Sum of all entry macro estimates; entries without estimates contribute nothing
    #[must_use]
    pub fn total_macros(&self) -> Macros {
        self.entries
            .iter()
            .filter_map(|entry| entry.macros.as_ref())
            .fold(Macros::default(), |total, macros| total.plus(macros))
    }
}

/// Snapshot of one day used to drive adjustment suggestions
///
/// Constructed on demand from the active plan and the day's log; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayContext {
    /// The day this context describes
    pub date: NaiveDate,
    /// Training load for the day
    pub training_load: TrainingLoad,
    /// Whether recovery practices apply
    pub recovery_flag: bool,
    /// Target macros from the selected template, if a plan exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_macros: Option<Macros>,
    /// Consumed macros summed from the day's log, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_macros: Option<Macros>,
}

/// A corrective recommendation: message plus ordered suggested actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Adjustment {
    /// Unique identifier
    pub id: Uuid,
    /// Human-readable message
    pub message: String,
    /// Ordered suggested actions
    pub actions: Vec<String>,
}

impl Adjustment {
    /// Create an adjustment with a fresh id
    #[must_use]
    pub fn new(message: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(hour: u32, macros: Option<Macros>) -> MealEntry {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let timestamp = date.and_hms_opt(hour, 0, 0).unwrap().and_utc();
        MealEntry::new(timestamp, "test entry", macros)
    }

    #[test]
    fn test_total_macros_skips_missing_estimates() {
        let mut log = DailyLog::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            TrainingLoad::Moderate,
            false,
        );
        log.entries.push(entry_at(8, Some(Macros::new(350.0, 4.0, 45.0, 16.0))));
        log.entries.push(entry_at(12, None));
        log.entries.push(entry_at(18, Some(Macros::new(240.0, 30.0, 12.0, 6.0))));

        let total = log.total_macros();
        assert_eq!(total.calories, 590.0);
        assert_eq!(total.protein, 34.0);
        assert_eq!(total.carbohydrates, 57.0);
        assert_eq!(total.fat, 22.0);
    }
}
