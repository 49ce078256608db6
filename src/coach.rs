// ABOUTME: Orchestration service tying ingestion, plan generation, and logs together
// ABOUTME: Ingestion completes before plan derivation, which completes before persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach service
//!
//! Owns the flow around the pure components: apply questionnaire answers,
//! persist the profile, regenerate and persist the plan, upsert meal logs,
//! and build day contexts for the advisor. Persistence failures are logged
//! and never interrupt in-memory derivation; observers learn about a new
//! plan only after the storage commit.

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::config::{CoachConfig, KeywordTables};
use crate::errors::{AppError, CoachResult};
use crate::estimator::MealTextEstimator;
use crate::intake::AnswerRouter;
use crate::intelligence::{AdjustmentAdvisor, PlanGenerator};
use crate::models::{
    Adjustment, DailyLog, DayContext, MealEntry, Plan, Profile, RawAnswers, TrainingLoad,
};
use crate::storage::StorageProvider;

/// Orchestrates the derivation pipeline over a storage collaborator
pub struct CoachService<S> {
    storage: S,
    router: AnswerRouter,
    generator: PlanGenerator,
    advisor: AdjustmentAdvisor,
    keywords: KeywordTables,
}

impl<S: StorageProvider> CoachService<S> {
    /// Create a service with validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` when the configuration or the
    /// ingestion routing table is invalid.
    pub fn new(storage: S, config: CoachConfig) -> CoachResult<Self> {
        config.validate()?;
        let router = AnswerRouter::new(&config)?;
        let advisor = AdjustmentAdvisor::new(config.advisor.clone());
        let keywords = config.keywords.clone();
        let generator = PlanGenerator::new(config)?;
        Ok(Self {
            storage,
            router,
            generator,
            advisor,
            keywords,
        })
    }

    /// Apply questionnaire answers, then regenerate and persist the plan
    ///
    /// Always returns the updated profile and freshly derived plan; storage
    /// failures are logged and do not interrupt derivation.
    pub async fn apply_answers(&self, answers: &RawAnswers) -> (Profile, Plan) {
        let current = match self.storage.fetch_profile().await {
            Ok(profile) => profile.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "profile fetch failed, starting from defaults");
                Profile::default()
            }
        };

        let updated = self.router.apply(current, answers);
        if let Err(error) = self.storage.save_profile(&updated).await {
            warn!(%error, "profile save failed, continuing in memory");
        }

        let plan = self.generator.generate_plan(&updated, Utc::now());
        match self.storage.save_plan(&plan).await {
            Ok(()) => info!(plan_id = %plan.id, "plan saved"),
            Err(error) => warn!(%error, "plan save failed, continuing in memory"),
        }

        (updated, plan)
    }

    /// Regenerate the plan from the stored profile on demand
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` when no profile has been
    /// ingested yet.
    pub async fn regenerate_plan(&self) -> CoachResult<Plan> {
        let profile = match self.storage.fetch_profile().await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(%error, "profile fetch failed");
                None
            }
        };
        let Some(profile) = profile else {
            return Err(AppError::not_found("profile"));
        };

        let plan = self.generator.generate_plan(&profile, Utc::now());
        match self.storage.save_plan(&plan).await {
            Ok(()) => info!(plan_id = %plan.id, "plan saved"),
            Err(error) => warn!(%error, "plan save failed, continuing in memory"),
        }
        Ok(plan)
    }

    /// Parse free meal text through the estimator and log the entry
    ///
    /// # Errors
    ///
    /// Propagates the estimator's `ErrorCode::ParseFailed` so callers can
    /// prompt the user to rephrase.
    pub async fn log_meal_text(
        &self,
        text: &str,
        estimator: &dyn MealTextEstimator,
    ) -> CoachResult<DailyLog> {
        let entry = estimator.parse_meal_entry(text).await?;
        Ok(self.log_meal(entry).await)
    }

    /// Upsert a meal entry into its calendar day's log
    ///
    /// New logs capture the profile's current training load and recovery
    /// flag; entries stay sorted by timestamp.
    pub async fn log_meal(&self, entry: MealEntry) -> DailyLog {
        let date = entry.timestamp.date_naive();
        let (load, recovery) = self.training_context().await;

        let logs = match self.storage.fetch_logs().await {
            Ok(logs) => logs,
            Err(error) => {
                warn!(%error, "log fetch failed, starting a fresh day log");
                Vec::new()
            }
        };

        let mut log = logs
            .into_iter()
            .find(|existing| existing.date == date)
            .unwrap_or_else(|| DailyLog::new(date, load, recovery));

        log.entries.push(entry);
        log.entries.sort_by_key(|entry| entry.timestamp);

        if let Err(error) = self.storage.save_log(&log).await {
            warn!(%error, "log save failed, continuing in memory");
        }
        log
    }

    /// Build the day context for a date from the stored plan and logs
    pub async fn day_context(&self, date: NaiveDate) -> DayContext {
        let profile = match self.storage.fetch_profile().await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(%error, "profile fetch failed");
                None
            }
        };

        let (load, recovery) = profile.as_ref().map_or(
            (TrainingLoad::Moderate, false),
            |profile| {
                (
                    profile.training.load,
                    self.recovery_flag(profile),
                )
            },
        );

        let consumed = match self.storage.fetch_logs().await {
            Ok(logs) => logs
                .iter()
                .find(|log| log.date == date)
                .map(DailyLog::total_macros),
            Err(error) => {
                warn!(%error, "log fetch failed");
                None
            }
        };

        let selection_profile = profile.unwrap_or_default();
        let target = match self.storage.fetch_plan().await {
            Ok(Some(plan)) => self
                .generator
                .select_template(&plan, &selection_profile, date)
                .map(|template| template.macros),
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "plan fetch failed");
                None
            }
        };

        DayContext {
            date,
            training_load: load,
            recovery_flag: recovery,
            target_macros: target,
            consumed_macros: consumed,
        }
    }

    /// Run the advisor over the day context for a date
    pub async fn suggest_adjustments(&self, date: NaiveDate) -> Vec<Adjustment> {
        let context = self.day_context(date).await;
        self.advisor.suggest(&context)
    }

    async fn training_context(&self) -> (TrainingLoad, bool) {
        match self.storage.fetch_profile().await {
            Ok(Some(profile)) => (profile.training.load, self.recovery_flag(&profile)),
            Ok(None) => (TrainingLoad::Moderate, false),
            Err(error) => {
                warn!(%error, "profile fetch failed");
                (TrainingLoad::Moderate, false)
            }
        }
    }

    fn recovery_flag(&self, profile: &Profile) -> bool {
        profile.training.recovery_practices.iter().any(|practice| {
            KeywordTables::matches_any(practice, &self.keywords.recovery_flag)
        })
    }
}
