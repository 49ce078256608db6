// ABOUTME: End-to-end tests for the coach service over real storage backends
// ABOUTME: Ingest-then-plan flow, meal logging, day context, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach service flow tests
//!
//! Drives the whole pipeline the way an embedding application would: apply
//! questionnaire answers, confirm profile and plan land in storage, log meals
//! through the estimator, and ask for adjustments.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use macro_coach::catalog::ids;
use macro_coach::coach::CoachService;
use macro_coach::config::CoachConfig;
use macro_coach::errors::ErrorCode;
use macro_coach::estimator::{MealTextEstimator, MockEstimator};
use macro_coach::models::{Macros, MealEntry, TemplateKind, TrainingLoad};
use macro_coach::storage::{FileStorage, InMemoryStorage, StorageProvider};

mod common;

fn service() -> CoachService<InMemoryStorage> {
    common::init_test_logging();
    CoachService::new(InMemoryStorage::new(), CoachConfig::default()).unwrap()
}

#[tokio::test]
async fn test_apply_answers_persists_profile_and_plan() {
    let storage = InMemoryStorage::new();
    let service = {
        common::init_test_logging();
        CoachService::new(storage, CoachConfig::default()).unwrap()
    };

    let (profile, plan) = service
        .apply_answers(&common::answers(&[
            (ids::TRAINING_LOAD, "heavy block"),
            (ids::BODY_BASICS, "80 kg, 180 cm"),
            (ids::GROCERY_STAPLES, "oats, rice"),
        ]))
        .await;

    assert_eq!(profile.training.load, TrainingLoad::Heavy);
    assert!(plan
        .templates
        .iter()
        .any(|t| t.kind == TemplateKind::Training));
}

#[tokio::test]
async fn test_apply_answers_through_file_storage() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();
    let service = CoachService::new(storage, CoachConfig::default()).unwrap();

    service
        .apply_answers(&common::answers(&[(ids::TRAINING_LOAD, "variable")]))
        .await;

    // A second service over the same directory sees the committed state
    let reopened = FileStorage::new(dir.path()).unwrap();
    let profile = reopened.fetch_profile().await.unwrap().unwrap();
    assert_eq!(profile.training.load, TrainingLoad::Variable);

    let plan = reopened.fetch_plan().await.unwrap().unwrap();
    assert_eq!(plan.templates.len(), 4);
}

#[tokio::test]
async fn test_regenerate_plan_requires_a_profile() {
    let service = service();
    let error = service.regenerate_plan().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    service
        .apply_answers(&common::answers(&[(ids::TRAINING_LOAD, "moderate")]))
        .await;
    assert!(service.regenerate_plan().await.is_ok());
}

#[tokio::test]
async fn test_meal_logging_builds_day_context_totals() {
    let service = service();
    let estimator = MockEstimator::new(&CoachConfig::default()).unwrap();

    service
        .apply_answers(&common::answers(&[
            (ids::TRAINING_LOAD, "heavy"),
            (ids::BODY_BASICS, "80 kg, 180 cm"),
            (ids::RECOVERY_PRACTICES, "sleep tracking"),
        ]))
        .await;

    let log = service
        .log_meal_text("slice of pie at 9am", &estimator)
        .await
        .unwrap();
    assert_eq!(log.entries.len(), 1);
    assert_eq!(log.training_load, TrainingLoad::Heavy);
    assert!(log.recovery_flag);

    let second = service
        .log_meal_text("protein shake at 7am", &estimator)
        .await
        .unwrap();
    assert_eq!(second.entries.len(), 2);
    // Entries stay sorted by timestamp: the 7am shake now leads
    assert!(second.entries[0].description.contains("shake"));

    let context = service.day_context(second.date).await;
    assert_eq!(context.training_load, TrainingLoad::Heavy);
    assert!(context.recovery_flag);
    assert!(context.target_macros.is_some());

    let consumed = context.consumed_macros.unwrap();
    assert_eq!(consumed.calories, 350.0 + 240.0);
}

#[tokio::test]
async fn test_day_without_log_has_no_consumed_macros() {
    let service = service();
    service
        .apply_answers(&common::answers(&[(ids::TRAINING_LOAD, "moderate")]))
        .await;

    let context = service.day_context(Utc::now().date_naive()).await;
    assert!(context.consumed_macros.is_none());
    assert!(context.target_macros.is_some());
    assert!(service.suggest_adjustments(Utc::now().date_naive()).await.is_empty());
}

#[tokio::test]
async fn test_low_fuel_day_produces_adjustment() {
    let service = service();
    service
        .apply_answers(&common::answers(&[
            (ids::TRAINING_LOAD, "moderate"),
            (ids::BODY_BASICS, "80 kg, 180 cm"),
        ]))
        .await;

    // One small salad against a full day's target leaves a big deficit
    let timestamp = Utc::now();
    service
        .log_meal(MealEntry::new(
            timestamp,
            "side salad",
            Some(Macros::new(180.0, 12.0, 14.0, 8.0)),
        ))
        .await;

    let adjustments = service.suggest_adjustments(timestamp.date_naive()).await;
    assert_eq!(adjustments.len(), 1);
    assert!(adjustments[0].message.contains("Fuel is a bit low"));
}

#[tokio::test]
async fn test_unparseable_meal_text_surfaces_retry_condition() {
    let service = service();
    let estimator = MockEstimator::new(&CoachConfig::default()).unwrap();

    let error = service.log_meal_text("   ", &estimator).await.unwrap_err();
    assert!(error.is_parse_failure());
}

#[tokio::test]
async fn test_estimator_suggest_adjustments_matches_advisor() {
    let service = service();
    let estimator = MockEstimator::new(&CoachConfig::default()).unwrap();

    service
        .apply_answers(&common::answers(&[
            (ids::TRAINING_LOAD, "moderate"),
            (ids::BODY_BASICS, "80 kg, 180 cm"),
        ]))
        .await;

    let date = Utc::now().date_naive();
    let context = service.day_context(date).await;

    let from_estimator = estimator.suggest_adjustments(&context).await.unwrap();
    let from_service = service.suggest_adjustments(date).await;
    assert_eq!(from_estimator.len(), from_service.len());
}
