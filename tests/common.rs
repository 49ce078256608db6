// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, profile builders, and answer helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

//! Shared test utilities for `macro_coach`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::sync::Once;

use macro_coach::models::{
    BiologicalSex, BodyComposition, Profile, RawAnswers, TrainingLoad, TrainingProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A filled-in profile for plan generation tests
pub fn athlete_profile(load: TrainingLoad) -> Profile {
    Profile {
        name: "Sam".to_owned(),
        body: BodyComposition {
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            body_fat_pct: Some(18.0),
            lean_mass_kg: Some(65.0),
            biological_sex: Some(BiologicalSex::Male),
            age_years: Some(32),
        },
        training: TrainingProfile {
            load,
            ..TrainingProfile::default()
        },
        taste_preferences: vec!["Chicken".to_owned(), "Rice".to_owned()],
        grocery_staples: vec!["Rice".to_owned(), "Greek yogurt".to_owned()],
        ..Profile::default()
    }
}

/// Build a `RawAnswers` map from id/answer pairs
pub fn answers(pairs: &[(u32, &str)]) -> RawAnswers {
    pairs
        .iter()
        .map(|(id, text)| (*id, (*text).to_owned()))
        .collect()
}
