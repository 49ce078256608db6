// ABOUTME: Criterion benchmarks for plan derivation and ingestion
// ABOUTME: Measures plan generation, routing, and advisor evaluation cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the derivation pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use macro_coach::catalog::ids;
use macro_coach::config::{AdvisorThresholds, CoachConfig};
use macro_coach::intake::AnswerRouter;
use macro_coach::intelligence::{AdjustmentAdvisor, PlanGenerator};
use macro_coach::models::{
    BiologicalSex, BodyComposition, DayContext, Macros, Profile, RawAnswers, TrainingLoad,
    TrainingProfile,
};

fn bench_profile() -> Profile {
    Profile {
        body: BodyComposition {
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            age_years: Some(32),
            biological_sex: Some(BiologicalSex::Male),
            ..BodyComposition::default()
        },
        training: TrainingProfile {
            load: TrainingLoad::Variable,
            ..TrainingProfile::default()
        },
        taste_preferences: vec!["Chicken".to_owned(), "Rice".to_owned()],
        grocery_staples: vec!["Oats".to_owned()],
        dessert_cadence: Some("few times/week".to_owned()),
        ..Profile::default()
    }
}

fn bench_answers() -> RawAnswers {
    let mut answers = RawAnswers::new();
    answers.insert(ids::TRAINING_LOAD, "heavy block this cycle".to_owned());
    answers.insert(ids::BODY_BASICS, "80 kg, 180 cm, 18 percent".to_owned());
    answers.insert(ids::FAVORITE_FOODS, "tacos, eggs, rice bowls".to_owned());
    answers.insert(ids::GROCERY_STAPLES, "oats, greek yogurt, rice".to_owned());
    answers.insert(ids::HIGH_FUEL_DAYS, "monday, thursday, saturday".to_owned());
    answers
}

fn plan_generation_benchmark(c: &mut Criterion) {
    let generator = PlanGenerator::new(CoachConfig::default()).expect("valid default config");
    let profile = bench_profile();
    let now = Utc::now();

    c.bench_function("generate_plan_variable_load", |b| {
        b.iter(|| generator.generate_plan(black_box(&profile), black_box(now)));
    });
}

fn ingestion_benchmark(c: &mut Criterion) {
    let router = AnswerRouter::new(&CoachConfig::default()).expect("valid default config");
    let answers = bench_answers();

    c.bench_function("apply_answers_full_round", |b| {
        b.iter(|| router.apply(black_box(Profile::default()), black_box(&answers)));
    });
}

fn advisor_benchmark(c: &mut Criterion) {
    let advisor = AdjustmentAdvisor::new(AdvisorThresholds::default());
    let context = DayContext {
        date: NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date"),
        training_load: TrainingLoad::Heavy,
        recovery_flag: true,
        target_macros: Some(Macros::new(2600.0, 150.0, 300.0, 75.0)),
        consumed_macros: Some(Macros::new(2100.0, 130.0, 200.0, 70.0)),
    };

    c.bench_function("advisor_rule_chain", |b| {
        b.iter(|| advisor.suggest(black_box(&context)));
    });
}

criterion_group!(
    benches,
    plan_generation_benchmark,
    ingestion_benchmark,
    advisor_benchmark
);
criterion_main!(benches);
