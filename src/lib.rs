// ABOUTME: Main library entry point for the conversational macro coaching engine
// ABOUTME: Ingestion, plan derivation, grocery synthesis, and adjustment advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Coach
//!
//! A coaching engine that turns free-text answers from a guided intake
//! questionnaire into a structured nutrition/training profile, derives a
//! personalized energy-and-macro plan from that profile, and reconciles a
//! day's logged intake against the plan to produce corrective guidance.
//!
//! ## Architecture
//!
//! The crate follows a modular architecture, leaves first:
//! - **intake**: unit/token parsers and the answer-id routing table
//! - **intelligence**: energy/macro calculator, template and sample-day
//!   generation, grocery synthesis, and the adjustment rule chain
//! - **models**: shared value types (profile, plan, logs, groceries)
//! - **catalog**: the static questionnaire with its 30 stable ids
//! - **storage** / **estimator**: collaborator contracts with reference
//!   implementations
//! - **coach**: the orchestration service over those collaborators
//!
//! ## Quick Start
//!
//! ```no_run
//! use macro_coach::coach::CoachService;
//! use macro_coach::config::CoachConfig;
//! use macro_coach::models::RawAnswers;
//! use macro_coach::storage::InMemoryStorage;
//!
//! # async fn demo() -> macro_coach::errors::CoachResult<()> {
//! let service = CoachService::new(InMemoryStorage::new(), CoachConfig::default())?;
//!
//! let mut answers = RawAnswers::new();
//! answers.insert(27, "heavy block right now".to_owned());
//! answers.insert(21, "80 kg, 180 cm, about 15 percent".to_owned());
//!
//! let (_profile, plan) = service.apply_answers(&answers).await;
//! assert!(plan.templates.len() >= 2);
//! # Ok(())
//! # }
//! ```

/// Static intake questionnaire catalog with stable ids
pub mod catalog;
/// Orchestration service over storage and estimator collaborators
pub mod coach;
/// Constant tables and keyword tables with documented defaults
pub mod config;
/// Error codes and the unified `AppError` type
pub mod errors;
/// Meal-text estimator collaborator contract and mock
pub mod estimator;
/// Questionnaire intake: parsers and the answer routing table
pub mod intake;
/// Plan derivation: calculator, templates, groceries, advisor
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Shared value types
pub mod models;
/// Persistence collaborator contract and reference backends
pub mod storage;
