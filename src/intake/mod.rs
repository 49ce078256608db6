// ABOUTME: Questionnaire intake: low-level text parsers and answer routing
// ABOUTME: Turns raw free-text answers into typed profile field updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Questionnaire intake
//!
//! [`parsers`] extracts numbers, lists, and unit-suffixed values from free
//! text; [`ingestion`] maps answers onto profile fields through an explicit
//! routing table.

pub mod ingestion;
pub mod parsers;

pub use ingestion::AnswerRouter;
