// ABOUTME: Persistence collaborator contract plus reference implementations
// ABOUTME: At-most-one-writer-per-key semantics over profile, plan, and logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage collaborator
//!
//! The engine requires only three logical keys (profile, plan, daily logs)
//! with serialized writes per key and structured JSON-like encoding. Daily
//! logs are upserted by UTC calendar day. Persistence failures are logged by
//! callers and never retried by the core.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;

use async_trait::async_trait;

use crate::errors::CoachResult;
use crate::models::{DailyLog, Plan, Profile};

/// Key-value persistence contract consumed by the coach service
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Fetch the live profile, if one has been saved
    async fn fetch_profile(&self) -> CoachResult<Option<Profile>>;

    /// Save (replace) the live profile
    async fn save_profile(&self, profile: &Profile) -> CoachResult<()>;

    /// Fetch the active plan, if one has been saved
    async fn fetch_plan(&self) -> CoachResult<Option<Plan>>;

    /// Save (replace) the active plan
    async fn save_plan(&self, plan: &Plan) -> CoachResult<()>;

    /// Fetch all daily logs
    async fn fetch_logs(&self) -> CoachResult<Vec<DailyLog>>;

    /// Upsert a daily log, keyed by its calendar day
    async fn save_log(&self, log: &DailyLog) -> CoachResult<()>;
}
