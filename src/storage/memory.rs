// ABOUTME: In-memory storage backend for tests and ephemeral sessions
// ABOUTME: A single RwLock serializes writes across all three keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StorageProvider;
use crate::errors::CoachResult;
use crate::models::{DailyLog, Plan, Profile};

#[derive(Debug, Default)]
struct State {
    profile: Option<Profile>,
    plan: Option<Plan>,
    logs: Vec<DailyLog>,
}

/// In-memory storage; state is dropped with the value
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    state: RwLock<State>,
}

impl InMemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorage {
    async fn fetch_profile(&self) -> CoachResult<Option<Profile>> {
        Ok(self.state.read().await.profile.clone())
    }

    async fn save_profile(&self, profile: &Profile) -> CoachResult<()> {
        self.state.write().await.profile = Some(profile.clone());
        Ok(())
    }

    async fn fetch_plan(&self) -> CoachResult<Option<Plan>> {
        Ok(self.state.read().await.plan.clone())
    }

    async fn save_plan(&self, plan: &Plan) -> CoachResult<()> {
        self.state.write().await.plan = Some(plan.clone());
        Ok(())
    }

    async fn fetch_logs(&self) -> CoachResult<Vec<DailyLog>> {
        Ok(self.state.read().await.logs.clone())
    }

    async fn save_log(&self, log: &DailyLog) -> CoachResult<()> {
        let mut state = self.state.write().await;
        match state.logs.iter_mut().find(|existing| existing.date == log.date) {
            Some(existing) => *existing = log.clone(),
            None => state.logs.push(log.clone()),
        }
        Ok(())
    }
}
